//! Game Configuration
//!
//! Optional defaults for a new game, read from a TOML file.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::errors::{PetError, Result};
use crate::pet::Species;

/// Defaults for starting a game. Every field is optional; anything missing is
/// asked for interactively or falls back to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Pet name
    pub name: Option<String>,

    /// Pet species
    pub species: Option<Species>,

    /// Initial hunger
    pub hunger: Option<i64>,

    /// Initial boredom
    pub boredom: Option<i64>,

    /// Seed for reproducible games
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Configuration directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "virtual-pet", "virtual-pet")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Path of the default config file
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: GameConfig) -> GameConfig {
        GameConfig {
            name: other.name.or(self.name),
            species: other.species.or(self.species),
            hunger: other.hunger.or(self.hunger),
            boredom: other.boredom.or(self.boredom),
            seed: other.seed.or(self.seed),
        }
    }
}

/// Load configuration.
///
/// An explicit path must exist. Without one the default location is used, and
/// a missing file there just means defaults.
pub fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match GameConfig::config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(GameConfig::default()),
        },
    };

    let content = fs::read_to_string(&path).map_err(|e| PetError::ConfigReadError {
        path: path.clone(),
        message: Arc::new(e.to_string()),
    })?;

    parse_config(&content)
}

/// Parse a TOML config document
pub fn parse_config(content: &str) -> Result<GameConfig> {
    toml::from_str(content)
        .map_err(|e| PetError::ConfigurationError(Arc::new(format!("Invalid TOML config: {e}"))))
}
