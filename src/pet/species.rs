//! Pet species.
//!
//! The set of species is closed; each one has a fixed utterance.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::PetError;

/// Kind of animal a pet is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Cat,
    Dog,
    Rabbit,
    Turtle,
    Parrot,
    Horse,
}

impl Species {
    /// All species, in menu order.
    pub const ALL: [Species; 6] = [
        Species::Cat,
        Species::Dog,
        Species::Rabbit,
        Species::Turtle,
        Species::Parrot,
        Species::Horse,
    ];

    /// The fixed utterance of this species.
    pub fn speak(self) -> &'static str {
        match self {
            Species::Cat => "Meow",
            Species::Dog => "Woof",
            Species::Rabbit => "[Rabbit Noises]",
            Species::Turtle => "[Turtle Noises]",
            Species::Parrot => "Ca-caw! You're funny!",
            Species::Horse => "Weugh",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Species::Cat => "Cat",
            Species::Dog => "Dog",
            Species::Rabbit => "Rabbit",
            Species::Turtle => "Turtle",
            Species::Parrot => "Parrot",
            Species::Horse => "Horse",
        }
    }

    /// Look a species up by its zero-based menu index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Species {
    type Err = PetError;

    /// Accepts a species name (any case) or a one-based menu number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(number) = trimmed.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(Self::from_index)
                .ok_or_else(|| PetError::UnknownSpecies(Arc::new(trimmed.to_string())));
        }

        Self::ALL
            .into_iter()
            .find(|species| species.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| PetError::UnknownSpecies(Arc::new(trimmed.to_string())))
    }
}
