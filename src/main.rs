use std::path::PathBuf;

use clap::Parser;
use tokio::io::BufReader;

use virtual_pet::config::load_config;
use virtual_pet::interactive::Game;
use virtual_pet::{GameConfig, SessionOptions, Species};

/// Look after a virtual pet before it passes out.
#[derive(Debug, Parser)]
#[command(name = "virtual-pet", version, about)]
struct Cli {
    /// Pet name (asked for if not given)
    #[arg(long)]
    name: Option<String>,

    /// Pet species: cat, dog, rabbit, turtle, parrot or horse
    #[arg(long)]
    species: Option<Species>,

    /// Initial hunger
    #[arg(long, allow_negative_numbers = true)]
    hunger: Option<i64>,

    /// Initial boredom
    #[arg(long, allow_negative_numbers = true)]
    boredom: Option<i64>,

    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log info messages
    #[arg(short, long)]
    verbose: bool,

    /// Log debug messages, including every tick
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn overrides(&self) -> GameConfig {
        GameConfig {
            name: self.name.clone(),
            species: self.species,
            hunger: self.hunger,
            boredom: self.boredom,
            seed: self.seed,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set log level based on flags
    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    // Logs go to stderr so they stay out of the game screen
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting virtual-pet version {}", env!("CARGO_PKG_VERSION"));

    let config = load_config(cli.config.as_deref())?.merge(cli.overrides());
    tracing::debug!(?config, "Loaded configuration");

    let options = SessionOptions {
        seed: config.seed,
        ..SessionOptions::default()
    };

    let input = BufReader::new(tokio::io::stdin());
    let mut game = Game::new(input, std::io::stdout(), config, options);

    match game.run().await {
        Ok(()) => {
            tracing::info!("Game finished");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Game error: {}", e);
            Err(e.into())
        }
    }
}
