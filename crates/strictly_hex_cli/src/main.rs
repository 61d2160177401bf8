//! Strictly Hex - terminal driver for the connection game engine.

#![warn(missing_docs)]

mod cli;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.engine_config().context("Invalid engine configuration")?;
    let game = config.new_game().context("Failed to start game")?;
    info!(size = *config.size(), adjacency = %config.adjacency(), "Starting game");

    let mut stdout = std::io::stdout();
    match cli.command {
        Command::Play => {
            let stdin = std::io::stdin();
            session::play(game, stdin.lock(), &mut stdout)?;
        }
        Command::Replay { moves } => {
            session::replay(game, &moves, &mut stdout)?;
        }
    }

    Ok(())
}
