//! Command-line interface for strictly_hex.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_hex::{Adjacency, ConfigError, EngineConfig, Move};
use tracing::instrument;

/// Strictly Hex - play a connection game in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_hex")]
#[command(about = "Hex-style connection game rules engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to an engine config TOML file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Grid size, overrides the config file
    #[arg(short, long, global = true)]
    pub size: Option<i32>,

    /// Neighbour rule (orthogonal or hex), overrides the config file
    #[arg(short, long, global = true)]
    pub adjacency: Option<Adjacency>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, one move per line ("row,col") on stdin
    Play,

    /// Apply a fixed list of moves and print the final position
    Replay {
        /// Moves in "row,col" notation
        moves: Vec<Move>,
    },
}

impl Cli {
    /// Resolves the engine settings: config file first, then flag overrides.
    #[instrument(skip(self))]
    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_file(path)?,
            None => EngineConfig::default(),
        };
        if let Some(size) = self.size {
            config = config.with_size(size);
        }
        if let Some(adjacency) = self.adjacency {
            config = config.with_adjacency(adjacency);
        }
        config.validate()?;
        Ok(config)
    }
}
