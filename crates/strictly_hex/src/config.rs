//! Engine configuration loaded from TOML.

use super::error::ConfigError;
use super::game::Game;
use super::types::Adjacency;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings used to start a game.
///
/// ```toml
/// size = 11
/// adjacency = "hex"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Grid dimension.
    #[serde(default = "default_size")]
    size: i32,

    /// Neighbour rule for connectivity.
    #[serde(default)]
    adjacency: Adjacency,
}

fn default_size() -> i32 {
    11
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            adjacency: Adjacency::default(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(size = config.size, adjacency = %config.adjacency, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialization cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size <= 0 {
            return Err(ConfigError::new(format!(
                "size must be positive, got {}",
                self.size
            )));
        }
        Ok(())
    }

    /// Starts a game with these settings.
    #[instrument]
    pub fn new_game(&self) -> Result<Game, ConfigError> {
        self.validate()?;
        Game::with_adjacency(self.size, self.adjacency)
            .map_err(|e| ConfigError::new(e.to_string()))
    }
}
