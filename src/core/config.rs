//! Scorekeeper configuration.
//!
//! Defaults match a fresh table: four "Player N" names and an undo history of
//! 50 snapshots, starting on 400 with no target. A JSON file can override any field; missing
//! fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::game::Game;
use super::seat::{SeatId, Seats};

/// Default number of undo snapshots kept.
pub const DEFAULT_UNDO_CAPACITY: usize = 50;

/// Errors loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Scorekeeper configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorekeeperConfig {
    /// Maximum snapshots in the undo history; the oldest is dropped beyond it.
    pub undo_capacity: usize,

    /// Names used for fresh tables and when a name is cleared.
    pub default_names: Seats<String>,

    /// Game selected on a fresh table.
    pub initial_game: Game,

    /// Target score on a fresh table. New games clear it.
    pub initial_target: Option<i64>,
}

impl Default for ScorekeeperConfig {
    fn default() -> Self {
        Self {
            undo_capacity: DEFAULT_UNDO_CAPACITY,
            default_names: Seats::new(default_name),
            initial_game: Game::default(),
            initial_target: None,
        }
    }
}

/// "Player N" for the given seat.
#[must_use]
pub fn default_name(seat: SeatId) -> String {
    format!("Player {}", seat.number())
}

impl ScorekeeperConfig {
    /// Set the undo history capacity.
    #[must_use]
    pub fn with_undo_capacity(mut self, capacity: usize) -> Self {
        self.undo_capacity = capacity;
        self
    }

    /// Set the default seat names.
    #[must_use]
    pub fn with_default_names(mut self, names: [&str; 4]) -> Self {
        self.default_names = Seats::from(names.map(str::to_string));
        self
    }

    /// Set the game selected on a fresh table.
    #[must_use]
    pub fn with_initial_game(mut self, game: Game) -> Self {
        self.initial_game = game;
        self
    }

    /// Set the target score on a fresh table.
    #[must_use]
    pub fn with_initial_target(mut self, target: Option<i64>) -> Self {
        self.initial_target = target;
        self
    }

    /// Parse a configuration from JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.undo_capacity == 0 {
            return Err(ConfigError::Invalid(
                "undo_capacity must be at least 1".to_string(),
            ));
        }
        if let Some((seat, _)) = self.default_names.iter().find(|(_, n)| n.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "default name for {} must not be blank",
                seat
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScorekeeperConfig::default();
        assert_eq!(config.undo_capacity, 50);
        assert_eq!(config.default_names[SeatId::new(0).unwrap()], "Player 1");
        assert_eq!(config.default_names[SeatId::new(3).unwrap()], "Player 4");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ScorekeeperConfig::default()
            .with_undo_capacity(5)
            .with_default_names(["N", "E", "S", "W"])
            .with_initial_game(Game::Trix)
            .with_initial_target(Some(400));

        assert_eq!(config.undo_capacity, 5);
        assert_eq!(config.initial_target, Some(400));
        assert_eq!(config.initial_game, Game::Trix);
        assert_eq!(config.default_names[SeatId::new(2).unwrap()], "S");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ScorekeeperConfig::from_json_str(r#"{"undo_capacity": 10}"#).unwrap();
        assert_eq!(config.undo_capacity, 10);
        assert_eq!(config.initial_game, Game::FourHundred);
        assert_eq!(config.initial_target, None);
        assert_eq!(config.default_names, ScorekeeperConfig::default().default_names);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = ScorekeeperConfig::from_json_str(r#"{"undo_capacity": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = ScorekeeperConfig::from_json_str(r#"{"undo_capacity": "many"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = ScorekeeperConfig::from_json_str(
            r#"{"default_names": ["a", " ", "c", "d"]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_serialization() {
        let config = ScorekeeperConfig::default().with_undo_capacity(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized = ScorekeeperConfig::from_json_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
