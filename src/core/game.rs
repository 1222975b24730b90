//! The two games the scorekeeper knows about.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which card game is being scored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Game {
    /// "400": points are entered per player by hand.
    #[default]
    FourHundred,
    /// Trix: points are computed from the contract played.
    Trix,
}

impl Game {
    /// Short label used in tables ("400", "TRIX").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Game::FourHundred => "400",
            Game::Trix => "TRIX",
        }
    }

    /// One-line hint on how rounds of this game are entered.
    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Game::FourHundred => "400: enter each player's points for the round by hand.",
            Game::Trix => "Trix: pick the contract and enter counts or places; points are computed.",
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for an unrecognised game name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown game '{0}' (expected 400 or trix)")]
pub struct UnknownGame(pub String);

impl FromStr for Game {
    type Err = UnknownGame;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "400" | "fourhundred" | "four-hundred" => Ok(Game::FourHundred),
            "trix" => Ok(Game::Trix),
            other => Err(UnknownGame(other.to_string())),
        }
    }
}
