//! Core data model: seats, games, rounds, score state and configuration.

pub mod config;
pub mod game;
pub mod round;
pub mod seat;
pub mod state;

pub use config::{default_name, ConfigError, ScorekeeperConfig, DEFAULT_UNDO_CAPACITY};
pub use game::{Game, UnknownGame};
pub use round::{normalize_note, Round};
pub use seat::{SeatId, Seats, SEAT_COUNT};
pub use state::ScoreState;
