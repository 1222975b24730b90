//! # trix-scorekeeper
//!
//! Scorekeeping for two four-player card games, 400 and Trix.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: a round is clamped and checked against its
//!    subtype's rules before anything changes. Rejected rounds leave no trace,
//!    not even in the undo history.
//!
//! 2. **One owner**: a single [`Scorekeeper`] owns the score state and its
//!    undo history. Mutation happens through `&mut self`, one action at a time.
//!
//! 3. **Closed rules**: round types are a closed enum with an exhaustive
//!    scoring table, so there is no "unknown subtype" state to handle.
//!
//! ## Architecture
//!
//! - **Snapshot undo**: every undoable action stores the full pre-action
//!   state. The round history is an `im` persistent vector, so snapshots share
//!   storage while staying independent values.
//!
//! - **Derived views**: standings and history rows are recomputed from the
//!   state on demand and never stored.
//!
//! ## Modules
//!
//! - `core`: seats, games, rounds, score state, configuration
//! - `rules`: round subtypes, clamping, validation and point computation
//! - `engine`: applies rounds to a score state
//! - `undo`: bounded snapshot history
//! - `standings`: leader / tie / target-reached view
//! - `report`: history rows and plain-text rendering
//! - `session`: the owning scorekeeper and front-end commands

pub mod core;
pub mod engine;
pub mod error;
pub mod report;
pub mod rules;
pub mod session;
pub mod standings;
pub mod undo;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Game, Round, ScoreState, ScorekeeperConfig, SeatId, Seats, SEAT_COUNT,
};

pub use crate::engine::{Clock, FixedClock, ScoreEngine, SystemClock};

pub use crate::error::{ScoreError, ValidationError};

pub use crate::report::HistoryRow;

pub use crate::rules::{Scored, Subtype};

pub use crate::session::{Command, CommandError, Scorekeeper};

pub use crate::standings::Standing;

pub use crate::undo::UndoManager;
