//! Score state: names, totals, target and round history for one table.
//!
//! ## ScoreState
//!
//! - Seat names and running totals
//! - Optional target score
//! - Ordered round history (append-only, delete-last)
//! - Currently selected game
//!
//! Fields are read through accessors. Mutation is crate-private and goes
//! through the engine and the undo manager, so the presentation layer cannot
//! put totals and rounds out of step.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::game::Game;
use super::round::Round;
use super::seat::{SeatId, Seats};

/// Score state for one table.
///
/// Uses an `im` persistent vector for the round history, so cloning a state
/// for the undo history shares round storage instead of copying it. Clones
/// are still fully independent values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub(crate) names: Seats<String>,

    pub(crate) target: Option<i64>,

    /// Sum of the points of every round in `rounds`.
    pub(crate) totals: Seats<i64>,

    pub(crate) rounds: Vector<Round>,

    pub(crate) game: Game,
}

impl ScoreState {
    /// Create a fresh state with the given seat names.
    #[must_use]
    pub fn new(names: Seats<String>) -> Self {
        Self {
            names,
            target: None,
            totals: Seats::with_value(0),
            rounds: Vector::new(),
            game: Game::default(),
        }
    }

    /// Seat names in table order.
    #[must_use]
    pub fn names(&self) -> &Seats<String> {
        &self.names
    }

    /// Name of one seat.
    #[must_use]
    pub fn name(&self, seat: SeatId) -> &str {
        &self.names[seat]
    }

    /// Target score, if one is set.
    #[must_use]
    pub fn target(&self) -> Option<i64> {
        self.target
    }

    /// Running totals in table order.
    #[must_use]
    pub fn totals(&self) -> &Seats<i64> {
        &self.totals
    }

    /// Recorded rounds, oldest first.
    #[must_use]
    pub fn rounds(&self) -> &Vector<Round> {
        &self.rounds
    }

    /// Most recent round.
    #[must_use]
    pub fn last_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    /// Number of recorded rounds.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Currently selected game.
    #[must_use]
    pub fn game(&self) -> Game {
        self.game
    }

    /// Index the next recorded round will get.
    #[must_use]
    pub fn next_round_index(&self) -> usize {
        self.rounds.len() + 1
    }
}

impl Default for ScoreState {
    fn default() -> Self {
        Self::new(super::config::ScorekeeperConfig::default().default_names)
    }
}
