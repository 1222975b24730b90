//! Score engine: applies validated rounds to a score state.
//!
//! The engine only mutates state. It never takes undo snapshots; callers
//! that want undo (see `session::Scorekeeper`) snapshot before calling in.

use tracing::debug;

use super::clock::{Clock, SystemClock};
use crate::core::{normalize_note, Game, Round, ScoreState, SeatId, Seats};
use crate::error::{ScoreError, ValidationError};
use crate::rules::{self, Subtype};

/// Applies rounds to a [`ScoreState`].
pub struct ScoreEngine {
    clock: Box<dyn Clock>,
    default_names: Seats<String>,
}

impl ScoreEngine {
    /// Create an engine using the wall clock.
    #[must_use]
    pub fn new(default_names: Seats<String>) -> Self {
        Self::with_clock(default_names, SystemClock)
    }

    /// Create an engine with a custom clock.
    #[must_use]
    pub fn with_clock(default_names: Seats<String>, clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            default_names,
        }
    }

    /// Validate and record a round.
    ///
    /// On success the round's points are added to the totals and the new
    /// round is returned. On failure the state is not touched.
    pub fn add_round(
        &self,
        state: &mut ScoreState,
        game: Game,
        subtype: Subtype,
        raw: Seats<i64>,
        note: Option<&str>,
    ) -> Result<Round, ValidationError> {
        rules::check_game(game, subtype)?;
        let scored = rules::score(subtype, &raw).inspect_err(|err| {
            debug!(%subtype, input = ?raw.as_array(), error = %err, "round rejected");
        })?;
        let totals = state.totals.checked_add(&scored.points).ok_or_else(|| {
            debug!(%subtype, points = ?scored.points.as_array(), "round rejected: totals overflow");
            ValidationError::Overflow
        })?;

        let round = Round {
            index: state.next_round_index(),
            timestamp: self.clock.now(),
            note: normalize_note(note),
            game,
            subtype,
            input: scored.input,
            points: scored.points,
        };

        state.totals = totals;
        state.rounds.push_back(round.clone());

        debug!(
            index = round.index,
            %subtype,
            points = ?round.points.as_array(),
            totals = ?state.totals.as_array(),
            "round recorded"
        );
        Ok(round)
    }

    /// Remove the most recent round and take its points back off the totals.
    pub fn delete_last_round(&self, state: &mut ScoreState) -> Result<Round, ScoreError> {
        let last = state.rounds.last().ok_or(ScoreError::NoRounds)?;
        let totals = state
            .totals
            .checked_sub(&last.points)
            .ok_or(ValidationError::Overflow)?;
        let round = state.rounds.pop_back().ok_or(ScoreError::NoRounds)?;
        state.totals = totals;

        debug!(index = round.index, totals = ?state.totals.as_array(), "round deleted");
        Ok(round)
    }

    /// Start a new game: no rounds, zero totals, no target.
    ///
    /// Names and the selected game are kept.
    pub fn reset_game(&self, state: &mut ScoreState) {
        state.rounds.clear();
        state.totals = Seats::with_value(0);
        state.target = None;
    }

    /// Select which game subsequent rounds belong to.
    pub fn switch_game(&self, state: &mut ScoreState, game: Game) {
        state.game = game;
    }

    /// Rename a seat. A blank name restores the seat's default name.
    pub fn rename_seat(&self, state: &mut ScoreState, seat: SeatId, name: &str) {
        let name = name.trim();
        state.names[seat] = if name.is_empty() {
            self.default_names[seat].clone()
        } else {
            name.to_string()
        };
    }

    /// Set or clear the target score.
    pub fn set_target(&self, state: &mut ScoreState, target: Option<i64>) {
        state.target = target;
    }
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new(crate::core::ScorekeeperConfig::default().default_names)
    }
}

impl std::fmt::Debug for ScoreEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreEngine")
            .field("default_names", &self.default_names)
            .finish_non_exhaustive()
    }
}
