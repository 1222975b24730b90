//! The scorekeeper: sole owner of the score state and its undo history.

use tracing::{debug, info};

use crate::core::{Game, Round, ScoreState, ScorekeeperConfig, SeatId, Seats};
use crate::engine::{Clock, ScoreEngine, SystemClock};
use crate::error::ScoreError;
use crate::report::{self, HistoryRow};
use crate::rules::Subtype;
use crate::standings::Standing;
use crate::undo::UndoManager;

/// Owns one table's score state and undo history.
///
/// All mutation goes through `&mut self`, one action at a time. Undoable
/// actions snapshot the state as it was just before they ran:
///
/// | action | snapshot |
/// |---|---|
/// | add round | yes, rolled back if the round is rejected |
/// | delete last round | yes, unless there is no round |
/// | new game | yes |
/// | switch game | yes, unless the game is already selected |
/// | set target | yes, unless the target is unchanged |
/// | rename seat | no |
#[derive(Debug)]
pub struct Scorekeeper {
    state: ScoreState,
    undo: UndoManager,
    engine: ScoreEngine,
}

impl Scorekeeper {
    /// Create a scorekeeper for a fresh table.
    ///
    /// `config` should already be validated; an `undo_capacity` of 0 panics.
    #[must_use]
    pub fn new(config: ScorekeeperConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Create a scorekeeper that stamps rounds with `clock`.
    #[must_use]
    pub fn with_clock(config: ScorekeeperConfig, clock: impl Clock + 'static) -> Self {
        let mut state = ScoreState::new(config.default_names.clone());
        state.game = config.initial_game;
        state.target = config.initial_target;
        Self {
            state,
            undo: UndoManager::new(config.undo_capacity),
            engine: ScoreEngine::with_clock(config.default_names, clock),
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &ScoreState {
        &self.state
    }

    /// Undo history.
    #[must_use]
    pub fn undo_history(&self) -> &UndoManager {
        &self.undo
    }

    /// Check if there is something to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.undo.can_undo()
    }

    /// Number of undo steps available.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Record a round of the currently selected game.
    pub fn add_round(
        &mut self,
        subtype: Subtype,
        raw: Seats<i64>,
        note: Option<&str>,
    ) -> Result<Round, ScoreError> {
        let game = self.state.game();
        self.add_round_for(game, subtype, raw, note)
    }

    /// Record a round of `game`.
    ///
    /// If the round is rejected, both the state and the undo history are left
    /// exactly as they were.
    pub fn add_round_for(
        &mut self,
        game: Game,
        subtype: Subtype,
        raw: Seats<i64>,
        note: Option<&str>,
    ) -> Result<Round, ScoreError> {
        let evicted = self.undo.push_snapshot(&self.state);
        match self.engine.add_round(&mut self.state, game, subtype, raw, note) {
            Ok(round) => Ok(round),
            Err(err) => {
                self.undo.rollback_push(evicted);
                Err(err.into())
            }
        }
    }

    /// Delete the most recent round.
    pub fn delete_last_round(&mut self) -> Result<Round, ScoreError> {
        if self.state.rounds().is_empty() {
            return Err(ScoreError::NoRounds);
        }
        self.undo.push_snapshot(&self.state);
        self.engine.delete_last_round(&mut self.state)
    }

    /// Start a new game. Names and the selected game are kept.
    pub fn new_game(&mut self) {
        self.undo.push_snapshot(&self.state);
        self.engine.reset_game(&mut self.state);
        info!("new game started");
    }

    /// Select the game that following rounds belong to.
    pub fn switch_game(&mut self, game: Game) {
        if self.state.game() == game {
            return;
        }
        self.undo.push_snapshot(&self.state);
        self.engine.switch_game(&mut self.state, game);
        info!(%game, "game switched");
    }

    /// Rename a seat. A blank name restores the default. Not undoable on its
    /// own.
    pub fn rename_seat(&mut self, seat: SeatId, name: &str) {
        self.engine.rename_seat(&mut self.state, seat, name);
        debug!(%seat, name = self.state.name(seat), "seat renamed");
    }

    /// Set or clear the target score.
    pub fn set_target(&mut self, target: Option<i64>) {
        if self.state.target() == target {
            return;
        }
        self.undo.push_snapshot(&self.state);
        self.engine.set_target(&mut self.state, target);
        debug!(?target, "target set");
    }

    /// Revert the most recent undoable action.
    pub fn undo(&mut self) -> Result<(), ScoreError> {
        self.undo.pop_and_restore(&mut self.state)?;
        info!(remaining = self.undo.len(), "undone");
        Ok(())
    }

    /// Current standing.
    #[must_use]
    pub fn standing(&self) -> Standing {
        Standing::of(&self.state)
    }

    /// History table rows, oldest first.
    #[must_use]
    pub fn history_rows(&self) -> Vec<HistoryRow> {
        report::history_rows(&self.state)
    }
}

impl Default for Scorekeeper {
    fn default() -> Self {
        Self::new(ScorekeeperConfig::default())
    }
}
