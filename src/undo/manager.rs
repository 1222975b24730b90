//! Bounded undo history of full-state snapshots.

use std::collections::VecDeque;

use tracing::debug;

use crate::core::{ScoreState, DEFAULT_UNDO_CAPACITY};
use crate::error::ScoreError;

/// Stack of score-state snapshots, newest last.
///
/// Uses a FIFO eviction strategy: when full, the oldest snapshot is dropped.
/// Snapshots are independent values; changing the live state afterwards
/// never changes a stored snapshot.
#[derive(Clone, Debug)]
pub struct UndoManager {
    history: VecDeque<ScoreState>,
    capacity: usize,
}

impl UndoManager {
    /// Create an undo manager holding at most `capacity` snapshots.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Undo capacity must be at least 1");
        Self {
            history: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a copy of `state`.
    ///
    /// If the history is full, the oldest snapshot is removed and returned so
    /// a speculative push can be reverted exactly with [`rollback_push`].
    ///
    /// [`rollback_push`]: UndoManager::rollback_push
    pub fn push_snapshot(&mut self, state: &ScoreState) -> Option<ScoreState> {
        let evicted = if self.history.len() >= self.capacity {
            self.history.pop_front()
        } else {
            None
        };
        self.history.push_back(state.clone());
        debug!(depth = self.history.len(), evicted = evicted.is_some(), "snapshot pushed");
        evicted
    }

    /// Revert the most recent push without restoring it.
    ///
    /// `evicted` is whatever that push returned; it goes back to the bottom of
    /// the history.
    pub fn rollback_push(&mut self, evicted: Option<ScoreState>) {
        self.history.pop_back();
        if let Some(oldest) = evicted {
            self.history.push_front(oldest);
        }
        debug!(depth = self.history.len(), "snapshot rolled back");
    }

    /// Remove and return the most recent snapshot.
    pub fn pop(&mut self) -> Option<ScoreState> {
        self.history.pop_back()
    }

    /// Replace `live` with the most recent snapshot.
    pub fn pop_and_restore(&mut self, live: &mut ScoreState) -> Result<(), ScoreError> {
        let snapshot = self.pop().ok_or(ScoreError::NothingToUndo)?;
        *live = snapshot;
        debug!(depth = self.history.len(), "snapshot restored");
        Ok(())
    }

    /// Most recent snapshot, if any.
    #[must_use]
    pub fn peek(&self) -> Option<&ScoreState> {
        self.history.back()
    }

    /// Number of snapshots held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Check if there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Check if there is something to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Maximum number of snapshots held.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all snapshots.
    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Iterate over snapshots, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ScoreState> {
        self.history.iter()
    }
}

impl Default for UndoManager {
    fn default() -> Self {
        Self::new(DEFAULT_UNDO_CAPACITY)
    }
}
