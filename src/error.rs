//! Error types.
//!
//! Every error is recoverable: the operation that returns it has left the
//! score state untouched.

use thiserror::Error;

use crate::core::Game;
use crate::rules::Subtype;

/// A round's input breaks the rules of its subtype.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{subtype} rounds are not played in {game}")]
    SubtypeMismatch { game: Game, subtype: Subtype },

    #[error("King: exactly one player must take the king (sum must be 1, got {sum})")]
    KingNotSingle { sum: i64 },

    #[error("{label}: there are {expected} in total (sum must be {expected}, got {actual})")]
    WrongTotal {
        label: &'static str,
        expected: i64,
        actual: i64,
    },

    #[error("Trix: places must be exactly 1,2,3,4 with each place used once (got {places:?})")]
    NotAPermutation { places: [i64; 4] },

    #[error("points too large: a running total would overflow")]
    Overflow,
}

/// Errors from score-keeping operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no rounds to delete")]
    NoRounds,

    #[error("nothing to undo")]
    NothingToUndo,
}
