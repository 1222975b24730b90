//! Recorded rounds.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::game::Game;
use super::seat::Seats;
use crate::rules::Subtype;

/// One scored round, as it appears in the history table.
///
/// Rounds are immutable once recorded; the only way to get rid of one is to
/// delete the most recent round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based position in the history.
    pub index: usize,

    /// When the round was recorded (UTC). Display only.
    pub timestamp: OffsetDateTime,

    /// Optional annotation. Never blank: blank notes are stored as `None`.
    pub note: Option<String>,

    pub game: Game,

    pub subtype: Subtype,

    /// Per-seat input after clamping. Meaning depends on `subtype`.
    pub input: Seats<i64>,

    /// Signed delta applied to each seat's total.
    pub points: Seats<i64>,
}

impl Round {
    /// Sum of this round's point deltas across seats, widened so that
    /// unbounded manual points cannot overflow it.
    #[must_use]
    pub fn points_sum(&self) -> i128 {
        self.points.sum()
    }
}

/// Trim a note, mapping blank to `None`.
#[must_use]
pub fn normalize_note(note: Option<&str>) -> Option<String> {
    note.map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}
