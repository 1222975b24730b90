//! Derived standings: who leads, whether seats are tied, whether the target
//! has been reached.
//!
//! Standings are computed from the current totals on demand and never
//! stored.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ScoreState, SeatId, Seats};

/// Current standing of the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Standing {
    /// Two or more seats share the highest total. No leader.
    Tie {
        seats: SmallVec<[SeatId; 4]>,
        total: i64,
    },
    /// One seat has the highest total.
    Leader { seat: SeatId, total: i64 },
    /// The single leader is at or above the target.
    TargetReached {
        seat: SeatId,
        total: i64,
        target: i64,
    },
}

impl Standing {
    /// Compute the standing for the given totals and optional target.
    ///
    /// ```
    /// use trix_scorekeeper::core::Seats;
    /// use trix_scorekeeper::standings::Standing;
    ///
    /// let standing = Standing::compute(&Seats::from([10, 20, 10, 20]), None);
    /// assert!(standing.is_tie());
    /// ```
    #[must_use]
    pub fn compute(totals: &Seats<i64>, target: Option<i64>) -> Self {
        let max = totals.values().copied().max().unwrap_or(0);
        let leaders: SmallVec<[SeatId; 4]> = totals
            .iter()
            .filter(|(_, total)| **total == max)
            .map(|(seat, _)| seat)
            .collect();

        match leaders.as_slice() {
            [seat] => match target {
                Some(target) if max >= target => Standing::TargetReached {
                    seat: *seat,
                    total: max,
                    target,
                },
                _ => Standing::Leader {
                    seat: *seat,
                    total: max,
                },
            },
            _ => Standing::Tie {
                seats: leaders,
                total: max,
            },
        }
    }

    /// Standing of a score state.
    #[must_use]
    pub fn of(state: &ScoreState) -> Self {
        Self::compute(state.totals(), state.target())
    }

    /// The single leading seat, if there is one.
    #[must_use]
    pub fn leader(&self) -> Option<SeatId> {
        match self {
            Standing::Leader { seat, .. } | Standing::TargetReached { seat, .. } => Some(*seat),
            Standing::Tie { .. } => None,
        }
    }

    /// Check if the highest total is shared.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        matches!(self, Standing::Tie { .. })
    }

    /// Check if the target has been reached.
    #[must_use]
    pub fn target_reached(&self) -> bool {
        matches!(self, Standing::TargetReached { .. })
    }

    /// Human-readable summary using the given seat names.
    #[must_use]
    pub fn describe(&self, names: &Seats<String>) -> String {
        match self {
            Standing::Tie { .. } => "Tie".to_string(),
            Standing::Leader { seat, .. } => format!("Leader: {}", names[*seat]),
            Standing::TargetReached {
                seat,
                total,
                target,
            } => format!("Target reached: {} ({}/{})", names[*seat], total, target),
        }
    }
}
