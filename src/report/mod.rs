//! Read-only views of a score state for display.
//!
//! - `HistoryRow`: one line of the round history table
//! - `render_table` / `render_totals`: plain-text renderings for a terminal

use std::fmt::Write as _;

use serde::Serialize;
use time::macros::format_description;

use crate::core::{Round, ScoreState, Seats};
use crate::standings::Standing;

/// Placeholder shown for rounds without a note.
pub const EMPTY_NOTE: &str = "—";

/// One row of the history table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryRow {
    pub index: usize,
    pub time: String,
    pub game_label: &'static str,
    pub type_label: &'static str,
    pub note: String,
    pub points: Seats<i64>,
    /// Sum of `points` across seats.
    pub sum: i128,
}

impl HistoryRow {
    /// Build the display row for a round.
    #[must_use]
    pub fn from_round(round: &Round) -> Self {
        Self {
            index: round.index,
            time: round
                .timestamp
                .format(format_description!(
                    "[year]-[month]-[day] [hour]:[minute]:[second]"
                ))
                .unwrap_or_default(),
            game_label: round.game.label(),
            type_label: round.subtype.row_label(),
            note: round.note.clone().unwrap_or_else(|| EMPTY_NOTE.to_string()),
            points: round.points,
            sum: round.points_sum(),
        }
    }
}

/// History rows, oldest first.
#[must_use]
pub fn history_rows(state: &ScoreState) -> Vec<HistoryRow> {
    state.rounds().iter().map(HistoryRow::from_round).collect()
}

/// Standing summary line, e.g. "Leader: Ana".
#[must_use]
pub fn standing_message(state: &ScoreState) -> String {
    Standing::of(state).describe(state.names())
}

/// One line per seat with its name and total.
#[must_use]
pub fn render_totals(state: &ScoreState) -> String {
    let width = name_width(state);
    let mut out = String::new();
    for (seat, total) in state.totals().iter() {
        let _ = writeln!(out, "{:<width$}  {:>6}", state.name(seat), total);
    }
    let _ = writeln!(out, "{}", standing_message(state));
    out
}

/// History table with a header row of seat names.
#[must_use]
pub fn render_table(state: &ScoreState) -> String {
    let rows = history_rows(state);
    let col = name_width(state).max(6);
    let type_width = rows
        .iter()
        .map(|r| r.type_label.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut out = String::new();
    let _ = write!(
        out,
        "{:>3}  {:<19}  {:<4}  {:<type_width$}",
        "#", "Time", "Game", "Type"
    );
    for name in state.names().values() {
        let _ = write!(out, "  {:>col$}", name);
    }
    let _ = writeln!(out, "  {:>6}  Note", "Sum");

    for row in &rows {
        let _ = write!(
            out,
            "{:>3}  {:<19}  {:<4}  {:<type_width$}",
            row.index,
            row.time,
            row.game_label,
            row.type_label
        );
        for points in row.points.values() {
            let _ = write!(out, "  {:>col$}", points);
        }
        let _ = writeln!(out, "  {:>6}  {}", row.sum, row.note);
    }

    if rows.is_empty() {
        let _ = writeln!(out, "(no rounds yet)");
    }
    out
}

fn name_width(state: &ScoreState) -> usize {
    state
        .names()
        .values()
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(0)
}
