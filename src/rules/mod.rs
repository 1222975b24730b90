//! Round rules for 400 and Trix.
//!
//! - `subtype`: the closed set of round types and their scoring tables
//! - `validator`: clamping, constraint checks and point computation
//!
//! Nothing here touches score state; the engine calls into these functions
//! and only mutates once they succeed.

pub mod subtype;
pub mod validator;

pub use subtype::{Scoring, Subtype, SubtypeRules, UnknownSubtype, TRIX_PLACE_POINTS};
pub use validator::{check_game, clamp_input, points_for, score, validate, Scored};
