//! Score engine: round recording, deletion and game reset.

mod clock;
#[allow(clippy::module_inception)]
mod engine;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::ScoreEngine;
