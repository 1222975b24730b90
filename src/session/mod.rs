//! A scoring session: the owning actor for one table, plus the line
//! commands the terminal front end feeds it.

pub mod command;
pub mod repl;
mod scorekeeper;

pub use command::{Command, CommandError, HELP};
pub use repl::{execute, run, Flow};
pub use scorekeeper::Scorekeeper;
