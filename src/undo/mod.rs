//! Undo history.
//!
//! Every undoable action pushes a snapshot of the state as it was just
//! before the action. Undo pops the newest snapshot and makes it the live
//! state. A push that turns out to be unnecessary (the action failed) is
//! reverted with `rollback_push`, which also reinstates any snapshot the push
//! evicted.

mod manager;

pub use manager::UndoManager;
