//! Board/Ordering Subsystem
//!
//! - drag: per-gesture state machine (idle → dragging → hovering → idle)
//! - state: columns × tasks snapshot and the append-position rules
//! - overview: project list, summary and per-project task counts
//! - controller: mutate-then-resynchronize operations behind a per-board lock

mod controller;
mod drag;
mod overview;
mod state;

#[cfg(test)]
mod tests;

pub use controller::{BoardController, DELETE_COLUMN_PROMPT, DELETE_PROJECT_PROMPT, DELETE_TASK_PROMPT};
pub use drag::DragState;
pub use overview::ProjectOverview;
pub use state::BoardState;
