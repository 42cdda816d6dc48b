//! ERP Core
//!
//! Platform-independent state and rules shared by the Leptos front end and
//! the Tauri host: wire records, form validation, the kanban ordering
//! controller, chat sessions and navigation.

pub mod api;
pub mod board;
pub mod chat;
pub mod confirm;
pub mod error;
pub mod forms;
pub mod models;
pub mod nav;

#[cfg(test)]
mod testing;

pub use api::{AgentApi, ProjectsApi};
pub use board::{BoardController, BoardState, DragState, ProjectOverview};
pub use chat::{ChatMessage, ChatRole, ChatSession};
pub use confirm::Confirm;
pub use error::{DomainError, DomainResult};
pub use nav::{Section, SessionInfo, ShellEvent, ShellState};
