//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Board and
//! project-list fields are snapshots copied out of the board controller
//! after each operation; the controller stays the single writer.

use leptos::prelude::*;
use reactive_stores::Store;

use erp_core::{BoardState, ChatSession, ProjectOverview, SessionInfo, ShellEvent, ShellState};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current section and panel toggles
    pub shell: ShellState,
    /// Identity provider session, used for admin gating
    pub session: SessionInfo,
    /// Open kanban board (empty when none)
    pub board: BoardState,
    /// Project list with summary and task counts
    pub overview: ProjectOverview,
    /// Assistant panel log for the current section
    pub chat: ChatSession,
    /// Non-zero while a board mutation is in flight
    pub board_busy: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a shell event; navigating also rescopes the chat log
pub fn store_dispatch(store: &AppStore, event: ShellEvent) {
    store.shell().update(|shell| shell.apply(event));
    if let ShellEvent::Navigate(section) = event {
        store.chat().update(|chat| chat.switch_section(section));
    }
}

/// Copy the controller's snapshots into the store
pub fn store_sync_board(store: &AppStore, board: BoardState, overview: ProjectOverview) {
    store.board().set(board);
    store.overview().set(overview);
}
