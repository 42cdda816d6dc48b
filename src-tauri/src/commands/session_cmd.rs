//! Tauri Commands for the signed-in session and diagnostics

use tauri::State;

use erp_core::SessionInfo;

use super::to_ipc;
use crate::AppState;

#[tauri::command]
pub async fn get_session(state: State<'_, AppState>) -> Result<SessionInfo, String> {
    to_ipc("get_session", state.gateway.current_session().await)
}

/// Most recent host log lines, oldest first
#[tauri::command]
pub fn recent_logs() -> Vec<String> {
    rolling_logger::recent_lines()
}
