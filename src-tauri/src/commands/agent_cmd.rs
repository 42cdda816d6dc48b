//! Tauri Command for the section assistants

use tauri::State;

use erp_core::models::AgentReply;
use erp_core::Section;

use super::to_ipc;
use crate::AppState;

#[tauri::command]
pub async fn ask_agent(state: State<'_, AppState>, section: Section, message: String) -> Result<AgentReply, String> {
    log::info!("Agent request for {}", section.id());
    to_ipc("ask_agent", state.gateway.ask_agent(section, &message).await)
}
