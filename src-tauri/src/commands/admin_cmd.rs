//! Tauri Commands for the admin overview

use tauri::State;

use erp_core::models::{ActivityItem, Client, ClientRecord, PlatformSummary, RevenuePoint};

use super::to_ipc;
use crate::AppState;

#[tauri::command]
pub async fn platform_summary(state: State<'_, AppState>) -> Result<PlatformSummary, String> {
    to_ipc("platform_summary", state.gateway.platform_summary().await)
}

#[tauri::command]
pub async fn list_clients(state: State<'_, AppState>) -> Result<Vec<ClientRecord>, String> {
    to_ipc("list_clients", state.gateway.list_clients().await)
}

#[tauri::command]
pub async fn revenue_analytics(state: State<'_, AppState>) -> Result<Vec<RevenuePoint>, String> {
    to_ipc("revenue_analytics", state.gateway.revenue_analytics().await)
}

#[tauri::command]
pub async fn recent_activity(state: State<'_, AppState>, limit: u32) -> Result<Vec<ActivityItem>, String> {
    to_ipc("recent_activity", state.gateway.recent_activity(limit).await)
}

#[tauri::command]
pub async fn set_client_suspended(state: State<'_, AppState>, id: u32, suspended: bool) -> Result<Client, String> {
    log::info!("Client {} suspended={}", id, suspended);
    to_ipc("set_client_suspended", state.gateway.set_client_suspended(id, suspended).await)
}
