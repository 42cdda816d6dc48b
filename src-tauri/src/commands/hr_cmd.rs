//! Tauri Commands for HR

use tauri::State;

use erp_core::models::{Employee, EmployeePayload, HrSummary, Position, PositionPayload};

use super::to_ipc;
use crate::AppState;

#[tauri::command]
pub async fn hr_summary(state: State<'_, AppState>) -> Result<HrSummary, String> {
    to_ipc("hr_summary", state.gateway.hr_summary().await)
}

#[tauri::command]
pub async fn list_employees(state: State<'_, AppState>) -> Result<Vec<Employee>, String> {
    to_ipc("list_employees", state.gateway.list_employees().await)
}

#[tauri::command]
pub async fn create_employee(state: State<'_, AppState>, payload: EmployeePayload) -> Result<Employee, String> {
    to_ipc("create_employee", state.gateway.create_employee(&payload).await)
}

#[tauri::command]
pub async fn update_employee(
    state: State<'_, AppState>,
    id: u32,
    payload: EmployeePayload,
) -> Result<Employee, String> {
    to_ipc("update_employee", state.gateway.update_employee(id, &payload).await)
}

#[tauri::command]
pub async fn delete_employee(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    to_ipc("delete_employee", state.gateway.delete_employee(id).await)
}

#[tauri::command]
pub async fn list_positions(state: State<'_, AppState>) -> Result<Vec<Position>, String> {
    to_ipc("list_positions", state.gateway.list_positions().await)
}

#[tauri::command]
pub async fn create_position(state: State<'_, AppState>, payload: PositionPayload) -> Result<Position, String> {
    to_ipc("create_position", state.gateway.create_position(&payload).await)
}

#[tauri::command]
pub async fn update_position(
    state: State<'_, AppState>,
    id: u32,
    payload: PositionPayload,
) -> Result<Position, String> {
    to_ipc("update_position", state.gateway.update_position(id, &payload).await)
}

#[tauri::command]
pub async fn delete_position(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    to_ipc("delete_position", state.gateway.delete_position(id).await)
}
