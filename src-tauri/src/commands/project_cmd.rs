//! Tauri Commands for Projects, Board Columns and Tasks

use tauri::State;

use erp_core::models::{
    BoardColumn, ColumnPatch, NewColumn, NewTask, Project, ProjectPayload, ProjectSummary, Task,
    TaskMove, TaskPatch,
};

use super::to_ipc;
use crate::AppState;

#[tauri::command]
pub async fn list_projects(state: State<'_, AppState>) -> Result<Vec<Project>, String> {
    to_ipc("list_projects", state.gateway.list_projects().await)
}

#[tauri::command]
pub async fn project_summary(state: State<'_, AppState>) -> Result<ProjectSummary, String> {
    to_ipc("project_summary", state.gateway.project_summary().await)
}

#[tauri::command]
pub async fn create_project(state: State<'_, AppState>, payload: ProjectPayload) -> Result<Project, String> {
    to_ipc("create_project", state.gateway.create_project(&payload).await)
}

#[tauri::command]
pub async fn update_project(
    state: State<'_, AppState>,
    id: u32,
    payload: ProjectPayload,
) -> Result<Project, String> {
    to_ipc("update_project", state.gateway.update_project(id, &payload).await)
}

/// Cascades to columns and tasks on the backend
#[tauri::command]
pub async fn delete_project(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    log::info!("Deleting project {}", id);
    to_ipc("delete_project", state.gateway.delete_project(id).await)
}

#[tauri::command]
pub async fn list_columns(state: State<'_, AppState>, project_id: u32) -> Result<Vec<BoardColumn>, String> {
    to_ipc("list_columns", state.gateway.list_columns(project_id).await)
}

#[tauri::command]
pub async fn list_tasks(state: State<'_, AppState>, project_id: u32) -> Result<Vec<Task>, String> {
    to_ipc("list_tasks", state.gateway.list_tasks(project_id).await)
}

#[tauri::command]
pub async fn create_column(
    state: State<'_, AppState>,
    project_id: u32,
    column: NewColumn,
) -> Result<BoardColumn, String> {
    to_ipc("create_column", state.gateway.create_column(project_id, &column).await)
}

#[tauri::command]
pub async fn update_column(state: State<'_, AppState>, id: u32, patch: ColumnPatch) -> Result<BoardColumn, String> {
    to_ipc("update_column", state.gateway.update_column(id, &patch).await)
}

#[tauri::command]
pub async fn delete_column(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    log::info!("Deleting column {}", id);
    to_ipc("delete_column", state.gateway.delete_column(id).await)
}

#[tauri::command]
pub async fn create_task(state: State<'_, AppState>, project_id: u32, task: NewTask) -> Result<Task, String> {
    to_ipc("create_task", state.gateway.create_task(project_id, &task).await)
}

#[tauri::command]
pub async fn update_task(state: State<'_, AppState>, id: u32, patch: TaskPatch) -> Result<Task, String> {
    to_ipc("update_task", state.gateway.update_task(id, &patch).await)
}

#[tauri::command]
pub async fn move_task(state: State<'_, AppState>, id: u32, target: TaskMove) -> Result<Task, String> {
    log::info!("Moving task {} -> column {} @ {}", id, target.column_id, target.position);
    to_ipc("move_task", state.gateway.move_task(id, &target).await)
}

#[tauri::command]
pub async fn delete_task(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    to_ipc("delete_task", state.gateway.delete_task(id).await)
}
