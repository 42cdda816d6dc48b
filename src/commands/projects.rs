//! Project and Board Commands
//!
//! `TauriProjects` is the board controller's backend over IPC.

use async_trait::async_trait;
use serde::Serialize;

use erp_core::models::{
    BoardColumn, ColumnPatch, NewColumn, NewTask, Project, ProjectPayload, ProjectSummary, Task,
    TaskMove, TaskPatch,
};
use erp_core::{DomainResult, ProjectsApi};

use super::{call, call_no_args, delete_by_id, PayloadArgs, UpdateArgs};

#[derive(Serialize)]
struct ProjectIdArgs {
    #[serde(rename = "projectId")]
    project_id: u32,
}

#[derive(Serialize)]
struct CreateColumnArgs<'a> {
    #[serde(rename = "projectId")]
    project_id: u32,
    column: &'a NewColumn,
}

#[derive(Serialize)]
struct CreateTaskArgs<'a> {
    #[serde(rename = "projectId")]
    project_id: u32,
    task: &'a NewTask,
}

#[derive(Serialize)]
struct PatchArgs<'a, P> {
    id: u32,
    patch: &'a P,
}

#[derive(Serialize)]
struct MoveTaskArgs<'a> {
    id: u32,
    target: &'a TaskMove,
}

#[derive(Clone, Copy, Default)]
pub struct TauriProjects;

#[async_trait(?Send)]
impl ProjectsApi for TauriProjects {
    async fn list_projects(&self) -> DomainResult<Vec<Project>> {
        call_no_args("list_projects").await
    }

    async fn project_summary(&self) -> DomainResult<ProjectSummary> {
        call_no_args("project_summary").await
    }

    async fn create_project(&self, payload: &ProjectPayload) -> DomainResult<Project> {
        call("create_project", &PayloadArgs { payload }).await
    }

    async fn update_project(&self, id: u32, payload: &ProjectPayload) -> DomainResult<Project> {
        call("update_project", &UpdateArgs { id, payload }).await
    }

    async fn delete_project(&self, id: u32) -> DomainResult<()> {
        delete_by_id("delete_project", id).await
    }

    async fn list_columns(&self, project_id: u32) -> DomainResult<Vec<BoardColumn>> {
        call("list_columns", &ProjectIdArgs { project_id }).await
    }

    async fn list_tasks(&self, project_id: u32) -> DomainResult<Vec<Task>> {
        call("list_tasks", &ProjectIdArgs { project_id }).await
    }

    async fn create_column(&self, project_id: u32, column: &NewColumn) -> DomainResult<BoardColumn> {
        call("create_column", &CreateColumnArgs { project_id, column }).await
    }

    async fn update_column(&self, id: u32, patch: &ColumnPatch) -> DomainResult<BoardColumn> {
        call("update_column", &PatchArgs { id, patch }).await
    }

    async fn delete_column(&self, id: u32) -> DomainResult<()> {
        delete_by_id("delete_column", id).await
    }

    async fn create_task(&self, project_id: u32, task: &NewTask) -> DomainResult<Task> {
        call("create_task", &CreateTaskArgs { project_id, task }).await
    }

    async fn update_task(&self, id: u32, patch: &TaskPatch) -> DomainResult<Task> {
        call("update_task", &PatchArgs { id, patch }).await
    }

    async fn move_task(&self, id: u32, to: &TaskMove) -> DomainResult<Task> {
        call("move_task", &MoveTaskArgs { id, target: to }).await
    }

    async fn delete_task(&self, id: u32) -> DomainResult<()> {
        delete_by_id("delete_task", id).await
    }
}
