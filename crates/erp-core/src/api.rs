//! Backend API Seams
//!
//! Abstract interfaces over the REST backend. The front end implements them
//! over Tauri IPC; tests implement them in memory.
//! Futures are `?Send` so the same traits run on wasm32.

use async_trait::async_trait;

use crate::error::DomainResult;
use crate::models::{
    AgentReply, BoardColumn, ColumnPatch, NewColumn, NewTask, Project, ProjectPayload,
    ProjectSummary, Task, TaskMove, TaskPatch,
};
use crate::nav::Section;

/// Projects, columns and tasks
#[async_trait(?Send)]
pub trait ProjectsApi {
    async fn list_projects(&self) -> DomainResult<Vec<Project>>;

    async fn project_summary(&self) -> DomainResult<ProjectSummary>;

    async fn create_project(&self, payload: &ProjectPayload) -> DomainResult<Project>;

    async fn update_project(&self, id: u32, payload: &ProjectPayload) -> DomainResult<Project>;

    /// Cascades to the project's columns and tasks
    async fn delete_project(&self, id: u32) -> DomainResult<()>;

    async fn list_columns(&self, project_id: u32) -> DomainResult<Vec<BoardColumn>>;

    async fn list_tasks(&self, project_id: u32) -> DomainResult<Vec<Task>>;

    async fn create_column(&self, project_id: u32, column: &NewColumn) -> DomainResult<BoardColumn>;

    async fn update_column(&self, id: u32, patch: &ColumnPatch) -> DomainResult<BoardColumn>;

    /// Cascades to the column's tasks
    async fn delete_column(&self, id: u32) -> DomainResult<()>;

    async fn create_task(&self, project_id: u32, task: &NewTask) -> DomainResult<Task>;

    async fn update_task(&self, id: u32, patch: &TaskPatch) -> DomainResult<Task>;

    async fn move_task(&self, id: u32, to: &TaskMove) -> DomainResult<Task>;

    async fn delete_task(&self, id: u32) -> DomainResult<()>;
}

/// Remote assistant keyed by section
#[async_trait(?Send)]
pub trait AgentApi {
    async fn ask(&self, section: Section, message: &str) -> DomainResult<AgentReply>;
}
