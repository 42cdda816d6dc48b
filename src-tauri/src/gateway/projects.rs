//! Projects, board columns and tasks

use reqwest::Method;

use erp_core::models::{
    BoardColumn, ColumnPatch, NewColumn, NewTask, Project, ProjectPayload, ProjectSummary, Task,
    TaskMove, TaskPatch,
};

use super::{ApiGateway, GatewayResult};

impl ApiGateway {
    pub async fn list_projects(&self) -> GatewayResult<Vec<Project>> {
        self.get_json("/projects/").await
    }

    pub async fn project_summary(&self) -> GatewayResult<ProjectSummary> {
        self.get_json("/projects/summary").await
    }

    pub async fn create_project(&self, payload: &ProjectPayload) -> GatewayResult<Project> {
        self.send_json(Method::POST, "/projects/", payload).await
    }

    pub async fn update_project(&self, id: u32, payload: &ProjectPayload) -> GatewayResult<Project> {
        self.send_json(Method::PUT, &format!("/projects/{}", id), payload).await
    }

    pub async fn delete_project(&self, id: u32) -> GatewayResult<()> {
        self.delete(&format!("/projects/{}", id)).await
    }

    pub async fn list_columns(&self, project_id: u32) -> GatewayResult<Vec<BoardColumn>> {
        self.get_json(&format!("/projects/{}/columns", project_id)).await
    }

    pub async fn list_tasks(&self, project_id: u32) -> GatewayResult<Vec<Task>> {
        self.get_json(&format!("/projects/{}/tasks", project_id)).await
    }

    pub async fn create_column(&self, project_id: u32, column: &NewColumn) -> GatewayResult<BoardColumn> {
        self.send_json(Method::POST, &format!("/projects/{}/columns", project_id), column)
            .await
    }

    pub async fn update_column(&self, id: u32, patch: &ColumnPatch) -> GatewayResult<BoardColumn> {
        self.send_json(Method::PUT, &format!("/projects/columns/{}", id), patch).await
    }

    pub async fn delete_column(&self, id: u32) -> GatewayResult<()> {
        self.delete(&format!("/projects/columns/{}", id)).await
    }

    pub async fn create_task(&self, project_id: u32, task: &NewTask) -> GatewayResult<Task> {
        self.send_json(Method::POST, &format!("/projects/{}/tasks", project_id), task)
            .await
    }

    pub async fn update_task(&self, id: u32, patch: &TaskPatch) -> GatewayResult<Task> {
        self.send_json(Method::PUT, &format!("/projects/tasks/{}", id), patch).await
    }

    pub async fn move_task(&self, id: u32, to: &TaskMove) -> GatewayResult<Task> {
        self.send_json(Method::PATCH, &format!("/projects/tasks/{}/move", id), to)
            .await
    }

    pub async fn delete_task(&self, id: u32) -> GatewayResult<()> {
        self.delete(&format!("/projects/tasks/{}", id)).await
    }
}
