//! In-Memory Backend
//!
//! Stands in for the REST backend in tests. Every call yields once before
//! touching storage so concurrent futures genuinely interleave.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::api::ProjectsApi;
use crate::error::{DomainError, DomainResult};
use crate::models::{
    BoardColumn, ColumnPatch, NewColumn, NewTask, Project, ProjectPayload, ProjectStatus,
    ProjectSummary, Task, TaskMove, TaskPatch,
};

#[derive(Default)]
struct Tables {
    next_id: u32,
    projects: Vec<Project>,
    columns: Vec<BoardColumn>,
    tasks: Vec<Task>,
}

impl Tables {
    fn next_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct MemoryBackend {
    tables: RefCell<Tables>,
    /// When set, every read fails with a network error
    pub offline: Cell<bool>,
    /// When set, only the task listing fails; columns still load
    pub fail_tasks: Cell<bool>,
    /// When set, every write is refused before touching storage
    pub reject_writes: Cell<bool>,
    /// Names of the write calls received, in order
    pub writes: RefCell<Vec<&'static str>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored_tasks(&self) -> Vec<Task> {
        self.tables.borrow().tasks.clone()
    }

    pub fn stored_task(&self, id: u32) -> Option<Task> {
        self.tables.borrow().tasks.iter().find(|t| t.id == id).cloned()
    }

    pub fn write_count(&self, name: &str) -> usize {
        self.writes.borrow().iter().filter(|w| **w == name).count()
    }

    async fn read(&self) -> DomainResult<()> {
        tokio::task::yield_now().await;
        if self.offline.get() {
            return Err(DomainError::Network("connection refused".to_string()));
        }
        Ok(())
    }

    async fn write(&self, name: &'static str) -> DomainResult<()> {
        tokio::task::yield_now().await;
        if self.reject_writes.get() {
            return Err(DomainError::Network(format!("{} refused", name)));
        }
        self.writes.borrow_mut().push(name);
        Ok(())
    }
}

#[async_trait(?Send)]
impl ProjectsApi for MemoryBackend {
    async fn list_projects(&self) -> DomainResult<Vec<Project>> {
        self.read().await?;
        Ok(self.tables.borrow().projects.clone())
    }

    async fn project_summary(&self) -> DomainResult<ProjectSummary> {
        self.read().await?;
        let tables = self.tables.borrow();
        let count = |status: ProjectStatus| tables.projects.iter().filter(|p| p.status == status).count() as u32;
        Ok(ProjectSummary {
            total_projects: tables.projects.len() as u32,
            active: count(ProjectStatus::Active),
            completed: count(ProjectStatus::Completed),
            total_tasks: tables.tasks.len() as u32,
        })
    }

    async fn create_project(&self, payload: &ProjectPayload) -> DomainResult<Project> {
        self.write("create_project").await?;
        let mut tables = self.tables.borrow_mut();
        let project = Project {
            id: tables.next_id(),
            name: payload.name.clone(),
            description: payload.description.clone(),
            status: payload.status,
            color: payload.color.clone(),
            owner: payload.owner.clone(),
            created_at: NaiveDateTime::default(),
        };
        tables.projects.push(project.clone());
        Ok(project)
    }

    async fn update_project(&self, id: u32, payload: &ProjectPayload) -> DomainResult<Project> {
        self.write("update_project").await?;
        let mut tables = self.tables.borrow_mut();
        let project = tables
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::not_found("Project", id))?;
        project.name = payload.name.clone();
        project.description = payload.description.clone();
        project.owner = payload.owner.clone();
        project.status = payload.status;
        project.color = payload.color.clone();
        Ok(project.clone())
    }

    async fn delete_project(&self, id: u32) -> DomainResult<()> {
        self.write("delete_project").await?;
        let mut tables = self.tables.borrow_mut();
        tables.projects.retain(|p| p.id != id);
        tables.columns.retain(|c| c.project_id != id);
        tables.tasks.retain(|t| t.project_id != id);
        Ok(())
    }

    async fn list_columns(&self, project_id: u32) -> DomainResult<Vec<BoardColumn>> {
        self.read().await?;
        let tables = self.tables.borrow();
        let mut columns: Vec<BoardColumn> = tables
            .columns
            .iter()
            .filter(|c| c.project_id == project_id)
            .cloned()
            .collect();
        columns.sort_by_key(|c| c.position);
        Ok(columns)
    }

    async fn list_tasks(&self, project_id: u32) -> DomainResult<Vec<Task>> {
        self.read().await?;
        if self.fail_tasks.get() {
            return Err(DomainError::Network("tasks unavailable".to_string()));
        }
        let tables = self.tables.borrow();
        let mut tasks: Vec<Task> = tables
            .tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .cloned()
            .collect();
        tasks.sort_by_key(|t| t.position);
        Ok(tasks)
    }

    async fn create_column(&self, project_id: u32, column: &NewColumn) -> DomainResult<BoardColumn> {
        self.write("create_column").await?;
        let mut tables = self.tables.borrow_mut();
        let column = BoardColumn {
            id: tables.next_id(),
            project_id,
            name: column.name.clone(),
            color: column.color.clone(),
            position: column.position,
        };
        tables.columns.push(column.clone());
        Ok(column)
    }

    async fn update_column(&self, id: u32, patch: &ColumnPatch) -> DomainResult<BoardColumn> {
        self.write("update_column").await?;
        let mut tables = self.tables.borrow_mut();
        let column = tables
            .columns
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::not_found("Column", id))?;
        column.name = patch.name.clone();
        column.color = patch.color.clone();
        Ok(column.clone())
    }

    async fn delete_column(&self, id: u32) -> DomainResult<()> {
        self.write("delete_column").await?;
        let mut tables = self.tables.borrow_mut();
        tables.columns.retain(|c| c.id != id);
        tables.tasks.retain(|t| t.column_id != id);
        Ok(())
    }

    async fn create_task(&self, project_id: u32, task: &NewTask) -> DomainResult<Task> {
        self.write("create_task").await?;
        let mut tables = self.tables.borrow_mut();
        let task = Task {
            id: tables.next_id(),
            column_id: task.column_id,
            project_id,
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority,
            assignee: task.assignee.clone(),
            tags: task.tags.clone(),
            position: task.position,
            created_at: NaiveDateTime::default(),
        };
        tables.tasks.push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: u32, patch: &TaskPatch) -> DomainResult<Task> {
        self.write("update_task").await?;
        let mut tables = self.tables.borrow_mut();
        let task = tables
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| DomainError::not_found("Task", id))?;
        task.title = patch.title.clone();
        task.description = patch.description.clone();
        task.priority = patch.priority;
        task.assignee = patch.assignee.clone();
        task.tags = patch.tags.clone();
        Ok(task.clone())
    }

    async fn move_task(&self, id: u32, to: &TaskMove) -> DomainResult<Task> {
        self.write("move_task").await?;
        let mut tables = self.tables.borrow_mut();
        let task = tables
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| DomainError::not_found("Task", id))?;
        task.column_id = to.column_id;
        task.position = to.position;
        Ok(task.clone())
    }

    async fn delete_task(&self, id: u32) -> DomainResult<()> {
        self.write("delete_task").await?;
        self.tables.borrow_mut().tasks.retain(|t| t.id != id);
        Ok(())
    }
}
