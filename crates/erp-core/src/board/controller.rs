//! Board Controller
//!
//! Every mutation follows the same shape: compute the append position from
//! the current snapshot, call the backend, then reload from the backend.
//! Mutations are serialized by a per-board async lock so a second drop
//! computes its position from the state the first one reloaded.

use std::cell::RefCell;

use tokio::sync::Mutex;

use crate::api::ProjectsApi;
use crate::confirm::Confirm;
use crate::error::{DomainError, DomainResult};
use crate::forms::{ColumnForm, ProjectForm, TaskForm};
use crate::models::{BoardColumn, Project, Task, TaskMove};

use super::overview::ProjectOverview;
use super::state::BoardState;

pub const DELETE_PROJECT_PROMPT: &str = "Delete this project and all its board data?";
pub const DELETE_COLUMN_PROMPT: &str = "Delete this column and all tasks inside it?";
pub const DELETE_TASK_PROMPT: &str = "Delete this task?";

pub struct BoardController<A> {
    api: A,
    board: RefCell<BoardState>,
    overview: RefCell<ProjectOverview>,
    mutation: Mutex<()>,
}

impl<A: ProjectsApi> BoardController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            board: RefCell::new(BoardState::default()),
            overview: RefCell::new(ProjectOverview::default()),
            mutation: Mutex::new(()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Snapshot of the open board
    pub fn board(&self) -> BoardState {
        self.board.borrow().clone()
    }

    /// Snapshot of the project list
    pub fn overview(&self) -> ProjectOverview {
        self.overview.borrow().clone()
    }

    // ========================
    // Project list
    // ========================

    pub async fn load_projects(&self) {
        let overview = ProjectOverview::fetch(&self.api).await;
        {
            let mut board = self.board.borrow_mut();
            let fresh = board
                .project_id()
                .and_then(|id| overview.project(id))
                .cloned();
            if let Some(project) = fresh {
                board.project = Some(project);
            }
        }
        *self.overview.borrow_mut() = overview;
    }

    /// Create (`editing == None`) or update a project, then reload the list
    pub async fn save_project(&self, editing: Option<u32>, form: &ProjectForm) -> DomainResult<Project> {
        let payload = form.to_payload()?;
        let _guard = self.mutation.lock().await;
        let saved = match editing {
            Some(id) => self.api.update_project(id, &payload).await?,
            None => self.api.create_project(&payload).await?,
        };
        log::info!("[PROJECTS] saved project {} ({})", saved.id, saved.name);
        self.load_projects().await;
        Ok(saved)
    }

    /// Returns Ok(false) when the user declines
    pub async fn delete_project(&self, id: u32, confirm: &dyn Confirm) -> DomainResult<bool> {
        if !confirm.confirm(DELETE_PROJECT_PROMPT) {
            return Ok(false);
        }
        let _guard = self.mutation.lock().await;
        self.api.delete_project(id).await?;
        let was_open = self.board.borrow().project_id() == Some(id);
        if was_open {
            self.close_board();
        }
        self.load_projects().await;
        Ok(true)
    }

    // ========================
    // Board loading
    // ========================

    pub async fn open_board(&self, project: Project) {
        let project_id = project.id;
        self.board.borrow_mut().open(project);
        self.load_board(project_id).await;
    }

    pub fn close_board(&self) {
        self.board.borrow_mut().close();
    }

    /// Fetch columns and tasks in parallel and overwrite the snapshot.
    /// Failures leave empty lists and record `load_error`; they are never returned.
    pub async fn load_board(&self, project_id: u32) {
        let (columns, tasks) = futures::join!(
            self.api.list_columns(project_id),
            self.api.list_tasks(project_id)
        );

        let mut board = self.board.borrow_mut();
        if board.project_id() != Some(project_id) {
            log::debug!("[BOARD] discarding load for project {} (no longer open)", project_id);
            return;
        }

        let mut load_error = None;
        let columns = match columns {
            Ok(columns) => columns,
            Err(e) => {
                log::error!("[BOARD] failed to load columns for project {}: {}", project_id, e);
                load_error = Some(e.to_string());
                Vec::new()
            }
        };
        let tasks = match tasks {
            Ok(tasks) => tasks,
            Err(e) => {
                log::error!("[BOARD] failed to load tasks for project {}: {}", project_id, e);
                load_error = Some(e.to_string());
                Vec::new()
            }
        };

        let dropped = board.replace(columns, tasks);
        if dropped > 0 {
            log::warn!("[BOARD] hid {} task(s) without a column in project {}", dropped, project_id);
        }
        board.load_error = load_error;
    }

    // ========================
    // Drag and drop
    // ========================

    /// Returns false if the task is not on the open board
    pub fn begin_drag(&self, task_id: u32) -> bool {
        let mut board = self.board.borrow_mut();
        if board.task(task_id).is_none() {
            return false;
        }
        board.drag.begin(task_id);
        true
    }

    pub fn drag_over_column(&self, column_id: u32) {
        let mut board = self.board.borrow_mut();
        if board.column(column_id).is_some() {
            board.drag.hover(column_id);
        }
    }

    pub fn drag_leave(&self) {
        self.board.borrow_mut().drag.leave();
    }

    pub fn cancel_drag(&self) {
        self.board.borrow_mut().drag.cancel();
    }

    /// Move the dragged task to the bottom of `column_id`.
    /// Ok(None) when nothing was being dragged.
    pub async fn drop_on_column(&self, column_id: u32) -> DomainResult<Option<Task>> {
        let source = self.board.borrow().drag.source();
        let Some(task_id) = source else {
            return Ok(None);
        };
        let result = self.relocate(task_id, column_id).await;
        self.board.borrow_mut().drag.finish(task_id);
        result.map(Some)
    }

    /// Pointer released: drop on the hovered column, or cancel outside every column
    pub async fn release(&self) -> DomainResult<Option<Task>> {
        let target = self.board.borrow().drag.target();
        match target {
            Some(column_id) => self.drop_on_column(column_id).await,
            None => {
                self.cancel_drag();
                Ok(None)
            }
        }
    }

    /// Append `task_id` to the bottom of `column_id`, whatever the vertical
    /// drop coordinate was. Dropping a card on its own column changes nothing.
    pub async fn relocate(&self, task_id: u32, column_id: u32) -> DomainResult<Task> {
        let project_id = self.open_project_id()?;
        let _guard = self.mutation.lock().await;
        let position = {
            let board = self.board.borrow();
            Self::ensure_open(&board, project_id)?;
            let Some(task) = board.task(task_id) else {
                return Err(DomainError::not_found("Task", task_id));
            };
            if board.column(column_id).is_none() {
                return Err(DomainError::not_found("Column", column_id));
            }
            if task.column_id == column_id {
                log::debug!("[BOARD] task {} dropped on its own column", task_id);
                return Ok(task.clone());
            }
            board.next_task_position(column_id)
        };

        log::info!("[BOARD] move task {} -> column {} @ {}", task_id, column_id, position);
        let moved = self
            .api
            .move_task(task_id, &TaskMove { column_id, position })
            .await?;
        self.resync(project_id).await;
        Ok(moved)
    }

    // ========================
    // Columns
    // ========================

    pub async fn create_column(&self, form: &ColumnForm) -> DomainResult<BoardColumn> {
        form.to_patch()?;
        let project_id = self.open_project_id()?;
        let _guard = self.mutation.lock().await;
        let payload = {
            let board = self.board.borrow();
            Self::ensure_open(&board, project_id)?;
            form.to_new_column(project_id, board.next_column_position())?
        };
        let column = self.api.create_column(project_id, &payload).await?;
        self.load_board(project_id).await;
        Ok(column)
    }

    /// Rename/recolor; position is untouched
    pub async fn update_column(&self, id: u32, form: &ColumnForm) -> DomainResult<BoardColumn> {
        let patch = form.to_patch()?;
        let project_id = self.open_project_id()?;
        let _guard = self.mutation.lock().await;
        let column = self.api.update_column(id, &patch).await?;
        self.load_board(project_id).await;
        Ok(column)
    }

    /// Cascades to the column's tasks on the server
    pub async fn delete_column(&self, id: u32, confirm: &dyn Confirm) -> DomainResult<bool> {
        if !confirm.confirm(DELETE_COLUMN_PROMPT) {
            return Ok(false);
        }
        let project_id = self.open_project_id()?;
        let _guard = self.mutation.lock().await;
        self.api.delete_column(id).await?;
        self.resync(project_id).await;
        Ok(true)
    }

    // ========================
    // Tasks
    // ========================

    pub async fn create_task(&self, column_id: u32, form: &TaskForm) -> DomainResult<Task> {
        form.to_patch()?;
        let project_id = self.open_project_id()?;
        let _guard = self.mutation.lock().await;
        let payload = {
            let board = self.board.borrow();
            Self::ensure_open(&board, project_id)?;
            if board.column(column_id).is_none() {
                return Err(DomainError::not_found("Column", column_id));
            }
            form.to_new_task(project_id, column_id, board.next_task_position(column_id))?
        };
        let task = self.api.create_task(project_id, &payload).await?;
        self.resync(project_id).await;
        Ok(task)
    }

    /// Edits attributes only; column and position are untouched
    pub async fn update_task(&self, id: u32, form: &TaskForm) -> DomainResult<Task> {
        let patch = form.to_patch()?;
        let project_id = self.open_project_id()?;
        let _guard = self.mutation.lock().await;
        let task = self.api.update_task(id, &patch).await?;
        self.resync(project_id).await;
        Ok(task)
    }

    pub async fn delete_task(&self, id: u32, confirm: &dyn Confirm) -> DomainResult<bool> {
        if !confirm.confirm(DELETE_TASK_PROMPT) {
            return Ok(false);
        }
        let project_id = self.open_project_id()?;
        let _guard = self.mutation.lock().await;
        self.api.delete_task(id).await?;
        self.resync(project_id).await;
        Ok(true)
    }

    // ========================
    // Helpers
    // ========================

    fn open_project_id(&self) -> DomainResult<u32> {
        self.board
            .borrow()
            .project_id()
            .ok_or_else(|| DomainError::Conflict("no project is open".to_string()))
    }

    fn ensure_open(board: &BoardState, project_id: u32) -> DomainResult<()> {
        if board.project_id() == Some(project_id) {
            Ok(())
        } else {
            Err(DomainError::Conflict(format!("project {} was closed", project_id)))
        }
    }

    /// Board and project task counts both derive from tasks; reload both
    async fn resync(&self, project_id: u32) {
        self.load_board(project_id).await;
        self.load_projects().await;
    }
}
