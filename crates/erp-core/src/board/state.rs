//! Board Snapshot
//!
//! Wholesale copy of the server's columns and tasks for one project.
//! Positions are never renumbered here; the backend is the source of truth.

use crate::models::{find_by_id, BoardColumn, Project, Task};

use super::drag::DragState;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    pub project: Option<Project>,
    /// Sorted by position
    pub columns: Vec<BoardColumn>,
    /// Sorted by position
    pub tasks: Vec<Task>,
    pub drag: DragState,
    /// Set when the last load could not reach the backend
    pub load_error: Option<String>,
}

impl BoardState {
    pub fn project_id(&self) -> Option<u32> {
        self.project.as_ref().map(|p| p.id)
    }

    pub fn is_open(&self) -> bool {
        self.project.is_some()
    }

    pub fn open(&mut self, project: Project) {
        *self = BoardState {
            project: Some(project),
            ..BoardState::default()
        };
    }

    pub fn close(&mut self) {
        *self = BoardState::default();
    }

    /// Overwrite columns and tasks. Tasks whose column is gone (cascade) or
    /// that belong to another project are dropped before display.
    /// Returns how many tasks were dropped.
    pub fn replace(&mut self, mut columns: Vec<BoardColumn>, mut tasks: Vec<Task>) -> usize {
        let project_id = self.project_id();
        columns.retain(|c| Some(c.project_id) == project_id);
        columns.sort_by_key(|c| (c.position, c.id));

        let before = tasks.len();
        tasks.retain(|t| {
            Some(t.project_id) == project_id
                && columns.iter().any(|c| c.id == t.column_id && c.project_id == t.project_id)
        });
        tasks.sort_by_key(|t| (t.position, t.id));

        self.columns = columns;
        self.tasks = tasks;
        before - self.tasks.len()
    }

    pub fn column(&self, id: u32) -> Option<&BoardColumn> {
        find_by_id(&self.columns, id)
    }

    pub fn task(&self, id: u32) -> Option<&Task> {
        find_by_id(&self.tasks, id)
    }

    /// Tasks of one column, top to bottom
    pub fn tasks_in(&self, column_id: u32) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |t| t.column_id == column_id)
    }

    pub fn task_count(&self, column_id: u32) -> usize {
        self.tasks_in(column_id).count()
    }

    /// Append rule for tasks: one past the bottom card of the column, so a
    /// gap left by a departed card is never reused. 0 for an empty column.
    pub fn next_task_position(&self, column_id: u32) -> i32 {
        self.tasks_in(column_id)
            .map(|t| t.position)
            .max()
            .map_or(0, |p| p + 1)
    }

    /// Append rule for columns: one past the rightmost column
    pub fn next_column_position(&self) -> i32 {
        self.columns.iter().map(|c| c.position).max().map_or(0, |p| p + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    use crate::models::{ProjectStatus, TaskPriority};

    fn project() -> Project {
        Project {
            id: 1,
            name: "Launch".to_string(),
            description: None,
            status: ProjectStatus::Active,
            color: "#7c6aff".to_string(),
            owner: None,
            created_at: NaiveDateTime::default(),
        }
    }

    fn column(id: u32, position: i32) -> BoardColumn {
        BoardColumn { id, project_id: 1, name: format!("C{}", id), color: "#555555".to_string(), position }
    }

    fn task(id: u32, column_id: u32, position: i32) -> Task {
        Task {
            id,
            column_id,
            project_id: 1,
            title: format!("T{}", id),
            description: None,
            priority: TaskPriority::Medium,
            assignee: None,
            tags: None,
            position,
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_next_positions_skip_gaps() {
        let mut board = BoardState::default();
        board.open(project());
        // Column 10 lost its position-0 card; column 0 was deleted
        board.replace(
            vec![column(10, 1), column(11, 2), column(12, 3)],
            vec![task(1, 10, 1), task(2, 11, 0)],
        );

        assert_eq!(board.next_task_position(10), 2);
        assert_eq!(board.next_task_position(11), 1);
        assert_eq!(board.next_task_position(12), 0);
        assert_eq!(board.next_column_position(), 4);
    }

    #[test]
    fn test_contiguous_positions_append_at_count() {
        let mut board = BoardState::default();
        board.open(project());
        board.replace(vec![column(10, 0)], vec![task(1, 10, 0), task(2, 10, 1)]);
        assert_eq!(board.next_task_position(10), board.task_count(10) as i32);
        assert_eq!(board.next_column_position(), 1);
    }
}
