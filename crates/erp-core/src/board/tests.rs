//! Board Controller Tests
//!
//! Run against the in-memory backend.

use crate::error::DomainError;
use crate::forms::{ColumnForm, ProjectForm, TaskForm};
use crate::models::{Project, TaskPriority};
use crate::testing::MemoryBackend;

use super::{BoardController, DragState};

fn column_form(name: &str) -> ColumnForm {
    ColumnForm {
        name: name.to_string(),
        ..ColumnForm::default()
    }
}

fn task_form(title: &str) -> TaskForm {
    TaskForm {
        title: title.to_string(),
        ..TaskForm::default()
    }
}

async fn setup_board(columns: &[&str]) -> (BoardController<MemoryBackend>, Project, Vec<u32>) {
    let controller = BoardController::new(MemoryBackend::new());
    let form = ProjectForm {
        name: "Launch".to_string(),
        ..ProjectForm::default()
    };
    let project = controller.save_project(None, &form).await.expect("create project");
    controller.open_board(project.clone()).await;

    let mut ids = Vec::new();
    for name in columns {
        let column = controller.create_column(&column_form(name)).await.expect("create column");
        ids.push(column.id);
    }
    (controller, project, ids)
}

#[tokio::test]
async fn test_launch_board_end_to_end() {
    let (controller, project, cols) = setup_board(&["Todo", "Doing", "Done"]).await;
    let (todo, doing) = (cols[0], cols[1]);

    let board = controller.board();
    let names: Vec<&str> = board.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Todo", "Doing", "Done"]);
    let positions: Vec<i32> = board.columns.iter().map(|c| c.position).collect();
    assert_eq!(positions, vec![0, 1, 2]);

    let task = controller.create_task(todo, &task_form("Draft launch plan")).await.expect("create task");
    assert_eq!(task.position, 0);
    assert_eq!(controller.overview().task_count(project.id), 1);

    assert!(controller.begin_drag(task.id));
    controller.drag_over_column(doing);
    let moved = controller.release().await.expect("drop").expect("a task was dragged");
    assert_eq!(moved.column_id, doing);
    assert_eq!(moved.position, 0);

    let board = controller.board();
    assert_eq!(board.task_count(todo), 0);
    assert_eq!(board.tasks_in(doing).map(|t| t.id).collect::<Vec<_>>(), vec![task.id]);
    assert_eq!(board.drag, DragState::Idle);
}

#[tokio::test]
async fn test_drop_appends_at_destination_count() {
    let (controller, _, cols) = setup_board(&["Todo", "Doing"]).await;
    for title in ["A", "B", "C"] {
        controller.create_task(cols[1], &task_form(title)).await.unwrap();
    }
    let mover = controller.create_task(cols[0], &task_form("Mover")).await.unwrap();

    controller.begin_drag(mover.id);
    controller.drag_over_column(cols[1]);
    let moved = controller.drop_on_column(cols[1]).await.unwrap().unwrap();

    assert_eq!(moved.position, 3);
    let titles: Vec<String> = controller.board().tasks_in(cols[1]).map(|t| t.title.clone()).collect();
    assert_eq!(titles, vec!["A", "B", "C", "Mover"]);
}

#[tokio::test]
async fn test_concurrent_drops_get_distinct_positions() {
    let (controller, _, cols) = setup_board(&["Todo", "Done"]).await;
    let first = controller.create_task(cols[0], &task_form("First")).await.unwrap();
    let second = controller.create_task(cols[0], &task_form("Second")).await.unwrap();

    let (a, b) = futures::join!(
        controller.relocate(first.id, cols[1]),
        controller.relocate(second.id, cols[1])
    );
    let mut positions = vec![a.unwrap().position, b.unwrap().position];
    positions.sort();
    assert_eq!(positions, vec![0, 1]);

    let stored: Vec<i32> = controller
        .api()
        .stored_tasks()
        .iter()
        .filter(|t| t.column_id == cols[1])
        .map(|t| t.position)
        .collect();
    assert_eq!(stored.len(), 2);
    assert_ne!(stored[0], stored[1]);
}

#[tokio::test]
async fn test_release_outside_columns_cancels() {
    let (controller, _, cols) = setup_board(&["Todo", "Doing"]).await;
    let task = controller.create_task(cols[0], &task_form("Stay")).await.unwrap();

    controller.begin_drag(task.id);
    controller.drag_over_column(cols[1]);
    controller.drag_leave();
    assert_eq!(controller.release().await.unwrap(), None);

    assert_eq!(controller.api().write_count("move_task"), 0);
    let stored = controller.api().stored_task(task.id).unwrap();
    assert_eq!((stored.column_id, stored.position), (cols[0], 0));
    assert!(!controller.board().drag.is_dragging());
}

#[tokio::test]
async fn test_drop_without_drag_is_noop() {
    let (controller, _, cols) = setup_board(&["Todo"]).await;
    assert_eq!(controller.drop_on_column(cols[0]).await.unwrap(), None);
    assert!(!controller.begin_drag(999));
    assert_eq!(controller.api().write_count("move_task"), 0);
}

#[tokio::test]
async fn test_delete_column_removes_its_tasks() {
    let (controller, project, cols) = setup_board(&["Todo", "Done"]).await;
    controller.create_task(cols[0], &task_form("Doomed")).await.unwrap();
    controller.create_task(cols[1], &task_form("Kept")).await.unwrap();
    assert_eq!(controller.overview().task_count(project.id), 2);

    assert!(controller.delete_column(cols[0], &true).await.unwrap());

    let board = controller.board();
    assert!(board.column(cols[0]).is_none());
    assert_eq!(board.tasks.len(), 1);
    assert_eq!(board.tasks[0].title, "Kept");
    assert_eq!(controller.overview().task_count(project.id), 1);
}

#[tokio::test]
async fn test_declined_confirm_makes_no_call() {
    let (controller, project, cols) = setup_board(&["Todo"]).await;
    let task = controller.create_task(cols[0], &task_form("Keep me")).await.unwrap();

    assert!(!controller.delete_task(task.id, &false).await.unwrap());
    assert!(!controller.delete_column(cols[0], &false).await.unwrap());
    assert!(!controller.delete_project(project.id, &false).await.unwrap());

    assert_eq!(controller.api().write_count("delete_task"), 0);
    assert_eq!(controller.api().write_count("delete_column"), 0);
    assert_eq!(controller.api().write_count("delete_project"), 0);
    assert_eq!(controller.board().tasks.len(), 1);
}

#[tokio::test]
async fn test_delete_task_refreshes_counts() {
    let (controller, project, cols) = setup_board(&["Todo"]).await;
    let task = controller.create_task(cols[0], &task_form("Short lived")).await.unwrap();
    assert_eq!(controller.overview().task_count(project.id), 1);

    assert!(controller.delete_task(task.id, &true).await.unwrap());
    assert_eq!(controller.overview().task_count(project.id), 0);
    assert!(controller.board().tasks.is_empty());
}

#[tokio::test]
async fn test_update_task_keeps_placement() {
    let (controller, _, cols) = setup_board(&["Todo"]).await;
    controller.create_task(cols[0], &task_form("First")).await.unwrap();
    let task = controller.create_task(cols[0], &task_form("Second")).await.unwrap();

    let mut form = TaskForm::from_task(&task);
    form.title = "Second, edited".to_string();
    form.priority = TaskPriority::Critical;
    form.tags = "ui, backend".to_string();
    let updated = controller.update_task(task.id, &form).await.unwrap();

    assert_eq!((updated.column_id, updated.position), (cols[0], 1));
    assert_eq!(updated.priority, TaskPriority::Critical);
    assert_eq!(updated.tag_list(), vec!["ui", "backend"]);
}

#[tokio::test]
async fn test_rename_column_keeps_position() {
    let (controller, _, cols) = setup_board(&["Todo", "Doing"]).await;
    let form = ColumnForm {
        name: "In progress".to_string(),
        color: "#60a5fa".to_string(),
    };
    controller.update_column(cols[1], &form).await.unwrap();

    let column = controller.board().column(cols[1]).cloned().unwrap();
    assert_eq!(column.name, "In progress");
    assert_eq!(column.color, "#60a5fa");
    assert_eq!(column.position, 1);
}

#[tokio::test]
async fn test_blank_names_rejected_before_any_call() {
    let (controller, _, cols) = setup_board(&["Todo"]).await;
    let writes = controller.api().writes.borrow().len();

    let err = controller.create_column(&column_form("   ")).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
    let err = controller.create_task(cols[0], &task_form("")).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));

    assert_eq!(controller.api().writes.borrow().len(), writes);
}

#[tokio::test]
async fn test_load_failure_degrades_to_empty_board() {
    let (controller, project, cols) = setup_board(&["Todo"]).await;
    controller.create_task(cols[0], &task_form("Hidden")).await.unwrap();

    controller.api().offline.set(true);
    controller.load_board(project.id).await;
    let board = controller.board();
    assert!(board.columns.is_empty());
    assert!(board.tasks.is_empty());
    assert!(board.load_error.is_some());

    controller.api().offline.set(false);
    controller.load_board(project.id).await;
    let board = controller.board();
    assert_eq!(board.columns.len(), 1);
    assert_eq!(board.tasks.len(), 1);
    assert_eq!(board.load_error, None);
}

#[tokio::test]
async fn test_mutations_require_open_board() {
    let (controller, _, cols) = setup_board(&["Todo"]).await;
    controller.close_board();
    let err = controller.create_task(cols[0], &task_form("Orphan")).await.unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));
}

#[tokio::test]
async fn test_delete_open_project_closes_board() {
    let (controller, project, _) = setup_board(&["Todo"]).await;
    assert!(controller.delete_project(project.id, &true).await.unwrap());
    assert!(!controller.board().is_open());
    assert!(controller.overview().projects.is_empty());
}

#[tokio::test]
async fn test_save_project_refreshes_open_board_header() {
    let (controller, project, _) = setup_board(&[]).await;
    let mut form = ProjectForm::from_project(&project);
    form.name = "Launch v2".to_string();
    controller.save_project(Some(project.id), &form).await.unwrap();

    assert_eq!(controller.board().project.unwrap().name, "Launch v2");
    assert_eq!(controller.overview().projects[0].name, "Launch v2");
}

#[tokio::test]
async fn test_drop_after_departure_appends_past_gap() {
    let (controller, _, cols) = setup_board(&["Todo", "Doing"]).await;
    let (todo, doing) = (cols[0], cols[1]);
    let first = controller.create_task(todo, &task_form("First")).await.unwrap();
    let second = controller.create_task(todo, &task_form("Second")).await.unwrap();
    let visitor = controller.create_task(doing, &task_form("Visitor")).await.unwrap();
    assert_eq!((first.position, second.position), (0, 1));

    // Todo keeps only Second@1, one card but a gap at 0
    controller.relocate(first.id, doing).await.unwrap();
    let moved = controller.relocate(visitor.id, todo).await.unwrap();
    assert_eq!(moved.position, 2);

    let positions: Vec<i32> = controller.board().tasks_in(todo).map(|t| t.position).collect();
    assert_eq!(positions, vec![1, 2]);
}

#[tokio::test]
async fn test_new_column_after_delete_gets_fresh_position() {
    let (controller, _, cols) = setup_board(&["Todo", "Doing", "Done"]).await;
    assert!(controller.delete_column(cols[0], &true).await.unwrap());

    let added = controller.create_column(&column_form("Review")).await.unwrap();
    assert_eq!(added.position, 3);

    let positions: Vec<i32> = controller.board().columns.iter().map(|c| c.position).collect();
    assert_eq!(positions, vec![1, 2, 3]);
    let names: Vec<String> = controller.board().columns.iter().map(|c| c.name.clone()).collect();
    assert_eq!(names, vec!["Doing", "Done", "Review"]);
}

#[tokio::test]
async fn test_drop_on_own_column_changes_nothing() {
    let (controller, _, cols) = setup_board(&["Todo"]).await;
    let top = controller.create_task(cols[0], &task_form("A")).await.unwrap();
    controller.create_task(cols[0], &task_form("B")).await.unwrap();

    controller.begin_drag(top.id);
    controller.drag_over_column(cols[0]);
    let dropped = controller.release().await.unwrap().unwrap();

    assert_eq!((dropped.column_id, dropped.position), (cols[0], 0));
    assert_eq!(controller.api().write_count("move_task"), 0);
    let titles: Vec<String> = controller.board().tasks_in(cols[0]).map(|t| t.title.clone()).collect();
    assert_eq!(titles, vec!["A", "B"]);
    assert_eq!(controller.board().drag, DragState::Idle);
}

#[tokio::test]
async fn test_rejected_drop_keeps_snapshot_and_ends_drag() {
    let (controller, _, cols) = setup_board(&["Todo", "Doing"]).await;
    let task = controller.create_task(cols[0], &task_form("Stuck")).await.unwrap();
    let before = controller.board();

    controller.api().reject_writes.set(true);
    controller.begin_drag(task.id);
    controller.drag_over_column(cols[1]);
    let err = controller.drop_on_column(cols[1]).await.unwrap_err();

    assert!(err.is_network());
    assert_eq!(controller.board().drag, DragState::Idle);
    assert_eq!(controller.board(), before);
    let stored = controller.api().stored_task(task.id).unwrap();
    assert_eq!((stored.column_id, stored.position), (cols[0], 0));
}

#[tokio::test]
async fn test_rejected_create_leaves_board_untouched() {
    let (controller, project, cols) = setup_board(&["Todo"]).await;
    let before = controller.board();

    controller.api().reject_writes.set(true);
    let err = controller.create_task(cols[0], &task_form("Never saved")).await.unwrap_err();
    assert!(err.is_network());
    assert!(controller.create_column(&column_form("Never saved")).await.is_err());

    assert_eq!(controller.board(), before);
    assert!(controller.api().stored_tasks().is_empty());
    assert_eq!(controller.overview().task_count(project.id), 0);

    controller.api().reject_writes.set(false);
    let task = controller.create_task(cols[0], &task_form("Saved")).await.unwrap();
    assert_eq!(task.position, 0);
}

#[tokio::test]
async fn test_task_load_failure_keeps_columns() {
    let (controller, project, cols) = setup_board(&["Todo", "Done"]).await;
    controller.create_task(cols[0], &task_form("Hidden")).await.unwrap();

    controller.api().fail_tasks.set(true);
    controller.load_board(project.id).await;

    let board = controller.board();
    assert_eq!(board.columns.len(), 2);
    assert!(board.tasks.is_empty());
    assert!(board.load_error.as_deref().unwrap_or_default().contains("tasks unavailable"));
}
