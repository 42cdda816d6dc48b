//! Kanban Board Component
//!
//! Columns left-to-right, task cards top-to-bottom. Cards are dragged with
//! the shared `DndSignals`; every change goes through the board controller
//! and the view re-renders from the reloaded snapshot.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_column_mouseenter, make_on_column_mouseleave, make_on_mousedown, DndSignals};

use erp_core::forms::{ColumnForm, TaskForm};
use erp_core::models::{BoardColumn, Task, TaskPriority};

use crate::components::form_fields::{form_input, form_select, form_textarea};
use crate::components::Modal;
use crate::confirm::BrowserConfirm;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[derive(Clone, Copy, PartialEq)]
enum ColumnEdit {
    New,
    Existing(u32),
}

#[derive(Clone, Copy, PartialEq)]
enum TaskEdit {
    New { column: u32 },
    Existing(u32),
}

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let dnd = expect_context::<DndSignals>();

    let column_edit = RwSignal::new(None::<ColumnEdit>);
    let column_form = RwSignal::new(ColumnForm::default());
    let task_edit = RwSignal::new(None::<TaskEdit>);
    let task_form = RwSignal::new(TaskForm::default());
    let form_error = RwSignal::new(None::<String>);
    let busy = Signal::derive(move || store.board_busy().get() > 0);

    let open_column_modal = move |edit: ColumnEdit| {
        let form = match edit {
            ColumnEdit::New => ColumnForm::default(),
            ColumnEdit::Existing(id) => store
                .board()
                .with_untracked(|b| b.column(id).map(ColumnForm::from_column))
                .unwrap_or_default(),
        };
        column_form.set(form);
        form_error.set(None);
        column_edit.set(Some(edit));
    };

    let open_task_modal = move |edit: TaskEdit| {
        let form = match edit {
            TaskEdit::New { .. } => TaskForm::default(),
            TaskEdit::Existing(id) => store
                .board()
                .with_untracked(|b| b.task(id).map(TaskForm::from_task))
                .unwrap_or_default(),
        };
        task_form.set(form);
        form_error.set(None);
        task_edit.set(Some(edit));
    };

    let save_column = move |_: ()| {
        let Some(edit) = column_edit.get_untracked() else { return };
        let form = column_form.get_untracked();
        if let Err(e) = form.to_patch() {
            form_error.set(Some(e.to_string()));
            return;
        }
        ctx.spawn_board(
            "save column",
            move |board| async move {
                match edit {
                    ColumnEdit::New => board.create_column(&form).await,
                    ColumnEdit::Existing(id) => board.update_column(id, &form).await,
                }
            },
            move |result| match result {
                Ok(_) => column_edit.set(None),
                Err(e) => form_error.set(Some(e.to_string())),
            },
        );
    };

    let save_task = move |_: ()| {
        let Some(edit) = task_edit.get_untracked() else { return };
        let form = task_form.get_untracked();
        if let Err(e) = form.to_patch() {
            form_error.set(Some(e.to_string()));
            return;
        }
        ctx.spawn_board(
            "save task",
            move |board| async move {
                match edit {
                    TaskEdit::New { column } => board.create_task(column, &form).await,
                    TaskEdit::Existing(id) => board.update_task(id, &form).await,
                }
            },
            move |result| match result {
                Ok(_) => task_edit.set(None),
                Err(e) => form_error.set(Some(e.to_string())),
            },
        );
    };

    let delete_column = move |id: u32| {
        ctx.spawn_board(
            "delete column",
            move |board| async move { board.delete_column(id, &BrowserConfirm).await },
            |_| {},
        );
    };

    let delete_task = move |id: u32| {
        ctx.spawn_board(
            "delete task",
            move |board| async move { board.delete_task(id, &BrowserConfirm).await },
            move |result| {
                if let Ok(true) = result {
                    task_edit.set(None);
                }
            },
        );
    };

    let project_name = move || {
        store
            .board()
            .with(|b| b.project.as_ref().map(|p| p.name.clone()))
            .unwrap_or_default()
    };

    view! {
        <div class="kanban">
            <div class="kanban-header">
                <button class="btn-link" on:click=move |_| ctx.with_board(|b| b.close_board())>
                    "← Projects"
                </button>
                <h2>{project_name}</h2>
                <button class="btn-primary" disabled=move || busy.get() on:click=move |_| open_column_modal(ColumnEdit::New)>
                    "+ Column"
                </button>
            </div>

            {move || store.board().with(|b| b.load_error.clone()).map(|e| view! {
                <div class="banner-error">"Could not load this board: " {e}</div>
            })}

            <div class="kanban-columns">
                <For
                    each=move || store.board().with(|b| b.columns.clone())
                    key=|column| (column.id, column.name.clone(), column.color.clone())
                    children=move |column: BoardColumn| {
                        let column_id = column.id;
                        let tasks = move || {
                            store.board().with(|b| b.tasks_in(column_id).cloned().collect::<Vec<Task>>())
                        };
                        let count = move || store.board().with(|b| b.task_count(column_id));
                        view! {
                            <section
                                class="kanban-column"
                                class:hovered=move || dnd.is_hovered(column_id)
                                on:mouseenter=make_on_column_mouseenter(dnd, column_id)
                                on:mouseleave=make_on_column_mouseleave(dnd, column_id)
                            >
                                <header class="column-header" style=format!("border-top-color: {}", column.color)>
                                    <span class="column-name">{column.name.clone()}</span>
                                    <span class="column-count">{count}</span>
                                    <button class="icon-btn" title="Edit column" on:click=move |_| open_column_modal(ColumnEdit::Existing(column_id))>
                                        "✎"
                                    </button>
                                    <button class="icon-btn" title="Delete column" on:click=move |_| delete_column(column_id)>
                                        "×"
                                    </button>
                                </header>
                                <div class="column-body">
                                    <For
                                        each=tasks
                                        key=|task| (task.id, task.position, task.title.clone(), task.description.clone(), task.priority, task.tags.clone(), task.assignee.clone())
                                        children=move |task: Task| view! { <TaskCard task=task on_open=Callback::new(move |id| open_task_modal(TaskEdit::Existing(id))) /> }
                                    />
                                </div>
                                <button class="add-task-btn" on:click=move |_| open_task_modal(TaskEdit::New { column: column_id })>
                                    "+ Add task"
                                </button>
                            </section>
                        }
                    }
                />
            </div>

            <Show when=move || column_edit.get().is_some()>
                <Modal
                    title=Signal::derive(move || match column_edit.get() {
                        Some(ColumnEdit::Existing(_)) => "Edit column".to_string(),
                        _ => "New column".to_string(),
                    })
                    on_submit=Callback::new(save_column)
                    on_close=Callback::new(move |_| column_edit.set(None))
                    error=form_error
                    busy=busy
                >
                    {form_input(column_form, "Name", "text", true, |f| f.name.as_str(), |f, v| f.name = v)}
                    {form_input(column_form, "Color", "color", false, |f| f.color.as_str(), |f, v| f.color = v)}
                </Modal>
            </Show>

            <Show when=move || task_edit.get().is_some()>
                <Modal
                    title=Signal::derive(move || match task_edit.get() {
                        Some(TaskEdit::Existing(_)) => "Edit task".to_string(),
                        _ => "New task".to_string(),
                    })
                    on_submit=Callback::new(save_task)
                    on_close=Callback::new(move |_| task_edit.set(None))
                    error=form_error
                    busy=busy
                >
                    {form_input(task_form, "Title", "text", true, |f| f.title.as_str(), |f, v| f.title = v)}
                    {form_textarea(task_form, "Description", |f| f.description.as_str(), |f, v| f.description = v)}
                    {form_select(
                        task_form,
                        "Priority",
                        TaskPriority::ALL.iter().map(|p| (p.as_str().to_string(), p.label().to_string())).collect(),
                        |f| f.priority.as_str().to_string(),
                        |f, v| f.priority = TaskPriority::from_str(&v),
                    )}
                    {form_input(task_form, "Assignee", "text", false, |f| f.assignee.as_str(), |f, v| f.assignee = v)}
                    {form_input(task_form, "Tags (comma separated)", "text", false, |f| f.tags.as_str(), |f, v| f.tags = v)}
                    {move || match task_edit.get() {
                        Some(TaskEdit::Existing(id)) => Some(view! {
                            <button type="button" class="btn-danger" on:click=move |_| delete_task(id)>
                                "Delete task"
                            </button>
                        }),
                        _ => None,
                    }}
                </Modal>
            </Show>
        </div>
    }
}

#[component]
fn TaskCard(task: Task, on_open: Callback<u32>) -> impl IntoView {
    let dnd = expect_context::<DndSignals>();
    let task_id = task.id;
    let tags: Vec<String> = task.tag_list().into_iter().map(str::to_string).collect();

    view! {
        <article
            class="task-card"
            class:dragging=move || dnd.is_dragging(task_id)
            on:mousedown=make_on_mousedown(dnd, task_id)
            on:click=move |_| {
                // A drag ends with a click on the card; ignore it
                if !dnd.drag_just_ended_read.get_untracked() {
                    on_open.run(task_id);
                }
            }
        >
            <div class="task-title">{task.title.clone()}</div>
            {task.description.clone().map(|d| view! { <p class="task-description">{d}</p> })}
            <div class="task-meta">
                <span class="priority-badge" style=format!("color: {}", task.priority.color())>
                    {task.priority.label()}
                </span>
                {task.assignee.clone().map(|a| view! { <span class="task-assignee">{a}</span> })}
            </div>
            <div class="task-tags">
                {tags.into_iter().map(|tag| view! { <span class="tag-chip">{tag}</span> }).collect_view()}
            </div>
        </article>
    }
}
