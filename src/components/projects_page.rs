//! Projects Page
//!
//! Project list with summary cards. Opening a project swaps the list for
//! its kanban board.

use leptos::either::Either;
use leptos::prelude::*;

use erp_core::forms::ProjectForm;
use erp_core::models::{Project, ProjectStatus};

use crate::components::form_fields::{form_input, form_select, form_textarea};
use crate::components::{KanbanBoard, Modal, StatCard};
use crate::confirm::BrowserConfirm;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // None = closed, Some(None) = creating, Some(Some(id)) = editing
    let editing = RwSignal::new(None::<Option<u32>>);
    let form = RwSignal::new(ProjectForm::default());
    let form_error = RwSignal::new(None::<String>);
    let busy = Signal::derive(move || store.board_busy().get() > 0);

    ctx.load_projects();

    let open_form = move |project: Option<&Project>| {
        form.set(project.map(ProjectForm::from_project).unwrap_or_default());
        form_error.set(None);
        editing.set(Some(project.map(|p| p.id)));
    };

    let save = move |_: ()| {
        let Some(id) = editing.get_untracked() else { return };
        let current = form.get_untracked();
        if let Err(e) = current.to_payload() {
            form_error.set(Some(e.to_string()));
            return;
        }
        ctx.spawn_board(
            "save project",
            move |board| async move { board.save_project(id, &current).await },
            move |result| match result {
                Ok(_) => editing.set(None),
                Err(e) => form_error.set(Some(e.to_string())),
            },
        );
    };

    let delete = move |id: u32| {
        ctx.spawn_board(
            "delete project",
            move |board| async move { board.delete_project(id, &BrowserConfirm).await },
            |_| {},
        );
    };

    let open_board = move |project: Project| {
        ctx.spawn_board(
            "open board",
            move |board| async move {
                board.open_board(project).await;
                Ok(())
            },
            |_| {},
        );
    };

    let on_open = Callback::new(open_board);
    let on_edit = Callback::new(move |project: Project| open_form(Some(&project)));
    let on_delete = Callback::new(delete);
    let board_open = move || store.board().with(|b| b.is_open());

    let list_view = move || {
        let overview = store.overview().get();
        let summary = overview.summary.clone().unwrap_or_default();
        view! {
            <div class="page-header">
                <h1>"Projects"</h1>
                <button class="btn-primary" on:click=move |_| open_form(None)>"+ New project"</button>
            </div>
            {overview.load_error.clone().map(|e| view! {
                <div class="banner-error">"Could not load projects: " {e}</div>
            })}
            <div class="stat-grid">
                <StatCard label="Total projects" value=summary.total_projects.to_string() />
                <StatCard label="Active" value=summary.active.to_string() />
                <StatCard label="Completed" value=summary.completed.to_string() />
                <StatCard label="Total tasks" value=summary.total_tasks.to_string() />
            </div>
            {if overview.projects.is_empty() {
                Either::Left(view! {
                    <p class="empty-state">"No projects yet. Create one to start a board."</p>
                })
            } else {
                Either::Right(view! {
                    <div class="project-grid">
                        {overview
                            .projects
                            .iter()
                            .cloned()
                            .map(|project| {
                                let count = overview.task_count(project.id);
                                view! { <ProjectCard project=project count=count on_open=on_open on_edit=on_edit on_delete=on_delete /> }
                            })
                            .collect_view()}
                    </div>
                })
            }}
        }
    };

    view! {
        <div class="projects-page">
            <Show when=board_open fallback=list_view>
                <KanbanBoard />
            </Show>

            <Show when=move || editing.get().is_some()>
                <Modal
                    title=Signal::derive(move || match editing.get() {
                        Some(Some(_)) => "Edit project".to_string(),
                        _ => "New project".to_string(),
                    })
                    on_submit=Callback::new(save)
                    on_close=Callback::new(move |_| editing.set(None))
                    error=form_error
                    busy=busy
                >
                    {form_input(form, "Name", "text", true, |f| f.name.as_str(), |f, v| f.name = v)}
                    {form_textarea(form, "Description", |f| f.description.as_str(), |f, v| f.description = v)}
                    {form_input(form, "Owner", "text", false, |f| f.owner.as_str(), |f, v| f.owner = v)}
                    {form_select(
                        form,
                        "Status",
                        ProjectStatus::ALL.iter().map(|s| (s.as_str().to_string(), s.label())).collect(),
                        |f| f.status.as_str().to_string(),
                        |f, v| f.status = ProjectStatus::from_str(&v),
                    )}
                    {form_input(form, "Color", "color", false, |f| f.color.as_str(), |f, v| f.color = v)}
                </Modal>
            </Show>
        </div>
    }
}

#[component]
fn ProjectCard(
    project: Project,
    count: usize,
    on_open: Callback<Project>,
    on_edit: Callback<Project>,
    on_delete: Callback<u32>,
) -> impl IntoView {
    let id = project.id;
    let for_open = project.clone();
    let for_edit = project.clone();

    view! {
        <article
            class="project-card"
            style=format!("border-left-color: {}", project.color)
            on:click=move |_| on_open.run(for_open.clone())
        >
            <div class="project-card-header">
                <h3>{project.name.clone()}</h3>
                <span class="status-badge" style=format!("color: {}", project.status.color())>
                    {project.status.label()}
                </span>
            </div>
            {project.description.clone().map(|d| view! { <p class="project-description">{d}</p> })}
            <div class="project-card-footer">
                <span>{format!("{} tasks", count)}</span>
                {project.owner.clone().map(|o| view! { <span class="project-owner">{o}</span> })}
                <button
                    class="icon-btn"
                    title="Edit project"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_edit.run(for_edit.clone());
                    }
                >
                    "✎"
                </button>
                <button
                    class="icon-btn"
                    title="Delete project"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_delete.run(id);
                    }
                >
                    "×"
                </button>
            </div>
        </article>
    }
}
