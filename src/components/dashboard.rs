//! Dashboard
//!
//! Landing section: module shortcuts plus the project figures already held
//! in the store.

use leptos::prelude::*;

use erp_core::{Section, ShellEvent};

use crate::components::StatCard;
use crate::context::use_app_context;
use crate::store::{store_dispatch, use_app_store, AppStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let store = use_app_store();
    use_app_context().load_projects();

    view! {
        <div class="module-page">
            <div class="page-header">
                <h1>"Dashboard"</h1>
            </div>
            {move || {
                let summary = store.overview().with(|o| o.summary.clone()).unwrap_or_default();
                view! {
                    <div class="stat-grid">
                        <StatCard label="Projects" value=summary.total_projects.to_string() />
                        <StatCard label="Active projects" value=summary.active.to_string() />
                        <StatCard label="Open tasks" value=summary.total_tasks.to_string() />
                    </div>
                }
            }}
            <div class="module-grid">
                {Section::NAV
                    .into_iter()
                    .filter(|s| *s != Section::Dashboard)
                    .map(|section| view! {
                        <button
                            class="module-tile"
                            on:click=move |_| store_dispatch(&store, ShellEvent::Navigate(section))
                        >
                            <span class="module-icon">{section.icon()}</span>
                            <span>{section.label()}</span>
                        </button>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
