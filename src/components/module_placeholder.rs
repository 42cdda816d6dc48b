//! Sections without CRUD screens yet; the assistant still works for them.

use leptos::prelude::*;

use erp_core::{Section, ShellEvent};

use crate::store::{store_dispatch, use_app_store, AppStateStoreFields};

#[component]
pub fn ModulePlaceholder(section: Section) -> impl IntoView {
    let store = use_app_store();
    let ai_open = move || store.shell().with(|s| s.ai_panel_open);

    view! {
        <div class="module-page placeholder">
            <div class="page-header">
                <h1>{section.icon()} " " {section.label()}</h1>
            </div>
            <p class="empty-state">"Nothing to manage here yet."</p>
            <Show when=move || !ai_open()>
                <button class="btn-primary" on:click=move |_| store_dispatch(&store, ShellEvent::ToggleAiPanel)>
                    {format!("Ask the {} assistant", section.label())}
                </button>
            </Show>
        </div>
    }
}
