//! Sidebar Navigation

use leptos::prelude::*;

use erp_core::{Section, ShellEvent};

use crate::store::{store_dispatch, use_app_store, AppStateStoreFields};

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_app_store();
    let current = move || store.shell().with(|s| s.section);

    view! {
        <nav class="sidebar">
            <div class="sidebar-brand">"ERP"</div>
            <ul class="sidebar-nav">
                {Section::NAV
                    .into_iter()
                    .map(|section| view! {
                        <li>
                            <button
                                class="nav-item"
                                class:active=move || current() == section
                                on:click=move |_| store_dispatch(&store, ShellEvent::Navigate(section))
                            >
                                <span class="nav-icon">{section.icon()}</span>
                                <span class="nav-label">{section.label()}</span>
                            </button>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
