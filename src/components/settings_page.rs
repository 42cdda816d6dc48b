//! Settings
//!
//! Account details and the tail of the host log for troubleshooting.

use leptos::prelude::*;
use leptos::task::spawn_local;

use erp_core::nav::UserRole;

use crate::commands;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let store = use_app_store();
    let reload = RwSignal::new(0u32);
    let lines = RwSignal::new(Vec::<String>::new());

    Effect::new(move |_| {
        let _ = reload.get();
        spawn_local(async move {
            match commands::recent_logs().await {
                Ok(recent) => lines.set(recent),
                Err(e) => web_sys::console::warn_1(&format!("[SETTINGS] recent logs: {}", e).into()),
            }
        });
    });

    view! {
        <div class="module-page">
            <div class="page-header">
                <h1>"Settings"</h1>
            </div>
            {move || {
                let session = store.session().get();
                let role = match session.role {
                    UserRole::Admin => "Administrator",
                    UserRole::Tenant => "Member",
                };
                view! {
                    <dl class="account">
                        <dt>"Email"</dt>
                        <dd>{session.email.unwrap_or_else(|| "Not signed in".to_string())}</dd>
                        <dt>"Role"</dt>
                        <dd>{role}</dd>
                    </dl>
                }
            }}
            <div class="page-header">
                <h2>"Recent activity"</h2>
                <button class="btn-secondary" on:click=move |_| reload.update(|n| *n += 1)>"Refresh"</button>
            </div>
            <pre class="log-tail">{move || lines.get().join("\n")}</pre>
        </div>
    }
}
