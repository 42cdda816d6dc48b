//! Top Bar
//!
//! Section title, assistant toggle and the profile menu.

use leptos::prelude::*;

use erp_core::nav::{gate, Access, Area};
use erp_core::{Section, ShellEvent};

use crate::store::{store_dispatch, use_app_store, AppStateStoreFields};

#[component]
pub fn TopBar(
    /// Switches the shell to the admin layout
    #[prop(into)] on_admin: Callback<()>,
) -> impl IntoView {
    let store = use_app_store();
    let shell = move || store.shell().get();
    let email = move || {
        store
            .session()
            .with(|s| s.email.clone())
            .unwrap_or_else(|| "Guest".to_string())
    };
    let is_admin = move || store.session().with(|s| gate(s, Area::Admin) == Access::Granted);

    view! {
        <header class="top-bar">
            <h2 class="top-bar-title">{move || shell().section.label()}</h2>
            <div class="top-bar-actions">
                <button
                    class="btn-secondary"
                    class:active=move || shell().ai_panel_open
                    on:click=move |_| store_dispatch(&store, ShellEvent::ToggleAiPanel)
                >
                    "✦ AI"
                </button>
                <div class="profile">
                    <button class="profile-btn" on:click=move |_| store_dispatch(&store, ShellEvent::ToggleProfileMenu)>
                        {email}
                    </button>
                    <Show when=move || shell().profile_menu_open>
                        <div class="profile-menu">
                            <div class="profile-email muted">{email}</div>
                            <button on:click=move |_| store_dispatch(&store, ShellEvent::Navigate(Section::Settings))>
                                "Settings"
                            </button>
                            <Show when=is_admin>
                                <button on:click=move |_| {
                                    store_dispatch(&store, ShellEvent::CloseProfileMenu);
                                    on_admin.run(());
                                }>
                                    "Admin panel"
                                </button>
                            </Show>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}
