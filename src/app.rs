//! ERP Frontend App
//!
//! Shell layout: sidebar, top bar, the active section and the assistant
//! panel. The admin area replaces the whole shell once the session passes
//! the admin gate.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{bind_global_handlers, create_dnd_signals, DragHooks};
use reactive_stores::Store;

use erp_core::nav::{gate, Access, Area};
use erp_core::{Section, SessionInfo};

use crate::commands;
use crate::components::{
    AdminPage, AiPanel, Dashboard, FinancePage, HrPage, ModulePlaceholder, ProjectsPage, SettingsPage, Sidebar, TopBar,
};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new(store);
    provide_context(ctx);

    // One set of document listeners for the whole app
    let dnd = create_dnd_signals(DragHooks {
        on_start: Callback::new(move |task_id: u32| {
            ctx.with_board(|b| {
                b.begin_drag(task_id);
            })
        }),
        on_hover: Callback::new(move |column_id: u32| ctx.with_board(|b| b.drag_over_column(column_id))),
        on_leave: Callback::new(move |_| ctx.with_board(|b| b.drag_leave())),
        on_release: Callback::new(move |(_task_id, column): (u32, Option<u32>)| match column {
            Some(column_id) => ctx.spawn_board(
                "move task",
                move |board| async move { board.drop_on_column(column_id).await },
                |_| {},
            ),
            None => ctx.with_board(|b| b.cancel_drag()),
        }),
    });
    bind_global_handlers(dnd);
    provide_context(dnd);

    let area = RwSignal::new(Area::Tenant);

    Effect::new(move |_| {
        spawn_local(async move {
            let session = commands::get_session().await.unwrap_or_else(|e| {
                web_sys::console::warn_1(&format!("[APP] no session: {}", e).into());
                SessionInfo::default()
            });
            store.session().set(session);
        });
    });

    let admin_view = move || {
        let access = store.session().with(|s| gate(s, Area::Admin));
        let back = move |_: web_sys::MouseEvent| area.set(Area::Tenant);
        match access {
            Access::Granted => view! {
                <div class="admin-layout">
                    <header class="top-bar">
                        <h2 class="top-bar-title">"Admin"</h2>
                        <button class="btn-secondary" on:click=back>"Back to dashboard"</button>
                    </header>
                    <AdminPage />
                </div>
            }
            .into_any(),
            Access::RedirectToLogin => view! {
                <div class="login-required">
                    <h2>"Sign in required"</h2>
                    <p>"The admin area is only available to platform administrators."</p>
                    <button class="btn-primary" on:click=back>"Back to dashboard"</button>
                </div>
            }
            .into_any(),
        }
    };

    // Panel toggles must not remount the page
    let section = Memo::new(move |_| store.shell().with(|s| s.section));
    let section_view = move || match section.get() {
        Section::Dashboard => view! { <Dashboard /> }.into_any(),
        Section::Projects => view! { <ProjectsPage /> }.into_any(),
        Section::Finance => view! { <FinancePage /> }.into_any(),
        Section::Hr => view! { <HrPage /> }.into_any(),
        Section::Settings => view! { <SettingsPage /> }.into_any(),
        other => view! { <ModulePlaceholder section=other /> }.into_any(),
    };

    let tenant_view = move || {
        view! {
            <div class="app-layout">
                <Sidebar />
                <main class="main-content">
                    <TopBar on_admin=Callback::new(move |_| area.set(Area::Admin)) />
                    <div class="section-content">{section_view}</div>
                </main>
                <Show when=move || store.shell().with(|s| s.ai_panel_open)>
                    <AiPanel />
                </Show>
            </div>
        }
    };

    view! {
        <Show when=move || area.get() == Area::Admin fallback=tenant_view>
            {admin_view}
        </Show>
    }
}
