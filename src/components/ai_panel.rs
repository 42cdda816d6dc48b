//! AI Assistant Panel
//!
//! Chat scoped to the current section. The log lives in the store and is
//! wiped whenever the section changes.

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;

use erp_core::{AgentApi, ChatMessage, ChatRole};

use crate::commands::TauriAgent;
use crate::markdown::render_reply;
use crate::store::{store_dispatch, use_app_store, AppStateStoreFields};
use erp_core::ShellEvent;

#[component]
pub fn AiPanel() -> impl IntoView {
    let store = use_app_store();
    let draft = RwSignal::new(String::new());
    let log_ref = NodeRef::<Div>::new();

    let section = move || store.chat().with(|c| c.section());
    let pending = move || store.chat().with(|c| c.is_pending());

    let send = move |text: String| {
        let Some(turn) = store.chat().try_update(|chat| chat.begin_send(&text)).flatten() else {
            return;
        };
        draft.set(String::new());
        spawn_local(async move {
            let reply = TauriAgent.ask(turn.section, &turn.message).await;
            store.chat().update(|chat| {
                chat.complete(&turn, reply);
            });
        });
    };

    // Keep the newest message in view
    Effect::new(move |_| {
        let _ = store.chat().with(|c| c.messages().len());
        let _ = pending();
        if let Some(el) = log_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    view! {
        <aside class="ai-panel">
            <header class="ai-panel-header">
                <span>{move || format!("{} assistant", section().label())}</span>
                <button class="icon-btn" title="Close" on:click=move |_| store_dispatch(&store, ShellEvent::CloseAiPanel)>
                    "×"
                </button>
            </header>

            <div class="ai-log" node_ref=log_ref>
                <Show when=move || store.chat().with(|c| c.is_empty())>
                    <div class="ai-starters">
                        <p class="muted">"Try asking:"</p>
                        {move || {
                            section()
                                .prompts()
                                .into_iter()
                                .map(|prompt| view! {
                                    <button class="starter-prompt" on:click=move |_| send(prompt.to_string())>
                                        {prompt}
                                    </button>
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
                <For
                    each=move || store.chat().with(|c| c.messages().to_vec())
                    key=|m| m.id
                    children=|message: ChatMessage| view! { <MessageBubble message=message /> }
                />
                <Show when=pending>
                    <div class="chat-bubble assistant typing">"Thinking..."</div>
                </Show>
            </div>

            <form
                class="ai-input"
                on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    send(draft.get_untracked());
                }
            >
                <input
                    type="text"
                    placeholder="Ask anything..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button type="submit" class="btn-primary" disabled=move || pending() || draft.with(|d| d.trim().is_empty())>
                    "Send"
                </button>
            </form>
        </aside>
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    match message.role {
        ChatRole::User => view! { <div class="chat-bubble user">{message.content}</div> }.into_any(),
        ChatRole::Assistant => {
            view! { <div class="chat-bubble assistant" inner_html=render_reply(&message.content)></div> }.into_any()
        }
    }
}
