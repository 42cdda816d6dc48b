//! Modal Component
//!
//! Overlay dialog hosting an entity form. Submitting runs `on_submit`;
//! clicking the backdrop or Cancel runs `on_close`.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
    /// Validation or backend error shown above the buttons
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into, default = Signal::stored(false))] busy: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <form
                class="modal"
                on:click=|ev| ev.stop_propagation()
                on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                <h3 class="modal-title">{move || title.get()}</h3>
                <div class="modal-body">{children()}</div>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <div class="modal-actions">
                    <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn-primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
