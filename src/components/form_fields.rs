//! Form Field Helpers
//!
//! Inputs bound to one field of a form record held in an `RwSignal`.
//! Each takes a getter and a setter for that field.

use leptos::prelude::*;

/// Single-line input (`kind` is the HTML input type)
pub fn form_input<F>(
    form: RwSignal<F>,
    label: &'static str,
    kind: &'static str,
    required: bool,
    get: fn(&F) -> &str,
    set: fn(&mut F, String),
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <input
                type=kind
                required=required
                step=if kind == "number" { Some("0.01") } else { None }
                prop:value=move || form.with(|f| get(f).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        </label>
    }
}

pub fn form_textarea<F>(
    form: RwSignal<F>,
    label: &'static str,
    get: fn(&F) -> &str,
    set: fn(&mut F, String),
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <textarea
                rows="3"
                prop:value=move || form.with(|f| get(f).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            ></textarea>
        </label>
    }
}

/// Dropdown over `(value, label)` pairs
pub fn form_select<F>(
    form: RwSignal<F>,
    label: &'static str,
    options: Vec<(String, String)>,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <select
                prop:value=move || form.with(get)
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            >
                {options
                    .into_iter()
                    .map(|(value, text)| {
                        let selected_value = value.clone();
                        view! {
                            <option
                                value=value
                                selected=move || form.with(get) == selected_value
                            >
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Options for string-typed status fields: "on_leave" → "on leave"
pub fn status_options(statuses: &[&'static str]) -> Vec<(String, String)> {
    statuses
        .iter()
        .map(|s| (s.to_string(), s.replace('_', " ")))
        .collect()
}
