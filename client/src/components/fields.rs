//! Labelled form inputs bound to a draft field of `DashboardState`.
//!
//! Each field takes a plain `read`/`write` function pair so forms stay
//! declarative; every keystroke writes straight into the draft.

use leptos::prelude::*;

use crate::state::dashboard::DashboardState;

/// Text-like `<input>` (`text`, `number`, `date`).
#[component]
pub fn InputField(
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    read: fn(&DashboardState) -> String,
    write: fn(&mut DashboardState, String),
) -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type=kind
                placeholder=placeholder
                prop:value=move || state.with(read)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| write(s, value));
                }
            />
        </div>
    }
}

/// Multi-line `<textarea>`.
#[component]
pub fn TextAreaField(
    label: &'static str,
    read: fn(&DashboardState) -> String,
    write: fn(&mut DashboardState, String),
) -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    view! {
        <div class="form-group">
            <label>{label}</label>
            <textarea
                rows="3"
                prop:value=move || state.with(read)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| write(s, value));
                }
            ></textarea>
        </div>
    }
}

/// `<select>` over `(value, label)` pairs. A non-empty `blank` adds a
/// leading option with an empty value.
#[component]
pub fn SelectField(
    label: &'static str,
    #[prop(default = "")] blank: &'static str,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    read: fn(&DashboardState) -> String,
    write: fn(&mut DashboardState, String),
) -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    view! {
        <div class="form-group">
            <label>{label}</label>
            <select
                prop:value=move || state.with(read)
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| write(s, value));
                }
            >
                <Show when=move || !blank.is_empty()>
                    <option value="">{blank}</option>
                </Show>
                {move || {
                    let selected = state.with(read);
                    options
                        .get()
                        .into_iter()
                        .map(|(value, text)| {
                            let is_selected = value == selected;
                            view! { <option value=value selected=is_selected>{text}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
