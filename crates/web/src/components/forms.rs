// =============================================================================
// Postline Web - Form Components
// =============================================================================
// Table of Contents:
// 1. TextInput
// 2. TextArea
// 3. FormError
// =============================================================================

use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. TextInput
// -----------------------------------------------------------------------------

/// Labelled single-line input bound to a signal.
#[component]
pub fn TextInput(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    #[prop(optional, into)] autocomplete: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text".to_string() } else { input_type };
    let autocomplete = if autocomplete.is_empty() { "off".to_string() } else { autocomplete };

    view! {
        <div class="form-field">
            <label class="form-label" for=id.clone()>
                {label}
                {required.then(|| view! { <span class="required">"*"</span> })}
            </label>
            <input
                id=id.clone()
                name=id
                type=input_type
                class="form-input"
                placeholder=placeholder
                autocomplete=autocomplete
                required=required
                prop:value=move || value.get()
                on:input=move |e| value.set(event_target_value(&e))
            />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. TextArea
// -----------------------------------------------------------------------------

/// Labelled multi-line input bound to a signal.
#[component]
pub fn TextArea(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] rows: u32,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let rows = if rows == 0 { 6 } else { rows };

    view! {
        <div class="form-field">
            <label class="form-label" for=id.clone()>{label}</label>
            <textarea
                id=id.clone()
                name=id
                class="form-textarea"
                placeholder=placeholder
                rows=rows
                required=required
                prop:value=move || value.get()
                on:input=move |e| value.set(event_target_value(&e))
            />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. FormError
// -----------------------------------------------------------------------------

/// Banner for the latest submit error, hidden when `None`.
#[component]
pub fn FormError(#[prop(into)] error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || error.get().map(|e| view! {
            <div class="form-error-banner" role="alert">{e}</div>
        })}
    }
}
