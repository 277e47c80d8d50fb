// =============================================================================
// Postline Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Loading Spinner
// 2. Error Display
// =============================================================================

use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. Loading Spinner
// -----------------------------------------------------------------------------

/// Loading indicator with an optional status line.
#[component]
pub fn LoadingSpinner(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="loading-container" aria-busy="true">
            <div class="spinner"></div>
            {message.map(|m| view! { <p class="loading-message">{m}</p> })}
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Error Display
// -----------------------------------------------------------------------------

/// Inline error message.
#[component]
pub fn ErrorDisplay(
    #[prop(into)] message: String,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    view! {
        <div class="error-display" role="alert">
            {title.map(|t| view! { <h2 class="error-title">{t}</h2> })}
            <p class="error-message">{message}</p>
        </div>
    }
}
