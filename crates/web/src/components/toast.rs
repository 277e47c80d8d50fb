// =============================================================================
// Postline Web - Toast Component
// =============================================================================

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use postline_client::toast::TOAST_TIMEOUT_MS;

use crate::state::AppState;

/// Shows the message a previous page left behind, once, then hides it.
#[component]
pub fn ToastHost() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let message = RwSignal::new(app_state.toasts().take());

    if message.get_untracked().is_some() {
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            let _ = message.try_set(None);
        });
    }

    view! {
        {move || message.get().map(|m| view! {
            <div class="toast" role="status" aria-live="polite">{m}</div>
        })}
    }
}
