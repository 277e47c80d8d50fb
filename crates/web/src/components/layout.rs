// =============================================================================
// Postline Web - Layout Components
// =============================================================================
// Table of Contents:
// 1. Layout (Page Shell)
// =============================================================================

use leptos::prelude::*;
use postline_client::routes;

use crate::components::{LoadingSpinner, SiteNav, ToastHost};
use crate::state::AppState;
use crate::utils::navigate_to;

// -----------------------------------------------------------------------------
// 1. Layout (Page Shell)
// -----------------------------------------------------------------------------

/// Page shell: navigation, optional pending toast, content.
///
/// With `require_auth`, a signed-out visitor is sent to the login page and
/// the page content is never built.
#[component]
pub fn Layout(
    #[prop(optional)] require_auth: bool,
    #[prop(optional)] show_toast: bool,
    children: Children,
) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let allowed = !require_auth || app_state.authed.get_untracked();

    let content = if allowed {
        children()
    } else {
        log::info!("Not signed in, redirecting to login");
        navigate_to(routes::LOGIN);
        view! { <LoadingSpinner message="Redirecting to sign in..." /> }.into_any()
    };

    view! {
        <div class="layout">
            <SiteNav />
            {show_toast.then(|| view! { <ToastHost /> })}
            <main class="layout-content">
                {content}
            </main>
        </div>
    }
}
