// =============================================================================
// Postline Web - Site Navigation Component
// =============================================================================
// Shows signed-in or signed-out entries and stays in step with other tabs
// through the browser `storage` event.
// =============================================================================

use leptos::ev;
use leptos::prelude::*;
use postline_client::routes;
use postline_client::session::{PROFILE_NAME_KEY, TOKEN_KEY};

use crate::state::AppState;
use crate::utils::navigate_to;

/// Site navigation bar.
#[component]
pub fn SiteNav() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let authed = app_state.authed;
    let profile_name = app_state.profile_name;

    // `key` is None when another tab cleared the whole store.
    let sync_state = app_state.clone();
    let handle = window_event_listener(ev::storage, move |e| {
        let relevant = e
            .key()
            .map(|key| key == TOKEN_KEY || key == PROFILE_NAME_KEY)
            .unwrap_or(true);
        if relevant {
            log::debug!("Session changed in another tab");
            sync_state.sync_session();
        }
    });
    on_cleanup(move || handle.remove());

    let profile_href = move || {
        profile_name
            .get()
            .map(|name| routes::profile(&name))
            .unwrap_or_else(|| routes::PROFILE.to_string())
    };

    view! {
        <nav class="site-nav">
            <a href=routes::FEED class="nav-logo">"Postline"</a>

            <div class="nav-links">
                <a href=routes::FEED class="nav-link">"Feed"</a>
                <Show when=move || authed.get()>
                    <a href=profile_href class="nav-link">"Profile"</a>
                    <a href=routes::POST_CREATE class="nav-link">"New post"</a>
                </Show>
            </div>

            <div class="nav-right">
                {move || {
                    let app_state = expect_context::<AppState>();

                    if authed.get() {
                        let handle = profile_name.get().map(|name| format!("@{}", name));
                        view! {
                            <div class="nav-user-section">
                                <span class="nav-username">{handle}</span>
                                <button
                                    type="button"
                                    class="btn btn-ghost nav-logout"
                                    on:click=move |_| {
                                        let next = app_state.logout();
                                        navigate_to(next);
                                    }
                                >
                                    "Log out"
                                </button>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="nav-user-section">
                                <a href=routes::LOGIN class="btn btn-secondary">"Sign in"</a>
                                <a href=routes::REGISTER class="btn btn-primary">"Register"</a>
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </nav>
    }
}
