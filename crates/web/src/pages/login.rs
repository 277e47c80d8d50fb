// =============================================================================
// Postline Web - Login Page
// =============================================================================

use leptos::prelude::*;
use leptos::task::spawn_local;
use postline_client::controller::account::{sign_in, SIGNING_IN_LABEL};
use postline_client::routes;

use crate::components::{FormError, Layout, TextInput};
use crate::state::AppState;
use crate::utils::navigate_to;

/// Sign-in page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let on_submit = move |e: leptos::ev::SubmitEvent| {
        e.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        if email_val.trim().is_empty() || password_val.is_empty() {
            error.set(Some("Please fill in all fields".to_string()));
            return;
        }

        loading.set(true);
        error.set(None);

        let app_state = app_state.clone();
        spawn_local(async move {
            let result = sign_in(&app_state.client(), &email_val, &password_val).await;
            match result {
                Ok(next) => {
                    app_state.sync_session();
                    navigate_to(&next);
                }
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <Layout>
            <div class="page page-login">
                <div class="login-card">
                    <h1 class="login-title">"Sign in"</h1>

                    <form id="loginForm" class="login-form" on:submit=on_submit>
                        <FormError error=error />

                        <TextInput
                            id="email"
                            label="Email"
                            input_type="email"
                            placeholder="you@stud.noroff.no"
                            autocomplete="email"
                            value=email
                            required=true
                        />
                        <TextInput
                            id="password"
                            label="Password"
                            input_type="password"
                            autocomplete="current-password"
                            value=password
                            required=true
                        />

                        <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                            {move || if loading.get() { SIGNING_IN_LABEL } else { "Sign in" }}
                        </button>
                    </form>

                    <p class="login-switch">
                        "No account yet? "
                        <a href=routes::REGISTER>"Register"</a>
                    </p>
                </div>
            </div>
        </Layout>
    }
}
