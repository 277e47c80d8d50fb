// =============================================================================
// Postline Web - Register Page
// =============================================================================

use leptos::prelude::*;
use leptos::task::spawn_local;
use postline_client::controller::account::{sign_up, CREATING_ACCOUNT_LABEL};
use postline_client::routes;

use crate::components::{FormError, Layout, TextInput};
use crate::state::AppState;
use crate::utils::navigate_to;

/// Account registration page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let on_submit = move |e: leptos::ev::SubmitEvent| {
        e.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let (name_val, email_val, password_val) =
            (name.get_untracked(), email.get_untracked(), password.get_untracked());
        if name_val.trim().is_empty() || email_val.trim().is_empty() || password_val.is_empty() {
            error.set(Some("Please fill in all fields".to_string()));
            return;
        }

        loading.set(true);
        error.set(None);

        let client = app_state.client();
        spawn_local(async move {
            match sign_up(&client, &name_val, &email_val, &password_val).await {
                Ok(next) => navigate_to(next),
                Err(e) => {
                    log::warn!("Registration failed: {}", e);
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
                    <h1 class="login-title">"Create account"</h1>

                    <form id="registerForm" class="login-form" on:submit=on_submit>
                        <FormError error=error />

                        <TextInput id="name" label="Name" autocomplete="username" value=name required=true />
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
                            autocomplete="new-password"
                            value=password
                            required=true
                        />

                        <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                            {move || if loading.get() { CREATING_ACCOUNT_LABEL } else { "Create account" }}
                        </button>
                    </form>

                    <p class="login-switch">
                        "Already registered? "
                        <a href=routes::LOGIN>"Sign in"</a>
                    </p>
                </div>
            </div>
        </Layout>
    }
}
