//! Login and registration flows.

use crate::auth::{self, ensure_api_key_best_effort, LoginRequest, RegisterRequest};
use crate::client::ApiClient;
use crate::error::Result;
use crate::routes;
use crate::session::Session;

pub const SIGNING_IN_LABEL: &str = "Signing in...";
pub const CREATING_ACCOUNT_LABEL: &str = "Creating account...";

/// Log in, persist the session, provision a key when possible. Returns the
/// page to land on.
pub async fn sign_in(client: &ApiClient, email: &str, password: &str) -> Result<String> {
    let request = LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    let session: Session = auth::login(client, &request).await?;
    client.session().save_session(&session);
    log::info!("Signed in as {}", session.name);

    ensure_api_key_best_effort(client).await;
    Ok(routes::profile(&session.name))
}

/// Register an account. Returns the page to land on.
pub async fn sign_up(client: &ApiClient, name: &str, email: &str, password: &str) -> Result<&'static str> {
    let request = RegisterRequest {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    auth::register(client, &request).await?;
    Ok(routes::LOGIN)
}

/// Clear the session. Returns the page to land on.
pub fn sign_out(client: &ApiClient) -> &'static str {
    auth::logout(client);
    routes::LOGIN
}
