// =============================================================================
// Postline Client - Auth API
// =============================================================================
// Table of Contents:
// 1. Request Types
// 2. Auth API Functions
// 3. API Key Provisioning
// =============================================================================

use serde::Serialize;
use serde_json::json;

use crate::client::{ApiClient, AuthMode, RequestOptions};
use crate::envelope::Envelope;
use crate::error::{ApiError, Result};
use crate::session::Session;

// -----------------------------------------------------------------------------
// 1. Request Types
// -----------------------------------------------------------------------------

/// Login request payload.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register request payload.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

// -----------------------------------------------------------------------------
// 2. Auth API Functions
// -----------------------------------------------------------------------------

/// Register a new user; the response is passed through untouched.
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<Option<Envelope>> {
    let body = serde_json::to_value(request)?;
    client
        .request("/auth/register", RequestOptions::post(body, AuthMode::None))
        .await
}

/// Log in and derive a session.
///
/// Fails when either the token or the name is missing from the response, in
/// whichever envelope shape it arrived.
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<Session> {
    let body = serde_json::to_value(request)?;
    let envelope = client
        .request("/auth/login", RequestOptions::post(body, AuthMode::None))
        .await?;

    let token = envelope.as_ref().and_then(|env| env.str_field("accessToken"));
    let name = envelope.as_ref().and_then(|env| env.str_field("name"));
    match (token, name) {
        (Some(access_token), Some(name)) => Ok(Session { access_token, name }),
        _ => Err(ApiError::malformed("Invalid login response")),
    }
}

/// Forget the local session.
pub fn logout(client: &ApiClient) {
    client.session().clear_session();
}

// -----------------------------------------------------------------------------
// 3. API Key Provisioning
// -----------------------------------------------------------------------------

/// Ask the API for a new key.
pub async fn create_api_key(client: &ApiClient) -> Result<Option<Envelope>> {
    client
        .request("/auth/create-api-key", RequestOptions::post(json!({}), AuthMode::Token))
        .await
}

/// Return the cached key, creating and caching one when absent.
///
/// Overlapping calls may both create a key; the last write wins.
pub async fn ensure_api_key(client: &ApiClient) -> Result<String> {
    if let Some(key) = client.session().api_key() {
        return Ok(key);
    }

    let key = create_api_key(client)
        .await?
        .and_then(|env| env.str_field("key"))
        .ok_or_else(|| ApiError::malformed("Could not get API key"))?;

    client.session().set_api_key(&key);
    log::debug!("API key provisioned");
    Ok(key)
}

/// Provision a key when signed in without one. Failures are logged only:
/// read endpoints work with the token alone.
pub async fn ensure_api_key_best_effort(client: &ApiClient) {
    if !client.session().needs_api_key() {
        return;
    }
    if let Err(e) = ensure_api_key(client).await {
        log::warn!("ensure_api_key failed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{API_KEY_KEY, TOKEN_KEY};
    use crate::storage::KeyValueStore;
    use crate::testing::{authed_store, Fixture};

    fn credentials() -> LoginRequest {
        LoginRequest {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_nested_envelope() {
        let fx = Fixture::new();
        fx.transport
            .respond(200, json!({ "data": { "accessToken": "tok1", "name": "alice" } }));

        let session = login(&fx.client, &credentials()).await.unwrap();
        assert_eq!(
            session,
            Session {
                access_token: "tok1".to_string(),
                name: "alice".to_string()
            }
        );
        assert_eq!(fx.transport.last_body(), json!({ "email": "a@b.com", "password": "x" }));
        assert_eq!(fx.transport.last_request().header("Authorization"), None);

        fx.client.session().save_session(&session);
        assert!(fx.client.session().is_authed());
    }

    #[tokio::test]
    async fn test_login_flat_envelope() {
        let fx = Fixture::new();
        fx.transport.respond(200, json!({ "accessToken": "tok2", "name": "bob" }));

        let session = login(&fx.client, &credentials()).await.unwrap();
        assert_eq!(session.access_token, "tok2");
        assert_eq!(session.name, "bob");
    }

    #[tokio::test]
    async fn test_login_missing_fields_fails() {
        let fx = Fixture::new();
        fx.transport.respond(200, json!({ "data": { "accessToken": "tok" } }));
        fx.transport.respond(200, json!({ "data": { "name": "alice", "accessToken": "" } }));
        fx.transport.respond_raw(200, "OK", "");

        for _ in 0..3 {
            let err = login(&fx.client, &credentials()).await.unwrap_err();
            assert_eq!(err.to_string(), "Invalid login response");
        }
    }

    #[tokio::test]
    async fn test_register_passes_payload() {
        let fx = Fixture::new();
        fx.transport.respond(201, json!({ "data": { "name": "alice" } }));

        let request = RegisterRequest {
            name: "alice".to_string(),
            email: "alice@stud.noroff.no".to_string(),
            password: "hunter22".to_string(),
        };
        let res = register(&fx.client, &request).await.unwrap();
        assert_eq!(res.unwrap().str_field("name").as_deref(), Some("alice"));
        assert!(fx.transport.last_request().url.ends_with("/auth/register"));
    }

    #[tokio::test]
    async fn test_ensure_api_key_creates_and_caches() {
        let fx = Fixture::with_store(authed_store("tok", "alice", None));
        fx.transport.respond(201, json!({ "data": { "key": "key-1", "name": "API Key" } }));

        assert_eq!(ensure_api_key(&fx.client).await.unwrap(), "key-1");
        assert_eq!(fx.store.get(API_KEY_KEY).as_deref(), Some("key-1"));

        // Cached: no further network calls.
        assert_eq!(ensure_api_key(&fx.client).await.unwrap(), "key-1");
        assert_eq!(ensure_api_key(&fx.client).await.unwrap(), "key-1");
        assert_eq!(fx.transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_ensure_api_key_already_cached_is_free() {
        let fx = Fixture::with_store(authed_store("tok", "alice", Some("cached")));
        assert_eq!(ensure_api_key(&fx.client).await.unwrap(), "cached");
        assert_eq!(ensure_api_key(&fx.client).await.unwrap(), "cached");
        assert_eq!(fx.transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_ensure_api_key_missing_key_fails() {
        let fx = Fixture::with_store(authed_store("tok", "alice", None));
        fx.transport.respond(201, json!({ "data": { "name": "API Key" } }));

        let err = ensure_api_key(&fx.client).await.unwrap_err();
        assert_eq!(err.to_string(), "Could not get API key");
        assert!(fx.store.get(API_KEY_KEY).is_none());
    }

    #[tokio::test]
    async fn test_best_effort_swallows_failure() {
        let fx = Fixture::with_store(authed_store("tok", "alice", None));
        fx.transport.fail("offline");
        ensure_api_key_best_effort(&fx.client).await;
        assert_eq!(fx.transport.request_count(), 1);

        // Signed out: nothing to provision.
        fx.store.remove(TOKEN_KEY);
        ensure_api_key_best_effort(&fx.client).await;
        assert_eq!(fx.transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let fx = Fixture::with_store(authed_store("tok", "alice", Some("key")));
        logout(&fx.client);
        assert!(fx.store.is_empty());
    }
}
