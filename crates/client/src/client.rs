// =============================================================================
// Postline Client - HTTP Client Adapter
// =============================================================================
// Table of Contents:
// 1. Request Options
// 2. API Client
// 3. Tests
// =============================================================================

use std::rc::Rc;

use serde_json::Value;

use crate::config::ClientConfig;
use crate::envelope::{resolve_error_message, Envelope};
use crate::error::{ApiError, Result};
use crate::session::SessionStore;
use crate::transport::{HttpRequest, Method, Transport};

/// Paths under this prefix never carry the API-key header.
pub const AUTH_PATH_PREFIX: &str = "/auth/";

// -----------------------------------------------------------------------------
// 1. Request Options
// -----------------------------------------------------------------------------

/// Which credentials a request carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// No auth headers at all.
    #[default]
    None,
    /// Bearer token and API key are both mandatory.
    Required,
    /// Bearer token mandatory; API key attached when cached.
    Token,
}

impl AuthMode {
    fn sends_token(&self) -> bool {
        !matches!(self, AuthMode::None)
    }
}

/// Per-request options.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Option<Method>,
    pub body: Option<Value>,
    pub auth: AuthMode,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn get(auth: AuthMode) -> Self {
        Self {
            method: Some(Method::Get),
            auth,
            ..Default::default()
        }
    }

    pub fn post(body: Value, auth: AuthMode) -> Self {
        Self {
            method: Some(Method::Post),
            body: Some(body),
            auth,
            ..Default::default()
        }
    }

    pub fn put(body: Value, auth: AuthMode) -> Self {
        Self {
            method: Some(Method::Put),
            body: Some(body),
            auth,
            ..Default::default()
        }
    }

    pub fn delete(auth: AuthMode) -> Self {
        Self {
            method: Some(Method::Delete),
            auth,
            ..Default::default()
        }
    }

    /// Add an extra header; it may override `Content-Type`.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

// -----------------------------------------------------------------------------
// 2. API Client
// -----------------------------------------------------------------------------

/// Builds authenticated requests, normalizes errors and envelopes.
///
/// No retries, no timeout, no cancellation.
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    transport: Rc<dyn Transport>,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(config: ClientConfig, transport: Rc<dyn Transport>, session: SessionStore) -> Self {
        Self {
            config,
            transport,
            session,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Send a request to `path` (which must start with `/`).
    ///
    /// Credential preconditions are checked before anything touches the
    /// network. A success response without a parseable body yields `None`.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Option<Envelope>> {
        let method = options.method.unwrap_or(Method::Get);
        let headers = self.compose_headers(path, &options)?;
        let body = options
            .body
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        let request = HttpRequest {
            method,
            url: self.config.url(path),
            headers,
            body,
        };

        log::debug!("{} {}", method, path);
        let response = self.transport.send(request).await?;
        let parsed = serde_json::from_str::<Value>(&response.body).ok();

        if !response.is_success() {
            let message = resolve_error_message(parsed.as_ref(), response.status, &response.status_text);
            log::debug!("{} {} failed: {} {}", method, path, response.status, message);
            return Err(ApiError::Status {
                status: response.status,
                message,
            });
        }

        Ok(parsed.map(Envelope::from_value))
    }

    fn compose_headers(&self, path: &str, options: &RequestOptions) -> Result<Vec<(String, String)>> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        for (name, value) in &options.headers {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
            headers.push((name.clone(), value.clone()));
        }

        if !options.auth.sends_token() {
            return Ok(headers);
        }

        let token = self.session.token().ok_or(ApiError::NotAuthenticated)?;
        headers.push(("Authorization".to_string(), format!("Bearer {}", token)));

        if !path.starts_with(AUTH_PATH_PREFIX) {
            match self.session.api_key() {
                Some(key) => headers.push((self.config.api_key_header.clone(), key)),
                None if options.auth == AuthMode::Required => return Err(ApiError::MissingApiKey),
                None => {}
            }
        }

        Ok(headers)
    }
}

// -----------------------------------------------------------------------------
// 3. Tests
// -----------------------------------------------------------------------------
