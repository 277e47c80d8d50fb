// =============================================================================
// Postline Web - Browser API Adapters
// =============================================================================
// Table of Contents:
// 1. HTTP Transport
// 2. Browser Storage
// =============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use gloo_storage::{LocalStorage, SessionStorage, Storage};
use postline_client::{ApiError, HttpRequest, HttpResponse, KeyValueStore, Method, Result, Transport};

// -----------------------------------------------------------------------------
// 1. HTTP Transport
// -----------------------------------------------------------------------------

/// `fetch` transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

impl BrowserTransport {
    /// Build a request with the given headers.
    fn build_request(request: &HttpRequest) -> RequestBuilder {
        let mut req = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            req = req.header(name, value);
        }
        req
    }
}

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let builder = Self::build_request(&request);
        let sent = match request.body {
            Some(body) => builder
                .body(body)
                .map_err(|e| ApiError::network(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        };
        let response = sent.map_err(|e| ApiError::network(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}

// -----------------------------------------------------------------------------
// 2. Browser Storage
// -----------------------------------------------------------------------------

// Values are stored as raw strings, not JSON, so other tabs and older builds
// read the same keys.

fn raw_get(storage: web_sys::Storage, key: &str) -> Option<String> {
    storage.get_item(key).ok().flatten()
}

fn raw_set(storage: web_sys::Storage, key: &str, value: &str) {
    if storage.set_item(key, value).is_err() {
        log::warn!("Storage write failed for {}", key);
    }
}

/// `localStorage`: survives across sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        raw_get(LocalStorage::raw(), key)
    }

    fn set(&self, key: &str, value: &str) {
        raw_set(LocalStorage::raw(), key, value);
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// `sessionStorage`: scoped to the tab, used for cross-page toasts.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabStore;

impl KeyValueStore for TabStore {
    fn get(&self, key: &str) -> Option<String> {
        raw_get(SessionStorage::raw(), key)
    }

    fn set(&self, key: &str, value: &str) {
        raw_set(SessionStorage::raw(), key, value);
    }

    fn remove(&self, key: &str) {
        SessionStorage::delete(key);
    }
}
