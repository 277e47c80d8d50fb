//! Test doubles shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::session::{SessionStore, API_KEY_KEY, PROFILE_NAME_KEY, TOKEN_KEY};
use crate::storage::{KeyValueStore, MemoryStore};
use crate::toast::ToastSlot;
use crate::transport::{HttpRequest, HttpResponse, Transport};

/// Replays queued responses and records every request.
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<HttpResponse>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn respond(&self, status: u16, body: Value) {
        self.respond_raw(status, "", &body.to_string());
    }

    pub fn respond_raw(&self, status: u16, status_text: &str, body: &str) {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            status_text: status_text.to_string(),
            body: body.to_string(),
        }));
    }

    pub fn fail(&self, message: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(ApiError::network(message)));
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    /// Parsed JSON body of the last request.
    pub fn last_body(&self) -> Value {
        let body = self.last_request().body.expect("request had no body");
        serde_json::from_str(&body).expect("request body is not JSON")
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::network("no response queued")))
    }
}

/// Store pre-populated with a signed-in session.
pub fn authed_store(token: &str, name: &str, api_key: Option<&str>) -> MemoryStore {
    let store = MemoryStore::with_entries([(TOKEN_KEY, token), (PROFILE_NAME_KEY, name)]);
    if let Some(key) = api_key {
        store.set(API_KEY_KEY, key);
    }
    store
}

/// Client wired to a mock transport plus its backing stores.
pub struct Fixture {
    pub transport: Rc<MockTransport>,
    pub store: Rc<MemoryStore>,
    pub tab_store: Rc<MemoryStore>,
    pub client: ApiClient,
    pub toasts: ToastSlot,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }

    pub fn with_store(store: MemoryStore) -> Self {
        let transport = Rc::new(MockTransport::default());
        let store = Rc::new(store);
        let tab_store = Rc::new(MemoryStore::new());
        let client = ApiClient::new(
            ClientConfig::default(),
            transport.clone(),
            SessionStore::new(store.clone()),
        );
        let toasts = ToastSlot::new(tab_store.clone());
        Self {
            transport,
            store,
            tab_store,
            client,
            toasts,
        }
    }
}
