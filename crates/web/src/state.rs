// =============================================================================
// Postline Web - Global Application State
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App State
// 3. Session Actions
// =============================================================================

use std::rc::Rc;

use leptos::prelude::*;
use postline_client::controller::account;
use postline_client::{ApiClient, ClientConfig, SessionStore, ToastSlot};

use crate::api::{BrowserTransport, LocalStore, TabStore};

// -----------------------------------------------------------------------------
// 2. App State
// -----------------------------------------------------------------------------

/// Global application state provided via Leptos context.
///
/// Only plain data and signals live here. The client and stores wrap `Rc`s
/// and are built per use with [`AppState::client`] and [`AppState::toasts`].
#[derive(Clone)]
pub struct AppState {
    /// API location and header names.
    pub config: ClientConfig,

    /// Whether a session token is stored.
    pub authed: RwSignal<bool>,

    /// Cached profile name of the signed-in user.
    pub profile_name: RwSignal<Option<String>>,
}

impl AppState {
    /// Create a new app state instance from the stored session.
    pub fn new() -> Self {
        let config = ClientConfig::from_build_env();
        log::debug!("API base URL: {}", config.base_url);

        let session = Self::session_store();
        Self {
            config,
            authed: RwSignal::new(session.is_authed()),
            profile_name: RwSignal::new(session.profile_name()),
        }
    }

    fn session_store() -> SessionStore {
        SessionStore::new(Rc::new(LocalStore))
    }

    /// Session backed by `localStorage`.
    pub fn session(&self) -> SessionStore {
        Self::session_store()
    }

    /// API client over `fetch` and `localStorage`.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.config.clone(), Rc::new(BrowserTransport), self.session())
    }

    /// Cross-page toast slot backed by `sessionStorage`.
    pub fn toasts(&self) -> ToastSlot {
        ToastSlot::new(Rc::new(TabStore))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// 3. Session Actions
// -----------------------------------------------------------------------------

impl AppState {
    /// Re-read the stored session into the signals.
    pub fn sync_session(&self) {
        let session = self.session();
        self.authed.set(session.is_authed());
        self.profile_name.set(session.profile_name());
    }

    /// Clear the session and return the page to land on.
    pub fn logout(&self) -> &'static str {
        let next = account::sign_out(&self.client());
        self.sync_session();
        log::info!("Signed out");
        next
    }
}
