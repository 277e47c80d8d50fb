// =============================================================================
// Postline Client - Session Store
// =============================================================================
// Table of Contents:
// 1. Storage Keys
// 2. Session
// 3. Session Store
// =============================================================================

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

// -----------------------------------------------------------------------------
// 1. Storage Keys
// -----------------------------------------------------------------------------

pub const TOKEN_KEY: &str = "accessToken";
pub const PROFILE_NAME_KEY: &str = "profileName";
pub const API_KEY_KEY: &str = "apiKey";

/// Keys older builds wrote the display name under.
const LEGACY_NAME_KEYS: [&str; 2] = ["name", "username"];

// -----------------------------------------------------------------------------
// 2. Session
// -----------------------------------------------------------------------------

/// Authenticated identity held client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: String,
    pub name: String,
}

// -----------------------------------------------------------------------------
// 3. Session Store
// -----------------------------------------------------------------------------

/// Session context handed to every controller.
///
/// No expiry or refresh: the next API response decides whether the token is
/// still good.
#[derive(Clone)]
pub struct SessionStore {
    store: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Persist token and display name.
    pub fn save_session(&self, session: &Session) {
        self.store.set(TOKEN_KEY, &session.access_token);
        self.store.set(PROFILE_NAME_KEY, &session.name);
    }

    /// Forget token, display name and API key.
    pub fn clear_session(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(PROFILE_NAME_KEY);
        self.store.remove(API_KEY_KEY);
    }

    /// True iff a non-empty token is stored.
    pub fn is_authed(&self) -> bool {
        self.token().is_some()
    }

    pub fn token(&self) -> Option<String> {
        non_empty(self.store.get(TOKEN_KEY))
    }

    pub fn api_key(&self) -> Option<String> {
        non_empty(self.store.get(API_KEY_KEY))
    }

    pub fn set_api_key(&self, key: &str) {
        self.store.set(API_KEY_KEY, key);
    }

    /// The full session, only when both halves are present.
    pub fn session(&self) -> Option<Session> {
        Some(Session {
            access_token: self.token()?,
            name: non_empty(self.store.get(PROFILE_NAME_KEY))?,
        })
    }

    /// Locally cached display name, sanitized.
    pub fn profile_name(&self) -> Option<String> {
        std::iter::once(PROFILE_NAME_KEY)
            .chain(LEGACY_NAME_KEYS)
            .find_map(|key| non_empty(self.store.get(key)))
            .and_then(|name| sanitize_name(&name))
    }

    /// True when a token exists but no API key has been provisioned yet.
    pub fn needs_api_key(&self) -> bool {
        self.is_authed() && self.api_key().is_none()
    }
}

/// Trim and strip leading `@`; `None` when nothing is left.
pub fn sanitize_name(raw: &str) -> Option<String> {
    let name = raw.trim().trim_start_matches('@').trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Case-insensitive identity comparison; an empty side never matches.
pub fn same_identity(local: Option<&str>, other: &str) -> bool {
    match local {
        Some(me) if !me.is_empty() && !other.is_empty() => me.to_lowercase() == other.to_lowercase(),
        _ => false,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn store() -> (Rc<MemoryStore>, SessionStore) {
        let backing = Rc::new(MemoryStore::new());
        let session = SessionStore::new(backing.clone());
        (backing, session)
    }

    #[test]
    fn test_save_and_clear() {
        let (backing, session) = store();
        assert!(!session.is_authed());

        session.save_session(&Session {
            access_token: "tok1".to_string(),
            name: "alice".to_string(),
        });
        session.set_api_key("key-1");
        assert!(session.is_authed());
        assert_eq!(session.profile_name().as_deref(), Some("alice"));

        session.clear_session();
        assert!(!session.is_authed());
        assert!(session.api_key().is_none());
        assert!(backing.is_empty());
    }

    #[test]
    fn test_empty_token_is_not_authed() {
        let (backing, session) = store();
        backing.set(TOKEN_KEY, "");
        assert!(!session.is_authed());
    }

    #[test]
    fn test_partial_session_is_absent() {
        let (backing, session) = store();
        backing.set(TOKEN_KEY, "tok");
        assert!(session.session().is_none());
        backing.set(PROFILE_NAME_KEY, "bob");
        assert_eq!(session.session().map(|s| s.name), Some("bob".to_string()));
    }

    #[test]
    fn test_profile_name_legacy_fallback() {
        let (backing, session) = store();
        backing.set("username", "  @@carol ");
        assert_eq!(session.profile_name().as_deref(), Some("carol"));
    }

    #[test]
    fn test_needs_api_key() {
        let (backing, session) = store();
        assert!(!session.needs_api_key());
        backing.set(TOKEN_KEY, "tok");
        assert!(session.needs_api_key());
        backing.set(API_KEY_KEY, "k");
        assert!(!session.needs_api_key());
    }

    #[test]
    fn test_same_identity() {
        assert!(same_identity(Some("Bob"), "bob"));
        assert!(!same_identity(Some("bob"), "bobby"));
        assert!(!same_identity(None, "bob"));
        assert!(!same_identity(Some(""), ""));
    }
}
