//! Cross-page toast message.
//!
//! A controller that navigates away leaves one message behind; the next page
//! reads it once and clears it.

use std::rc::Rc;

use crate::storage::KeyValueStore;

pub const TOAST_KEY: &str = "toast";

/// How long a toast stays on screen.
pub const TOAST_TIMEOUT_MS: u32 = 3000;

#[derive(Clone)]
pub struct ToastSlot {
    store: Rc<dyn KeyValueStore>,
}

impl ToastSlot {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Leave a message for the next page.
    pub fn set_pending(&self, message: &str) {
        self.store.set(TOAST_KEY, message);
    }

    /// Read the pending message once.
    pub fn take(&self) -> Option<String> {
        let message = self.store.get(TOAST_KEY).filter(|m| !m.is_empty())?;
        self.store.remove(TOAST_KEY);
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_take_clears() {
        let slot = ToastSlot::new(Rc::new(MemoryStore::new()));
        assert!(slot.take().is_none());
        slot.set_pending("Post deleted.");
        assert_eq!(slot.take().as_deref(), Some("Post deleted."));
        assert!(slot.take().is_none());
    }
}
