// =============================================================================
// Postline Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. Location
// 2. Dialogs
// 3. DOM Queries
// =============================================================================

use web_sys::Window;

// -----------------------------------------------------------------------------
// 1. Location
// -----------------------------------------------------------------------------

fn window() -> Option<Window> {
    web_sys::window()
}

/// Navigate to a new URL (full page reload).
pub fn navigate_to(url: &str) {
    if let Some(win) = window() {
        let _ = win.location().set_href(url);
    }
}

/// Reload the current page.
pub fn reload() {
    if let Some(win) = window() {
        let _ = win.location().reload();
    }
}

// -----------------------------------------------------------------------------
// 2. Dialogs
// -----------------------------------------------------------------------------

/// Blocking alert.
pub fn alert(message: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}

/// Blocking confirm; `false` when no window is available.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

// -----------------------------------------------------------------------------
// 3. DOM Queries
// -----------------------------------------------------------------------------

/// Whether an element with `id` is currently in the document.
pub fn has_element(id: &str) -> bool {
    window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(id))
        .is_some()
}
