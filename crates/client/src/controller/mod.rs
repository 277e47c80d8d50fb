// =============================================================================
// Postline Client - Page Controllers
// =============================================================================

//! Page logic without a DOM.
//!
//! Each page has pure response-to-view-model functions plus async functions
//! that run the page's request sequence. The front end only renders what
//! these return and binds events back to them.

pub mod account;
pub mod create_post;
pub mod feed;
pub mod post_detail;
pub mod profile_edit;
pub mod profile_header;

/// Monotonic tickets for "latest call wins" work.
///
/// Each scheduled load or debounced write takes a ticket; when it settles it
/// only applies its result if no newer ticket was issued in the meantime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tickets {
    generation: u64,
}

impl Tickets {
    pub fn schedule(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.generation == ticket
    }
}
