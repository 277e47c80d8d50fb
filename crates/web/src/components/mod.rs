// =============================================================================
// Postline Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Layout Components
// 2. Common Components
// 3. Form Components
// 4. Social Components
// =============================================================================

pub mod common;
pub mod feed;
pub mod forms;
pub mod layout;
pub mod nav;
pub mod post_card;
pub mod profile_header;
pub mod toast;

pub use common::{ErrorDisplay, LoadingSpinner};
pub use feed::FeedList;
pub use forms::{FormError, TextArea, TextInput};
pub use layout::Layout;
pub use nav::SiteNav;
pub use post_card::PostCardView;
pub use profile_header::ProfileHeader;
pub use toast::ToastHost;
