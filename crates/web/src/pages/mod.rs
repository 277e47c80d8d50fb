// =============================================================================
// Postline Web - Page Components
// =============================================================================
// Table of Contents:
// 1. Public Pages
// 2. Signed-in Pages
// =============================================================================

pub mod create_post;
pub mod feed;
pub mod login;
pub mod not_found;
pub mod post_detail;
pub mod profile;
pub mod profile_edit;
pub mod register;

pub use create_post::CreatePostPage;
pub use feed::FeedPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use post_detail::PostDetailPage;
pub use profile::ProfilePage;
pub use profile_edit::ProfileEditPage;
pub use register::RegisterPage;
