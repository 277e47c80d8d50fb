// =============================================================================
// Postline Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// =============================================================================

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::{
    CreatePostPage, FeedPage, LoginPage, NotFoundPage, PostDetailPage, ProfileEditPage, ProfilePage,
    RegisterPage,
};
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing.
#[component]
pub fn App() -> impl IntoView {
    let app_state = AppState::new();
    provide_context(app_state);

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                // Public routes
                <Route path=path!("/") view=FeedPage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />

                // Signed-in routes
                <Route path=path!("/profile") view=ProfilePage />
                <Route path=path!("/profile/edit") view=ProfileEditPage />
                <Route path=path!("/post") view=PostDetailPage />
                <Route path=path!("/post/create") view=CreatePostPage />
            </Routes>
        </Router>
    }
}
