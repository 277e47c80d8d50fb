// =============================================================================
// Postline Web - Feed Page
// =============================================================================

use leptos::prelude::*;

use crate::components::{FeedList, Layout};

/// Latest posts from everyone.
#[component]
pub fn FeedPage() -> impl IntoView {
    view! {
        <Layout show_toast=true>
            <div class="page page-feed">
                <FeedList />
            </div>
        </Layout>
    }
}
