// =============================================================================
// Postline Web - 404 Not Found Page
// =============================================================================

use leptos::prelude::*;
use postline_client::routes;

use crate::components::Layout;

/// 404 Not Found page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="page page-not-found">
                <span class="not-found-code">"404"</span>
                <h1>"Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <a href=routes::FEED class="btn btn-primary">"Back to the feed"</a>
            </div>
        </Layout>
    }
}
