// =============================================================================
// Postline Web - Profile Page
// =============================================================================
// Profile header plus the author's posts. The header mount element is what
// switches the feed list into single-author mode.
// =============================================================================

use leptos::prelude::*;
use postline_client::routes::PROFILE_HEADER_MOUNT_ID;

use crate::components::{FeedList, Layout, ProfileHeader};

/// Profile page component.
#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <Layout require_auth=true show_toast=true>
            <div class="page page-profile">
                <div id=PROFILE_HEADER_MOUNT_ID>
                    <ProfileHeader />
                </div>
                <FeedList />
            </div>
        </Layout>
    }
}
