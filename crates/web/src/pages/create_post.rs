// =============================================================================
// Postline Web - Create Post Page
// =============================================================================

use leptos::prelude::*;
use leptos::task::spawn_local;
use postline_client::controller::create_post::{prepare, publish, CreatePostForm, PUBLISHING_LABEL};

use crate::components::{FormError, Layout, TextArea, TextInput};
use crate::state::AppState;
use crate::utils::navigate_to;

/// New post form.
#[component]
pub fn CreatePostPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let title = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());
    let media_url = RwSignal::new(String::new());
    let tags = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let loader_state = app_state.clone();
    spawn_local(async move {
        prepare(&loader_state.client()).await;
    });

    let on_submit = move |e: leptos::ev::SubmitEvent| {
        e.prevent_default();
        if busy.get_untracked() {
            return;
        }

        let form = CreatePostForm {
            title: title.get_untracked(),
            body: body.get_untracked(),
            media_url: media_url.get_untracked(),
            tags: tags.get_untracked(),
        };
        // Validation runs again in `publish`; this keeps the button idle on bad input.
        if let Err(e) = form.validate() {
            error.set(Some(e.to_string()));
            return;
        }

        busy.set(true);
        error.set(None);

        let client = app_state.client();
        let toasts = app_state.toasts();
        spawn_local(async move {
            match publish(&client, &toasts, &form).await {
                Ok(next) => navigate_to(&next),
                Err(e) => {
                    log::error!("Create post failed: {}", e);
                    busy.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <Layout require_auth=true>
            <div class="page page-create-post">
                <h1>"New post"</h1>

                <form id="createPostForm" class="post-form" on:submit=on_submit>
                    <FormError error=error />

                    <TextInput id="title" label="Title" value=title required=true />
                    <TextArea id="body" label="Content" value=body rows=8 required=true />
                    <TextInput
                        id="mediaUrl"
                        label="Image URL"
                        input_type="url"
                        placeholder="https://..."
                        value=media_url
                    />
                    <TextInput id="tags" label="Tags" placeholder="travel, food" value=tags />

                    <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                        {move || if busy.get() { PUBLISHING_LABEL } else { "Publish" }}
                    </button>
                </form>
            </div>
        </Layout>
    }
}
