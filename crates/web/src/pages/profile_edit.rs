// =============================================================================
// Postline Web - Profile Edit Page
// =============================================================================

use leptos::prelude::*;
use leptos::task::spawn_local;
use postline_client::controller::post_detail::LOADING_TEXT;
use postline_client::controller::profile_edit::{
    load_profile_edit, save_profile, ProfileEditForm, ProfileEditState, SAVING_LABEL,
};

use crate::components::{ErrorDisplay, FormError, Layout, LoadingSpinner, TextArea, TextInput};
use crate::state::AppState;
use crate::utils::navigate_to;

/// Bio and avatar editor for the signed-in user.
#[component]
pub fn ProfileEditPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let state = RwSignal::new(ProfileEditState::Loading);

    spawn_local(async move {
        state.set(load_profile_edit(&app_state.client()).await);
    });

    view! {
        <Layout require_auth=true>
            <div class="page page-profile-edit">
                <h1>"Edit profile"</h1>
                {move || match state.get() {
                    ProfileEditState::Loading => view! { <LoadingSpinner message=LOADING_TEXT /> }.into_any(),
                    ProfileEditState::Failed(message) => view! { <ErrorDisplay message=message /> }.into_any(),
                    ProfileEditState::Ready(form) => view! { <ProfileForm form=form /> }.into_any(),
                }}
            </div>
        </Layout>
    }
}

#[component]
fn ProfileForm(form: ProfileEditForm) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let bio = RwSignal::new(form.bio);
    let avatar_url = RwSignal::new(form.avatar_url);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let on_submit = move |e: leptos::ev::SubmitEvent| {
        e.prevent_default();
        if saving.get_untracked() {
            return;
        }

        let form = ProfileEditForm {
            bio: bio.get_untracked(),
            avatar_url: avatar_url.get_untracked(),
        };
        if let Err(e) = form.validate() {
            error.set(Some(e.to_string()));
            return;
        }

        saving.set(true);
        error.set(None);

        let client = app_state.client();
        let toasts = app_state.toasts();
        spawn_local(async move {
            match save_profile(&client, &toasts, &form).await {
                Ok(next) => navigate_to(&next),
                Err(e) => {
                    log::error!("Profile update failed: {}", e);
                    saving.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <form id="profileEditForm" class="post-form" on:submit=on_submit>
            <FormError error=error />
            <TextArea id="bio" label="Bio" value=bio rows=4 />
            <TextInput
                id="avatarUrl"
                label="Avatar URL"
                input_type="url"
                placeholder="https://..."
                value=avatar_url
            />
            <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                {move || if saving.get() { SAVING_LABEL } else { "Save" }}
            </button>
        </form>
    }
}
