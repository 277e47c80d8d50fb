// =============================================================================
// Postline Client - Profile Edit Controller
// =============================================================================
// Table of Contents:
// 1. Edit Form
// 2. Loading
// 3. Saving
// =============================================================================

use crate::auth::ensure_api_key_best_effort;
use crate::client::ApiClient;
use crate::controller::create_post::is_http_url;
use crate::error::{ApiError, Result};
use crate::posts::Media;
use crate::profiles::{get_profile, update_profile, Profile, ProfileInclude, ProfileUpdate};
use crate::routes;
use crate::toast::ToastSlot;

pub const PROFILE_UPDATED_TOAST: &str = "Profile updated.";
pub const SAVING_LABEL: &str = "Saving...";

const MAX_BIO_LEN: usize = 160;

// -----------------------------------------------------------------------------
// 1. Edit Form
// -----------------------------------------------------------------------------

/// Raw profile-form input for the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileEditForm {
    pub bio: String,
    pub avatar_url: String,
}

impl ProfileEditForm {
    /// Prefill from the current profile.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            bio: profile.bio.clone().unwrap_or_default(),
            avatar_url: profile
                .avatar
                .as_ref()
                .and_then(Media::href)
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// Check the form and build the update. A blank avatar leaves the current
    /// one in place.
    pub fn validate(&self) -> Result<ProfileUpdate> {
        let bio = self.bio.trim();
        let avatar_url = self.avatar_url.trim();

        if bio.chars().count() > MAX_BIO_LEN {
            return Err(ApiError::validation("Bio must be 160 characters or fewer."));
        }
        if !avatar_url.is_empty() && !is_http_url(avatar_url) {
            return Err(ApiError::validation("Avatar URL must start with http(s)://"));
        }

        Ok(ProfileUpdate {
            bio: Some(bio.to_string()),
            avatar: (!avatar_url.is_empty()).then(|| Media {
                url: avatar_url.to_string(),
                alt: None,
            }),
        })
    }
}

// -----------------------------------------------------------------------------
// 2. Loading
// -----------------------------------------------------------------------------

/// `Loading -> Ready | Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileEditState {
    Loading,
    Ready(ProfileEditForm),
    Failed(String),
}

/// Fetch the signed-in user's profile to prefill the form.
pub async fn load_profile_edit(client: &ApiClient) -> ProfileEditState {
    let Some(name) = client.session().profile_name() else {
        return ProfileEditState::Failed(ApiError::NotAuthenticated.to_string());
    };

    ensure_api_key_best_effort(client).await;

    match get_profile(client, &name, ProfileInclude::default()).await {
        Ok(profile) => ProfileEditState::Ready(ProfileEditForm::from_profile(&profile)),
        Err(e) => {
            log::error!("Profile edit load failed for {}: {}", name, e);
            ProfileEditState::Failed(e.to_string())
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Saving
// -----------------------------------------------------------------------------

/// Validate and save. Returns the profile page to navigate to.
pub async fn save_profile(client: &ApiClient, toasts: &ToastSlot, form: &ProfileEditForm) -> Result<String> {
    let update = form.validate()?;
    let name = client.session().profile_name().ok_or(ApiError::NotAuthenticated)?;

    update_profile(client, &name, &update).await?;
    toasts.set_pending(PROFILE_UPDATED_TOAST);
    Ok(routes::profile(&name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::{authed_store, Fixture};
    use serde_json::json;

    fn form(bio: &str, avatar_url: &str) -> ProfileEditForm {
        ProfileEditForm {
            bio: bio.to_string(),
            avatar_url: avatar_url.to_string(),
        }
    }

    #[test]
    fn test_prefill_from_profile() {
        let profile: Profile = serde_json::from_value(json!({
            "name": "alice",
            "bio": "Hi there",
            "avatar": { "url": "https://img.example/a.png", "alt": "" }
        }))
        .unwrap();
        assert_eq!(
            ProfileEditForm::from_profile(&profile),
            form("Hi there", "https://img.example/a.png")
        );
        assert_eq!(ProfileEditForm::from_profile(&Profile::default()), form("", ""));
    }

    #[test]
    fn test_validation() {
        let err = form("ok", "ftp://x").validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "Avatar URL must start with http(s)://");

        let long = "x".repeat(161);
        assert!(form(&long, "").validate().is_err());

        let update = form("  Hello  ", " ").validate().unwrap();
        assert_eq!(update.bio.as_deref(), Some("Hello"));
        assert!(update.avatar.is_none());
    }

    #[tokio::test]
    async fn test_load_prefills_own_profile() {
        let fx = Fixture::with_store(authed_store("tok", "alice", Some("key")));
        fx.transport.respond(200, json!({ "data": { "name": "alice", "bio": "Hi" } }));

        let state = load_profile_edit(&fx.client).await;
        assert_eq!(state, ProfileEditState::Ready(form("Hi", "")));
        assert!(fx.transport.last_request().url.ends_with("/social/profiles/alice"));
    }

    #[tokio::test]
    async fn test_load_signed_out_sends_nothing() {
        let fx = Fixture::new();
        assert_eq!(
            load_profile_edit(&fx.client).await,
            ProfileEditState::Failed("You are not logged in".to_string())
        );
        assert_eq!(fx.transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_save_returns_to_profile_with_toast() {
        let fx = Fixture::with_store(authed_store("tok", "alice", Some("key")));
        fx.transport.respond(200, json!({ "data": { "name": "alice" } }));

        let href = save_profile(&fx.client, &fx.toasts, &form("New bio", "https://img.example/a.png"))
            .await
            .unwrap();
        assert_eq!(href, "/profile?name=alice");
        assert_eq!(
            fx.transport.last_body(),
            json!({ "bio": "New bio", "avatar": { "url": "https://img.example/a.png" } })
        );
        assert_eq!(fx.toasts.take().as_deref(), Some(PROFILE_UPDATED_TOAST));
    }

    #[tokio::test]
    async fn test_invalid_save_sends_nothing() {
        let fx = Fixture::with_store(authed_store("tok", "alice", Some("key")));
        assert!(save_profile(&fx.client, &fx.toasts, &form("", "nope")).await.is_err());
        assert_eq!(fx.transport.request_count(), 0);
        assert!(fx.toasts.take().is_none());
    }
}
