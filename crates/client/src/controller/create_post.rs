// =============================================================================
// Postline Client - Create Post Controller
// =============================================================================
// Table of Contents:
// 1. Form Validation
// 2. Publishing
// =============================================================================

use crate::auth::{ensure_api_key, ensure_api_key_best_effort};
use crate::client::ApiClient;
use crate::error::{ApiError, ErrorKind, Result};
use crate::posts::{create_post, Media, PostPayload};
use crate::routes;
use crate::toast::ToastSlot;

pub const PUBLISHED_TOAST: &str = "Post published!";
pub const PUBLISHING_LABEL: &str = "Publishing...";

const MIN_TEXT_LEN: usize = 2;

// -----------------------------------------------------------------------------
// 1. Form Validation
// -----------------------------------------------------------------------------

/// Raw create-form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatePostForm {
    pub title: String,
    pub body: String,
    pub media_url: String,
    pub tags: String,
}

impl CreatePostForm {
    /// Check the form and build the payload. Nothing is sent on failure.
    pub fn validate(&self) -> Result<PostPayload> {
        let title = self.title.trim();
        let body = self.body.trim();
        let media_url = self.media_url.trim();

        if title.chars().count() < MIN_TEXT_LEN {
            return Err(ApiError::validation("Please enter a title (min 2 characters)."));
        }
        if body.chars().count() < MIN_TEXT_LEN {
            return Err(ApiError::validation("Please enter content (min 2 characters)."));
        }
        if !media_url.is_empty() && !is_http_url(media_url) {
            return Err(ApiError::validation("Image URL must start with http(s)://"));
        }

        let mut payload = PostPayload::new(title, body);
        let tags = parse_tags(&self.tags);
        if !tags.is_empty() {
            payload.tags = Some(tags);
        }
        if !media_url.is_empty() {
            payload.media = Some(Media {
                url: media_url.to_string(),
                alt: Some(title.to_string()),
            });
        }
        Ok(payload)
    }
}

/// Comma-separated tags, trimmed, blanks dropped.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn is_http_url(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

// -----------------------------------------------------------------------------
// 2. Publishing
// -----------------------------------------------------------------------------

/// Page-load step: provision the API key up front so the first publish does
/// not need the retry. Failures are only logged.
pub async fn prepare(client: &ApiClient) {
    ensure_api_key_best_effort(client).await;
}

/// Validate, create, and return the page to navigate to.
///
/// A missing API key is the only recoverable failure: one key is provisioned
/// and the create retried exactly once.
pub async fn publish(client: &ApiClient, toasts: &ToastSlot, form: &CreatePostForm) -> Result<String> {
    let payload = form.validate()?;

    let created = match create_post(client, &payload).await {
        Err(e) if e.kind() == ErrorKind::MissingApiKey => {
            log::info!("No API key cached, provisioning before retry");
            ensure_api_key(client).await?;
            create_post(client, &payload).await?
        }
        other => other?,
    };

    toasts.set_pending(PUBLISHED_TOAST);
    let href = created
        .and_then(|env| env.str_field("id"))
        .map(|id| routes::post_detail(&id))
        .unwrap_or_else(|| routes::FEED.to_string());
    Ok(href)
}
