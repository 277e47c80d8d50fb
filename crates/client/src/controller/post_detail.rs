// =============================================================================
// Postline Client - Post Detail Controller
// =============================================================================
// Table of Contents:
// 1. View-Model
// 2. Edit Draft
// 3. Loading
// 4. Mutations
// =============================================================================

use crate::auth::ensure_api_key_best_effort;
use crate::client::ApiClient;
use crate::error::{ApiError, Result};
use crate::format::medium_date_time;
use crate::posts::{self, get_post, Post, PostPayload};
use crate::routes;
use crate::session::same_identity;
use crate::toast::ToastSlot;

pub const LOADING_TEXT: &str = "Loading...";
pub const NOT_FOUND_TITLE: &str = "Post not found";
pub const MISSING_ID: &str = "Missing post id in URL.";
pub const NOT_OWNER_NOTE: &str = "Only the author can edit or delete this post";
pub const SIGN_IN_NOTE: &str = "Sign in to edit or delete your own posts";
pub const CONFIRM_DELETE: &str = "Delete this post? This cannot be undone.";
pub const UPDATED_TOAST: &str = "Post updated.";
pub const DELETED_TOAST: &str = "Post deleted.";

// -----------------------------------------------------------------------------
// 1. View-Model
// -----------------------------------------------------------------------------

/// What the viewer may do with the post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailControls {
    /// Edit and delete enabled.
    Owner,
    /// Signed in, someone else's post.
    NotOwnerNote,
    /// Anonymous visitor; the static sign-in note stays.
    SignInNote,
}

impl DetailControls {
    pub fn resolve(authed: bool, local_name: Option<&str>, author: Option<&str>) -> Self {
        if !authed {
            return DetailControls::SignInNote;
        }
        match author {
            Some(author) if same_identity(local_name, author) => DetailControls::Owner,
            _ => DetailControls::NotOwnerNote,
        }
    }

    pub fn note(&self) -> Option<&'static str> {
        match self {
            DetailControls::Owner => None,
            DetailControls::NotOwnerNote => Some(NOT_OWNER_NOTE),
            DetailControls::SignInNote => Some(SIGN_IN_NOTE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetailView {
    pub id: String,
    pub title: String,
    pub body: String,
    pub author: Option<String>,
    pub author_href: Option<String>,
    pub date: String,
    pub media_url: Option<String>,
    pub media_alt: String,
    pub tags: Vec<String>,
    pub controls: DetailControls,
}

impl PostDetailView {
    pub fn build(post: &Post, controls: DetailControls) -> Self {
        let title = Some(post.title())
            .filter(|t| !t.trim().is_empty())
            .unwrap_or("(Untitled)")
            .to_string();
        let author = post.author_name().map(str::to_string);
        Self {
            id: post.id.clone(),
            body: post.body().to_string(),
            author_href: author.as_deref().map(routes::profile),
            author,
            date: medium_date_time(post.created.as_deref()),
            media_url: post.media.as_ref().and_then(|m| m.href()).map(str::to_string),
            media_alt: super::feed::media_alt(post),
            tags: post.tags.clone().unwrap_or_default(),
            controls,
            title,
        }
    }

    /// Draft pre-filled from the current post.
    pub fn draft(&self) -> EditDraft {
        EditDraft {
            title: if self.title == "(Untitled)" { String::new() } else { self.title.clone() },
            body: self.body.clone(),
        }
    }
}

/// `Loading -> Ready | Failed`. `Failed` is terminal for the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostDetailState {
    Loading,
    Ready(PostDetailView),
    Failed(String),
}

// -----------------------------------------------------------------------------
// 2. Edit Draft
// -----------------------------------------------------------------------------

/// Inline edit form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDraft {
    pub title: String,
    pub body: String,
}

impl EditDraft {
    pub fn validate(&self) -> Result<PostPayload> {
        let title = self.title.trim();
        let body = self.body.trim();
        if title.is_empty() || body.is_empty() {
            return Err(ApiError::validation("Title and content are required."));
        }
        Ok(PostPayload::new(title, body))
    }
}

// -----------------------------------------------------------------------------
// 3. Loading
// -----------------------------------------------------------------------------

/// Load the post named by the `id` query parameter.
pub async fn load_post_detail(client: &ApiClient, id: Option<&str>) -> PostDetailState {
    let Some(id) = id.map(str::trim).filter(|id| !id.is_empty()) else {
        return PostDetailState::Failed(MISSING_ID.to_string());
    };

    ensure_api_key_best_effort(client).await;

    match get_post(client, id, true).await {
        Ok(post) => {
            let session = client.session();
            let local_name = session.profile_name();
            let controls = DetailControls::resolve(
                session.is_authed(),
                local_name.as_deref(),
                post.author_name(),
            );
            PostDetailState::Ready(PostDetailView::build(&post, controls))
        }
        Err(e) => {
            log::error!("Post {} load failed: {}", id, e);
            PostDetailState::Failed(e.to_string())
        }
    }
}

// -----------------------------------------------------------------------------
// 4. Mutations
// -----------------------------------------------------------------------------

/// Validate and submit an edit. On success a toast is left for the reload.
pub async fn save_edit(client: &ApiClient, toasts: &ToastSlot, id: &str, draft: &EditDraft) -> Result<()> {
    let payload = draft.validate()?;
    posts::update_post(client, id, &payload).await?;
    toasts.set_pending(UPDATED_TOAST);
    Ok(())
}

/// Delete the post. Returns where to navigate on success.
///
/// Confirmation is the caller's job and must happen before this is called.
pub async fn delete_post(client: &ApiClient, toasts: &ToastSlot, id: &str) -> Result<&'static str> {
    posts::delete_post(client, id).await?;
    toasts.set_pending(DELETED_TOAST);
    Ok(routes::FEED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::KeyValueStore;
    use crate::testing::{authed_store, Fixture};
    use crate::toast::TOAST_KEY;
    use crate::transport::Method;
    use serde_json::json;

    fn post_response(author: &str) -> serde_json::Value {
        json!({ "data": {
            "id": 7,
            "title": "Hello",
            "body": "World",
            "tags": ["rust"],
            "author": { "name": author },
            "created": "2025-03-05T14:03:00.000Z"
        }})
    }

    #[test]
    fn test_controls() {
        assert_eq!(DetailControls::resolve(false, None, Some("alice")), DetailControls::SignInNote);
        assert_eq!(
            DetailControls::resolve(true, Some("alice"), Some("ALICE")),
            DetailControls::Owner
        );
        assert_eq!(
            DetailControls::resolve(true, Some("bob"), Some("alice")),
            DetailControls::NotOwnerNote
        );
        assert_eq!(DetailControls::resolve(true, Some("bob"), None), DetailControls::NotOwnerNote);
        assert_eq!(DetailControls::NotOwnerNote.note(), Some(NOT_OWNER_NOTE));
    }

    #[test]
    fn test_untitled_fallback() {
        let post: Post = serde_json::from_value(json!({ "id": "1", "title": "  " })).unwrap();
        let view = PostDetailView::build(&post, DetailControls::Owner);
        assert_eq!(view.title, "(Untitled)");
        assert_eq!(view.draft().title, "");
        assert!(view.author_href.is_none());
    }

    #[test]
    fn test_draft_validation() {
        let blank = EditDraft { title: "x".into(), body: " ".into() };
        assert_eq!(blank.validate().unwrap_err().to_string(), "Title and content are required.");

        let ok = EditDraft { title: " a ".into(), body: "b".into() };
        let payload = ok.validate().unwrap();
        assert_eq!(payload.title, "a");
        assert!(payload.tags.is_none());
    }

    #[tokio::test]
    async fn test_missing_id_is_terminal() {
        let fx = Fixture::with_store(authed_store("tok", "alice", Some("key")));
        assert_eq!(
            load_post_detail(&fx.client, Some(" ")).await,
            PostDetailState::Failed(MISSING_ID.to_string())
        );
        assert_eq!(load_post_detail(&fx.client, None).await, PostDetailState::Failed(MISSING_ID.to_string()));
        assert_eq!(fx.transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_owner_view() {
        let fx = Fixture::with_store(authed_store("tok", "alice", Some("key")));
        fx.transport.respond(200, post_response("alice"));

        let PostDetailState::Ready(view) = load_post_detail(&fx.client, Some("7")).await else {
            panic!("expected ready post");
        };
        assert_eq!(view.controls, DetailControls::Owner);
        assert_eq!(view.author_href.as_deref(), Some("/profile?name=alice"));
        assert_eq!(view.date, "Mar 5, 2025, 14:03");
        assert_eq!(view.tags, vec!["rust".to_string()]);
        assert!(fx.transport.last_request().url.ends_with("/social/posts/7?_author=true"));
    }

    #[tokio::test]
    async fn test_not_found() {
        let fx = Fixture::with_store(authed_store("tok", "alice", Some("key")));
        fx.transport
            .respond(404, json!({ "errors": [{ "message": "No post with this id" }] }));
        assert_eq!(
            load_post_detail(&fx.client, Some("99")).await,
            PostDetailState::Failed("No post with this id".to_string())
        );
    }

    #[tokio::test]
    async fn test_save_edit_leaves_toast() {
        let fx = Fixture::with_store(authed_store("tok", "alice", Some("key")));
        fx.transport.respond(200, post_response("alice"));

        let draft = EditDraft { title: "New".into(), body: "Body".into() };
        save_edit(&fx.client, &fx.toasts, "7", &draft).await.unwrap();

        let request = fx.transport.last_request();
        assert_eq!(request.method, Method::Put);
        assert_eq!(fx.transport.last_body(), json!({ "title": "New", "body": "Body" }));
        assert_eq!(fx.tab_store.get(TOAST_KEY).as_deref(), Some(UPDATED_TOAST));
    }

    #[tokio::test]
    async fn test_save_edit_failure_keeps_state() {
        let fx = Fixture::with_store(authed_store("tok", "alice", Some("key")));
        fx.transport.respond(403, json!({ "message": "Forbidden" }));

        let draft = EditDraft { title: "New".into(), body: "Body".into() };
        let err = save_edit(&fx.client, &fx.toasts, "7", &draft).await.unwrap_err();
        assert_eq!(err.to_string(), "Forbidden");
        assert!(fx.tab_store.is_empty());
    }

    #[tokio::test]
    async fn test_delete_navigates_to_feed() {
        let fx = Fixture::with_store(authed_store("tok", "alice", Some("key")));
        fx.transport.respond_raw(204, "No Content", "");

        assert_eq!(delete_post(&fx.client, &fx.toasts, "7").await.unwrap(), routes::FEED);
        assert_eq!(fx.transport.last_request().method, Method::Delete);
        assert_eq!(fx.toasts.take().as_deref(), Some(DELETED_TOAST));
    }
}
