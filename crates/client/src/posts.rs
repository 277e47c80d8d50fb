// =============================================================================
// Postline Client - Posts API
// =============================================================================
// Table of Contents:
// 1. Types
// 2. Posts API Functions
// 3. Client-side Filtering
// =============================================================================

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::client::{ApiClient, AuthMode, RequestOptions};
use crate::envelope::Envelope;
use crate::error::{ApiError, Result};
use crate::profiles::ProfileRef;

// -----------------------------------------------------------------------------
// 1. Types
// -----------------------------------------------------------------------------

/// Image attached to a post or profile.
///
/// Older profile payloads send the avatar as a bare URL string; both shapes
/// deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MediaRepr")]
pub struct Media {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MediaRepr {
    Url(String),
    Full {
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        alt: Option<String>,
    },
}

impl From<MediaRepr> for Media {
    fn from(repr: MediaRepr) -> Self {
        match repr {
            MediaRepr::Url(url) => Media { url, alt: None },
            MediaRepr::Full { url, alt } => Media {
                url: url.unwrap_or_default(),
                alt: alt.filter(|a| !a.is_empty()),
            },
        }
    }
}

impl Media {
    /// URL if one is actually set.
    pub fn href(&self) -> Option<&str> {
        Some(self.url.as_str()).filter(|u| !u.is_empty())
    }
}

/// Post as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub media: Option<Media>,
    #[serde(default)]
    pub author: Option<ProfileRef>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
}

impl Post {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }

    pub fn author_name(&self) -> Option<&str> {
        self.author
            .as_ref()
            .map(|a| a.name.as_str())
            .filter(|n| !n.is_empty())
    }
}

/// Create/update body. Absent optional fields are omitted, never sent empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostPayload {
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
}

impl PostPayload {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            tags: None,
            media: None,
        }
    }
}

/// Pagination and author inclusion for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub limit: u32,
    pub page: u32,
    pub include_author: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            limit: crate::config::DEFAULT_PAGE_SIZE,
            page: 1,
            include_author: true,
        }
    }
}

impl ListOptions {
    fn query(&self) -> String {
        let mut query = format!("limit={}&page={}", self.limit, self.page);
        if self.include_author {
            query.push_str("&_author=true");
        }
        query
    }
}

fn id_as_string<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("invalid post id: {}", other))),
    }
}

// -----------------------------------------------------------------------------
// 2. Posts API Functions
// -----------------------------------------------------------------------------

fn posts_from(envelope: Option<Envelope>) -> Result<Vec<Post>> {
    match envelope {
        None => Ok(Vec::new()),
        Some(env) => match env.data {
            Value::Null => Ok(Vec::new()),
            Value::Array(_) => env.into_data(),
            _ => Err(ApiError::malformed("Expected a list of posts")),
        },
    }
}

/// List the general feed.
pub async fn list_posts(client: &ApiClient, options: ListOptions) -> Result<Vec<Post>> {
    let path = format!("/social/posts?{}", options.query());
    posts_from(client.request(&path, RequestOptions::get(AuthMode::Token)).await?)
}

/// List one author's posts.
pub async fn list_profile_posts(
    client: &ApiClient,
    profile_name: &str,
    options: ListOptions,
) -> Result<Vec<Post>> {
    let path = format!(
        "/social/profiles/{}/posts?{}",
        urlencoding::encode(profile_name),
        options.query()
    );
    posts_from(client.request(&path, RequestOptions::get(AuthMode::Token)).await?)
}

/// Fetch a single post.
pub async fn get_post(client: &ApiClient, id: &str, include_author: bool) -> Result<Post> {
    let mut path = format!("/social/posts/{}", urlencoding::encode(id));
    if include_author {
        path.push_str("?_author=true");
    }
    client
        .request(&path, RequestOptions::get(AuthMode::Token))
        .await?
        .filter(|env| !env.data.is_null())
        .ok_or_else(|| ApiError::malformed("No post data."))?
        .into_data()
}

/// Create a post; returns the raw envelope so callers can pick the id.
pub async fn create_post(client: &ApiClient, payload: &PostPayload) -> Result<Option<Envelope>> {
    let body = serde_json::to_value(payload)?;
    client
        .request("/social/posts", RequestOptions::post(body, AuthMode::Required))
        .await
}

/// Update a post (owner only).
pub async fn update_post(client: &ApiClient, id: &str, payload: &PostPayload) -> Result<Option<Envelope>> {
    let body = serde_json::to_value(payload)?;
    let path = format!("/social/posts/{}", urlencoding::encode(id));
    client
        .request(&path, RequestOptions::put(body, AuthMode::Required))
        .await
}

/// Delete a post (owner only).
pub async fn delete_post(client: &ApiClient, id: &str) -> Result<()> {
    let path = format!("/social/posts/{}", urlencoding::encode(id));
    client
        .request(&path, RequestOptions::delete(AuthMode::Required))
        .await?;
    Ok(())
}

// -----------------------------------------------------------------------------
// 3. Client-side Filtering
// -----------------------------------------------------------------------------

/// Case-insensitive substring match on title or body.
///
/// A blank query borrows the input untouched.
pub fn filter_posts_clientside<'a>(posts: &'a [Post], query: &str) -> Cow<'a, [Post]> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Cow::Borrowed(posts);
    }
    Cow::Owned(
        posts
            .iter()
            .filter(|p| {
                p.title().to_lowercase().contains(&needle) || p.body().to_lowercase().contains(&needle)
            })
            .cloned()
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::{authed_store, Fixture};
    use serde_json::json;

    fn post(id: &str, title: &str, body: &str) -> Post {
        Post {
            id: id.to_string(),
            title: Some(title.to_string()),
            body: Some(body.to_string()),
            tags: None,
            media: None,
            author: None,
            created: None,
            updated: None,
        }
    }

    #[test]
    fn test_filter_blank_query_is_identity() {
        let posts = vec![post("1", "Hello", "world")];
        for query in ["", "   "] {
            let filtered = filter_posts_clientside(&posts, query);
            assert!(matches!(filtered, Cow::Borrowed(_)));
            assert!(std::ptr::eq(filtered.as_ptr(), posts.as_ptr()));
        }
    }

    #[test]
    fn test_filter_matches_title_or_body() {
        let posts = vec![
            post("1", "Rust tips", "borrowing"),
            post("2", "Lunch", "I had RUSTIC bread"),
            post("3", "Weather", "sunny"),
        ];
        let ids: Vec<_> = filter_posts_clientside(&posts, " rust ")
            .iter()
            .map(|p| p.id.clone())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert!(filter_posts_clientside(&posts, "snow").is_empty());
    }

    #[test]
    fn test_post_deserializes_numeric_id_and_string_avatar() {
        let post: Post = serde_json::from_value(json!({
            "id": 7,
            "title": "Hi",
            "body": null,
            "tags": ["a"],
            "media": { "url": "https://img/x.png", "alt": "" },
            "author": { "name": "alice", "avatar": "https://img/a.png" },
            "created": "2025-03-05T14:03:00.000Z"
        }))
        .unwrap();
        assert_eq!(post.id, "7");
        assert_eq!(post.body(), "");
        assert_eq!(post.media.as_ref().and_then(|m| m.alt.clone()), None);
        let author = post.author.unwrap();
        assert_eq!(author.avatar.unwrap().url, "https://img/a.png");
    }

    #[test]
    fn test_payload_omits_absent_fields() {
        let value = serde_json::to_value(PostPayload::new("Hi", "Hello world")).unwrap();
        assert_eq!(value, json!({ "title": "Hi", "body": "Hello world" }));
    }

    #[tokio::test]
    async fn test_list_posts_query() {
        let fx = Fixture::with_store(authed_store("tok", "alice", Some("key")));
        fx.transport.respond(200, json!({ "data": [{ "id": 1, "title": "a" }], "meta": {} }));

        let posts = list_posts(&fx.client, ListOptions::default()).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(
            fx.transport.last_request().url,
            "https://v2.api.noroff.dev/social/posts?limit=50&page=1&_author=true"
        );
    }

    #[tokio::test]
    async fn test_list_profile_posts_encodes_name() {
        let fx = Fixture::with_store(authed_store("tok", "alice", None));
        fx.transport.respond(200, json!([]));

        let options = ListOptions {
            include_author: false,
            ..Default::default()
        };
        let posts = list_profile_posts(&fx.client, "ann marie", options).await.unwrap();
        assert!(posts.is_empty());
        assert_eq!(
            fx.transport.last_request().url,
            "https://v2.api.noroff.dev/social/profiles/ann%20marie/posts?limit=50&page=1"
        );
    }

    #[tokio::test]
    async fn test_get_post_flat_and_missing() {
        let fx = Fixture::with_store(authed_store("tok", "alice", None));
        fx.transport.respond(200, json!({ "id": "abc", "title": "flat" }));
        fx.transport.respond(200, json!({ "data": null }));

        let post = get_post(&fx.client, "abc", true).await.unwrap();
        assert_eq!(post.title(), "flat");
        assert!(fx.transport.last_request().url.ends_with("/social/posts/abc?_author=true"));

        let err = get_post(&fx.client, "abc", true).await.unwrap_err();
        assert_eq!(err.to_string(), "No post data.");
    }

    #[tokio::test]
    async fn test_mutations_require_api_key() {
        let fx = Fixture::with_store(authed_store("tok", "alice", None));
        let err = delete_post(&fx.client, "1").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingApiKey);
        let err = update_post(&fx.client, "1", &PostPayload::new("a", "b")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingApiKey);
        assert_eq!(fx.transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_update_sends_put() {
        let fx = Fixture::with_store(authed_store("tok", "alice", Some("key")));
        fx.transport.respond(200, json!({ "data": { "id": 1 } }));

        update_post(&fx.client, "1", &PostPayload::new("New", "Text")).await.unwrap();
        let sent = fx.transport.last_request();
        assert_eq!(sent.method, crate::transport::Method::Put);
        assert_eq!(fx.transport.last_body(), json!({ "title": "New", "body": "Text" }));
    }
}
