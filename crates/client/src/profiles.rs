// =============================================================================
// Postline Client - Profiles API
// =============================================================================
// Table of Contents:
// 1. Types
// 2. Profiles API Functions
// =============================================================================

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::client::{ApiClient, AuthMode, RequestOptions};
use crate::error::Result;
use crate::posts::Media;

// -----------------------------------------------------------------------------
// 1. Types
// -----------------------------------------------------------------------------

/// Minimal profile reference (post author, follower, followee).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<Media>,
}

/// Precomputed counters some responses carry instead of arrays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileCounts {
    #[serde(default)]
    pub posts: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
}

/// Full profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<Media>,
    #[serde(default)]
    pub banner: Option<Media>,
    #[serde(default)]
    pub posts: Option<Vec<Value>>,
    #[serde(default)]
    pub followers: Option<Vec<ProfileRef>>,
    #[serde(default)]
    pub following: Option<Vec<ProfileRef>>,
    #[serde(rename = "_count", default)]
    pub count: Option<ProfileCounts>,
}

impl Profile {
    /// Post count from the array when present, else from `_count`.
    pub fn posts_count(&self) -> u64 {
        match &self.posts {
            Some(posts) => posts.len() as u64,
            None => self.count.map(|c| c.posts).unwrap_or(0),
        }
    }

    pub fn followers_count(&self) -> u64 {
        match &self.followers {
            Some(followers) => followers.len() as u64,
            None => self.count.map(|c| c.followers).unwrap_or(0),
        }
    }

    pub fn following_count(&self) -> u64 {
        match &self.following {
            Some(following) => following.len() as u64,
            None => self.count.map(|c| c.following).unwrap_or(0),
        }
    }

    /// Whether `name` appears in the follower array. Count-only profiles
    /// always answer `false`.
    pub fn is_followed_by(&self, name: &str) -> bool {
        let me = name.to_lowercase();
        !me.is_empty()
            && self
                .followers
                .as_ref()
                .map(|followers| followers.iter().any(|f| f.name.to_lowercase() == me))
                .unwrap_or(false)
    }
}

/// Profile update body. Absent fields are left untouched by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Media>,
}

/// Related collections to embed in a profile response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileInclude {
    pub posts: bool,
    pub followers: bool,
    pub following: bool,
}

impl ProfileInclude {
    /// Everything the profile header needs.
    pub fn all() -> Self {
        Self {
            posts: true,
            followers: true,
            following: true,
        }
    }

    fn query(&self) -> String {
        [
            ("_posts", self.posts),
            ("_followers", self.followers),
            ("_following", self.following),
        ]
        .iter()
        .filter(|(_, on)| *on)
        .map(|(flag, _)| format!("{}=true", flag))
        .collect::<Vec<_>>()
        .join("&")
    }
}

// -----------------------------------------------------------------------------
// 2. Profiles API Functions
// -----------------------------------------------------------------------------

fn profile_path(name: &str) -> String {
    format!("/social/profiles/{}", urlencoding::encode(name))
}

/// Fetch a profile.
pub async fn get_profile(client: &ApiClient, name: &str, include: ProfileInclude) -> Result<Profile> {
    let mut path = profile_path(name);
    let query = include.query();
    if !query.is_empty() {
        path.push('?');
        path.push_str(&query);
    }

    match client.request(&path, RequestOptions::get(AuthMode::Token)).await? {
        Some(env) if !env.data.is_null() => env.into_data(),
        _ => Ok(Profile::default()),
    }
}

/// Update the signed-in user's own profile.
pub async fn update_profile(client: &ApiClient, name: &str, update: &ProfileUpdate) -> Result<()> {
    let body = serde_json::to_value(update)?;
    client
        .request(&profile_path(name), RequestOptions::put(body, AuthMode::Required))
        .await?;
    Ok(())
}

/// Follow `name`.
pub async fn follow(client: &ApiClient, name: &str) -> Result<()> {
    let path = format!("{}/follow", profile_path(name));
    client
        .request(&path, RequestOptions::put(json!({}), AuthMode::Required))
        .await?;
    Ok(())
}

/// Unfollow `name`.
pub async fn unfollow(client: &ApiClient, name: &str) -> Result<()> {
    let path = format!("{}/unfollow", profile_path(name));
    client
        .request(&path, RequestOptions::put(json!({}), AuthMode::Required))
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{authed_store, Fixture};

    #[test]
    fn test_counts_from_arrays_or_count_field() {
        let arrays: Profile = serde_json::from_value(json!({
            "name": "alice",
            "posts": [{}, {}],
            "followers": [{ "name": "bob" }],
            "following": []
        }))
        .unwrap();
        assert_eq!(
            (arrays.posts_count(), arrays.followers_count(), arrays.following_count()),
            (2, 1, 0)
        );

        let counted: Profile = serde_json::from_value(json!({
            "name": "alice",
            "_count": { "posts": 12, "followers": 1500, "following": 3 }
        }))
        .unwrap();
        assert_eq!(
            (counted.posts_count(), counted.followers_count(), counted.following_count()),
            (12, 1500, 3)
        );
    }

    #[test]
    fn test_is_followed_by() {
        let profile: Profile = serde_json::from_value(json!({
            "name": "alice",
            "followers": [{ "name": "Bob" }]
        }))
        .unwrap();
        assert!(profile.is_followed_by("bob"));
        assert!(!profile.is_followed_by("carol"));
        assert!(!profile.is_followed_by(""));

        let count_only: Profile =
            serde_json::from_value(json!({ "name": "alice", "_count": { "followers": 4 } })).unwrap();
        assert!(!count_only.is_followed_by("bob"));
    }

    #[tokio::test]
    async fn test_get_profile_with_includes() {
        let fx = Fixture::with_store(authed_store("tok", "alice", None));
        fx.transport.respond(200, json!({ "data": { "name": "bob", "email": "bob@x.no" } }));

        let profile = get_profile(&fx.client, "bob", ProfileInclude::all()).await.unwrap();
        assert_eq!(profile.name, "bob");
        assert_eq!(
            fx.transport.last_request().url,
            "https://v2.api.noroff.dev/social/profiles/bob?_posts=true&_followers=true&_following=true"
        );
    }

    #[tokio::test]
    async fn test_follow_and_unfollow_paths() {
        let fx = Fixture::with_store(authed_store("tok", "alice", Some("key")));
        fx.transport.respond(200, json!({ "data": {} }));
        fx.transport.respond(200, json!({ "data": {} }));

        follow(&fx.client, "bob").await.unwrap();
        unfollow(&fx.client, "bob").await.unwrap();

        let urls: Vec<String> = fx.transport.requests().into_iter().map(|r| r.url).collect();
        assert!(urls[0].ends_with("/social/profiles/bob/follow"));
        assert!(urls[1].ends_with("/social/profiles/bob/unfollow"));
        assert_eq!(fx.transport.last_body(), json!({}));
    }

    #[tokio::test]
    async fn test_update_profile_omits_unset_fields() {
        let fx = Fixture::with_store(authed_store("tok", "alice", Some("key")));
        fx.transport.respond(200, json!({ "data": { "name": "alice" } }));

        let update = ProfileUpdate {
            bio: Some("Hello".to_string()),
            avatar: None,
        };
        update_profile(&fx.client, "alice", &update).await.unwrap();

        let sent = fx.transport.last_request();
        assert_eq!(sent.method, crate::transport::Method::Put);
        assert!(sent.url.ends_with("/social/profiles/alice"));
        assert_eq!(fx.transport.last_body(), json!({ "bio": "Hello" }));
    }
}
