// =============================================================================
// Postline Client - Feed Controller
// =============================================================================
// Table of Contents:
// 1. Page Mode
// 2. Feed State
// 3. Post Cards
// 4. Search Debounce
// 5. Loading
// =============================================================================

use crate::auth::ensure_api_key_best_effort;
use crate::client::ApiClient;
use crate::format::{pluralize, short_date};
use crate::posts::{filter_posts_clientside, list_posts, list_profile_posts, ListOptions, Post};
use crate::routes;
use crate::session::sanitize_name;

use super::Tickets;

pub const LOADING_STATUS: &str = "Loading posts...";
pub const EMPTY_MESSAGE: &str = "No posts found.";
pub const LOAD_FAILED: &str = "Could not load posts.";

/// Search input settle time.
pub const SEARCH_DEBOUNCE_MS: u32 = 150;

// -----------------------------------------------------------------------------
// 1. Page Mode
// -----------------------------------------------------------------------------

/// Which listing the feed shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedMode {
    AllPosts,
    ProfilePosts(String),
}

impl FeedMode {
    /// The profile mount element is the only page-type switch. On a profile
    /// page the query-string name wins over the cached one; with neither, the
    /// general feed is shown.
    pub fn resolve(has_profile_mount: bool, query_name: Option<&str>, local_name: Option<&str>) -> Self {
        if !has_profile_mount {
            return FeedMode::AllPosts;
        }
        query_name
            .and_then(sanitize_name)
            .or_else(|| local_name.and_then(sanitize_name))
            .map(FeedMode::ProfilePosts)
            .unwrap_or(FeedMode::AllPosts)
    }

    pub fn heading(&self) -> String {
        match self {
            FeedMode::AllPosts => "Latest posts".to_string(),
            FeedMode::ProfilePosts(name) => format!("Posts by {}", name),
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Feed State
// -----------------------------------------------------------------------------

/// `Idle -> Loading -> Rendered | Errored`.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedState {
    Idle,
    Loading,
    Rendered(Vec<Post>),
    Errored(String),
}

impl FeedState {
    /// Posts to render; a failed load renders as an empty list.
    pub fn posts(&self) -> &[Post] {
        match self {
            FeedState::Rendered(posts) => posts,
            _ => &[],
        }
    }

    /// Status line under the heading.
    pub fn status(&self) -> String {
        match self {
            FeedState::Idle => String::new(),
            FeedState::Loading => LOADING_STATUS.to_string(),
            FeedState::Rendered(posts) => loaded_status(posts.len()),
            FeedState::Errored(message) => message.clone(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FeedState::Loading)
    }

    /// Cards for the current search query, filtered in memory.
    pub fn search(&self, query: &str) -> SearchResult {
        let total = self.posts().len();
        let cards: Vec<PostCard> = filter_posts_clientside(self.posts(), query)
            .iter()
            .map(PostCard::from)
            .collect();
        let status = match self {
            FeedState::Rendered(_) if !query.trim().is_empty() => {
                format!("Showing {} of {} posts", cards.len(), total)
            }
            _ => self.status(),
        };
        SearchResult { cards, status }
    }
}

/// What the list shows for the current query.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub cards: Vec<PostCard>,
    pub status: String,
}

pub fn loaded_status(count: usize) -> String {
    format!("{} loaded", pluralize(count, "post"))
}

// -----------------------------------------------------------------------------
// 3. Post Cards
// -----------------------------------------------------------------------------

/// View-model of one card in the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub id: String,
    pub author: String,
    pub avatar_url: Option<String>,
    pub date: String,
    pub media_url: Option<String>,
    pub media_alt: String,
    pub body: String,
    pub href: String,
}

impl From<&Post> for PostCard {
    fn from(post: &Post) -> Self {
        let author = post.author_name().unwrap_or("Unknown").to_string();
        let avatar_url = post
            .author
            .as_ref()
            .and_then(|a| a.avatar.as_ref())
            .and_then(|m| m.href())
            .map(str::to_string);
        let media = post.media.as_ref();
        Self {
            id: post.id.clone(),
            avatar_url,
            date: short_date(post.created.as_deref()),
            media_url: media.and_then(|m| m.href()).map(str::to_string),
            media_alt: media_alt(post),
            body: post.body().to_string(),
            href: routes::post_detail(&post.id),
            author,
        }
    }
}

/// Alt text: the media's own, then the title, then a generic label.
pub fn media_alt(post: &Post) -> String {
    post.media
        .as_ref()
        .and_then(|m| m.alt.clone())
        .filter(|a| !a.is_empty())
        .or_else(|| Some(post.title().to_string()).filter(|t| !t.is_empty()))
        .unwrap_or_else(|| "Post media".to_string())
}

// -----------------------------------------------------------------------------
// 4. Search Debounce
// -----------------------------------------------------------------------------

/// Latest-keystroke-wins token source.
///
/// Every keystroke takes a new ticket; a pending filter runs only if its
/// ticket is still the latest when the timer fires.
pub type SearchDebounce = Tickets;

// -----------------------------------------------------------------------------
// 5. Loading
// -----------------------------------------------------------------------------

/// Load the feed for `mode`. Never fails: errors become [`FeedState::Errored`].
pub async fn load_feed(client: &ApiClient, mode: &FeedMode) -> FeedState {
    ensure_api_key_best_effort(client).await;

    let options = ListOptions {
        limit: client.config().page_size,
        ..Default::default()
    };
    let result = match mode {
        FeedMode::AllPosts => list_posts(client, options).await,
        FeedMode::ProfilePosts(name) => list_profile_posts(client, name, options).await,
    };

    match result {
        Ok(posts) => FeedState::Rendered(posts),
        Err(e) => {
            log::error!("Feed load failed: {}", e);
            let message = e.to_string();
            FeedState::Errored(if message.is_empty() { LOAD_FAILED.to_string() } else { message })
        }
    }
}
