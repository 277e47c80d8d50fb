// =============================================================================
// Postline Client - Profile Header Controller
// =============================================================================
// Table of Contents:
// 1. Target Resolution
// 2. Follow Button
// 3. Header View-Model
// 4. Loading and Toggling
// =============================================================================

use crate::auth::ensure_api_key_best_effort;
use crate::client::ApiClient;
use crate::error::Result;
use crate::format::format_count;
use crate::profiles::{self, get_profile, Profile, ProfileInclude};
use crate::routes;
use crate::session::{same_identity, sanitize_name};

pub const DEFAULT_AVATAR: &str = "/images/sky.jpg";
pub const NO_PROFILE_MESSAGE: &str = "No profile selected.";

// -----------------------------------------------------------------------------
// 1. Target Resolution
// -----------------------------------------------------------------------------

/// Query-string name first, then the cached identity.
pub fn resolve_target(query_name: Option<&str>, local_name: Option<&str>) -> Option<String> {
    query_name
        .and_then(sanitize_name)
        .or_else(|| local_name.and_then(sanitize_name))
}

// -----------------------------------------------------------------------------
// 2. Follow Button
// -----------------------------------------------------------------------------

/// Follow toggle plus the follower count it owns.
///
/// The count is adjusted locally after each successful toggle and never
/// reconciled against the server until the next full load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowButton {
    pub following: bool,
    pub pending: bool,
    pub followers: u64,
}

impl FollowButton {
    pub fn new(following: bool, followers: u64) -> Self {
        Self {
            following,
            pending: false,
            followers,
        }
    }

    pub fn label(&self) -> &'static str {
        match (self.pending, self.following) {
            (true, true) => "Unfollowing...",
            (true, false) => "Following...",
            (false, true) => "Unfollow",
            (false, false) => "Follow",
        }
    }

    /// Value for `aria-pressed`.
    pub fn pressed(&self) -> bool {
        self.following
    }

    pub fn disabled(&self) -> bool {
        self.pending
    }

    /// Enter the in-flight state. Returns `false` when a toggle is already
    /// running, in which case the click is dropped.
    pub fn begin(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Leave the in-flight state. On success the state flips and the count
    /// moves with it; on failure the previous state is restored as-is.
    pub fn finish(&mut self, ok: bool) {
        self.pending = false;
        if !ok {
            return;
        }
        if self.following {
            self.followers = self.followers.saturating_sub(1);
        } else {
            self.followers += 1;
        }
        self.following = !self.following;
    }
}

// -----------------------------------------------------------------------------
// 3. Header View-Model
// -----------------------------------------------------------------------------

/// Owner gets an edit link, everyone else a follow toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderAction {
    EditProfile { href: String },
    Follow(FollowButton),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileHeaderView {
    pub name: String,
    pub display_name: String,
    pub handle: String,
    pub bio: Option<String>,
    pub avatar_url: String,
    pub avatar_alt: String,
    pub posts: u64,
    pub following: u64,
    followers: u64,
    pub action: HeaderAction,
}

impl ProfileHeaderView {
    /// Build the header for `profile` as seen by `local_name`.
    pub fn build(profile: &Profile, local_name: Option<&str>) -> Self {
        let name = profile.name.clone();
        let display_name = profile
            .username
            .clone()
            .filter(|u| !u.trim().is_empty())
            .or_else(|| Some(name.clone()).filter(|n| !n.is_empty()))
            .unwrap_or_else(|| "Unknown user".to_string());
        let handle = profile
            .email
            .clone()
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| format!("@{}", name));
        let avatar = profile.avatar.as_ref();
        let avatar_url = avatar
            .and_then(|m| m.href())
            .unwrap_or(DEFAULT_AVATAR)
            .to_string();
        let avatar_alt = avatar
            .and_then(|m| m.alt.clone())
            .unwrap_or_else(|| format!("{} avatar", display_name));

        let followers = profile.followers_count();
        let action = if same_identity(local_name, &name) {
            HeaderAction::EditProfile {
                href: routes::PROFILE_EDIT.to_string(),
            }
        } else {
            let following = local_name
                .map(|me| profile.is_followed_by(me))
                .unwrap_or(false);
            HeaderAction::Follow(FollowButton::new(following, followers))
        };

        Self {
            name,
            display_name,
            handle,
            bio: profile.bio.clone().filter(|b| !b.trim().is_empty()),
            avatar_url,
            avatar_alt,
            posts: profile.posts_count(),
            following: profile.following_count(),
            followers,
            action,
        }
    }

    pub fn is_owner(&self) -> bool {
        matches!(self.action, HeaderAction::EditProfile { .. })
    }

    pub fn follow_button(&self) -> Option<&FollowButton> {
        match &self.action {
            HeaderAction::Follow(button) => Some(button),
            HeaderAction::EditProfile { .. } => None,
        }
    }

    pub fn follow_button_mut(&mut self) -> Option<&mut FollowButton> {
        match &mut self.action {
            HeaderAction::Follow(button) => Some(button),
            HeaderAction::EditProfile { .. } => None,
        }
    }

    /// Follower count, tracking the button's local adjustments.
    pub fn followers(&self) -> u64 {
        self.follow_button().map(|b| b.followers).unwrap_or(self.followers)
    }

    /// `(label, formatted value)` pairs for the stats row.
    pub fn stats(&self) -> [(&'static str, String); 3] {
        [
            ("Posts", format_count(self.posts)),
            ("Followers", format_count(self.followers())),
            ("Following", format_count(self.following)),
        ]
    }
}

/// `NoProfile | Loading -> Ready | Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderState {
    NoProfile,
    Loading,
    Ready(ProfileHeaderView),
    Failed(String),
}

impl HeaderState {
    /// State to paint before any request: `NoProfile` is already final when
    /// there is no target, otherwise the skeleton shows until the load lands.
    pub fn initial(query_name: Option<&str>, local_name: Option<&str>) -> Self {
        match resolve_target(query_name, local_name) {
            Some(_) => HeaderState::Loading,
            None => HeaderState::NoProfile,
        }
    }
}

// -----------------------------------------------------------------------------
// 4. Loading and Toggling
// -----------------------------------------------------------------------------

/// Fetch and build the header. With no resolvable target nothing is fetched.
pub async fn load_profile_header(client: &ApiClient, query_name: Option<&str>) -> HeaderState {
    let local_name = client.session().profile_name();
    let Some(target) = resolve_target(query_name, local_name.as_deref()) else {
        return HeaderState::NoProfile;
    };

    ensure_api_key_best_effort(client).await;

    match get_profile(client, &target, ProfileInclude::all()).await {
        Ok(profile) => HeaderState::Ready(ProfileHeaderView::build(&profile, local_name.as_deref())),
        Err(e) => {
            log::error!("Profile header load failed for {}: {}", target, e);
            HeaderState::Failed(e.to_string())
        }
    }
}

/// Issue the follow or unfollow call matching the button's current state.
///
/// The caller flips the button with [`FollowButton::begin`] before awaiting
/// this and [`FollowButton::finish`] after.
pub async fn toggle_follow(client: &ApiClient, name: &str, currently_following: bool) -> Result<()> {
    if currently_following {
        profiles::unfollow(client, name).await
    } else {
        profiles::follow(client, name).await
    }
}
