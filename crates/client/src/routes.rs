//! Page locations the controllers navigate to.

pub const FEED: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const PROFILE: &str = "/profile";
pub const PROFILE_EDIT: &str = "/profile/edit";
pub const POST: &str = "/post";
pub const POST_CREATE: &str = "/post/create";

/// Element id whose presence switches the feed into profile mode.
pub const PROFILE_HEADER_MOUNT_ID: &str = "profileHeaderMount";

pub fn post_detail(id: &str) -> String {
    format!("{}?id={}", POST, urlencoding::encode(id))
}

pub fn profile(name: &str) -> String {
    format!("{}?name={}", PROFILE, urlencoding::encode(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_encoding() {
        assert_eq!(post_detail("12"), "/post?id=12");
        assert_eq!(profile("ann marie"), "/profile?name=ann%20marie");
    }
}
