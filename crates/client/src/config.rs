//! Client configuration.

/// Default remote API.
pub const DEFAULT_API_URL: &str = "https://v2.api.noroff.dev";

/// Header carrying the secondary API key.
pub const DEFAULT_API_KEY_HEADER: &str = "X-Noroff-API-Key";

/// Fixed page size for every listing.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Settings shared by every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, without trailing slash.
    pub base_url: String,
    /// Name of the API-key request header.
    pub api_key_header: String,
    /// Posts requested per listing call.
    pub page_size: u32,
}

impl ClientConfig {
    /// Create a config pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key_header: DEFAULT_API_KEY_HEADER.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Resolve the API URL baked in at compile time (`POSTLINE_API_URL`),
    /// falling back to the public API.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("POSTLINE_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    /// Override the API-key header name.
    pub fn api_key_header(mut self, header: impl Into<String>) -> Self {
        self.api_key_header = header.into();
        self
    }

    /// Override the listing page size.
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = size.max(1);
        self
    }

    /// Join the base URL with an absolute API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::new("http://localhost:3000/");
        assert_eq!(config.url("/auth/login"), "http://localhost:3000/auth/login");
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.api_key_header, "X-Noroff-API-Key");
        assert_eq!(config.page_size, 50);
        assert_eq!(config.page_size(0).page_size, 1);
    }
}
