//! Error types for Postline
//!
//! ## Table of Contents
//! - **ApiError**: every failure a request or controller can produce
//! - **ErrorKind**: coarse classification controllers branch on
//! - **Result**: Type alias for `Result<T, ApiError>`

use thiserror::Error;

/// Result type alias for Postline operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Message used when a request needs a bearer token and none is stored.
pub const NOT_LOGGED_IN: &str = "You are not logged in";

/// Message used when a request needs an API key and none is cached.
pub const NO_API_KEY: &str = "No API key found. Call ensure_api_key() after log in.";

/// Main error type for Postline operations.
///
/// `Display` is always the human-readable message shown to the user; the raw
/// response body never leaks through it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport failure (DNS, connection refused, CORS, aborted fetch)
    #[error("{0}")]
    Network(String),

    /// Non-success HTTP status with the resolved error message
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Success status whose body lacks an expected field
    #[error("{0}")]
    Malformed(String),

    /// Bearer token required but absent
    #[error("{}", NOT_LOGGED_IN)]
    NotAuthenticated,

    /// API key required but absent
    #[error("{}", NO_API_KEY)]
    MissingApiKey,

    /// Client-side form validation failed; no request was sent
    #[error("{0}")]
    Validation(String),
}

/// Coarse error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthenticated,
    MissingApiKey,
    Validation,
    Other,
}

impl ApiError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a malformed-response error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Classify the error for recovery decisions.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::NotAuthenticated => ErrorKind::Unauthenticated,
            ApiError::Status { status: 401, .. } => ErrorKind::Unauthenticated,
            ApiError::MissingApiKey => ErrorKind::MissingApiKey,
            ApiError::Validation(_) => ErrorKind::Validation,
            _ => ErrorKind::Other,
        }
    }

    /// HTTP status, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}
