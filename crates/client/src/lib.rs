// =============================================================================
// Postline Client - Library Entry Point
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Re-exports
// =============================================================================

//! Platform-independent core of the Postline social client.
//!
//! The remote REST API owns every piece of business data. This crate only
//! composes authenticated requests, keeps the client-side session, and turns
//! API responses into view-models the front end can render.

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod auth;
pub mod client;
pub mod config;
pub mod controller;
pub mod envelope;
pub mod error;
pub mod format;
pub mod posts;
pub mod profiles;
pub mod routes;
pub mod session;
pub mod storage;
pub mod toast;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use client::{ApiClient, AuthMode, RequestOptions};
pub use config::ClientConfig;
pub use envelope::Envelope;
pub use error::{ApiError, ErrorKind, Result};
pub use posts::{filter_posts_clientside, ListOptions, Media, Post, PostPayload};
pub use profiles::{Profile, ProfileInclude, ProfileRef, ProfileUpdate};
pub use session::{Session, SessionStore};
pub use storage::{KeyValueStore, MemoryStore};
pub use toast::ToastSlot;
pub use transport::{HttpRequest, HttpResponse, Method, Transport};
