//! UserDirectory trait and the remote REST integration.
//!
//! Provides an abstraction layer over the HTTP client so the coordinator
//! and detail screens can be driven by an in-memory directory in tests.

pub mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{User, UserDraft};

pub use http::HttpDirectory;

/// Errors from the user directory.
///
/// Screens collapse every variant into the same generic message; the
/// distinction only shows up in logs.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("directory returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("failed to decode directory response: {0}")]
    Decode(String),
}

/// CRUD operations against the remote user directory.
///
/// Every call issues exactly one request and resolves to either the
/// directory's answer or a [`DirectoryError`]. No retries.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// `GET /users`, in the order the directory returns them.
    async fn list_users(&self) -> Result<Vec<User>, DirectoryError>;

    /// `GET /users/{id}`.
    async fn get_user(&self, id: u64) -> Result<User, DirectoryError>;

    /// `POST /users` with the draft. The directory assigns the id.
    async fn create_user(&self, draft: &UserDraft) -> Result<User, DirectoryError>;

    /// `PUT /users/{id}` with the full record; returns the canonical copy.
    async fn update_user(&self, user: &User) -> Result<User, DirectoryError>;

    /// `DELETE /users/{id}`.
    async fn delete_user(&self, id: u64) -> Result<(), DirectoryError>;
}
