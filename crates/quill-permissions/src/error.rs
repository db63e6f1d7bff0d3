//! Error types for the access control system

use thiserror::Error;

use crate::permission::models::Action;

/// Result type for access control operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the access control system
///
/// `PermissionDenied` and `PostNotFound` are deliberately distinct so the
/// web layer can map them to forbidden and not-found responses. No variant
/// carries user-facing text; callers compose their own messages.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Permission denied for {action} on post {post_id}")]
    PermissionDenied { action: Action, post_id: u64 },

    #[error("Post not found: {id}")]
    PostNotFound { id: u64 },

    #[error("Invalid visibility level: {0}")]
    InvalidLevel(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
