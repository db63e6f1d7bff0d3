//! Dependent entities (comments and likes) and their access gate
//!
//! Comments and likes carry no visibility levels of their own; whether a
//! subject may create or delete one is derived entirely from the parent
//! post's read level, with one extra rule: the subject must be
//! authenticated, even when the parent is public.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::permission::evaluator::PermissionEvaluator;
use crate::permission::models::Action;
use crate::post::Post;
use crate::storage::PostRepository;
use crate::subject::Subject;

/// A comment on a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique identifier for this comment
    pub id: String,
    /// The post commented on
    pub post: u64,
    /// The commenting user
    pub user: u64,
    /// Comment body
    pub content: String,
    /// Timestamp of creation
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment
    pub fn new(post: u64, user: u64, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            post,
            user,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// A like on a post
///
/// A user holds at most one like per post; the repository enforces the
/// uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    /// Unique identifier for this like
    pub id: String,
    /// The liked post
    pub post: u64,
    /// The liking user
    pub user: u64,
    /// Timestamp of creation
    pub created_at: DateTime<Utc>,
}

impl Like {
    /// Create a new like
    pub fn new(post: u64, user: u64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            post,
            user,
            created_at: Utc::now(),
        }
    }
}

/// Gate deciding whether a subject may create or delete dependents
pub struct DependentGate;

impl DependentGate {
    /// Whether the subject may create or delete comments/likes on the post
    ///
    /// Requires both an authenticated subject and read access to the
    /// parent. This is its own rule, not a call-through to the read check:
    /// anonymous subjects are refused even when the parent's read level is
    /// public.
    pub fn can_mutate(subject: &Subject, post: &Post) -> bool {
        subject.is_authenticated() && PermissionEvaluator::evaluate(subject, post, Action::Read)
    }

    /// Load the parent post and apply the gate
    ///
    /// Distinguishes an absent parent (`PostNotFound`) from a refused
    /// subject (`PermissionDenied`) so callers can map them to different
    /// response codes.
    pub fn authorize(
        repository: &dyn PostRepository,
        subject: &Subject,
        post_id: u64,
    ) -> Result<Post> {
        let post = repository
            .get_post(post_id)?
            .ok_or(Error::PostNotFound { id: post_id })?;

        if Self::can_mutate(subject, &post) {
            Ok(post)
        } else {
            Err(Error::PermissionDenied {
                action: Action::Read,
                post_id,
            })
        }
    }
}
