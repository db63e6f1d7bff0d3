//! Post visibility and access control for the Quill blog platform
//!
//! Decides, per request and per post, whether a subject may read or edit
//! the post, and derives the equivalent filter for listings. Posts carry
//! independent read and edit visibility levels (`public`,
//! `authenticated`, `team`, `author`); comments and likes inherit access
//! from their parent post, with an authentication floor for mutations.
//!
//! The single-object check and the list filter are guaranteed to agree:
//! filtering a set of posts with [`PostPredicate`] yields exactly the
//! posts for which [`PermissionEvaluator::evaluate`] returns true.
//!
//! # Example
//!
//! ```
//! use quill_permissions::{
//!     Action, PermissionEvaluator, Post, PostPredicate, Subject, VisibilityLevel,
//! };
//!
//! let post = Post::new(1, "Hello", "First post", 42, "backend")
//!     .unwrap()
//!     .with_read_level(VisibilityLevel::Team)
//!     .with_edit_level(VisibilityLevel::Author);
//!
//! let teammate = Subject::user(7, "backend");
//! assert!(PermissionEvaluator::evaluate(&teammate, &post, Action::Read));
//! assert!(!PermissionEvaluator::evaluate(&teammate, &post, Action::Edit));
//!
//! // The list predicate agrees with the single-object check.
//! let predicate = PostPredicate::for_subject(&teammate, Action::Read);
//! assert!(predicate.matches(&post));
//! ```

pub mod audit;
pub mod dependents;
pub mod error;
pub mod permission;
pub mod post;
pub mod storage;
pub mod subject;

pub use audit::{AccessAuditEntry, AuditDecision, AuditLogger};
pub use dependents::{Comment, DependentGate, Like};
pub use error::{Error, Result};
pub use permission::{
    AccessManager, Action, PermissionEvaluator, PostPredicate, PredicateRule, VisibilityClause,
    VisibilityDefaults, VisibilityLevel,
};
pub use post::{Post, MAX_CONTENT_LEN, MAX_TITLE_LEN};
pub use storage::{InMemoryPostRepository, PostRepository};
pub use subject::Subject;
