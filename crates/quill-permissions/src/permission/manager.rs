//! Access manager: the facade collaborators call
//!
//! Wires the repository, the evaluator, the list predicate and the audit
//! log together. The evaluator itself stays pure; everything observable
//! (loading, logging, auditing) happens here.

use std::sync::Arc;

use tracing::warn;

use crate::audit::AuditLogger;
use crate::dependents::DependentGate;
use crate::error::{Error, Result};
use crate::permission::evaluator::PermissionEvaluator;
use crate::permission::filter::PostPredicate;
use crate::permission::models::Action;
use crate::post::Post;
use crate::storage::PostRepository;
use crate::subject::Subject;

/// Facade for single-object checks, list filtering and dependent gating
pub struct AccessManager {
    repository: Arc<dyn PostRepository>,
    audit: AuditLogger,
}

impl AccessManager {
    /// Create a manager over a repository with a fresh audit log
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self {
            repository,
            audit: AuditLogger::new(),
        }
    }

    /// Create a manager sharing an existing audit log
    pub fn with_audit(repository: Arc<dyn PostRepository>, audit: AuditLogger) -> Self {
        Self { repository, audit }
    }

    /// The audit log of decisions taken by this manager
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Authorize an action on a single post
    ///
    /// Returns the post on ALLOW. An absent post is `PostNotFound`; a
    /// refusal is `PermissionDenied` — callers map these to not-found and
    /// forbidden responses respectively.
    pub fn authorize(&self, subject: &Subject, post_id: u64, action: Action) -> Result<Post> {
        let post = self
            .repository
            .get_post(post_id)?
            .ok_or(Error::PostNotFound { id: post_id })?;

        self.warn_on_invalid_level(&post, action);

        if PermissionEvaluator::evaluate(subject, &post, action) {
            self.audit.log_allowed(subject, post_id, action)?;
            Ok(post)
        } else {
            self.audit.log_denied(subject, post_id, action)?;
            Err(Error::PermissionDenied { action, post_id })
        }
    }

    /// List every post the subject may perform the action on
    pub fn list_visible(&self, subject: &Subject, action: Action) -> Result<Vec<Post>> {
        let predicate = PostPredicate::for_subject(subject, action);
        self.repository.list_posts(&predicate)
    }

    /// Authorize creating or deleting a comment/like under a post
    ///
    /// Applies the dependents gate: authentication plus read access to the
    /// parent. Same not-found vs denied distinction as [`authorize`](Self::authorize).
    pub fn authorize_dependent(&self, subject: &Subject, post_id: u64) -> Result<Post> {
        let result = DependentGate::authorize(self.repository.as_ref(), subject, post_id);

        match &result {
            Ok(post) => {
                self.warn_on_invalid_level(post, Action::Read);
                self.audit.log_allowed(subject, post_id, Action::Read)?;
            }
            Err(Error::PermissionDenied { .. }) => {
                self.audit.log_denied(subject, post_id, Action::Read)?;
            }
            Err(_) => {}
        }

        result
    }

    /// Surface corrupted level tags as a data-integrity warning
    ///
    /// The evaluator silently denies on an unrecognized tag; the stored
    /// value implies corrupted state and operators should hear about it.
    fn warn_on_invalid_level(&self, post: &Post, action: Action) {
        if post.level(action).is_none() {
            warn!(
                post_id = post.id,
                action = %action,
                level_tag = %post.level_tag(action),
                "post carries an unrecognized visibility level; denying by default"
            );
        }
    }
}
