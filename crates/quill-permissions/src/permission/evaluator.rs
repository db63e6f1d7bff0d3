//! Single-object permission evaluation

use crate::permission::models::{Action, VisibilityLevel};
use crate::post::Post;
use crate::subject::Subject;

/// Evaluates whether a subject may perform an action on a post
///
/// The evaluation is pure and total: no I/O, no side effects, defined for
/// every subject/post/action combination, and it never panics. A stored
/// level tag outside the closed set denies access rather than erroring;
/// collaborators that want to surface the corruption should check
/// [`Post::level`] themselves and log it.
pub struct PermissionEvaluator;

impl PermissionEvaluator {
    /// Decide ALLOW (`true`) or DENY (`false`)
    ///
    /// Administrators are allowed unconditionally, regardless of action or
    /// level. Otherwise the action selects which level of the post is
    /// consulted and that level's rule applies:
    ///
    /// - `public`: allowed, authenticated or not
    /// - `authenticated`: allowed iff the subject is authenticated
    /// - `team`: allowed iff the subject's team matches the author's
    /// - `author`: allowed iff the subject is the author
    /// - anything else: denied (fail closed)
    ///
    /// Note that a `public` edit level permits edits by anonymous
    /// subjects. The rule is applied uniformly per level; callers wanting
    /// an authentication floor must impose it themselves, as the
    /// dependents gate does.
    pub fn evaluate(subject: &Subject, post: &Post, action: Action) -> bool {
        if subject.is_admin() {
            return true;
        }

        match post.level(action) {
            Some(VisibilityLevel::Public) => true,
            Some(VisibilityLevel::Authenticated) => subject.is_authenticated(),
            Some(VisibilityLevel::Team) => subject.team() == Some(post.author_team.as_str()),
            Some(VisibilityLevel::Author) => subject.id() == Some(post.author),
            None => false,
        }
    }
}
