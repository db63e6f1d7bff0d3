//! List filtering: the predicate describing every post a subject may act on
//!
//! Listing many posts must produce exactly the set that would survive
//! filtering one-by-one with the single-object evaluator. The predicate is
//! expressed as data (a disjunction of clauses) so a storage layer can
//! translate it into a query instead of loading every row and calling the
//! evaluator per row.

use serde::{Deserialize, Serialize};

use crate::permission::models::{Action, VisibilityLevel};
use crate::post::Post;
use crate::subject::Subject;

/// One arm of the visibility disjunction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "clause")]
pub enum VisibilityClause {
    /// The selected level equals the given level, with no further condition
    Level { level: VisibilityLevel },
    /// The selected level is `team` and the post's author team matches
    TeamOf { team: String },
    /// The selected level is `author` and the post's author matches
    AuthoredBy { author: u64 },
}

impl VisibilityClause {
    fn matches(&self, post: &Post, action: Action) -> bool {
        match self {
            VisibilityClause::Level { level } => post.level_tag(action) == level.as_str(),
            VisibilityClause::TeamOf { team } => {
                post.level_tag(action) == VisibilityLevel::Team.as_str()
                    && post.author_team == *team
            }
            VisibilityClause::AuthoredBy { author } => {
                post.level_tag(action) == VisibilityLevel::Author.as_str()
                    && post.author == *author
            }
        }
    }
}

/// How the clauses combine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "rule")]
pub enum PredicateRule {
    /// Every post matches (admin)
    All,
    /// A post matches if any clause holds
    AnyOf { clauses: Vec<VisibilityClause> },
}

/// The filter handed to the storage layer when listing posts
///
/// Built per subject and per action; one predicate never combines both
/// actions. For every post, [`matches`](Self::matches) equals
/// [`PermissionEvaluator::evaluate`](crate::PermissionEvaluator::evaluate)
/// for the same subject and action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPredicate {
    action: Action,
    rule: PredicateRule,
}

impl PostPredicate {
    /// Derive the predicate describing all posts the subject may act on
    pub fn for_subject(subject: &Subject, action: Action) -> Self {
        let rule = match subject {
            Subject::Authenticated { admin: true, .. } => PredicateRule::All,
            Subject::Authenticated {
                id,
                team,
                admin: false,
            } => PredicateRule::AnyOf {
                clauses: vec![
                    VisibilityClause::Level {
                        level: VisibilityLevel::Public,
                    },
                    VisibilityClause::Level {
                        level: VisibilityLevel::Authenticated,
                    },
                    VisibilityClause::TeamOf { team: team.clone() },
                    VisibilityClause::AuthoredBy { author: *id },
                ],
            },
            // Anonymous subjects collapse to the public arm only.
            Subject::Anonymous => PredicateRule::AnyOf {
                clauses: vec![VisibilityClause::Level {
                    level: VisibilityLevel::Public,
                }],
            },
        };

        Self { action, rule }
    }

    /// The action this predicate constrains
    pub fn action(&self) -> Action {
        self.action
    }

    /// The rule, for storage layers translating the predicate into a query
    pub fn rule(&self) -> &PredicateRule {
        &self.rule
    }

    /// Apply the predicate to a single post in memory
    pub fn matches(&self, post: &Post) -> bool {
        match &self.rule {
            PredicateRule::All => true,
            PredicateRule::AnyOf { clauses } => {
                clauses.iter().any(|clause| clause.matches(post, self.action))
            }
        }
    }
}
