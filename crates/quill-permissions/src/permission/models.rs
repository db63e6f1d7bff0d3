//! Visibility level and action models

use serde::{Deserialize, Serialize};

/// Visibility level governing who may perform an action on a post
///
/// Each level carries its own rule; no total order is assumed between
/// levels. Read and edit visibility are configured independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityLevel {
    /// Anyone, authenticated or not
    Public,
    /// Any authenticated subject
    Authenticated,
    /// Authenticated subjects on the author's team
    Team,
    /// The author only
    Author,
}

impl VisibilityLevel {
    /// All levels, in the order they are presented to configuration
    pub const ALL: [VisibilityLevel; 4] = [
        VisibilityLevel::Public,
        VisibilityLevel::Authenticated,
        VisibilityLevel::Team,
        VisibilityLevel::Author,
    ];

    /// Stable string tag used wherever levels are persisted or transmitted
    pub fn as_str(&self) -> &'static str {
        match self {
            VisibilityLevel::Public => "public",
            VisibilityLevel::Authenticated => "authenticated",
            VisibilityLevel::Team => "team",
            VisibilityLevel::Author => "author",
        }
    }

    /// Parse a stored tag back into a level
    ///
    /// Returns `None` for tags outside the closed set. Callers deciding
    /// access must treat `None` as deny; see
    /// [`PermissionEvaluator`](crate::PermissionEvaluator).
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "public" => Some(VisibilityLevel::Public),
            "authenticated" => Some(VisibilityLevel::Authenticated),
            "team" => Some(VisibilityLevel::Team),
            "author" => Some(VisibilityLevel::Author),
            _ => None,
        }
    }
}

impl std::fmt::Display for VisibilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Action a subject is attempting on a post
///
/// Selects which visibility level of the post is consulted: `Read` uses
/// the read level, `Edit` the edit level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// View the post (or list it)
    Read,
    /// Modify or delete the post
    Edit,
}

impl Action {
    /// String tag for logging and audit entries
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Edit => "edit",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
