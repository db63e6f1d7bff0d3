//! Subject model: the requesting actor for one evaluation

use serde::{Deserialize, Serialize};

/// The requesting actor's identity and authorization attributes
///
/// Constructed fresh per request from upstream authentication state and
/// immutable for the duration of one evaluation. An anonymous subject
/// carries no identity and is never an admin; the enum makes that state
/// unrepresentable rather than checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum Subject {
    /// Unauthenticated request
    Anonymous,
    /// Authenticated user
    Authenticated {
        /// User identity, opaque to the evaluator
        id: u64,
        /// Team the user belongs to
        team: String,
        /// Administrators bypass all visibility checks
        admin: bool,
    },
}

impl Subject {
    /// Create an anonymous subject
    pub fn anonymous() -> Self {
        Subject::Anonymous
    }

    /// Create an authenticated regular user
    pub fn user(id: u64, team: impl Into<String>) -> Self {
        Subject::Authenticated {
            id,
            team: team.into(),
            admin: false,
        }
    }

    /// Create an authenticated administrator
    pub fn admin(id: u64, team: impl Into<String>) -> Self {
        Subject::Authenticated {
            id,
            team: team.into(),
            admin: true,
        }
    }

    /// Whether the subject is authenticated
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Subject::Authenticated { .. })
    }

    /// Whether the subject is an administrator
    pub fn is_admin(&self) -> bool {
        matches!(self, Subject::Authenticated { admin: true, .. })
    }

    /// User identity, if authenticated
    pub fn id(&self) -> Option<u64> {
        match self {
            Subject::Anonymous => None,
            Subject::Authenticated { id, .. } => Some(*id),
        }
    }

    /// Team membership, if authenticated
    pub fn team(&self) -> Option<&str> {
        match self {
            Subject::Anonymous => None,
            Subject::Authenticated { team, .. } => Some(team),
        }
    }

    /// Short tag identifying the subject in logs and audit entries
    pub fn describe(&self) -> String {
        match self {
            Subject::Anonymous => "anonymous".to_string(),
            Subject::Authenticated { id, admin: true, .. } => format!("admin:{}", id),
            Subject::Authenticated { id, .. } => format!("user:{}", id),
        }
    }
}
