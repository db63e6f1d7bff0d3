//! Audit log data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::permission::models::Action;

/// Outcome recorded in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditDecision {
    /// Access was allowed
    Allowed,
    /// Access was denied
    Denied,
}

impl std::fmt::Display for AuditDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditDecision::Allowed => write!(f, "allowed"),
            AuditDecision::Denied => write!(f, "denied"),
        }
    }
}

/// Entry in the access audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessAuditEntry {
    /// Unique identifier for this log entry
    pub id: String,
    /// Timestamp of the decision
    pub timestamp: DateTime<Utc>,
    /// Short tag identifying the subject ("anonymous", "user:42", "admin:7")
    pub subject: String,
    /// The post the decision concerned
    pub post_id: u64,
    /// The attempted action
    pub action: Action,
    /// The decision taken
    pub decision: AuditDecision,
    /// Optional additional context
    pub context: Option<String>,
}

impl AccessAuditEntry {
    /// Create a new audit entry
    pub fn new(subject: String, post_id: u64, action: Action, decision: AuditDecision) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            subject,
            post_id,
            action,
            decision,
            context: None,
        }
    }

    /// Add context to the entry
    pub fn with_context(mut self, context: String) -> Self {
        self.context = Some(context);
        self
    }
}
