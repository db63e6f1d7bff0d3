//! Audit logger implementation

use std::sync::{Arc, RwLock};

use super::models::{AccessAuditEntry, AuditDecision};
use crate::error::{Error, Result};
use crate::permission::models::Action;
use crate::subject::Subject;

/// Audit logger recording access decisions
///
/// Append-only and cheap to clone; clones share the same underlying log.
#[derive(Clone)]
pub struct AuditLogger {
    entries: Arc<RwLock<Vec<AccessAuditEntry>>>,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Record an allowed access
    pub fn log_allowed(&self, subject: &Subject, post_id: u64, action: Action) -> Result<()> {
        self.append(AccessAuditEntry::new(
            subject.describe(),
            post_id,
            action,
            AuditDecision::Allowed,
        ))
    }

    /// Record a denied access
    pub fn log_denied(&self, subject: &Subject, post_id: u64, action: Action) -> Result<()> {
        self.append(AccessAuditEntry::new(
            subject.describe(),
            post_id,
            action,
            AuditDecision::Denied,
        ))
    }

    /// Record a prepared entry
    pub fn append(&self, entry: AccessAuditEntry) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| Error::Internal(format!("Failed to acquire write lock: {}", e)))?;
        entries.push(entry);
        Ok(())
    }

    /// Get all entries
    pub fn entries(&self) -> Result<Vec<AccessAuditEntry>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| Error::Internal(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.clone())
    }

    /// Get the number of entries
    pub fn len(&self) -> Result<usize> {
        let entries = self
            .entries
            .read()
            .map_err(|e| Error::Internal(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.len())
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl Default for AuditLogger {
    fn default() -> Self {
        Self::new()
    }
}
