//! Audit logging module

pub mod logger;
pub mod models;

pub use logger::AuditLogger;
pub use models::{AccessAuditEntry, AuditDecision};
