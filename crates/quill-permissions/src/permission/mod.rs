//! Permission evaluation module

pub mod config;
pub mod evaluator;
pub mod filter;
pub mod manager;
pub mod models;

pub use config::VisibilityDefaults;
pub use evaluator::PermissionEvaluator;
pub use filter::{PostPredicate, PredicateRule, VisibilityClause};
pub use manager::AccessManager;
pub use models::{Action, VisibilityLevel};
