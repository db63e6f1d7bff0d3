//! Post resource model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::permission::models::{Action, VisibilityLevel};

/// Maximum post title length
pub const MAX_TITLE_LEN: usize = 100;
/// Maximum post content length
pub const MAX_CONTENT_LEN: usize = 1000;

/// A blog post with independent read and edit visibility
///
/// The visibility levels are stored as the raw string tags the storage
/// layer persists. Normal construction paths only ever write the four
/// valid tags; the raw representation exists so that a corrupted row can
/// still be loaded and evaluated, where it denies access instead of
/// failing (see [`PermissionEvaluator`](crate::PermissionEvaluator)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier
    pub id: u64,
    /// Post title
    pub title: String,
    /// Post body
    pub content: String,
    /// Owning author; ownership is permanent once created
    pub author: u64,
    /// Team of the owning author at the time the snapshot was loaded
    pub author_team: String,
    /// Stored read visibility tag
    pub read_level: String,
    /// Stored edit visibility tag
    pub edit_level: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with both levels defaulting to public
    pub fn new(
        id: u64,
        title: impl Into<String>,
        content: impl Into<String>,
        author: u64,
        author_team: impl Into<String>,
    ) -> Result<Self> {
        let title = title.into();
        let content = content.into();

        if title.is_empty() || title.chars().count() > MAX_TITLE_LEN {
            return Err(Error::Validation(format!(
                "title must be 1-{} characters",
                MAX_TITLE_LEN
            )));
        }
        if content.chars().count() > MAX_CONTENT_LEN {
            return Err(Error::Validation(format!(
                "content must be at most {} characters",
                MAX_CONTENT_LEN
            )));
        }

        Ok(Self {
            id,
            title,
            content,
            author,
            author_team: author_team.into(),
            read_level: VisibilityLevel::Public.as_str().to_string(),
            edit_level: VisibilityLevel::Public.as_str().to_string(),
            created_at: Utc::now(),
        })
    }

    /// Create a new post applying configured default levels
    pub fn new_with_defaults(
        id: u64,
        title: impl Into<String>,
        content: impl Into<String>,
        author: u64,
        author_team: impl Into<String>,
        defaults: &crate::permission::config::VisibilityDefaults,
    ) -> Result<Self> {
        Ok(Self::new(id, title, content, author, author_team)?
            .with_read_level(defaults.read_level)
            .with_edit_level(defaults.edit_level))
    }

    /// Set the read visibility level
    pub fn set_read_level(&mut self, level: VisibilityLevel) {
        self.read_level = level.as_str().to_string();
    }

    /// Set the edit visibility level
    pub fn set_edit_level(&mut self, level: VisibilityLevel) {
        self.edit_level = level.as_str().to_string();
    }

    /// Builder-style read level
    pub fn with_read_level(mut self, level: VisibilityLevel) -> Self {
        self.set_read_level(level);
        self
    }

    /// Builder-style edit level
    pub fn with_edit_level(mut self, level: VisibilityLevel) -> Self {
        self.set_edit_level(level);
        self
    }

    /// Replace both stored tags with arbitrary strings
    ///
    /// Exists for the storage boundary and for exercising the fail-closed
    /// rule against corrupted rows. Application code should use the typed
    /// setters.
    pub fn with_raw_levels(
        mut self,
        read_level: impl Into<String>,
        edit_level: impl Into<String>,
    ) -> Self {
        self.read_level = read_level.into();
        self.edit_level = edit_level.into();
        self
    }

    /// The stored tag the given action consults
    pub fn level_tag(&self, action: Action) -> &str {
        match action {
            Action::Read => &self.read_level,
            Action::Edit => &self.edit_level,
        }
    }

    /// Parsed visibility level for the given action, if the stored tag is valid
    pub fn level(&self, action: Action) -> Option<VisibilityLevel> {
        VisibilityLevel::parse(self.level_tag(action))
    }
}
