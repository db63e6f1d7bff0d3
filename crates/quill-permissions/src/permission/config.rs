//! Visibility defaults configuration

use serde::{Deserialize, Serialize};

use crate::permission::models::VisibilityLevel;

/// Default visibility levels applied to newly created posts
///
/// Both levels default to public and are never absent; a post always has
/// exactly one read level and one edit level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityDefaults {
    /// Default read level for new posts
    pub read_level: VisibilityLevel,
    /// Default edit level for new posts
    pub edit_level: VisibilityLevel,
}

impl VisibilityDefaults {
    /// Defaults of public/public
    pub fn new() -> Self {
        Self {
            read_level: VisibilityLevel::Public,
            edit_level: VisibilityLevel::Public,
        }
    }

    /// Defaults with specific levels
    pub fn with_levels(read_level: VisibilityLevel, edit_level: VisibilityLevel) -> Self {
        Self {
            read_level,
            edit_level,
        }
    }
}

impl Default for VisibilityDefaults {
    fn default() -> Self {
        Self::new()
    }
}
