//! Product tags
//!
//! The discriminant a factory dispatches on. Tags are opaque strings;
//! comparison is exact, no normalization.

use serde::{Deserialize, Serialize};

/// Dispatch discriminant for factory lookups
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductTag(String);

impl ProductTag {
    /// Create a tag
    #[inline]
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Tag as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for ProductTag {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}
