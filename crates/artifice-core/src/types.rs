//! Core types for the Artifice facade

use serde::{Deserialize, Serialize};

/// Workshop configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ArtificeConfig {
    /// Register the built-in recipes at startup
    pub default_recipes: bool,
    /// Register the built-in factory tags at startup
    pub default_tags: bool,
}

impl ArtificeConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Without the built-in recipes
    #[inline]
    #[must_use]
    pub fn without_default_recipes(mut self) -> Self {
        self.default_recipes = false;
        self
    }

    /// Without the built-in factory tags
    #[inline]
    #[must_use]
    pub fn without_default_tags(mut self) -> Self {
        self.default_tags = false;
        self
    }
}

impl Default for ArtificeConfig {
    fn default() -> Self {
        Self {
            default_recipes: true,
            default_tags: true,
        }
    }
}
