//! Recipe registry
//!
//! Maps recipe names to [`BuildSpec`]s. One entry per name; misses and
//! duplicates are errors.

use crate::error::RegistryError;
use crate::recipe::BuildSpec;
use indexmap::IndexMap;
use parking_lot::RwLock;

/// Registry of named build specs
///
/// Insertion order is preserved so [`names`](RecipeRegistry::names) lists
/// recipes deterministically.
#[derive(Debug, Default)]
pub struct RecipeRegistry {
    entries: RwLock<IndexMap<String, BuildSpec>>,
}

impl RecipeRegistry {
    /// Create an empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in recipes
    #[must_use]
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        // Built-ins cannot collide in a fresh registry.
        let _ = registry.register("four_course", BuildSpec::four_course());
        registry
    }

    /// Register a recipe under a name
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateEntry`] if the name is taken.
    pub fn register(&self, name: &str, spec: BuildSpec) -> Result<(), RegistryError> {
        let mut entries = self.entries.write();
        if entries.contains_key(name) {
            return Err(RegistryError::DuplicateEntry(name.to_string()));
        }
        tracing::debug!("Registered recipe: {} ({} steps)", name, spec.len());
        entries.insert(name.to_string(), spec);
        Ok(())
    }

    /// Look up a recipe by name
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownRecipe`] on a miss.
    pub fn get(&self, name: &str) -> Result<BuildSpec, RegistryError> {
        self.entries
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownRecipe(name.to_string()))
    }

    /// Remove a recipe, returning whether it existed
    pub fn remove(&self, name: &str) -> bool {
        self.entries.write().shift_remove(name).is_some()
    }

    /// Check if a recipe exists
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(name)
    }

    /// Registered recipe names in insertion order
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    /// Number of registered recipes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
