//! Template registry
//!
//! Stores prototype templates behind type erasure and instantiates them by
//! deep-cloning. The stored template is never handed out directly.

use crate::error::RegistryError;
use artifice_product::Product;
use artifice_prototype::{ErasedPrototype, Prototype};
use indexmap::IndexMap;
use parking_lot::RwLock;

/// Registry of named prototype templates
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    entries: RwLock<IndexMap<String, Box<dyn ErasedPrototype>>>,
}

impl TemplateRegistry {
    /// Create an empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template under a name
    ///
    /// The template is validated on registration so instantiation can only
    /// fail if the registry itself is misused.
    ///
    /// # Errors
    /// - [`RegistryError::DuplicateEntry`] if the name is taken
    /// - [`RegistryError::CloneFailed`] if the template is malformed
    pub fn register<T>(&self, name: &str, template: T) -> Result<(), RegistryError>
    where
        T: Prototype + Product,
    {
        template.validate()?;
        let mut entries = self.entries.write();
        if entries.contains_key(name) {
            return Err(RegistryError::DuplicateEntry(name.to_string()));
        }
        tracing::debug!("Registered template: {} ({})", name, template.product_kind());
        entries.insert(name.to_string(), Box::new(template));
        Ok(())
    }

    /// Instantiate a template as a boxed clone
    ///
    /// # Errors
    /// - [`RegistryError::UnknownTemplate`] on a miss
    /// - [`RegistryError::CloneFailed`] if the stored template fails validation
    pub fn instantiate(&self, name: &str) -> Result<Box<dyn ErasedPrototype>, RegistryError> {
        let entries = self.entries.read();
        let template = entries
            .get(name)
            .ok_or_else(|| RegistryError::UnknownTemplate(name.to_string()))?;
        Ok(template.clone_boxed()?)
    }

    /// Instantiate a template as its concrete type
    ///
    /// # Errors
    /// - [`RegistryError::UnknownTemplate`] on a miss
    /// - [`RegistryError::WrongTemplateKind`] if the stored template is a
    ///   different product kind
    /// - [`RegistryError::CloneFailed`] if the stored template fails validation
    pub fn instantiate_as<T>(&self, name: &str) -> Result<T, RegistryError>
    where
        T: Prototype + Product,
    {
        let entries = self.entries.read();
        let template = entries
            .get(name)
            .ok_or_else(|| RegistryError::UnknownTemplate(name.to_string()))?;

        let concrete =
            template
                .as_any()
                .downcast_ref::<T>()
                .ok_or_else(|| RegistryError::WrongTemplateKind {
                    name: name.to_string(),
                    actual: template.product_kind(),
                    requested: T::KIND,
                })?;

        Ok(concrete.deep_clone()?)
    }

    /// Check if a template exists
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(name)
    }

    /// Remove a template, returning whether it existed
    pub fn remove(&self, name: &str) -> bool {
        self.entries.write().shift_remove(name).is_some()
    }

    /// Registered template names in insertion order
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    /// Number of registered templates
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
