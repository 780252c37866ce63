//! Product factory
//!
//! A concurrent dispatch table mapping tags to constructor closures. The
//! table is populated at startup; `create` is a lookup plus a call, never a
//! branch over tags.

use crate::tag::ProductTag;
use artifice_product::{Burger, Product};
use dashmap::DashMap;

/// Constructor closure stored in the dispatch table
pub type Constructor<P> = Box<dyn Fn() -> P + Send + Sync>;

/// Errors during factory dispatch
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactoryError {
    /// No constructor registered for the tag
    #[error("unknown product type: {0}")]
    UnknownType(ProductTag),

    /// Tag already has a constructor
    #[error("duplicate tag: {0}")]
    DuplicateTag(ProductTag),
}

/// Dispatch table from tags to product constructors
pub struct ProductFactory<P: Product> {
    table: DashMap<ProductTag, Constructor<P>>,
}

impl<P: Product> ProductFactory<P> {
    /// Create an empty factory
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: DashMap::new(),
        }
    }

    /// Register a constructor for a tag
    ///
    /// # Errors
    /// Returns [`FactoryError::DuplicateTag`] if the tag is taken.
    pub fn register<F>(&self, tag: impl Into<ProductTag>, ctor: F) -> Result<(), FactoryError>
    where
        F: Fn() -> P + Send + Sync + 'static,
    {
        let tag = tag.into();
        if self.table.contains_key(&tag) {
            return Err(FactoryError::DuplicateTag(tag));
        }
        tracing::debug!("Registered constructor: {} ({})", tag, P::KIND);
        self.table.insert(tag, Box::new(ctor));
        Ok(())
    }

    /// Create a new product instance for a tag
    ///
    /// # Errors
    /// Returns [`FactoryError::UnknownType`] for an unrecognized tag; a
    /// placeholder product is never returned.
    pub fn create(&self, tag: &ProductTag) -> Result<P, FactoryError> {
        let ctor = self
            .table
            .get(tag)
            .ok_or_else(|| FactoryError::UnknownType(tag.clone()))?;
        let product = (ctor.value())();
        tracing::debug!("Created product: {} ({})", tag, product.kind());
        Ok(product)
    }

    /// Check if a tag is registered
    #[inline]
    #[must_use]
    pub fn contains(&self, tag: &ProductTag) -> bool {
        self.table.contains_key(tag)
    }

    /// Remove a tag, returning whether it existed
    pub fn remove(&self, tag: &ProductTag) -> bool {
        self.table.remove(tag).is_some()
    }

    /// Registered tags, sorted for determinism
    #[must_use]
    pub fn tags(&self) -> Vec<ProductTag> {
        let mut tags: Vec<ProductTag> = self.table.iter().map(|e| e.key().clone()).collect();
        tags.sort();
        tags
    }

    /// Number of registered tags
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if the factory is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl<P: Product> Default for ProductFactory<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Product> std::fmt::Debug for ProductFactory<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductFactory")
            .field("kind", &P::KIND)
            .field("tags", &self.tags())
            .finish()
    }
}

/// Burger factory with the built-in variants registered
#[must_use]
pub fn burger_factory() -> ProductFactory<Burger> {
    let factory = ProductFactory::new();
    // Built-ins cannot collide in a fresh factory.
    let _ = factory.register("VEGAN", Burger::vegan);
    let _ = factory.register("CLASSIC", Burger::classic);
    let _ = factory.register("SPICY", Burger::spicy);
    factory
}
