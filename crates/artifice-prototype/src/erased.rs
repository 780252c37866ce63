//! Object-safe prototype erasure
//!
//! Registries store templates of mixed concrete types behind
//! `Box<dyn ErasedPrototype>`; callers recover the concrete type via
//! [`ErasedPrototype::as_any`] downcasting.

use crate::prototype::{CloneError, Prototype};
use artifice_product::Product;
use std::any::Any;

/// Object-safe form of [`Prototype`]
///
/// Implemented automatically for every type that is both a [`Product`] and
/// a [`Prototype`].
pub trait ErasedPrototype: Send + Sync + std::fmt::Debug {
    /// Produce a boxed deep copy
    ///
    /// # Errors
    /// Returns [`CloneError::InvalidSource`] if the template fails validation.
    fn clone_boxed(&self) -> Result<Box<dyn ErasedPrototype>, CloneError>;

    /// Kind identifier of the underlying product
    fn product_kind(&self) -> &'static str;

    /// Downcast hook for recovering the concrete type
    fn as_any(&self) -> &dyn Any;
}

impl<T> ErasedPrototype for T
where
    T: Prototype + Product,
{
    fn clone_boxed(&self) -> Result<Box<dyn ErasedPrototype>, CloneError> {
        let clone = self.deep_clone()?;
        Ok(Box::new(clone))
    }

    fn product_kind(&self) -> &'static str {
        T::KIND
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
