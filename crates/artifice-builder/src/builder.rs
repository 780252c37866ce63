//! Builder trait and build errors

use artifice_product::Product;
use artifice_registry::{BuildStep, Slot};

/// Errors during step-sequenced assembly
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// Required slots were still unset at `build()`
    #[error("incomplete product: missing {missing:?}")]
    IncompleteProduct {
        /// Slots with no assigned value, in service order
        missing: Vec<Slot>,
    },

    /// Step named a slot the builder has no value for
    #[error("unsupported step: no value for {0}")]
    UnsupportedStep(Slot),
}

/// Trait for objects accumulating product state via discrete step calls
///
/// # Contract
/// - `apply` assigns one slot; an explicit step value wins over the
///   builder's own value, and a step the builder cannot satisfy is an
///   error, not a no-op
/// - `build` hands over the finished product, failing with
///   [`BuildError::IncompleteProduct`] while required slots are unset
/// - Repeated `build` calls are explicit policy: each call snapshots the
///   accumulated state into a fresh, independently owned product
pub trait Builder {
    /// The product this builder assembles
    type Output: Product;

    /// Apply one build step
    ///
    /// # Errors
    /// Returns [`BuildError::UnsupportedStep`] if the step defers its value
    /// and the builder has none for that slot.
    fn apply(&mut self, step: &BuildStep) -> Result<(), BuildError>;

    /// Hand over the finished product
    ///
    /// # Errors
    /// Returns [`BuildError::IncompleteProduct`] if required slots are unset.
    fn build(&mut self) -> Result<Self::Output, BuildError>;
}
