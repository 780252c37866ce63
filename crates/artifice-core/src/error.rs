//! Error types for the Artifice facade
//!
//! Wraps the per-layer error taxonomies:
//! - Builder assembly failures
//! - Factory dispatch failures
//! - Registry misses and duplicates
//! - Prototype clone failures
//! - Context lifecycle misuse

use artifice_builder::BuildError;
use artifice_context::ContextError;
use artifice_factory::FactoryError;
use artifice_prototype::CloneError;
use artifice_registry::RegistryError;

/// Main Artifice error type
#[derive(Debug, thiserror::Error)]
pub enum ArtificeError {
    /// Step-sequenced assembly failed
    #[error("build failed: {0}")]
    BuildFailed(#[from] BuildError),

    /// Factory dispatch failed
    #[error("dispatch failed: {0}")]
    DispatchFailed(#[from] FactoryError),

    /// Registry lookup or registration failed
    #[error("registry error: {0}")]
    RegistryError(#[from] RegistryError),

    /// Prototype duplication failed
    #[error("clone failed: {0}")]
    CloneFailed(#[from] CloneError),

    /// Shared context lifecycle misuse
    #[error("context error: {0}")]
    ContextError(#[from] ContextError),
}

impl ArtificeError {
    /// Check if the error is a lookup miss rather than invalid input
    #[must_use]
    pub fn is_miss(&self) -> bool {
        matches!(
            self,
            Self::DispatchFailed(FactoryError::UnknownType(_))
                | Self::RegistryError(
                    RegistryError::UnknownRecipe(_) | RegistryError::UnknownTemplate(_)
                )
        )
    }
}
