//! Error types for registries

use artifice_prototype::CloneError;

/// Registry errors
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No recipe registered under the name
    #[error("unknown recipe: {0}")]
    UnknownRecipe(String),

    /// No template registered under the name
    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    /// Name already has an entry
    #[error("duplicate entry: {0}")]
    DuplicateEntry(String),

    /// Template exists but holds a different product kind
    #[error("template {name} holds {actual}, not {requested}")]
    WrongTemplateKind {
        /// Template name
        name: String,
        /// Kind stored in the registry
        actual: &'static str,
        /// Kind the caller asked for
        requested: &'static str,
    },

    /// Template failed validation during instantiation
    #[error("template clone failed: {0}")]
    CloneFailed(#[from] CloneError),
}
