//! Prototype trait and clone errors

use artifice_product::Document;

/// Errors during prototype duplication
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CloneError {
    /// Source object is malformed and cannot be copied
    #[error("invalid clone source: {reason}")]
    InvalidSource {
        /// Why the source failed validation
        reason: String,
    },
}

impl CloneError {
    /// Create an invalid-source error
    #[inline]
    pub fn invalid_source(reason: impl Into<String>) -> Self {
        Self::InvalidSource {
            reason: reason.into(),
        }
    }
}

/// Trait for types that support deep-copy duplication
///
/// # Contract
/// - `deep_clone()` returns a new instance whose mutable nested containers
///   (`Vec`s, sets) are newly allocated; mutating the copy's containers
///   never affects the source, and vice versa
/// - Scalar and immutable fields may be shared or copied freely
/// - The only failure is a source that fails [`validate`](Prototype::validate),
///   e.g. a partially constructed object
pub trait Prototype: Sized {
    /// Check that this value is in a copyable state
    ///
    /// # Errors
    /// Returns [`CloneError::InvalidSource`] if the value is malformed.
    fn validate(&self) -> Result<(), CloneError>;

    /// Produce an independently owned deep copy
    ///
    /// # Errors
    /// Returns [`CloneError::InvalidSource`] if the source fails validation.
    fn deep_clone(&self) -> Result<Self, CloneError>;
}

impl Prototype for Document {
    fn validate(&self) -> Result<(), CloneError> {
        if self.title().is_empty() {
            return Err(CloneError::invalid_source("document has no title"));
        }
        Ok(())
    }

    fn deep_clone(&self) -> Result<Self, CloneError> {
        self.validate()?;
        tracing::debug!("Cloning document: {}", self.title());
        // Document owns its containers, so a structural clone reallocates
        // images and annotations.
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clone_is_independent() {
        let original = Document::new("Handbook", "welcome")
            .with_images(vec!["a.png".to_string()]);

        let clone = original.deep_clone().unwrap();
        assert_eq!(clone, original);

        let mut original = original;
        original.push_image("b.png");

        assert_eq!(clone.images(), ["a.png".to_string()]);
        assert_eq!(original.images().len(), 2);
    }

    #[test]
    fn clone_of_clone_equals_clone() {
        let original = Document::new("Handbook", "welcome")
            .with_annotations(vec!["draft".to_string()]);

        let first = original.deep_clone().unwrap();
        let second = first.deep_clone().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn mutating_clone_leaves_source_untouched() {
        let original = Document::new("Handbook", "welcome");
        let mut clone = original.deep_clone().unwrap();

        clone.annotate("reviewed");
        clone.push_image("figure.png");

        assert!(original.annotations().is_empty());
        assert!(original.images().is_empty());
    }

    #[test]
    fn untitled_document_rejected() {
        let malformed = Document::default();
        let err = malformed.deep_clone().unwrap_err();
        assert!(matches!(err, CloneError::InvalidSource { .. }));
    }

    #[test]
    fn clone_error_display() {
        let err = CloneError::invalid_source("no title");
        assert!(err.to_string().contains("invalid clone source"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn deep_clone_preserves_and_detaches(
            title in "[a-z]{1,12}",
            images in proptest::collection::vec("[a-z]{1,8}\\.png", 0..6),
            extra in "[a-z]{1,8}\\.png",
        ) {
            let original = Document::new(title, "body").with_images(images.clone());
            let clone = original.deep_clone().unwrap();

            prop_assert_eq!(clone.images(), images.as_slice());

            let mut original = original;
            original.push_image(extra);
            prop_assert_eq!(clone.images(), images.as_slice());
        }
    }
}
