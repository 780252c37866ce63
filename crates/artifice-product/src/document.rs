//! Document product
//!
//! The prototype-duplicated product. A document owns mutable nested
//! containers (images, annotations) so duplication must reallocate them;
//! scalar fields are plain values and may be copied freely.

use crate::product::Product;
use serde::{Deserialize, Serialize};

/// Formatting presets for documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Formatting {
    /// Single-column plain layout
    #[default]
    Plain,
    /// Two-column report layout
    Report,
    /// Slide-oriented layout
    Slides,
}

/// A document with nested mutable containers
///
/// Unlike [`Meal`](crate::Meal) and [`Burger`](crate::Burger), a document
/// supports revision after construction: images and annotations may be
/// appended through explicit mutators. Duplication happens through the
/// prototype layer, which refuses to copy a document without a title.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    title: String,
    content: String,
    images: Vec<String>,
    annotations: Vec<String>,
    formatting: Formatting,
}

impl Document {
    /// Create a document with a title and body content
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            images: Vec::new(),
            annotations: Vec::new(),
            formatting: Formatting::default(),
        }
    }

    /// With initial images
    #[inline]
    #[must_use]
    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    /// With initial annotations
    #[inline]
    #[must_use]
    pub fn with_annotations(mut self, annotations: Vec<String>) -> Self {
        self.annotations = annotations;
        self
    }

    /// With a formatting preset
    #[inline]
    #[must_use]
    pub fn with_formatting(mut self, formatting: Formatting) -> Self {
        self.formatting = formatting;
        self
    }

    /// Append an image reference
    pub fn push_image(&mut self, image: impl Into<String>) {
        self.images.push(image.into());
    }

    /// Append an annotation
    pub fn annotate(&mut self, note: impl Into<String>) {
        self.annotations.push(note.into());
    }

    /// Document title
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body content
    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Image references in insertion order
    #[inline]
    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Annotations in insertion order
    #[inline]
    #[must_use]
    pub fn annotations(&self) -> &[String] {
        &self.annotations
    }

    /// Formatting preset
    #[inline]
    #[must_use]
    pub fn formatting(&self) -> Formatting {
        self.formatting
    }
}

impl Product for Document {
    const KIND: &'static str = "document";

    fn approximate_size(&self) -> usize {
        self.title.len()
            + self.content.len()
            + self.images.iter().map(String::len).sum::<usize>()
            + self.annotations.iter().map(String::len).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn document_accessors() {
        let doc = Document::new("Quarterly Report", "numbers go here")
            .with_images(vec!["chart.png".to_string()])
            .with_formatting(Formatting::Report);

        assert_eq!(doc.title(), "Quarterly Report");
        assert_eq!(doc.content(), "numbers go here");
        assert_eq!(doc.images(), ["chart.png".to_string()]);
        assert_eq!(doc.formatting(), Formatting::Report);
    }

    #[test]
    fn document_mutators_append_in_order() {
        let mut doc = Document::new("Notes", "body");
        doc.push_image("a.png");
        doc.push_image("b.png");
        doc.annotate("first pass");

        assert_eq!(doc.images(), ["a.png".to_string(), "b.png".to_string()]);
        assert_eq!(doc.annotations(), ["first pass".to_string()]);
    }

    #[test]
    fn document_default_is_untitled() {
        let doc = Document::default();
        assert!(doc.title().is_empty());
    }

    #[test]
    fn document_kind() {
        assert_eq!(Document::new("t", "c").kind(), "document");
    }
}
