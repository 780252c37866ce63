//! Artifice Prototype System
//!
//! Deep-copy duplication for products that serve as templates.
//!
//! # Core Concepts
//!
//! - [`Prototype`]: trait for types that can validate themselves and
//!   produce an independently owned deep copy
//! - [`ErasedPrototype`]: object-safe form so templates of different
//!   concrete types can live in one registry
//! - [`CloneError`]: the single failure mode, a source too malformed to copy
//!
//! # Example
//!
//! ```rust
//! use artifice_product::Document;
//! use artifice_prototype::Prototype;
//!
//! let original = Document::new("Spec", "body").with_images(vec!["a.png".into()]);
//! let mut copy = original.deep_clone().unwrap();
//! copy.push_image("b.png");
//!
//! // The original's containers are untouched.
//! assert_eq!(original.images().len(), 1);
//! assert_eq!(copy.images().len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod erased;
mod prototype;

pub use erased::ErasedPrototype;
pub use prototype::{CloneError, Prototype};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
