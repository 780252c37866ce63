//! Artifice Factory System
//!
//! Tag-to-constructor dispatch. A [`ProductFactory`] is a registration
//! table of constructor closures populated at startup; dispatch is a table
//! lookup, so adding a tag never edits existing dispatch logic.
//!
//! # Example
//!
//! ```rust
//! use artifice_factory::{burger_factory, FactoryError, ProductTag};
//!
//! let factory = burger_factory();
//!
//! let burger = factory.create(&ProductTag::new("VEGAN")).unwrap();
//! assert_eq!(burger.tag(), "VEGAN");
//!
//! let err = factory.create(&ProductTag::new("UNKNOWN")).unwrap_err();
//! assert!(matches!(err, FactoryError::UnknownType(_)));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod factory;
mod tag;

pub use factory::{burger_factory, Constructor, FactoryError, ProductFactory};
pub use tag::ProductTag;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
