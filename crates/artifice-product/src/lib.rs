//! Artifice Product System
//!
//! Defines the [`Product`] contract shared by every construction discipline
//! in the workspace, plus the concrete teaching products:
//!
//! - [`Meal`]: four-slot aggregate assembled by a builder
//! - [`Burger`]: tag-carrying product dispensed by a factory
//! - [`Document`]: nested-container aggregate duplicated by a prototype
//!
//! Products are immutable after construction: state is assigned through a
//! builder, a factory constructor, or explicit mutators on the one product
//! type that supports revision ([`Document`]), and read back through
//! accessors.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod burger;
mod document;
mod meal;
mod product;

pub use burger::{Burger, Patty};
pub use document::{Document, Formatting};
pub use meal::Meal;
pub use product::Product;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
