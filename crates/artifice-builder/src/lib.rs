//! Artifice Builder System
//!
//! Step-sequenced product assembly.
//!
//! # Core Concepts
//!
//! - [`Builder`]: trait accumulating product state via discrete step calls
//! - [`Director`]: plays a [`BuildSpec`](artifice_registry::BuildSpec)
//!   against a builder, strictly in declared order
//! - [`MealBuilder`]: concrete builder; variants differ only in the values
//!   their palette assigns to deferred steps
//!
//! # Example
//!
//! ```rust
//! use artifice_builder::{Builder, Director, MealBuilder};
//! use artifice_registry::BuildSpec;
//!
//! let director = Director::new();
//! let mut builder = MealBuilder::vegan();
//!
//! director.construct(&mut builder, &BuildSpec::four_course()).unwrap();
//! let meal = builder.build().unwrap();
//! assert_eq!(meal.starter(), "Garden Salad");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod builder;
mod director;
mod meal_builder;

pub use builder::{BuildError, Builder};
pub use director::Director;
pub use meal_builder::{MealBuilder, Palette};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
