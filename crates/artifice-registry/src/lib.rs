//! Artifice Registry System
//!
//! Named construction recipes and prototype templates.
//!
//! # Core Concepts
//!
//! - [`BuildSpec`]: an ordered sequence of build steps a director plays
//!   against a builder
//! - [`RecipeRegistry`]: name → [`BuildSpec`] table
//! - [`TemplateRegistry`]: name → boxed prototype table; instantiation
//!   deep-clones the stored template
//!
//! Both registries enforce one entry per name: duplicate registration and
//! lookup misses are errors, never silent defaults or overwrites.
//!
//! # Example
//!
//! ```rust
//! use artifice_registry::{BuildSpec, RecipeRegistry, Slot};
//!
//! let registry = RecipeRegistry::with_defaults();
//! let spec = registry.get("four_course").unwrap();
//! assert_eq!(spec.steps().len(), 4);
//!
//! let custom = BuildSpec::new().then(Slot::Starter).then(Slot::Drink);
//! registry.register("light", custom).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod recipe;
mod recipes;
mod templates;

pub use error::RegistryError;
pub use recipe::{BuildSpec, BuildStep, Slot};
pub use recipes::RecipeRegistry;
pub use templates::TemplateRegistry;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
