//! Artifice Core - construction toolkit facade
//!
//! One consistent surface over the four construction disciplines:
//! - Step-sequenced building (builder + director + named recipes)
//! - Tag dispatch (factory registration table)
//! - Deep-copy duplication (prototype templates)
//! - Process-wide shared state (guarded singleton context)
//!
//! # Example
//!
//! ```rust
//! use artifice_core::{ArtificeConfig, Workshop};
//! use artifice_builder::MealBuilder;
//!
//! let workshop = Workshop::new(ArtificeConfig::new());
//!
//! let mut builder = MealBuilder::vegan();
//! let meal = workshop.build_recipe("four_course", &mut builder).unwrap();
//! assert_eq!(meal.drink(), "Green Smoothie");
//!
//! let burger = workshop.create("CLASSIC").unwrap();
//! assert_eq!(burger.tag(), "CLASSIC");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod error;
pub mod types;
pub mod workshop;

// Re-exports for convenience
pub use error::ArtificeError;
pub use types::ArtificeConfig;
pub use workshop::Workshop;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with Artifice
    pub use crate::{ArtificeConfig, ArtificeError, Workshop};
    pub use artifice_builder::{BuildError, Builder, Director, MealBuilder};
    pub use artifice_context::{Mode, SharedContext};
    pub use artifice_factory::{FactoryError, ProductFactory, ProductTag};
    pub use artifice_product::{Burger, Document, Meal, Product};
    pub use artifice_prototype::{CloneError, Prototype};
    pub use artifice_registry::{BuildSpec, BuildStep, RecipeRegistry, Slot, TemplateRegistry};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use artifice_test_utils::{init_test_logging, sample_document, scenario_meal_spec};
    use pretty_assertions::assert_eq;

    #[test]
    fn full_meal_scenario() {
        init_test_logging();
        let workshop = Workshop::default();
        workshop
            .register_recipe("scenario", scenario_meal_spec())
            .unwrap();

        let mut builder = MealBuilder::new();
        let meal = workshop.build_recipe("scenario", &mut builder).unwrap();

        assert_eq!(meal.starter(), "Salad");
        assert_eq!(meal.main_course(), "Stir Fry");
        assert_eq!(meal.dessert(), "Pudding");
        assert_eq!(meal.drink(), "Shake");
    }

    #[test]
    fn factory_scenario() {
        init_test_logging();
        let workshop = Workshop::default();

        let vegan = workshop.create("VEGAN").unwrap();
        assert_eq!(vegan.tag(), "VEGAN");

        let err = workshop.create("UNKNOWN").unwrap_err();
        assert!(matches!(
            err,
            ArtificeError::DispatchFailed(FactoryError::UnknownType(_))
        ));
    }

    #[test]
    fn prototype_scenario() {
        init_test_logging();
        let workshop = Workshop::default();
        workshop
            .register_template("report", sample_document())
            .unwrap();

        let clone: Document = workshop.instantiate("report").unwrap();
        assert_eq!(clone.images(), ["a.png".to_string()]);

        // Mutating one instance never leaks into the next.
        let mut mutated: Document = workshop.instantiate("report").unwrap();
        mutated.push_image("b.png");

        let fresh: Document = workshop.instantiate("report").unwrap();
        assert_eq!(fresh.images(), ["a.png".to_string()]);
    }

    #[test]
    fn clone_of_clone_has_no_shared_containers() {
        let original = sample_document();
        let first = original.deep_clone().unwrap();
        let mut second = first.deep_clone().unwrap();

        assert_eq!(first, second);

        second.push_image("extra.png");
        assert_eq!(first.images(), ["a.png".to_string()]);
        assert_eq!(original.images(), ["a.png".to_string()]);
    }

    #[test]
    fn shared_context_reachable_from_prelude() {
        let ctx = SharedContext::instance();
        assert!(std::ptr::eq(ctx, SharedContext::instance()));
    }
}
