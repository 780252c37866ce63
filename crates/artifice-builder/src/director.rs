//! Director
//!
//! Plays a build spec against a builder. The director applies every step in
//! declared order and stops at the first failure; it never skips or
//! reorders steps.

use crate::builder::{BuildError, Builder};
use artifice_registry::BuildSpec;

/// Sequences builder steps in a fixed order
#[derive(Debug, Clone, Copy, Default)]
pub struct Director;

impl Director {
    /// Create a director
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Apply every step of `spec` to `builder`, in declared order
    ///
    /// State accumulates in the builder; call
    /// [`Builder::build`] afterwards to obtain the product.
    ///
    /// # Errors
    /// Propagates the first [`BuildError`] a step produces; earlier steps
    /// remain applied.
    pub fn construct<B: Builder>(&self, builder: &mut B, spec: &BuildSpec) -> Result<(), BuildError> {
        tracing::debug!("Constructing with {} steps", spec.len());
        for step in spec.steps() {
            builder.apply(step)?;
        }
        Ok(())
    }

    /// Convenience: construct and build in one call
    ///
    /// # Errors
    /// Propagates step failures and incomplete-product failures.
    pub fn make<B: Builder>(&self, builder: &mut B, spec: &BuildSpec) -> Result<B::Output, BuildError> {
        self.construct(builder, spec)?;
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meal_builder::MealBuilder;
    use artifice_registry::Slot;
    use pretty_assertions::assert_eq;

    #[test]
    fn director_plays_steps_in_order() {
        let spec = BuildSpec::new()
            .then_with(Slot::Starter, "Salad")
            .then_with(Slot::MainCourse, "Stir Fry")
            .then_with(Slot::Dessert, "Pudding")
            .then_with(Slot::Drink, "Shake");

        let director = Director::new();
        let mut builder = MealBuilder::new();
        director.construct(&mut builder, &spec).unwrap();

        let meal = builder.build().unwrap();
        assert_eq!(meal.starter(), "Salad");
        assert_eq!(meal.main_course(), "Stir Fry");
        assert_eq!(meal.dessert(), "Pudding");
        assert_eq!(meal.drink(), "Shake");
    }

    #[test]
    fn director_later_step_overwrites_earlier() {
        let spec = BuildSpec::new()
            .then_with(Slot::Drink, "Water")
            .then_with(Slot::Drink, "Juice");

        let director = Director::new();
        let mut builder = MealBuilder::vegan();
        director.construct(&mut builder, &spec).unwrap();

        builder.apply(&artifice_registry::BuildStep::slot(Slot::Starter)).unwrap();
        builder.apply(&artifice_registry::BuildStep::slot(Slot::MainCourse)).unwrap();
        builder.apply(&artifice_registry::BuildStep::slot(Slot::Dessert)).unwrap();

        let meal = builder.build().unwrap();
        assert_eq!(meal.drink(), "Juice");
    }

    #[test]
    fn director_stops_at_first_failure() {
        let spec = BuildSpec::new()
            .then_with(Slot::Starter, "Salad")
            .then(Slot::MainCourse) // no palette, no value
            .then_with(Slot::Dessert, "Pudding");

        let director = Director::new();
        let mut builder = MealBuilder::new();
        let err = director.construct(&mut builder, &spec).unwrap_err();

        assert_eq!(err, BuildError::UnsupportedStep(Slot::MainCourse));
        // The step before the failure stayed applied, the one after did not.
        assert!(!builder.missing_slots().contains(&Slot::Starter));
        assert!(builder.missing_slots().contains(&Slot::Dessert));
    }

    #[test]
    fn director_make_builds_product() {
        let director = Director::new();
        let mut builder = MealBuilder::hearty();
        let meal = director.make(&mut builder, &BuildSpec::four_course()).unwrap();
        assert_eq!(meal.main_course(), "Beef Stew");
    }

    #[test]
    fn director_empty_spec_leaves_builder_incomplete() {
        let director = Director::new();
        let mut builder = MealBuilder::new();
        director.construct(&mut builder, &BuildSpec::new()).unwrap();

        assert!(matches!(
            builder.build(),
            Err(BuildError::IncompleteProduct { .. })
        ));
    }
}
