//! Meal builder
//!
//! One builder type covers every concrete variant: variants are palettes
//! (data), not subclasses. A palette holds the value the builder assigns
//! when a step defers its value.

use crate::builder::{BuildError, Builder};
use artifice_product::Meal;
use artifice_registry::{BuildStep, Slot};

/// Default slot values for a meal builder variant
#[derive(Debug, Clone, Default)]
pub struct Palette {
    entries: Vec<(Slot, String)>,
}

impl Palette {
    /// Create an empty palette
    ///
    /// A builder with an empty palette only accepts steps that carry
    /// explicit values.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for a slot
    #[must_use]
    pub fn with(mut self, slot: Slot, value: impl Into<String>) -> Self {
        self.entries.retain(|(s, _)| *s != slot);
        self.entries.push((slot, value.into()));
        self
    }

    /// Value for a slot, if the palette has one
    #[must_use]
    pub fn value_for(&self, slot: Slot) -> Option<&str> {
        self.entries
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, v)| v.as_str())
    }
}

/// Builder accumulating the four meal slots
#[derive(Debug, Clone, Default)]
pub struct MealBuilder {
    palette: Palette,
    starter: Option<String>,
    main_course: Option<String>,
    dessert: Option<String>,
    drink: Option<String>,
}

impl MealBuilder {
    /// Builder with no palette; every step must carry an explicit value
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with a custom palette
    #[inline]
    #[must_use]
    pub fn with_palette(palette: Palette) -> Self {
        Self {
            palette,
            ..Self::default()
        }
    }

    /// Vegan variant
    #[must_use]
    pub fn vegan() -> Self {
        Self::with_palette(
            Palette::new()
                .with(Slot::Starter, "Garden Salad")
                .with(Slot::MainCourse, "Tofu Stir Fry")
                .with(Slot::Dessert, "Fruit Sorbet")
                .with(Slot::Drink, "Green Smoothie"),
        )
    }

    /// Hearty variant
    #[must_use]
    pub fn hearty() -> Self {
        Self::with_palette(
            Palette::new()
                .with(Slot::Starter, "Onion Soup")
                .with(Slot::MainCourse, "Beef Stew")
                .with(Slot::Dessert, "Chocolate Cake")
                .with(Slot::Drink, "Stout"),
        )
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<String> {
        match slot {
            Slot::Starter => &mut self.starter,
            Slot::MainCourse => &mut self.main_course,
            Slot::Dessert => &mut self.dessert,
            Slot::Drink => &mut self.drink,
        }
    }

    fn slot_value(&self, slot: Slot) -> Option<&str> {
        match slot {
            Slot::Starter => self.starter.as_deref(),
            Slot::MainCourse => self.main_course.as_deref(),
            Slot::Dessert => self.dessert.as_deref(),
            Slot::Drink => self.drink.as_deref(),
        }
    }

    /// Slots still unset, in service order
    #[must_use]
    pub fn missing_slots(&self) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|slot| self.slot_value(*slot).is_none())
            .collect()
    }
}

impl Builder for MealBuilder {
    type Output = Meal;

    fn apply(&mut self, step: &BuildStep) -> Result<(), BuildError> {
        let value = match &step.value {
            Some(explicit) => explicit.clone(),
            None => self
                .palette
                .value_for(step.slot)
                .ok_or(BuildError::UnsupportedStep(step.slot))?
                .to_string(),
        };
        tracing::debug!("Applying step: {} = {}", step.slot, value);
        *self.slot_mut(step.slot) = Some(value);
        Ok(())
    }

    fn build(&mut self) -> Result<Meal, BuildError> {
        let missing = self.missing_slots();
        if !missing.is_empty() {
            return Err(BuildError::IncompleteProduct { missing });
        }
        // Snapshot, not drain: repeated builds yield independent products.
        Ok(Meal::new(
            self.starter.clone().unwrap_or_default(),
            self.main_course.clone().unwrap_or_default(),
            self.dessert.clone().unwrap_or_default(),
            self.drink.clone().unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_applies_explicit_values() {
        let mut builder = MealBuilder::new();
        builder
            .apply(&BuildStep::with_value(Slot::Starter, "Salad"))
            .unwrap();
        builder
            .apply(&BuildStep::with_value(Slot::MainCourse, "Stir Fry"))
            .unwrap();
        builder
            .apply(&BuildStep::with_value(Slot::Dessert, "Pudding"))
            .unwrap();
        builder
            .apply(&BuildStep::with_value(Slot::Drink, "Shake"))
            .unwrap();

        let meal = builder.build().unwrap();
        assert_eq!(meal.starter(), "Salad");
        assert_eq!(meal.main_course(), "Stir Fry");
        assert_eq!(meal.dessert(), "Pudding");
        assert_eq!(meal.drink(), "Shake");
    }

    #[test]
    fn builder_palette_fills_deferred_steps() {
        let mut builder = MealBuilder::vegan();
        for slot in Slot::ALL {
            builder.apply(&BuildStep::slot(slot)).unwrap();
        }

        let meal = builder.build().unwrap();
        assert_eq!(meal.starter(), "Garden Salad");
        assert_eq!(meal.main_course(), "Tofu Stir Fry");
    }

    #[test]
    fn builder_explicit_value_wins_over_palette() {
        let mut builder = MealBuilder::vegan();
        builder
            .apply(&BuildStep::with_value(Slot::Starter, "Bruschetta"))
            .unwrap();

        builder.apply(&BuildStep::slot(Slot::MainCourse)).unwrap();
        builder.apply(&BuildStep::slot(Slot::Dessert)).unwrap();
        builder.apply(&BuildStep::slot(Slot::Drink)).unwrap();

        let meal = builder.build().unwrap();
        assert_eq!(meal.starter(), "Bruschetta");
    }

    #[test]
    fn builder_deferred_step_without_palette_fails() {
        let mut builder = MealBuilder::new();
        let err = builder.apply(&BuildStep::slot(Slot::Dessert)).unwrap_err();
        assert_eq!(err, BuildError::UnsupportedStep(Slot::Dessert));
    }

    #[test]
    fn builder_incomplete_build_fails() {
        let mut builder = MealBuilder::new();
        builder
            .apply(&BuildStep::with_value(Slot::Starter, "Salad"))
            .unwrap();

        let err = builder.build().unwrap_err();
        assert_eq!(
            err,
            BuildError::IncompleteProduct {
                missing: vec![Slot::MainCourse, Slot::Dessert, Slot::Drink],
            }
        );
    }

    #[test]
    fn builder_build_twice_yields_independent_products() {
        let mut builder = MealBuilder::vegan();
        for slot in Slot::ALL {
            builder.apply(&BuildStep::slot(slot)).unwrap();
        }

        let first = builder.build().unwrap();
        let second = builder.build().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn palette_last_value_wins() {
        let palette = Palette::new()
            .with(Slot::Drink, "Water")
            .with(Slot::Drink, "Juice");
        assert_eq!(palette.value_for(Slot::Drink), Some("Juice"));
    }
}
