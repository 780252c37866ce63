//! Meal product
//!
//! The four-slot aggregate assembled by the builder layer. All four slots
//! are required; a builder refuses to hand over a meal with any slot unset.

use crate::product::Product;
use serde::{Deserialize, Serialize};

/// A finished four-course meal
///
/// Immutable after construction: slots are assigned through a builder and
/// read back through the accessors, in declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    starter: String,
    main_course: String,
    dessert: String,
    drink: String,
}

impl Meal {
    /// Create a meal from its four slot values
    #[inline]
    #[must_use]
    pub fn new(
        starter: impl Into<String>,
        main_course: impl Into<String>,
        dessert: impl Into<String>,
        drink: impl Into<String>,
    ) -> Self {
        Self {
            starter: starter.into(),
            main_course: main_course.into(),
            dessert: dessert.into(),
            drink: drink.into(),
        }
    }

    /// Starter slot value
    #[inline]
    #[must_use]
    pub fn starter(&self) -> &str {
        &self.starter
    }

    /// Main course slot value
    #[inline]
    #[must_use]
    pub fn main_course(&self) -> &str {
        &self.main_course
    }

    /// Dessert slot value
    #[inline]
    #[must_use]
    pub fn dessert(&self) -> &str {
        &self.dessert
    }

    /// Drink slot value
    #[inline]
    #[must_use]
    pub fn drink(&self) -> &str {
        &self.drink
    }
}

impl Product for Meal {
    const KIND: &'static str = "meal";

    fn approximate_size(&self) -> usize {
        self.starter.len() + self.main_course.len() + self.dessert.len() + self.drink.len()
    }
}
