//! Burger product
//!
//! The factory-dispensed product. Each burger carries the tag it was
//! created under so callers can verify dispatch results.

use crate::product::Product;
use serde::{Deserialize, Serialize};

/// Patty variants for factory-made burgers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Patty {
    /// Plant-based patty
    Plant,
    /// Beef patty
    Beef,
    /// Chicken patty
    Chicken,
}

impl std::fmt::Display for Patty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plant => write!(f, "plant"),
            Self::Beef => write!(f, "beef"),
            Self::Chicken => write!(f, "chicken"),
        }
    }
}

/// A factory-made burger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Burger {
    tag: String,
    patty: Patty,
    toppings: Vec<String>,
}

impl Burger {
    /// Create a burger for a dispatch tag
    #[must_use]
    pub fn new(tag: impl Into<String>, patty: Patty, toppings: Vec<String>) -> Self {
        Self {
            tag: tag.into(),
            patty,
            toppings,
        }
    }

    /// Vegan variant
    #[must_use]
    pub fn vegan() -> Self {
        Self::new(
            "VEGAN",
            Patty::Plant,
            vec!["lettuce".to_string(), "tomato".to_string()],
        )
    }

    /// Classic variant
    #[must_use]
    pub fn classic() -> Self {
        Self::new(
            "CLASSIC",
            Patty::Beef,
            vec!["cheese".to_string(), "pickles".to_string()],
        )
    }

    /// Spicy variant
    #[must_use]
    pub fn spicy() -> Self {
        Self::new(
            "SPICY",
            Patty::Chicken,
            vec!["jalapeno".to_string(), "hot sauce".to_string()],
        )
    }

    /// Dispatch tag this burger was created under
    #[inline]
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Patty variant
    #[inline]
    #[must_use]
    pub fn patty(&self) -> Patty {
        self.patty
    }

    /// Toppings in assembly order
    #[inline]
    #[must_use]
    pub fn toppings(&self) -> &[String] {
        &self.toppings
    }
}

impl Product for Burger {
    const KIND: &'static str = "burger";

    fn approximate_size(&self) -> usize {
        self.tag.len() + self.toppings.iter().map(String::len).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burger_vegan_variant() {
        let burger = Burger::vegan();
        assert_eq!(burger.tag(), "VEGAN");
        assert_eq!(burger.patty(), Patty::Plant);
        assert_eq!(burger.toppings().len(), 2);
    }

    #[test]
    fn burger_variants_distinct() {
        assert_ne!(Burger::vegan(), Burger::classic());
        assert_ne!(Burger::classic(), Burger::spicy());
    }

    #[test]
    fn burger_kind() {
        assert_eq!(Burger::classic().kind(), "burger");
    }

    #[test]
    fn patty_display() {
        assert_eq!(Patty::Plant.to_string(), "plant");
        assert_eq!(Patty::Beef.to_string(), "beef");
    }
}
