//! Build specs: ordered step sequences
//!
//! A [`BuildSpec`] is the data a director plays against a builder. Steps
//! execute strictly in declared order; a director never skips or reorders
//! them. A step names a slot and may carry an explicit value; when no value
//! is given the concrete builder supplies its own.

use serde::{Deserialize, Serialize};

/// Slots of a four-course meal, in service order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// Opening course
    Starter,
    /// Main course
    MainCourse,
    /// Dessert course
    Dessert,
    /// Accompanying drink
    Drink,
}

impl Slot {
    /// All slots in service order
    pub const ALL: [Self; 4] = [Self::Starter, Self::MainCourse, Self::Dessert, Self::Drink];
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Starter => write!(f, "starter"),
            Self::MainCourse => write!(f, "main_course"),
            Self::Dessert => write!(f, "dessert"),
            Self::Drink => write!(f, "drink"),
        }
    }
}

/// One step of a build spec
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStep {
    /// Slot this step assigns
    pub slot: Slot,
    /// Explicit value; `None` defers to the builder's own value
    pub value: Option<String>,
}

impl BuildStep {
    /// Step that defers the value to the builder
    #[inline]
    #[must_use]
    pub fn slot(slot: Slot) -> Self {
        Self { slot, value: None }
    }

    /// Step with an explicit value
    #[inline]
    #[must_use]
    pub fn with_value(slot: Slot, value: impl Into<String>) -> Self {
        Self {
            slot,
            value: Some(value.into()),
        }
    }
}

/// Ordered sequence of build steps
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuildSpec {
    steps: Vec<BuildStep>,
}

impl BuildSpec {
    /// Create an empty spec
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step deferring the value to the builder
    #[inline]
    #[must_use]
    pub fn then(mut self, slot: Slot) -> Self {
        self.steps.push(BuildStep::slot(slot));
        self
    }

    /// Append a step with an explicit value
    #[inline]
    #[must_use]
    pub fn then_with(mut self, slot: Slot, value: impl Into<String>) -> Self {
        self.steps.push(BuildStep::with_value(slot, value));
        self
    }

    /// Steps in declared order
    #[inline]
    #[must_use]
    pub fn steps(&self) -> &[BuildStep] {
        &self.steps
    }

    /// Number of steps
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the spec has no steps
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Spec covering all four slots, deferring values to the builder
    #[must_use]
    pub fn four_course() -> Self {
        Slot::ALL
            .into_iter()
            .fold(Self::new(), |spec, slot| spec.then(slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn spec_preserves_declared_order() {
        let spec = BuildSpec::new()
            .then(Slot::Drink)
            .then(Slot::Starter)
            .then_with(Slot::Dessert, "Pie");

        let slots: Vec<Slot> = spec.steps().iter().map(|s| s.slot).collect();
        assert_eq!(slots, vec![Slot::Drink, Slot::Starter, Slot::Dessert]);
    }

    #[test]
    fn spec_four_course_covers_all_slots() {
        let spec = BuildSpec::four_course();
        assert_eq!(spec.len(), 4);
        assert!(spec.steps().iter().all(|s| s.value.is_none()));
    }

    #[test]
    fn step_with_value() {
        let step = BuildStep::with_value(Slot::Starter, "Salad");
        assert_eq!(step.slot, Slot::Starter);
        assert_eq!(step.value.as_deref(), Some("Salad"));
    }

    #[test]
    fn spec_empty() {
        let spec = BuildSpec::new();
        assert!(spec.is_empty());
        assert_eq!(spec.len(), 0);
    }

    #[test]
    fn spec_serde_round_trip() {
        let spec = BuildSpec::new().then_with(Slot::MainCourse, "Curry");
        let json = serde_json::to_string(&spec).unwrap();
        let back: BuildSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, back);
    }

    #[test]
    fn slot_display() {
        assert_eq!(Slot::Starter.to_string(), "starter");
        assert_eq!(Slot::MainCourse.to_string(), "main_course");
    }
}
