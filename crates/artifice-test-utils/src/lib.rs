//! Testing utilities for the Artifice workspace
//!
//! Shared fixtures and helpers.

#![allow(missing_docs)]

use artifice_product::Document;
use artifice_registry::{BuildSpec, Slot};

/// Install a test subscriber honoring `RUST_LOG`; repeated calls are no-ops.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Document with one image, matching the duplication scenario.
pub fn sample_document() -> Document {
    Document::new("Report", "quarterly numbers").with_images(vec!["a.png".to_string()])
}

/// The four-step explicit-value meal sequence.
pub fn scenario_meal_spec() -> BuildSpec {
    BuildSpec::new()
        .then_with(Slot::Starter, "Salad")
        .then_with(Slot::MainCourse, "Stir Fry")
        .then_with(Slot::Dessert, "Pudding")
        .then_with(Slot::Drink, "Shake")
}
