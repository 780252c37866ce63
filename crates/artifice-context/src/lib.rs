//! Artifice Shared Context
//!
//! Process-wide lazily-initialized shared state with a documented
//! single-owner lifecycle:
//!
//! 1. Optionally, exactly one caller seeds the instance with
//!    [`SharedContext::init`] before anyone reads it
//! 2. Every caller reaches the same instance through
//!    [`SharedContext::instance`]; the first access initializes it exactly
//!    once, even under racing callers
//! 3. State mutations through one reference are immediately visible to all
//!    other holders
//!
//! The construction window is serialized by the `once_cell` cell; the
//! mutable mode state sits behind a `parking_lot` lock. There is no ambient
//! mutable global beyond this one accessor.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod context;

pub use context::{ContextConfig, ContextError, ContextState, Mode, SharedContext};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
