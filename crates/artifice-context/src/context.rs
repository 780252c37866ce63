//! Shared context state and the process-wide accessor

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

static CELL: OnceCell<SharedContext> = OnceCell::new();

/// Errors from context lifecycle misuse
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    /// `init` called after the instance already exists
    #[error("shared context already initialized")]
    AlreadyInitialized,
}

/// Output modes for the shared context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Fast, low-fidelity output
    Draft,
    /// Everyday output
    #[default]
    Normal,
    /// Slow, high-fidelity output
    HighQuality,
}

/// Shared context configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Mode the context starts in
    pub initial_mode: Mode,
    /// Label capacity hint for consumers
    pub label_capacity: usize,
}

impl ContextConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With an initial mode
    #[inline]
    #[must_use]
    pub fn with_initial_mode(mut self, mode: Mode) -> Self {
        self.initial_mode = mode;
        self
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            initial_mode: Mode::Normal,
            label_capacity: 16,
        }
    }
}

/// Mutable state held by the context
///
/// Usable standalone when a caller prefers an explicitly passed context
/// object over the process-wide accessor.
#[derive(Debug)]
pub struct ContextState {
    mode: RwLock<Mode>,
}

impl ContextState {
    /// Create state starting in a mode
    #[inline]
    #[must_use]
    pub fn new(initial_mode: Mode) -> Self {
        Self {
            mode: RwLock::new(initial_mode),
        }
    }

    /// Current mode
    #[inline]
    #[must_use]
    pub fn mode(&self) -> Mode {
        *self.mode.read()
    }

    /// Set the mode; the write is immediately visible to every holder
    pub fn set_mode(&self, mode: Mode) {
        tracing::debug!("Context mode set: {:?}", mode);
        *self.mode.write() = mode;
    }
}

impl Default for ContextState {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

/// The process-wide shared context
///
/// At most one instance exists for the lifetime of the process.
#[derive(Debug)]
pub struct SharedContext {
    config: ContextConfig,
    state: ContextState,
}

impl SharedContext {
    fn from_config(config: ContextConfig) -> Self {
        Self {
            config,
            state: ContextState::new(config.initial_mode),
        }
    }

    /// Seed the instance with explicit configuration
    ///
    /// Must run before the first [`instance`](Self::instance) call.
    ///
    /// # Errors
    /// Returns [`ContextError::AlreadyInitialized`] if the instance exists,
    /// whether from an earlier `init` or a plain first access.
    pub fn init(config: ContextConfig) -> Result<&'static Self, ContextError> {
        let mut fresh = false;
        let ctx = CELL.get_or_init(|| {
            fresh = true;
            tracing::info!("Initializing shared context: {:?}", config.initial_mode);
            Self::from_config(config)
        });
        if fresh {
            Ok(ctx)
        } else {
            Err(ContextError::AlreadyInitialized)
        }
    }

    /// Access the process-wide instance
    ///
    /// The first call initializes the instance exactly once, with default
    /// configuration unless [`init`](Self::init) ran earlier; racing first
    /// callers are serialized by the cell.
    #[must_use]
    pub fn instance() -> &'static Self {
        CELL.get_or_init(|| {
            tracing::info!("Initializing shared context with defaults");
            Self::from_config(ContextConfig::default())
        })
    }

    /// Configuration the instance was created with
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    /// Current mode
    #[inline]
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    /// Set the mode for every holder of the instance
    pub fn set_mode(&self, mode: Mode) {
        self.state.set_mode(mode);
    }
}
