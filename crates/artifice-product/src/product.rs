//! Product Trait
//!
//! Defines the interface for types that can be produced by the toolkit.
//! Each product specifies a kind identifier and a size estimate used by
//! registries for accounting.

/// Trait for constructed products
///
/// Implement this trait for each type of finished aggregate a builder,
/// factory, or prototype can hand to a caller.
///
/// # Type Safety
/// - `KIND` provides a unique identifier for registries and diagnostics
/// - Products require `Send + Sync` so startup-populated tables may be
///   consulted from multiple threads
/// - `Clone`/`Debug`/`PartialEq` are required for duplication and testing
pub trait Product: Send + Sync + Clone + std::fmt::Debug + PartialEq + 'static {
    /// Unique kind identifier
    ///
    /// Used to distinguish product kinds in registries and diagnostics.
    const KIND: &'static str;

    /// Kind identifier of this value
    #[inline]
    #[must_use]
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    /// Get approximate memory size in bytes
    ///
    /// Used for registry accounting. Estimates are acceptable.
    fn approximate_size(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct TestProduct {
        data: String,
    }

    impl Product for TestProduct {
        const KIND: &'static str = "test";

        fn approximate_size(&self) -> usize {
            self.data.len()
        }
    }

    #[test]
    fn product_kind() {
        let p = TestProduct {
            data: "hello".to_string(),
        };
        assert_eq!(p.kind(), "test");
    }

    #[test]
    fn product_size() {
        let p = TestProduct {
            data: "hello".to_string(),
        };
        assert_eq!(p.approximate_size(), 5);
    }
}
