//! # Quickbeam
//!
//! A balanced type registry and a cycle-safe structural inspector.
//!
//! Two independent pieces, composed only by a caller that owns both:
//!
//! - **Registry**: an AVL-balanced, ordered index from type names to
//!   metadata bags. Re-registering a name merges its metadata.
//! - **Inspector**: a bounded walk over an arbitrary, possibly
//!   self-referential object graph that produces an immutable,
//!   serializable description tree. Revisits are detected by identity;
//!   depth and item budgets bound the work.
//!
//! The inspector reaches host objects only through the [`Reflect`] trait.
//! [`Value`] is a ready-made dynamic object graph implementing it, and
//! parsed `serde_json` documents are reflectable as well.
//!
//! A small [`template`] module provides `{{name}}` substitution with an
//! explicitly owned memo cache.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod inspect;
pub mod registry;
pub mod template;
pub mod value;

// Re-export main types
pub use error::{FieldAccessError, QuickbeamError, ReflectionError, Result};
pub use inspect::{
    inspect, Field, Identity, InspectConfig, InspectionNode, InspectionResult, Inspector, Kind,
    Limit, Reflect, Strategy,
};
pub use registry::{Metadata, TypeRegistry};
pub use template::{TemplateCache, TemplateParams};
pub use value::{ObjectValue, Value};

/// Quickbeam version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
