//! Error types for inspection
//!
//! The registry has no error type: insert and lookup are total. Everything
//! here belongs to the inspector and the reflection seam it depends on.

use thiserror::Error;

/// The reflection collaborator could not make sense of a value.
///
/// Only fatal when it happens at the root of an inspection; below the root
/// the same failure degrades to an `Inaccessible` leaf.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Reflection error on {type_name}: {reason}")]
pub struct ReflectionError {
    /// Reported type name of the offending value
    pub type_name: String,

    /// What went wrong
    pub reason: String,
}

impl ReflectionError {
    /// Create a new reflection error.
    pub fn new(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }
}

/// A single child of a composite could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot read field '{field}' of {type_name}: {reason}")]
pub struct FieldAccessError {
    /// Name of the field (or `*` when enumeration itself failed)
    pub field: String,

    /// Type name of the composite owning the field
    pub type_name: String,

    /// What went wrong
    pub reason: String,
}

impl FieldAccessError {
    /// Create a new field access error.
    pub fn new(
        field: impl Into<String>,
        type_name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    /// Error for a composite whose children could not be enumerated at all.
    pub fn enumeration(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new("*", type_name, reason)
    }
}

impl From<FieldAccessError> for ReflectionError {
    fn from(err: FieldAccessError) -> Self {
        ReflectionError {
            type_name: err.type_name,
            reason: err.reason,
        }
    }
}

/// Main error type for quickbeam operations
#[derive(Error, Debug)]
pub enum QuickbeamError {
    /// Fatal reflection failure at the root of an inspection
    #[error(transparent)]
    Reflection(#[from] ReflectionError),

    /// A field could not be read
    #[error(transparent)]
    FieldAccess(#[from] FieldAccessError),

    /// Type mismatch error
    #[error("Type error: expected {expected}, got {got}")]
    TypeError {
        /// Expected type
        expected: String,
        /// Actual type received
        got: String,
    },

    /// A composite's lock was poisoned by a panicking writer
    #[error("Poisoned lock on {type_name}")]
    Poisoned {
        /// Type name of the composite
        type_name: String,
    },

    /// Rendering an inspection result to JSON failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for quickbeam operations
pub type Result<T> = std::result::Result<T, QuickbeamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflection_error_display() {
        let err = ReflectionError::new("Node", "lock poisoned");
        assert_eq!(err.to_string(), "Reflection error on Node: lock poisoned");
    }

    #[test]
    fn test_field_access_error_display() {
        let err = FieldAccessError::new("next", "Node", "locked for writing");
        assert_eq!(
            err.to_string(),
            "Cannot read field 'next' of Node: locked for writing"
        );
    }

    #[test]
    fn test_field_access_converts_to_reflection() {
        let err: ReflectionError = FieldAccessError::enumeration("map", "poisoned").into();
        assert_eq!(err, ReflectionError::new("map", "poisoned"));
    }

    #[test]
    fn test_type_error_display() {
        let err = QuickbeamError::TypeError {
            expected: "list".to_string(),
            got: "int".to_string(),
        };
        assert_eq!(err.to_string(), "Type error: expected list, got int");
    }

    #[test]
    fn test_umbrella_is_transparent() {
        let err: QuickbeamError = ReflectionError::new("list", "boom").into();
        assert_eq!(err.to_string(), "Reflection error on list: boom");
    }
}
