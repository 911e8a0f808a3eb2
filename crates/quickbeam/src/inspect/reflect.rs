//! The structural-reflection seam between the inspector and a host object model

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FieldAccessError, ReflectionError};

/// Token distinguishing one composite's allocation from another.
///
/// Only compared for equality within a single inspection call; the same
/// value may get a different identity on a later call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(usize);

impl Identity {
    /// Identity derived from the address of a shared allocation.
    pub fn of<T: ?Sized>(ptr: *const T) -> Self {
        Identity(ptr.cast::<()>() as usize)
    }

    /// Identity from a raw token (for host models with their own ids).
    pub fn from_raw(raw: usize) -> Self {
        Identity(raw)
    }

    /// The raw token.
    pub fn as_raw(self) -> usize {
        self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// How the inspector should treat a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// Atomic value, rendered by its representation and never entered
    /// into the visited set
    Primitive {
        /// Human-readable representation
        repr: String,
    },

    /// Value with enumerable named children
    Composite {
        /// Identity used for revisit detection
        identity: Identity,
    },
}

/// One named child of a composite.
///
/// The value is a `Result` so a single unreadable field degrades to a
/// leaf annotation instead of failing the whole enumeration.
#[derive(Debug, Clone)]
pub struct Field<V> {
    /// Field name (list indices are rendered as decimal strings)
    pub name: String,

    /// The child, or why it could not be read
    pub value: Result<V, FieldAccessError>,
}

impl<V> Field<V> {
    /// A readable field.
    pub fn new(name: impl Into<String>, value: V) -> Self {
        Self {
            name: name.into(),
            value: Ok(value),
        }
    }

    /// A field that exists but could not be read.
    pub fn unreadable(name: impl Into<String>, error: FieldAccessError) -> Self {
        Self {
            name: name.into(),
            value: Err(error),
        }
    }
}

/// Structural reflection over a host object model.
///
/// Implemented by cheap-to-clone handles (shared pointers, references):
/// children are handed back as owned handles of the same type so that a
/// cyclic graph can be walked without holding any borrow across levels.
pub trait Reflect: Sized {
    /// Display name of the value's type.
    fn type_name(&self) -> String;

    /// Decide whether the value is primitive or composite.
    fn classify(&self) -> Result<Kind, ReflectionError>;

    /// Enumerate the named children of a composite, in a stable order.
    ///
    /// Primitives should return an empty list.
    fn children(&self) -> Result<Vec<Field<Self>>, FieldAccessError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_raw_token() {
        let identity = Identity::from_raw(0x2a);
        assert_eq!(identity.as_raw(), 42);
        assert_eq!(identity.to_string(), "0x2a");
        assert_eq!(serde_json::to_string(&identity).expect("serializable"), "42");
    }

    #[test]
    fn test_identity_of_shared_allocation() {
        let shared = std::sync::Arc::new(5u8);
        let alias = std::sync::Arc::clone(&shared);
        assert_eq!(
            Identity::of(std::sync::Arc::as_ptr(&shared)),
            Identity::of(std::sync::Arc::as_ptr(&alias))
        );
        assert_eq!(
            Identity::of(std::sync::Arc::as_ptr(&shared)).as_raw(),
            std::sync::Arc::as_ptr(&shared) as usize
        );
    }
}
