//! Value trait implementations: constructors, predicates, extractors, mutators, From traits, PartialEq

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard, TryLockError};

use indexmap::IndexMap;

use super::*;
use crate::error::{FieldAccessError, QuickbeamError, Result};
use crate::inspect::Identity;

// ═══════════════════════════════════════════════════════════════════
// Lock helpers
// ═══════════════════════════════════════════════════════════════════

/// Non-blocking read of a composite's storage.
pub(super) fn try_read<'a, T>(
    lock: &'a RwLock<T>,
    type_name: &str,
) -> std::result::Result<RwLockReadGuard<'a, T>, FieldAccessError> {
    lock.try_read().map_err(|err| {
        let reason = match err {
            TryLockError::Poisoned(_) => "lock poisoned",
            TryLockError::WouldBlock => "locked for writing",
        };
        FieldAccessError::enumeration(type_name, reason)
    })
}

fn write<'a, T>(lock: &'a RwLock<T>, type_name: &str) -> Result<RwLockWriteGuard<'a, T>> {
    lock.write().map_err(|_| QuickbeamError::Poisoned {
        type_name: type_name.to_string(),
    })
}

fn type_error(expected: &str, got: &Value) -> QuickbeamError {
    QuickbeamError::TypeError {
        expected: expected.to_string(),
        got: type_name(got).to_string(),
    }
}

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Arc::from(s.into()))
    }

    /// Create a byte string value
    pub fn bytes(b: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(Arc::from(b.into()))
    }

    /// Create a list value
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Arc::new(RwLock::new(items)))
    }

    /// Create an empty list value
    pub fn empty_list() -> Self {
        Value::list(Vec::new())
    }

    /// Create a map value from key/value pairs
    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        let entries: IndexMap<String, Value> =
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Value::Map(Arc::new(RwLock::new(entries)))
    }

    /// Create an empty map value
    pub fn empty_map() -> Self {
        Value::Map(Arc::new(RwLock::new(IndexMap::new())))
    }

    /// Create an object value
    pub fn object(object: ObjectValue) -> Self {
        Value::Object(Arc::new(object))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Predicates
    // ═══════════════════════════════════════════════════════════════════

    /// Check if value is the absence marker
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Check if value is atomic
    pub fn is_primitive(&self) -> bool {
        !self.is_composite()
    }

    /// Check if value has children
    pub fn is_composite(&self) -> bool {
        matches!(self, Value::List(_) | Value::Map(_) | Value::Object(_))
    }

    /// Display name of the value's type
    pub fn type_name(&self) -> &str {
        type_name(self)
    }

    /// Identity of a composite's shared storage
    pub fn identity(&self) -> Option<Identity> {
        match self {
            Value::List(items) => Some(Identity::of(Arc::as_ptr(items))),
            Value::Map(entries) => Some(Identity::of(Arc::as_ptr(entries))),
            Value::Object(object) => Some(Identity::of(Arc::as_ptr(object))),
            _ => None,
        }
    }

    /// Check if both values are handles to the same composite
    pub fn same_as(&self, other: &Value) -> bool {
        match (self.identity(), other.identity()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Number of children of a composite (None for primitives, or when
    /// the composite is currently unreadable)
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::List(items) => try_read(items, "list").ok().map(|items| items.len()),
            Value::Map(entries) => try_read(entries, "map").ok().map(|entries| entries.len()),
            Value::Object(object) => try_read(&object.fields, object.type_name())
                .ok()
                .map(|fields| fields.len()),
            _ => None,
        }
    }

    /// Check if a composite has no children
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors (return Option for safe access)
    // ═══════════════════════════════════════════════════════════════════

    /// Extract boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract integer value
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract as f64 (converts from integers)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Extract string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Extract byte slice
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Shared access
    // ═══════════════════════════════════════════════════════════════════

    /// Get a handle to the entry or field named `key` of a map or object.
    pub fn get(&self, key: &str) -> Option<Value> {
        match self {
            Value::Map(entries) => try_read(entries, "map").ok()?.get(key).cloned(),
            Value::Object(object) => try_read(&object.fields, object.type_name())
                .ok()?
                .get(key)
                .cloned(),
            _ => None,
        }
    }

    /// Get a handle to the list element at `index`.
    pub fn get_index(&self, index: usize) -> Option<Value> {
        match self {
            Value::List(items) => try_read(items, "list").ok()?.get(index).cloned(),
            _ => None,
        }
    }

    /// Append to a list through any handle to it.
    pub fn push(&self, item: Value) -> Result<()> {
        match self {
            Value::List(items) => {
                write(items, "list")?.push(item);
                Ok(())
            }
            other => Err(type_error("list", other)),
        }
    }

    /// Set an entry of a map or a field of an object through any handle
    /// to it, returning the previous value.
    ///
    /// This is how cycles are closed: insert a handle to an ancestor.
    pub fn insert(&self, key: impl Into<String>, value: Value) -> Result<Option<Value>> {
        match self {
            Value::Map(entries) => Ok(write(entries, "map")?.insert(key.into(), value)),
            Value::Object(object) => {
                Ok(write(&object.fields, object.type_name())?.insert(key.into(), value))
            }
            other => Err(type_error("map or object", other)),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<ObjectValue> for Value {
    fn from(object: ObjectValue) -> Self {
        Value::object(object)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::None, Into::into)
    }
}

// ═══════════════════════════════════════════════════════════════════
// PartialEq Implementation
// ═══════════════════════════════════════════════════════════════════

/// Primitives compare by value, composites by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            _ => self.same_as(other),
        }
    }
}
