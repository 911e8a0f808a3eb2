//! Named objects

use std::sync::{PoisonError, RwLock};

use indexmap::IndexMap;

use super::Value;

/// An object instance with a type name and named fields.
///
/// The type name is fixed at construction and readable without locking;
/// only the fields sit behind the lock. Uses IndexMap to keep fields in
/// definition order.
#[derive(Debug)]
pub struct ObjectValue {
    type_name: String,
    pub(crate) fields: RwLock<IndexMap<String, Value>>,
}

impl ObjectValue {
    /// Create an object with no fields.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: RwLock::new(IndexMap::new()),
        }
    }

    /// Add a field (builder pattern)
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into(), value);
        self
    }

    /// The object's type name (e.g. "Point", "Person")
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}
