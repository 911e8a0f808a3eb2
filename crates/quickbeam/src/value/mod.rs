//! Dynamic object graph for inspection
//!
//! A small host object model whose composites live in shared,
//! interior-mutable storage, so graphs may share nodes and close cycles.

mod compound;
mod display;
mod impls;
mod reflect;

pub use compound::ObjectValue;

use std::sync::{Arc, RwLock};

use indexmap::IndexMap;

/// Shared, lockable storage of a composite.
pub type Shared<T> = Arc<RwLock<T>>;

/// Runtime value in an inspectable object graph.
///
/// Values are organized into two tiers:
/// - Primitives: atomic, compared by value
/// - Composites: shared handles, compared by identity
///
/// Cloning a composite clones the handle, not the contents.
#[derive(Clone)]
pub enum Value {
    // ═══════════════════════════════════════════════════════════════════
    // Primitives
    // ═══════════════════════════════════════════════════════════════════
    /// Absence of a value
    None,

    /// Boolean: `true` or `false`
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// Text
    Str(Arc<str>),

    /// Raw byte sequence
    Bytes(Arc<[u8]>),

    // ═══════════════════════════════════════════════════════════════════
    // Composites
    // ═══════════════════════════════════════════════════════════════════
    /// Ordered sequence
    List(Shared<Vec<Value>>),

    /// String-keyed map, insertion ordered
    Map(Shared<IndexMap<String, Value>>),

    /// Named object with fields
    Object(Arc<ObjectValue>),
}

/// Get a display name for a value's type.
pub fn type_name(value: &Value) -> &str {
    match value {
        Value::None => "none",
        Value::Bool(_) => "bool",
        Value::Int(_) => "int",
        Value::Float(_) => "float",
        Value::Str(_) => "str",
        Value::Bytes(_) => "bytes",
        Value::List(_) => "list",
        Value::Map(_) => "map",
        Value::Object(object) => object.type_name(),
    }
}
