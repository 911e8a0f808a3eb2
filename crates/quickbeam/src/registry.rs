//! Balanced, ordered type registry

mod iter;
mod node;

pub use iter::Iter;

use std::borrow::Borrow;
use std::cmp::Ordering;

use indexmap::IndexMap;
use tracing::debug;

use node::Link;

/// Opaque metadata bag attached to a registered name.
///
/// Insertion-ordered so that merged keys keep a predictable order.
pub type Metadata = IndexMap<String, String>;

/// An ordered index from type names to metadata, kept AVL-balanced.
///
/// Re-inserting a key merges the new metadata into the existing entry
/// rather than replacing it. Entries are never removed.
///
/// # Example
///
/// ```
/// use quickbeam::{Metadata, TypeRegistry};
///
/// let mut registry = TypeRegistry::new();
///
/// registry.insert("Point".to_string(), Metadata::from([("x".into(), "i64".into())]));
/// registry.insert("Line".to_string(), Metadata::new());
///
/// // Re-insertion merges
/// registry.insert("Point".to_string(), Metadata::from([("y".into(), "i64".into())]));
///
/// let point = registry.lookup("Point").unwrap();
/// assert_eq!(point.get("x").map(String::as_str), Some("i64"));
/// assert_eq!(point.get("y").map(String::as_str), Some("i64"));
///
/// let names: Vec<&String> = registry.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, ["Line", "Point"]);
/// assert!(registry.lookup("Circle").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct TypeRegistry<K = String> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for TypeRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> TypeRegistry<K> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the underlying tree (0 when empty).
    pub fn height(&self) -> u32 {
        node::height(&self.root)
    }

    /// Iterate over all entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// All entries in ascending key order.
    pub fn all_entries(&self) -> Vec<(&K, &Metadata)> {
        self.iter().collect()
    }
}

impl<K: Ord> TypeRegistry<K> {
    /// Insert `key`, or merge `metadata` into it if already present.
    ///
    /// A new key is placed as a leaf and every ancestor on the way back
    /// to the root is rebalanced. A known key only has its metadata
    /// extended (existing entries overwritten); the tree is untouched.
    pub fn insert(&mut self, key: K, metadata: Metadata) {
        let mut created = false;
        self.root = Some(node::insert(self.root.take(), key, metadata, &mut created));
        if created {
            self.len += 1;
        }
    }

    /// Look up the metadata registered under `key`.
    pub fn lookup<Q>(&self, key: &Q) -> Option<&Metadata>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.metadata),
            };
        }
        None
    }

    /// Check if `key` has been registered.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.lookup(key).is_some()
    }
}

impl TypeRegistry<String> {
    /// Register the Rust type `T` under its fully-qualified type name.
    pub fn register<T: ?Sized>(&mut self, metadata: Metadata) {
        let name = std::any::type_name::<T>();
        debug!(name, fields = metadata.len(), "registering type");
        self.insert(name.to_string(), metadata);
    }

    /// Metadata registered for the Rust type `T`.
    pub fn info<T: ?Sized>(&self) -> Option<&Metadata> {
        self.lookup(std::any::type_name::<T>())
    }
}

impl<'a, K> IntoIterator for &'a TypeRegistry<K> {
    type Item = (&'a K, &'a Metadata);
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Ord> Extend<(K, Metadata)> for TypeRegistry<K> {
    fn extend<T: IntoIterator<Item = (K, Metadata)>>(&mut self, iter: T) {
        for (key, metadata) in iter {
            self.insert(key, metadata);
        }
    }
}

impl<K: Ord> FromIterator<(K, Metadata)> for TypeRegistry<K> {
    fn from_iter<T: IntoIterator<Item = (K, Metadata)>>(iter: T) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}
