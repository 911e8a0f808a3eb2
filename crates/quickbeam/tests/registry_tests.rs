//! Registry behavior through the public API

use pretty_assertions::assert_eq;
use quickbeam::{Metadata, TypeRegistry};

fn meta(pairs: &[(&str, &str)]) -> Metadata {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_insertion_order_does_not_matter() {
    let mut registry = TypeRegistry::new();
    for name in ["d", "b", "a", "c"] {
        registry.insert(name.to_string(), Metadata::new());
    }

    let names: Vec<&str> = registry
        .all_entries()
        .into_iter()
        .map(|(name, _)| name.as_str())
        .collect();
    assert_eq!(names, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_idempotent_reinsertion() {
    let mut registry = TypeRegistry::new();
    registry.insert("Point".to_string(), meta(&[("a", "1")]));
    let height = registry.height();

    registry.insert("Point".to_string(), meta(&[("b", "2")]));

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.height(), height);
    assert_eq!(
        registry.lookup("Point"),
        Some(&meta(&[("a", "1"), ("b", "2")]))
    );
}

#[test]
fn test_lookup_absent() {
    let registry: TypeRegistry = ["Vec", "HashMap", "String"]
        .into_iter()
        .map(|name| (name.to_string(), Metadata::new()))
        .collect();

    assert!(registry.lookup("BTreeMap").is_none());
    assert!(registry.lookup("").is_none());
    assert!(registry.contains("HashMap"));
}

#[test]
fn test_many_names_stay_shallow() {
    let mut registry = TypeRegistry::new();
    for i in 0..10_000 {
        registry.insert(format!("Type{:05}", i), meta(&[("len", "6")]));
    }

    assert_eq!(registry.len(), 10_000);
    // AVL height bound: < 1.45 * log2(n + 2)
    assert!(registry.height() <= 19, "height {}", registry.height());

    let mut previous: Option<&String> = None;
    for (name, _) in &registry {
        if let Some(prev) = previous {
            assert!(prev < name);
        }
        previous = Some(name);
    }
}

#[test]
fn test_extend_merges_duplicates() {
    let mut registry = TypeRegistry::new();
    registry.extend([
        ("Point".to_string(), meta(&[("x", "i64")])),
        ("Line".to_string(), Metadata::new()),
        ("Point".to_string(), meta(&[("y", "i64")])),
    ]);

    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.lookup("Point"),
        Some(&meta(&[("x", "i64"), ("y", "i64")]))
    );
}

#[test]
fn test_register_by_rust_type() {
    #[allow(dead_code)]
    struct Person {
        name: String,
        age: u8,
    }

    let mut registry: TypeRegistry = TypeRegistry::new();
    registry.register::<Person>(meta(&[("name", "String"), ("age", "u8")]));
    registry.register::<Person>(meta(&[("email", "String")]));

    let info = registry.info::<Person>().unwrap();
    assert_eq!(info.len(), 3);
    assert_eq!(registry.len(), 1);
    assert!(registry
        .all_entries()
        .iter()
        .all(|(name, _)| name.ends_with("Person")));
}

#[test]
fn test_integer_keys() {
    let mut registry = TypeRegistry::new();
    for key in [5u64, 3, 9, 1, 4] {
        registry.insert(key, Metadata::new());
    }
    assert_eq!(
        registry.iter().map(|(k, _)| *k).collect::<Vec<_>>(),
        vec![1, 3, 4, 5, 9]
    );
    assert!(registry.lookup(&4u64).is_some());
    assert!(registry.lookup(&6u64).is_none());
}
