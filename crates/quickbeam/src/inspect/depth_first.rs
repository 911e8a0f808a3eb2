//! Depth-first expansion: recurse into each child as soon as it is seen

use indexmap::IndexMap;

use super::{
    child_path, classify_field, Admission, Field, Identity, InspectionNode, Reflect, Walk,
    ROOT_PATH,
};
use crate::error::FieldAccessError;

/// Expand an admitted root composite whose fields are already enumerated.
pub(super) fn expand<V: Reflect>(
    walk: &mut Walk,
    type_name: String,
    identity: Identity,
    fields: Vec<Field<V>>,
) -> InspectionNode {
    composite(walk, type_name, identity, fields, ROOT_PATH, 0)
}

fn composite<V: Reflect>(
    walk: &mut Walk,
    type_name: String,
    identity: Identity,
    fields: Vec<Field<V>>,
    path: &str,
    depth: u32,
) -> InspectionNode {
    let mut children = IndexMap::with_capacity(fields.len());

    for field in fields {
        // First occurrence of a name wins
        if children.contains_key(&field.name) {
            continue;
        }
        let field_path = child_path(path, &field.name);
        let node = visit(walk, field.value, &field_path, depth + 1);
        children.insert(field.name, node);
    }

    InspectionNode::Composite {
        type_name,
        identity,
        children,
    }
}

fn visit<V: Reflect>(
    walk: &mut Walk,
    value: Result<V, FieldAccessError>,
    path: &str,
    depth: u32,
) -> InspectionNode {
    let (child, identity) = match classify_field(value) {
        Ok(composite) => composite,
        Err(leaf) => return leaf,
    };

    let type_name = child.type_name();
    match walk.admit(path, &type_name, identity, depth) {
        Admission::Leaf(leaf) => leaf,
        Admission::Expand => match child.children() {
            Ok(fields) => composite(walk, type_name, identity, fields, path, depth),
            Err(err) => InspectionNode::inaccessible(err),
        },
    }
}
