//! Breadth-first expansion: composites are admitted level by level
//!
//! Children of a dequeued composite are classified immediately. Fresh
//! composites are admitted at discovery time and queued; their subtrees
//! live in an arena of slots until the queue drains, then the output
//! tree is assembled from the root slot.

use std::collections::VecDeque;

use indexmap::IndexMap;

use super::{
    child_path, classify_field, Admission, Field, Identity, InspectionNode, Reflect, Walk,
    ROOT_PATH,
};

/// A child entry of a slot: finished, or waiting on another slot.
enum Entry {
    Done(InspectionNode),
    Pending(usize),
}

/// An admitted composite whose children are still being discovered.
struct Slot {
    type_name: String,
    identity: Identity,
    path: String,
    depth: u32,
    children: IndexMap<String, Entry>,
    failure: Option<String>,
}

impl Slot {
    fn new(type_name: String, identity: Identity, path: String, depth: u32) -> Self {
        Self {
            type_name,
            identity,
            path,
            depth,
            children: IndexMap::new(),
            failure: None,
        }
    }
}

/// Expand an admitted root composite whose fields are already enumerated.
pub(super) fn expand<V: Reflect>(
    walk: &mut Walk,
    type_name: String,
    identity: Identity,
    fields: Vec<Field<V>>,
) -> InspectionNode {
    let mut slots = vec![Slot::new(type_name, identity, ROOT_PATH.to_string(), 0)];
    let mut queue: VecDeque<(usize, V)> = VecDeque::new();

    discover(walk, &mut slots, &mut queue, 0, fields);

    while let Some((index, value)) = queue.pop_front() {
        match value.children() {
            Ok(fields) => discover(walk, &mut slots, &mut queue, index, fields),
            Err(err) => slots[index].failure = Some(err.to_string()),
        }
    }

    assemble(&mut slots, 0)
}

fn discover<V: Reflect>(
    walk: &mut Walk,
    slots: &mut Vec<Slot>,
    queue: &mut VecDeque<(usize, V)>,
    parent: usize,
    fields: Vec<Field<V>>,
) {
    let depth = slots[parent].depth + 1;

    for field in fields {
        // First occurrence of a name wins
        if slots[parent].children.contains_key(&field.name) {
            continue;
        }
        let path = child_path(&slots[parent].path, &field.name);

        let entry = match classify_field(field.value) {
            Err(leaf) => Entry::Done(leaf),
            Ok((child, identity)) => {
                let type_name = child.type_name();
                match walk.admit(&path, &type_name, identity, depth) {
                    Admission::Leaf(leaf) => Entry::Done(leaf),
                    Admission::Expand => {
                        let index = slots.len();
                        slots.push(Slot::new(type_name, identity, path, depth));
                        queue.push_back((index, child));
                        Entry::Pending(index)
                    }
                }
            }
        };

        slots[parent].children.insert(field.name, entry);
    }
}

fn assemble(slots: &mut [Slot], index: usize) -> InspectionNode {
    let slot = &mut slots[index];
    if let Some(reason) = slot.failure.take() {
        return InspectionNode::Inaccessible { reason };
    }

    let type_name = std::mem::take(&mut slot.type_name);
    let identity = slot.identity;
    let entries = std::mem::take(&mut slot.children);

    let mut children = IndexMap::with_capacity(entries.len());
    for (name, entry) in entries {
        let node = match entry {
            Entry::Done(node) => node,
            Entry::Pending(child) => assemble(slots, child),
        };
        children.insert(name, node);
    }

    InspectionNode::Composite {
        type_name,
        identity,
        children,
    }
}
