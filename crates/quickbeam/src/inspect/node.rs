//! The inspection snapshot: an immutable description tree

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::reflect::Identity;
use crate::error::Result;

/// Which bound stopped the expansion of a composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Limit {
    /// The composite sat deeper than `max_depth`
    Depth,

    /// `max_items` composites had already been expanded
    Size,
}

/// One node of an inspection snapshot.
///
/// Owns no reference back into the inspected graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InspectionNode {
    /// Atomic value
    Primitive {
        /// Type name reported by the host
        type_name: String,
        /// Rendered value
        repr: String,
    },

    /// A composite that was already expanded elsewhere in this snapshot
    Circular {
        /// Type name reported by the host
        type_name: String,
        /// Identity of the revisited composite
        identity: Identity,
    },

    /// A composite that was not expanded because a bound was hit
    LimitReached {
        /// The bound that was hit
        limit: Limit,
    },

    /// A child that could not be read
    Inaccessible {
        /// Why reading failed
        reason: String,
    },

    /// An expanded composite
    Composite {
        /// Type name reported by the host
        type_name: String,
        /// Identity of the composite
        identity: Identity,
        /// Children in enumeration order
        children: IndexMap<String, InspectionNode>,
    },
}

impl InspectionNode {
    /// Check if this is a primitive leaf.
    pub fn is_primitive(&self) -> bool {
        matches!(self, InspectionNode::Primitive { .. })
    }

    /// Check if this is an expanded composite.
    pub fn is_composite(&self) -> bool {
        matches!(self, InspectionNode::Composite { .. })
    }

    /// Check if this is a revisit marker.
    pub fn is_circular(&self) -> bool {
        matches!(self, InspectionNode::Circular { .. })
    }

    /// The limit that stopped this node, if any.
    pub fn limit(&self) -> Option<Limit> {
        match self {
            InspectionNode::LimitReached { limit } => Some(*limit),
            _ => None,
        }
    }

    /// Type name, when the node carries one.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            InspectionNode::Primitive { type_name, .. }
            | InspectionNode::Circular { type_name, .. }
            | InspectionNode::Composite { type_name, .. } => Some(type_name),
            InspectionNode::LimitReached { .. } | InspectionNode::Inaccessible { .. } => None,
        }
    }

    /// Children of an expanded composite.
    pub fn children(&self) -> Option<&IndexMap<String, InspectionNode>> {
        match self {
            InspectionNode::Composite { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Child by field name.
    pub fn child(&self, name: &str) -> Option<&InspectionNode> {
        self.children().and_then(|children| children.get(name))
    }

    /// Follow a sequence of field names from this node.
    pub fn at<'a>(&self, path: impl IntoIterator<Item = &'a str>) -> Option<&InspectionNode> {
        path.into_iter()
            .try_fold(self, |node, name| node.child(name))
    }

    /// Number of expanded composites in this subtree, this node included.
    pub fn composite_count(&self) -> usize {
        match self {
            InspectionNode::Composite { children, .. } => {
                1 + children.values().map(Self::composite_count).sum::<usize>()
            }
            _ => 0,
        }
    }

    /// Length of the longest path from this node down to a leaf.
    pub fn depth(&self) -> usize {
        self.children()
            .and_then(|children| children.values().map(|child| 1 + child.depth()).max())
            .unwrap_or(0)
    }

    pub(crate) fn inaccessible(reason: impl ToString) -> Self {
        InspectionNode::Inaccessible {
            reason: reason.to_string(),
        }
    }
}

/// Outcome of one inspection call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionResult {
    /// The description tree
    pub root: InspectionNode,

    /// Every site where an already-expanded composite was met again,
    /// as `"<path>: <type name>"` with `$` standing for the root
    pub circular_refs: Vec<String>,

    /// Whether the item budget cut the traversal short
    pub truncated: bool,
}

impl InspectionResult {
    /// Render the result as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(repr: &str) -> InspectionNode {
        InspectionNode::Primitive {
            type_name: "int".to_string(),
            repr: repr.to_string(),
        }
    }

    fn composite(id: usize, children: Vec<(&str, InspectionNode)>) -> InspectionNode {
        InspectionNode::Composite {
            type_name: "map".to_string(),
            identity: Identity::from_raw(id),
            children: children
                .into_iter()
                .map(|(name, node)| (name.to_string(), node))
                .collect(),
        }
    }

    #[test]
    fn test_depth_and_count() {
        let tree = composite(
            1,
            vec![
                ("a", leaf("1")),
                ("b", composite(2, vec![("c", composite(3, vec![]))])),
            ],
        );
        assert_eq!(tree.composite_count(), 3);
        assert_eq!(tree.depth(), 2);
        assert_eq!(leaf("1").depth(), 0);
    }

    #[test]
    fn test_path_lookup() {
        let tree = composite(1, vec![("b", composite(2, vec![("c", leaf("7"))]))]);
        assert_eq!(tree.at(["b", "c"]), Some(&leaf("7")));
        assert_eq!(tree.at(["b", "missing"]), None);
        assert_eq!(tree.at(Vec::<&str>::new()), Some(&tree));
    }

    #[test]
    fn test_serialized_shape() {
        let node = InspectionNode::LimitReached { limit: Limit::Size };
        let json = serde_json::to_value(&node).expect("serializable");
        assert_eq!(json, serde_json::json!({ "kind": "limit_reached", "limit": "size" }));
    }
}
