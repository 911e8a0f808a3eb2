//! Tree-shaped text rendering of inspection snapshots

use std::fmt;

use super::node::{InspectionNode, InspectionResult, Limit};

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Depth => write!(f, "depth limit"),
            Limit::Size => write!(f, "size limit"),
        }
    }
}

impl InspectionNode {
    /// One-line label for this node, without its children.
    fn label(&self) -> String {
        match self {
            InspectionNode::Primitive { repr, .. } => repr.clone(),
            InspectionNode::Circular {
                type_name,
                identity,
            } => format!("<circular {} @{}>", type_name, identity),
            InspectionNode::LimitReached { limit } => format!("<{}>", limit),
            InspectionNode::Inaccessible { reason } => format!("<inaccessible: {}>", reason),
            InspectionNode::Composite {
                type_name,
                identity,
                children,
            } => format!("{} @{} ({} fields)", type_name, identity, children.len()),
        }
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        if let InspectionNode::Composite { children, .. } = self {
            for (name, child) in children {
                writeln!(f)?;
                write!(f, "{:width$}{}: {}", "", name, child.label(), width = indent)?;
                child.write_tree(f, indent + 2)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for InspectionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())?;
        self.write_tree(f, 2)
    }
}

impl fmt::Display for InspectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)?;
        if !self.circular_refs.is_empty() {
            write!(f, "\ncircular references:")?;
            for site in &self.circular_refs {
                write!(f, "\n  {}", site)?;
            }
        }
        if self.truncated {
            write!(f, "\n(truncated)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::Identity;

    #[test]
    fn test_render_nested() {
        let inner = InspectionNode::Composite {
            type_name: "map".to_string(),
            identity: Identity::from_raw(0x20),
            children: [(
                "up".to_string(),
                InspectionNode::Circular {
                    type_name: "map".to_string(),
                    identity: Identity::from_raw(0x10),
                },
            )]
            .into_iter()
            .collect(),
        };
        let root = InspectionNode::Composite {
            type_name: "map".to_string(),
            identity: Identity::from_raw(0x10),
            children: [
                (
                    "n".to_string(),
                    InspectionNode::Primitive {
                        type_name: "int".to_string(),
                        repr: "42".to_string(),
                    },
                ),
                ("child".to_string(), inner),
                (
                    "deep".to_string(),
                    InspectionNode::LimitReached {
                        limit: Limit::Depth,
                    },
                ),
            ]
            .into_iter()
            .collect(),
        };
        let result = InspectionResult {
            root,
            circular_refs: vec!["$.child.up: map".to_string()],
            truncated: true,
        };

        let expected = "\
map @0x10 (3 fields)
  n: 42
  child: map @0x20 (1 fields)
    up: <circular map @0x10>
  deep: <depth limit>
circular references:
  $.child.up: map
(truncated)";
        assert_eq!(result.to_string(), expected);
    }

    #[test]
    fn test_render_primitive_root() {
        let node = InspectionNode::Primitive {
            type_name: "str".to_string(),
            repr: "\"hi\"".to_string(),
        };
        assert_eq!(node.to_string(), "\"hi\"");
    }
}
