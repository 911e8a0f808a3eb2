//! Bounded, cycle-safe structural inspection
//!
//! The inspector walks any graph reachable through [`Reflect`] and returns
//! an immutable [`InspectionNode`] tree. Revisits are detected by
//! [`Identity`], never by value, so self-referential graphs terminate.
//!
//! For every composite met at some depth the checks run in a fixed order,
//! shared by both strategies:
//!
//! 1. already expanded in this call → `Circular`
//! 2. deeper than `max_depth` → `LimitReached(Depth)` (not marked visited)
//! 3. `max_items` composites already expanded → `LimitReached(Size)`
//! 4. otherwise mark visited, count it, expand
//!
//! # Example
//!
//! ```
//! use quickbeam::{inspect, Value};
//!
//! let a = Value::empty_map();
//! let b = Value::empty_map();
//! b.insert("link", a.clone()).unwrap();
//! a.insert("back", b.clone()).unwrap();
//!
//! let result = inspect(&a).unwrap();
//! assert_eq!(result.circular_refs, vec!["$.back.link: map".to_string()]);
//! assert!(!result.truncated);
//! ```

mod breadth_first;
mod config;
mod depth_first;
mod display;
mod json;
mod node;
mod reflect;

pub use config::{InspectConfig, Strategy, DEFAULT_MAX_DEPTH, DEFAULT_MAX_ITEMS};
pub use node::{InspectionNode, InspectionResult, Limit};
pub use reflect::{Field, Identity, Kind, Reflect};

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::error::{FieldAccessError, ReflectionError};

/// Path of the root value in circular-reference sites.
pub(crate) const ROOT_PATH: &str = "$";

/// Inspects object graphs under a fixed configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inspector {
    config: InspectConfig,
}

impl Inspector {
    /// Create an inspector with the given bounds and strategy.
    pub fn new(config: InspectConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &InspectConfig {
        &self.config
    }

    /// Inspect `value`, producing a bounded snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ReflectionError` only when the root itself cannot be
    /// classified or its children cannot be enumerated. The error always
    /// carries the root's reported type name. Failures below the root
    /// become `Inaccessible` leaves.
    pub fn inspect<V: Reflect>(&self, value: &V) -> Result<InspectionResult, ReflectionError> {
        let type_name = value.type_name();
        debug!(
            type_name = %type_name,
            strategy = ?self.config.strategy,
            max_depth = self.config.max_depth,
            max_items = self.config.max_items,
            "inspection started"
        );

        let mut walk = Walk::new(self.config);
        let kind = value
            .classify()
            .map_err(|err| ReflectionError::new(type_name.clone(), err.reason))?;
        let root = match kind {
            Kind::Primitive { repr } => InspectionNode::Primitive { type_name, repr },
            Kind::Composite { identity } => match walk.admit(ROOT_PATH, &type_name, identity, 0) {
                Admission::Leaf(leaf) => leaf,
                Admission::Expand => {
                    let fields = value
                        .children()
                        .map_err(|err| ReflectionError::new(type_name.clone(), err.reason))?;
                    match self.config.strategy {
                        Strategy::DepthFirst => {
                            depth_first::expand(&mut walk, type_name, identity, fields)
                        }
                        Strategy::BreadthFirst => {
                            breadth_first::expand(&mut walk, type_name, identity, fields)
                        }
                    }
                }
            },
        };

        let result = walk.finish(root);
        debug!(
            circular = result.circular_refs.len(),
            truncated = result.truncated,
            "inspection finished"
        );
        Ok(result)
    }
}

/// Inspect `value` with the default bounds (`max_depth = 10`,
/// `max_items = 1000`) depth-first.
pub fn inspect<V: Reflect>(value: &V) -> Result<InspectionResult, ReflectionError> {
    Inspector::default().inspect(value)
}

/// Decision for a composite met during traversal.
pub(crate) enum Admission {
    /// Expand its children
    Expand,

    /// Stop here with this leaf
    Leaf(InspectionNode),
}

/// Per-call traversal state. Never outlives one `inspect` call.
pub(crate) struct Walk {
    config: InspectConfig,
    visited: HashSet<Identity>,
    circular_refs: Vec<String>,
    expanded: u32,
    truncated: bool,
}

impl Walk {
    fn new(config: InspectConfig) -> Self {
        Self {
            config,
            visited: HashSet::new(),
            circular_refs: Vec::new(),
            expanded: 0,
            truncated: false,
        }
    }

    /// Run the circular, depth and size checks, in that order.
    pub(crate) fn admit(
        &mut self,
        path: &str,
        type_name: &str,
        identity: Identity,
        depth: u32,
    ) -> Admission {
        if self.visited.contains(&identity) {
            trace!(path, %identity, "circular reference");
            self.circular_refs.push(format!("{}: {}", path, type_name));
            return Admission::Leaf(InspectionNode::Circular {
                type_name: type_name.to_string(),
                identity,
            });
        }

        if depth > self.config.max_depth {
            return Admission::Leaf(InspectionNode::LimitReached {
                limit: Limit::Depth,
            });
        }

        if self.expanded >= self.config.max_items {
            if !self.truncated {
                debug!(max_items = self.config.max_items, path, "item budget exhausted");
            }
            self.truncated = true;
            return Admission::Leaf(InspectionNode::LimitReached { limit: Limit::Size });
        }

        self.visited.insert(identity);
        self.expanded += 1;
        Admission::Expand
    }

    fn finish(self, root: InspectionNode) -> InspectionResult {
        InspectionResult {
            root,
            circular_refs: self.circular_refs,
            truncated: self.truncated,
        }
    }
}

/// Classify one child field, producing either a finished leaf or the
/// composite that still needs a decision.
pub(crate) fn classify_field<V: Reflect>(
    field_value: Result<V, FieldAccessError>,
) -> Result<(V, Identity), InspectionNode> {
    let child = field_value.map_err(InspectionNode::inaccessible)?;
    match child.classify() {
        Ok(Kind::Primitive { repr }) => Err(InspectionNode::Primitive {
            type_name: child.type_name(),
            repr,
        }),
        Ok(Kind::Composite { identity }) => Ok((child, identity)),
        Err(err) => Err(InspectionNode::inaccessible(ReflectionError::new(
            child.type_name(),
            err.reason,
        ))),
    }
}

/// Path of a child field below `parent`.
pub(crate) fn child_path(parent: &str, name: &str) -> String {
    format!("{}.{}", parent, name)
}
