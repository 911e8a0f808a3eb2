//! Inspection bounds and traversal strategy

use serde::{Deserialize, Serialize};

/// Default maximum depth of expansion below the root.
pub const DEFAULT_MAX_DEPTH: u32 = 10;

/// Default maximum number of composites expanded per call.
pub const DEFAULT_MAX_ITEMS: u32 = 1000;

/// Order in which composites are discovered and expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Recursive descent in enumeration order
    #[default]
    DepthFirst,

    /// Level by level, from an explicit queue
    BreadthFirst,
}

/// Configuration for an inspection.
///
/// Both bounds are independent: `max_depth` stops long chains,
/// `max_items` stops wide graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectConfig {
    /// Composites found deeper than this become depth-limit leaves.
    /// The root is at depth 0.
    pub max_depth: u32,

    /// Once this many composites have been expanded, further ones become
    /// size-limit leaves and the result is flagged as truncated.
    pub max_items: u32,

    /// Traversal order
    pub strategy: Strategy,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_items: DEFAULT_MAX_ITEMS,
            strategy: Strategy::DepthFirst,
        }
    }
}

impl InspectConfig {
    /// Create a config with default bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the depth bound.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the item bound.
    pub fn with_max_items(mut self, max_items: u32) -> Self {
        self.max_items = max_items;
        self
    }

    /// Set the traversal strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = InspectConfig::new();
        assert_eq!(config.max_depth, 10);
        assert_eq!(config.max_items, 1000);
        assert_eq!(config.strategy, Strategy::DepthFirst);
    }

    #[test]
    fn test_builder() {
        let config = InspectConfig::new()
            .with_max_depth(3)
            .with_max_items(50)
            .with_strategy(Strategy::BreadthFirst);
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.max_items, 50);
        assert_eq!(config.strategy, Strategy::BreadthFirst);
    }

    #[test]
    fn test_partial_config_from_json() {
        let config: InspectConfig =
            serde_json::from_str(r#"{ "max_depth": 2, "strategy": "breadth_first" }"#)
                .expect("valid config");
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.max_items, DEFAULT_MAX_ITEMS);
        assert_eq!(config.strategy, Strategy::BreadthFirst);
    }
}
