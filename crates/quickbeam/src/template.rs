//! Placeholder substitution with a memoizing cache
//!
//! Templates are plain text containing `{{ name }}` placeholders. Expansion
//! is a single left-to-right pass over the template.
//!
//! # Example
//!
//! ```
//! use quickbeam::template::{expand, TemplateCache, TemplateParams};
//!
//! let params = TemplateParams::new().with("name", "Bregalad").with("score", "99");
//! assert_eq!(expand("Hello {{name}}, score {{ score }}", &params), "Hello Bregalad, score 99");
//!
//! let cache = TemplateCache::new();
//! let first = cache.generate("Hi {{name}}", &params);
//! let second = cache.generate("Hi {{name}}", &params);
//! assert_eq!(first, second);
//! assert_eq!(cache.len(), 1);
//!
//! cache.clear();
//! assert!(cache.is_empty());
//! ```

use dashmap::DashMap;
use indexmap::IndexMap;
use tracing::trace;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// What to emit for a placeholder with no binding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingVar {
    /// Emit nothing
    #[default]
    Empty,

    /// Emit the placeholder unchanged, braces included
    Keep,
}

/// Bindings for template expansion.
///
/// Maps placeholder names to their replacement text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateParams {
    bindings: IndexMap<String, String>,
}

impl TemplateParams {
    /// Create new empty bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create bindings with a single entry.
    pub fn single(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new().with(name, value)
    }

    /// Add a binding (builder pattern)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.bind(name, value);
        self
    }

    /// Add a binding.
    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.bindings.insert(name.into(), value.into());
    }

    /// Get a binding by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.bindings.get(name).map(String::as_str)
    }

    /// Get all binding names.
    pub fn names(&self) -> Vec<&str> {
        self.bindings.keys().map(String::as_str).collect()
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if bindings are empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings sorted by name, independent of insertion order.
    fn sorted(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .bindings
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        pairs.sort_unstable();
        pairs
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TemplateParams {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.bind(name, value);
        }
        params
    }
}

/// Expand `template`, dropping placeholders that have no binding.
pub fn expand(template: &str, params: &TemplateParams) -> String {
    expand_with(template, params, MissingVar::Empty)
}

/// Expand `template` with an explicit policy for unbound placeholders.
///
/// A `{{` with no closing `}}` after it is emitted literally, together
/// with the rest of the template.
pub fn expand_with(template: &str, params: &TemplateParams, missing: MissingVar) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let body = &rest[start + OPEN.len()..];

        let Some(end) = body.find(CLOSE) else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = body[..end].trim();
        match (params.get(name), missing) {
            (Some(value), _) => out.push_str(value),
            (None, MissingVar::Keep) => {
                out.push_str(&rest[start..start + OPEN.len() + end + CLOSE.len()]);
            }
            (None, MissingVar::Empty) => {}
        }
        rest = &body[end + CLOSE.len()..];
    }

    out.push_str(rest);
    out
}

type CacheKey = (String, Vec<(String, String)>);

/// Memoizes template expansions by template text and bindings.
///
/// Owned explicitly by the caller; entries live until `clear()` or drop.
/// Safe to share across threads by reference.
#[derive(Debug, Default)]
pub struct TemplateCache {
    entries: DashMap<CacheKey, String>,
    missing: MissingVar,
}

impl TemplateCache {
    /// Create an empty cache that drops unbound placeholders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache with the given unbound-placeholder policy.
    pub fn with_missing(missing: MissingVar) -> Self {
        Self {
            entries: DashMap::new(),
            missing,
        }
    }

    /// Expand `template`, reusing an earlier expansion of the same
    /// template with the same bindings.
    pub fn generate(&self, template: &str, params: &TemplateParams) -> String {
        let key = (template.to_string(), params.sorted());
        if let Some(hit) = self.entries.get(&key) {
            trace!(len = template.len(), "template cache hit");
            return hit.value().clone();
        }

        let expanded = expand_with(template, params, self.missing);
        self.entries.insert(key, expanded.clone());
        expanded
    }

    /// Number of cached expansions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached expansion.
    pub fn clear(&self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_trims_names() {
        let params = TemplateParams::single("x", "A");
        assert_eq!(expand("[{{ x }}][{{x}}]", &params), "[A][A]");
    }

    #[test]
    fn test_missing_policies() {
        let params = TemplateParams::new();
        assert_eq!(expand("a{{ gone }}b", &params), "ab");
        assert_eq!(
            expand_with("a{{ gone }}b", &params, MissingVar::Keep),
            "a{{ gone }}b"
        );
    }

    #[test]
    fn test_unterminated_placeholder_is_literal() {
        let params = TemplateParams::single("x", "A");
        assert_eq!(expand("{{x}} and {{x", &params), "A and {{x");
    }

    #[test]
    fn test_no_placeholders() {
        assert_eq!(expand("plain } { text", &TemplateParams::new()), "plain } { text");
    }

    #[test]
    fn test_params_order_does_not_split_cache() {
        let cache = TemplateCache::new();
        let ab: TemplateParams = [("a", "1"), ("b", "2")].into_iter().collect();
        let ba: TemplateParams = [("b", "2"), ("a", "1")].into_iter().collect();

        assert_eq!(cache.generate("{{a}}{{b}}", &ab), "12");
        assert_eq!(cache.generate("{{a}}{{b}}", &ba), "12");
        assert_eq!(cache.len(), 1);
    }
}
