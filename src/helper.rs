//! Helper registry: macros and expander functions bound to property keys.
//!
//! When the compiler matches a pair whose key is registered here, the helper
//! takes over instead of the default single-value assignment. The registry
//! ships seeded with the directional shorthand families and the composite
//! `border` helper, and callers may register their own entries.

use std::collections::HashMap;

use crate::compiler::StyleCompiler;
use crate::error::CompileError;
use crate::expand;
use crate::value::StyleRecord;

/// Signature for expander helpers: the compiler context (for value
/// resolution or recursive compiles) plus the positional arguments the
/// value was split into.
pub type Expander = fn(&mut StyleCompiler, &[&str]) -> Result<StyleRecord, CompileError>;

/// A registered helper.
#[derive(Debug, Clone)]
pub enum Helper {
    /// A macro: source text that is itself compiled through the pipeline
    /// and merged into the surrounding record. The pair's own value is
    /// ignored.
    Macro(String),
    /// An expander function producing a partial record from positional
    /// arguments.
    Expander(Expander),
}

/// Mutable mapping from property key to [`Helper`].
#[derive(Debug, Clone)]
pub struct HelperRegistry {
    entries: HashMap<String, Helper>,
}

impl HelperRegistry {
    /// Creates a registry with no entries.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Creates a registry seeded with the built-in shorthand helpers:
    /// `margin`/`m`, `padding`/`p`, `borderWidth`/`border-width`/`bw`,
    /// `borderRadius`/`border-radius`/`br` and the composite `border`/`b`.
    pub fn seeded() -> Self {
        let mut registry = Self::empty();
        registry.bind(&["margin", "m"], Helper::Expander(expand::expand_margin));
        registry.bind(&["padding", "p"], Helper::Expander(expand::expand_padding));
        registry.bind(
            &["borderWidth", "border-width", "bw"],
            Helper::Expander(expand::expand_border_width),
        );
        registry.bind(
            &["borderRadius", "border-radius", "br"],
            Helper::Expander(expand::expand_border_radius),
        );
        registry.bind(&["border", "b"], Helper::Expander(expand::expand_border));
        registry
    }

    /// Registers one helper under every key in `keys`.
    pub fn bind(&mut self, keys: &[&str], helper: Helper) {
        for key in keys {
            self.entries.insert((*key).to_string(), helper.clone());
        }
    }

    /// Merges `entries` into the registry, later entries overwriting
    /// same-keyed earlier ones.
    pub fn register(&mut self, entries: impl IntoIterator<Item = (String, Helper)>) {
        self.entries.extend(entries);
    }

    /// Looks up the helper registered for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Helper> {
        self.entries.get(key)
    }

    /// Number of registered keys (aliases count separately).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all registered keys.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }
}

impl Default for HelperRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_families() {
        let registry = HelperRegistry::seeded();
        for key in [
            "margin",
            "m",
            "padding",
            "p",
            "borderWidth",
            "border-width",
            "bw",
            "borderRadius",
            "border-radius",
            "br",
            "border",
            "b",
        ] {
            assert!(registry.get(key).is_some(), "missing seeded key {}", key);
        }
    }

    #[test]
    fn test_register_overwrites() {
        let mut registry = HelperRegistry::empty();
        registry.register([("row".to_string(), Helper::Macro("flexDirection row".into()))]);
        registry.register([("row".to_string(), Helper::Macro("flexDirection column".into()))]);

        assert_eq!(registry.len(), 1);
        match registry.get("row") {
            Some(Helper::Macro(body)) => assert_eq!(body, "flexDirection column"),
            other => panic!("expected macro, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = HelperRegistry::empty();
        assert!(registry.is_empty());
        assert!(registry.get("m").is_none());
    }
}
