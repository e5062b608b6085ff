//! The compiler context: helper registry, variable table, replacement table
//! and compilation cache.
//!
//! # Design
//!
//! All mutable state lives in an explicit [`StyleCompiler`] that callers
//! construct and own, so multiple independent instances can coexist and
//! `&mut self` rules out unsynchronized concurrent mutation. A process-wide
//! shared instance with free-function access is provided at the crate root
//! for the common single-context case.
//!
//! # Caching
//!
//! Compiled records are memoized by exact source string and returned behind
//! an [`Arc`], so repeat compiles of the same source are map lookups and the
//! shared record cannot be mutated in place. The cache is cleared in full
//! when [`StyleCompiler::set_variables`] installs a structurally different
//! table. It is NOT cleared when helpers or replacements are registered:
//! source strings compiled before such a registration keep their old
//! expansion until the variable table changes or
//! [`StyleCompiler::clear_cache`] is called.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::CompileError;
use crate::helper::{Helper, HelperRegistry};
use crate::property::{dedash, resolve_abbreviation};
use crate::resolve::resolve_token;
use crate::scan::pairs;
use crate::template::zip;
use crate::value::{StyleRecord, Value};

/// Spellings under which the hairline-width sentinel is reachable.
const HAIRLINE_KEYS: &[&str] = &["hairlineWidth", "hairline-width", "hw"];

/// A style compiler with its own helpers, variables, replacements and cache.
///
/// # Example
///
/// ```rust
/// use shorthand::{StyleCompiler, Value};
///
/// let mut compiler = StyleCompiler::new();
/// let style = compiler.compile("m 8 16; bc white").unwrap();
///
/// assert_eq!(style.get("marginTop"), Some(&Value::Number(8.0)));
/// assert_eq!(style.get("marginLeft"), Some(&Value::Number(16.0)));
/// assert_eq!(style.get("backgroundColor"), Some(&Value::Str("white".into())));
/// ```
#[derive(Debug, Clone)]
pub struct StyleCompiler {
    helpers: HelperRegistry,
    variables: HashMap<String, Value>,
    replacements: HashMap<String, Value>,
    cache: HashMap<String, Arc<StyleRecord>>,
}

impl StyleCompiler {
    /// Creates a compiler with the seeded helper registry, no variables, no
    /// replacements and an empty cache.
    pub fn new() -> Self {
        Self {
            helpers: HelperRegistry::seeded(),
            variables: HashMap::new(),
            replacements: HashMap::new(),
            cache: HashMap::new(),
        }
    }

    /// Compiles `source` into a style record, memoized by the exact source
    /// string.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::InvalidArity`] when a directional shorthand
    /// is given a value count outside 1..=4. All other malformed input
    /// degrades to a partial record.
    pub fn compile(&mut self, source: &str) -> Result<Arc<StyleRecord>, CompileError> {
        if let Some(hit) = self.cache.get(source) {
            return Ok(Arc::clone(hit));
        }
        let record = Arc::new(self.compile_pairs(source)?);
        self.cache.insert(source.to_string(), Arc::clone(&record));
        Ok(record)
    }

    /// Compiles a template: literal `parts` zipped with interpolated
    /// `values`, then compiled as one source string.
    ///
    /// # Errors
    ///
    /// Same conditions as [`StyleCompiler::compile`].
    pub fn compile_template(
        &mut self,
        parts: &[&str],
        values: &[Value],
    ) -> Result<Arc<StyleRecord>, CompileError> {
        let source = zip(parts, values);
        self.compile(&source)
    }

    fn compile_pairs(&mut self, source: &str) -> Result<StyleRecord, CompileError> {
        let mut record = StyleRecord::new();

        for pair in pairs(source) {
            let key = dedash(pair.key.trim());
            if key.is_empty() {
                continue;
            }

            if let Some(helper) = self.helpers.get(&key).cloned() {
                match helper {
                    Helper::Macro(body) => {
                        let expanded = self.compile(&body)?;
                        record.merge(&expanded);
                    }
                    Helper::Expander(run) => {
                        let value = pair.value.unwrap_or("").trim();
                        let args: Vec<&str> = if value.is_empty() {
                            Vec::new()
                        } else {
                            value.split(' ').collect()
                        };
                        let expanded = run(self, &args)?;
                        record.merge(&expanded);
                    }
                }
                continue;
            }

            let key = match resolve_abbreviation(&key) {
                Some(canonical) => canonical.to_string(),
                None => key,
            };

            let value = match pair.value {
                Some(value) => value,
                None => continue,
            };

            if let Some(body) = value.strip_prefix('{') {
                let body = body.strip_suffix('}').unwrap_or(body);
                let nested = self.compile(body)?;
                record.insert(key, Value::Record((*nested).clone()));
            } else {
                record.insert(key, self.resolve_token(value));
            }
        }

        Ok(record)
    }

    /// Resolves a raw trimmed token against this compiler's variable and
    /// replacement tables. Exposed for custom expander helpers.
    pub fn resolve_token(&self, token: &str) -> Value {
        resolve_token(token, &self.variables, &self.replacements)
    }

    /// Merges `entries` into the helper registry, later entries overwriting
    /// same-keyed earlier ones.
    ///
    /// Takes effect on subsequent compiles only: already-cached source
    /// strings are NOT re-expanded until the cache is cleared.
    pub fn register_helpers(&mut self, entries: impl IntoIterator<Item = (String, Helper)>) {
        self.helpers.register(entries);
    }

    /// Returns the helper registry.
    pub fn helpers(&self) -> &HelperRegistry {
        &self.helpers
    }

    /// Replaces the variable table, clearing the compilation cache when the
    /// new table is not structurally equal to the active one. Returns the
    /// active table.
    pub fn set_variables(&mut self, variables: HashMap<String, Value>) -> &HashMap<String, Value> {
        if self.variables != variables {
            self.cache.clear();
        }
        self.variables = variables;
        &self.variables
    }

    /// Returns the active variable table.
    pub fn variables(&self) -> &HashMap<String, Value> {
        &self.variables
    }

    /// Merges `entries` into the value replacement table. Like helper
    /// registration, this does not invalidate already-cached records.
    pub fn register_replacements(&mut self, entries: impl IntoIterator<Item = (String, Value)>) {
        self.replacements.extend(entries);
    }

    /// Installs the platform-supplied hairline-width sentinel under its
    /// three spellings: `hairlineWidth`, `hairline-width` and `hw`.
    pub fn set_hairline_width(&mut self, value: impl Into<Value>) {
        let value = value.into();
        for key in HAIRLINE_KEYS {
            self.replacements.insert((*key).to_string(), value.clone());
        }
    }

    /// Drops every cached record.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Number of cached source strings (nested blocks and macros cache
    /// under their own source).
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

impl Default for StyleCompiler {
    fn default() -> Self {
        Self::new()
    }
}
