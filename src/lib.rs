//! Compiler for a terse, CSS-like style shorthand notation.
//!
//! Source text like `m 10; bc red; br 4 8` compiles into a fully-expanded
//! style record: directional shorthands (`m`, `p`, `bw`, `br`) expand into
//! their four-sided forms with CSS-style 1/2/3/4-value tie-breaks,
//! abbreviated property names resolve to their canonical camelCase forms,
//! `$name` tokens substitute from a variable table, and `{ ... }` values
//! compile recursively into nested records.
//!
//! # Grammar
//!
//! ```text
//! pairs     := pair (separator pair)*
//! pair      := key ws? value?
//! separator := ';' | newline
//! value     := '{' blockBody '}' | plainValueRun
//! ```
//!
//! where `plainValueRun` is any run of characters excluding `;` and newline.
//! Unknown keys pass through unchanged, bare keys contribute nothing, and a
//! `$name` with no matching variable resolves to [`Value::Null`] — the one
//! hard error is a directional shorthand with a value count outside 1..=4.
//!
//! # Quick start
//!
//! ```rust
//! use shorthand::{StyleCompiler, Value};
//!
//! let mut compiler = StyleCompiler::new();
//! let style = compiler.compile("m 8 16; bc white; zIndex 3").unwrap();
//!
//! assert_eq!(style.get("marginTop"), Some(&Value::Number(8.0)));
//! assert_eq!(style.get("marginRight"), Some(&Value::Number(16.0)));
//! assert_eq!(style.get("backgroundColor"), Some(&Value::Str("white".into())));
//! assert_eq!(style.get("zIndex"), Some(&Value::Number(3.0)));
//! ```
//!
//! # Variables and caching
//!
//! Compiled records are memoized by exact source string. Replacing the
//! variable table with a structurally different one clears the cache, so
//! recompiling the same source picks up the new values:
//!
//! ```rust
//! use std::collections::HashMap;
//! use shorthand::{StyleCompiler, Value};
//!
//! let mut compiler = StyleCompiler::new();
//! compiler.set_variables(HashMap::from([("gap".to_string(), Value::Number(8.0))]));
//! let style = compiler.compile("p $gap").unwrap();
//! assert_eq!(style.get("paddingTop"), Some(&Value::Number(8.0)));
//!
//! compiler.set_variables(HashMap::from([("gap".to_string(), Value::Number(12.0))]));
//! let style = compiler.compile("p $gap").unwrap();
//! assert_eq!(style.get("paddingTop"), Some(&Value::Number(12.0)));
//! ```
//!
//! # Shared context
//!
//! Each [`StyleCompiler`] owns its helpers, variables and cache. For the
//! common single-context case, the free functions at the crate root
//! ([`compile`], [`set_variables`], [`register_helpers`], ...) delegate to
//! one process-wide instance behind a mutex.

mod compiler;
mod error;
mod expand;
mod helper;
mod property;
mod resolve;
mod scan;
mod template;
mod value;

pub use compiler::StyleCompiler;
pub use error::CompileError;
pub use expand::{expand_sides, Directions};
pub use helper::{Expander, Helper, HelperRegistry};
pub use property::{derive_abbreviation, resolve_abbreviation, PROPERTIES};
pub use template::zip;
pub use value::{StyleRecord, Value};

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

static SHARED: Lazy<Mutex<StyleCompiler>> = Lazy::new(|| Mutex::new(StyleCompiler::new()));

/// Compiles `source` with the shared compiler instance.
///
/// # Errors
///
/// Same conditions as [`StyleCompiler::compile`].
pub fn compile(source: &str) -> Result<Arc<StyleRecord>, CompileError> {
    SHARED.lock().unwrap().compile(source)
}

/// Compiles a template with the shared compiler instance.
///
/// # Errors
///
/// Same conditions as [`StyleCompiler::compile`].
pub fn compile_template(parts: &[&str], values: &[Value]) -> Result<Arc<StyleRecord>, CompileError> {
    SHARED.lock().unwrap().compile_template(parts, values)
}

/// Merges helper entries into the shared compiler's registry.
pub fn register_helpers(entries: impl IntoIterator<Item = (String, Helper)>) {
    SHARED.lock().unwrap().register_helpers(entries);
}

/// Replaces the shared compiler's variable table, clearing its cache when
/// the table differs, and returns the active table.
pub fn set_variables(variables: HashMap<String, Value>) -> HashMap<String, Value> {
    SHARED.lock().unwrap().set_variables(variables).clone()
}

/// Returns the shared compiler's active variable table.
pub fn variables() -> HashMap<String, Value> {
    SHARED.lock().unwrap().variables().clone()
}

/// Installs the hairline-width sentinel on the shared compiler.
pub fn set_hairline_width(value: impl Into<Value>) {
    SHARED.lock().unwrap().set_hairline_width(value);
}

/// Drops every record cached by the shared compiler.
pub fn clear_cache() {
    SHARED.lock().unwrap().clear_cache();
}
