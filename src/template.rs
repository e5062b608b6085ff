//! Template front-end: zips literal fragments with interpolated values.

use crate::value::Value;

/// Reduces a templated sequence to one source string: each literal part is
/// followed by its interpolated value, rendered with the value's textual
/// form. [`Value::Null`] renders empty, so a missing interpolation
/// contributes nothing. Extra parts beyond the last value concatenate as-is.
pub fn zip(parts: &[&str], values: &[Value]) -> String {
    let mut source = String::new();
    for (i, part) in parts.iter().enumerate() {
        source.push_str(part);
        if let Some(value) = values.get(i) {
            source.push_str(&value.to_string());
        }
    }
    source
}
