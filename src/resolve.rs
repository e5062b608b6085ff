//! Raw token resolution: variable references, symbolic replacements and
//! numeric coercion.

use std::collections::HashMap;

use crate::value::Value;

/// Resolves a raw trimmed token to its final value.
///
/// Resolution order:
///
/// 1. A leading `$` substitutes the variable table's entry for the name that
///    follows; a missing entry resolves to [`Value::Null`] rather than
///    failing the compile.
/// 2. A (possibly substituted) string that exactly matches a replacement
///    table key yields that table's value. This is how symbolic constants
///    supplied by the host platform are reached, and it means a variable may
///    resolve to a replacement name.
/// 3. A string that parses as a number becomes numeric; anything else stays
///    a string.
pub(crate) fn resolve_token(
    token: &str,
    variables: &HashMap<String, Value>,
    replacements: &HashMap<String, Value>,
) -> Value {
    let value = match token.strip_prefix('$') {
        Some(name) => match variables.get(name) {
            Some(value) => value.clone(),
            None => return Value::Null,
        },
        None => Value::Str(token.to_string()),
    };

    match value {
        Value::Str(s) => match replacements.get(&s) {
            Some(replacement) => replacement.clone(),
            None => num_or_str(s),
        },
        other => other,
    }
}

fn num_or_str(token: String) -> Value {
    match token.parse::<f64>() {
        Ok(n) => Value::Number(n),
        Err(_) => Value::Str(token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_vars() -> HashMap<String, Value> {
        HashMap::new()
    }

    #[test]
    fn test_numeric_coercion() {
        let vars = no_vars();
        let reps = HashMap::new();
        assert_eq!(resolve_token("10", &vars, &reps), Value::Number(10.0));
        assert_eq!(resolve_token("0.5", &vars, &reps), Value::Number(0.5));
        assert_eq!(resolve_token("-4", &vars, &reps), Value::Number(-4.0));
        assert_eq!(
            resolve_token("absolute", &vars, &reps),
            Value::Str("absolute".into())
        );
    }

    #[test]
    fn test_variable_substitution() {
        let mut vars = no_vars();
        vars.insert("gap".to_string(), Value::Number(8.0));
        vars.insert("tone".to_string(), Value::Str("red".into()));
        let reps = HashMap::new();

        assert_eq!(resolve_token("$gap", &vars, &reps), Value::Number(8.0));
        assert_eq!(
            resolve_token("$tone", &vars, &reps),
            Value::Str("red".into())
        );
    }

    #[test]
    fn test_missing_variable_is_null() {
        let vars = no_vars();
        let reps = HashMap::new();
        assert_eq!(resolve_token("$missing", &vars, &reps), Value::Null);
    }

    #[test]
    fn test_string_variable_parses_as_number() {
        let mut vars = no_vars();
        vars.insert("gap".to_string(), Value::Str("12".into()));
        let reps = HashMap::new();
        assert_eq!(resolve_token("$gap", &vars, &reps), Value::Number(12.0));
    }

    #[test]
    fn test_replacement_table() {
        let vars = no_vars();
        let mut reps = HashMap::new();
        reps.insert("hairlineWidth".to_string(), Value::Number(0.5));

        assert_eq!(
            resolve_token("hairlineWidth", &vars, &reps),
            Value::Number(0.5)
        );
    }

    #[test]
    fn test_variable_reaches_replacement() {
        let mut vars = no_vars();
        vars.insert("line".to_string(), Value::Str("hairlineWidth".into()));
        let mut reps = HashMap::new();
        reps.insert("hairlineWidth".to_string(), Value::Number(0.5));

        assert_eq!(resolve_token("$line", &vars, &reps), Value::Number(0.5));
    }
}
