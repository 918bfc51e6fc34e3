//! Parameter substitution engine
//!
//! Fills a command template with caller-supplied parameter values.
//! Placeholder tokens are parameter names prefixed with `&`; replacement is
//! literal. Specs are processed longest-name-first so a parameter `x` can
//! never clobber the `&xy` token of a sibling parameter.

use std::collections::HashMap;

use serde_json::Value;

use crate::catalog::ParameterSpec;

/// Placeholder sigil used by command templates.
pub const SIGIL: char = '&';

/// Replace every parameter placeholder in `template` with its value.
///
/// Missing values substitute as the empty string. Parameters named in `skip`
/// are left untouched (the coordinate transform uses this for its
/// pseudo-parameters, which are transform inputs and never appear in output).
pub fn substitute(
    template: &str,
    specs: &[ParameterSpec],
    params: &HashMap<String, Value>,
    skip: &[&str],
) -> String {
    let mut ordered: Vec<&ParameterSpec> = specs
        .iter()
        .filter(|spec| !skip.contains(&spec.name.as_str()))
        .collect();
    // Longest name first: prefix-safe literal replacement
    ordered.sort_by(|a, b| b.name.len().cmp(&a.name.len()));

    let mut out = template.to_string();
    for spec in ordered {
        let token = format!("{}{}", SIGIL, spec.name);
        let value = params.get(&spec.name).map(coerce_str).unwrap_or_default();
        out = out.replace(&token, &value);
    }
    out
}

/// Coerce a parameter value to the text that lands in the script.
pub(crate) fn coerce_str(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => "0".to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Coerce a parameter value to a number, if possible.
pub(crate) fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// Coerce an optional parameter value to a flag. Absent values are false.
pub(crate) fn coerce_bool(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    }
}
