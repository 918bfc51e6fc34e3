//! Relative coordinate transform
//!
//! Pointer-positioning commands authored with `relative = true` are rewritten
//! so the recorded pixel position is replayed as a fraction of the executing
//! machine's screen, keeping macros correct across display resolutions:
//!
//! ```text
//! CoordMode, Mouse, Screen
//! rx := (A_ScreenWidth * 0.5000)
//! ry := (A_ScreenHeight * 0.5000)
//! Click, %rx%, %ry%, Left
//! ```
//!
//! The `relative`, `screenWidth` and `screenHeight` pseudo-parameters are
//! transform inputs only and never appear literally in the output.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

use crate::catalog::CommandDefinition;

use super::substitute::{coerce_f64, substitute};

/// Screen size assumed when the authoring machine reported an invalid one.
const FALLBACK_SCREEN_WIDTH: f64 = 1920.0;
const FALLBACK_SCREEN_HEIGHT: f64 = 1080.0;

/// Parameters consumed by the transform itself, excluded from substitution.
const PSEUDO_PARAMS: &[&str] = &["relative", "screenWidth", "screenHeight"];

/// Raised when x/y cannot be coerced to numbers. Rendered as an inline
/// script diagnostic by the block compiler; never aborts sibling nodes.
#[derive(Debug, Error)]
#[error("invalid coordinates for {command}: {detail}")]
pub struct CoordError {
    pub command: String,
    pub detail: String,
}

/// Expand one pointer command into its screen-relative line sequence.
///
/// Returns unindented lines; the block compiler applies indentation.
pub fn expand_relative(
    cmd: &CommandDefinition,
    params: &HashMap<String, Value>,
) -> Result<Vec<String>, CoordError> {
    let x = coord_value(cmd, params, "x")?;
    let y = coord_value(cmd, params, "y")?;
    let width = screen_dimension(params, "screenWidth", FALLBACK_SCREEN_WIDTH);
    let height = screen_dimension(params, "screenHeight", FALLBACK_SCREEN_HEIGHT);

    let x_frac = x / width;
    let y_frac = y / height;

    // The command line reads the runtime variables, not the raw numbers.
    let mut runtime_params = params.clone();
    runtime_params.insert("x".to_string(), Value::String("%rx%".to_string()));
    runtime_params.insert("y".to_string(), Value::String("%ry%".to_string()));
    let command_line = substitute(&cmd.template, &cmd.parameters, &runtime_params, PSEUDO_PARAMS);

    let mut lines = vec![
        "CoordMode, Mouse, Screen".to_string(),
        format!("rx := (A_ScreenWidth * {:.4})", x_frac),
        format!("ry := (A_ScreenHeight * {:.4})", y_frac),
    ];
    lines.extend(command_line.split('\n').map(str::to_string));
    Ok(lines)
}

/// Authoring-time coordinate; absent means 0, non-numeric is an error.
fn coord_value(
    cmd: &CommandDefinition,
    params: &HashMap<String, Value>,
    name: &str,
) -> Result<f64, CoordError> {
    match params.get(name) {
        None => Ok(0.0),
        Some(value) => coerce_f64(value).ok_or_else(|| CoordError {
            command: cmd.id.clone(),
            detail: format!("parameter '{}' is not a number ({})", name, value),
        }),
    }
}

/// Authoring-time screen dimension; zero or non-numeric falls back, per
/// dimension, so the fraction computation never divides by zero.
fn screen_dimension(params: &HashMap<String, Value>, name: &str, fallback: f64) -> f64 {
    let dim = params.get(name).and_then(coerce_f64).unwrap_or(fallback);
    if dim.is_finite() && dim != 0.0 {
        dim
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use serde_json::json;

    fn params(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn test_half_screen_fractions() {
        let click = catalog().resolve("Click").unwrap();
        let lines = expand_relative(
            click,
            &params(&[
                ("x", json!(960)),
                ("y", json!(540)),
                ("screenWidth", json!(1920)),
                ("screenHeight", json!(1080)),
                ("button", json!("Left")),
            ]),
        )
        .unwrap();
        assert_eq!(
            lines,
            vec![
                "CoordMode, Mouse, Screen",
                "rx := (A_ScreenWidth * 0.5000)",
                "ry := (A_ScreenHeight * 0.5000)",
                "Click, %rx%, %ry%, Left",
            ]
        );
    }

    #[test]
    fn test_zero_screen_dimension_falls_back() {
        let mouse_move = catalog().resolve("MouseMove").unwrap();
        let lines = expand_relative(
            mouse_move,
            &params(&[
                ("x", json!(960)),
                ("y", json!(270)),
                ("screenWidth", json!(0)),
                ("screenHeight", json!("not a number")),
            ]),
        )
        .unwrap();
        // 960/1920 and 270/1080 via the 1920x1080 fallback
        assert_eq!(lines[1], "rx := (A_ScreenWidth * 0.5000)");
        assert_eq!(lines[2], "ry := (A_ScreenHeight * 0.2500)");
    }

    #[test]
    fn test_missing_coordinate_defaults_to_zero() {
        let click = catalog().resolve("Click").unwrap();
        let lines = expand_relative(click, &params(&[("button", json!("Right"))])).unwrap();
        assert_eq!(lines[1], "rx := (A_ScreenWidth * 0.0000)");
        assert_eq!(lines[3], "Click, %rx%, %ry%, Right");
    }

    #[test]
    fn test_non_numeric_coordinate_is_error() {
        let click = catalog().resolve("Click").unwrap();
        let err = expand_relative(click, &params(&[("x", json!("abc"))])).unwrap_err();
        assert_eq!(err.command, "Click");
        assert!(err.detail.contains("'x'"));
    }

    #[test]
    fn test_pseudo_params_never_emitted() {
        let click = catalog().resolve("Click").unwrap();
        let lines = expand_relative(
            click,
            &params(&[("x", json!(10)), ("y", json!(10)), ("relative", json!(true))]),
        )
        .unwrap();
        let joined = lines.join("\n");
        assert!(!joined.contains("relative"));
        assert!(!joined.contains("screenWidth"));
    }
}
