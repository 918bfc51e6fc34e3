//! Block compiler
//!
//! Recursively walks an ordered action tree and produces indented script
//! text. Every per-node failure (unknown command, bad coordinate input) is
//! replaced by a single inline diagnostic comment so the surrounding block
//! still closes and sibling nodes still compile.

use tracing::debug;

use crate::catalog::CommandCatalog;
use crate::script::ActionNode;

use super::coords::expand_relative;
use super::substitute::{coerce_bool, substitute};

/// One nesting level of indentation.
pub const INDENT_UNIT: &str = "    ";

/// Placeholder a container template carries for its compiled children.
const CHILDREN_TOKEN: &str = "&children";

/// Compile an ordered action list into script text at the given nesting
/// level. Pure: the only output is the returned text.
pub fn compile_block(actions: &[ActionNode], indent_level: usize) -> String {
    let catalog = CommandCatalog::global();
    let indent = INDENT_UNIT.repeat(indent_level);
    let mut lines: Vec<String> = Vec::new();

    for node in actions {
        let Some(cmd) = catalog.resolve(&node.command_id) else {
            debug!("unknown command id '{}', emitting diagnostic", node.command_id);
            lines.push(format!("{}; Error: unknown command '{}'", indent, node.command_id));
            continue;
        };

        // Screen-relative pointer commands get the coordinate pre-pass.
        if cmd.has_relative_coords() && coerce_bool(node.params.get("relative")) {
            match expand_relative(cmd, &node.params) {
                Ok(body) => {
                    for line in body {
                        lines.push(format!("{}{}", indent, line));
                    }
                }
                Err(err) => lines.push(format!("{}; Error: {}", indent, err)),
            }
            continue;
        }

        let rendered = substitute(&cmd.template, &cmd.parameters, &node.params, &[]);

        // Children are only meaningful for containers; otherwise dropped.
        let children = if cmd.is_container {
            compile_block(&node.children, indent_level + 1)
        } else {
            String::new()
        };

        for line in rendered.split('\n') {
            if cmd.is_container && line.trim() == CHILDREN_TOKEN {
                // The child block carries its own deeper indentation.
                if !children.is_empty() {
                    lines.push(children.clone());
                }
            } else {
                lines.push(format!("{}{}", indent, line));
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn nodes(value: serde_json::Value) -> Vec<ActionNode> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_unknown_command_diagnostic_and_siblings_survive() {
        let out = compile_block(
            &nodes(json!([
                {"command_id": "Bogus", "params": {}},
                {"command_id": "Sleep", "params": {"Delay": 250}}
            ])),
            1,
        );
        assert_eq!(out, "    ; Error: unknown command 'Bogus'\n    Sleep, 250");
    }

    #[test]
    fn test_container_body_indents_one_level_deeper() {
        let out = compile_block(
            &nodes(json!([{
                "command_id": "Loop",
                "params": {"Count": 3},
                "children": [{"command_id": "MsgBox", "params": {"Text": "Hi"}}]
            }])),
            1,
        );
        assert_eq!(out, "    Loop, 3\n    {\n        MsgBox, Hi\n    }");
    }

    #[test]
    fn test_nested_containers_indent_two_levels() {
        let out = compile_block(
            &nodes(json!([{
                "command_id": "While",
                "params": {"Condition": "x < 5"},
                "children": [{
                    "command_id": "If",
                    "params": {"Condition": "y > 0"},
                    "children": [{"command_id": "Send", "params": {"keys": "a"}}]
                }]
            }])),
            1,
        );
        assert_eq!(
            out,
            "    While (x < 5)\n    {\n        If (y > 0)\n        {\n            Send, a\n        }\n    }"
        );
    }

    #[test]
    fn test_empty_container_still_closes() {
        let out = compile_block(&nodes(json!([{"command_id": "Loop", "params": {"Count": 2}}])), 1);
        assert_eq!(out, "    Loop, 2\n    {\n    }");
    }

    #[test]
    fn test_non_container_children_silently_dropped() {
        let out = compile_block(
            &nodes(json!([{
                "command_id": "Sleep",
                "params": {"Delay": 100},
                "children": [{"command_id": "MsgBox", "params": {"Text": "never"}}]
            }])),
            1,
        );
        assert_eq!(out, "    Sleep, 100");
    }

    #[test]
    fn test_coordinate_error_isolated_to_node() {
        let out = compile_block(
            &nodes(json!([
                {"command_id": "Click", "params": {"relative": true, "x": "oops", "y": 10}},
                {"command_id": "Sleep", "params": {"Delay": 50}}
            ])),
            1,
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("    ; Error: invalid coordinates for Click"));
        assert_eq!(lines[1], "    Sleep, 50");
    }

    #[test]
    fn test_relative_flag_off_uses_plain_substitution() {
        let out = compile_block(
            &nodes(json!([{
                "command_id": "Click",
                "params": {"relative": false, "x": 10, "y": 20, "button": "Left"}
            }])),
            1,
        );
        assert_eq!(out, "    Click, 10, 20, Left");
    }

    #[test]
    fn test_multiline_leaf_template_indented_uniformly() {
        let out = compile_block(
            &nodes(json!([{
                "command_id": "Hotkey",
                "params": {"key": "^j", "code": "Send, hello"}
            }])),
            1,
        );
        assert_eq!(out, "    ^j::\n        Send, hello\n    Return");
    }
}
