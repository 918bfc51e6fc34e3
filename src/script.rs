//! Wire data model shared with the builder frontend
//!
//! These shapes mirror the JSON the frontend sends: a list of macros, each
//! with a `hotkey` trigger and an ordered tree of actions. Unknown fields
//! (the frontend attaches client-side ids and layout state) are ignored.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One step in a macro: a command reference plus its parameter values and,
/// for container commands, nested child steps.
///
/// `command_id` is not guaranteed to resolve against the catalog; unresolved
/// ids degrade to an inline diagnostic at compile time. `children` is only
/// meaningful when the resolved command is a container and is silently
/// dropped otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionNode {
    pub command_id: String,

    #[serde(default)]
    pub params: HashMap<String, Value>,

    #[serde(default)]
    pub children: Vec<ActionNode>,
}

/// One macro: an activation trigger plus its top-level action list.
///
/// A macro with an empty `hotkey` contributes nothing to the assembled
/// script; that is a skip, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MacroDef {
    pub hotkey: String,

    #[serde(default)]
    pub actions: Vec<ActionNode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_extra_fields_ignored() {
        let node: ActionNode = serde_json::from_value(serde_json::json!({
            "id": "client-side-uuid",
            "command_id": "Sleep",
            "params": {"Delay": 500}
        }))
        .unwrap();
        assert_eq!(node.command_id, "Sleep");
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_missing_actions_default_empty() {
        let mac: MacroDef = serde_json::from_value(serde_json::json!({"hotkey": "F2"})).unwrap();
        assert!(mac.actions.is_empty());
    }
}
