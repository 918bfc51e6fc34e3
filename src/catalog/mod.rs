//! Command Catalog
//!
//! Single source of truth for every automation command the builder can emit.
//! The built-in library is authored as a category hierarchy (presentation
//! grouping for the frontend palette) and flattened at load time into one
//! id-indexed table used for resolution. Categories play no role in
//! compilation.
//!
//! The catalog is constructed once per process and never mutated afterwards,
//! so any number of concurrent compiles may read it without synchronization.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

mod builtin;

// =============================================================================
// TYPES
// =============================================================================

/// Parameter widget/value kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    Text,
    Textarea,
    Number,
    Select,
    Checkbox,
    Hidden,
}

/// One parameter accepted by a command.
///
/// Only `name` is consumed by the compiler; the remaining fields describe how
/// the frontend renders the input widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: ParamKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Drives the frontend's click-to-pick position button.
    #[serde(rename = "hasPicker", skip_serializing_if = "Option::is_none")]
    pub has_picker: Option<bool>,
}

impl ParameterSpec {
    fn new(name: &str, kind: ParamKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            label: None,
            placeholder: None,
            options: None,
            default: None,
            has_picker: None,
        }
    }

    pub fn text(name: &str, placeholder: &str) -> Self {
        let mut spec = Self::new(name, ParamKind::Text);
        spec.placeholder = Some(placeholder.to_string());
        spec
    }

    pub fn textarea(name: &str, placeholder: &str) -> Self {
        let mut spec = Self::new(name, ParamKind::Textarea);
        spec.placeholder = Some(placeholder.to_string());
        spec
    }

    pub fn number(name: &str, placeholder: &str) -> Self {
        let mut spec = Self::new(name, ParamKind::Number);
        spec.placeholder = Some(placeholder.to_string());
        spec
    }

    /// Number input with the position-picker button attached.
    pub fn picker_number(name: &str, label: &str) -> Self {
        let mut spec = Self::new(name, ParamKind::Number);
        spec.label = Some(label.to_string());
        spec.has_picker = Some(true);
        spec
    }

    pub fn select(name: &str, options: &[&str], default: &str) -> Self {
        let mut spec = Self::new(name, ParamKind::Select);
        spec.options = Some(options.iter().map(|o| o.to_string()).collect());
        spec.default = Some(Value::String(default.to_string()));
        spec
    }

    pub fn checkbox(name: &str, label: &str, default: bool) -> Self {
        let mut spec = Self::new(name, ParamKind::Checkbox);
        spec.label = Some(label.to_string());
        spec.default = Some(Value::Bool(default));
        spec
    }

    pub fn hidden(name: &str) -> Self {
        Self::new(name, ParamKind::Hidden)
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// One automation command: a template plus its parameter schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandDefinition {
    pub id: String,
    pub label: String,
    /// Line-oriented template; placeholders are parameter names prefixed
    /// with `&`. Container templates additionally carry `&children`.
    pub template: String,
    pub parameters: Vec<ParameterSpec>,
    #[serde(default)]
    pub is_container: bool,
    pub description: String,
}

impl CommandDefinition {
    fn new(id: &str, label: &str, template: &str, description: &str, parameters: Vec<ParameterSpec>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            template: template.to_string(),
            parameters,
            is_container: false,
            description: description.to_string(),
        }
    }

    fn container(id: &str, label: &str, template: &str, description: &str, parameters: Vec<ParameterSpec>) -> Self {
        let mut cmd = Self::new(id, label, template, description, parameters);
        cmd.is_container = true;
        cmd
    }

    /// Look up one of this command's parameters by name.
    pub fn param(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Pointer-positioning commands declare `x`, `y` and a `relative`
    /// checkbox; such commands are eligible for the screen-relative
    /// coordinate transform.
    pub fn has_relative_coords(&self) -> bool {
        self.param("relative").is_some() && self.param("x").is_some() && self.param("y").is_some()
    }
}

/// Presentation grouping for the frontend palette.
#[derive(Debug, Clone, Serialize)]
pub struct CommandCategory {
    pub name: String,
    pub commands: Vec<CommandDefinition>,
}

// =============================================================================
// CATALOG
// =============================================================================

/// The process-wide command catalog - singleton
static CATALOG: OnceLock<CommandCatalog> = OnceLock::new();

pub struct CommandCatalog {
    /// Category hierarchy, in authoring order
    categories: Vec<CommandCategory>,
    /// Flattened id index into `categories`
    index: HashMap<String, (usize, usize)>,
}

impl CommandCatalog {
    /// Get the global catalog instance
    pub fn global() -> &'static CommandCatalog {
        CATALOG.get_or_init(Self::build)
    }

    /// Flatten the built-in category hierarchy into the id index
    fn build() -> Self {
        let categories = builtin::builtin_categories();
        let mut index = HashMap::new();

        for (cat_idx, category) in categories.iter().enumerate() {
            for (cmd_idx, command) in category.commands.iter().enumerate() {
                if index.insert(command.id.clone(), (cat_idx, cmd_idx)).is_some() {
                    warn!("duplicate command id '{}' in built-in library", command.id);
                }
            }
        }

        debug!("command catalog built: {} commands", index.len());
        Self { categories, index }
    }

    /// Resolve a command by id
    pub fn resolve(&self, id: &str) -> Option<&CommandDefinition> {
        let (cat_idx, cmd_idx) = *self.index.get(id)?;
        Some(&self.categories[cat_idx].commands[cmd_idx])
    }

    /// Category hierarchy, for the frontend palette
    pub fn categories(&self) -> &[CommandCategory] {
        &self.categories
    }

    /// All commands, in no particular order
    pub fn all_commands(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.categories.iter().flat_map(|c| c.commands.iter())
    }

    /// Total command count
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Get the global catalog (convenience function)
pub fn catalog() -> &'static CommandCatalog {
    CommandCatalog::global()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        let catalog = CommandCatalog::global();
        assert!(!catalog.is_empty(), "catalog should have commands");
    }

    #[test]
    fn test_resolve_known_command() {
        let sleep = catalog().resolve("Sleep");
        assert!(sleep.is_some());
        assert_eq!(sleep.unwrap().template, "Sleep, &Delay");
    }

    #[test]
    fn test_resolve_unknown_command() {
        assert!(catalog().resolve("DoesNotExist").is_none());
    }

    #[test]
    fn test_every_category_command_resolves() {
        let catalog = catalog();
        for category in catalog.categories() {
            for command in &category.commands {
                assert!(
                    catalog.resolve(&command.id).is_some(),
                    "{} should resolve after flattening",
                    command.id
                );
            }
        }
    }

    #[test]
    fn test_containers_flagged() {
        for id in ["Loop", "If", "While"] {
            let cmd = catalog().resolve(id).unwrap();
            assert!(cmd.is_container, "{} should be a container", id);
            assert!(cmd.template.contains("&children"));
        }
        assert!(!catalog().resolve("Sleep").unwrap().is_container);
    }

    #[test]
    fn test_relative_coords_capability() {
        assert!(catalog().resolve("Click").unwrap().has_relative_coords());
        assert!(catalog().resolve("MouseMove").unwrap().has_relative_coords());
        assert!(!catalog().resolve("MouseGetPos").unwrap().has_relative_coords());
        assert!(!catalog().resolve("Sleep").unwrap().has_relative_coords());
    }
}
