//! AHK Forge - visual macro builder backend
//!
//! Compiles trees of named actions into AutoHotkey v1 scripts. The core is a
//! pure, synchronous compiler over an immutable command catalog:
//!
//! Catalog lookup -> parameter substitution -> block compilation -> script assembly
//!
//! Around the core sits thin I/O glue: an optional REST API (feature `server`)
//! serving the builder frontend, a runner that persists generated scripts and
//! launches the AutoHotkey interpreter, and a pluggable position picker.
//!
//! ## Quick Start
//!
//! ```rust
//! use ahk_forge::compiler::assemble_script;
//! use ahk_forge::script::MacroDef;
//!
//! let macros: Vec<MacroDef> = serde_json::from_value(serde_json::json!([
//!     {"hotkey": "F1", "actions": [
//!         {"command_id": "Sleep", "params": {"Delay": 1000}, "children": []}
//!     ]}
//! ])).unwrap();
//!
//! let script = assemble_script(&macros);
//! assert!(script.contains("F1::"));
//! assert!(script.contains("    Sleep, 1000"));
//! ```

// Core error handling
pub mod error;

// Immutable command catalog (registry)
pub mod catalog;

// Wire data model shared with the frontend
pub mod script;

// The macro compiler: substitution, coordinate transform, block compiler,
// script assembler
pub mod compiler;

// Script persistence + interpreter launch
pub mod runner;

// Blocking coordinate-picker collaborator
pub mod picker;

// REST API (when enabled)
#[cfg(feature = "server")]
pub mod api;

pub use catalog::CommandCatalog;
pub use compiler::assemble_script;
pub use error::ForgeError;
