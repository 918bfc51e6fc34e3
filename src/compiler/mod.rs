//! The macro compiler
//!
//! ## Pipeline
//!
//! ```text
//! Vec<MacroDef>
//!     ↓ assemble_script()        banner + per-macro framing
//! compile_block(actions, 1)      recursive tree walk
//!     ↓ per node
//! catalog resolve → substitution (or relative-coordinate transform)
//!     ↓
//! indented script text
//! ```
//!
//! The whole pipeline is pure and synchronous: given an action tree and the
//! immutable catalog it produces text, with no I/O and nothing fatal — every
//! per-node failure becomes an inline diagnostic comment.

pub mod block;
pub mod coords;
pub mod substitute;

pub use block::compile_block;
pub use substitute::substitute;

use crate::script::MacroDef;

/// Comment line opening every generated script.
pub const SCRIPT_BANNER: &str = "; Generated by AHK Forge";

/// Assemble the complete script: banner, then per macro a trigger header,
/// the compiled body at one indent level, and a `Return` terminator.
///
/// Macros with an empty hotkey are skipped entirely. Input order is
/// preserved; duplicate triggers pass through unchanged.
pub fn assemble_script(macros: &[MacroDef]) -> String {
    let mut script = format!("{}\n\n", SCRIPT_BANNER);

    for mac in macros {
        if mac.hotkey.is_empty() {
            continue;
        }
        script.push_str(&mac.hotkey);
        script.push_str("::\n");
        script.push_str(&compile_block(&mac.actions, 1));
        script.push_str("\nReturn\n\n");
    }

    script
}
