//! Built-in command library
//!
//! The authoring-time catalog of AutoHotkey v1 primitives the builder exposes.
//! Grouping is presentation metadata for the frontend palette; resolution goes
//! through the flattened index in the parent module.

use super::{CommandCategory, CommandDefinition, ParameterSpec};

pub(super) fn builtin_categories() -> Vec<CommandCategory> {
    vec![
        CommandCategory {
            name: "Hotkeys & Triggers".to_string(),
            commands: vec![
                CommandDefinition::new(
                    "Hotkey",
                    "Define Hotkey",
                    "&key::\n    &code\nReturn",
                    "Binds a key combination to a block of code.",
                    vec![
                        ParameterSpec::text("key", "Key (e.g. ^j, F1)"),
                        ParameterSpec::textarea("code", "Code to run"),
                    ],
                ),
                CommandDefinition::new(
                    "Hotstring",
                    "Define Hotstring",
                    "::&abbrev::&replacement",
                    "Replaces typed text with an expansion.",
                    vec![
                        ParameterSpec::text("abbrev", "Abbreviation (e.g. btw)"),
                        ParameterSpec::text("replacement", "Expanded text"),
                    ],
                ),
            ],
        },
        CommandCategory {
            name: "Mouse & Click".to_string(),
            commands: vec![
                CommandDefinition::new(
                    "Click",
                    "Click",
                    "Click, &x, &y, &button",
                    "Clicks at a specific position.",
                    vec![
                        ParameterSpec::picker_number("x", "X"),
                        ParameterSpec::picker_number("y", "Y"),
                        ParameterSpec::select("button", &["Left", "Right", "Middle"], "Left"),
                        ParameterSpec::checkbox("relative", "Relative to screen", true),
                        ParameterSpec::hidden("screenWidth"),
                        ParameterSpec::hidden("screenHeight"),
                    ],
                ),
                CommandDefinition::new(
                    "MouseMove",
                    "Move Mouse (MouseMove)",
                    "MouseMove, &x, &y",
                    "Moves the cursor to the X and Y coordinates.",
                    vec![
                        ParameterSpec::picker_number("x", "X"),
                        ParameterSpec::picker_number("y", "Y"),
                        ParameterSpec::checkbox("relative", "Relative to screen", true),
                        ParameterSpec::hidden("screenWidth"),
                        ParameterSpec::hidden("screenHeight"),
                    ],
                ),
                CommandDefinition::new(
                    "MouseGetPos",
                    "Get Position (MouseGetPos)",
                    "MouseGetPos, &OutputVarX, &OutputVarY",
                    "Stores the current mouse position in variables.",
                    vec![
                        ParameterSpec::text("OutputVarX", "Variable for X").with_default("PosX"),
                        ParameterSpec::text("OutputVarY", "Variable for Y").with_default("PosY"),
                    ],
                ),
            ],
        },
        CommandCategory {
            name: "Keyboard & Text".to_string(),
            commands: vec![
                CommandDefinition::new(
                    "Send",
                    "Send Keys (Send)",
                    "Send, &keys",
                    "Sends simulated keystrokes and mouse clicks.",
                    vec![ParameterSpec::text("keys", "Text or keys (e.g. {Enter})")],
                ),
                CommandDefinition::new(
                    "SendInput",
                    "Send Fast (SendInput)",
                    "SendInput, &keys",
                    "Faster and more reliable than plain Send.",
                    vec![ParameterSpec::text("keys", "Text or keys")],
                ),
            ],
        },
        CommandCategory {
            name: "Windows".to_string(),
            commands: vec![
                CommandDefinition::new(
                    "Run",
                    "Run Program (Run)",
                    "Run, &Target",
                    "Runs a program, document or URL.",
                    vec![ParameterSpec::text("Target", "File path, URL or command")],
                ),
                CommandDefinition::new(
                    "WinActivate",
                    "Activate Window (WinActivate)",
                    "WinActivate, &WinTitle",
                    "Activates the specified window.",
                    vec![ParameterSpec::text("WinTitle", "Window title")],
                ),
                CommandDefinition::new(
                    "WinWait",
                    "Wait for Window (WinWait)",
                    "WinWait, &WinTitle, , &Seconds",
                    "Waits until the window exists.",
                    vec![
                        ParameterSpec::text("WinTitle", "Window title"),
                        ParameterSpec::number("Seconds", "Timeout (seconds)"),
                    ],
                ),
                CommandDefinition::new(
                    "WinClose",
                    "Close Window (WinClose)",
                    "WinClose, &WinTitle",
                    "Closes the specified window.",
                    vec![ParameterSpec::text("WinTitle", "Window title")],
                ),
            ],
        },
        CommandCategory {
            name: "Flow Control".to_string(),
            commands: vec![
                CommandDefinition::new(
                    "Sleep",
                    "Pause (Sleep)",
                    "Sleep, &Delay",
                    "Waits the given time before continuing.",
                    vec![ParameterSpec::number("Delay", "Milliseconds (1000 = 1s)")],
                ),
                CommandDefinition::new(
                    "MsgBox",
                    "Message Box (MsgBox)",
                    "MsgBox, &Text",
                    "Shows a simple message box.",
                    vec![ParameterSpec::text("Text", "Message to display")],
                ),
                CommandDefinition::container(
                    "Loop",
                    "Loop",
                    "Loop, &Count\n{\n&children\n}",
                    "Repeats a block of code.",
                    vec![ParameterSpec::number("Count", "Repetitions (empty for infinite)")],
                ),
                CommandDefinition::container(
                    "If",
                    "Conditional (If)",
                    "If (&Condition)\n{\n&children\n}",
                    "Runs the block when the condition holds.",
                    vec![ParameterSpec::text("Condition", "e.g. x > 100")],
                ),
                CommandDefinition::container(
                    "While",
                    "While",
                    "While (&Condition)\n{\n&children\n}",
                    "Repeats the block while the condition holds.",
                    vec![ParameterSpec::text("Condition", "e.g. x < 500")],
                ),
            ],
        },
    ]
}
