//! Serializable drawing actions.
//!
//! Every operation a user can trigger from the pointer or keyboard has an
//! [`Action`] counterpart, so a recorded script can drive a session exactly
//! like a front end would.

use super::events::{Key, MouseButton};
use super::modifiers::Modifiers;
use crate::tools::ToolKind;
use serde::{Deserialize, Serialize};

/// A single step applied to an [`InputState`](super::InputState).
///
/// Serialized with an `action` tag:
/// ```json
/// {"action": "select_tool", "tool": "line"}
/// {"action": "drag", "from": [10, 10], "to": [90, 40]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Pointer button pressed
    Press {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
    },
    /// Pointer moved (drag while a button is held)
    Motion { x: f64, y: f64 },
    /// Pointer button released
    Release {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
    },
    /// Press at `from`, `steps` evenly spaced motions ending at `to`, release at `to`
    Drag {
        from: [f64; 2],
        to: [f64; 2],
        #[serde(default = "default_drag_steps")]
        steps: u32,
    },
    /// Abandon the gesture in progress
    Cancel,
    SelectTool { tool: ToolKind },
    SetColor { color: String },
    SetBrushSize { size: i64 },
    IncreaseBrushSize,
    DecreaseBrushSize,
    SetBackground { color: String },
    Undo,
    Redo,
    /// Delete every item and record the empty canvas
    Clear,
}

fn default_drag_steps() -> u32 {
    1
}

impl Action {
    /// Maps a key press to its shortcut action.
    ///
    /// - `1`..`6`: select oval, square, star, line, circle, eraser
    /// - `+` / `-`: grow or shrink the brush
    /// - Ctrl+Z / Ctrl+Y: undo / redo
    /// - Ctrl+N: clear the canvas
    /// - Escape: cancel the current gesture
    pub fn for_key(key: Key, modifiers: Modifiers) -> Option<Action> {
        match key {
            Key::Escape => Some(Action::Cancel),
            Key::Char(c) if modifiers.ctrl => match c.to_ascii_lowercase() {
                'z' => Some(Action::Undo),
                'y' => Some(Action::Redo),
                'n' => Some(Action::Clear),
                _ => None,
            },
            Key::Char('+') | Key::Char('=') => Some(Action::IncreaseBrushSize),
            Key::Char('-') => Some(Action::DecreaseBrushSize),
            Key::Char(c) => ToolKind::from_shortcut(c).map(|tool| Action::SelectTool { tool }),
            _ => None,
        }
    }
}
