//! Generic input event types.

use serde::{Deserialize, Serialize};

/// Generic key representation.
///
/// Front ends map their native key codes to these values so shortcut
/// handling lives in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key
    Escape,
    /// Ctrl modifier
    Ctrl,
    /// Unmapped or unrecognized key
    Unknown,
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    /// Primary drawing button
    #[default]
    Left,
    /// Cancels the gesture in progress
    Right,
    /// Currently unused
    Middle,
}
