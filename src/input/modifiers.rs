//! Keyboard modifier state tracking.

use super::events::Key;

/// Keyboard modifier state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Ctrl key pressed
    pub ctrl: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the tracked state for a modifier key.
    ///
    /// Returns `true` when `key` is a modifier and was consumed.
    pub fn update(&mut self, key: Key, pressed: bool) -> bool {
        match key {
            Key::Ctrl => {
                self.ctrl = pressed;
                true
            }
            _ => false,
        }
    }
}
