//! Input handling and tool state machine.
//!
//! This module translates pointer and keyboard events (or their scripted
//! [`Action`] equivalents) into tool calls on the canvas, and records a
//! history snapshot after each finished gesture.

pub mod action;
pub mod events;
pub mod modifiers;
pub mod script;
pub mod state;

pub use action::Action;
pub use events::{Key, MouseButton};
pub use modifiers::Modifiers;
pub use script::Script;
pub use state::{DrawingState, InputState};
