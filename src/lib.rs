//! Shape-brush drawing core.
//!
//! Stamp and gesture tools draw onto a [`Surface`](draw::Surface), a bounded
//! history records snapshots of the canvas after each gesture, and the
//! finished canvas is exported as PNG (or PostScript as a fallback).

pub mod config;
pub mod draw;
pub mod export;
pub mod history;
pub mod input;
pub mod settings;
pub mod tools;
pub mod util;

pub use config::Config;
pub use input::InputState;
