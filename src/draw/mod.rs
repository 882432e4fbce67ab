//! Shape descriptors, the drawing surface contract and Cairo rendering.
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with hex parsing and constants
//! - [`ShapeDescriptor`]: one rendered item (kind, coordinates, style)
//! - [`Surface`]: the create/delete/inspect contract tools and history use
//! - [`Canvas`]: the in-memory surface
//! - Rendering functions for Cairo-based output

pub mod canvas;
pub mod color;
pub mod render;
pub mod shape;

// Re-export commonly used types at module level
pub use canvas::{Canvas, ItemId, Surface};
pub use color::Color;
pub use render::{render_background, render_shape, render_shapes};
pub use shape::{ShapeDescriptor, ShapeKind, ShapeStyle, StyleKey, StyleValue};

pub use color::{BLACK, BLUE, GREEN, RED, WHITE};
