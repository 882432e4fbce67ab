//! Utility functions for colors and shape geometry.
//!
//! This module provides:
//! - Color name mapping used by settings validation and the config file
//! - Star polygon geometry
//! - Circle and brush bounding box calculations

use crate::draw::{Color, color::*};

// ============================================================================
// Star Geometry
// ============================================================================

/// Number of outer points on the star brush.
pub const STAR_POINTS: usize = 5;

/// Scale applied to both star radii.
pub const STAR_SCALE: f64 = 0.8;

/// Calculates the flattened vertex list of a star centred on `(cx, cy)`.
///
/// The star has `2 * STAR_POINTS` vertices alternating between an outer
/// radius of `2 * size` and an inner radius of `size`, both scaled by
/// [`STAR_SCALE`]. Vertex `i` sits at angle `i * π / STAR_POINTS`.
///
/// # Returns
/// `[x0, y0, x1, y1, ...]` suitable for a polygon item.
pub fn star_vertices(cx: f64, cy: f64, size: f64) -> Vec<f64> {
    let outer = size * 2.0;
    let inner = size;
    let step = std::f64::consts::PI / STAR_POINTS as f64;

    let mut coords = Vec::with_capacity(STAR_POINTS * 4);
    for i in 0..STAR_POINTS * 2 {
        let radius = if i % 2 == 0 { outer } else { inner };
        let angle = i as f64 * step;
        coords.push(cx + radius * STAR_SCALE * angle.cos());
        coords.push(cy + radius * STAR_SCALE * angle.sin());
    }
    coords
}

// ============================================================================
// Bounding Boxes
// ============================================================================

/// Square bounding box of half-width `size` centred on `(x, y)`.
pub fn centered_box(x: f64, y: f64, size: f64) -> [f64; 4] {
    [x - size, y - size, x + size, y + size]
}

/// Euclidean distance between two points.
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (x2 - x1).hypot(y2 - y1)
}

/// Bounding box of the circle centred on `(cx, cy)` passing through `(x, y)`.
///
/// # Returns
/// Tuple `(bounds, radius)` where `bounds` is `[x1, y1, x2, y2]`.
pub fn circle_bounds(cx: f64, cy: f64, x: f64, y: f64) -> ([f64; 4], f64) {
    let radius = distance(cx, cy, x, y);
    (centered_box(cx, cy, radius), radius)
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "white", "black"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (0.1 tolerance) and falls back to the hex form.
pub fn color_to_name(color: &Color) -> String {
    let name = if color.r > 0.9 && color.g < 0.1 && color.b < 0.1 {
        "Red"
    } else if color.r < 0.1 && color.g > 0.9 && color.b < 0.1 {
        "Green"
    } else if color.r < 0.1 && color.g < 0.1 && color.b > 0.9 {
        "Blue"
    } else if color.r > 0.9 && color.g > 0.9 && color.b > 0.9 {
        "White"
    } else if color.r < 0.1 && color.g < 0.1 && color.b < 0.1 {
        "Black"
    } else {
        return color.to_hex();
    };
    name.to_string()
}
