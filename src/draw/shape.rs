//! Shape descriptors recorded on the canvas and in history snapshots.

use super::color::Color;
use serde::{Deserialize, Serialize};

/// Primitive kind of a rendered item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Ellipse inscribed in the bounding box `[x1, y1, x2, y2]`
    Oval,
    /// Axis-aligned rectangle with corners `[x1, y1, x2, y2]`
    Rectangle,
    /// Open polyline through `[x1, y1, x2, y2, ...]`
    Line,
    /// Closed polygon through `[x1, y1, x2, y2, ...]`
    Polygon,
}

/// Visual options attached to a shape.
///
/// `outline` is the stroke color for every kind (lines included) and `fill`
/// is the interior color for closed kinds. An empty `dash` means solid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<Color>,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dash: Vec<f64>,
}

fn default_width() -> f64 {
    1.0
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: None,
            outline: None,
            width: default_width(),
            dash: Vec::new(),
        }
    }
}

impl ShapeStyle {
    /// Solid shape filled and outlined with the same color.
    pub fn solid(color: Color) -> Self {
        Self {
            fill: Some(color),
            outline: Some(color),
            ..Self::default()
        }
    }

    /// Unfilled stroke of the given color and width.
    pub fn stroke(color: Color, width: f64) -> Self {
        Self {
            outline: Some(color),
            width,
            ..Self::default()
        }
    }

    /// Returns the style with a dash pattern applied.
    pub fn dashed(mut self, pattern: &[f64]) -> Self {
        self.dash = pattern.to_vec();
        self
    }

    /// Reads a single option by key.
    pub fn get(&self, key: StyleKey) -> Option<StyleValue> {
        match key {
            StyleKey::Fill => self.fill.map(StyleValue::Color),
            StyleKey::Outline => self.outline.map(StyleValue::Color),
            StyleKey::Width => Some(StyleValue::Width(self.width)),
            StyleKey::Dash if self.dash.is_empty() => None,
            StyleKey::Dash => Some(StyleValue::Dash(self.dash.clone())),
        }
    }
}

/// Style option names a surface can be queried for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleKey {
    Fill,
    Outline,
    Width,
    Dash,
}

/// Value of a single style option.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    Color(Color),
    Width(f64),
    Dash(Vec<f64>),
}

/// A rendered item as recorded into canvas snapshots.
///
/// Descriptors are plain values: once captured by history they are never
/// mutated, only cloned back onto a surface during replay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    pub kind: ShapeKind,
    /// Flat coordinate list `[x1, y1, x2, y2, ...]`
    pub coords: Vec<f64>,
    #[serde(default)]
    pub style: ShapeStyle,
}

impl ShapeDescriptor {
    pub fn new(kind: ShapeKind, coords: Vec<f64>, style: ShapeStyle) -> Self {
        Self {
            kind,
            coords,
            style,
        }
    }

    /// Iterates the coordinate list as `(x, y)` pairs. A trailing odd value is ignored.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.coords.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    /// Number of `(x, y)` vertices.
    pub fn vertex_count(&self) -> usize {
        self.coords.len() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED};

    #[test]
    fn style_lookup_reports_missing_options() {
        let style = ShapeStyle::stroke(RED, 3.0);
        assert_eq!(style.get(StyleKey::Outline), Some(StyleValue::Color(RED)));
        assert_eq!(style.get(StyleKey::Fill), None);
        assert_eq!(style.get(StyleKey::Width), Some(StyleValue::Width(3.0)));
        assert_eq!(style.get(StyleKey::Dash), None);

        let dashed = style.dashed(&[4.0, 2.0]);
        assert_eq!(
            dashed.get(StyleKey::Dash),
            Some(StyleValue::Dash(vec![4.0, 2.0]))
        );
    }

    #[test]
    fn points_pairs_coordinates() {
        let shape = ShapeDescriptor::new(
            ShapeKind::Line,
            vec![0.0, 1.0, 2.0, 3.0, 4.0],
            ShapeStyle::solid(BLACK),
        );
        let points: Vec<_> = shape.points().collect();
        assert_eq!(points, vec![(0.0, 1.0), (2.0, 3.0)]);
        assert_eq!(shape.vertex_count(), 2);
    }

    #[test]
    fn descriptor_json_is_compact() {
        let shape = ShapeDescriptor::new(
            ShapeKind::Oval,
            vec![0.0, 0.0, 10.0, 10.0],
            ShapeStyle::stroke(BLACK, 2.0),
        );
        let json = serde_json::to_value(&shape).unwrap();
        assert_eq!(json["kind"], "oval");
        assert_eq!(json["style"]["outline"], "#000000");
        assert!(json["style"].get("fill").is_none());
        assert!(json["style"].get("dash").is_none());
    }
}
