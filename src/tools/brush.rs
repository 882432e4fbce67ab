//! Stamp brushes: oval, square and star.

use super::{DrawTool, ToolKind};
use crate::draw::{Color, ItemId, ShapeStyle, Surface};
use crate::util;

/// Stamps a filled ellipse of half-width `size`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OvalBrush;

impl DrawTool for OvalBrush {
    fn name(&self) -> &'static str {
        ToolKind::Oval.label()
    }

    fn kind(&self) -> ToolKind {
        ToolKind::Oval
    }

    fn render(
        &mut self,
        surface: &mut dyn Surface,
        x: f64,
        y: f64,
        size: u32,
        color: Color,
    ) -> Option<ItemId> {
        let bounds = util::centered_box(x, y, size as f64);
        Some(surface.create_oval(bounds, ShapeStyle::solid(color)))
    }
}

/// Stamps a filled square of half-width `size`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquareBrush;

impl DrawTool for SquareBrush {
    fn name(&self) -> &'static str {
        ToolKind::Square.label()
    }

    fn kind(&self) -> ToolKind {
        ToolKind::Square
    }

    fn render(
        &mut self,
        surface: &mut dyn Surface,
        x: f64,
        y: f64,
        size: u32,
        color: Color,
    ) -> Option<ItemId> {
        let bounds = util::centered_box(x, y, size as f64);
        Some(surface.create_rectangle(bounds, ShapeStyle::solid(color)))
    }
}

/// Stamps a filled five-point star, see [`util::star_vertices`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StarBrush;

impl DrawTool for StarBrush {
    fn name(&self) -> &'static str {
        ToolKind::Star.label()
    }

    fn kind(&self) -> ToolKind {
        ToolKind::Star
    }

    fn render(
        &mut self,
        surface: &mut dyn Surface,
        x: f64,
        y: f64,
        size: u32,
        color: Color,
    ) -> Option<ItemId> {
        let coords = util::star_vertices(x, y, size as f64);
        Some(surface.create_polygon(coords, ShapeStyle::solid(color)))
    }
}
