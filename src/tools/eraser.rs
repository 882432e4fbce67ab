//! Eraser: overpaints with the surface background.

use super::{DrawTool, ToolKind};
use crate::draw::{Color, ItemId, ShapeStyle, Surface};
use crate::util;

/// Square stamp in the surface's background color.
///
/// Erasing is simulated by overpainting, so erased regions are ordinary
/// items in history. The requested stroke color is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct EraserTool;

impl DrawTool for EraserTool {
    fn name(&self) -> &'static str {
        ToolKind::Eraser.label()
    }

    fn kind(&self) -> ToolKind {
        ToolKind::Eraser
    }

    fn render(
        &mut self,
        surface: &mut dyn Surface,
        x: f64,
        y: f64,
        size: u32,
        _color: Color,
    ) -> Option<ItemId> {
        let background = surface.background();
        let bounds = util::centered_box(x, y, size as f64);
        Some(surface.create_rectangle(bounds, ShapeStyle::solid(background)))
    }
}
