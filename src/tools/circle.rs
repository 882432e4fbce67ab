//! Circle gesture tool.

use super::{DrawTool, GestureState, GestureTool, PREVIEW_DASH, PREVIEW_TAG, ToolKind};
use crate::draw::{Color, ItemId, ShapeDescriptor, ShapeKind, ShapeStyle, Surface};
use crate::util;
use log::debug;

/// Draws an unfilled circle centred on the press point through the release point.
#[derive(Debug, Clone, Default)]
pub struct CircleTool {
    state: GestureState,
}

impl CircleTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Centre of the gesture in progress.
    pub fn anchor(&self) -> Option<(f64, f64)> {
        self.state.anchor
    }
}

impl DrawTool for CircleTool {
    fn name(&self) -> &'static str {
        ToolKind::Circle.label()
    }

    fn kind(&self) -> ToolKind {
        ToolKind::Circle
    }

    fn render(
        &mut self,
        surface: &mut dyn Surface,
        x: f64,
        y: f64,
        size: u32,
        color: Color,
    ) -> Option<ItemId> {
        self.commit(surface, x, y, size, color)
    }
}

impl GestureTool for CircleTool {
    fn begin(&mut self, surface: &mut dyn Surface, x: f64, y: f64) {
        self.state.clear_preview(surface);
        self.state.anchor = Some((x, y));
    }

    fn preview(
        &mut self,
        surface: &mut dyn Surface,
        x: f64,
        y: f64,
        color: Color,
    ) -> Option<ItemId> {
        let (cx, cy) = self.state.anchor?;
        self.state.clear_preview(surface);

        let (bounds, _) = util::circle_bounds(cx, cy, x, y);
        let style = ShapeStyle::stroke(color, 1.0).dashed(&PREVIEW_DASH);
        let shape = ShapeDescriptor::new(ShapeKind::Oval, bounds.to_vec(), style);
        let id = surface.create_tagged(shape, PREVIEW_TAG);
        self.state.preview = Some(id);
        Some(id)
    }

    fn commit(
        &mut self,
        surface: &mut dyn Surface,
        x: f64,
        y: f64,
        size: u32,
        color: Color,
    ) -> Option<ItemId> {
        let (cx, cy) = self.state.anchor?;
        self.state.reset(surface);

        let (bounds, radius) = util::circle_bounds(cx, cy, x, y);
        if self.state.suppress_degenerate && radius == 0.0 {
            debug!("Skipping zero-radius circle at ({cx}, {cy})");
            return None;
        }

        Some(surface.create_oval(bounds, ShapeStyle::stroke(color, size as f64)))
    }

    fn cancel(&mut self, surface: &mut dyn Surface) {
        self.state.reset(surface);
    }

    fn is_active(&self) -> bool {
        self.state.anchor.is_some()
    }

    fn set_suppress_degenerate(&mut self, suppress: bool) {
        self.state.suppress_degenerate = suppress;
    }
}
