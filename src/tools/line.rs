//! Straight line gesture tool.

use super::{DrawTool, GestureState, GestureTool, PREVIEW_DASH, PREVIEW_TAG, ToolKind};
use crate::draw::{Color, ItemId, ShapeDescriptor, ShapeKind, ShapeStyle, Surface};
use log::debug;

/// Width of the dashed preview line.
const PREVIEW_WIDTH: f64 = 2.0;

/// Draws a segment from the press point to the release point.
#[derive(Debug, Clone, Default)]
pub struct LineTool {
    state: GestureState,
}

impl LineTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Press point of the gesture in progress.
    pub fn anchor(&self) -> Option<(f64, f64)> {
        self.state.anchor
    }
}

impl DrawTool for LineTool {
    fn name(&self) -> &'static str {
        ToolKind::Line.label()
    }

    fn kind(&self) -> ToolKind {
        ToolKind::Line
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

impl GestureTool for LineTool {
    fn begin(&mut self, surface: &mut dyn Surface, x: f64, y: f64) {
        // A stray preview from an unfinished gesture must not outlive it.
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
        let (ax, ay) = self.state.anchor?;
        self.state.clear_preview(surface);

        let style = ShapeStyle::stroke(color, PREVIEW_WIDTH).dashed(&PREVIEW_DASH);
        let shape = ShapeDescriptor::new(ShapeKind::Line, vec![ax, ay, x, y], style);
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
        let (ax, ay) = self.state.anchor?;
        self.state.reset(surface);

        if self.state.suppress_degenerate && ax == x && ay == y {
            debug!("Skipping zero-length line at ({x}, {y})");
            return None;
        }

        Some(surface.create_line(vec![ax, ay, x, y], ShapeStyle::stroke(color, size as f64)))
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Canvas, RED, StyleKey, StyleValue};

    #[test]
    fn commit_without_begin_is_noop() {
        let mut canvas = Canvas::default();
        let mut tool = LineTool::new();
        assert_eq!(tool.commit(&mut canvas, 10.0, 10.0, 3, RED), None);
        assert!(canvas.is_empty());
        assert_eq!(tool.render(&mut canvas, 10.0, 10.0, 3, RED), None);
        assert!(canvas.is_empty());
    }

    #[test]
    fn preview_without_begin_is_noop() {
        let mut canvas = Canvas::default();
        let mut tool = LineTool::new();
        assert_eq!(tool.preview(&mut canvas, 10.0, 10.0, RED), None);
        assert!(canvas.is_empty());
    }

    #[test]
    fn preview_replaces_previous_preview() {
        let mut canvas = Canvas::default();
        let mut tool = LineTool::new();
        tool.begin(&mut canvas, 0.0, 0.0);

        let first = tool.preview(&mut canvas, 5.0, 5.0, RED).unwrap();
        let second = tool.preview(&mut canvas, 8.0, 2.0, RED).unwrap();
        assert_eq!(canvas.find_all(), vec![second]);
        assert!(canvas.item(first).is_none());
        assert_eq!(canvas.coords(second).unwrap(), &[0.0, 0.0, 8.0, 2.0]);
        assert_eq!(
            canvas.item_style(second, StyleKey::Dash),
            Some(StyleValue::Dash(PREVIEW_DASH.to_vec()))
        );
        assert_eq!(canvas.tag(second), Some(PREVIEW_TAG));
    }

    #[test]
    fn commit_replaces_preview_with_final_line() {
        let mut canvas = Canvas::default();
        let mut tool = LineTool::new();
        tool.begin(&mut canvas, 1.0, 2.0);
        tool.preview(&mut canvas, 3.0, 4.0, RED);

        let id = tool.commit(&mut canvas, 30.0, 40.0, 6, RED).unwrap();
        assert_eq!(canvas.find_all(), vec![id]);
        assert_eq!(canvas.coords(id).unwrap(), &[1.0, 2.0, 30.0, 40.0]);
        assert_eq!(
            canvas.item_style(id, StyleKey::Width),
            Some(StyleValue::Width(6.0))
        );
        assert_eq!(canvas.item_style(id, StyleKey::Dash), None);
        assert!(!tool.is_active());

        // Anchor is consumed by the commit.
        assert_eq!(tool.commit(&mut canvas, 0.0, 0.0, 6, RED), None);
    }

    #[test]
    fn zero_length_line_is_recorded_by_default() {
        let mut canvas = Canvas::default();
        let mut tool = LineTool::new();
        tool.begin(&mut canvas, 5.0, 5.0);
        assert!(tool.commit(&mut canvas, 5.0, 5.0, 2, RED).is_some());
    }

    #[test]
    fn zero_length_line_can_be_suppressed() {
        let mut canvas = Canvas::default();
        let mut tool = LineTool::new();
        tool.set_suppress_degenerate(true);
        tool.begin(&mut canvas, 5.0, 5.0);
        tool.preview(&mut canvas, 5.0, 5.0, RED);
        assert_eq!(tool.commit(&mut canvas, 5.0, 5.0, 2, RED), None);
        assert!(canvas.is_empty());
        assert!(!tool.is_active());
    }
}
