//! Drawing tools.
//!
//! Every tool implements [`DrawTool`]: given a surface, a point, a brush size
//! and a color it renders one item and returns its handle. Line and circle
//! additionally implement [`GestureTool`], a press/drag/release protocol with a
//! live dashed preview. [`Tool`] is the closed set of variants; callers reach
//! the gesture capability through [`Tool::as_gesture_mut`] instead of probing.

mod brush;
mod circle;
mod eraser;
mod line;

pub use brush::{OvalBrush, SquareBrush, StarBrush};
pub use circle::CircleTool;
pub use eraser::EraserTool;
pub use line::LineTool;

use crate::draw::{Color, ItemId, Surface};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag attached to preview items so they can be swept in one call.
pub const PREVIEW_TAG: &str = "preview";

/// Dash pattern used for previews.
pub const PREVIEW_DASH: [f64; 2] = [4.0, 2.0];

/// Shared rendering contract.
pub trait DrawTool {
    /// Human-readable tool name shown in status text.
    fn name(&self) -> &'static str;

    fn kind(&self) -> ToolKind;

    /// Renders one item at `(x, y)`.
    ///
    /// Stamp tools always return a handle. Gesture tools treat this as
    /// [`GestureTool::commit`] and return `None` without an anchor.
    fn render(
        &mut self,
        surface: &mut dyn Surface,
        x: f64,
        y: f64,
        size: u32,
        color: Color,
    ) -> Option<ItemId>;
}

/// Two-phase press/drag/release capability.
pub trait GestureTool: DrawTool {
    /// Records the anchor point.
    fn begin(&mut self, surface: &mut dyn Surface, x: f64, y: f64);

    /// Replaces the previous preview with a dashed one ending at `(x, y)`.
    fn preview(&mut self, surface: &mut dyn Surface, x: f64, y: f64, color: Color)
    -> Option<ItemId>;

    /// Removes the preview, renders the final shape and clears the anchor.
    fn commit(
        &mut self,
        surface: &mut dyn Surface,
        x: f64,
        y: f64,
        size: u32,
        color: Color,
    ) -> Option<ItemId>;

    /// Drops the anchor and any preview without rendering.
    fn cancel(&mut self, surface: &mut dyn Surface);

    /// True between `begin` and `commit`/`cancel`.
    fn is_active(&self) -> bool;

    /// Skip zero-length / zero-radius results on commit.
    fn set_suppress_degenerate(&mut self, suppress: bool);
}

/// Anchor and preview bookkeeping shared by the gesture tools.
#[derive(Debug, Clone, Default)]
struct GestureState {
    anchor: Option<(f64, f64)>,
    preview: Option<ItemId>,
    suppress_degenerate: bool,
}

impl GestureState {
    fn clear_preview(&mut self, surface: &mut dyn Surface) {
        if let Some(id) = self.preview.take() {
            surface.delete(id);
        }
    }

    fn reset(&mut self, surface: &mut dyn Surface) {
        self.clear_preview(surface);
        self.anchor = None;
    }
}

/// Tool selection.
///
/// Digit shortcuts follow the toolbar order: 1 oval ... 6 eraser.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    /// Filled ellipse stamp
    Oval,
    /// Filled square stamp
    Square,
    /// Filled five-point star stamp
    Star,
    /// Straight line from press to release
    Line,
    /// Circle centred on the press point through the release point
    Circle,
    /// Square stamp in the background color
    Eraser,
}

impl ToolKind {
    pub const ALL: [ToolKind; 6] = [
        ToolKind::Oval,
        ToolKind::Square,
        ToolKind::Star,
        ToolKind::Line,
        ToolKind::Circle,
        ToolKind::Eraser,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            ToolKind::Oval => "Oval Brush",
            ToolKind::Square => "Square Brush",
            ToolKind::Star => "Star Brush",
            ToolKind::Line => "Line Tool",
            ToolKind::Circle => "Circle Tool",
            ToolKind::Eraser => "Eraser",
        }
    }

    /// Maps a digit key to a tool.
    pub fn from_shortcut(key: char) -> Option<Self> {
        let index = key.to_digit(10)?.checked_sub(1)? as usize;
        Self::ALL.get(index).copied()
    }

    pub fn shortcut(self) -> char {
        match self {
            ToolKind::Oval => '1',
            ToolKind::Square => '2',
            ToolKind::Star => '3',
            ToolKind::Line => '4',
            ToolKind::Circle => '5',
            ToolKind::Eraser => '6',
        }
    }

    /// Whether the tool uses the press/drag/release protocol.
    pub fn is_gesture(self) -> bool {
        matches!(self, ToolKind::Line | ToolKind::Circle)
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// All tool variants.
#[derive(Debug, Clone)]
pub enum Tool {
    Oval(OvalBrush),
    Square(SquareBrush),
    Star(StarBrush),
    Line(LineTool),
    Circle(CircleTool),
    Eraser(EraserTool),
}

impl Tool {
    /// Fresh instance of the given kind.
    pub fn new(kind: ToolKind) -> Self {
        match kind {
            ToolKind::Oval => Tool::Oval(OvalBrush),
            ToolKind::Square => Tool::Square(SquareBrush),
            ToolKind::Star => Tool::Star(StarBrush),
            ToolKind::Line => Tool::Line(LineTool::new()),
            ToolKind::Circle => Tool::Circle(CircleTool::new()),
            ToolKind::Eraser => Tool::Eraser(EraserTool),
        }
    }

    pub fn as_gesture_mut(&mut self) -> Option<&mut dyn GestureTool> {
        match self {
            Tool::Line(tool) => Some(tool),
            Tool::Circle(tool) => Some(tool),
            _ => None,
        }
    }

    pub fn as_gesture(&self) -> Option<&dyn GestureTool> {
        match self {
            Tool::Line(tool) => Some(tool),
            Tool::Circle(tool) => Some(tool),
            _ => None,
        }
    }

    fn as_draw_mut(&mut self) -> &mut dyn DrawTool {
        match self {
            Tool::Oval(tool) => tool,
            Tool::Square(tool) => tool,
            Tool::Star(tool) => tool,
            Tool::Line(tool) => tool,
            Tool::Circle(tool) => tool,
            Tool::Eraser(tool) => tool,
        }
    }
}

impl DrawTool for Tool {
    fn name(&self) -> &'static str {
        self.kind().label()
    }

    fn kind(&self) -> ToolKind {
        match self {
            Tool::Oval(_) => ToolKind::Oval,
            Tool::Square(_) => ToolKind::Square,
            Tool::Star(_) => ToolKind::Star,
            Tool::Line(_) => ToolKind::Line,
            Tool::Circle(_) => ToolKind::Circle,
            Tool::Eraser(_) => ToolKind::Eraser,
        }
    }

    fn render(
        &mut self,
        surface: &mut dyn Surface,
        x: f64,
        y: f64,
        size: u32,
        color: Color,
    ) -> Option<ItemId> {
        self.as_draw_mut().render(surface, x, y, size, color)
    }
}

/// Owns one instance of every tool and tracks which one is active.
///
/// Instances live for the whole session so a gesture tool's anchor survives
/// between events.
#[derive(Debug, Clone)]
pub struct ToolBox {
    tools: Vec<Tool>,
    active: ToolKind,
}

impl Default for ToolBox {
    fn default() -> Self {
        Self::new(ToolKind::Oval)
    }
}

impl ToolBox {
    pub fn new(active: ToolKind) -> Self {
        Self {
            tools: ToolKind::ALL.into_iter().map(Tool::new).collect(),
            active,
        }
    }

    pub fn active_kind(&self) -> ToolKind {
        self.active
    }

    pub fn active(&self) -> &Tool {
        self.get(self.active)
    }

    pub fn active_mut(&mut self) -> &mut Tool {
        self.get_mut(self.active)
    }

    pub fn get(&self, kind: ToolKind) -> &Tool {
        &self.tools[Self::index(kind)]
    }

    pub fn get_mut(&mut self, kind: ToolKind) -> &mut Tool {
        &mut self.tools[Self::index(kind)]
    }

    /// Switches the active tool, cancelling an in-flight gesture of the old one.
    ///
    /// Returns `false` when `kind` was already active.
    pub fn select(&mut self, kind: ToolKind, surface: &mut dyn Surface) -> bool {
        if kind == self.active {
            return false;
        }
        let previous = self.active;
        if let Some(gesture) = self.active_mut().as_gesture_mut()
            && gesture.is_active()
        {
            log::debug!("Cancelling unfinished {previous} gesture");
            gesture.cancel(surface);
        }
        log::debug!("Tool changed: {previous} -> {kind}");
        self.active = kind;
        true
    }

    /// Applies the degenerate-shape policy to every gesture tool.
    pub fn set_suppress_degenerate(&mut self, suppress: bool) {
        for tool in &mut self.tools {
            if let Some(gesture) = tool.as_gesture_mut() {
                gesture.set_suppress_degenerate(suppress);
            }
        }
    }

    fn index(kind: ToolKind) -> usize {
        kind as usize
    }
}
