//! Drawing state machine and input state management.

use crate::config::Config;
use crate::draw::{Canvas, Surface};
use crate::history::{DEFAULT_MAX_DEPTH, History};
use crate::input::modifiers::Modifiers;
use crate::settings::DrawingSettings;
use crate::tools::{DrawTool, ToolBox, ToolKind};
use crate::util;
use log::debug;

/// Current drawing mode state machine.
///
/// Tracks whether the user is idle or holding the primary button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawingState {
    /// Not actively drawing - waiting for user input
    Idle,
    /// Primary button held down
    Drawing {
        /// Tool that received the press
        tool: ToolKind,
    },
}

/// Main input state containing all drawing session state.
///
/// Owns the canvas, the validated settings, one instance of every tool and
/// the undo/redo log. The history always holds at least the snapshot taken
/// at construction.
pub struct InputState {
    /// Items drawn so far
    pub canvas: Canvas,
    /// Stroke color, brush size and background
    pub settings: DrawingSettings,
    /// Tool instances and the active selection
    pub tools: ToolBox,
    /// Undo/redo log of canvas snapshots
    pub history: History,
    /// Current drawing mode state machine
    pub state: DrawingState,
    /// Current modifier key state
    pub modifiers: Modifiers,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(
            Canvas::default(),
            DrawingSettings::default(),
            ToolKind::Oval,
            DEFAULT_MAX_DEPTH,
        )
    }
}

impl InputState {
    /// Creates a session around `canvas` and records its initial snapshot.
    ///
    /// The canvas background is replaced by the settings' background.
    pub fn new(
        mut canvas: Canvas,
        settings: DrawingSettings,
        tool: ToolKind,
        history_depth: usize,
    ) -> Self {
        canvas.set_background(settings.background());
        let history = History::with_initial(history_depth, &canvas);
        Self {
            canvas,
            settings,
            tools: ToolBox::new(tool),
            history,
            state: DrawingState::Idle,
            modifiers: Modifiers::new(),
        }
    }

    /// Builds a session from the loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let settings = DrawingSettings::from_config(&config.drawing);
        let canvas = Canvas::new(config.canvas.width, config.canvas.height);
        let mut state = Self::new(
            canvas,
            settings,
            config.drawing.default_tool,
            config.history.max_depth,
        );
        state
            .tools
            .set_suppress_degenerate(config.drawing.suppress_degenerate_shapes);
        state
    }

    pub fn active_tool(&self) -> ToolKind {
        self.tools.active_kind()
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    /// Switches tools. A gesture in progress on the old tool is cancelled.
    ///
    /// Returns `false` when `kind` was already active.
    pub fn select_tool(&mut self, kind: ToolKind) -> bool {
        if !self.tools.select(kind, &mut self.canvas) {
            return false;
        }
        // Brush stamps already on the canvas are kept as a finished stroke.
        if let DrawingState::Drawing { tool } = self.state
            && !tool.is_gesture()
        {
            self.history.snapshot(&self.canvas);
        }
        self.state = DrawingState::Idle;
        true
    }

    /// Abandons the gesture in progress.
    ///
    /// Gesture tools drop their anchor and preview; brush strokes are rolled
    /// back to the last recorded snapshot. Nothing is recorded.
    pub fn cancel(&mut self) -> bool {
        let DrawingState::Drawing { tool } = self.state else {
            return false;
        };
        match self.tools.get_mut(tool).as_gesture_mut() {
            Some(gesture) => gesture.cancel(&mut self.canvas),
            None => {
                self.history.revert(&mut self.canvas);
            }
        }
        debug!("Cancelled {tool} gesture");
        self.state = DrawingState::Idle;
        true
    }

    /// Steps back one snapshot, cancelling any gesture in progress first.
    ///
    /// At the oldest snapshot nothing happens, including to a gesture in
    /// progress, and `false` is returned.
    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }
        self.cancel();
        self.history.undo(&mut self.canvas)
    }

    /// Steps forward one snapshot, cancelling any gesture in progress first.
    ///
    /// With nothing to redo the surface is left untouched.
    pub fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            return false;
        }
        self.cancel();
        self.history.redo(&mut self.canvas)
    }

    /// Deletes every item and records the empty canvas.
    pub fn clear_canvas(&mut self) {
        self.cancel();
        self.canvas.clear();
        self.history.snapshot(&self.canvas);
    }

    /// Sets the stroke color; invalid values are ignored.
    pub fn set_color(&mut self, value: &str) -> bool {
        self.settings.set_color(value)
    }

    /// Sets the brush size; values outside 1-50 are ignored.
    pub fn set_brush_size(&mut self, size: i64) -> bool {
        self.settings.set_brush_size(size)
    }

    pub fn increase_brush_size(&mut self) -> u32 {
        self.settings.increase_brush_size()
    }

    pub fn decrease_brush_size(&mut self) -> u32 {
        self.settings.decrease_brush_size()
    }

    /// Sets the background in the settings and on the canvas.
    ///
    /// Items already erased keep the color they were drawn with.
    pub fn set_background(&mut self, value: &str) -> bool {
        if !self.settings.set_background(value) {
            return false;
        }
        self.canvas.set_background(self.settings.background());
        true
    }

    /// Short human-readable description of the current tool and settings.
    pub fn status_line(&self) -> String {
        format!(
            "{} | size {} | {} on {} | {} item(s)",
            self.tools.active().name(),
            self.settings.brush_size(),
            util::color_to_name(&self.settings.color()),
            util::color_to_name(&self.settings.background()),
            self.canvas.len()
        )
    }
}
