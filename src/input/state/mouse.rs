use crate::input::events::MouseButton;
use crate::tools::DrawTool;
use log::debug;

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a mouse button press event.
    ///
    /// # Behavior
    /// - Left click while Idle: line and circle record their anchor; brushes
    ///   wait for motion before stamping
    /// - Right click: cancels the current gesture
    ///
    /// Returns `true` when the press changed the state.
    pub fn on_mouse_press(&mut self, button: MouseButton, x: f64, y: f64) -> bool {
        match button {
            MouseButton::Left => {
                if self.is_drawing() {
                    return false;
                }
                let tool = self.tools.active_kind();
                if let Some(gesture) = self.tools.active_mut().as_gesture_mut() {
                    gesture.begin(&mut self.canvas, x, y);
                }
                debug!("Started {tool} gesture at ({x}, {y})");
                self.state = DrawingState::Drawing { tool };
                true
            }
            MouseButton::Right => self.cancel(),
            MouseButton::Middle => false,
        }
    }

    /// Processes mouse motion (dragging) events.
    ///
    /// # Behavior
    /// - Line and circle: replace the dashed preview
    /// - Brushes and eraser: stamp at the pointer with the current size and color
    pub fn on_mouse_motion(&mut self, x: f64, y: f64) -> bool {
        let DrawingState::Drawing { tool } = self.state else {
            return false;
        };
        let color = self.settings.color();
        let size = self.settings.brush_size();

        let active = self.tools.get_mut(tool);
        match active.as_gesture_mut() {
            Some(gesture) => {
                gesture.preview(&mut self.canvas, x, y, color);
            }
            None => {
                active.render(&mut self.canvas, x, y, size, color);
            }
        }
        true
    }

    /// Processes mouse button release events.
    ///
    /// When the left button is released during drawing, gesture tools commit
    /// their final shape, the canvas is recorded in history and the state
    /// returns to Idle.
    pub fn on_mouse_release(&mut self, button: MouseButton, x: f64, y: f64) -> bool {
        if button != MouseButton::Left {
            return false;
        }
        let DrawingState::Drawing { tool } = self.state else {
            return false;
        };

        let color = self.settings.color();
        let size = self.settings.brush_size();
        if let Some(gesture) = self.tools.get_mut(tool).as_gesture_mut()
            && gesture.commit(&mut self.canvas, x, y, size, color).is_none()
        {
            debug!("{tool} gesture produced no item");
        }

        self.history.snapshot(&self.canvas);
        self.state = DrawingState::Idle;
        true
    }
}
