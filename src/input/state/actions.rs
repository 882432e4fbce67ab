use crate::input::action::Action;
use crate::input::events::{Key, MouseButton};
use crate::input::script::Script;
use log::debug;

use super::InputState;

impl InputState {
    /// Processes a key press event.
    ///
    /// Modifier keys update the tracked modifier state; everything else is
    /// looked up with [`Action::for_key`] and applied.
    pub fn on_key_press(&mut self, key: Key) -> bool {
        if self.modifiers.update(key, true) {
            return false;
        }
        match Action::for_key(key, self.modifiers) {
            Some(action) => self.apply(action),
            None => false,
        }
    }

    /// Processes a key release event.
    pub fn on_key_release(&mut self, key: Key) {
        self.modifiers.update(key, false);
    }

    /// Applies one action.
    ///
    /// Returns `false` when the action was ignored: an invalid setting, an
    /// undo with nothing to undo, a release without a press, and so on.
    pub fn apply(&mut self, action: Action) -> bool {
        let applied = match action {
            Action::Press { x, y, button } => self.on_mouse_press(button, x, y),
            Action::Motion { x, y } => self.on_mouse_motion(x, y),
            Action::Release { x, y, button } => self.on_mouse_release(button, x, y),
            Action::Drag { from, to, steps } => self.drag(from, to, steps),
            Action::Cancel => self.cancel(),
            Action::SelectTool { tool } => self.select_tool(tool),
            Action::SetColor { color } => self.set_color(&color),
            Action::SetBrushSize { size } => self.set_brush_size(size),
            Action::IncreaseBrushSize => {
                let before = self.settings.brush_size();
                self.increase_brush_size() != before
            }
            Action::DecreaseBrushSize => {
                let before = self.settings.brush_size();
                self.decrease_brush_size() != before
            }
            Action::SetBackground { color } => self.set_background(&color),
            Action::Undo => self.undo(),
            Action::Redo => self.redo(),
            Action::Clear => {
                self.clear_canvas();
                true
            }
        };
        if !applied {
            debug!("Action had no effect");
        }
        applied
    }

    /// Applies every action in order and returns how many took effect.
    pub fn run_script(&mut self, script: &Script) -> usize {
        script
            .actions
            .iter()
            .filter(|action| self.apply((*action).clone()))
            .count()
    }

    /// Press at `from`, move in `steps` even increments, release at `to`.
    fn drag(&mut self, from: [f64; 2], to: [f64; 2], steps: u32) -> bool {
        if !self.on_mouse_press(MouseButton::Left, from[0], from[1]) {
            return false;
        }
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = f64::from(i) / f64::from(steps);
            let x = from[0] + (to[0] - from[0]) * t;
            let y = from[1] + (to[1] - from[1]) * t;
            self.on_mouse_motion(x, y);
        }
        self.on_mouse_release(MouseButton::Left, to[0], to[1])
    }
}
