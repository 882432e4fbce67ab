use super::*;
use crate::config::Config;
use crate::draw::{BLACK, RED, ShapeKind, StyleKey, StyleValue, Surface, WHITE};
use crate::input::{Action, Key, MouseButton, Script};
use crate::tools::{PREVIEW_TAG, ToolKind};

fn create_test_input_state() -> InputState {
    InputState::default()
}

fn with_tool(kind: ToolKind) -> InputState {
    let mut state = create_test_input_state();
    state.select_tool(kind);
    state
}

fn preview_count(state: &InputState) -> usize {
    state
        .canvas
        .find_all()
        .into_iter()
        .filter(|id| state.canvas.tag(*id) == Some(PREVIEW_TAG))
        .count()
}

#[test]
fn test_defaults() {
    let state = create_test_input_state();
    assert_eq!(state.active_tool(), ToolKind::Oval);
    assert_eq!(state.state, DrawingState::Idle);
    assert_eq!(state.history.len(), 1);
    assert!(state.canvas.is_empty());
    assert_eq!(state.canvas.background(), WHITE);
}

#[test]
fn test_brush_stamps_on_motion_not_press() {
    let mut state = create_test_input_state();
    assert!(state.on_mouse_press(MouseButton::Left, 10.0, 10.0));
    assert!(state.canvas.is_empty());
    assert!(state.is_drawing());

    state.on_mouse_motion(12.0, 10.0);
    state.on_mouse_motion(14.0, 10.0);
    assert_eq!(state.canvas.len(), 2);

    assert!(state.on_mouse_release(MouseButton::Left, 14.0, 10.0));
    assert_eq!(state.state, DrawingState::Idle);
    assert_eq!(state.history.len(), 2);
}

#[test]
fn test_motion_while_idle_is_ignored() {
    let mut state = create_test_input_state();
    assert!(!state.on_mouse_motion(5.0, 5.0));
    assert!(!state.on_mouse_release(MouseButton::Left, 5.0, 5.0));
    assert!(state.canvas.is_empty());
    assert_eq!(state.history.len(), 1);
}

#[test]
fn test_line_gesture_previews_then_commits() {
    let mut state = with_tool(ToolKind::Line);
    state.set_brush_size(4);
    state.set_color("red");

    state.on_mouse_press(MouseButton::Left, 0.0, 0.0);
    state.on_mouse_motion(10.0, 5.0);
    state.on_mouse_motion(20.0, 10.0);
    assert_eq!(preview_count(&state), 1);
    assert_eq!(state.canvas.len(), 1);

    state.on_mouse_release(MouseButton::Left, 30.0, 40.0);
    assert_eq!(preview_count(&state), 0);

    let ids = state.canvas.find_all();
    assert_eq!(ids.len(), 1);
    assert_eq!(state.canvas.kind(ids[0]), Some(ShapeKind::Line));
    assert_eq!(
        state.canvas.coords(ids[0]),
        Some(&[0.0, 0.0, 30.0, 40.0][..])
    );
    assert_eq!(
        state.canvas.item_style(ids[0], StyleKey::Width),
        Some(StyleValue::Width(4.0))
    );
    assert_eq!(
        state.canvas.item_style(ids[0], StyleKey::Outline),
        Some(StyleValue::Color(RED))
    );
    assert_eq!(state.history.len(), 2);
}

#[test]
fn test_circle_radius_is_drag_distance() {
    let mut state = with_tool(ToolKind::Circle);
    assert!(state.apply(Action::Drag {
        from: [50.0, 50.0],
        to: [53.0, 54.0],
        steps: 3,
    }));
    let ids = state.canvas.find_all();
    assert_eq!(ids.len(), 1);
    let coords = state.canvas.coords(ids[0]).unwrap();
    assert_eq!(coords, &[45.0, 45.0, 55.0, 55.0]);
    assert_eq!(state.canvas.item_style(ids[0], StyleKey::Fill), None);
}

#[test]
fn test_right_click_cancels_gesture_without_snapshot() {
    let mut state = with_tool(ToolKind::Line);
    state.on_mouse_press(MouseButton::Left, 0.0, 0.0);
    state.on_mouse_motion(10.0, 10.0);
    assert_eq!(preview_count(&state), 1);

    assert!(state.on_mouse_press(MouseButton::Right, 10.0, 10.0));
    assert!(state.canvas.is_empty());
    assert_eq!(state.state, DrawingState::Idle);
    assert_eq!(state.history.len(), 1);

    // The release that follows a cancel is not a gesture end.
    assert!(!state.on_mouse_release(MouseButton::Left, 10.0, 10.0));
    assert!(state.canvas.is_empty());
}

#[test]
fn test_cancel_rolls_back_brush_stroke() {
    let mut state = create_test_input_state();
    state.apply(Action::Drag {
        from: [0.0, 0.0],
        to: [10.0, 0.0],
        steps: 2,
    });
    assert_eq!(state.canvas.len(), 2);

    state.on_mouse_press(MouseButton::Left, 20.0, 20.0);
    state.on_mouse_motion(22.0, 20.0);
    assert_eq!(state.canvas.len(), 3);
    assert!(state.on_key_press(Key::Escape));
    assert_eq!(state.canvas.len(), 2);
    assert_eq!(state.history.len(), 2);
}

#[test]
fn test_switching_tools_mid_gesture_drops_preview() {
    let mut state = with_tool(ToolKind::Circle);
    state.on_mouse_press(MouseButton::Left, 5.0, 5.0);
    state.on_mouse_motion(9.0, 5.0);
    assert_eq!(preview_count(&state), 1);

    assert!(state.select_tool(ToolKind::Star));
    assert_eq!(preview_count(&state), 0);
    assert!(!state.is_drawing());
    assert!(!state.select_tool(ToolKind::Star));
}

#[test]
fn test_undo_redo_through_actions() {
    let mut state = create_test_input_state();
    assert!(!state.apply(Action::Undo));

    for x in [10.0, 40.0, 70.0] {
        state.apply(Action::Drag {
            from: [x, 10.0],
            to: [x, 10.0],
            steps: 1,
        });
    }
    assert_eq!(state.canvas.len(), 3);

    assert!(state.apply(Action::Undo));
    assert!(state.apply(Action::Undo));
    assert_eq!(state.canvas.len(), 1);
    assert!(state.apply(Action::Redo));
    assert_eq!(state.canvas.len(), 2);

    // Drawing after an undo discards the redo tail.
    state.apply(Action::Drag {
        from: [90.0, 90.0],
        to: [91.0, 90.0],
        steps: 1,
    });
    assert!(!state.apply(Action::Redo));
    assert_eq!(state.canvas.len(), 3);
}

#[test]
fn test_undo_at_oldest_snapshot_leaves_stroke_alone() {
    let mut state = create_test_input_state();
    state.on_mouse_press(MouseButton::Left, 10.0, 10.0);
    state.on_mouse_motion(12.0, 10.0);
    assert_eq!(state.canvas.len(), 1);

    assert!(!state.undo());
    assert!(!state.redo());
    assert_eq!(state.canvas.len(), 1);
    assert!(state.is_drawing());

    assert!(state.on_mouse_release(MouseButton::Left, 12.0, 10.0));
    assert!(state.undo());
    assert!(state.canvas.is_empty());
}

#[test]
fn test_clear_is_undoable() {
    let mut state = create_test_input_state();
    state.apply(Action::Drag {
        from: [0.0, 0.0],
        to: [5.0, 5.0],
        steps: 1,
    });
    assert!(state.apply(Action::Clear));
    assert!(state.canvas.is_empty());
    assert!(state.undo());
    assert_eq!(state.canvas.len(), 1);
}

#[test]
fn test_background_updates_canvas_and_eraser() {
    let mut state = create_test_input_state();
    assert!(!state.set_background("green"));
    assert_eq!(state.canvas.background(), WHITE);

    assert!(state.set_background("black"));
    assert_eq!(state.canvas.background(), BLACK);

    state.select_tool(ToolKind::Eraser);
    state.set_color("red");
    state.apply(Action::Drag {
        from: [10.0, 10.0],
        to: [10.0, 10.0],
        steps: 1,
    });
    let ids = state.canvas.find_all();
    assert_eq!(
        state.canvas.item_style(ids[0], StyleKey::Fill),
        Some(StyleValue::Color(BLACK))
    );
}

#[test]
fn test_invalid_settings_are_ignored() {
    let mut state = create_test_input_state();
    assert!(!state.apply(Action::SetBrushSize { size: 0 }));
    assert!(!state.apply(Action::SetColor {
        color: "#12345".to_string()
    }));
    assert_eq!(state.settings.brush_size(), 5);
    assert_eq!(state.settings.color(), BLACK);

    state.set_brush_size(50);
    assert!(!state.apply(Action::IncreaseBrushSize));
    assert!(state.apply(Action::DecreaseBrushSize));
    assert_eq!(state.settings.brush_size(), 48);
}

#[test]
fn test_keyboard_shortcuts() {
    let mut state = create_test_input_state();
    assert!(state.on_key_press(Key::Char('5')));
    assert_eq!(state.active_tool(), ToolKind::Circle);

    assert!(state.on_key_press(Key::Char('+')));
    assert_eq!(state.settings.brush_size(), 7);

    state.apply(Action::Drag {
        from: [0.0, 0.0],
        to: [3.0, 4.0],
        steps: 1,
    });
    assert_eq!(state.canvas.len(), 1);

    // Plain 'z' does nothing; Ctrl+Z undoes.
    assert!(!state.on_key_press(Key::Char('z')));
    assert!(!state.on_key_press(Key::Ctrl));
    assert!(state.on_key_press(Key::Char('z')));
    assert!(state.canvas.is_empty());
    state.on_key_release(Key::Ctrl);
    assert!(!state.modifiers.ctrl);
}

#[test]
fn test_degenerate_gestures_recorded_unless_suppressed() {
    let mut state = with_tool(ToolKind::Line);
    state.on_mouse_press(MouseButton::Left, 7.0, 7.0);
    state.on_mouse_release(MouseButton::Left, 7.0, 7.0);
    assert_eq!(state.canvas.len(), 1);

    let mut config = Config::default();
    config.drawing.default_tool = ToolKind::Circle;
    config.drawing.suppress_degenerate_shapes = true;
    let mut state = InputState::from_config(&config);
    state.on_mouse_press(MouseButton::Left, 7.0, 7.0);
    state.on_mouse_release(MouseButton::Left, 7.0, 7.0);
    assert!(state.canvas.is_empty());
    assert_eq!(state.history.len(), 2);
}

#[test]
fn test_from_config_applies_sections() {
    let mut config = Config::default();
    config.drawing.default_brush_size = 9;
    config.drawing.background = "black".into();
    config.drawing.default_tool = ToolKind::Star;
    config.canvas.width = 320;
    config.canvas.height = 200;
    config.history.max_depth = 3;

    let mut state = InputState::from_config(&config);
    assert_eq!(state.settings.brush_size(), 9);
    assert_eq!(state.canvas.background(), BLACK);
    assert_eq!(state.active_tool(), ToolKind::Star);
    assert_eq!((state.canvas.width(), state.canvas.height()), (320, 200));

    for x in 0..5 {
        state.apply(Action::Drag {
            from: [x as f64 * 20.0, 50.0],
            to: [x as f64 * 20.0, 50.0],
            steps: 1,
        });
    }
    assert_eq!(state.history.len(), 3);
    assert!(state.undo());
    assert!(state.undo());
    assert!(!state.undo());
    assert_eq!(state.canvas.len(), 3);
}

#[test]
fn test_run_script_counts_applied_actions() {
    let script = Script::parse(
        r#"[
            {"action": "set_color", "color": "blue"},
            {"action": "set_color", "color": "magenta"},
            {"action": "select_tool", "tool": "square"},
            {"action": "drag", "from": [10, 10], "to": [30, 10], "steps": 4},
            {"action": "undo"},
            {"action": "redo"},
            {"action": "redo"}
        ]"#,
    )
    .unwrap();

    let mut state = create_test_input_state();
    assert_eq!(state.run_script(&script), 5);
    assert_eq!(state.canvas.len(), 4);
    assert_eq!(state.active_tool(), ToolKind::Square);
}

#[test]
fn test_status_line_mentions_tool_and_color() {
    let mut state = create_test_input_state();
    state.set_color("red");
    let status = state.status_line();
    assert!(status.contains("Oval Brush"));
    assert!(status.contains("Red on White"));
    assert!(status.contains("size 5"));
}
