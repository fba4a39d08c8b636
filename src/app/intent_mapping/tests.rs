use crate::app::{AppCommand, AppIntent, AppState, EditorTool};
use glam::Vec2;

use super::map_intent_to_commands;

#[test]
fn same_tool_maps_to_no_command() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::SetEditorToolRequested {
            tool: EditorTool::String,
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn other_tool_maps_to_set_editor_tool() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::SetEditorToolRequested {
            tool: EditorTool::Delete,
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::SetEditorTool {
            tool: EditorTool::Delete
        }]
    );
}

#[test]
fn pointer_move_without_gesture_is_dropped() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            pos: Vec2::new(5.0, 5.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn pointer_press_and_release_always_map() {
    let state = AppState::new();
    let pos = Vec2::new(1.0, 2.0);

    let pressed = map_intent_to_commands(&state, AppIntent::PointerPressed { pos });
    let released = map_intent_to_commands(&state, AppIntent::PointerReleased { pos });

    assert_eq!(pressed, vec![AppCommand::PointerDown { pos }]);
    assert_eq!(released, vec![AppCommand::PointerUp { pos }]);
}

#[test]
fn unchanged_viewport_size_maps_to_no_command() {
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 600.0];

    let unchanged = map_intent_to_commands(
        &state,
        AppIntent::ViewportResized {
            size: [800.0, 600.0],
        },
    );
    let changed = map_intent_to_commands(
        &state,
        AppIntent::ViewportResized {
            size: [1024.0, 600.0],
        },
    );

    assert!(unchanged.is_empty());
    assert_eq!(
        changed,
        vec![AppCommand::SetViewportSize {
            size: [1024.0, 600.0]
        }]
    );
}
