use glam::Vec2;
use pin_string_editor::{AppController, AppIntent, AppState, EditorOptions, EditorTool};

fn controller_with_tool(tool: EditorTool) -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::SetEditorToolRequested { tool })
        .expect("Werkzeugwechsel darf nicht fehlschlagen");
    (controller, state)
}

fn press_release(controller: &mut AppController, state: &mut AppState, pos: Vec2) {
    controller
        .handle_intent(state, AppIntent::PointerPressed { pos })
        .expect("PointerPressed darf nicht fehlschlagen");
    controller
        .handle_intent(state, AppIntent::PointerReleased { pos })
        .expect("PointerReleased darf nicht fehlschlagen");
}

#[test]
fn test_default_tool_is_string() {
    let state = AppState::new();
    assert_eq!(state.editor.active_tool, EditorTool::String);
}

#[test]
fn test_string_tool_on_empty_canvas_places_nothing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    press_release(&mut controller, &mut state, Vec2::new(10.0, 10.0));

    assert_eq!(state.scene.pin_count(), 0);
    assert!(state.interaction.is_idle());
}

#[test]
fn test_delete_on_empty_space_is_noop() {
    let (mut controller, mut state) = controller_with_tool(EditorTool::Pin);
    press_release(&mut controller, &mut state, Vec2::new(10.0, 10.0));

    controller
        .handle_intent(
            &mut state,
            AppIntent::SetEditorToolRequested {
                tool: EditorTool::Delete,
            },
        )
        .expect("Werkzeugwechsel darf nicht fehlschlagen");
    press_release(&mut controller, &mut state, Vec2::new(200.0, 200.0));

    assert_eq!(state.scene.pin_count(), 1);
}

#[test]
fn test_overlapping_pins_hit_first_inserted() {
    let (mut controller, mut state) = controller_with_tool(EditorTool::Pin);
    let first = state.scene.add_pin(Vec2::new(100.0, 100.0));
    state.scene.add_pin(Vec2::new(105.0, 100.0));

    controller
        .handle_intent(
            &mut state,
            AppIntent::SetEditorToolRequested {
                tool: EditorTool::Delete,
            },
        )
        .expect("Werkzeugwechsel darf nicht fehlschlagen");
    press_release(&mut controller, &mut state, Vec2::new(103.0, 100.0));

    assert_eq!(state.scene.pin_count(), 1);
    assert!(state.scene.pin(first).is_none());
}

#[test]
fn test_pin_radius_comes_from_options() {
    let options = EditorOptions {
        pin_radius: 20.0,
        ..EditorOptions::default()
    };
    let mut controller = AppController::new();
    let mut state = AppState::with_options(options);
    controller
        .handle_intent(
            &mut state,
            AppIntent::SetEditorToolRequested {
                tool: EditorTool::Pin,
            },
        )
        .expect("Werkzeugwechsel darf nicht fehlschlagen");

    press_release(&mut controller, &mut state, Vec2::new(100.0, 100.0));
    // 15 px daneben liegt innerhalb des vergrößerten Radius → Drag statt neuem Pin
    press_release(&mut controller, &mut state, Vec2::new(115.0, 100.0));

    assert_eq!(state.scene.pin_count(), 1);
    assert_eq!(state.scene.pins()[0].radius, 20.0);
}
