use super::*;

fn collect_with_key_event(event: egui::Event) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    if let egui::Event::Key { modifiers, .. } = &event {
        raw_input.modifiers = *modifiers;
    }
    raw_input.events.push(event);

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui);
        });
    });

    events
}

fn key(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

#[test]
fn test_number_keys_select_tools() {
    for (k, tool) in [
        (egui::Key::Num1, EditorTool::String),
        (egui::Key::Num2, EditorTool::Pin),
        (egui::Key::Num3, EditorTool::Delete),
    ] {
        let events = collect_with_key_event(key(k, egui::Modifiers::default()));
        assert_eq!(events, vec![AppIntent::SetEditorToolRequested { tool }]);
    }
}

#[test]
fn test_ctrl_number_is_ignored() {
    let events = collect_with_key_event(key(egui::Key::Num2, egui::Modifiers::COMMAND));

    assert!(events.is_empty());
}

#[test]
fn test_other_keys_are_ignored() {
    let events = collect_with_key_event(key(egui::Key::Num4, egui::Modifiers::default()));

    assert!(events.is_empty());
}
