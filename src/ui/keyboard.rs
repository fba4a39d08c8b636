//! Keyboard-Shortcuts für die Werkzeugwahl.
//!
//! `1` → Faden, `2` → Pin, `3` → Löschen. Mit Ctrl/Cmd gedrückt wird nichts ausgelöst.

use crate::app::{AppIntent, EditorTool};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key1, key2, key3) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Num1),
            i.key_pressed(egui::Key::Num2),
            i.key_pressed(egui::Key::Num3),
        )
    });

    if modifiers.command {
        return events;
    }

    for (pressed, tool) in [
        (key1, EditorTool::String),
        (key2, EditorTool::Pin),
        (key3, EditorTool::Delete),
    ] {
        if pressed {
            events.push(AppIntent::SetEditorToolRequested { tool });
        }
    }

    events
}

#[cfg(test)]
mod tests;
