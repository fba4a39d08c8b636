//! Toolbar für die Werkzeugauswahl.

use crate::app::{AppIntent, AppState, EditorTool};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.editor.active_tool;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Werkzeug:");
            ui.separator();

            for tool in EditorTool::ALL {
                if ui
                    .add(egui::Button::new(tool.label()).selected(active == tool))
                    .clicked()
                {
                    events.push(AppIntent::SetEditorToolRequested { tool });
                }
            }
        });
    });

    events
}
