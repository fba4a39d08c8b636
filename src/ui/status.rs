//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Pins: {} | Fäden: {}",
                state.scene.pin_count(),
                state.scene.segment_count()
            ));

            ui.separator();

            ui.label(format!("Werkzeug: {}", state.editor.active_tool.label()));

            ui.separator();

            ui.label(state.interaction.label());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let [w, h] = state.view.viewport_size;
                ui.label(format!("{:.0} × {:.0}", w, h));
            });
        });
    });
}
