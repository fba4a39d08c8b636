//! Handler für die Werkzeugwahl.

use crate::app::state::EditorTool;
use crate::app::AppState;

/// Aktiviert ein Editor-Werkzeug und bricht eine laufende Geste ab.
pub fn set_editor_tool(state: &mut AppState, tool: EditorTool) {
    let outcome = state.interaction.cancel();
    if outcome.needs_repaint() {
        log::debug!("Geste durch Werkzeugwechsel abgebrochen: {:?}", outcome);
    }
    state.editor.active_tool = tool;
    state.view.request_repaint();
    log::info!("Editor-Werkzeug: {:?}", tool);
}
