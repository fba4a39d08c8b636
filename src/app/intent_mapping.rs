//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Intents ohne Wirkung auf den aktuellen Zustand erzeugen keine Commands
/// (gleiches Werkzeug, Zeigerbewegung ohne Geste, unveränderte Viewport-Größe).
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SetEditorToolRequested { tool } => {
            if state.editor.active_tool == tool {
                vec![]
            } else {
                vec![AppCommand::SetEditorTool { tool }]
            }
        }
        AppIntent::PointerPressed { pos } => vec![AppCommand::PointerDown { pos }],
        AppIntent::PointerMoved { pos } => {
            if state.interaction.is_idle() {
                vec![]
            } else {
                vec![AppCommand::PointerMove { pos }]
            }
        }
        AppIntent::PointerReleased { pos } => vec![AppCommand::PointerUp { pos }],
        AppIntent::ViewportResized { size } => {
            if state.view.viewport_size == size {
                vec![]
            } else {
                vec![AppCommand::SetViewportSize { size }]
            }
        }
    }
}

#[cfg(test)]
mod tests;
