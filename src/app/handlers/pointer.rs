//! Handler für Zeiger-Events auf der Zeichenfläche.

use crate::app::interaction::InteractionOutcome;
use crate::app::AppState;
use crate::core::Segment;
use glam::Vec2;

/// Pointer-Down mit dem aktiven Werkzeug.
pub fn down(state: &mut AppState, pos: Vec2) {
    let tool = state.editor.active_tool;
    let outcome = state.interaction.pointer_down(&mut state.scene, tool, pos);
    apply(state, outcome);
}

/// Zeigerbewegung während einer Geste.
pub fn move_to(state: &mut AppState, pos: Vec2) {
    let outcome = state.interaction.pointer_move(&mut state.scene, pos);
    apply(state, outcome);
}

/// Pointer-Up: beendet Drag oder schreibt den Entwurf fest.
pub fn up(state: &mut AppState, pos: Vec2) {
    let outcome = state.interaction.pointer_up(&mut state.scene, pos);
    apply(state, outcome);
}

fn apply(state: &mut AppState, outcome: InteractionOutcome) {
    match &outcome {
        InteractionOutcome::PinPlaced(id) => {
            log::info!("Pin {} platziert ({} Pins)", id, state.scene.pin_count());
        }
        InteractionOutcome::PinRemoved(id) => {
            if state.scene.is_detached(*id) {
                log::info!("Pin {} entfernt, Fäden behalten letzte Position", id);
            } else {
                log::info!("Pin {} entfernt", id);
            }
        }
        InteractionOutcome::SegmentCommitted(Segment::Line { start, end }) => {
            log::info!("Linie {} -> {} festgeschrieben", start, end);
        }
        InteractionOutcome::SegmentCommitted(Segment::Arc {
            start,
            end,
            center,
            geometry,
        }) => {
            log::info!(
                "Bogen {} -> {} um {} festgeschrieben (r = {:.1}, {})",
                start,
                end,
                center,
                geometry.radius,
                if geometry.clockwise { "im Uhrzeigersinn" } else { "gegen den Uhrzeigersinn" }
            );
        }
        InteractionOutcome::DragStarted(_)
        | InteractionOutcome::DragEnded(_)
        | InteractionOutcome::DraftStarted(_)
        | InteractionOutcome::DraftDiscarded => log::debug!("{:?}", outcome),
        InteractionOutcome::Ignored
        | InteractionOutcome::PinMoved(_)
        | InteractionOutcome::DraftUpdated => {}
    }

    if outcome.needs_repaint() {
        state.view.request_repaint();
    }
}
