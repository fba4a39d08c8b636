//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{compute_arc, Scene, Segment};
use crate::shared::{DraftPreview, RenderScene, RenderSegment};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Bögen werden aus den aktuellen Pin-Positionen neu berechnet, damit sie
/// einem verschobenen Pin folgen. Entfernte, aber noch referenzierte Pins
/// werden über ihre letzte Position aufgelöst.
pub fn build(state: &AppState) -> RenderScene {
    let scene = &state.scene;

    RenderScene {
        pins: scene.pins().to_vec(),
        segments: scene
            .segments()
            .iter()
            .filter_map(|segment| resolve_segment(scene, segment))
            .collect(),
        draft: build_draft(state),
        viewport_size: state.view.viewport_size,
    }
}

fn resolve_segment(scene: &Scene, segment: &Segment) -> Option<RenderSegment> {
    let start = scene.resolve_pin(segment.start())?.position;
    let end = scene.resolve_pin(segment.end())?.position;

    match segment.center() {
        Some(center_id) => {
            let center = scene.resolve_pin(center_id)?.position;
            Some(RenderSegment::Arc {
                center,
                geometry: compute_arc(start, center, end),
            })
        }
        None => Some(RenderSegment::Line { start, end }),
    }
}

fn build_draft(state: &AppState) -> Option<DraftPreview> {
    let draft = state.interaction.draft()?;
    let start = state.scene.pin(draft.start)?.position;

    let arc = draft
        .center
        .and_then(|id| state.scene.pin(id))
        .map(|center| {
            (
                center.position,
                compute_arc(start, center.position, draft.pointer),
            )
        });

    Some(DraftPreview {
        start,
        pointer: draft.pointer,
        center_pin: draft.center,
        arc,
    })
}
