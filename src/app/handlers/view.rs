//! Handler für den Viewport.

use crate::app::AppState;

/// Übernimmt die neue Größe der Zeichenfläche; es wird nur neu gezeichnet, nicht skaliert.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
    state.view.request_repaint();
    log::debug!("Viewport: {:.0}x{:.0}", size[0], size[1]);
}
