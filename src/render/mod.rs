//! Zeichnen der Render-Szene mit dem egui-Painter.
//!
//! Reihenfolge: Pins, dann festgeschriebene Fäden, zuletzt der Entwurf.

mod pin_renderer;
mod segment_renderer;

pub use crate::shared::RenderScene;
pub(crate) use pin_renderer::PinRenderer;
pub(crate) use segment_renderer::SegmentRenderer;

use crate::shared::EditorOptions;

/// Haupt-Renderer für die Zeichenfläche.
///
/// Zustandslos bis auf die Styles, die bei jedem Frame aus den Optionen
/// übernommen werden.
#[derive(Debug, Default)]
pub struct Renderer {
    pin_renderer: PinRenderer,
    segment_renderer: SegmentRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendert die komplette Szene.
    ///
    /// `origin` ist die linke obere Ecke der Zeichenfläche in Bildschirmkoordinaten;
    /// alle Positionen der Szene sind relativ dazu.
    pub fn render_scene(
        &mut self,
        painter: &egui::Painter,
        origin: egui::Pos2,
        scene: &RenderScene,
        options: &EditorOptions,
    ) {
        self.pin_renderer.update_style(options);
        self.segment_renderer.update_style(options);

        let center_pin = scene.draft.as_ref().and_then(|d| d.center_pin);
        self.pin_renderer
            .render(painter, origin, &scene.pins, center_pin);
        self.segment_renderer
            .render(painter, origin, &scene.segments);

        if let Some(draft) = &scene.draft {
            self.segment_renderer.render_draft(painter, origin, draft);
        }
    }
}

/// Konvertiert eine RGBA-Farbe aus den Optionen in eine egui-Farbe.
pub fn to_color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}

/// Canvas-lokale Position → Bildschirmposition.
pub(crate) fn to_screen(origin: egui::Pos2, local: glam::Vec2) -> egui::Pos2 {
    origin + egui::vec2(local.x, local.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_color32_maps_primaries() {
        assert_eq!(to_color32([0.0, 0.0, 0.0, 1.0]), egui::Color32::BLACK);
        assert_eq!(to_color32([1.0, 1.0, 1.0, 1.0]), egui::Color32::WHITE);
    }

    #[test]
    fn test_to_screen_offsets_by_origin() {
        let pos = to_screen(egui::pos2(10.0, 20.0), glam::Vec2::new(5.0, 5.0));
        assert_eq!(pos, egui::pos2(15.0, 25.0));
    }
}
