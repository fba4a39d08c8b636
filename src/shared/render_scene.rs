//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use crate::core::{ArcGeometry, Pin, PinId};
use glam::Vec2;

/// Ein Segment mit aufgelösten Pin-Positionen.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderSegment {
    /// Gerade Linie
    Line { start: Vec2, end: Vec2 },
    /// Bogen um `center`
    Arc { center: Vec2, geometry: ArcGeometry },
}

/// Vorschau des laufenden Faden-Entwurfs.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftPreview {
    /// Position des Start-Pins
    pub start: Vec2,
    /// Aktuelle Zeigerposition
    pub pointer: Vec2,
    /// Pin unter dem Zeiger, der als Bogen-Mittelpunkt dienen würde (für Hervorhebung)
    pub center_pin: Option<PinId>,
    /// Aufgelöster Bogen (Mittelpunkt + Geometrie), falls ein Mittelpunkt gewählt ist
    pub arc: Option<(Vec2, ArcGeometry)>,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Pins in Zeichenreihenfolge
    pub pins: Vec<Pin>,
    /// Festgeschriebene Segmente in Zeichenreihenfolge
    pub segments: Vec<RenderSegment>,
    /// Laufender Entwurf (optional)
    pub draft: Option<DraftPreview>,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
}

impl RenderScene {
    /// Gibt zurück, ob überhaupt etwas zu zeichnen ist.
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty() && self.segments.is_empty() && self.draft.is_none()
    }
}
