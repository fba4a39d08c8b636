//! Repräsentiert einen Pin auf der Zeichenfläche.

use glam::Vec2;

/// Eindeutige, fortlaufende Pin-Kennung.
pub type PinId = u64;

/// Standard-Trefferradius aller Pins (Pixel der Zeichenfläche).
pub const PIN_RADIUS: f32 = 10.0;

/// Ein platzierbarer, verschiebbarer Ankerpunkt
#[derive(Debug, Clone, PartialEq)]
pub struct Pin {
    /// Eindeutige Pin-ID
    pub id: PinId,
    /// Mittelpunkt in Koordinaten der Zeichenfläche
    pub position: Vec2,
    /// Trefferradius (für alle Pins einer Szene gleich)
    pub radius: f32,
}

impl Pin {
    /// Erstellt einen neuen Pin
    pub fn new(id: PinId, position: Vec2, radius: f32) -> Self {
        Self {
            id,
            position,
            radius,
        }
    }

    /// Prüft ob `point` innerhalb des Trefferradius liegt (Rand inklusive).
    pub fn contains(&self, point: Vec2) -> bool {
        self.position.distance(point) <= self.radius
    }
}
