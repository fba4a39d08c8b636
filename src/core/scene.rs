//! Die Szene: geordnete Pins und festgeschriebene Segmente.

use super::{Pin, PinId, Segment, PIN_RADIUS};
use glam::Vec2;
use std::collections::HashMap;

/// Container für alle Pins und Segmente der Zeichenfläche
#[derive(Debug, Clone)]
pub struct Scene {
    /// Pins in Einfügereihenfolge (= Zeichenreihenfolge)
    pins: Vec<Pin>,
    /// Segmente in Einfügereihenfolge
    segments: Vec<Segment>,
    /// Entfernte Pins, die noch von Segmenten referenziert werden.
    ///
    /// Segmente zeichnen weiter von den zuletzt bekannten Koordinaten.
    detached_pins: HashMap<PinId, Pin>,
    /// Trefferradius für neue Pins
    pin_radius: f32,
    next_pin_id: PinId,
}

impl Scene {
    /// Erstellt eine leere Szene mit dem Standard-Pin-Radius
    pub fn new() -> Self {
        Self::with_pin_radius(PIN_RADIUS)
    }

    /// Erstellt eine leere Szene mit eigenem Pin-Radius
    pub fn with_pin_radius(pin_radius: f32) -> Self {
        Self {
            pins: Vec::new(),
            segments: Vec::new(),
            detached_pins: HashMap::new(),
            pin_radius,
            next_pin_id: 1,
        }
    }

    /// Hängt einen neuen Pin an und gibt seine ID zurück
    pub fn add_pin(&mut self, position: Vec2) -> PinId {
        let id = self.next_pin_id;
        self.next_pin_id += 1;
        self.pins.push(Pin::new(id, position, self.pin_radius));
        id
    }

    /// Entfernt den ersten passenden Pin.
    ///
    /// Segmente, die den Pin referenzieren, bleiben bestehen (kein kaskadierendes Löschen).
    pub fn remove_pin(&mut self, pin_id: PinId) -> Option<Pin> {
        let index = self.pins.iter().position(|p| p.id == pin_id)?;
        let removed = self.pins.remove(index);

        if self.segments.iter().any(|s| s.references(pin_id)) {
            self.detached_pins.insert(pin_id, removed.clone());
        }
        Some(removed)
    }

    /// Hängt ein Segment an
    pub fn add_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Findet den ersten Pin (Einfügereihenfolge), dessen Trefferradius `position` enthält.
    ///
    /// Lineare Suche ohne Abstandsvergleich: bei Überlappung gewinnt der ältere Pin,
    /// nicht der nächstgelegene.
    pub fn find_pin_at(&self, position: Vec2) -> Option<&Pin> {
        self.pins.iter().find(|p| p.contains(position))
    }

    /// Setzt die Position eines Pins. Gibt `false` zurück, wenn der Pin nicht existiert.
    pub fn set_pin_position(&mut self, pin_id: PinId, position: Vec2) -> bool {
        let Some(pin) = self.pins.iter_mut().find(|p| p.id == pin_id) else {
            return false;
        };
        pin.position = position;
        true
    }

    /// Pin aus der Pin-Sammlung (ohne entfernte Pins)
    pub fn pin(&self, pin_id: PinId) -> Option<&Pin> {
        self.pins.iter().find(|p| p.id == pin_id)
    }

    /// Löst eine Segment-Referenz auf: aktueller Pin oder zuletzt bekannter Stand eines entfernten Pins.
    pub fn resolve_pin(&self, pin_id: PinId) -> Option<&Pin> {
        self.pin(pin_id).or_else(|| self.detached_pins.get(&pin_id))
    }

    /// Prüft ob ein Pin entfernt wurde, aber noch von Segmenten referenziert wird.
    pub fn is_detached(&self, pin_id: PinId) -> bool {
        self.detached_pins.contains_key(&pin_id)
    }

    /// Alle Pins in Einfügereihenfolge (read-only).
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    /// Alle Segmente in Einfügereihenfolge (read-only).
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Gibt die Anzahl der Pins zurück
    pub fn pin_count(&self) -> usize {
        self.pins.len()
    }

    /// Gibt die Anzahl der Segmente zurück
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Trefferradius neuer Pins
    pub fn pin_radius(&self) -> f32 {
        self.pin_radius
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
