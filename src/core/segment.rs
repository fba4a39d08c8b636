//! Festgeschriebene Faden-Segmente zwischen Pins (Linie oder Bogen).

use super::{ArcGeometry, PinId};

/// Ein Faden zwischen zwei Pins.
///
/// Segmente halten nur Pin-IDs, nicht die Pins selbst. Nach dem Festschreiben
/// werden sie nicht mehr verändert.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Gerade Linie von `start` nach `end`
    Line { start: PinId, end: PinId },
    /// Kreisbogen um den Pin `center`
    Arc {
        start: PinId,
        end: PinId,
        center: PinId,
        /// Momentaufnahme der Geometrie beim Festschreiben.
        ///
        /// Gezeichnet wird aus den aktuellen Pin-Positionen, damit der Bogen
        /// verschobenen Pins folgt; dieser Wert dient nur Protokoll und Tests.
        geometry: ArcGeometry,
    },
}

impl Segment {
    /// Erstellt eine Linie. `None` bei Selbst-Schleife (`start == end`).
    pub fn line(start: PinId, end: PinId) -> Option<Self> {
        (start != end).then_some(Self::Line { start, end })
    }

    /// Erstellt einen Bogen. `None` wenn Start, Ende und Mittelpunkt nicht paarweise verschieden sind.
    pub fn arc(start: PinId, end: PinId, center: PinId, geometry: ArcGeometry) -> Option<Self> {
        if start == end || center == start || center == end {
            return None;
        }
        Some(Self::Arc {
            start,
            end,
            center,
            geometry,
        })
    }

    /// Start-Pin
    pub fn start(&self) -> PinId {
        match self {
            Self::Line { start, .. } | Self::Arc { start, .. } => *start,
        }
    }

    /// End-Pin
    pub fn end(&self) -> PinId {
        match self {
            Self::Line { end, .. } | Self::Arc { end, .. } => *end,
        }
    }

    /// Mittelpunkt-Pin (nur bei Bögen)
    pub fn center(&self) -> Option<PinId> {
        match self {
            Self::Line { .. } => None,
            Self::Arc { center, .. } => Some(*center),
        }
    }

    /// Prüft ob das Segment den Pin in irgendeiner Rolle referenziert.
    pub fn references(&self, pin_id: PinId) -> bool {
        self.start() == pin_id || self.end() == pin_id || self.center() == Some(pin_id)
    }

    /// Gibt `true` zurück, wenn es sich um einen Bogen handelt.
    pub fn is_arc(&self) -> bool {
        matches!(self, Self::Arc { .. })
    }
}
