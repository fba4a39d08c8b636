//! Pointer-Zustandsautomat: übersetzt Zeiger-Events je nach Werkzeug in Szenen-Mutationen.
//!
//! Zustände: `Idle`, `DraggingPin`, `DrawingSegment`. Ein Pin-Drag und ein
//! Faden-Entwurf schließen sich gegenseitig aus, da beide nur aus `Idle`
//! heraus beginnen. Ungültige Gesten werden stillschweigend verworfen.

use super::state::EditorTool;
use crate::core::{compute_arc, PinId, Scene, Segment};
use glam::Vec2;

/// Laufender Faden-Entwurf zwischen Pointer-Down und Pointer-Up.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentDraft {
    /// Pin, an dem der Faden begonnen wurde
    pub start: PinId,
    /// Letzte bekannte Zeigerposition
    pub pointer: Vec2,
    /// Pin unter dem Zeiger (≠ Start), Kandidat für den Bogen-Mittelpunkt
    pub center: Option<PinId>,
}

impl SegmentDraft {
    /// Ermittelt das festzuschreibende Segment beim Loslassen über `position`.
    ///
    /// - Mittelpunkt gesetzt und Treffer ∉ {Start, Mittelpunkt} → Bogen
    /// - sonst Treffer ≠ Start → Linie (auch wenn der Treffer der Mittelpunkt ist)
    /// - kein Treffer oder Start selbst → `None`
    ///
    /// Der Mittelpunkt folgt dem Zeiger, daher ist der Pin unter dem Loslassen
    /// meist selbst der Kandidat; dieser Fall ergibt eine Linie.
    fn resolve_commit(&self, scene: &Scene, position: Vec2) -> Option<Segment> {
        let hit = scene.find_pin_at(position)?;

        match self.center {
            Some(center_id) if center_id != hit.id => {
                let start = scene.pin(self.start)?;
                let center = scene.pin(center_id)?;
                let geometry = compute_arc(start.position, center.position, hit.position);
                Segment::arc(self.start, hit.id, center_id, geometry)
            }
            _ => Segment::line(self.start, hit.id),
        }
    }
}

/// Aktiver Interaktionszustand der Zeichenfläche
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    /// Keine Geste aktiv
    #[default]
    Idle,
    /// Pin wird verschoben; `offset` = Zeiger − Pin-Position beim Greifen
    DraggingPin { pin_id: PinId, offset: Vec2 },
    /// Faden wird gezogen
    DrawingSegment(SegmentDraft),
}

/// Was ein Zeiger-Event bewirkt hat.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionOutcome {
    /// Kein Effekt
    Ignored,
    /// Neuer Pin platziert
    PinPlaced(PinId),
    /// Pin entfernt
    PinRemoved(PinId),
    /// Pin gegriffen
    DragStarted(PinId),
    /// Gegriffener Pin verschoben
    PinMoved(PinId),
    /// Pin losgelassen
    DragEnded(PinId),
    /// Faden-Entwurf an einem Pin begonnen
    DraftStarted(PinId),
    /// Entwurf folgt dem Zeiger
    DraftUpdated,
    /// Segment festgeschrieben
    SegmentCommitted(Segment),
    /// Entwurf verworfen
    DraftDiscarded,
}

impl InteractionOutcome {
    /// Gibt `true` zurück, wenn sich das Bild geändert hat.
    pub fn needs_repaint(&self) -> bool {
        !matches!(self, Self::Ignored | Self::DragStarted(_) | Self::DragEnded(_))
    }
}

impl InteractionState {
    /// Pointer-Down: startet je nach Werkzeug Drag, Entwurf, Platzieren oder Löschen.
    ///
    /// Wird nur im Zustand `Idle` ausgewertet.
    pub fn pointer_down(
        &mut self,
        scene: &mut Scene,
        tool: EditorTool,
        position: Vec2,
    ) -> InteractionOutcome {
        if !self.is_idle() {
            return InteractionOutcome::Ignored;
        }

        let hit = scene.find_pin_at(position).map(|p| (p.id, p.position));

        match (tool, hit) {
            (EditorTool::Pin, Some((pin_id, pin_position))) => {
                *self = Self::DraggingPin {
                    pin_id,
                    offset: position - pin_position,
                };
                InteractionOutcome::DragStarted(pin_id)
            }
            (EditorTool::Pin, None) => InteractionOutcome::PinPlaced(scene.add_pin(position)),
            (EditorTool::String, Some((pin_id, _))) => {
                *self = Self::DrawingSegment(SegmentDraft {
                    start: pin_id,
                    pointer: position,
                    center: None,
                });
                InteractionOutcome::DraftStarted(pin_id)
            }
            (EditorTool::Delete, Some((pin_id, _))) => {
                scene.remove_pin(pin_id);
                InteractionOutcome::PinRemoved(pin_id)
            }
            (EditorTool::String | EditorTool::Delete, None) => InteractionOutcome::Ignored,
        }
    }

    /// Pointer-Move: verschiebt den gegriffenen Pin oder aktualisiert den Entwurf.
    pub fn pointer_move(&mut self, scene: &mut Scene, position: Vec2) -> InteractionOutcome {
        match self {
            Self::Idle => InteractionOutcome::Ignored,
            Self::DraggingPin { pin_id, offset } => {
                if scene.set_pin_position(*pin_id, position - *offset) {
                    InteractionOutcome::PinMoved(*pin_id)
                } else {
                    InteractionOutcome::Ignored
                }
            }
            Self::DrawingSegment(draft) => {
                let start = draft.start;
                draft.pointer = position;
                draft.center = scene
                    .find_pin_at(position)
                    .map(|p| p.id)
                    .filter(|&id| id != start);
                InteractionOutcome::DraftUpdated
            }
        }
    }

    /// Pointer-Up: beendet jede Geste und kehrt nach `Idle` zurück.
    pub fn pointer_up(&mut self, scene: &mut Scene, position: Vec2) -> InteractionOutcome {
        match std::mem::take(self) {
            Self::Idle => InteractionOutcome::Ignored,
            Self::DraggingPin { pin_id, .. } => InteractionOutcome::DragEnded(pin_id),
            Self::DrawingSegment(draft) => match draft.resolve_commit(scene, position) {
                Some(segment) => {
                    scene.add_segment(segment.clone());
                    InteractionOutcome::SegmentCommitted(segment)
                }
                None => InteractionOutcome::DraftDiscarded,
            },
        }
    }

    /// Bricht die laufende Geste ab (z.B. bei Werkzeugwechsel).
    pub fn cancel(&mut self) -> InteractionOutcome {
        match std::mem::take(self) {
            Self::Idle => InteractionOutcome::Ignored,
            Self::DraggingPin { pin_id, .. } => InteractionOutcome::DragEnded(pin_id),
            Self::DrawingSegment(_) => InteractionOutcome::DraftDiscarded,
        }
    }

    /// Gibt `true` zurück, wenn keine Geste aktiv ist.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Laufender Entwurf, falls vorhanden.
    pub fn draft(&self) -> Option<&SegmentDraft> {
        match self {
            Self::DrawingSegment(draft) => Some(draft),
            _ => None,
        }
    }

    /// Aktuell gegriffener Pin, falls vorhanden.
    pub fn dragged_pin(&self) -> Option<PinId> {
        match self {
            Self::DraggingPin { pin_id, .. } => Some(*pin_id),
            _ => None,
        }
    }

    /// Kurzbezeichnung für die Status-Bar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Bereit",
            Self::DraggingPin { .. } => "Pin verschieben",
            Self::DrawingSegment(draft) if draft.center.is_some() => "Bogen ziehen",
            Self::DrawingSegment(_) => "Faden ziehen",
        }
    }
}
