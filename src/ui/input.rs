//! Zeichenflächen-Input: rohe egui-Zeigerereignisse → AppIntent.
//!
//! Positionen werden relativ zur linken oberen Ecke der Zeichenfläche geliefert.

use super::keyboard;
use crate::app::AppIntent;
use glam::Vec2;

/// Verwaltet den Input-Zustand der Zeichenfläche (gedrückte Primärtaste).
#[derive(Debug, Default)]
pub struct InputState {
    primary_down: bool,
    /// Letzte bekannte Zeigerposition (Bildschirmkoordinaten)
    last_pos: Option<egui::Pos2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt alle Intents der Zeichenfläche für diesen Frame.
    ///
    /// Enthält die aktuelle Flächengröße, Tastatur-Shortcuts und Zeiger-Events.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let rect = response.rect;
        let mut events = vec![AppIntent::ViewportResized {
            size: [rect.width(), rect.height()],
        }];

        events.extend(keyboard::collect_keyboard_intents(ui));

        let raw_events = ui.input(|i| i.events.clone());
        events.extend(self.translate_pointer_events(&raw_events, rect));

        events
    }

    /// Übersetzt rohe Zeigerereignisse in Intents.
    ///
    /// Ein Drücken zählt nur innerhalb von `rect`; Bewegung und Loslassen werden
    /// danach auch außerhalb geliefert, bis die Primärtaste wieder oben ist.
    /// Verlässt der Zeiger das Fenster (`PointerGone`), endet die Geste an der
    /// letzten bekannten Position.
    pub fn translate_pointer_events(
        &mut self,
        raw_events: &[egui::Event],
        rect: egui::Rect,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        for event in raw_events {
            match event {
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed: true,
                    ..
                } if rect.contains(*pos) && !self.primary_down => {
                    self.primary_down = true;
                    self.last_pos = Some(*pos);
                    events.push(AppIntent::PointerPressed {
                        pos: to_local(rect, *pos),
                    });
                }
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed: false,
                    ..
                } if self.primary_down => {
                    self.primary_down = false;
                    events.push(AppIntent::PointerReleased {
                        pos: to_local(rect, *pos),
                    });
                }
                egui::Event::PointerMoved(pos) => {
                    self.last_pos = Some(*pos);
                    if self.primary_down {
                        events.push(AppIntent::PointerMoved {
                            pos: to_local(rect, *pos),
                        });
                    }
                }
                egui::Event::PointerGone if self.primary_down => {
                    self.primary_down = false;
                    let pos = self.last_pos.unwrap_or(rect.min);
                    events.push(AppIntent::PointerReleased {
                        pos: to_local(rect, pos),
                    });
                }
                _ => {}
            }
        }

        events
    }

    /// Gibt `true` zurück, solange die Primärtaste auf der Fläche gedrückt ist.
    pub fn is_pointer_down(&self) -> bool {
        self.primary_down
    }
}

fn to_local(rect: egui::Rect, pos: egui::Pos2) -> Vec2 {
    let local = pos - rect.min;
    Vec2::new(local.x, local.y)
}
