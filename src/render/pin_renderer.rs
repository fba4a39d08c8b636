//! Pin-Renderer: gefüllte Kreise mit Rand.

use super::{to_color32, to_screen};
use crate::core::{Pin, PinId};
use crate::shared::EditorOptions;

/// Renderer für Pins
#[derive(Debug)]
pub struct PinRenderer {
    fill: egui::Color32,
    highlight: egui::Color32,
    outline: egui::Stroke,
}

impl Default for PinRenderer {
    fn default() -> Self {
        let mut renderer = Self {
            fill: egui::Color32::TRANSPARENT,
            highlight: egui::Color32::TRANSPARENT,
            outline: egui::Stroke::NONE,
        };
        renderer.update_style(&EditorOptions::default());
        renderer
    }
}

impl PinRenderer {
    /// Übernimmt Farben und Randstärke aus den Optionen.
    pub fn update_style(&mut self, options: &EditorOptions) {
        self.fill = to_color32(options.pin_fill_color);
        self.highlight = to_color32(options.pin_center_highlight_color);
        self.outline = egui::Stroke::new(
            options.pin_outline_width,
            to_color32(options.pin_outline_color),
        );
    }

    /// Zeichnet alle Pins; `center_pin` wird als Bogen-Mittelpunkt hervorgehoben.
    pub fn render(
        &self,
        painter: &egui::Painter,
        origin: egui::Pos2,
        pins: &[Pin],
        center_pin: Option<PinId>,
    ) {
        for pin in pins {
            let fill = if center_pin == Some(pin.id) {
                self.highlight
            } else {
                self.fill
            };
            painter.circle(to_screen(origin, pin.position), pin.radius, fill, self.outline);
        }
    }
}
