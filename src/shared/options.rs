//! Zentrale Konfiguration für den PinString Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::PIN_RADIUS;
use serde::{Deserialize, Serialize};

// ── Pins ────────────────────────────────────────────────────────────

/// Füllfarbe der Pins (RGBA: Dunkelgrau, #333).
pub const PIN_FILL_COLOR: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
/// Randfarbe der Pins (RGBA: Weiß).
pub const PIN_OUTLINE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Randstärke der Pins in Pixeln.
pub const PIN_OUTLINE_WIDTH: f32 = 2.0;
/// Hervorhebung des Bogen-Mittelpunkt-Pins während eines Entwurfs (RGBA: Orange).
pub const PIN_CENTER_HIGHLIGHT_COLOR: [f32; 4] = [1.0, 0.55, 0.1, 1.0];

// ── Segmente ────────────────────────────────────────────────────────

/// Farbe festgeschriebener Fäden (RGBA: Schwarz).
pub const SEGMENT_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Linienstärke der Fäden in Pixeln.
pub const SEGMENT_WIDTH: f32 = 2.0;
/// Strichlänge des Entwurfs in Pixeln.
pub const DRAFT_DASH_LENGTH: f32 = 5.0;
/// Lückenlänge des Entwurfs in Pixeln.
pub const DRAFT_GAP_LENGTH: f32 = 5.0;
/// Anzahl Polylinien-Abschnitte pro Bogen.
pub const ARC_SEGMENTS: usize = 48;

// ── Zeichenfläche ──────────────────────────────────────────────────

/// Hintergrundfarbe der Zeichenfläche (RGBA: Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `pin_string_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Pins ────────────────────────────────────────────────────
    /// Trefferradius und Darstellungsgröße aller Pins
    pub pin_radius: f32,
    /// Füllfarbe der Pins
    pub pin_fill_color: [f32; 4],
    /// Randfarbe der Pins
    pub pin_outline_color: [f32; 4],
    /// Randstärke der Pins
    pub pin_outline_width: f32,
    /// Farbe des Mittelpunkt-Pins im Bogen-Entwurf
    #[serde(default = "default_pin_center_highlight_color")]
    pub pin_center_highlight_color: [f32; 4],

    // ── Segmente ────────────────────────────────────────────────
    /// Farbe festgeschriebener Fäden
    pub segment_color: [f32; 4],
    /// Linienstärke der Fäden
    pub segment_width: f32,
    /// Strichlänge des gestrichelten Entwurfs
    pub draft_dash_length: f32,
    /// Lückenlänge des gestrichelten Entwurfs
    pub draft_gap_length: f32,
    /// Polylinien-Auflösung für Bögen
    #[serde(default = "default_arc_segments")]
    pub arc_segments: usize,

    // ── Zeichenfläche ──────────────────────────────────────────
    /// Hintergrundfarbe
    pub background_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            pin_radius: PIN_RADIUS,
            pin_fill_color: PIN_FILL_COLOR,
            pin_outline_color: PIN_OUTLINE_COLOR,
            pin_outline_width: PIN_OUTLINE_WIDTH,
            pin_center_highlight_color: PIN_CENTER_HIGHLIGHT_COLOR,

            segment_color: SEGMENT_COLOR,
            segment_width: SEGMENT_WIDTH,
            draft_dash_length: DRAFT_DASH_LENGTH,
            draft_gap_length: DRAFT_GAP_LENGTH,
            arc_segments: ARC_SEGMENTS,

            background_color: BACKGROUND_COLOR,
        }
    }
}

/// Serde-Default für `pin_center_highlight_color` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_pin_center_highlight_color() -> [f32; 4] {
    PIN_CENTER_HIGHLIGHT_COLOR
}

/// Serde-Default für `arc_segments` (Abwärtskompatibilität).
fn default_arc_segments() -> usize {
    ARC_SEGMENTS
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML-Text. Bei Fehler: Standardwerte.
    pub fn from_toml_str(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(opts) => {
                log::info!("Optionen geladen");
                opts
            }
            Err(e) => {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("pin_string_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("pin_string_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_optional_fields_fall_back_to_defaults() {
        let defaults = EditorOptions::default();
        let mut content = toml::to_string_pretty(&defaults).expect("Serialisierung erwartet");
        content = content
            .lines()
            .filter(|line| !line.starts_with("arc_segments"))
            .collect::<Vec<_>>()
            .join("\n");

        let parsed = EditorOptions::from_toml_str(&content);
        assert_eq!(parsed.arc_segments, ARC_SEGMENTS);
        assert_eq!(parsed, defaults);
    }

    #[test]
    fn test_malformed_toml_yields_defaults() {
        let parsed = EditorOptions::from_toml_str("pin_radius = \"gross\"");
        assert_eq!(parsed, EditorOptions::default());
    }

    #[test]
    fn test_custom_pin_radius_is_read() {
        let defaults = EditorOptions::default();
        let content = toml::to_string_pretty(&defaults)
            .expect("Serialisierung erwartet")
            .replace("pin_radius = 10.0", "pin_radius = 14.0");

        let parsed = EditorOptions::from_toml_str(&content);
        assert_eq!(parsed.pin_radius, 14.0);
    }
}
