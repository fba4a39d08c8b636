//! Application State — zentrale Datenhaltung.

use super::interaction::InteractionState;
use crate::core::Scene;
use crate::shared::EditorOptions;

/// Aktives Editor-Werkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Fäden zwischen Pins ziehen (Taste 1)
    #[default]
    String,
    /// Pins platzieren und verschieben (Taste 2)
    Pin,
    /// Pins löschen (Taste 3)
    Delete,
}

impl EditorTool {
    /// Alle Werkzeuge in Toolbar-Reihenfolge.
    pub const ALL: [EditorTool; 3] = [EditorTool::String, EditorTool::Pin, EditorTool::Delete];

    /// Anzeigename inkl. Tastenkürzel.
    pub fn label(self) -> &'static str {
        match self {
            Self::String => "Faden (1)",
            Self::Pin => "Pin (2)",
            Self::Delete => "Löschen (3)",
        }
    }
}

/// Zustand des aktuellen Editor-Werkzeugs
#[derive(Debug, Default)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct ViewState {
    /// Größe der Zeichenfläche in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    repaint_requested: bool,
}

impl ViewState {
    /// Fordert ein Neuzeichnen im nächsten Frame an.
    pub fn request_repaint(&mut self) {
        self.repaint_requested = true;
    }

    /// Liefert und löscht die offene Neuzeichnen-Anforderung.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    /// Gibt `true` zurück, wenn ein Neuzeichnen angefordert ist.
    pub fn repaint_requested(&self) -> bool {
        self.repaint_requested
    }
}

/// Gesamter Anwendungszustand
pub struct AppState {
    /// Pins und Segmente
    pub scene: Scene,
    /// Werkzeugauswahl
    pub editor: EditorToolState,
    /// Laufende Geste (Drag oder Faden-Entwurf)
    pub interaction: InteractionState,
    /// View-Zustand
    pub view: ViewState,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen leeren Zustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren Zustand; der Pin-Radius der Szene kommt aus den Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            scene: Scene::with_pin_radius(options.pin_radius),
            editor: EditorToolState::default(),
            interaction: InteractionState::default(),
            view: ViewState::default(),
            options,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
