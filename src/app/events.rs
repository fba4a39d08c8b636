//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use super::state::EditorTool;
use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Editor-Werkzeug wechseln (Toolbar oder Taste 1/2/3)
    SetEditorToolRequested { tool: EditorTool },
    /// Primäre Maustaste auf der Zeichenfläche gedrückt
    PointerPressed { pos: Vec2 },
    /// Zeiger bewegt
    PointerMoved { pos: Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased { pos: Vec2 },
    /// Größe der Zeichenfläche hat sich geändert
    ViewportResized { size: [f32; 2] },
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Editor-Werkzeug wechseln (bricht laufende Geste ab)
    SetEditorTool { tool: EditorTool },
    /// Pointer-Down an den Zustandsautomaten
    PointerDown { pos: Vec2 },
    /// Pointer-Move an den Zustandsautomaten
    PointerMove { pos: Vec2 },
    /// Pointer-Up an den Zustandsautomaten
    PointerUp { pos: Vec2 },
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
}
