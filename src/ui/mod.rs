//! UI-Komponenten: Toolbar, Status-Bar, Zeichenflächen-Input und Tastatur.

/// UI-Layer mit egui
///
/// Alle Komponenten erzeugen ausschließlich `AppIntent`s und mutieren keinen State.
pub mod input;
mod keyboard;
pub mod status;
pub mod toolbar;

pub use input::InputState;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
