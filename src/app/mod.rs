//! Application-Layer: Controller, State, Events und Interaktion.

pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod interaction;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Szene, Werkzeug, Geste, View).
pub mod state;

pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use interaction::{InteractionOutcome, InteractionState, SegmentDraft};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, EditorTool, EditorToolState, ViewState};
