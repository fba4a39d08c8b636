//! PinString Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorTool, EditorToolState,
    InteractionOutcome, InteractionState, ViewState,
};
pub use core::{compute_arc, ArcGeometry, Pin, PinId, Scene, Segment, PIN_RADIUS};
pub use shared::{EditorOptions, RenderScene};
