//! Core-Domänentypen: Pins, Segmente, Szene und Bogen-Geometrie.

pub mod geometry;
pub mod pin;
pub mod scene;
pub mod segment;

pub use geometry::{compute_arc, ArcGeometry};
pub use pin::{Pin, PinId, PIN_RADIUS};
pub use scene::Scene;
pub use segment::Segment;
