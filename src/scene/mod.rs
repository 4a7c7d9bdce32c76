//! Presentation scene: groups, lines, arcs and labels addressed by typed handles.

/// Golden-ratio scene construction.
pub mod build;
/// Entities and handles.
pub mod model;
/// Animatable field addressing.
pub mod property;

pub use build::{GoldenHandles, GoldenScene, build_golden_scene};
pub use model::{ArcId, ArcShape, Group, GroupId, Label, LabelId, LineId, LineShape, Scene};
pub use property::{Prop, PropValue, ValueKind};
