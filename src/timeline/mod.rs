//! Stage list, driver loop and the golden-ratio script.

/// Driver loop.
pub mod player;
/// The golden-ratio choreography.
pub mod script;
/// Tweens, tracks, stages and the timeline.
pub mod stage;

pub use player::Player;
pub use script::{GoldenTimings, golden_script};
pub use stage::{ScheduledStage, Stage, StageKind, Timeline, Track, Tween, teardown_stage};
