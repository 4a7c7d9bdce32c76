//! goldspiral builds the recursive golden-ratio rectangle and spiral construction and plays a
//! timed presentation of it.
//!
//! The pipeline runs one way:
//!
//! - Validate a [`SceneConfig`]
//! - Generate the geometry ([`geometry`]) and build the [`Scene`] with typed handles
//! - Build the stage list ([`golden_script`]) and drive it with a [`Player`]
//! - Render frames on the CPU and stream them into a [`FrameSink`] through a [`Presentation`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Easing curves and interpolation.
pub mod animation;
/// Static configuration.
pub mod config;
/// Frame sinks (in-memory, PNG sequence, ffmpeg).
pub mod encode;
/// Golden-section geometry.
pub mod geometry;
/// Color palette.
pub mod palette;
/// Scene rasterization.
pub mod render;
/// Scene model and the golden scene builder.
pub mod scene;
/// Session API tying scene, script and renderer together.
pub mod session;
/// Stage list and driver loop.
pub mod timeline;
pub mod timing;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, FrameRange, Point, Vec2,
};
pub use crate::foundation::error::{GoldError, GoldResult};

pub use crate::animation::ease::Ease;
pub use crate::config::SceneConfig;
pub use crate::encode::{
    FfmpegSink, FfmpegSinkOpts, FrameSink, InMemorySink, PngSequenceSink, SinkConfig,
};
pub use crate::geometry::{ArcSpec, GoldenConstants, Segment, golden_arcs, golden_segments};
pub use crate::palette::{ColorKey, Palette, Rgb8};
pub use crate::render::cpu::CpuRenderer;
pub use crate::render::{FrameRGBA, SceneRenderer};
pub use crate::scene::{GoldenScene, Scene, build_golden_scene};
pub use crate::session::{Presentation, RenderStats};
pub use crate::timeline::{Player, Stage, Timeline, golden_script};
