//! Golden-ratio construction: constants, spiral segments, boundary rectangle and arcs.
//!
//! Everything here is plain data computed once; lengths and radii are cached on the
//! produced records and never re-derived from animated state.

/// Quarter-circle arc overlay derived from spiral segments.
pub mod arc;
/// Golden-section scalars.
pub mod golden;
/// Outer/inner golden rectangle edges.
pub mod rect;
/// Recursive spiral segment generator.
pub mod spiral;

pub use arc::{ArcSpec, golden_arcs};
pub use golden::GoldenConstants;
pub use rect::boundary_lines;
pub use spiral::{Segment, golden_segments, sign};
