use crate::foundation::core::Point;
use crate::geometry::spiral::Segment;

/// Base angle (degrees) of the first arc; each following arc is rotated a quarter turn.
pub const ARC_BASE_DEG: f64 = 180.0;
/// Sweep of one arc when fully revealed.
pub const QUARTER_TURN_DEG: f64 = 90.0;

/// Quarter-circle arc derived from exactly one spiral segment.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ArcSpec {
    /// Index of the source segment.
    pub index: usize,
    /// Arc center, the segment's start point.
    pub center: Point,
    /// Radius, the segment's cached length.
    pub radius: f64,
    /// Start angle in degrees (clockwise from +x, y down).
    pub start_angle: f64,
    /// End angle in degrees; equal to `start_angle` at generation (zero sweep).
    pub end_angle: f64,
}

impl ArcSpec {
    /// End angle of the fully revealed quarter turn.
    pub fn revealed_end_angle(&self) -> f64 {
        self.start_angle + QUARTER_TURN_DEG
    }
}

/// One arc per segment: centered at the segment start, radius equal to its length, rotated
/// `90°` per index so the arcs tile around the spiral's turning points.
pub fn golden_arcs(segments: &[Segment]) -> Vec<ArcSpec> {
    segments
        .iter()
        .enumerate()
        .map(|(i, seg)| {
            let start_angle = ARC_BASE_DEG + QUARTER_TURN_DEG * i as f64;
            ArcSpec {
                index: i,
                center: seg.start,
                radius: seg.length,
                start_angle,
                end_angle: start_angle,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/arc.rs"]
mod tests;
