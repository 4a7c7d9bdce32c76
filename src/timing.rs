//! Length measurement and the length-to-duration model.
//!
//! One drawing speed governs every duration, so longer geometry always takes
//! proportionally longer to draw.

use std::f64::consts::PI;

use crate::foundation::core::Point;

/// Sum of Euclidean distances between consecutive points; `0` for fewer than two points.
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| (w[1] - w[0]).hypot()).sum()
}

/// Seconds needed to draw `points` from progress 0 to 1 at `speed` units per second.
///
/// Zero-length paths yield `0.0`, an instantaneous transition.
pub fn draw_duration(points: &[Point], speed: f64) -> f64 {
    length_duration(path_length(points), speed)
}

/// Seconds needed to draw a straight length at `speed`.
pub fn length_duration(length: f64, speed: f64) -> f64 {
    length / speed
}

/// Seconds needed to sweep a 90° arc of `radius` at `speed`.
pub fn arc_duration(radius: f64, speed: f64) -> f64 {
    (2.0 * PI * radius) / (speed * 4.0)
}
