use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{GoldError, GoldResult};
use crate::geometry::golden;
use crate::timing::path_length;

/// One straight edge of the nested golden-rectangle construction.
///
/// Geometry is fixed once generated; the cached `length` is what durations and arc radii
/// are derived from.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Segment {
    /// Position in generation order.
    pub index: usize,
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Euclidean length, computed at generation.
    pub length: f64,
}

impl Segment {
    /// Build a segment and cache its length.
    pub fn new(index: usize, start: Point, end: Point) -> Self {
        Self {
            index,
            start,
            end,
            length: path_length(&[start, end]),
        }
    }

    /// Both endpoints as a polyline.
    pub fn points(&self) -> [Point; 2] {
        [self.start, self.end]
    }
}

/// Direction sign of spiral step `n`: `(-1)^n * (-1)^floor(n/2)`.
///
/// Signs come in equal pairs and repeat with period 4, cycling the four edge directions of
/// a rectangle spiral.
pub fn sign(n: u32) -> f64 {
    let a = if n % 2 == 0 { 1.0 } else { -1.0 };
    let b = if (n / 2) % 2 == 0 { 1.0 } else { -1.0 };
    a * b
}

/// Generate `count` connected spiral segments for the golden sections `a` and `b`.
///
/// Each step moves along the current rectangle edge by `z·β·α^(n-1)`, then emits the
/// segment spanning the complementary axis with length `z·α^n`, so successive segments
/// shrink by `α` and turn every step.
pub fn golden_segments(a: f64, b: f64, count: usize) -> GoldResult<Vec<Segment>> {
    if count == 0 {
        return Err(GoldError::config("spiral segment count must be >= 1"));
    }
    if !(a.is_finite() && b.is_finite()) || a <= 0.0 || b <= 0.0 {
        return Err(GoldError::validation(format!(
            "golden sections must be finite and > 0 (got a={a}, b={b})"
        )));
    }

    let alpha = golden::alpha();
    let beta = golden::beta();
    let z = a + b;

    let mut x_1 = Point::new(z, a);
    let mut out = Vec::with_capacity(count);
    for n in 1..=count as u32 {
        let along = axis(n % 2, (n + 1) % 2) * (sign(n) * z * beta * alpha.powi(n as i32 - 1));
        x_1 += along;

        let across = axis((n + 1) % 2, n % 2) * (sign(n + 1) * z * alpha.powi(n as i32));
        let x_2 = x_1 + across;

        out.push(Segment::new(n as usize - 1, x_1, x_2));
    }
    Ok(out)
}

fn axis(x: u32, y: u32) -> Vec2 {
    Vec2::new(f64::from(x), f64::from(y))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/spiral.rs"]
mod tests;
