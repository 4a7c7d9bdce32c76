use crate::foundation::core::Point;
use crate::geometry::golden::GoldenConstants;
use crate::geometry::spiral::Segment;

/// Stroke-joint overshoot (scene units) per boundary line endpoint, tuned for an 8-unit
/// stroke so butt-capped edges close the corners.
const OVERSHOOT: [[(f64, f64); 2]; 6] = [
    [(-4.0, 0.0), (2.0, 0.0)],
    [(0.0, 0.0), (5.0, 0.0)],
    [(0.0, 0.0), (0.0, 2.0)],
    [(0.0, 0.0), (0.0, 5.0)],
    [(4.0, 0.0), (-5.0, 0.0)],
    [(0.0, -4.0), (0.0, 3.0)],
];

/// The six edges of the outer rectangle `Z × A`, with its top and right edges split at the
/// golden sections.
///
/// Order: top-left part `[0, A]`, top-right part `[A, Z]`, right-top part `[0, B]`,
/// right-bottom part `[B, A]`, bottom edge (right to left), left edge (bottom to top).
pub fn boundary_lines(g: &GoldenConstants) -> [Segment; 6] {
    let (a, b, z) = (g.a, g.b, g.z);
    let nominal = [
        [(0.0, 0.0), (a, 0.0)],
        [(a, 0.0), (z, 0.0)],
        [(z, 0.0), (z, b)],
        [(z, b), (z, a)],
        [(z, a), (0.0, a)],
        [(0.0, a), (0.0, 0.0)],
    ];

    std::array::from_fn(|i| {
        let [(sx, sy), (ex, ey)] = nominal[i];
        let [(osx, osy), (oex, oey)] = OVERSHOOT[i];
        Segment::new(
            i,
            Point::new(sx + osx, sy + osy),
            Point::new(ex + oex, ey + oey),
        )
    })
}
