use super::*;
use crate::geometry::golden::GoldenConstants;
use crate::geometry::spiral::golden_segments;

#[test]
fn one_zero_sweep_arc_per_segment() {
    let g = GoldenConstants::new(900.0).unwrap();
    let segs = golden_segments(g.a, g.b, 8).unwrap();
    let arcs = golden_arcs(&segs);

    assert_eq!(arcs.len(), 8);
    for (i, (arc, seg)) in arcs.iter().zip(&segs).enumerate() {
        assert_eq!(arc.index, i);
        assert_eq!(arc.center, seg.start);
        assert_eq!(arc.radius, seg.length);
        assert_eq!(arc.start_angle, 180.0 + 90.0 * i as f64);
        assert_eq!(arc.end_angle, arc.start_angle);
        assert_eq!(arc.revealed_end_angle(), 270.0 + 90.0 * i as f64);
    }
}

#[test]
fn first_arc_ends_on_first_segment_endpoint() {
    let g = GoldenConstants::new(900.0).unwrap();
    let segs = golden_segments(g.a, g.b, 8).unwrap();
    let arcs = golden_arcs(&segs);

    for (arc, seg) in arcs.iter().zip(&segs) {
        let theta = arc.revealed_end_angle().to_radians();
        let tip = Point::new(
            arc.center.x + arc.radius * theta.cos(),
            arc.center.y + arc.radius * theta.sin(),
        );
        assert!((tip - seg.end).hypot() < 1e-6, "arc {}", arc.index);
    }
}

#[test]
fn empty_input_yields_no_arcs() {
    assert!(golden_arcs(&[]).is_empty());
}
