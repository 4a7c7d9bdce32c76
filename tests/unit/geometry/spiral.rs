use super::*;
use crate::geometry::golden::GoldenConstants;

fn spiral_900() -> Vec<Segment> {
    let g = GoldenConstants::new(900.0).unwrap();
    golden_segments(g.a, g.b, 8).unwrap()
}

#[test]
fn sign_comes_in_pairs_with_period_four() {
    let signs: Vec<f64> = (1..=8).map(sign).collect();
    assert_eq!(signs, vec![-1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 1.0, 1.0]);
    for n in 0..32 {
        assert_eq!(sign(n), sign(n + 4));
    }
    for n in [1, 3, 5, 7] {
        assert_eq!(sign(n), sign(n + 1));
    }
}

#[test]
fn generates_requested_count_in_order() {
    let segs = spiral_900();
    assert_eq!(segs.len(), 8);
    for (i, s) in segs.iter().enumerate() {
        assert_eq!(s.index, i);
    }
}

#[test]
fn first_segment_splits_the_outer_rectangle() {
    let g = GoldenConstants::new(900.0).unwrap();
    let segs = spiral_900();
    let s0 = segs[0];
    assert!((s0.start.x - g.a).abs() < 1e-9);
    assert!((s0.start.y - g.a).abs() < 1e-9);
    assert!((s0.end.x - g.a).abs() < 1e-9);
    assert!(s0.end.y.abs() < 1e-9);
    assert!((s0.length - g.a).abs() < 1e-9);
}

#[test]
fn consecutive_lengths_shrink_by_alpha() {
    let g = GoldenConstants::new(900.0).unwrap();
    let segs = spiral_900();
    for w in segs.windows(2) {
        let ratio = w[1].length / w[0].length;
        assert!((ratio - g.alpha).abs() < 1e-9, "ratio={ratio}");
    }
    for s in &segs {
        let expected = g.z * g.alpha.powi(s.index as i32 + 1);
        assert!((s.length - expected).abs() < 1e-9);
    }
}

#[test]
fn segments_alternate_axis() {
    for s in spiral_900() {
        let d = s.end - s.start;
        if s.index % 2 == 0 {
            assert!(d.x.abs() < 1e-9, "segment {} should be vertical", s.index);
        } else {
            assert!(d.y.abs() < 1e-9, "segment {} should be horizontal", s.index);
        }
    }
}

#[test]
fn spiral_stays_inside_the_outer_rectangle() {
    let g = GoldenConstants::new(900.0).unwrap();
    for s in spiral_900() {
        for p in s.points() {
            assert!(p.x >= -1e-9 && p.x <= g.z + 1e-9);
            assert!(p.y >= -1e-9 && p.y <= g.a + 1e-9);
        }
    }
}

#[test]
fn rejects_zero_count_and_bad_sections() {
    assert!(matches!(
        golden_segments(1.0, 1.0, 0),
        Err(GoldError::Config(_))
    ));
    assert!(golden_segments(0.0, 1.0, 8).is_err());
    assert!(golden_segments(f64::NAN, 1.0, 8).is_err());
}
