use super::*;

fn white() -> Rgb8 {
    Rgb8::new(255, 255, 255)
}

fn seg(i: usize, x: f64) -> Segment {
    Segment::new(i, Point::new(0.0, 0.0), Point::new(x, 0.0))
}

#[test]
fn handles_index_in_creation_order() {
    let mut scene = Scene::new();
    let g = scene.add_group("plot", Vec2::new(-450.0, 0.0));
    let l0 = scene.add_line("l0", g, &seg(0, 3.0), 8.0, white());
    let l1 = scene.add_line("l1", g, &seg(1, 5.0), 8.0, white());

    assert_eq!(l0, LineId(0));
    assert_eq!(l1, LineId(1));
    assert_eq!(scene.line(l1).unwrap().length, 5.0);
    assert_eq!(scene.line(l0).unwrap().progress, 0.0);
    assert_eq!(scene.group(g).unwrap().position, Vec2::new(-450.0, 0.0));
    assert_eq!(scene.line_ids().count(), 2);
}

#[test]
fn dangling_handles_are_config_errors() {
    let scene = Scene::new();
    assert!(matches!(scene.line(LineId(3)), Err(GoldError::Config(_))));
    assert!(matches!(scene.arc(ArcId(0)), Err(GoldError::Config(_))));
    assert!(matches!(scene.label(LabelId(0)), Err(GoldError::Config(_))));
    assert!(matches!(scene.group(GroupId(0)), Err(GoldError::Config(_))));
}

#[test]
fn fill_line_slots_requires_exact_count() {
    let mut scene = Scene::new();
    let g = scene.add_group("plot", Vec2::ZERO);
    let slots = reserve_line_slots(&mut scene, "line_", g, 3, 8.0, white());

    let too_few = [seg(0, 1.0), seg(1, 2.0)];
    assert!(matches!(
        fill_line_slots(&mut scene, &slots, &too_few),
        Err(GoldError::Config(_))
    ));
    // Nothing was written on failure.
    assert_eq!(scene.line(slots[0]).unwrap().length, 0.0);

    let exact = [seg(0, 1.0), seg(1, 2.0), seg(2, 3.0)];
    fill_line_slots(&mut scene, &slots, &exact).unwrap();
    assert_eq!(scene.line(slots[2]).unwrap().length, 3.0);
    assert_eq!(scene.line(slots[2]).unwrap().name, "line_2");
}
