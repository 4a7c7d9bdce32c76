use super::*;
use crate::geometry::{ArcSpec, Segment};

const BG: Rgb8 = Rgb8::new(20, 20, 20);
const WHITE: Rgb8 = Rgb8::new(255, 255, 255);

fn renderer() -> CpuRenderer {
    CpuRenderer::new(
        Canvas {
            width: 200,
            height: 100,
        },
        BG,
    )
    .unwrap()
}

fn is_bg(px: [u8; 4]) -> bool {
    px == [BG.r, BG.g, BG.b, 255]
}

fn is_white(px: [u8; 4]) -> bool {
    px.iter().all(|&c| c >= 250)
}

fn horizontal_line(group_offset: Vec2, progress: f64, opacity: f64) -> Scene {
    let mut scene = Scene::new();
    let g = scene.add_group("g", group_offset);
    let seg = Segment::new(0, Point::new(-80.0, 0.0), Point::new(80.0, 0.0));
    let id = scene.add_line("l", g, &seg, 8.0, WHITE);
    let line = scene.line_mut(id).unwrap();
    line.progress = progress;
    line.opacity = opacity;
    scene
}

#[test]
fn empty_scene_is_background() {
    let frame = renderer().render(&Scene::new()).unwrap();
    assert_eq!(frame.width, 200);
    assert_eq!(frame.height, 100);
    assert_eq!(frame.data.len(), 200 * 100 * 4);
    assert!(frame.premultiplied);
    assert!(frame.data.chunks_exact(4).all(|px| is_bg([px[0], px[1], px[2], px[3]])));
}

#[test]
fn undrawn_line_is_invisible() {
    let frame = renderer().render(&horizontal_line(Vec2::ZERO, 0.0, 1.0)).unwrap();
    assert!(is_bg(frame.pixel(100, 50).unwrap()));
}

#[test]
fn drawn_line_is_centered_on_canvas() {
    let frame = renderer().render(&horizontal_line(Vec2::ZERO, 1.0, 1.0)).unwrap();
    assert!(is_white(frame.pixel(100, 50).unwrap()));
    assert!(is_white(frame.pixel(40, 50).unwrap()));
    assert!(is_bg(frame.pixel(100, 10).unwrap()));
    assert!(is_bg(frame.pixel(195, 50).unwrap()));
}

#[test]
fn partial_progress_draws_a_prefix() {
    let frame = renderer().render(&horizontal_line(Vec2::ZERO, 0.5, 1.0)).unwrap();
    assert!(is_white(frame.pixel(60, 50).unwrap()));
    assert!(is_bg(frame.pixel(150, 50).unwrap()));
}

#[test]
fn group_offset_moves_children() {
    let frame = renderer()
        .render(&horizontal_line(Vec2::new(0.0, 30.0), 1.0, 1.0))
        .unwrap();
    assert!(is_white(frame.pixel(100, 80).unwrap()));
    assert!(is_bg(frame.pixel(100, 50).unwrap()));
}

#[test]
fn opacity_blends_with_background() {
    let frame = renderer().render(&horizontal_line(Vec2::ZERO, 1.0, 0.5)).unwrap();
    let px = frame.pixel(100, 50).unwrap();
    assert!((120..=155).contains(&px[0]), "got {px:?}");
    assert_eq!(px[3], 255);

    let frame = renderer().render(&horizontal_line(Vec2::ZERO, 1.0, 0.0)).unwrap();
    assert!(is_bg(frame.pixel(100, 50).unwrap()));
}

#[test]
fn arc_draws_only_its_swept_part() {
    let mut scene = Scene::new();
    let g = scene.add_group("g", Vec2::ZERO);
    let spec = ArcSpec {
        index: 0,
        center: Point::ZERO,
        radius: 40.0,
        start_angle: 180.0,
        end_angle: 180.0,
    };
    let id = scene.add_arc("c", g, &spec, 8.0, WHITE);

    // Zero sweep draws nothing.
    let frame = renderer().render(&scene).unwrap();
    assert!(is_bg(frame.pixel(71, 21).unwrap()));

    scene.arc_mut(id).unwrap().end_angle = spec.revealed_end_angle();
    let frame = renderer().render(&scene).unwrap();
    // 225 degrees, y down: upper-left quadrant.
    assert!(is_white(frame.pixel(71, 21).unwrap()));
    // Lower-right quadrant stays empty.
    assert!(is_bg(frame.pixel(128, 78).unwrap()));
}

#[test]
fn rejects_oversized_canvas() {
    let canvas = Canvas {
        width: 70_000,
        height: 10,
    };
    assert!(matches!(
        CpuRenderer::new(canvas, BG),
        Err(GoldError::Render(_))
    ));
}
