use super::*;
use crate::foundation::core::{Point, Vec2};
use crate::geometry::Segment;
use crate::palette::Rgb8;
use crate::scene::LineId;
use crate::timeline::stage::{Stage, Track};

const WHITE: Rgb8 = Rgb8::new(255, 255, 255);
const RED: Rgb8 = Rgb8::new(255, 0, 0);

fn scene_with_lines(n: usize) -> (Scene, Vec<LineId>) {
    let mut scene = Scene::new();
    let g = scene.add_group("g", Vec2::ZERO);
    let seg = Segment::new(0, Point::ZERO, Point::new(100.0, 0.0));
    let ids = (0..n)
        .map(|i| scene.add_line(format!("l{i}"), g, &seg, 8.0, WHITE))
        .collect();
    (scene, ids)
}

fn progress(p: &Player, id: LineId) -> f64 {
    p.scene().line(id).unwrap().progress
}

#[test]
fn sequential_stages_do_not_overlap() {
    let (scene, ids) = scene_with_lines(2);
    let mut tl = Timeline::new();
    for &id in &ids {
        tl.push(Stage::tween(
            "draw",
            Tween::linear(Prop::LineProgress(id), PropValue::Scalar(1.0), 1.0),
        ));
    }
    let mut p = Player::new(&tl, scene).unwrap();

    p.seek(0.5).unwrap();
    assert_eq!(progress(&p, ids[0]), 0.5);
    assert_eq!(progress(&p, ids[1]), 0.0);

    p.seek(1.25).unwrap();
    assert_eq!(progress(&p, ids[0]), 1.0);
    assert_eq!(progress(&p, ids[1]), 0.25);
    assert_eq!(p.current_stage(), Some(1));

    p.run_to_end().unwrap();
    assert!(p.is_finished());
    assert_eq!(progress(&p, ids[1]), 1.0);
}

#[test]
fn stage_completes_exactly_at_its_scheduled_end() {
    // 0.7 + 0.2 - 0.7 rounds below 0.2.
    let (scene, ids) = scene_with_lines(3);
    let mut tl = Timeline::new();
    for (&id, secs) in ids.iter().zip([0.7, 0.2, 1.0]) {
        tl.push(Stage::tween(
            "draw",
            Tween::linear(Prop::LineProgress(id), PropValue::Scalar(1.0), secs),
        ));
    }
    let end = tl.schedule()[1].end;
    let mut p = Player::new(&tl, scene).unwrap();

    p.seek(end).unwrap();
    assert_eq!(progress(&p, ids[1]), 1.0);
    assert_eq!(p.current_stage(), Some(2));
    assert_eq!(progress(&p, ids[2]), 0.0);
}

#[test]
fn parallel_group_completes_with_longest_member() {
    let (scene, ids) = scene_with_lines(2);
    let mut tl = Timeline::new();
    tl.push(Stage::parallel(
        "both",
        vec![
            Track::from(Tween::linear(Prop::LineProgress(ids[0]), PropValue::Scalar(1.0), 1.0)),
            Track::from(Tween::linear(Prop::LineProgress(ids[1]), PropValue::Scalar(1.0), 2.0)),
        ],
    ));
    tl.push(Stage::tween(
        "fade",
        Tween::linear(Prop::LineOpacity(ids[0]), PropValue::Scalar(0.0), 1.0),
    ));
    let mut p = Player::new(&tl, scene).unwrap();

    p.seek(1.5).unwrap();
    assert_eq!(progress(&p, ids[0]), 1.0);
    assert_eq!(progress(&p, ids[1]), 0.75);
    // The next stage waits for the slower member.
    assert_eq!(p.scene().line(ids[0]).unwrap().opacity, 1.0);

    p.seek(2.5).unwrap();
    assert_eq!(p.scene().line(ids[0]).unwrap().opacity, 0.5);
}

#[test]
fn chained_track_starts_from_previous_target() {
    let (scene, ids) = scene_with_lines(1);
    let id = ids[0];
    let mut tl = Timeline::new();
    tl.push(Stage::parallel(
        "out-then-in",
        vec![Track {
            tweens: vec![
                Tween::linear(Prop::LineOpacity(id), PropValue::Scalar(0.0), 1.0),
                Tween::linear(Prop::LineOpacity(id), PropValue::Scalar(1.0), 1.0),
            ],
        }],
    ));
    let mut p = Player::new(&tl, scene).unwrap();

    p.seek(0.5).unwrap();
    assert_eq!(p.scene().line(id).unwrap().opacity, 0.5);
    p.seek(1.0).unwrap();
    assert_eq!(p.scene().line(id).unwrap().opacity, 0.0);
    p.seek(1.5).unwrap();
    assert_eq!(p.scene().line(id).unwrap().opacity, 0.5);
}

#[test]
fn recolor_round_trip_restores_exact_white() {
    let (scene, ids) = scene_with_lines(1);
    let id = ids[0];
    let mut tl = Timeline::new();
    tl.push(Stage::tween(
        "highlight",
        Tween::linear(Prop::LineStroke(id), PropValue::Color(RED), 1.0),
    ));
    tl.push(Stage::tween(
        "restore",
        Tween::linear(Prop::LineStroke(id), PropValue::Color(WHITE), 1.0),
    ));
    let mut p = Player::new(&tl, scene).unwrap();

    p.seek(1.0).unwrap();
    assert_eq!(p.scene().line(id).unwrap().stroke, RED);
    p.seek(1.37).unwrap();
    assert_ne!(p.scene().line(id).unwrap().stroke, WHITE);
    p.run_to_end().unwrap();
    assert_eq!(p.scene().line(id).unwrap().stroke, WHITE);
}

#[test]
fn wait_changes_nothing_and_zero_duration_is_instant() {
    let (scene, ids) = scene_with_lines(1);
    let id = ids[0];
    let mut tl = Timeline::new();
    tl.push(Stage::wait(2.0));
    tl.push(Stage::tween(
        "instant",
        Tween::linear(Prop::LineProgress(id), PropValue::Scalar(1.0), 0.0),
    ));
    let before = scene.clone();
    let mut p = Player::new(&tl, scene).unwrap();

    p.seek(1.999).unwrap();
    assert_eq!(p.scene(), &before);
    p.seek(2.0).unwrap();
    assert_eq!(progress(&p, id), 1.0);
    assert!(p.is_finished());
}

#[test]
fn seeking_backwards_replays_from_initial_state() {
    let (scene, ids) = scene_with_lines(1);
    let id = ids[0];
    let mut tl = Timeline::new();
    tl.push(Stage::tween(
        "draw",
        Tween::linear(Prop::LineProgress(id), PropValue::Scalar(1.0), 2.0),
    ));
    let mut p = Player::new(&tl, scene).unwrap();

    p.seek(1.5).unwrap();
    p.seek(0.5).unwrap();
    assert_eq!(progress(&p, id), 0.25);
    assert_eq!(p.time(), 0.5);
}

#[test]
fn abort_drops_remaining_stages() {
    let (scene, ids) = scene_with_lines(1);
    let id = ids[0];
    let mut tl = Timeline::new();
    tl.push(Stage::tween(
        "draw",
        Tween::linear(Prop::LineProgress(id), PropValue::Scalar(1.0), 2.0),
    ));
    let mut p = Player::new(&tl, scene).unwrap();

    p.seek(1.0).unwrap();
    p.abort();
    assert!(p.is_finished());
    assert!(p.is_aborted());
    assert_eq!(p.current_stage(), None);
    assert!(p.seek(2.0).is_err());
    assert_eq!(progress(&p, id), 0.5);
}

#[test]
fn rejects_negative_or_nan_time() {
    let (scene, _) = scene_with_lines(1);
    let mut p = Player::new(&Timeline::new(), scene).unwrap();
    assert!(p.seek(-1.0).is_err());
    assert!(p.seek(f64::NAN).is_err());
    assert!(p.step(-0.1).is_err());
}
