use super::*;
use crate::scene::build_golden_scene;
use crate::timeline::{Player, ScheduledStage, StageKind};

fn setup() -> (SceneConfig, GoldenScene, Timeline) {
    let cfg = SceneConfig::default();
    let gs = build_golden_scene(&cfg).unwrap();
    let tl = golden_script(&gs, &cfg).unwrap();
    (cfg, gs, tl)
}

const SCALES: [f64; 5] = [9.1, 144.3, 614.2, 664.3, 900.0];
const SPEEDS: [f64; 3] = [77.7, 333.0, 500.0];

fn scaled(scale: f64, speed: f64) -> (GoldenScene, Timeline) {
    let cfg = SceneConfig {
        scale,
        speed,
        ..SceneConfig::default()
    };
    let gs = build_golden_scene(&cfg).unwrap();
    let tl = golden_script(&gs, &cfg).unwrap();
    (gs, tl)
}

fn stage_named<'a>(schedule: &'a [ScheduledStage], name: &str) -> Vec<&'a ScheduledStage> {
    schedule
        .iter()
        .filter(|s| s.stage.name == name)
        .collect()
}

#[test]
fn boundary_draw_ins_come_first_at_their_own_durations() {
    let (cfg, gs, tl) = setup();
    let schedule = tl.schedule();
    for (i, &rect) in gs.handles.rects.iter().enumerate() {
        let s = &schedule[i];
        assert_eq!(s.stage.name, format!("draw rect_{i}"));
        let length = gs.scene.line(rect).unwrap().length;
        assert_eq!(s.duration, length / cfg.speed);
    }
}

#[test]
fn bulk_redraw_uses_each_segment_length() {
    let (cfg, gs, tl) = setup();
    let schedule = tl.schedule();
    for i in 1..gs.segments.len() {
        let stages = stage_named(&schedule, &format!("draw line_{i}"));
        assert_eq!(stages.len(), 1);
        assert_eq!(stages[0].duration, 2.0 * (gs.segments[i].length / cfg.speed));
    }
    // Segment 0 is drawn once early and once more in the bulk pass.
    assert_eq!(stage_named(&schedule, "draw line_0").len(), 2);
}

#[test]
fn arc_sweeps_run_in_index_order_to_a_quarter_turn() {
    let (cfg, gs, tl) = setup();
    let schedule = tl.schedule();
    let mut last_start = -1.0;
    for (i, spec) in gs.arc_specs.iter().enumerate() {
        let stages = stage_named(&schedule, &format!("sweep circle_{i}"));
        assert_eq!(stages.len(), 1);
        let s = stages[0];
        assert!(s.start > last_start);
        last_start = s.start;
        assert_eq!(s.duration, 2.0 * arc_duration(spec.radius, cfg.speed));
        match &s.stage.kind {
            StageKind::Tween { tween } => {
                assert_eq!(tween.to, PropValue::Scalar(spec.start_angle + 90.0));
            }
            other => panic!("unexpected stage kind {other:?}"),
        }
    }
}

#[test]
fn highlight_reaches_palette_color_then_restores_white() {
    let (cfg, gs, tl) = setup();
    let schedule = tl.schedule();
    let rect4 = gs.handles.rects[4];
    let highlight = stage_named(&schedule, "highlight rect_4")[0];

    let mut p = Player::new(&tl, gs.scene.clone()).unwrap();
    p.seek(highlight.end).unwrap();
    assert_eq!(p.scene().line(rect4).unwrap().stroke, cfg.palette.cat('E').unwrap());

    let settle = stage_named(&schedule, "settle (A+B)/A")[0];
    p.seek(settle.end).unwrap();
    assert_eq!(p.scene().line(rect4).unwrap().stroke, cfg.palette.white);
}

#[test]
fn full_replay_ends_dark_and_teardown_is_idempotent() {
    let (cfg, gs, tl) = setup();
    let mut p = Player::new(&tl, gs.scene.clone()).unwrap();
    p.run_to_end().unwrap();
    assert!(p.is_finished());
    assert!(!p.is_aborted());

    let end = p.scene().clone();
    assert!(end.lines.iter().all(|l| l.opacity == 0.0));
    assert!(end.arcs.iter().all(|a| a.opacity == 0.0));
    assert!(end.labels.iter().all(|l| l.opacity == 0.0));
    assert!(end.lines.iter().all(|l| l.progress == 1.0));
    assert!(end.lines.iter().all(|l| l.stroke == cfg.palette.grey));
    for (arc, spec) in end.arcs.iter().zip(&gs.arc_specs) {
        assert_eq!(arc.end_angle, spec.revealed_end_angle());
    }
    assert_eq!(end.group(gs.handles.plot).unwrap().position.x, -gs.constants.z / 2.0);

    let mut again = Timeline::new();
    again.push(teardown_stage(&end, 1.0, Ease::Linear));
    let mut p2 = Player::new(&again, end.clone()).unwrap();
    p2.run_to_end().unwrap();
    assert_eq!(p2.scene(), &end);
}

#[test]
fn script_validates_against_its_scene() {
    let (_, gs, tl) = setup();
    tl.validate(&gs.scene).unwrap();
    assert!(tl.duration() > 0.0);
}

#[test]
fn every_stage_is_complete_at_its_scheduled_end() {
    for scale in SCALES {
        for speed in SPEEDS {
            let (gs, tl) = scaled(scale, speed);
            let mut p = Player::new(&tl, gs.scene).unwrap();
            for (i, s) in tl.schedule().iter().enumerate() {
                p.seek(s.end).unwrap();
                assert!(
                    p.current_stage().is_none_or(|c| c > i),
                    "'{}' still active at its end (scale {scale}, speed {speed})",
                    s.stage.name
                );
            }
            assert!(p.is_finished());
            assert!(p.scene().lines.iter().all(|l| l.opacity == 0.0));
        }
    }
}

#[test]
fn run_to_end_finishes_at_any_scale_and_speed() {
    for scale in SCALES {
        for speed in SPEEDS {
            let (gs, tl) = scaled(scale, speed);
            let mut p = Player::new(&tl, gs.scene).unwrap();
            p.run_to_end().unwrap();
            assert!(p.is_finished(), "scale {scale}, speed {speed}");
            assert!(p.scene().arcs.iter().all(|a| a.opacity == 0.0));
        }
    }
}

#[test]
fn script_targets_every_animatable_field() {
    use std::collections::HashSet;
    use std::mem::discriminant;

    let (_, gs, tl) = setup();
    let h = &gs.handles;
    let targeted: HashSet<_> = tl
        .stages
        .iter()
        .flat_map(|s| s.tracks())
        .flat_map(|t| t.tweens)
        .map(|tw| discriminant(&tw.target))
        .collect();
    let all = [
        Prop::LineProgress(h.rects[0]),
        Prop::LineStroke(h.rects[0]),
        Prop::LineOpacity(h.rects[0]),
        Prop::ArcEndAngle(h.arcs[0]),
        Prop::ArcOpacity(h.arcs[0]),
        Prop::LabelOpacity(h.caption_a),
        Prop::LabelX(h.caption_a),
        Prop::GroupX(h.plot),
        Prop::GroupY(h.text),
    ];
    for prop in all {
        assert!(targeted.contains(&discriminant(&prop)), "{prop:?} is never animated");
    }
    assert_eq!(targeted.len(), all.len());
}
