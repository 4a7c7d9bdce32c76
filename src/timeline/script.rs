use crate::animation::ease::Ease;
use crate::config::SceneConfig;
use crate::foundation::error::GoldResult;
use crate::palette::{ColorKey, Rgb8};
use crate::scene::{GoldenScene, LabelId, LineId, Prop, PropValue};
use crate::timeline::stage::{Stage, Timeline, Track, Tween, teardown_stage};
use crate::timing::{arc_duration, length_duration};

/// Fixed durations of the non-geometric transitions, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GoldenTimings {
    /// Label fades and recolors.
    pub fade: f64,
    /// Group pans and caption slides.
    pub pan: f64,
    /// Short hold after a reveal.
    pub short_hold: f64,
    /// Hold between major sections.
    pub long_hold: f64,
}

impl Default for GoldenTimings {
    fn default() -> Self {
        Self {
            fade: 1.0,
            pan: 2.0,
            short_hold: 1.0,
            long_hold: 2.0,
        }
    }
}

/// Horizontal pan of the plot while the ratio panel is shown.
const PLOT_PAN: f64 = 300.0;
const TEXT_PANEL_STEP_1: f64 = 20.0;
const TEXT_PANEL_STEP_2: f64 = -60.0;
const TEXT_PANEL_DROP: f64 = 100.0;

/// Build the full golden-ratio choreography for `gs`.
///
/// Geometry draw-ins and arc sweeps are linear and last as long as their cached length
/// requires at `cfg.speed`; every other transition uses `cfg.transition_ease`.
pub fn golden_script(gs: &GoldenScene, cfg: &SceneConfig) -> GoldResult<Timeline> {
    let b = Builder {
        gs,
        speed: cfg.speed,
        ease: cfg.transition_ease,
        t: GoldenTimings::default(),
        white: cfg.palette.white,
        grey: cfg.palette.grey,
        cat_e: cfg.palette.get(ColorKey::Cat('E'))?,
        cat_b: cfg.palette.get(ColorKey::Cat('B'))?,
    };
    let h = &gs.handles;
    let (z, a, bb) = (gs.constants.z, gs.constants.a, gs.constants.b);
    let t = b.t;
    let mut tl = Timeline::new();

    for (i, &rect) in h.rects.iter().enumerate() {
        tl.push(Stage::tween(format!("draw rect_{i}"), b.draw(rect, 1.0)?));
    }

    tl.push(Stage::tween("show label_a", b.opacity(h.label_a, 1.0)));
    tl.push(Stage::parallel(
        "show A + B",
        vec![
            b.opacity(h.caption_a, 1.0).into(),
            b.opacity(h.caption_b, 1.0).into(),
            b.opacity(h.caption_plus, 1.0).into(),
        ],
    ));

    let line0 = h.spiral[0];
    tl.push(Stage::tween("draw line_0", b.draw(line0, 2.0)?));

    tl.push(Stage::parallel(
        "spread A + B",
        vec![
            b.pan(Prop::LabelX(h.caption_a), a / 2.0).into(),
            b.opacity(h.caption_plus, 0.0).into(),
            b.pan(Prop::LabelX(h.caption_b), a + bb / 2.0).into(),
        ],
    ));

    tl.push(Stage::tween(
        "pan plot left",
        b.pan(Prop::GroupX(h.plot), -z / 2.0 - PLOT_PAN),
    ));

    let [_, rect1, _, _, rect4, rect5] = h.rects;
    tl.push(Stage::tween("highlight rect_4", b.stroke(rect4, b.cat_e)));
    tl.push(Stage::tween("highlight rect_5", b.stroke(rect5, b.cat_b)));
    tl.push(Stage::tween("show (A+B)/A", b.opacity(h.ratio_whole_color, 1.0)));
    tl.push(Stage::wait(t.short_hold));
    tl.push(Stage::parallel(
        "settle (A+B)/A",
        vec![
            b.stroke(rect4, b.white).into(),
            b.stroke(rect5, b.white).into(),
            b.opacity(h.ratio_whole_color, 0.0).into(),
            b.opacity(h.ratio_whole_white, 1.0).into(),
        ],
    ));

    tl.push(Stage::tween("highlight line_0", b.stroke(line0, b.cat_e)));
    tl.push(Stage::tween("highlight rect_1", b.stroke(rect1, b.cat_b)));
    tl.push(Stage::parallel(
        "show = A/B",
        vec![
            b.pan(Prop::GroupX(h.text), z / 2.0 + TEXT_PANEL_STEP_1).into(),
            b.blink_in(h.ratio_eq_1),
            b.blink_in(h.ratio_parts_color),
        ],
    ));
    tl.push(Stage::wait(t.short_hold));
    tl.push(Stage::parallel(
        "settle A/B",
        vec![
            b.opacity(h.ratio_parts_color, 0.0).into(),
            b.opacity(h.ratio_parts_white, 1.0).into(),
            b.stroke(line0, b.white).into(),
            b.stroke(rect1, b.white).into(),
        ],
    ));
    tl.push(Stage::wait(t.long_hold));

    tl.push(Stage::parallel(
        "show = Φ",
        vec![
            b.pan(Prop::GroupX(h.text), z / 2.0 + TEXT_PANEL_STEP_2).into(),
            b.blink_in(h.ratio_eq_2),
            b.blink_in(h.ratio_phi),
        ],
    ));
    tl.push(Stage::wait(t.long_hold));

    tl.push(Stage::parallel(
        "show title",
        vec![
            b.pan(Prop::GroupY(h.text), TEXT_PANEL_DROP).into(),
            b.blink_in(h.title),
        ],
    ));
    tl.push(Stage::wait(t.long_hold));

    let panel = [
        h.ratio_whole_white,
        h.ratio_eq_1,
        h.ratio_parts_white,
        h.ratio_eq_2,
        h.ratio_phi,
        h.title,
    ];
    let mut tracks: Vec<Track> = vec![b.pan(Prop::GroupX(h.plot), -z / 2.0).into()];
    tracks.extend(panel.iter().map(|&l| Track::from(b.opacity(l, 0.0))));
    tl.push(Stage::parallel("hide panel", tracks));

    for (i, &line) in h.spiral.iter().enumerate() {
        tl.push(Stage::tween(format!("draw line_{i}"), b.draw(line, 2.0)?));
    }
    tl.push(Stage::wait(t.long_hold));

    let all_lines = h.rects.iter().chain(&h.spiral);
    tl.push(Stage::parallel(
        "grey out",
        all_lines.map(|&l| Track::from(b.stroke(l, b.grey))).collect(),
    ));
    tl.push(Stage::wait(t.long_hold));

    for (i, (&arc, spec)) in h.arcs.iter().zip(&gs.arc_specs).enumerate() {
        let duration = 2.0 * arc_duration(spec.radius, b.speed);
        tl.push(Stage::tween(
            format!("sweep circle_{i}"),
            Tween::linear(
                Prop::ArcEndAngle(arc),
                PropValue::Scalar(spec.revealed_end_angle()),
                duration,
            ),
        ));
        if i == 0 {
            tl.push(Stage::wait(t.long_hold));
        }
    }
    tl.push(Stage::wait(t.long_hold));

    tl.push(teardown_stage(&gs.scene, t.fade, b.ease));
    tl.push(Stage::wait(t.long_hold));

    tracing::debug!(
        stages = tl.stages.len(),
        duration = tl.duration(),
        "built golden script"
    );
    Ok(tl)
}

struct Builder<'a> {
    gs: &'a GoldenScene,
    speed: f64,
    ease: Ease,
    t: GoldenTimings,
    white: Rgb8,
    grey: Rgb8,
    cat_e: Rgb8,
    cat_b: Rgb8,
}

impl Builder<'_> {
    /// Linear draw-in over `factor` times the line's own draw duration.
    fn draw(&self, line: LineId, factor: f64) -> GoldResult<Tween> {
        let length = self.gs.scene.line(line)?.length;
        Ok(Tween::linear(
            Prop::LineProgress(line),
            PropValue::Scalar(1.0),
            factor * length_duration(length, self.speed),
        ))
    }

    fn opacity(&self, label: LabelId, to: f64) -> Tween {
        Tween::eased(
            Prop::LabelOpacity(label),
            PropValue::Scalar(to),
            self.t.fade,
            self.ease,
        )
    }

    fn stroke(&self, line: LineId, to: Rgb8) -> Tween {
        Tween::eased(
            Prop::LineStroke(line),
            PropValue::Color(to),
            self.t.fade,
            self.ease,
        )
    }

    fn pan(&self, target: Prop, to: f64) -> Tween {
        Tween::eased(target, PropValue::Scalar(to), self.t.pan, self.ease)
    }

    /// Fade out, then back in.
    fn blink_in(&self, label: LabelId) -> Track {
        Track {
            tweens: vec![self.opacity(label, 0.0), self.opacity(label, 1.0)],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/script.rs"]
mod tests;
