use crate::config::SceneConfig;
use crate::foundation::core::Vec2;
use crate::foundation::error::{GoldError, GoldResult};
use crate::foundation::math::approx_eq;
use crate::geometry::{
    ArcSpec, GoldenConstants, Segment, boundary_lines, golden_arcs, golden_segments,
};
use crate::palette::{ColorKey, Palette};
use crate::scene::model::{
    ArcId, GroupId, Label, LabelId, LineId, Scene, fill_line_slots, reserve_line_slots,
};

/// Handles of every entity the golden-ratio script addresses.
#[derive(Clone, Debug, serde::Serialize)]
pub struct GoldenHandles {
    /// Group holding the construction.
    pub plot: GroupId,
    /// Group holding the ratio panel.
    pub text: GroupId,
    /// Boundary rectangle edges, in [`boundary_lines`] order.
    pub rects: [LineId; 6],
    /// Spiral segment lines, in generation order.
    pub spiral: Vec<LineId>,
    /// Arc overlay, one per spiral segment.
    pub arcs: Vec<ArcId>,
    /// `A` next to the left edge.
    pub label_a: LabelId,
    /// `A` of the `A + B` caption.
    pub caption_a: LabelId,
    /// `+` of the `A + B` caption.
    pub caption_plus: LabelId,
    /// `B` of the `A + B` caption.
    pub caption_b: LabelId,
    /// Colored `(A+B)/A`.
    pub ratio_whole_color: LabelId,
    /// White `(A+B)/A`.
    pub ratio_whole_white: LabelId,
    /// First `=`.
    pub ratio_eq_1: LabelId,
    /// Colored `A/B`.
    pub ratio_parts_color: LabelId,
    /// White `A/B`.
    pub ratio_parts_white: LabelId,
    /// Second `=`.
    pub ratio_eq_2: LabelId,
    /// `Φ`.
    pub ratio_phi: LabelId,
    /// "Golden Ratio" title.
    pub title: LabelId,
}

/// Fully built presentation scene plus the geometry it was generated from.
#[derive(Clone, Debug, serde::Serialize)]
pub struct GoldenScene {
    /// Golden-section scalars.
    pub constants: GoldenConstants,
    /// Boundary rectangle edges.
    pub boundary: [Segment; 6],
    /// Spiral segments.
    pub segments: Vec<Segment>,
    /// Arc overlay records.
    pub arc_specs: Vec<ArcSpec>,
    /// Initial scene state.
    pub scene: Scene,
    /// Entity handles.
    pub handles: GoldenHandles,
}

const TITLE_FONT_SIZE: f64 = 80.0;
const TEXT_PANEL_OFFSET: f64 = 120.0;

/// Build the scene: groups, boundary edges, spiral segments, arcs and labels.
///
/// Spiral line slots are reserved from `cfg.segment_slots` before generation and must be
/// filled exactly; every line starts undrawn and white, every label hidden.
#[tracing::instrument(skip(cfg), fields(scale = cfg.scale, slots = cfg.segment_slots))]
pub fn build_golden_scene(cfg: &SceneConfig) -> GoldResult<GoldenScene> {
    cfg.validate()?;
    let g = GoldenConstants::new(cfg.scale)?;
    if !approx_eq(g.a + g.b, g.z, 1e-12) {
        return Err(GoldError::config(format!(
            "A + B = {} does not add up to Z = {}",
            g.a + g.b,
            g.z
        )));
    }
    let palette = &cfg.palette;
    let white = palette.white;
    let (z, a, b, h, w) = (g.z, g.a, g.b, cfg.label_height, cfg.line_width);

    let mut scene = Scene::new();
    let plot = scene.add_group("plot", Vec2::new(-z / 2.0, -a / 2.0));
    let text = scene.add_group("text", Vec2::new(z / 2.0 + TEXT_PANEL_OFFSET, 0.0));

    let spiral = reserve_line_slots(&mut scene, "line_", plot, cfg.segment_slots, w, white);
    let segments = golden_segments(a, b, cfg.segment_slots)?;
    fill_line_slots(&mut scene, &spiral, &segments)?;

    let arc_specs = golden_arcs(&segments);
    let arcs: Vec<ArcId> = arc_specs
        .iter()
        .map(|spec| scene.add_arc(format!("circle_{}", spec.index), plot, spec, w, white))
        .collect();

    let boundary = boundary_lines(&g);
    let rects: [LineId; 6] = std::array::from_fn(|i| {
        scene.add_line(format!("rect_{i}"), plot, &boundary[i], w, white)
    });

    let label = |scene: &mut Scene, name: &str, group, content: String, at: (f64, f64), height| {
        scene.add_label(Label {
            name: name.to_owned(),
            group,
            content,
            position: Vec2::new(at.0, at.1),
            height,
            fill: white,
            opacity: 0.0,
        })
    };

    let tex = Markup::new(palette)?;
    let caption_y = a + 1.5 * h;
    let label_a = label(&mut scene, "label_a", plot, tex.white("A"), (-1.5 * h, a / 2.0), h);
    let caption_a = label(
        &mut scene,
        "caption_a",
        plot,
        tex.white("A"),
        (z / 2.0 - 50.0, caption_y),
        h,
    );
    let caption_plus = label(
        &mut scene,
        "caption_plus",
        plot,
        tex.white("+"),
        (z / 2.0, caption_y),
        h - 7.0,
    );
    let caption_b = label(
        &mut scene,
        "caption_b",
        plot,
        tex.white("B"),
        (z / 2.0 + 48.0, caption_y),
        h,
    );

    let ratio_whole_color = label(
        &mut scene,
        "ratio_whole_color",
        text,
        tex.whole_colored(),
        (0.0, 0.0),
        3.0 * h,
    );
    let ratio_whole_white = label(
        &mut scene,
        "ratio_whole_white",
        text,
        tex.white("\\frac{A+B}{A}"),
        (0.0, 0.0),
        3.0 * h,
    );
    let ratio_eq_1 = label(&mut scene, "ratio_eq_1", text, tex.white("="), (150.0, 6.0), h);
    let ratio_parts_color = label(
        &mut scene,
        "ratio_parts_color",
        text,
        tex.parts_colored(),
        (240.0, 0.0),
        3.0 * h,
    );
    let ratio_parts_white = label(
        &mut scene,
        "ratio_parts_white",
        text,
        tex.white("\\frac{A}{B}"),
        (240.0, 0.0),
        3.0 * h,
    );
    let ratio_eq_2 = label(&mut scene, "ratio_eq_2", text, tex.white("="), (330.0, 6.0), h);
    let ratio_phi = label(
        &mut scene,
        "ratio_phi",
        text,
        tex.white("\\Phi"),
        (410.0, 6.0),
        1.5 * h,
    );
    let title = label(
        &mut scene,
        "title",
        text,
        "Golden Ratio".to_owned(),
        (175.0, -200.0),
        TITLE_FONT_SIZE,
    );

    tracing::debug!(
        lines = scene.lines.len(),
        arcs = scene.arcs.len(),
        labels = scene.labels.len(),
        "built golden scene"
    );

    Ok(GoldenScene {
        constants: g,
        boundary,
        segments,
        arc_specs,
        scene,
        handles: GoldenHandles {
            plot,
            text,
            rects,
            spiral,
            arcs,
            label_a,
            caption_a,
            caption_plus,
            caption_b,
            ratio_whole_color,
            ratio_whole_white,
            ratio_eq_1,
            ratio_parts_color,
            ratio_parts_white,
            ratio_eq_2,
            ratio_phi,
            title,
        },
    })
}

/// Label markup built from the palette's markup rendering.
struct Markup {
    white: String,
    part_a: String,
    part_b: String,
}

impl Markup {
    fn new(palette: &Palette) -> GoldResult<Self> {
        Ok(Self {
            white: palette.markup(ColorKey::White)?,
            part_a: palette.markup(ColorKey::Cat('B'))?,
            part_b: palette.markup(ColorKey::Cat('E'))?,
        })
    }

    fn white(&self, body: &str) -> String {
        format!("{}{body}", self.white)
    }

    fn whole_colored(&self) -> String {
        format!(
            "{w}\\frac{{{a}A\\color{{white}}+{b}B}}{{{a}A}}",
            w = self.white,
            a = self.part_a,
            b = self.part_b
        )
    }

    fn parts_colored(&self) -> String {
        format!(
            "{w}\\frac{{{a}A}}{{{b}B}}",
            w = self.white,
            a = self.part_a,
            b = self.part_b
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/build.rs"]
mod tests;
