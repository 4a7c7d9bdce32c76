use crate::foundation::core::{Affine, BezPath, Canvas, Point, Vec2};
use crate::foundation::error::{GoldError, GoldResult};
use crate::palette::Rgb8;
use crate::render::{FrameRGBA, SceneRenderer};
use crate::scene::{ArcShape, GroupId, LineShape, Scene};

/// Curve flattening tolerance for outlines, in pixels.
const ARC_TOLERANCE: f64 = 0.1;
/// Sweeps below this many degrees are not drawn.
const MIN_SWEEP_DEG: f64 = 1e-9;

/// Software renderer for the presentation scene.
///
/// Scene coordinates are relative to the canvas center; each entity is offset by its
/// group's position.
pub struct CpuRenderer {
    canvas: Canvas,
    width: u16,
    height: u16,
    background: Rgb8,
    pixmap: vello_cpu::Pixmap,
}

impl CpuRenderer {
    /// Create a renderer for `canvas`, clearing every frame to `background`.
    pub fn new(canvas: Canvas, background: Rgb8) -> GoldResult<Self> {
        let width = u16::try_from(canvas.width)
            .map_err(|_| GoldError::render("canvas width must fit in u16"))?;
        let height = u16::try_from(canvas.height)
            .map_err(|_| GoldError::render("canvas height must fit in u16"))?;
        if width == 0 || height == 0 {
            return Err(GoldError::render("canvas width/height must be non-zero"));
        }
        Ok(Self {
            canvas,
            width,
            height,
            background,
            pixmap: vello_cpu::Pixmap::new(width, height),
        })
    }

    /// Output canvas.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn group_transform(&self, scene: &Scene, group: GroupId) -> GoldResult<Affine> {
        let offset = scene.group(group)?.position;
        Ok(Affine::translate(self.canvas.center().to_vec2() + offset))
    }
}

impl SceneRenderer for CpuRenderer {
    fn render(&mut self, scene: &Scene) -> GoldResult<FrameRGBA> {
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        fill_background(&mut ctx, self.canvas, self.background);
        for line in &scene.lines {
            if let Some(path) = line_path(line) {
                let transform = self.group_transform(scene, line.group)?;
                stroke_op(&mut ctx, &path, transform, line.width, line.stroke, line.opacity);
            }
        }
        for arc in &scene.arcs {
            if let Some(path) = arc_path(arc) {
                let transform = self.group_transform(scene, arc.group)?;
                stroke_op(&mut ctx, &path, transform, arc.width, arc.stroke, arc.opacity);
            }
        }
        ctx.flush();
        ctx.render_to_pixmap(&mut self.pixmap);

        Ok(FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

/// Drawn portion of a line, or `None` when nothing is visible.
fn line_path(line: &LineShape) -> Option<BezPath> {
    if line.progress <= 0.0 || line.opacity <= 0.0 {
        return None;
    }
    let tip = line.start.lerp(line.end, line.progress.min(1.0));
    if tip == line.start {
        return None;
    }
    let mut path = BezPath::new();
    path.move_to(line.start);
    path.line_to(tip);
    Some(path)
}

/// Swept portion of an arc, from its start angle to its current end angle.
fn arc_path(arc: &ArcShape) -> Option<BezPath> {
    use kurbo::Shape as _;

    let sweep = arc.end_angle - arc.start_angle;
    if sweep.abs() < MIN_SWEEP_DEG || arc.opacity <= 0.0 || arc.radius <= 0.0 {
        return None;
    }
    let shape = kurbo::Arc::new(
        arc.center,
        Vec2::new(arc.radius, arc.radius),
        arc.start_angle.to_radians(),
        sweep.to_radians(),
        0.0,
    );
    Some(shape.to_path(ARC_TOLERANCE))
}

fn stroke_op(
    ctx: &mut vello_cpu::RenderContext,
    path: &BezPath,
    transform: Affine,
    width: f64,
    color: Rgb8,
    opacity: f64,
) {
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_transform(affine_to_cpu(transform));
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        color.r, color.g, color.b, 255,
    ));
    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width).with_caps(vello_cpu::kurbo::Cap::Butt));
    let opacity = opacity.clamp(0.0, 1.0) as f32;
    if opacity < 1.0 {
        ctx.push_opacity_layer(opacity);
    }
    ctx.stroke_path(&bezpath_to_cpu(path));
    if opacity < 1.0 {
        ctx.pop_layer();
    }
}

fn fill_background(ctx: &mut vello_cpu::RenderContext, canvas: Canvas, color: Rgb8) {
    use kurbo::Shape as _;

    let rect = kurbo::Rect::new(0.0, 0.0, f64::from(canvas.width), f64::from(canvas.height));
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        color.r, color.g, color.b, 255,
    ));
    ctx.fill_path(&bezpath_to_cpu(&rect.to_path(ARC_TOLERANCE)));
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
