use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{GoldError, GoldResult};
use crate::geometry::{ArcSpec, Segment};
use crate::palette::Rgb8;

/// Handle of a [`Group`] inside a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct GroupId(pub u32);

/// Handle of a [`LineShape`] inside a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct LineId(pub u32);

/// Handle of an [`ArcShape`] inside a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct ArcId(pub u32);

/// Handle of a [`Label`] inside a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct LabelId(pub u32);

/// Parent node; children are positioned relative to it and it is positioned relative to the
/// canvas center.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Group {
    /// Debug name.
    pub name: String,
    /// Offset from the canvas center.
    pub position: Vec2,
}

/// Stroked straight line with draw progress.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LineShape {
    /// Debug name.
    pub name: String,
    /// Parent group.
    pub group: GroupId,
    /// Start point in group space.
    pub start: Point,
    /// End point in group space.
    pub end: Point,
    /// Length cached at generation.
    pub length: f64,
    /// Stroke width.
    pub width: f64,
    /// Fraction drawn from `start` toward `end`, in `[0, 1]`.
    pub progress: f64,
    /// Stroke color.
    pub stroke: Rgb8,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Stroked circular arc whose end angle is animated.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ArcShape {
    /// Debug name.
    pub name: String,
    /// Parent group.
    pub group: GroupId,
    /// Center in group space.
    pub center: Point,
    /// Radius cached from the source segment.
    pub radius: f64,
    /// Stroke width.
    pub width: f64,
    /// Start angle in degrees.
    pub start_angle: f64,
    /// Current end angle in degrees.
    pub end_angle: f64,
    /// Stroke color.
    pub stroke: Rgb8,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Formatted text element; content is carried as markup and not typeset here.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Label {
    /// Debug name.
    pub name: String,
    /// Parent group.
    pub group: GroupId,
    /// Markup or plain text content.
    pub content: String,
    /// Center position in group space.
    pub position: Vec2,
    /// Rendered height.
    pub height: f64,
    /// Text fill.
    pub fill: Rgb8,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Indexed collection of every primitive of the presentation.
///
/// Entities are stored in creation order and addressed only through their typed handles.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Scene {
    /// Parent groups.
    pub groups: Vec<Group>,
    /// Lines (boundary edges and spiral segments).
    pub lines: Vec<LineShape>,
    /// Arc overlay.
    pub arcs: Vec<ArcShape>,
    /// Labels.
    pub labels: Vec<Label>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group at `position`.
    pub fn add_group(&mut self, name: impl Into<String>, position: Vec2) -> GroupId {
        self.groups.push(Group {
            name: name.into(),
            position,
        });
        GroupId((self.groups.len() - 1) as u32)
    }

    /// Add an undrawn line for `segment` with the given stroke.
    pub fn add_line(
        &mut self,
        name: impl Into<String>,
        group: GroupId,
        segment: &Segment,
        width: f64,
        stroke: Rgb8,
    ) -> LineId {
        self.lines.push(LineShape {
            name: name.into(),
            group,
            start: segment.start,
            end: segment.end,
            length: segment.length,
            width,
            progress: 0.0,
            stroke,
            opacity: 1.0,
        });
        LineId((self.lines.len() - 1) as u32)
    }

    /// Add a zero-sweep arc for `spec`.
    pub fn add_arc(
        &mut self,
        name: impl Into<String>,
        group: GroupId,
        spec: &ArcSpec,
        width: f64,
        stroke: Rgb8,
    ) -> ArcId {
        self.arcs.push(ArcShape {
            name: name.into(),
            group,
            center: spec.center,
            radius: spec.radius,
            width,
            start_angle: spec.start_angle,
            end_angle: spec.end_angle,
            stroke,
            opacity: 1.0,
        });
        ArcId((self.arcs.len() - 1) as u32)
    }

    /// Add a hidden label.
    pub fn add_label(&mut self, label: Label) -> LabelId {
        self.labels.push(label);
        LabelId((self.labels.len() - 1) as u32)
    }

    /// Borrow a group.
    pub fn group(&self, id: GroupId) -> GoldResult<&Group> {
        self.groups
            .get(id.0 as usize)
            .ok_or_else(|| GoldError::config(format!("dangling group handle {id:?}")))
    }

    /// Mutably borrow a group.
    pub fn group_mut(&mut self, id: GroupId) -> GoldResult<&mut Group> {
        self.groups
            .get_mut(id.0 as usize)
            .ok_or_else(|| GoldError::config(format!("dangling group handle {id:?}")))
    }

    /// Borrow a line.
    pub fn line(&self, id: LineId) -> GoldResult<&LineShape> {
        self.lines
            .get(id.0 as usize)
            .ok_or_else(|| GoldError::config(format!("dangling line handle {id:?}")))
    }

    /// Mutably borrow a line.
    pub fn line_mut(&mut self, id: LineId) -> GoldResult<&mut LineShape> {
        self.lines
            .get_mut(id.0 as usize)
            .ok_or_else(|| GoldError::config(format!("dangling line handle {id:?}")))
    }

    /// Borrow an arc.
    pub fn arc(&self, id: ArcId) -> GoldResult<&ArcShape> {
        self.arcs
            .get(id.0 as usize)
            .ok_or_else(|| GoldError::config(format!("dangling arc handle {id:?}")))
    }

    /// Mutably borrow an arc.
    pub fn arc_mut(&mut self, id: ArcId) -> GoldResult<&mut ArcShape> {
        self.arcs
            .get_mut(id.0 as usize)
            .ok_or_else(|| GoldError::config(format!("dangling arc handle {id:?}")))
    }

    /// Borrow a label.
    pub fn label(&self, id: LabelId) -> GoldResult<&Label> {
        self.labels
            .get(id.0 as usize)
            .ok_or_else(|| GoldError::config(format!("dangling label handle {id:?}")))
    }

    /// Mutably borrow a label.
    pub fn label_mut(&mut self, id: LabelId) -> GoldResult<&mut Label> {
        self.labels
            .get_mut(id.0 as usize)
            .ok_or_else(|| GoldError::config(format!("dangling label handle {id:?}")))
    }

    /// Handles of every line, in creation order.
    pub fn line_ids(&self) -> impl Iterator<Item = LineId> + '_ {
        (0..self.lines.len()).map(|i| LineId(i as u32))
    }

    /// Handles of every arc, in creation order.
    pub fn arc_ids(&self) -> impl Iterator<Item = ArcId> + '_ {
        (0..self.arcs.len()).map(|i| ArcId(i as u32))
    }

    /// Handles of every label, in creation order.
    pub fn label_ids(&self) -> impl Iterator<Item = LabelId> + '_ {
        (0..self.labels.len()).map(|i| LabelId(i as u32))
    }
}

/// Allocate `count` empty line slots (zero-length placeholders) in `group`.
pub fn reserve_line_slots(
    scene: &mut Scene,
    prefix: &str,
    group: GroupId,
    count: usize,
    width: f64,
    stroke: Rgb8,
) -> Vec<LineId> {
    let empty = Segment::new(0, Point::ZERO, Point::ZERO);
    (0..count)
        .map(|i| scene.add_line(format!("{prefix}{i}"), group, &empty, width, stroke))
        .collect()
}

/// Write generated segments into pre-allocated line slots.
///
/// The counts must match exactly; a mismatch is a configuration error and nothing is
/// truncated or padded.
pub fn fill_line_slots(
    scene: &mut Scene,
    slots: &[LineId],
    segments: &[Segment],
) -> GoldResult<()> {
    if slots.len() != segments.len() {
        return Err(GoldError::config(format!(
            "segment slot count mismatch: {} slots, {} generated segments",
            slots.len(),
            segments.len()
        )));
    }
    for (&id, seg) in slots.iter().zip(segments) {
        let line = scene.line_mut(id)?;
        line.start = seg.start;
        line.end = seg.end;
        line.length = seg.length;
        line.progress = 0.0;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
