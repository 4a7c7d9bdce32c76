use crate::animation::lerp::Lerp;
use crate::foundation::error::{GoldError, GoldResult};
use crate::palette::Rgb8;
use crate::scene::model::{ArcId, GroupId, LabelId, LineId, Scene};

/// One animatable field of one scene entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(tag = "prop", content = "id", rename_all = "snake_case")]
pub enum Prop {
    /// Line draw progress.
    LineProgress(LineId),
    /// Line stroke color.
    LineStroke(LineId),
    /// Line opacity.
    LineOpacity(LineId),
    /// Arc end angle (degrees).
    ArcEndAngle(ArcId),
    /// Arc opacity.
    ArcOpacity(ArcId),
    /// Label opacity.
    LabelOpacity(LabelId),
    /// Label x position.
    LabelX(LabelId),
    /// Group x position.
    GroupX(GroupId),
    /// Group y position.
    GroupY(GroupId),
}

/// Kind of value a [`Prop`] holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    /// `f64` value.
    Scalar,
    /// [`Rgb8`] value.
    Color,
}

/// Value of an animatable field.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum PropValue {
    /// Numeric value.
    Scalar(f64),
    /// Color value.
    Color(Rgb8),
}

impl PropValue {
    /// Kind of this value.
    pub fn kind(self) -> ValueKind {
        match self {
            Self::Scalar(_) => ValueKind::Scalar,
            Self::Color(_) => ValueKind::Color,
        }
    }

    /// Interpolate two values of the same kind.
    pub fn lerp(a: Self, b: Self, t: f64) -> GoldResult<Self> {
        match (a, b) {
            (Self::Scalar(a), Self::Scalar(b)) => Ok(Self::Scalar(f64::lerp(&a, &b, t))),
            (Self::Color(a), Self::Color(b)) => Ok(Self::Color(Rgb8::lerp(&a, &b, t))),
            _ => Err(GoldError::timeline(format!(
                "cannot interpolate between {a:?} and {b:?}"
            ))),
        }
    }

    fn scalar(self, prop: Prop) -> GoldResult<f64> {
        match self {
            Self::Scalar(v) => Ok(v),
            Self::Color(_) => Err(GoldError::timeline(format!(
                "{prop:?} expects a scalar value"
            ))),
        }
    }

    fn color(self, prop: Prop) -> GoldResult<Rgb8> {
        match self {
            Self::Color(c) => Ok(c),
            Self::Scalar(_) => Err(GoldError::timeline(format!(
                "{prop:?} expects a color value"
            ))),
        }
    }
}

impl Prop {
    /// Kind of value this field holds.
    pub fn kind(self) -> ValueKind {
        match self {
            Self::LineStroke(_) => ValueKind::Color,
            _ => ValueKind::Scalar,
        }
    }
}

impl Scene {
    /// Read the current value of an animatable field.
    pub fn get(&self, prop: Prop) -> GoldResult<PropValue> {
        use PropValue::{Color, Scalar};

        Ok(match prop {
            Prop::LineProgress(id) => Scalar(self.line(id)?.progress),
            Prop::LineStroke(id) => Color(self.line(id)?.stroke),
            Prop::LineOpacity(id) => Scalar(self.line(id)?.opacity),
            Prop::ArcEndAngle(id) => Scalar(self.arc(id)?.end_angle),
            Prop::ArcOpacity(id) => Scalar(self.arc(id)?.opacity),
            Prop::LabelOpacity(id) => Scalar(self.label(id)?.opacity),
            Prop::LabelX(id) => Scalar(self.label(id)?.position.x),
            Prop::GroupX(id) => Scalar(self.group(id)?.position.x),
            Prop::GroupY(id) => Scalar(self.group(id)?.position.y),
        })
    }

    /// Write an animatable field. Progress and opacity are clamped to `[0, 1]`.
    pub fn set(&mut self, prop: Prop, value: PropValue) -> GoldResult<()> {
        let unit = |v: f64| v.clamp(0.0, 1.0);
        match prop {
            Prop::LineProgress(id) => self.line_mut(id)?.progress = unit(value.scalar(prop)?),
            Prop::LineStroke(id) => self.line_mut(id)?.stroke = value.color(prop)?,
            Prop::LineOpacity(id) => self.line_mut(id)?.opacity = unit(value.scalar(prop)?),
            Prop::ArcEndAngle(id) => self.arc_mut(id)?.end_angle = value.scalar(prop)?,
            Prop::ArcOpacity(id) => self.arc_mut(id)?.opacity = unit(value.scalar(prop)?),
            Prop::LabelOpacity(id) => self.label_mut(id)?.opacity = unit(value.scalar(prop)?),
            Prop::LabelX(id) => self.label_mut(id)?.position.x = value.scalar(prop)?,
            Prop::GroupX(id) => self.group_mut(id)?.position.x = value.scalar(prop)?,
            Prop::GroupY(id) => self.group_mut(id)?.position.y = value.scalar(prop)?,
        }
        Ok(())
    }
}
