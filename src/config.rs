use std::path::Path;

use crate::animation::ease::Ease;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{GoldError, GoldResult};
use crate::palette::{Palette, Rgb8};

/// Static configuration of the construction and its presentation.
///
/// Constructed once at startup and passed explicitly to the geometry generator, the scene
/// builder and the script. Fields missing from a JSON document fall back to [`Default`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Overall scale `Z` (width of the outer golden rectangle).
    pub scale: f64,
    /// Stroke width of lines and arcs.
    pub line_width: f64,
    /// Base label height.
    pub label_height: f64,
    /// Drawing speed in length units per second.
    pub speed: f64,
    /// Number of spiral segment slots (and arc slots).
    pub segment_slots: usize,
    /// Output resolution.
    pub canvas: Canvas,
    /// Output frame rate.
    pub fps: Fps,
    /// Background color.
    pub background: Rgb8,
    /// Highlight colors and neutrals.
    pub palette: Palette,
    /// Easing of label fades, recolors and pans. Geometry draw-ins are always linear.
    pub transition_ease: Ease,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            scale: 900.0,
            line_width: 8.0,
            label_height: 40.0,
            speed: 500.0,
            segment_slots: 8,
            canvas: Canvas {
                width: 1920,
                height: 1080,
            },
            fps: Fps { num: 30, den: 1 },
            background: Rgb8::new(0x14, 0x14, 0x14),
            palette: Palette::default(),
            transition_ease: Ease::Linear,
        }
    }
}

impl SceneConfig {
    /// Load a config from a JSON file and validate it.
    pub fn load_json(path: &Path) -> GoldResult<Self> {
        use anyhow::Context as _;

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_str(&text)
            .map_err(|e| GoldError::serde(format!("parse config '{}': {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every static invariant. Any failure is fatal at setup.
    pub fn validate(&self) -> GoldResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(GoldError::validation(format!(
                "scale must be finite and > 0 (got {})",
                self.scale
            )));
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(GoldError::validation(format!(
                "speed must be finite and > 0 (got {})",
                self.speed
            )));
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(GoldError::validation("line_width must be finite and > 0"));
        }
        if !self.label_height.is_finite() || self.label_height <= 0.0 {
            return Err(GoldError::validation("label_height must be finite and > 0"));
        }
        if self.segment_slots == 0 {
            return Err(GoldError::validation("segment_slots must be >= 1"));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(GoldError::validation("canvas width/height must be > 0"));
        }
        if self.canvas.width > u32::from(u16::MAX) || self.canvas.height > u32::from(u16::MAX) {
            return Err(GoldError::validation("canvas width/height must fit in u16"));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        self.palette.validate()
    }
}
