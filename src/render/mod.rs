//! Rasterization of a [`Scene`](crate::scene::Scene) into RGBA8 frames.
//!
//! Lines and arcs are stroked; labels carry no glyph outlines and are not drawn.

/// CPU rasterizer built on `vello_cpu`.
pub mod cpu;

use crate::foundation::error::GoldResult;
use crate::scene::Scene;

/// Rendered frame pixels (RGBA8).
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Tightly packed rows, 4 bytes per pixel.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA bytes of pixel `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Anything that can turn a scene state into pixels.
pub trait SceneRenderer {
    /// Render `scene` as it currently stands.
    fn render(&mut self, scene: &Scene) -> GoldResult<FrameRGBA>;
}
