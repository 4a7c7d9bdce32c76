//! Frame sinks.
//!
//! Sinks consume rendered frames in timeline order and are driven by
//! [`Presentation::render_range`](crate::session::Presentation::render_range).

/// MP4 output through the system `ffmpeg`.
pub mod ffmpeg;
/// Numbered PNG sequence output.
pub mod png;
/// Sink trait and the in-memory sink.
pub mod sink;

use std::path::Path;

use crate::foundation::error::{GoldError, GoldResult};
use crate::foundation::math::mul_div255_u16;

pub use ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use png::PngSequenceSink;
pub use sink::{FrameSink, InMemorySink, SinkConfig};

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> GoldResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Composite premultiplied RGBA8 over an opaque background into straight opaque RGBA8.
pub(crate) fn flatten_premul_over_bg(
    dst: &mut [u8],
    src_premul: &[u8],
    bg_rgb: [u8; 3],
) -> GoldResult<()> {
    if dst.len() != src_premul.len() || !dst.len().is_multiple_of(4) {
        return Err(GoldError::encode(
            "flatten expects equal-length rgba8 buffers",
        ));
    }

    for (d, s) in dst.chunks_exact_mut(4).zip(src_premul.chunks_exact(4)) {
        let a = u16::from(s[3]);
        if a == 255 {
            d.copy_from_slice(s);
            continue;
        }
        let inv = 255 - a;
        for c in 0..3 {
            let v = u16::from(s[c]) + mul_div255_u16(u16::from(bg_rgb[c]), inv);
            d[c] = v.min(255) as u8;
        }
        d[3] = 255;
    }
    Ok(())
}
