use std::path::{Path, PathBuf};

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::encode::{ensure_parent_dir, flatten_premul_over_bg};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{GoldError, GoldResult};
use crate::render::FrameRGBA;

/// Sink writing one PNG per frame as `<dir>/<prefix><index:05>.png`.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    prefix: String,
    bg_rgb: [u8; 3],
    cfg: Option<SinkConfig>,
    written: Vec<PathBuf>,
    scratch: Vec<u8>,
}

impl PngSequenceSink {
    /// Write frames into `dir`, flattening alpha over `bg_rgb`.
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>, bg_rgb: [u8; 3]) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            bg_rgb,
            cfg: None,
            written: Vec::new(),
            scratch: Vec::new(),
        }
    }

    /// Paths written so far, in frame order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn path_for(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("{}{:05}.png", self.prefix, idx.0))
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> GoldResult<()> {
        use anyhow::Context as _;

        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir '{}'", self.dir.display()))?;
        self.scratch = vec![0u8; (cfg.width as usize) * (cfg.height as usize) * 4];
        self.cfg = Some(cfg);
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> GoldResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| GoldError::encode("png sink not started"))?;
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(GoldError::encode(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        let path = self.path_for(idx);
        flatten_premul_over_bg(&mut self.scratch, &frame.data, self.bg_rgb)?;
        write_png(&path, &self.scratch, frame.width, frame.height)?;
        tracing::debug!(frame = idx.0, path = %path.display(), "wrote png");
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> GoldResult<()> {
        self.cfg = None;
        Ok(())
    }
}

/// Write straight RGBA8 pixels to `path` as PNG.
pub fn write_png(path: &Path, rgba: &[u8], width: u32, height: u32) -> GoldResult<()> {
    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        rgba,
        width,
        height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| GoldError::encode(format!("write png '{}': {e}", path.display())))
}

/// Flatten `frame` over `bg_rgb` and write it to `path` as PNG.
pub fn write_frame_png(path: &Path, frame: &FrameRGBA, bg_rgb: [u8; 3]) -> GoldResult<()> {
    let mut rgba = vec![0u8; frame.data.len()];
    if frame.premultiplied {
        flatten_premul_over_bg(&mut rgba, &frame.data, bg_rgb)?;
    } else {
        rgba.copy_from_slice(&frame.data);
    }
    write_png(path, &rgba, frame.width, frame.height)
}
