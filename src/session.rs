use crate::config::SceneConfig;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{GoldError, GoldResult};
use crate::render::cpu::CpuRenderer;
use crate::render::{FrameRGBA, SceneRenderer};
use crate::scene::{GoldenScene, Scene, build_golden_scene};
use crate::timeline::{Player, Timeline, golden_script};

/// Range render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames in the requested range.
    pub frames_total: u64,
    /// Frames actually rasterized.
    pub frames_rendered: u64,
    /// Frames reused because the scene did not change since the previous frame.
    pub frames_elided: u64,
}

/// The golden-ratio presentation: scene, script, player and renderer in one place.
///
/// Frame `i` shows the scene at `i / fps` seconds. The last frame lands at or after the end
/// of the script, so it always shows the final state.
pub struct Presentation {
    cfg: SceneConfig,
    golden: GoldenScene,
    timeline: Timeline,
    player: Player,
    renderer: CpuRenderer,
}

impl Presentation {
    /// Build the scene and script for `cfg`.
    pub fn new(cfg: SceneConfig) -> GoldResult<Self> {
        let golden = build_golden_scene(&cfg)?;
        let timeline = golden_script(&golden, &cfg)?;
        let player = Player::new(&timeline, golden.scene.clone())?;
        let renderer = CpuRenderer::new(cfg.canvas, cfg.background)?;
        tracing::info!(
            stages = timeline.stages.len(),
            duration = timeline.duration(),
            "presentation ready"
        );
        Ok(Self {
            cfg,
            golden,
            timeline,
            player,
            renderer,
        })
    }

    /// Configuration the presentation was built from.
    pub fn config(&self) -> &SceneConfig {
        &self.cfg
    }

    /// Geometry and initial scene.
    pub fn golden(&self) -> &GoldenScene {
        &self.golden
    }

    /// Stage list.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Script duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.timeline.duration()
    }

    /// Number of frames covering the whole script, final state included.
    pub fn total_frames(&self) -> u64 {
        self.cfg.fps.secs_to_frames_ceil(self.duration_secs()) + 1
    }

    /// Presentation time of `frame` in seconds.
    pub fn frame_time(&self, frame: FrameIndex) -> f64 {
        self.cfg.fps.frames_to_secs(frame.0)
    }

    /// Scene state at `frame`.
    pub fn scene_at(&mut self, frame: FrameIndex) -> GoldResult<&Scene> {
        self.check_frame(frame)?;
        self.player.seek(self.frame_time(frame))?;
        Ok(self.player.scene())
    }

    /// Render a single frame.
    pub fn render_frame(&mut self, frame: FrameIndex) -> GoldResult<FrameRGBA> {
        self.check_frame(frame)?;
        self.player.seek(self.frame_time(frame))?;
        self.renderer.render(self.player.scene())
    }

    /// Render `range` and stream frames into `sink` in increasing frame order.
    ///
    /// A frame whose scene state equals the previous frame's is not rasterized again.
    #[tracing::instrument(skip(self, sink), fields(start = range.start.0, end = range.end.0))]
    pub fn render_range(
        &mut self,
        range: FrameRange,
        sink: &mut dyn FrameSink,
    ) -> GoldResult<RenderStats> {
        if range.is_empty() {
            return Err(GoldError::validation(
                "render_range range must be non-empty",
            ));
        }
        if range.end.0 > self.total_frames() {
            return Err(GoldError::validation(format!(
                "render_range end {} exceeds presentation length {}",
                range.end.0,
                self.total_frames()
            )));
        }

        sink.begin(SinkConfig {
            width: self.cfg.canvas.width,
            height: self.cfg.canvas.height,
            fps: self.cfg.fps,
        })?;

        let mut stats = RenderStats::default();
        let mut last: Option<(Scene, FrameRGBA)> = None;
        for idx in range.iter() {
            self.player.seek(self.frame_time(idx))?;
            let scene = self.player.scene();
            stats.frames_total += 1;

            match &last {
                Some((prev, frame)) if prev == scene => {
                    stats.frames_elided += 1;
                    sink.push_frame(idx, frame)?;
                }
                _ => {
                    let frame = self.renderer.render(scene)?;
                    stats.frames_rendered += 1;
                    sink.push_frame(idx, &frame)?;
                    last = Some((scene.clone(), frame));
                }
            }
        }

        sink.end()?;
        tracing::info!(
            total = stats.frames_total,
            rendered = stats.frames_rendered,
            elided = stats.frames_elided,
            "range rendered"
        );
        Ok(stats)
    }

    fn check_frame(&self, frame: FrameIndex) -> GoldResult<()> {
        if frame.0 >= self.total_frames() {
            return Err(GoldError::validation(format!(
                "frame {} is past the end of the presentation ({} frames)",
                frame.0,
                self.total_frames()
            )));
        }
        Ok(())
    }
}
