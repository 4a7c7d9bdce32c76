use crate::foundation::error::{GoldError, GoldResult};
use crate::scene::{Prop, PropValue, Scene};
use crate::timeline::stage::{ScheduledStage, Timeline, Tween};

/// Tween resolved against the scene at the moment its stage began.
#[derive(Clone, Copy, Debug)]
struct ResolvedTween {
    from: PropValue,
    tween: Tween,
    /// Start offset within the stage.
    offset: f64,
}

#[derive(Clone, Debug)]
struct ActiveStage {
    index: usize,
    tweens: Vec<ResolvedTween>,
}

/// Driver loop over a [`Timeline`] in simulated time.
///
/// Stages run strictly in order: a stage begins only after the previous one completed, and
/// its start values are read from the scene at that moment. Seeking backwards replays from
/// the initial scene, so the state at any time is deterministic.
#[derive(Clone, Debug)]
pub struct Player {
    schedule: Vec<ScheduledStage>,
    total: f64,
    initial: Scene,
    scene: Scene,
    time: f64,
    cursor: usize,
    active: Option<ActiveStage>,
    aborted: bool,
}

impl Player {
    /// Validate `timeline` against `scene` and position the player at time zero.
    pub fn new(timeline: &Timeline, scene: Scene) -> GoldResult<Self> {
        timeline.validate(&scene)?;
        let schedule = timeline.schedule();
        let total = schedule.last().map_or(0.0, |s| s.end);
        Ok(Self {
            schedule,
            total,
            initial: scene.clone(),
            scene,
            time: 0.0,
            cursor: 0,
            active: None,
            aborted: false,
        })
    }

    /// Current scene state.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Current simulated time in seconds.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Total timeline duration in seconds.
    pub fn duration(&self) -> f64 {
        self.total
    }

    /// Index of the stage in progress, if any.
    pub fn current_stage(&self) -> Option<usize> {
        if self.aborted || self.cursor >= self.schedule.len() {
            None
        } else {
            Some(self.cursor)
        }
    }

    /// `true` once every stage completed or the run was aborted.
    pub fn is_finished(&self) -> bool {
        self.aborted || self.cursor >= self.schedule.len()
    }

    /// `true` if [`Player::abort`] was called.
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// Drop every remaining stage. The scene keeps its current state; there is no resume.
    pub fn abort(&mut self) {
        if !self.aborted {
            tracing::info!(time = self.time, stage = self.cursor, "presentation aborted");
        }
        self.aborted = true;
        self.active = None;
    }

    /// Advance by `dt` seconds.
    pub fn step(&mut self, dt: f64) -> GoldResult<()> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(GoldError::timeline(format!(
                "step must be finite and >= 0 (got {dt})"
            )));
        }
        self.seek(self.time + dt)
    }

    /// Play every remaining stage to completion.
    pub fn run_to_end(&mut self) -> GoldResult<()> {
        self.seek(self.total.max(self.time))
    }

    /// Move to absolute time `t`, applying stage effects in order.
    pub fn seek(&mut self, t: f64) -> GoldResult<()> {
        if !t.is_finite() || t < 0.0 {
            return Err(GoldError::timeline(format!(
                "seek time must be finite and >= 0 (got {t})"
            )));
        }
        if self.aborted {
            return Err(GoldError::timeline("cannot seek an aborted presentation"));
        }
        if t < self.time {
            self.rewind();
        }

        while self.cursor < self.schedule.len() {
            let (start, duration, end) = {
                let s = &self.schedule[self.cursor];
                (s.start, s.duration, s.end)
            };
            if t < start {
                break;
            }
            let active = match self.active.take() {
                Some(active) if active.index == self.cursor => active,
                _ => self.begin_stage(self.cursor)?,
            };

            // Completion is judged against the scheduled end, not `t - start`, which can
            // round below `duration`.
            if t >= end {
                apply(&mut self.scene, &active, duration)?;
                tracing::debug!(
                    stage = self.cursor,
                    name = %self.schedule[self.cursor].stage.name,
                    end,
                    "stage complete"
                );
                self.cursor += 1;
            } else {
                apply(&mut self.scene, &active, (t - start).min(duration))?;
                self.active = Some(active);
                break;
            }
        }

        self.time = t;
        Ok(())
    }

    fn rewind(&mut self) {
        self.scene = self.initial.clone();
        self.time = 0.0;
        self.cursor = 0;
        self.active = None;
    }

    fn begin_stage(&self, index: usize) -> GoldResult<ActiveStage> {
        let stage = &self.schedule[index].stage;
        tracing::debug!(
            stage = index,
            name = %stage.name,
            start = self.schedule[index].start,
            "stage begin"
        );

        let mut tweens = Vec::new();
        for track in stage.tracks() {
            let mut offset = 0.0;
            let mut reached: Vec<(Prop, PropValue)> = Vec::new();
            for tween in track.tweens {
                let from = match reached.iter().rev().find(|(p, _)| *p == tween.target) {
                    Some((_, v)) => *v,
                    None => self.scene.get(tween.target)?,
                };
                tweens.push(ResolvedTween {
                    from,
                    tween,
                    offset,
                });
                reached.push((tween.target, tween.to));
                offset += tween.duration;
            }
        }
        Ok(ActiveStage { index, tweens })
    }
}

/// Write every tween of `stage` that has started by `local` seconds into the stage.
fn apply(scene: &mut Scene, stage: &ActiveStage, local: f64) -> GoldResult<()> {
    for r in &stage.tweens {
        if local < r.offset {
            continue;
        }
        let elapsed = local - r.offset;
        let value = if elapsed >= r.tween.duration {
            r.tween.to
        } else {
            let t = r.tween.ease.apply(elapsed / r.tween.duration);
            PropValue::lerp(r.from, r.tween.to, t)?
        };
        scene.set(r.tween.target, value)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/player.rs"]
mod tests;
