use crate::animation::ease::Ease;
use crate::foundation::error::{GoldError, GoldResult};
use crate::scene::{Prop, PropValue, Scene};

/// Transition of one field from its current value to `to` over `duration` seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Tween {
    /// Field to animate.
    pub target: Prop,
    /// Target value.
    pub to: PropValue,
    /// Duration in seconds; `0` applies `to` instantly.
    pub duration: f64,
    /// Easing curve.
    pub ease: Ease,
}

impl Tween {
    /// Linear tween.
    pub fn linear(target: Prop, to: PropValue, duration: f64) -> Self {
        Self::eased(target, to, duration, Ease::Linear)
    }

    /// Tween with an explicit easing curve.
    pub fn eased(target: Prop, to: PropValue, duration: f64, ease: Ease) -> Self {
        Self {
            target,
            to,
            duration,
            ease,
        }
    }
}

/// Chain of tweens run back to back inside a parallel group.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Track {
    /// Tweens in order; each starts from the value the previous one reached.
    pub tweens: Vec<Tween>,
}

impl Track {
    /// Total duration of the chain.
    pub fn duration(&self) -> f64 {
        self.tweens.iter().map(|t| t.duration).sum()
    }
}

impl From<Tween> for Track {
    fn from(tween: Tween) -> Self {
        Self {
            tweens: vec![tween],
        }
    }
}

/// What a stage does.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StageKind {
    /// Single transition.
    Tween {
        /// The transition.
        tween: Tween,
    },
    /// Tracks running concurrently; completes when the longest one does.
    Parallel {
        /// Concurrent tracks.
        tracks: Vec<Track>,
    },
    /// Pure hold with no property change.
    Wait {
        /// Hold length in seconds.
        secs: f64,
    },
}

/// One step of the choreography.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Stage {
    /// Short description used in logs and dumps.
    pub name: String,
    /// Behavior.
    #[serde(flatten)]
    pub kind: StageKind,
}

impl Stage {
    /// Single-tween stage.
    pub fn tween(name: impl Into<String>, tween: Tween) -> Self {
        Self {
            name: name.into(),
            kind: StageKind::Tween { tween },
        }
    }

    /// Parallel group stage.
    pub fn parallel(name: impl Into<String>, tracks: Vec<Track>) -> Self {
        Self {
            name: name.into(),
            kind: StageKind::Parallel { tracks },
        }
    }

    /// Hold stage.
    pub fn wait(secs: f64) -> Self {
        Self {
            name: format!("wait {secs}s"),
            kind: StageKind::Wait { secs },
        }
    }

    /// Completion time of the stage relative to its start.
    pub fn duration(&self) -> f64 {
        match &self.kind {
            StageKind::Tween { tween } => tween.duration,
            StageKind::Parallel { tracks } => {
                tracks.iter().map(Track::duration).fold(0.0, f64::max)
            }
            StageKind::Wait { secs } => *secs,
        }
    }

    /// Tracks of this stage; a single tween is a one-tween track.
    pub fn tracks(&self) -> Vec<Track> {
        match &self.kind {
            StageKind::Tween { tween } => vec![Track::from(*tween)],
            StageKind::Parallel { tracks } => tracks.clone(),
            StageKind::Wait { .. } => Vec::new(),
        }
    }

    fn validate(&self, scene: &Scene) -> GoldResult<()> {
        if !self.duration().is_finite() || self.duration() < 0.0 {
            return Err(GoldError::timeline(format!(
                "stage '{}' has invalid duration {}",
                self.name,
                self.duration()
            )));
        }
        let tracks = self.tracks();
        for (i, track) in tracks.iter().enumerate() {
            for tween in &track.tweens {
                if !tween.duration.is_finite() || tween.duration < 0.0 {
                    return Err(GoldError::timeline(format!(
                        "stage '{}' has a tween with invalid duration {}",
                        self.name, tween.duration
                    )));
                }
                if tween.target.kind() != tween.to.kind() {
                    return Err(GoldError::timeline(format!(
                        "stage '{}': {:?} cannot take {:?}",
                        self.name, tween.target, tween.to
                    )));
                }
                scene.get(tween.target)?;

                // Concurrent tracks must address disjoint fields.
                let clash = tracks[i + 1..]
                    .iter()
                    .flat_map(|t| &t.tweens)
                    .any(|other| other.target == tween.target);
                if clash {
                    return Err(GoldError::timeline(format!(
                        "stage '{}': {:?} is written by two concurrent tracks",
                        self.name, tween.target
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Scheduled stage with its absolute start time.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScheduledStage {
    /// Start time in seconds.
    pub start: f64,
    /// Duration in seconds.
    pub duration: f64,
    /// Completion time in seconds; the start of the next stage.
    pub end: f64,
    /// The stage.
    pub stage: Stage,
}

/// Totally ordered, finite list of stages.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Timeline {
    /// Stages in execution order.
    pub stages: Vec<Stage>,
}

impl Timeline {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage.
    pub fn push(&mut self, stage: Stage) {
        self.stages.push(stage);
    }

    /// Total duration in seconds.
    pub fn duration(&self) -> f64 {
        self.stages.iter().map(Stage::duration).sum()
    }

    /// Stages with absolute start and end times; each begins exactly at the previous end.
    pub fn schedule(&self) -> Vec<ScheduledStage> {
        let mut t = 0.0;
        self.stages
            .iter()
            .map(|stage| {
                let duration = stage.duration();
                let start = t;
                t += duration;
                ScheduledStage {
                    start,
                    duration,
                    end: t,
                    stage: stage.clone(),
                }
            })
            .collect()
    }

    /// Check durations, value kinds, handles and concurrent write sets against `scene`.
    pub fn validate(&self, scene: &Scene) -> GoldResult<()> {
        self.stages.iter().try_for_each(|s| s.validate(scene))
    }
}

/// Parallel group fading every line, arc and label of `scene` to zero opacity.
///
/// Targets are absolute, so applying it to an already faded scene changes nothing.
pub fn teardown_stage(scene: &Scene, duration: f64, ease: Ease) -> Stage {
    let zero = PropValue::Scalar(0.0);
    let lines = scene.line_ids().map(Prop::LineOpacity);
    let arcs = scene.arc_ids().map(Prop::ArcOpacity);
    let labels = scene.label_ids().map(Prop::LabelOpacity);
    let tracks = lines
        .chain(arcs)
        .chain(labels)
        .map(|p| Track::from(Tween::eased(p, zero, duration, ease)))
        .collect();
    Stage::parallel("teardown", tracks)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/stage.rs"]
mod tests;
