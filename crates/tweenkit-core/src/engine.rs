//! Interpolator: owns vectorized snapshots and advances them by progress.
//!
//! Methods:
//! - new / between / linear (construction), set_progress, invalidate,
//!   animate / animate_then, tick, stop_animation

use crate::config::Config;
use crate::error::TweenError;
use crate::interp::{Ease, InterpolationFunction};
use tweenkit_value::{Vectorizable, Vectorized};

type Apply<T> = Box<dyn FnMut(T)>;
type Completion = Box<dyn FnOnce()>;

/// One externally clocked ramp toward a target progress. At most one per
/// interpolator; completion, stop, and supersession all release it.
struct Ramp {
    target: f32,
    duration: f32,
    on_complete: Option<Completion>,
}

/// Progress-driven tween over two or more typed keyframe values.
///
/// The interpolator is generic over the concrete value type, so the apply
/// callback always receives exactly the type it was constructed with. State
/// moves only through [`set_progress`](Interpolator::set_progress) (directly
/// or via an active ramp); all mutation happens on the thread that owns the
/// interpolator.
pub struct Interpolator<T: Vectorizable> {
    /// Frozen keyframe snapshots, uniform kind, len >= 2.
    values: Vec<Vectorized>,
    /// Component-wise `to - from` per adjacent snapshot pair.
    diff_vectors: Vec<Vec<f32>>,
    /// Mutable blend target, same kind/arity as the snapshots.
    current: Vectorized,
    progress: f32,
    /// Last function-adjusted progress; two-point mode advances from it.
    internal_progress: f32,
    function: Box<dyn InterpolationFunction>,
    apply: Option<Apply<T>>,
    ramp: Option<Ramp>,
    config: Config,
}

/// Component-wise `to - from` for each adjacent snapshot pair.
fn calculate_diffs(values: &[Vectorized]) -> Vec<Vec<f32>> {
    values
        .windows(2)
        .map(|pair| {
            pair[0]
                .components()
                .iter()
                .zip(pair[1].components())
                .map(|(from, to)| to - from)
                .collect()
        })
        .collect()
}

impl<T: Vectorizable> Interpolator<T> {
    /// Build from an ordered keyframe sequence of at least two values.
    ///
    /// All keyframes must vectorize to the same kind; colors in different
    /// native storages do not, and are rejected here.
    pub fn new(
        values: Vec<T>,
        function: impl InterpolationFunction + 'static,
        apply: impl FnMut(T) + 'static,
    ) -> Result<Self, TweenError> {
        if values.len() < 2 {
            return Err(TweenError::TooFewKeyframes {
                count: values.len(),
            });
        }
        let vectors: Vec<Vectorized> = values.iter().map(Vectorizable::vectorize).collect();
        let expected = vectors[0].kind();
        for v in &vectors[1..] {
            if v.kind() != expected {
                return Err(TweenError::MixedKinds {
                    expected,
                    found: v.kind(),
                });
            }
        }
        let diff_vectors = calculate_diffs(&vectors);
        let current = vectors[0].clone();
        Ok(Self {
            values: vectors,
            diff_vectors,
            current,
            progress: 0.0,
            internal_progress: 0.0,
            function: Box::new(function),
            apply: Some(Box::new(apply)),
            ramp: None,
            config: Config::default(),
        })
    }

    /// Two-point convenience form.
    pub fn between(
        from: T,
        to: T,
        function: impl InterpolationFunction + 'static,
        apply: impl FnMut(T) + 'static,
    ) -> Result<Self, TweenError> {
        Self::new(vec![from, to], function, apply)
    }

    /// Two-point form with the default linear curve.
    pub fn linear(from: T, to: T, apply: impl FnMut(T) + 'static) -> Result<Self, TweenError> {
        Self::between(from, to, Ease::Linear, apply)
    }

    /// Set progress, the single state-mutating entry point. Input outside
    /// [0,1] is clamped, never rejected: minor overshoot from external
    /// drivers is routine, not an error.
    pub fn set_progress(&mut self, progress: f32) {
        let clamped = progress.clamp(0.0, 1.0);
        self.progress = clamped;
        let adjusted = self.function.apply(clamped);

        if self.values.len() == 2 {
            // Two-point mode advances incrementally from the last adjusted
            // progress.
            let delta = adjusted - self.internal_progress;
            let diff = &self.diff_vectors[0];
            for (c, d) in self.current.components_mut().iter_mut().zip(diff.iter()) {
                *c += d * delta;
            }
        } else {
            // Keyframe mode reconstructs from the containing segment's
            // origin, so out-of-order progress lands on the same value every
            // time. The segment index is capped at the last segment; an
            // overshooting curve then extrapolates past the final keyframe.
            let scaled = adjusted * (self.values.len() - 1) as f32;
            let segment =
                (((scaled.ceil() - 1.0).max(0.0)) as usize).min(self.diff_vectors.len() - 1);
            let frac = scaled - segment as f32;
            let origin = self.values[segment].components();
            let diff = self.diff_vectors[segment].as_slice();
            let current = self.current.components_mut();
            for i in 0..current.len() {
                current[i] = origin[i] + diff[i] * frac;
            }
        }
        self.internal_progress = adjusted;

        if let Some(apply) = self.apply.as_mut() {
            apply(T::devectorize(&self.current));
        }
    }

    /// Current progress in [0,1].
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Reconstruct the current typed value.
    pub fn value(&self) -> T {
        T::devectorize(&self.current)
    }

    /// Detach the apply callback. Progress changes keep updating the value
    /// but no longer notify. Idempotent.
    pub fn invalidate(&mut self) {
        self.apply = None;
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// Override the assumed clock rate used by ramp duration math.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Begin an externally clocked ramp toward `target_progress` lasting
    /// `duration` seconds at the configured tick rate. Supersedes any ramp
    /// already active; the superseded completion is dropped unfired.
    pub fn animate(&mut self, target_progress: f32, duration: f32) {
        self.start_ramp(target_progress, duration, None);
    }

    /// [`animate`](Interpolator::animate) with a completion invoked exactly
    /// once when the ramp reaches the target or is stopped.
    pub fn animate_then(
        &mut self,
        target_progress: f32,
        duration: f32,
        on_complete: impl FnOnce() + 'static,
    ) {
        self.start_ramp(target_progress, duration, Some(Box::new(on_complete)));
    }

    fn start_ramp(&mut self, target_progress: f32, duration: f32, on_complete: Option<Completion>) {
        if duration <= 0.0 {
            log::warn!("animate with non-positive duration {duration}; target reached on first tick");
        }
        // Replacing the option releases any ramp already held.
        self.ramp = Some(Ramp {
            target: target_progress.clamp(0.0, 1.0),
            duration,
            on_complete,
        });
    }

    /// Advance an active ramp by one clock tick.
    ///
    /// This is the host frame clock's entry point: call it on every tick of
    /// a roughly fixed-rate, cancelable clock. Returns true while the ramp
    /// stays active; once it returns false the host may cancel its
    /// subscription. No-op (returning false) when idle.
    pub fn tick(&mut self) -> bool {
        let (target, duration) = match &self.ramp {
            Some(ramp) => (ramp.target, ramp.duration),
            None => return false,
        };
        let direction: f32 = if target > self.progress { 1.0 } else { -1.0 };
        let step = direction / (duration * self.config.tick_rate);
        let next = self.progress + step;
        // A degenerate duration yields an infinite or wrong-signed step;
        // either way the target is reached on this tick.
        let crossed = !step.is_finite()
            || step * direction <= 0.0
            || (direction > 0.0 && next >= target)
            || (direction < 0.0 && next <= target);
        if crossed {
            self.set_progress(target);
            self.finish_ramp();
            false
        } else {
            self.set_progress(next);
            true
        }
    }

    /// Cancel any active ramp and fire its pending completion immediately,
    /// even if the target was not reached. No-op when idle.
    pub fn stop_animation(&mut self) {
        self.finish_ramp();
    }

    /// Whether a ramp is currently active.
    pub fn is_animating(&self) -> bool {
        self.ramp.is_some()
    }

    fn finish_ramp(&mut self) {
        if let Some(ramp) = self.ramp.take() {
            log::debug!("ramp released at progress {}", self.progress);
            if let Some(done) = ramp.on_complete {
                done();
            }
        }
    }
}
