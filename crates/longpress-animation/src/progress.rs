//! Normalized progress with asymmetric grow/shrink animation.

use crate::animation::{AnimationSpec, Easing, Tween};
use longpress_core::RuntimeHandle;
use web_time::{Duration, Instant};

/// Holds a progress value in `[0, 1]` and animates changes to it.
///
/// [`progress`](Self::progress) is the logical end state, the value last
/// requested. [`presented_value`](Self::presented_value) is what a renderer
/// should draw right now and lags behind while an animation is in flight.
///
/// Growing uses the full requested duration with linear timing. Shrinking
/// scales the duration by the distance travelled and eases out, so a bar that
/// only filled a little drains back quickly.
pub struct ProgressAnimator {
    runtime: RuntimeHandle,
    value: f32,
    animation: Option<Tween<f32>>,
}

impl ProgressAnimator {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self {
            runtime,
            value: 0.0,
            animation: None,
        }
    }

    /// The logical progress, i.e. the last requested value after clamping.
    pub fn progress(&self) -> f32 {
        self.value
    }

    /// The value being presented at the runtime's current time.
    pub fn presented_value(&self) -> f32 {
        self.presented_value_at(self.runtime.now())
    }

    pub fn presented_value_at(&self, now: Instant) -> f32 {
        match &self.animation {
            Some(tween) => tween.value_at(now),
            None => self.value,
        }
    }

    /// The in-flight animation, if one has not yet finished.
    pub fn active_animation(&self) -> Option<&Tween<f32>> {
        let now = self.runtime.now();
        self.animation
            .as_ref()
            .filter(|tween| !tween.is_finished_at(now))
    }

    pub fn is_animating(&self) -> bool {
        self.active_animation().is_some()
    }

    /// Sets the progress without animating.
    pub fn snap_to(&mut self, value: f32) {
        self.set_progress(value, Duration::ZERO, Duration::ZERO, false);
    }

    /// Requests a new progress value.
    ///
    /// Any animation already in flight is replaced. An animated request starts
    /// from the currently presented value rather than the previous target, so
    /// retargeting mid-flight never makes the bar jump.
    pub fn set_progress(&mut self, value: f32, duration: Duration, delay: Duration, animated: bool) {
        let target = clamp_progress(value);
        let now = self.runtime.now();

        if !animated {
            log::trace!("progress set to {target}");
            self.value = target;
            self.animation = None;
            return;
        }

        let from = self.presented_value_at(now);
        self.value = target;

        let spec = if target > from {
            AnimationSpec::linear(duration)
        } else if target < from {
            let distance = f64::from(from - target);
            let scaled = Duration::try_from_secs_f64(duration.as_secs_f64() * distance)
                .unwrap_or(duration);
            AnimationSpec::tween(scaled, Easing::EaseOut)
        } else {
            self.animation = None;
            return;
        };
        let spec = spec.with_delay(delay);

        log::trace!(
            "progress animating {from} -> {target} over {:?} after {:?}",
            spec.duration,
            spec.delay
        );
        self.animation = Some(Tween::new(from, target, now, spec));
    }
}

fn clamp_progress(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "tests/progress_tests.rs"]
mod tests;
