//! Easing curves and time-sampled tweens.

use web_time::{Duration, Instant};

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * f64::from(fraction)
    }
}

/// Timing curves.
///
/// The bezier control points are the ones platform animation frameworks use
/// for their named timing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed.
    LinearEasing,
    /// Starts slow, ends at full speed.
    EaseIn,
    /// Starts at full speed, decelerates into the target.
    EaseOut,
    /// Slow at both ends.
    EaseInOut,
}

impl Easing {
    /// Apply the easing function to a linear fraction in `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction.clamp(0.0, 1.0),
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
        }
    }
}

/// Evaluates the unit cubic bezier `(0,0) (x1,y1) (x2,y2) (1,1)` at horizontal
/// position `fraction`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let (ax, bx, cx) = polynomial(x1, x2);
    let (ay, by, cy) = polynomial(y1, y2);
    let sample = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;
    let slope = |t: f32| (3.0 * ax * t + 2.0 * bx) * t + cx;

    // Newton-Raphson first; it converges in a few steps for the curves above.
    let mut t = fraction;
    for _ in 0..8 {
        let error = sample(ax, bx, cx, t) - fraction;
        if error.abs() < 1e-6 {
            return sample(ay, by, cy, t);
        }
        let derivative = slope(t);
        if derivative.abs() < 1e-6 {
            break;
        }
        t = (t - error / derivative).clamp(0.0, 1.0);
    }

    // Bisection when the slope flattens out.
    let (mut low, mut high) = (0.0f32, 1.0f32);
    t = fraction;
    for _ in 0..24 {
        let error = sample(ax, bx, cx, t) - fraction;
        if error.abs() < 1e-6 {
            break;
        }
        if error > 0.0 {
            high = t;
        } else {
            low = t;
        }
        t = 0.5 * (low + high);
    }
    sample(ay, by, cy, t)
}

/// Power-basis coefficients of one axis of a unit cubic bezier.
fn polynomial(p1: f32, p2: f32) -> (f32, f32, f32) {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (a, b, c)
}

/// Animation specification combining duration, easing and start delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
    /// Time between the request and the first movement.
    pub delay: Duration,
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            delay: Duration::ZERO,
        }
    }

    pub fn linear(duration: Duration) -> Self {
        Self::tween(duration, Easing::LinearEasing)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Delay plus duration.
    pub fn total(&self) -> Duration {
        self.delay.saturating_add(self.duration)
    }
}

/// A single transition from one value to another, sampled by time.
///
/// Before `start + delay` the value is `from`; after `start + delay + duration`
/// it is `to`. A zero duration jumps straight to `to` once the delay elapses.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    start: Instant,
    spec: AnimationSpec,
}

impl<T: Lerp + Clone> Tween<T> {
    pub fn new(from: T, to: T, start: Instant, spec: AnimationSpec) -> Self {
        Self {
            from,
            to,
            start,
            spec,
        }
    }

    /// A tween that already sits at `value`.
    pub fn settled(value: T, start: Instant) -> Self {
        Self::new(
            value.clone(),
            value,
            start,
            AnimationSpec::linear(Duration::ZERO),
        )
    }

    pub fn from(&self) -> &T {
        &self.from
    }

    pub fn to(&self) -> &T {
        &self.to
    }

    /// The instant the tween was requested at, before any delay.
    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn spec(&self) -> &AnimationSpec {
        &self.spec
    }

    /// Linear (un-eased) progress through the tween at `now`.
    pub fn fraction_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start);
        let Some(running) = elapsed.checked_sub(self.spec.delay) else {
            return 0.0;
        };
        if self.spec.duration.is_zero() {
            return 1.0;
        }
        (running.as_secs_f64() / self.spec.duration.as_secs_f64()).clamp(0.0, 1.0) as f32
    }

    pub fn value_at(&self, now: Instant) -> T {
        let fraction = self.fraction_at(now);
        if fraction >= 1.0 {
            self.to.clone()
        } else if fraction <= 0.0 {
            self.from.clone()
        } else {
            self.from.lerp(&self.to, self.spec.easing.transform(fraction))
        }
    }

    pub fn is_finished_at(&self, now: Instant) -> bool {
        self.fraction_at(now) >= 1.0
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
