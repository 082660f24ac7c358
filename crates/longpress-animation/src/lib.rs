//! Animation system for the long-press control.
//!
//! Animations here are not driven by frame callbacks. A [`Tween`] is a pure
//! description of a transition and its value is sampled on demand from the
//! elapsed time, so a renderer can read it once per frame.

mod animation;
mod progress;

pub use animation::{AnimationSpec, Easing, Lerp, Tween};
pub use progress::ProgressAnimator;
