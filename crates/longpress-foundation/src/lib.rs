//! Pointer input and gesture detection for the long-press control.

pub mod gestures;
pub mod input;
pub mod press_constants;

pub use gestures::{
    PressAnomaly, PressConfig, PressDetector, PressEvent, PressPhase, PressSnapshot,
};
pub use input::{PointerEvent, PointerEventKind, PointerId};
