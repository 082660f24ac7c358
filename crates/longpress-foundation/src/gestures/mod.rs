//! Gesture detectors.

mod anomaly;
mod press;
mod press_config;

pub use anomaly::PressAnomaly;
pub use press::{PressDetector, PressEvent, PressPhase, PressSnapshot};
pub use press_config::PressConfig;
