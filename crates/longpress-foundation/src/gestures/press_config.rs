use crate::press_constants::{DEFAULT_MINIMUM_PRESS_DURATION, DEFAULT_REQUIRED_PRESS_DURATION};
use web_time::Duration;

/// Thresholds for one press interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressConfig {
    /// Time from contact until long-press testing starts.
    pub minimum_press_duration: Duration,
    /// Time from the start of testing until the press is recognized.
    pub required_press_duration: Duration,
}

impl PressConfig {
    pub fn new(minimum_press_duration: Duration, required_press_duration: Duration) -> Self {
        Self {
            minimum_press_duration,
            required_press_duration,
        }
    }

    pub fn with_minimum_press_duration(mut self, duration: Duration) -> Self {
        self.minimum_press_duration = duration;
        self
    }

    pub fn with_required_press_duration(mut self, duration: Duration) -> Self {
        self.required_press_duration = duration;
        self
    }

    /// Total hold time from contact to recognition.
    pub fn total_press_duration(&self) -> Duration {
        self.minimum_press_duration
            .saturating_add(self.required_press_duration)
    }
}

impl Default for PressConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_MINIMUM_PRESS_DURATION,
            DEFAULT_REQUIRED_PRESS_DURATION,
        )
    }
}
