use longpress_foundation::press_constants::{
    DEFAULT_MINIMUM_PRESS_DURATION, DEFAULT_REQUIRED_PRESS_DURATION,
};
use longpress_foundation::PressConfig;
use longpress_ui_graphics::Color;
use web_time::Duration;

/// Behavior and appearance settings of a [`LongPressButton`](crate::LongPressButton).
#[derive(Clone, Debug, PartialEq)]
pub struct LongPressButtonConfig {
    pub minimum_press_duration: Duration,
    pub required_press_duration: Duration,
    /// Uniform scale applied while a finger is down.
    pub touch_down_scale: f32,
    pub touch_down_duration: Duration,
    pub touch_up_duration: Duration,
    pub progress_color: Option<Color>,
}

impl LongPressButtonConfig {
    pub fn with_press_durations(mut self, minimum: Duration, required: Duration) -> Self {
        self.minimum_press_duration = minimum;
        self.required_press_duration = required;
        self
    }

    pub fn with_touch_down_scale(mut self, scale: f32) -> Self {
        self.touch_down_scale = scale;
        self
    }

    pub fn with_touch_durations(mut self, down: Duration, up: Duration) -> Self {
        self.touch_down_duration = down;
        self.touch_up_duration = up;
        self
    }

    pub fn with_progress_color(mut self, color: Color) -> Self {
        self.progress_color = Some(color);
        self
    }

    pub fn press_config(&self) -> PressConfig {
        PressConfig::new(self.minimum_press_duration, self.required_press_duration)
    }
}

impl Default for LongPressButtonConfig {
    fn default() -> Self {
        Self {
            minimum_press_duration: DEFAULT_MINIMUM_PRESS_DURATION,
            required_press_duration: DEFAULT_REQUIRED_PRESS_DURATION,
            touch_down_scale: 0.96,
            touch_down_duration: Duration::from_millis(50),
            touch_up_duration: Duration::from_millis(100),
            progress_color: Some(Color::RED),
        }
    }
}
