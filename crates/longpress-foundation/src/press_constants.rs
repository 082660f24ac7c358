//! Default press thresholds.

use web_time::Duration;

/// Hold time before a contact stops being a plain tap and long-press testing
/// begins.
pub const DEFAULT_MINIMUM_PRESS_DURATION: Duration = Duration::from_millis(150);

/// Hold time after testing begins until the long press is recognized.
pub const DEFAULT_REQUIRED_PRESS_DURATION: Duration = Duration::from_secs(2);
