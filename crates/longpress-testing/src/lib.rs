//! Testing utilities and harness for the long-press control.

mod harness;

pub use harness::{PressHarness, RecordedPress};

pub mod prelude {
    pub use crate::harness::{PressHarness, RecordedPress};
    pub use longpress_foundation::{PressConfig, PressEvent, PressPhase};
    pub use web_time::Duration;
}
