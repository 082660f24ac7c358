//! Core runtime for the long-press control.
//!
//! Everything here runs on one logical event-loop thread. Timers are one-shot,
//! scheduled against the runtime's monotonic time, and fire only when the host
//! advances that time.

mod platform;
mod timer;

pub use platform::{Clock, SystemClock};
pub use timer::{RuntimeHandle, TimerId, TimerRegistration};

pub use web_time::{Duration, Instant};
