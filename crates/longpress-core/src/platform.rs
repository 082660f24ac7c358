//! Platform abstraction for time.
//!
//! The runtime never reads the wall clock on its own; hosts sample a [`Clock`]
//! and feed the result to [`RuntimeHandle::sync`](crate::RuntimeHandle::sync).

use web_time::{Duration, Instant};

/// Provides monotonic timing information to the host loop.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Instant;

    /// Returns the time elapsed since `since`, or zero if `since` is in the future.
    fn elapsed(&self, since: Instant) -> Duration {
        self.now().saturating_duration_since(since)
    }
}

/// Clock backed by the platform's monotonic clock (`performance.now()` on the web).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
