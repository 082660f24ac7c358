use longpress_core::TimerId;
use std::fmt;

/// Irregular input the press detector absorbed instead of failing.
///
/// Anomalies never reach the collaborator as errors. Each one resolves into a
/// defined phase (or into nothing at all) and is kept only for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PressAnomaly {
    /// More than one pointer was in contact; the interaction failed.
    MultiTouchRejected { pointers: usize },
    /// A timer fired after the detector had already left the phase it was
    /// scheduled for.
    StaleTimerIgnored { timer: TimerId },
}

impl fmt::Display for PressAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PressAnomaly::MultiTouchRejected { pointers } => {
                write!(f, "multi-touch rejected: {pointers} pointers in contact")
            }
            PressAnomaly::StaleTimerIgnored { timer } => {
                write!(f, "stale {timer} ignored")
            }
        }
    }
}

impl std::error::Error for PressAnomaly {}
