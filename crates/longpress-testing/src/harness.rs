use longpress_core::RuntimeHandle;
use longpress_foundation::{PointerEvent, PressConfig, PressDetector, PressEvent, PressSnapshot};
use std::cell::RefCell;
use std::rc::Rc;
use web_time::{Duration, Instant};

/// A notification observed by [`PressHarness`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordedPress {
    pub event: PressEvent,
    pub snapshot: PressSnapshot,
    /// Runtime time since the harness was created.
    pub at: Duration,
}

/// Drives a [`PressDetector`] with scripted contacts on a virtual clock.
///
/// Time only moves when the script calls [`hold`](Self::hold), so every
/// scenario is deterministic.
pub struct PressHarness {
    runtime: RuntimeHandle,
    detector: PressDetector,
    start: Instant,
    recorded: Rc<RefCell<Vec<RecordedPress>>>,
}

impl PressHarness {
    pub fn new(config: PressConfig) -> Self {
        let start = Instant::now();
        let runtime = RuntimeHandle::new(start);
        let detector = PressDetector::new(runtime.clone(), config);
        let recorded = Rc::new(RefCell::new(Vec::new()));
        {
            let recorded = Rc::clone(&recorded);
            let runtime = runtime.clone();
            detector.set_listener(move |event, snapshot| {
                recorded.borrow_mut().push(RecordedPress {
                    event,
                    snapshot: *snapshot,
                    at: runtime.now().saturating_duration_since(start),
                });
            });
        }
        Self {
            runtime,
            detector,
            start,
            recorded,
        }
    }

    pub fn with_durations(minimum: Duration, required: Duration) -> Self {
        Self::new(PressConfig::new(minimum, required))
    }

    pub fn runtime(&self) -> &RuntimeHandle {
        &self.runtime
    }

    pub fn detector(&self) -> &PressDetector {
        &self.detector
    }

    pub fn press(&self) -> &Self {
        self.detector.handle_pointer(&PointerEvent::down(1));
        self
    }

    /// Touches down with `pointers` fingers in one event.
    pub fn press_many(&self, pointers: u64) -> &Self {
        self.detector
            .handle_pointer(&PointerEvent::down_many(1..=pointers));
        self
    }

    pub fn release(&self) -> &Self {
        self.detector.handle_pointer(&PointerEvent::up(1));
        self
    }

    pub fn cancel(&self) -> &Self {
        self.detector.handle_pointer(&PointerEvent::cancel(1));
        self
    }

    /// Lets `duration` pass, firing any timers that fall due.
    pub fn hold(&self, duration: Duration) -> &Self {
        self.runtime.advance_by(duration);
        self
    }

    pub fn reset(&self) -> &Self {
        self.detector.reset();
        self
    }

    pub fn elapsed(&self) -> Duration {
        self.runtime.now().saturating_duration_since(self.start)
    }

    pub fn events(&self) -> Vec<PressEvent> {
        self.recorded
            .borrow()
            .iter()
            .map(|record| record.event)
            .collect()
    }

    pub fn recorded(&self) -> Vec<RecordedPress> {
        self.recorded.borrow().clone()
    }

    pub fn count(&self, event: PressEvent) -> usize {
        self.recorded
            .borrow()
            .iter()
            .filter(|record| record.event == event)
            .count()
    }

    pub fn clear_events(&self) {
        self.recorded.borrow_mut().clear();
    }
}
