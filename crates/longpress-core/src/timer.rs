use crate::platform::Clock;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use web_time::{Duration, Instant};

/// Identity of a scheduled one-shot timer.
///
/// Ids are never reused within a runtime, so a callback can compare the id it
/// was fired with against the one its owner is still waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

type TimerCallback = Box<dyn FnOnce(TimerId, Instant)>;

struct PendingTimer {
    id: TimerId,
    deadline: Instant,
    callback: TimerCallback,
}

struct RuntimeInner {
    now: Instant,
    next_id: u64,
    timers: Vec<PendingTimer>,
}

impl RuntimeInner {
    fn take_due(&mut self, target: Instant) -> Option<PendingTimer> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.deadline <= target)
            .min_by_key(|(_, timer)| (timer.deadline, timer.id))
            .map(|(index, _)| index)?;
        let timer = self.timers.remove(index);
        if timer.deadline > self.now {
            self.now = timer.deadline;
        }
        Some(timer)
    }
}

/// Handle to the single-threaded timer runtime.
///
/// Cloning the handle shares the same runtime. Callbacks run with no internal
/// borrow held, so they may schedule or cancel timers freely.
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Rc<RefCell<RuntimeInner>>,
}

impl RuntimeHandle {
    pub fn new(start: Instant) -> Self {
        Self {
            inner: Rc::new(RefCell::new(RuntimeInner {
                now: start,
                next_id: 1,
                timers: Vec::new(),
            })),
        }
    }

    /// Creates a runtime whose logical time starts at `clock.now()`.
    pub fn with_clock(clock: &impl Clock) -> Self {
        Self::new(clock.now())
    }

    /// Logical time of the runtime.
    ///
    /// While a timer callback runs this is the instant the timer fired at.
    pub fn now(&self) -> Instant {
        self.inner.borrow().now
    }

    /// Schedules `callback` to run once, `delay` after [`now`](Self::now).
    ///
    /// Dropping the returned registration cancels the timer.
    pub fn schedule_after(
        &self,
        delay: Duration,
        callback: impl FnOnce(TimerId, Instant) + 'static,
    ) -> TimerRegistration {
        let mut inner = self.inner.borrow_mut();
        let Some(deadline) = inner.now.checked_add(delay) else {
            log::warn!("timer delay {delay:?} overflows the clock; timer will never fire");
            return TimerRegistration::inactive(self.clone());
        };
        let id = TimerId(inner.next_id);
        inner.next_id += 1;
        inner.timers.push(PendingTimer {
            id,
            deadline,
            callback: Box::new(callback),
        });
        log::trace!("scheduled {id} in {delay:?}");
        drop(inner);
        TimerRegistration::new(self.clone(), id)
    }

    /// Cancels a pending timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel_timer(&self, id: TimerId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.timers.len();
        inner.timers.retain(|timer| timer.id != id);
        let cancelled = inner.timers.len() != before;
        if cancelled {
            log::trace!("cancelled {id}");
        }
        cancelled
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.inner.borrow().timers.iter().any(|timer| timer.id == id)
    }

    pub fn pending_timers(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    /// Earliest deadline among pending timers, for `WaitUntil`-style host scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.inner
            .borrow()
            .timers
            .iter()
            .map(|timer| timer.deadline)
            .min()
    }

    /// Moves logical time forward to `target`, firing every timer due on the way
    /// in deadline order. Returns the number of callbacks run.
    ///
    /// Timers scheduled by a callback are measured from that callback's firing
    /// instant and fire in the same call if they fall due before `target`.
    /// Time never moves backwards.
    pub fn advance_to(&self, target: Instant) -> usize {
        let mut fired = 0;
        loop {
            let next = self.inner.borrow_mut().take_due(target);
            let Some(timer) = next else {
                break;
            };
            let at = self.now();
            log::trace!("firing {}", timer.id);
            (timer.callback)(timer.id, at);
            fired += 1;
        }
        let mut inner = self.inner.borrow_mut();
        if target > inner.now {
            inner.now = target;
        }
        fired
    }

    pub fn advance_by(&self, delta: Duration) -> usize {
        let now = self.now();
        match now.checked_add(delta) {
            Some(target) => self.advance_to(target),
            None => {
                log::warn!("cannot advance runtime by {delta:?}: clock overflow");
                0
            }
        }
    }

    /// Advances to the clock's current time.
    pub fn sync(&self, clock: &impl Clock) -> usize {
        self.advance_to(clock.now())
    }
}

/// Keeps a scheduled timer alive; the timer is cancelled when this is dropped.
pub struct TimerRegistration {
    runtime: RuntimeHandle,
    id: Option<TimerId>,
}

impl TimerRegistration {
    fn new(runtime: RuntimeHandle, id: TimerId) -> Self {
        Self {
            runtime,
            id: Some(id),
        }
    }

    fn inactive(runtime: RuntimeHandle) -> Self {
        Self { runtime, id: None }
    }

    pub fn id(&self) -> Option<TimerId> {
        self.id
    }

    /// Whether the timer is still waiting to fire.
    pub fn is_active(&self) -> bool {
        self.id.is_some_and(|id| self.runtime.is_pending(id))
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_timer(id);
        }
    }
}

impl Drop for TimerRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_timer(id);
        }
    }
}

impl fmt::Debug for TimerRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerRegistration")
            .field("id", &self.id)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/timer_tests.rs"]
mod tests;
