//! Press-duration gesture detector.
//!
//! A single-pointer contact enters `Began` immediately. If it is still held
//! after the minimum duration the detector enters `Testing`, and after the
//! required duration on top of that it is `Recognized`. Lifting or losing the
//! contact earlier cancels it; a second pointer fails it.
//!
//! The detector keeps at most one timer pending. Every timer callback carries
//! its [`TimerId`] and is ignored unless that id is the one still pending.

use super::{PressAnomaly, PressConfig};
use crate::input::{PointerEvent, PointerEventKind};
use longpress_core::{RuntimeHandle, TimerId, TimerRegistration};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;
use web_time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PressPhase {
    #[default]
    Idle,
    Began,
    Testing,
    Recognized,
    Cancelled,
    Failed,
}

impl PressPhase {
    /// A contact is being tracked.
    pub fn is_active(self) -> bool {
        matches!(self, PressPhase::Began | PressPhase::Testing)
    }

    /// The interaction is over; `reset` is required before the next one.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            PressPhase::Recognized | PressPhase::Cancelled | PressPhase::Failed
        )
    }
}

/// Notification emitted once per phase transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressEvent {
    Began,
    TestingStarted,
    Recognized,
    Cancelled,
    Failed,
}

impl PressEvent {
    /// The phase the detector is in when this event is emitted.
    pub fn phase(self) -> PressPhase {
        match self {
            PressEvent::Began => PressPhase::Began,
            PressEvent::TestingStarted => PressPhase::Testing,
            PressEvent::Recognized => PressPhase::Recognized,
            PressEvent::Cancelled => PressPhase::Cancelled,
            PressEvent::Failed => PressPhase::Failed,
        }
    }
}

/// Detector state captured at the moment a notification was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PressSnapshot {
    pub phase: PressPhase,
    /// Phase the detector left. Distinguishes a cancel from `Began` from one
    /// from `Testing`.
    pub previous_phase: PressPhase,
    pub is_testing: bool,
    /// Thresholds of the interaction this notification belongs to.
    pub config: PressConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PressTimer {
    Minimum,
    Required,
}

struct PendingTimer {
    kind: PressTimer,
    registration: TimerRegistration,
}

type PressListener = Rc<RefCell<dyn FnMut(PressEvent, &PressSnapshot)>>;
type Notification = (PressEvent, PressSnapshot);

struct DetectorInner {
    runtime: RuntimeHandle,
    config: PressConfig,
    /// Config captured at contact; edits to `config` wait for the next contact.
    interaction: Option<PressConfig>,
    phase: PressPhase,
    is_testing: bool,
    pending: Option<PendingTimer>,
    last_anomaly: Option<PressAnomaly>,
    listener: Option<PressListener>,
    queue: VecDeque<Notification>,
    dispatching: bool,
}

impl DetectorInner {
    fn effective_config(&self) -> PressConfig {
        self.interaction.unwrap_or(self.config)
    }

    fn transition(&mut self, phase: PressPhase, event: PressEvent) -> Notification {
        let previous_phase = self.phase;
        self.phase = phase;
        log::debug!("press {previous_phase:?} -> {phase:?}");
        let snapshot = PressSnapshot {
            phase,
            previous_phase,
            is_testing: self.is_testing,
            config: self.effective_config(),
        };
        (event, snapshot)
    }

    /// Drops the pending timer, cancelling it if it has not fired.
    fn clear_timer(&mut self) {
        self.pending = None;
        self.is_testing = false;
    }

    fn record(&mut self, anomaly: PressAnomaly) {
        log::debug!("{anomaly}");
        self.last_anomaly = Some(anomaly);
    }
}

/// Tracks one pointer interaction at a time and reports how long it was held.
///
/// Cloning yields another handle to the same detector. Dropping the last
/// handle cancels any pending timer.
#[derive(Clone)]
pub struct PressDetector {
    inner: Rc<RefCell<DetectorInner>>,
}

impl PressDetector {
    pub fn new(runtime: RuntimeHandle, config: PressConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(DetectorInner {
                runtime,
                config,
                interaction: None,
                phase: PressPhase::Idle,
                is_testing: false,
                pending: None,
                last_anomaly: None,
                listener: None,
                queue: VecDeque::new(),
                dispatching: false,
            })),
        }
    }

    /// Registers the receiver of phase notifications, replacing any previous one.
    ///
    /// The listener runs with no detector borrow held, so it may query or reset
    /// the detector. Notifications raised from inside the listener are queued
    /// and delivered after it returns.
    pub fn set_listener(&self, listener: impl FnMut(PressEvent, &PressSnapshot) + 'static) {
        let listener: PressListener = Rc::new(RefCell::new(listener));
        self.inner.borrow_mut().listener = Some(listener);
    }

    pub fn clear_listener(&self) {
        self.inner.borrow_mut().listener = None;
    }

    pub fn runtime(&self) -> RuntimeHandle {
        self.inner.borrow().runtime.clone()
    }

    pub fn phase(&self) -> PressPhase {
        self.inner.borrow().phase
    }

    /// True only while in [`PressPhase::Testing`].
    pub fn is_testing(&self) -> bool {
        self.inner.borrow().is_testing
    }

    pub fn has_pending_timer(&self) -> bool {
        self.inner
            .borrow()
            .pending
            .as_ref()
            .is_some_and(|pending| pending.registration.is_active())
    }

    pub fn last_anomaly(&self) -> Option<PressAnomaly> {
        self.inner.borrow().last_anomaly.clone()
    }

    /// Configured thresholds, applied from the next contact on.
    pub fn config(&self) -> PressConfig {
        self.inner.borrow().config
    }

    /// Thresholds of the interaction in progress, or the configured ones when idle.
    pub fn effective_config(&self) -> PressConfig {
        self.inner.borrow().effective_config()
    }

    pub fn set_config(&self, config: PressConfig) {
        self.inner.borrow_mut().config = config;
    }

    pub fn set_minimum_press_duration(&self, duration: Duration) {
        self.inner.borrow_mut().config.minimum_press_duration = duration;
    }

    pub fn set_required_press_duration(&self, duration: Duration) {
        self.inner.borrow_mut().config.required_press_duration = duration;
    }

    pub fn handle_pointer(&self, event: &PointerEvent) {
        let notification = match event.kind {
            PointerEventKind::Down => self.contact(event.pointer_count()),
            PointerEventKind::Up | PointerEventKind::Cancel => self.release(event.kind),
        };
        if let Some(notification) = notification {
            self.dispatch(notification);
        }
    }

    /// Returns to `Idle`, cancelling any pending timer. Emits nothing.
    pub fn reset(&self) {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        if inner.phase == PressPhase::Idle && inner.pending.is_none() {
            return;
        }
        log::debug!("press reset from {:?}", inner.phase);
        inner.clear_timer();
        inner.interaction = None;
        inner.phase = PressPhase::Idle;
    }

    fn contact(&self, pointers: usize) -> Option<Notification> {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        if pointers == 0 {
            log::trace!("ignoring contact without pointers");
            return None;
        }
        let phase = inner.phase;
        match phase {
            PressPhase::Idle if pointers == 1 => {
                let config = inner.config;
                inner.interaction = Some(config);
                self.schedule(inner, PressTimer::Minimum, config.minimum_press_duration);
                Some(inner.transition(PressPhase::Began, PressEvent::Began))
            }
            PressPhase::Idle | PressPhase::Began | PressPhase::Testing => {
                let in_contact = if phase.is_active() {
                    pointers + 1
                } else {
                    inner.interaction = Some(inner.config);
                    pointers
                };
                inner.record(PressAnomaly::MultiTouchRejected {
                    pointers: in_contact,
                });
                inner.clear_timer();
                Some(inner.transition(PressPhase::Failed, PressEvent::Failed))
            }
            _ => {
                log::debug!("contact ignored while {phase:?}; reset required");
                None
            }
        }
    }

    fn release(&self, kind: PointerEventKind) -> Option<Notification> {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        if !inner.phase.is_active() {
            log::trace!("{kind:?} ignored while {:?}", inner.phase);
            return None;
        }
        inner.clear_timer();
        Some(inner.transition(PressPhase::Cancelled, PressEvent::Cancelled))
    }

    fn schedule(&self, inner: &mut DetectorInner, kind: PressTimer, delay: Duration) {
        let weak = Rc::downgrade(&self.inner);
        let registration = inner.runtime.schedule_after(delay, move |id, _| {
            if let Some(inner) = weak.upgrade() {
                PressDetector { inner }.timer_fired(id);
            }
        });
        // Replacing the slot drops, and so cancels, whatever was pending.
        inner.pending = Some(PendingTimer { kind, registration });
    }

    pub(crate) fn timer_fired(&self, id: TimerId) {
        let notification = {
            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;
            let pending_kind = inner
                .pending
                .as_ref()
                .filter(|pending| pending.registration.id() == Some(id))
                .map(|pending| pending.kind);
            let Some(kind) = pending_kind else {
                inner.record(PressAnomaly::StaleTimerIgnored { timer: id });
                return;
            };
            match (kind, inner.phase) {
                (PressTimer::Minimum, PressPhase::Began) => {
                    let required = inner.effective_config().required_press_duration;
                    inner.is_testing = true;
                    self.schedule(inner, PressTimer::Required, required);
                    inner.transition(PressPhase::Testing, PressEvent::TestingStarted)
                }
                (PressTimer::Required, PressPhase::Testing) => {
                    inner.clear_timer();
                    inner.transition(PressPhase::Recognized, PressEvent::Recognized)
                }
                _ => {
                    inner.pending = None;
                    inner.record(PressAnomaly::StaleTimerIgnored { timer: id });
                    return;
                }
            }
        };
        self.dispatch(notification);
    }

    #[cfg(test)]
    fn pending_timer_id(&self) -> Option<TimerId> {
        self.inner
            .borrow()
            .pending
            .as_ref()
            .and_then(|pending| pending.registration.id())
    }

    fn dispatch(&self, notification: Notification) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.queue.push_back(notification);
            if inner.dispatching {
                return;
            }
            inner.dispatching = true;
        }
        loop {
            let (next, listener) = {
                let mut inner = self.inner.borrow_mut();
                match inner.queue.pop_front() {
                    Some(next) => (next, inner.listener.clone()),
                    None => {
                        inner.dispatching = false;
                        break;
                    }
                }
            };
            if let Some(listener) = listener {
                let (event, snapshot) = next;
                (listener.borrow_mut())(event, &snapshot);
            }
        }
    }
}

impl fmt::Debug for PressDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("PressDetector")
            .field("phase", &inner.phase)
            .field("is_testing", &inner.is_testing)
            .field("config", &inner.config)
            .field("pending", &inner.pending.as_ref().map(|pending| pending.kind))
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/press_tests.rs"]
mod tests;
