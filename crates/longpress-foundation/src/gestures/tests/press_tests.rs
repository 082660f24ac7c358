use super::*;

use web_time::Instant;

struct Fixture {
    runtime: RuntimeHandle,
    detector: PressDetector,
    events: Rc<RefCell<Vec<(PressEvent, PressSnapshot)>>>,
}

fn fixture(minimum_millis: u64, required_millis: u64) -> Fixture {
    let runtime = RuntimeHandle::new(Instant::now());
    let detector = PressDetector::new(
        runtime.clone(),
        PressConfig::new(
            Duration::from_millis(minimum_millis),
            Duration::from_millis(required_millis),
        ),
    );
    let events = Rc::new(RefCell::new(Vec::new()));
    {
        let events = Rc::clone(&events);
        detector.set_listener(move |event, snapshot| {
            events.borrow_mut().push((event, *snapshot));
        });
    }
    Fixture {
        runtime,
        detector,
        events,
    }
}

impl Fixture {
    fn events(&self) -> Vec<PressEvent> {
        self.events.borrow().iter().map(|(event, _)| *event).collect()
    }

    fn hold(&self, millis: u64) {
        self.runtime.advance_by(Duration::from_millis(millis));
    }
}

#[test]
fn contact_begins_and_schedules_minimum_timer() {
    let f = fixture(150, 2000);

    f.detector.handle_pointer(&PointerEvent::down(1));

    assert_eq!(f.detector.phase(), PressPhase::Began);
    assert!(!f.detector.is_testing());
    assert!(f.detector.has_pending_timer());
    assert_eq!(f.runtime.pending_timers(), 1);
    assert_eq!(f.events(), vec![PressEvent::Began]);
}

#[test]
fn minimum_timer_enters_testing_and_schedules_required_timer() {
    let f = fixture(150, 2000);
    f.detector.handle_pointer(&PointerEvent::down(1));

    f.hold(150);

    assert_eq!(f.detector.phase(), PressPhase::Testing);
    assert!(f.detector.is_testing());
    assert_eq!(f.runtime.pending_timers(), 1);
    let (event, snapshot) = f.events.borrow()[1];
    assert_eq!(event, PressEvent::TestingStarted);
    assert!(snapshot.is_testing);
    assert_eq!(snapshot.previous_phase, PressPhase::Began);
}

#[test]
fn required_timer_recognizes_press() {
    let f = fixture(150, 2000);
    f.detector.handle_pointer(&PointerEvent::down(1));

    f.hold(2149);
    assert_eq!(f.detector.phase(), PressPhase::Testing);
    f.hold(1);

    assert_eq!(f.detector.phase(), PressPhase::Recognized);
    assert!(!f.detector.is_testing());
    assert!(!f.detector.has_pending_timer());
    assert_eq!(f.runtime.pending_timers(), 0);
    assert_eq!(
        f.events(),
        vec![
            PressEvent::Began,
            PressEvent::TestingStarted,
            PressEvent::Recognized
        ]
    );
}

#[test]
fn release_from_began_cancels_without_testing() {
    let f = fixture(150, 2000);
    f.detector.handle_pointer(&PointerEvent::down(1));
    f.hold(100);

    f.detector.handle_pointer(&PointerEvent::up(1));

    assert_eq!(f.detector.phase(), PressPhase::Cancelled);
    assert_eq!(f.runtime.pending_timers(), 0);
    let (_, snapshot) = f.events.borrow()[1];
    assert_eq!(snapshot.previous_phase, PressPhase::Began);

    f.hold(10_000);
    assert_eq!(f.events(), vec![PressEvent::Began, PressEvent::Cancelled]);
}

#[test]
fn platform_cancel_from_testing_cancels() {
    let f = fixture(150, 2000);
    f.detector.handle_pointer(&PointerEvent::down(1));
    f.hold(1000);

    f.detector.handle_pointer(&PointerEvent::cancel(1));

    assert_eq!(f.detector.phase(), PressPhase::Cancelled);
    assert!(!f.detector.is_testing());
    let (_, snapshot) = f.events.borrow()[2];
    assert_eq!(snapshot.previous_phase, PressPhase::Testing);
    assert!(!snapshot.is_testing);
}

#[test]
fn simultaneous_contacts_fail_immediately() {
    let f = fixture(150, 2000);

    f.detector.handle_pointer(&PointerEvent::down_many([1, 2]));

    assert_eq!(f.detector.phase(), PressPhase::Failed);
    assert_eq!(f.runtime.pending_timers(), 0);
    assert_eq!(
        f.detector.last_anomaly(),
        Some(PressAnomaly::MultiTouchRejected { pointers: 2 })
    );
    assert_eq!(f.events(), vec![PressEvent::Failed]);
}

#[test]
fn second_contact_during_testing_fails_and_cancels_timer() {
    let f = fixture(150, 2000);
    f.detector.handle_pointer(&PointerEvent::down(1));
    f.hold(500);

    f.detector.handle_pointer(&PointerEvent::down(2));

    assert_eq!(f.detector.phase(), PressPhase::Failed);
    assert!(!f.detector.is_testing());
    assert_eq!(f.runtime.pending_timers(), 0);
    assert_eq!(
        f.detector.last_anomaly(),
        Some(PressAnomaly::MultiTouchRejected { pointers: 2 })
    );
    f.hold(10_000);
    assert_eq!(f.detector.phase(), PressPhase::Failed);
}

#[test]
fn terminal_phase_ignores_input_until_reset() {
    let f = fixture(150, 2000);
    f.detector.handle_pointer(&PointerEvent::down(1));
    f.detector.handle_pointer(&PointerEvent::up(1));

    f.detector.handle_pointer(&PointerEvent::down(1));
    f.detector.handle_pointer(&PointerEvent::up(1));
    assert_eq!(f.events(), vec![PressEvent::Began, PressEvent::Cancelled]);

    f.detector.reset();
    f.detector.handle_pointer(&PointerEvent::down(1));
    assert_eq!(f.detector.phase(), PressPhase::Began);
}

#[test]
fn reset_is_idempotent() {
    let f = fixture(150, 2000);
    f.detector.reset();
    assert_eq!(f.detector.phase(), PressPhase::Idle);

    f.detector.handle_pointer(&PointerEvent::down(1));
    f.hold(3000);
    assert_eq!(f.detector.phase(), PressPhase::Recognized);

    f.detector.reset();
    assert_eq!(f.detector.phase(), PressPhase::Idle);
    f.detector.reset();
    assert_eq!(f.detector.phase(), PressPhase::Idle);
    assert_eq!(f.events().len(), 3);
}

#[test]
fn reset_mid_interaction_cancels_pending_timer() {
    let f = fixture(150, 2000);
    f.detector.handle_pointer(&PointerEvent::down(1));
    f.hold(200);
    assert!(f.detector.is_testing());

    f.detector.reset();

    assert_eq!(f.detector.phase(), PressPhase::Idle);
    assert!(!f.detector.is_testing());
    assert_eq!(f.runtime.pending_timers(), 0);
    f.hold(5000);
    assert_eq!(
        f.events(),
        vec![PressEvent::Began, PressEvent::TestingStarted]
    );
}

#[test]
fn stale_timer_callback_is_ignored() {
    let f = fixture(150, 2000);
    f.detector.handle_pointer(&PointerEvent::down(1));
    let minimum_timer = f.detector.pending_timer_id().expect("minimum timer pending");
    f.detector.handle_pointer(&PointerEvent::up(1));

    f.detector.timer_fired(minimum_timer);

    assert_eq!(f.detector.phase(), PressPhase::Cancelled);
    assert_eq!(
        f.detector.last_anomaly(),
        Some(PressAnomaly::StaleTimerIgnored {
            timer: minimum_timer
        })
    );
    assert_eq!(f.events(), vec![PressEvent::Began, PressEvent::Cancelled]);
}

#[test]
fn superseded_timer_id_is_rejected() {
    let f = fixture(150, 2000);
    f.detector.handle_pointer(&PointerEvent::down(1));
    let minimum_timer = f.detector.pending_timer_id().expect("minimum timer pending");
    f.hold(150);
    assert_eq!(f.detector.phase(), PressPhase::Testing);

    f.detector.timer_fired(minimum_timer);

    assert_eq!(f.detector.phase(), PressPhase::Testing);
    assert!(f.detector.has_pending_timer());
    assert!(matches!(
        f.detector.last_anomaly(),
        Some(PressAnomaly::StaleTimerIgnored { .. })
    ));
}

#[test]
fn config_changes_apply_to_next_interaction() {
    let f = fixture(150, 2000);
    f.detector.handle_pointer(&PointerEvent::down(1));

    f.detector.set_required_press_duration(Duration::from_millis(100));
    assert_eq!(
        f.detector.effective_config().required_press_duration,
        Duration::from_millis(2000)
    );
    f.hold(250);
    assert_eq!(f.detector.phase(), PressPhase::Testing);
    f.hold(2000);
    assert_eq!(f.detector.phase(), PressPhase::Recognized);

    f.detector.reset();
    f.detector.handle_pointer(&PointerEvent::down(1));
    f.hold(250);
    assert_eq!(f.detector.phase(), PressPhase::Recognized);
    assert_eq!(f.detector.config().required_press_duration, Duration::from_millis(100));
}

#[test]
fn listener_may_reenter_detector() {
    let f = fixture(150, 2000);
    {
        let detector = f.detector.clone();
        let events = Rc::clone(&f.events);
        f.detector.set_listener(move |event, snapshot| {
            events.borrow_mut().push((event, *snapshot));
            if event == PressEvent::Began {
                detector.handle_pointer(&PointerEvent::up(1));
            }
        });
    }

    f.detector.handle_pointer(&PointerEvent::down(1));

    assert_eq!(f.events(), vec![PressEvent::Began, PressEvent::Cancelled]);
    assert_eq!(f.detector.phase(), PressPhase::Cancelled);
    f.detector.clear_listener();
}

#[test]
fn dropping_detector_releases_its_timer() {
    let f = fixture(150, 2000);
    f.detector.handle_pointer(&PointerEvent::down(1));
    assert_eq!(f.runtime.pending_timers(), 1);

    let Fixture {
        runtime, detector, ..
    } = f;
    drop(detector);

    assert_eq!(runtime.pending_timers(), 0);
}

#[test]
fn event_phase_matches_transition_target() {
    assert_eq!(PressEvent::TestingStarted.phase(), PressPhase::Testing);
    assert!(PressPhase::Failed.is_terminal());
    assert!(PressPhase::Began.is_active());
    assert!(!PressPhase::Idle.is_active());
    assert!(!PressPhase::Idle.is_terminal());
}
