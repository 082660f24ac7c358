use super::*;

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::LinearEasing.transform(0.0), 0.0);
    assert_eq!(Easing::LinearEasing.transform(0.5), 0.5);
    assert_eq!(Easing::LinearEasing.transform(1.0), 1.0);
}

#[test]
fn easing_bounds_are_correct() {
    let easings = [
        Easing::LinearEasing,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ];

    for easing in easings {
        assert!(
            easing.transform(0.0).abs() < 0.01,
            "Start should be ~0 for {:?}",
            easing
        );
        assert!(
            (easing.transform(1.0) - 1.0).abs() < 0.01,
            "End should be ~1 for {:?}",
            easing
        );
    }
}

#[test]
fn ease_out_runs_ahead_of_linear() {
    for fraction in [0.1, 0.25, 0.5, 0.75, 0.9] {
        assert!(
            Easing::EaseOut.transform(fraction) > fraction,
            "ease-out at {fraction} should lead linear"
        );
        assert!(Easing::EaseIn.transform(fraction) < fraction);
    }
}

#[test]
fn ease_out_is_monotonic() {
    let mut previous = 0.0;
    for step in 1..=100 {
        let value = Easing::EaseOut.transform(step as f32 / 100.0);
        assert!(value >= previous, "ease-out went backwards at step {step}");
        previous = value;
    }
}

#[test]
fn tween_holds_start_value_during_delay() {
    let start = Instant::now();
    let tween = Tween::new(
        0.2f32,
        1.0,
        start,
        AnimationSpec::linear(Duration::from_secs(1)).with_delay(Duration::from_millis(500)),
    );

    assert_eq!(tween.value_at(start), 0.2);
    assert_eq!(tween.value_at(start + Duration::from_millis(499)), 0.2);
    let halfway = tween.value_at(start + Duration::from_millis(1000));
    assert!((halfway - 0.6).abs() < 1e-4, "got {halfway}");
    assert_eq!(tween.value_at(start + Duration::from_millis(1500)), 1.0);
    assert!(tween.is_finished_at(start + Duration::from_millis(1500)));
}

#[test]
fn zero_duration_tween_jumps_to_target() {
    let start = Instant::now();
    let tween = Tween::new(1.0f32, 0.0, start, AnimationSpec::linear(Duration::ZERO));
    assert_eq!(tween.value_at(start), 0.0);
    assert!(tween.is_finished_at(start));
}

#[test]
fn settled_tween_reports_its_value() {
    let start = Instant::now();
    let tween = Tween::settled(0.96f32, start);
    assert_eq!(tween.value_at(start), 0.96);
    assert_eq!(tween.from(), tween.to());
}

#[test]
fn sampling_before_start_returns_from_value() {
    let start = Instant::now() + Duration::from_secs(1);
    let tween = Tween::new(0.0f32, 1.0, start, AnimationSpec::linear(Duration::from_secs(1)));
    assert_eq!(tween.value_at(Instant::now()), 0.0);
}

#[test]
fn animation_spec_total_includes_delay() {
    let spec = AnimationSpec::tween(Duration::from_millis(300), Easing::EaseOut)
        .with_delay(Duration::from_millis(200));
    assert_eq!(spec.total(), Duration::from_millis(500));
    assert_eq!(spec.easing, Easing::EaseOut);
}
