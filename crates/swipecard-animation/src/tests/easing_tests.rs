use super::*;

#[test]
fn linear_is_identity() {
    assert_eq!(Easing::Linear.transform(0.0), 0.0);
    assert_eq!(Easing::Linear.transform(0.5), 0.5);
    assert_eq!(Easing::Linear.transform(1.0), 1.0);
}

#[test]
fn easing_bounds_are_correct() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        assert!(
            easing.transform(0.0).abs() < 0.01,
            "start should be ~0 for {:?}",
            easing
        );
        assert!(
            (easing.transform(1.0) - 1.0).abs() < 0.01,
            "end should be ~1 for {:?}",
            easing
        );
    }
}

#[test]
fn easing_is_monotonic() {
    for easing in [Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
        let mut previous = 0.0;
        for step in 1..=20 {
            let value = easing.transform(step as f32 / 20.0);
            assert!(
                value >= previous - 1e-4,
                "{:?} decreased at step {}",
                easing,
                step
            );
            previous = value;
        }
    }
}

#[test]
fn ease_in_starts_slow_ease_out_starts_fast() {
    assert!(Easing::EaseIn.transform(0.25) < 0.25);
    assert!(Easing::EaseOut.transform(0.25) > 0.25);
}

#[test]
fn default_spec_matches_card_timings() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration_millis, 300);
    assert_eq!(spec.easing, Easing::EaseInOut);
    assert_eq!(spec.duration_nanos(), 300_000_000);
}
