//! Unit tests for the private classification and feedback math. Tests that
//! exercise the card through its public API live in `tests/card_tests.rs`.

use super::*;

const EPS: f32 = 1e-4;

// --- classification ---

#[test]
fn vertical_wins_when_both_thresholds_cross() {
    assert_eq!(classify(150.0, 150.0, SwipeAxis::Any), Some(SwipeDirection::Bottom));
    assert_eq!(classify(150.0, -150.0, SwipeAxis::Any), Some(SwipeDirection::Top));
}

#[test]
fn thresholds_are_strict() {
    assert_eq!(classify(120.0, 0.0, SwipeAxis::Any), None);
    assert_eq!(classify(-120.0, 0.0, SwipeAxis::Any), None);
    assert_eq!(classify(0.0, 120.0, SwipeAxis::Any), None);
    assert_eq!(classify(120.5, 0.0, SwipeAxis::Any), Some(SwipeDirection::Right));
    assert_eq!(classify(-120.5, 0.0, SwipeAxis::Any), Some(SwipeDirection::Left));
    assert_eq!(classify(0.0, -120.5, SwipeAxis::Any), Some(SwipeDirection::Top));
}

#[test]
fn axis_restriction_suppresses_crossed_thresholds() {
    assert_eq!(classify(0.0, 150.0, SwipeAxis::Horizontal), None);
    assert_eq!(classify(150.0, 0.0, SwipeAxis::Vertical), None);
    // A suppressed vertical crossing falls through to the horizontal one.
    assert_eq!(
        classify(150.0, 150.0, SwipeAxis::Horizontal),
        Some(SwipeDirection::Right)
    );
    assert_eq!(
        classify(150.0, 150.0, SwipeAxis::Vertical),
        Some(SwipeDirection::Bottom)
    );
}

// --- feedback math ---

#[test]
fn rotation_saturates_at_eighth_pi_beyond_full_strength() {
    for dx in [320.0, 500.0, 1000.0] {
        let expected = AffineTransform::rotation(ROTATION_MAX_ANGLE).scaled(SCALE_MAX);
        assert!(feedback_transform(dx).approx_eq(&expected, EPS), "dx={dx}");

        let mirrored = AffineTransform::rotation(-ROTATION_MAX_ANGLE).scaled(SCALE_MAX);
        assert!(feedback_transform(-dx).approx_eq(&mirrored, EPS), "dx=-{dx}");
    }
}

#[test]
fn small_displacement_rotates_and_scales_proportionally() {
    // dx = 6.4 -> ratio 0.02 -> angle pi/8 * 0.02, scale 1 + 0.02/2 = 1.01.
    let transform = feedback_transform(6.4);
    let expected = AffineTransform::rotation(ROTATION_MAX_ANGLE * 0.02).scaled(1.01);
    assert!(transform.approx_eq(&expected, EPS));
}

#[test]
fn scale_grows_with_displacement_and_caps_at_max() {
    // The uniform scale factor of a rotate+scale matrix is sqrt(a^2 + b^2).
    let scale_of = |dx: f32| {
        let t = feedback_transform(dx);
        (t.a * t.a + t.b * t.b).sqrt()
    };
    assert!((scale_of(0.0) - 1.0).abs() < EPS);
    assert!((scale_of(6.4) - 1.01).abs() < EPS);
    // Anything past ratio 0.04 hits the cap.
    assert!((scale_of(64.0) - SCALE_MAX).abs() < EPS);
    assert!((scale_of(-320.0) - SCALE_MAX).abs() < EPS);
}
