//! Easing curves and animation specs.

/// Easing functions for tween animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Ease in using a cubic curve.
    EaseIn,
    /// Ease out using a cubic curve.
    EaseOut,
    /// Ease in and out using a cubic curve.
    EaseInOut,
}

impl Easing {
    /// Apply the easing function to a linear fraction in `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
        }
    }
}

/// Cubic bezier easing with control points `(x1, y1)` and `(x2, y2)`.
///
/// Solves for the parametric `t` matching the x fraction by bisection; the
/// curve's x component is monotonic for the control points used above, so
/// bisection always converges.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    fn sample(p1: f32, p2: f32, t: f32) -> f32 {
        // Bernstein form with endpoints fixed at 0 and 1.
        let one_minus = 1.0 - t;
        3.0 * one_minus * one_minus * t * p1 + 3.0 * one_minus * t * t * p2 + t * t * t
    }

    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut t = fraction;
    for _ in 0..24 {
        let x = sample(x1, x2, t);
        if (x - fraction).abs() < 1e-6 {
            break;
        }
        if x > fraction {
            hi = t;
        } else {
            lo = t;
        }
        t = 0.5 * (lo + hi);
    }

    sample(y1, y2, t)
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    pub fn duration_nanos(&self) -> u64 {
        self.duration_millis * 1_000_000
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::EaseInOut)
    }
}

#[cfg(test)]
#[path = "tests/easing_tests.rs"]
mod tests;
