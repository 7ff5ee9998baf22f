//! Linear interpolation for animatable values.

use swipecard_geometry::{AffineTransform, Point};

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

impl Lerp for Point {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Point::new(
            self.x.lerp(&target.x, fraction),
            self.y.lerp(&target.y, fraction),
        )
    }
}

/// Component-wise interpolation. Good enough for the card's snap-back,
/// which only ever blends between a small rotate+scale and identity.
impl Lerp for AffineTransform {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        AffineTransform {
            a: self.a.lerp(&target.a, fraction),
            b: self.b.lerp(&target.b, fraction),
            c: self.c.lerp(&target.c, fraction),
            d: self.d.lerp(&target.d, fraction),
            tx: self.tx.lerp(&target.tx, fraction),
            ty: self.ty.lerp(&target.ty, fraction),
        }
    }
}

#[cfg(test)]
#[path = "tests/lerp_tests.rs"]
mod tests;
