//! 2D affine transforms.
//!
//! A transform maps a point as `x' = a*x + c*y + tx`, `y' = b*x + d*y + ty`.
//! Transforms compose with [`AffineTransform::then`]: `m1.then(&m2)` applies
//! `m1` first. The drag feedback builds its rotate-then-scale matrix this way.

use crate::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineTransform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl AffineTransform {
    pub const IDENTITY: AffineTransform = AffineTransform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Counter-clockwise rotation about the origin, in radians.
    pub fn rotation(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        }
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            a: sx,
            b: 0.0,
            c: 0.0,
            d: sy,
            tx: 0.0,
            ty: 0.0,
        }
    }

    pub fn translation(tx: f32, ty: f32) -> Self {
        Self {
            tx,
            ty,
            ..Self::IDENTITY
        }
    }

    /// Compose so that `self` is applied first, then `other`.
    pub fn then(&self, other: &AffineTransform) -> Self {
        Self {
            a: other.a * self.a + other.c * self.b,
            b: other.b * self.a + other.d * self.b,
            c: other.a * self.c + other.c * self.d,
            d: other.b * self.c + other.d * self.d,
            tx: other.a * self.tx + other.c * self.ty + other.tx,
            ty: other.b * self.tx + other.d * self.ty + other.ty,
        }
    }

    /// Follow `self` with a uniform scale.
    pub fn scaled(&self, s: f32) -> Self {
        self.then(&Self::scale(s, s))
    }

    pub fn apply(&self, point: Point) -> Point {
        Point::new(
            self.a * point.x + self.c * point.y + self.tx,
            self.b * point.x + self.d * point.y + self.ty,
        )
    }

    pub fn is_identity(&self) -> bool {
        self.approx_eq(&Self::IDENTITY, f32::EPSILON)
    }

    /// Component-wise comparison with tolerance, for assertions on animated
    /// transforms.
    pub fn approx_eq(&self, other: &AffineTransform, eps: f32) -> bool {
        (self.a - other.a).abs() <= eps
            && (self.b - other.b).abs() <= eps
            && (self.c - other.c).abs() <= eps
            && (self.d - other.d).abs() <= eps
            && (self.tx - other.tx).abs() <= eps
            && (self.ty - other.ty).abs() <= eps
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
#[path = "tests/transform_tests.rs"]
mod tests;
