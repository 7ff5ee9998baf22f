//! Pure math/data for the swipecard gesture engine.
//!
//! Geometry primitives and the affine transform used for drag feedback.
//! This crate has no dependencies; everything downstream builds on it.

mod geometry;
mod transform;

pub use geometry::*;
pub use transform::*;
