//! Test harness for the swipecard gesture engine.
//!
//! [`CardRobot`] drives a real card with synthesized pointer streams and a
//! deterministic frame clock, so tests can express "drag this far, let the
//! animation finish, check where things ended up" without touching
//! platform input. [`RecordingDelegate`] counts every delegate
//! notification for exactly-once assertions.

mod delegate;
mod robot;

pub use delegate::RecordingDelegate;
pub use robot::{CardRobot, FRAME_NANOS};
