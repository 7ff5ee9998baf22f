//! Animation system for the swipecard gesture engine.
//!
//! Time-based tween animations driven by an explicit [`FrameClock`]. The
//! clock hands out one-shot frame callbacks; a [`Transition`] re-registers
//! itself every frame until its duration elapses, then fires a completion
//! callback. Everything is single-threaded (`Rc`/`RefCell`), matching the
//! event-driven model of the card component.
//!
//! There is deliberately no spring/physics animation type: the card's two
//! animations (snap-back and exit) are plain fixed-duration tweens.

mod clock;
mod easing;
mod lerp;
mod transition;

pub use clock::{FrameCallbackRegistration, FrameClock};
pub use easing::{AnimationSpec, Easing};
pub use lerp::Lerp;
pub use transition::Transition;
