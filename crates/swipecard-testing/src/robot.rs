//! Gesture robot: synthesized pointer streams + deterministic frames.

use swipecard::{CardGestureRecognizer, PointerEvent, PointerEventKind, SwipeCard};
use swipecard_animation::FrameClock;
use swipecard_geometry::Point;

/// Nominal frame duration used by [`CardRobot::advance_frames`] (~60 FPS).
pub const FRAME_NANOS: u64 = 16_666_667;

/// Drives one card with synthesized gestures and frame ticks.
///
/// Pointer positions are in the card's parent coordinate space. Dragging
/// shorter than the touch slop is reported as a tap on release, exactly as
/// with real input.
pub struct CardRobot {
    card: SwipeCard,
    clock: FrameClock,
    recognizer: CardGestureRecognizer,
    now_nanos: u64,
}

impl CardRobot {
    pub fn new(card: SwipeCard, clock: FrameClock) -> Self {
        let recognizer = CardGestureRecognizer::new(card.clone());
        Self {
            card,
            clock,
            recognizer,
            now_nanos: 0,
        }
    }

    pub fn card(&self) -> &SwipeCard {
        &self.card
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Press and release on the card's center without moving.
    pub fn tap(&mut self) {
        let center = self.card.view().center();
        self.dispatch(PointerEventKind::Down, center);
        self.dispatch(PointerEventKind::Up, center);
    }

    /// Press on the card's center, drag by `(dx, dy)` in several moves, and
    /// release.
    pub fn drag_by(&mut self, dx: f32, dy: f32) {
        let start = self.card.view().center();
        self.dispatch(PointerEventKind::Down, start);
        let steps = 8;
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            self.dispatch(
                PointerEventKind::Move,
                start.offset(dx * fraction, dy * fraction),
            );
        }
        self.dispatch(PointerEventKind::Up, start.offset(dx, dy));
    }

    /// Press and drag by `(dx, dy)` without releasing, for mid-gesture
    /// assertions. Follow with [`release`](Self::release).
    pub fn drag_by_without_release(&mut self, dx: f32, dy: f32) {
        let start = self.card.view().center();
        self.dispatch(PointerEventKind::Down, start);
        let steps = 8;
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            self.dispatch(
                PointerEventKind::Move,
                start.offset(dx * fraction, dy * fraction),
            );
        }
    }

    pub fn release(&mut self) {
        let position = self.card.view().center();
        self.dispatch(PointerEventKind::Up, position);
    }

    pub fn cancel(&mut self) {
        let position = self.card.view().center();
        self.dispatch(PointerEventKind::Cancel, position);
    }

    /// Feed one synthesized event through the recognizer and return it (so
    /// tests can inspect consumption).
    pub fn dispatch(&mut self, kind: PointerEventKind, position: Point) -> PointerEvent {
        let event = PointerEvent::new(kind, position);
        self.recognizer.on_pointer_event(&event);
        event
    }

    /// Tick the frame clock `frames` times at ~60 FPS.
    pub fn advance_frames(&mut self, frames: u32) {
        for _ in 0..frames {
            self.now_nanos += FRAME_NANOS;
            self.clock.drain_frame_callbacks(self.now_nanos);
        }
    }

    /// Tick until no animation wants another frame (bounded, so a runaway
    /// animation fails the test instead of hanging it).
    pub fn run_until_idle(&mut self) {
        let mut budget = 600;
        while self.clock.has_pending() && budget > 0 {
            self.advance_frames(1);
            budget -= 1;
        }
        if self.clock.has_pending() {
            log::warn!("frame budget exhausted with callbacks still pending");
        }
    }
}
