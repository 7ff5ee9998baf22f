//! Counting delegate for assertions.

use std::cell::Cell;

use swipecard::{CardDelegate, SwipeCard};

/// A [`CardDelegate`] that counts each notification it receives.
#[derive(Default)]
pub struct RecordingDelegate {
    swiped_left: Cell<u32>,
    swiped_right: Cell<u32>,
    swiped_top: Cell<u32>,
    swiped_bottom: Cell<u32>,
    tapped: Cell<u32>,
}

impl RecordingDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn swiped_left(&self) -> u32 {
        self.swiped_left.get()
    }

    pub fn swiped_right(&self) -> u32 {
        self.swiped_right.get()
    }

    pub fn swiped_top(&self) -> u32 {
        self.swiped_top.get()
    }

    pub fn swiped_bottom(&self) -> u32 {
        self.swiped_bottom.get()
    }

    pub fn tapped(&self) -> u32 {
        self.tapped.get()
    }

    /// Total directional notifications, across all four directions.
    pub fn total_swipes(&self) -> u32 {
        self.swiped_left() + self.swiped_right() + self.swiped_top() + self.swiped_bottom()
    }
}

impl CardDelegate for RecordingDelegate {
    fn card_swiped_left(&self, _card: &SwipeCard) {
        self.swiped_left.set(self.swiped_left.get() + 1);
    }

    fn card_swiped_right(&self, _card: &SwipeCard) {
        self.swiped_right.set(self.swiped_right.get() + 1);
    }

    fn card_swiped_top(&self, _card: &SwipeCard) {
        self.swiped_top.set(self.swiped_top.get() + 1);
    }

    fn card_swiped_bottom(&self, _card: &SwipeCard) {
        self.swiped_bottom.set(self.swiped_bottom.get() + 1);
    }

    fn card_tapped(&self, _card: &SwipeCard) {
        self.tapped.set(self.tapped.get() + 1);
    }
}
