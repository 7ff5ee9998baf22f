//! Frame clock with one-shot callback registration.
//!
//! The host (or a test harness) drives the clock by calling
//! [`FrameClock::drain_frame_callbacks`] once per display frame with a
//! monotonic timestamp. Animations re-register themselves each frame, so
//! callbacks registered while draining run on the next drain, not the
//! current one.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use web_time::Instant;

type FrameCallback = Box<dyn FnOnce(u64)>;

struct ClockInner {
    next_id: u64,
    callbacks: Vec<(u64, FrameCallback)>,
    epoch: Instant,
}

/// Shared, single-threaded frame callback registry.
#[derive(Clone)]
pub struct FrameClock {
    inner: Rc<RefCell<ClockInner>>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(ClockInner {
                next_id: 0,
                callbacks: Vec::new(),
                epoch: Instant::now(),
            })),
        }
    }

    /// Register a callback for the next frame. The callback receives the
    /// frame time in nanoseconds and runs at most once.
    pub fn with_frame_nanos(&self, callback: impl FnOnce(u64) + 'static) -> FrameCallbackRegistration {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.callbacks.push((id, Box::new(callback)));
        FrameCallbackRegistration {
            id,
            clock: Rc::downgrade(&self.inner),
        }
    }

    /// Run every callback registered before this call with the given frame
    /// time. Callbacks registered during the drain wait for the next one.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            std::mem::take(&mut inner.callbacks)
        };
        for (_, callback) in pending {
            callback(frame_time_nanos);
        }
    }

    /// Drain with the elapsed wall-clock time since the clock was created.
    pub fn drain_now(&self) {
        let nanos = {
            let inner = self.inner.borrow();
            inner.epoch.elapsed().as_nanos() as u64
        };
        self.drain_frame_callbacks(nanos);
    }

    /// Whether any callback is waiting for the next frame.
    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().callbacks.is_empty()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a registered frame callback; cancelling removes the callback
/// if it has not run yet.
pub struct FrameCallbackRegistration {
    id: u64,
    clock: Weak<RefCell<ClockInner>>,
}

impl FrameCallbackRegistration {
    pub fn cancel(self) {
        if let Some(inner) = self.clock.upgrade() {
            inner
                .borrow_mut()
                .callbacks
                .retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
#[path = "tests/clock_tests.rs"]
mod tests;
