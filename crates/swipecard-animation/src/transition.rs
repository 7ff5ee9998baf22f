//! Fire-and-forget tween driver.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{AnimationSpec, FrameCallbackRegistration, FrameClock};

struct TransitionInner {
    clock: FrameClock,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    tick: Option<Box<dyn FnMut(f32)>>,
    on_complete: Option<Box<dyn FnOnce()>>,
    finished: bool,
}

/// A running tween.
///
/// `tick` is invoked with the eased fraction once per drained frame; the
/// final invocation is guaranteed to be `tick(1.0)`, after which
/// `on_complete` runs exactly once. The frame callback only holds a weak
/// reference, so the owner must keep the handle alive for the duration;
/// dropping it abandons the tween, [`Transition::cancel`] stops it
/// explicitly. Neither runs the completion callback.
pub struct Transition {
    inner: Rc<RefCell<TransitionInner>>,
}

impl Transition {
    pub fn run(
        clock: &FrameClock,
        spec: AnimationSpec,
        tick: impl FnMut(f32) + 'static,
        on_complete: impl FnOnce() + 'static,
    ) -> Self {
        let inner = Rc::new(RefCell::new(TransitionInner {
            clock: clock.clone(),
            spec,
            start_time_nanos: None,
            registration: None,
            tick: Some(Box::new(tick)),
            on_complete: Some(Box::new(on_complete)),
            finished: false,
        }));
        Self::schedule(&inner);
        Self { inner }
    }

    /// Stop the tween where it is. The completion callback never runs.
    pub fn cancel(&self) {
        let registration = {
            let mut inner = self.inner.borrow_mut();
            inner.finished = true;
            inner.tick = None;
            inner.on_complete = None;
            inner.registration.take()
        };
        if let Some(registration) = registration {
            registration.cancel();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.inner.borrow().finished
    }

    fn schedule(this: &Rc<RefCell<TransitionInner>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() || inner.finished {
                return;
            }
            inner.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<TransitionInner>>, frame_time_nanos: u64) {
        // Pull the tick closure out so the RefCell is not borrowed while
        // user code runs (it may start or cancel transitions).
        let (mut tick, eased, done, on_complete) = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            if inner.finished {
                return;
            }

            let start = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed = frame_time_nanos.saturating_sub(start);
            let duration = inner.spec.duration_nanos();
            let linear = if duration == 0 {
                1.0
            } else {
                (elapsed as f32 / duration as f32).clamp(0.0, 1.0)
            };
            let eased = inner.spec.easing.transform(linear);
            let done = linear >= 1.0;

            let tick = inner.tick.take();
            let on_complete = if done {
                inner.finished = true;
                inner.on_complete.take()
            } else {
                None
            };
            (tick, eased, done, on_complete)
        };

        if let Some(tick) = tick.as_mut() {
            tick(eased);
        }

        if done {
            if let Some(on_complete) = on_complete {
                on_complete();
            }
            return;
        }

        {
            let mut inner = this.borrow_mut();
            if inner.finished {
                // Cancelled from inside the tick callback.
                return;
            }
            inner.tick = tick;
        }
        Self::schedule(this);
    }
}

#[cfg(test)]
#[path = "tests/transition_tests.rs"]
mod tests;
