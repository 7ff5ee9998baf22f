use super::*;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn drained_callback_receives_frame_time() {
    let clock = FrameClock::new();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let seen_cb = Rc::clone(&seen);
    let _registration = clock.with_frame_nanos(move |time| seen_cb.borrow_mut().push(time));
    assert!(clock.has_pending());

    clock.drain_frame_callbacks(42);
    assert_eq!(seen.borrow().as_slice(), &[42]);
    assert!(!clock.has_pending());
}

#[test]
fn callbacks_are_one_shot() {
    let clock = FrameClock::new();
    let count = Rc::new(RefCell::new(0));

    let count_cb = Rc::clone(&count);
    let _registration = clock.with_frame_nanos(move |_| *count_cb.borrow_mut() += 1);

    clock.drain_frame_callbacks(1);
    clock.drain_frame_callbacks(2);
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn cancelled_registration_never_fires() {
    let clock = FrameClock::new();
    let count = Rc::new(RefCell::new(0));

    let count_cb = Rc::clone(&count);
    let registration = clock.with_frame_nanos(move |_| *count_cb.borrow_mut() += 1);
    registration.cancel();

    clock.drain_frame_callbacks(1);
    assert_eq!(*count.borrow(), 0);
    assert!(!clock.has_pending());
}

#[test]
fn drain_now_uses_elapsed_wall_time() {
    let clock = FrameClock::new();
    let seen = Rc::new(RefCell::new(None));

    let seen_cb = Rc::clone(&seen);
    let _registration = clock.with_frame_nanos(move |time| *seen_cb.borrow_mut() = Some(time));

    std::thread::sleep(std::time::Duration::from_millis(2));
    clock.drain_now();

    let time = seen.borrow().expect("callback ran");
    assert!(time >= 2_000_000, "expected >= 2ms of elapsed time, got {time}");
}

#[test]
fn callback_registered_during_drain_waits_for_next_frame() {
    let clock = FrameClock::new();
    let times = Rc::new(RefCell::new(Vec::new()));

    let inner_clock = clock.clone();
    let times_outer = Rc::clone(&times);
    let _registration = clock.with_frame_nanos(move |time| {
        times_outer.borrow_mut().push(time);
        let times_inner = Rc::clone(&times_outer);
        // Re-registration from inside a frame is how transitions keep
        // themselves alive; it must not run within the same drain.
        let _ = inner_clock.with_frame_nanos(move |t| times_inner.borrow_mut().push(t));
    });

    clock.drain_frame_callbacks(1);
    assert_eq!(times.borrow().as_slice(), &[1]);

    clock.drain_frame_callbacks(2);
    assert_eq!(times.borrow().as_slice(), &[1, 2]);
}
