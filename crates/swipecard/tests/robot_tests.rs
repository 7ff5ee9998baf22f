//! End-to-end tests driving the card through the recognizer with the
//! robot harness.

use std::rc::Rc;

use swipecard::{FrameClock, Point, Rect, Size, SwipeAxis, SwipeCard, View};
use swipecard_testing::{CardRobot, RecordingDelegate};

fn scene() -> (CardRobot, Rc<RecordingDelegate>, View) {
    let clock = FrameClock::new();
    let card = SwipeCard::new(
        Rect::from_origin_size(Point::new(60.0, 80.0), Size::new(80.0, 120.0)),
        &clock,
    );
    let parent = View::new(Point::new(200.0, 300.0), Size::new(400.0, 600.0));
    parent.add_child(&card.view());
    let delegate = Rc::new(RecordingDelegate::new());
    card.set_delegate(&delegate);
    (CardRobot::new(card, clock), delegate, parent)
}

#[test]
fn pointer_drag_past_threshold_swipes_right_and_detaches() {
    let (mut robot, delegate, parent) = scene();

    robot.drag_by(150.0, 20.0);
    assert_eq!(delegate.swiped_right(), 1);
    assert_eq!(delegate.total_swipes(), 1);

    robot.run_until_idle();
    assert!(parent.children().is_empty());
    assert_eq!(robot.card().view().center().x, 500.0);
}

#[test]
fn pointer_drag_below_threshold_snaps_back() {
    let (mut robot, delegate, parent) = scene();
    let rest = robot.card().view().center();

    robot.drag_by(60.0, -60.0);
    robot.run_until_idle();

    assert_eq!(delegate.total_swipes(), 0);
    assert_eq!(robot.card().view().center(), rest);
    assert_eq!(parent.children().len(), 1);
}

#[test]
fn tap_fires_through_the_recognizer() {
    let (mut robot, delegate, _parent) = scene();

    robot.tap();
    assert_eq!(delegate.tapped(), 1);
    assert_eq!(delegate.total_swipes(), 0);
}

#[test]
fn vertical_only_card_ignores_a_horizontal_fling() {
    let (mut robot, delegate, parent) = scene();
    robot.card().set_axis(SwipeAxis::Vertical);
    let rest = robot.card().view().center();

    robot.drag_by(200.0, 0.0);
    robot.run_until_idle();

    assert_eq!(delegate.total_swipes(), 0);
    assert_eq!(robot.card().view().center(), rest);
    assert_eq!(parent.children().len(), 1);
}

#[test]
fn cancelled_gesture_resolves_nothing() {
    let (mut robot, delegate, parent) = scene();

    robot.drag_by_without_release(200.0, 0.0);
    robot.cancel();
    robot.run_until_idle();

    assert_eq!(delegate.total_swipes(), 0);
    assert_eq!(parent.children().len(), 1);

    // The card is still usable afterwards.
    robot.tap();
    assert_eq!(delegate.tapped(), 1);
}

#[test]
fn swipe_notification_carries_the_resolved_card() {
    struct PayloadReader {
        seen: std::cell::Cell<Option<u32>>,
    }

    impl swipecard::CardDelegate for PayloadReader {
        fn card_swiped_left(&self, _card: &SwipeCard) {}
        fn card_swiped_right(&self, card: &SwipeCard) {
            let payload = card
                .payload()
                .and_then(|payload| payload.downcast_ref::<u32>().copied());
            self.seen.set(payload);
        }
        fn card_swiped_top(&self, _card: &SwipeCard) {}
        fn card_swiped_bottom(&self, _card: &SwipeCard) {}
        fn card_tapped(&self, _card: &SwipeCard) {}
    }

    let clock = FrameClock::new();
    let card = SwipeCard::new(
        Rect::from_origin_size(Point::new(60.0, 80.0), Size::new(80.0, 120.0)),
        &clock,
    );
    card.set_payload(Rc::new(7u32));
    let delegate = Rc::new(PayloadReader {
        seen: std::cell::Cell::new(None),
    });
    card.set_delegate(&delegate);

    let mut robot = CardRobot::new(card, clock);
    robot.drag_by(150.0, 0.0);

    assert_eq!(delegate.seen.get(), Some(7));
}
