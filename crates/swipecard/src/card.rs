//! The swipe card: drag state, visual feedback, and resolution.

use std::any::Any;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use swipecard_animation::{AnimationSpec, Easing, FrameClock, Lerp, Transition};
use swipecard_geometry::{AffineTransform, Point, Rect};

use crate::view::View;

/// Displacement past which a release resolves into a swipe.
const ACTION_MARGIN: f32 = 120.0;
/// Horizontal displacement divisor for the rotation ratio.
const ROTATION_STRENGTH: f32 = 320.0;
/// Rotation at a fully saturated ratio.
const ROTATION_MAX_ANGLE: f32 = std::f32::consts::FRAC_PI_8;
/// Rotation ratio saturates at +/- this value.
const ROTATION_MAX: f32 = 1.0;
/// Scale strength divisor. Negative on purpose: `1 - |ratio| / -2` grows
/// from 1 with displacement. Preserved from the reference behaviour.
const SCALE_STRENGTH: f32 = -2.0;
/// Upper bound on the feedback scale.
const SCALE_MAX: f32 = 1.02;
/// Horizontal distance over which an overlay fades to fully opaque.
const OVERLAY_REVEAL_DISTANCE: f32 = 100.0;
/// Off-screen exit abscissa for left/right swipes.
const EXIT_X: f32 = 500.0;
/// Off-screen exit ordinate for top/bottom swipes.
const EXIT_Y: f32 = 1000.0;
/// Snap-back and exit animation duration.
const RESOLVE_MILLIS: u64 = 300;

/// Which swipe directions a card honors.
///
/// Per-instance configuration; each card owns its axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeAxis {
    /// Only left/right swipes resolve.
    Horizontal,
    /// Only top/bottom swipes resolve.
    Vertical,
    /// All four directions resolve.
    Any,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Top,
    Bottom,
}

/// Observer for resolved gestures.
///
/// The card holds its delegate through a `Weak`, so registering never
/// extends the delegate's lifetime; notifications against a dropped
/// delegate are silently skipped. Each swipe notification fires at most
/// once per card, taps any number of times.
pub trait CardDelegate {
    fn card_swiped_left(&self, card: &SwipeCard);
    fn card_swiped_right(&self, card: &SwipeCard);
    fn card_swiped_top(&self, card: &SwipeCard);
    fn card_swiped_bottom(&self, card: &SwipeCard);
    fn card_tapped(&self, card: &SwipeCard);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Dragging,
    /// Terminal: a directional swipe fired and the card is on its way out
    /// of the display tree. Further gestures are ignored.
    Resolved,
}

struct CardInner {
    view: View,
    delegate: Option<Weak<dyn CardDelegate>>,
    payload: Option<Rc<dyn Any>>,
    left_overlay: Option<View>,
    right_overlay: Option<View>,
    axis: SwipeAxis,
    exclusive_gestures: bool,
    phase: Phase,
    /// Valid only between drag begin and drag end; recaptured at every
    /// begin.
    original_center: Point,
    drag_x: f32,
    drag_y: f32,
    clock: FrameClock,
    transition: Option<Transition>,
}

/// Cheap-clone handle onto one interactive card.
#[derive(Clone)]
pub struct SwipeCard {
    inner: Rc<RefCell<CardInner>>,
}

impl SwipeCard {
    /// Create a card occupying `frame`, animating on `clock`. Swipes
    /// resolve in every direction until [`set_axis`](Self::set_axis) says
    /// otherwise.
    pub fn new(frame: Rect, clock: &FrameClock) -> Self {
        Self {
            inner: Rc::new(RefCell::new(CardInner {
                view: View::from_frame(frame),
                delegate: None,
                payload: None,
                left_overlay: None,
                right_overlay: None,
                axis: SwipeAxis::Any,
                exclusive_gestures: true,
                phase: Phase::Idle,
                original_center: Point::ZERO,
                drag_x: 0.0,
                drag_y: 0.0,
                clock: clock.clone(),
                transition: None,
            })),
        }
    }

    pub fn view(&self) -> View {
        self.inner.borrow().view.clone()
    }

    pub fn set_delegate(&self, delegate: &Rc<impl CardDelegate + 'static>) {
        let delegate: Rc<dyn CardDelegate> = delegate.clone();
        self.inner.borrow_mut().delegate = Some(Rc::downgrade(&delegate));
    }

    pub fn clear_delegate(&self) {
        self.inner.borrow_mut().delegate = None;
    }

    /// Attach an arbitrary owner-supplied value to the card.
    pub fn set_payload(&self, payload: Rc<dyn Any>) {
        self.inner.borrow_mut().payload = Some(payload);
    }

    pub fn payload(&self) -> Option<Rc<dyn Any>> {
        self.inner.borrow().payload.clone()
    }

    pub fn set_left_overlay(&self, overlay: View) {
        self.inner.borrow_mut().left_overlay = Some(overlay);
    }

    pub fn left_overlay(&self) -> Option<View> {
        self.inner.borrow().left_overlay.clone()
    }

    pub fn set_right_overlay(&self, overlay: View) {
        self.inner.borrow_mut().right_overlay = Some(overlay);
    }

    pub fn right_overlay(&self) -> Option<View> {
        self.inner.borrow().right_overlay.clone()
    }

    pub fn set_axis(&self, axis: SwipeAxis) {
        self.inner.borrow_mut().axis = axis;
    }

    pub fn axis(&self) -> SwipeAxis {
        self.inner.borrow().axis
    }

    /// Whether the recognizer should consume events while dragging so no
    /// co-installed handler sees the same gesture. Defaults to true.
    pub fn set_exclusive_gestures(&self, exclusive: bool) {
        self.inner.borrow_mut().exclusive_gestures = exclusive;
    }

    pub fn exclusive_gestures(&self) -> bool {
        self.inner.borrow().exclusive_gestures
    }

    /// Whether a directional swipe has already fired. A resolved card is
    /// inert: it ignores further drags and taps while it animates off and
    /// detaches.
    pub fn is_resolved(&self) -> bool {
        self.inner.borrow().phase == Phase::Resolved
    }

    /// Attach whichever overlays are present as children of the card view
    /// and force them fully transparent. Call once, before the first drag.
    pub fn configure_overlays(&self) {
        let (view, left, right) = {
            let inner = self.inner.borrow();
            (
                inner.view.clone(),
                inner.left_overlay.clone(),
                inner.right_overlay.clone(),
            )
        };
        for overlay in [left, right].into_iter().flatten() {
            view.add_child(&overlay);
            overlay.set_alpha(0.0);
        }
    }

    /// Start of a drag cycle: captures the rest position the card returns
    /// to on snap-back and that exit trajectories offset from.
    pub fn drag_began(&self) {
        let stale = {
            let mut inner = self.inner.borrow_mut();
            if inner.phase == Phase::Resolved {
                return;
            }
            let stale = inner.transition.take();
            inner.original_center = inner.view.center();
            inner.drag_x = 0.0;
            inner.drag_y = 0.0;
            inner.phase = Phase::Dragging;
            stale
        };
        // A grab mid-snap-back takes over from wherever the card is.
        if let Some(stale) = stale {
            stale.cancel();
        }
    }

    /// Continuation of a drag: `dx`/`dy` are the cumulative translation
    /// since the gesture began. Updates position, the rotate+scale
    /// feedback transform, and the overlay alphas.
    pub fn drag_changed(&self, dx: f32, dy: f32) {
        if self.inner.borrow().phase == Phase::Resolved {
            return;
        }
        if self.inner.borrow().phase != Phase::Dragging {
            // Missing drag_began: recover by treating the current position
            // as the gesture origin.
            self.drag_began();
        }

        let (left, right) = {
            let mut inner = self.inner.borrow_mut();
            inner.drag_x = dx;
            inner.drag_y = dy;
            let center = inner.original_center.offset(dx, dy);
            inner.view.set_center(center);
            inner.view.set_transform(feedback_transform(dx));
            (inner.left_overlay.clone(), inner.right_overlay.clone())
        };
        update_overlays(&left, &right, dx);
    }

    /// End of a drag cycle: classify the displacement and either swipe the
    /// card off-screen or snap it back to rest.
    pub fn drag_ended(&self) {
        let decision = {
            let inner = self.inner.borrow();
            if inner.phase != Phase::Dragging {
                return;
            }
            classify(inner.drag_x, inner.drag_y, inner.axis)
        };
        match decision {
            Some(direction) => self.resolve(direction),
            None => self.snap_back(),
        }
    }

    /// A tap on the card. Pure notification; no visual state changes.
    pub fn tapped(&self) {
        if self.inner.borrow().phase == Phase::Resolved {
            log::trace!("tap ignored, card already resolved");
            return;
        }
        if let Some(delegate) = self.upgrade_delegate() {
            delegate.card_tapped(self);
        }
    }

    fn resolve(&self, direction: SwipeDirection) {
        let (view, finish, clock) = {
            let mut inner = self.inner.borrow_mut();
            inner.phase = Phase::Resolved;
            let origin = inner.original_center;
            let finish = match direction {
                SwipeDirection::Right => Point::new(EXIT_X, 2.0 * inner.drag_y + origin.y),
                SwipeDirection::Left => Point::new(-EXIT_X, 2.0 * inner.drag_y + origin.y),
                SwipeDirection::Top => Point::new(2.0 * inner.drag_x + origin.x, -EXIT_Y),
                SwipeDirection::Bottom => Point::new(2.0 * inner.drag_x + origin.x, EXIT_Y),
            };
            (inner.view.clone(), finish, inner.clock.clone())
        };
        log::debug!(
            "card swiped {:?}, exiting towards ({:.1}, {:.1})",
            direction,
            finish.x,
            finish.y
        );

        let start = view.center();
        let animated = view.clone();
        let transition = Transition::run(
            &clock,
            AnimationSpec::tween(RESOLVE_MILLIS, Easing::EaseInOut),
            move |fraction| animated.set_center(start.lerp(&finish, fraction)),
            move || {
                log::debug!("exit animation finished, detaching card view");
                view.remove_from_parent();
            },
        );
        self.inner.borrow_mut().transition = Some(transition);

        // The delegate learns about the swipe as soon as it is triggered,
        // not when the exit animation lands.
        if let Some(delegate) = self.upgrade_delegate() {
            match direction {
                SwipeDirection::Left => delegate.card_swiped_left(self),
                SwipeDirection::Right => delegate.card_swiped_right(self),
                SwipeDirection::Top => delegate.card_swiped_top(self),
                SwipeDirection::Bottom => delegate.card_swiped_bottom(self),
            }
        }
    }

    fn snap_back(&self) {
        let (view, left, right, rest, clock) = {
            let mut inner = self.inner.borrow_mut();
            inner.phase = Phase::Idle;
            (
                inner.view.clone(),
                inner.left_overlay.clone(),
                inner.right_overlay.clone(),
                inner.original_center,
                inner.clock.clone(),
            )
        };
        log::debug!("below action margin, snapping back to ({:.1}, {:.1})", rest.x, rest.y);

        let start_center = view.center();
        let start_transform = view.transform();
        let left_fade = left.map(|overlay| (overlay.clone(), overlay.alpha()));
        let right_fade = right.map(|overlay| (overlay.clone(), overlay.alpha()));

        let transition = Transition::run(
            &clock,
            AnimationSpec::tween(RESOLVE_MILLIS, Easing::EaseInOut),
            move |fraction| {
                view.set_center(start_center.lerp(&rest, fraction));
                view.set_transform(start_transform.lerp(&AffineTransform::IDENTITY, fraction));
                for (overlay, from) in left_fade.iter().chain(right_fade.iter()) {
                    overlay.set_alpha(from.lerp(&0.0, fraction));
                }
            },
            || {},
        );
        self.inner.borrow_mut().transition = Some(transition);
    }

    fn upgrade_delegate(&self) -> Option<Rc<dyn CardDelegate>> {
        self.inner
            .borrow()
            .delegate
            .as_ref()
            .and_then(|weak| weak.upgrade())
    }
}

/// Identity comparison: handles to the same card are equal.
impl PartialEq for SwipeCard {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Rotate-then-scale feedback for a horizontal displacement, as one
/// combined matrix applied about the card's center.
fn feedback_transform(dx: f32) -> AffineTransform {
    let ratio = (dx / ROTATION_STRENGTH).clamp(-ROTATION_MAX, ROTATION_MAX);
    let angle = ROTATION_MAX_ANGLE * ratio;
    let scale = (1.0 - ratio.abs() / SCALE_STRENGTH).min(SCALE_MAX);
    AffineTransform::rotation(angle).scaled(scale)
}

/// At most one overlay is visible at a time: the side the card is heading
/// towards fades in over the reveal distance, the other side is forced
/// transparent. Absent overlays are skipped.
fn update_overlays(left: &Option<View>, right: &Option<View>, dx: f32) {
    let (hidden, active) = if dx > 0.0 { (left, right) } else { (right, left) };
    if let Some(hidden) = hidden {
        hidden.set_alpha(0.0);
    }
    if let Some(active) = active {
        active.set_alpha((dx.abs() / OVERLAY_REVEAL_DISTANCE).clamp(0.0, 1.0));
    }
}

/// First match wins; vertical outranks horizontal, and an axis restriction
/// suppresses its directions even when their threshold was crossed.
fn classify(dx: f32, dy: f32, axis: SwipeAxis) -> Option<SwipeDirection> {
    if dy > ACTION_MARGIN && axis != SwipeAxis::Horizontal {
        Some(SwipeDirection::Bottom)
    } else if dy < -ACTION_MARGIN && axis != SwipeAxis::Horizontal {
        Some(SwipeDirection::Top)
    } else if dx > ACTION_MARGIN && axis != SwipeAxis::Vertical {
        Some(SwipeDirection::Right)
    } else if dx < -ACTION_MARGIN && axis != SwipeAxis::Vertical {
        Some(SwipeDirection::Left)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "tests/card_tests.rs"]
mod tests;
