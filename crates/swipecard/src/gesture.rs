//! Pointer events and drag/tap recognition.
//!
//! The recognizer turns a raw Down/Move/Up stream into the card's gesture
//! surface: a press that travels beyond the touch slop becomes a drag
//! (cumulative translation reported on every move), a press that stays
//! within it becomes a tap on release. While the card is in exclusive mode
//! the recognizer consumes move events once dragging, so co-installed
//! handlers never react to the same gesture.

use std::cell::Cell;
use std::rc::Rc;

use swipecard_geometry::Point;

use crate::card::SwipeCard;

/// Drag threshold in logical units.
///
/// A press must travel farther than this from its starting point before it
/// is treated as a drag; releases inside the slop fire a tap instead.
/// Matches common platform touch-slop conventions (~8dp).
pub const DRAG_THRESHOLD: f32 = 8.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer event with consumption tracking.
///
/// Consumption is shared across clones via `Rc<Cell<bool>>`, so a handler
/// that consumes an event hides it from every other handler it is passed
/// to afterwards.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    kind: PointerEventKind,
    position: Point,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            kind,
            position,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn kind(&self) -> PointerEventKind {
        self.kind
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Mark this event as consumed, hiding it from later handlers.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}

/// Feeds a pointer stream into one [`SwipeCard`].
pub struct CardGestureRecognizer {
    card: SwipeCard,
    press_position: Option<Point>,
    dragging: bool,
}

impl CardGestureRecognizer {
    pub fn new(card: SwipeCard) -> Self {
        Self {
            card,
            press_position: None,
            dragging: false,
        }
    }

    pub fn card(&self) -> &SwipeCard {
        &self.card
    }

    /// Process one pointer event. Returns whether the recognizer is
    /// tracking the gesture the event belongs to.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        match event.kind() {
            PointerEventKind::Down => {
                if event.is_consumed() {
                    return false;
                }
                self.press_position = Some(event.position());
                self.dragging = false;
                true
            }
            PointerEventKind::Move => {
                let Some(press) = self.press_position else {
                    return false;
                };
                if !self.dragging {
                    if press.distance_to(&event.position()) <= DRAG_THRESHOLD {
                        return true;
                    }
                    self.dragging = true;
                    log::trace!("press passed touch slop, drag begins");
                    self.card.drag_began();
                }
                let translation = event.position() - press;
                self.card.drag_changed(translation.x, translation.y);
                if self.card.exclusive_gestures() {
                    event.consume();
                }
                true
            }
            PointerEventKind::Up => {
                let was_tracking = self.press_position.is_some();
                if self.dragging {
                    self.card.drag_ended();
                } else if was_tracking && !event.is_consumed() {
                    self.card.tapped();
                }
                self.reset();
                was_tracking
            }
            PointerEventKind::Cancel => {
                // Cancelled gestures classify nothing; tracking just stops.
                let was_tracking = self.press_position.is_some();
                self.reset();
                was_tracking
            }
        }
    }

    fn reset(&mut self) {
        self.press_position = None;
        self.dragging = false;
    }
}
