//! A single draggable card that resolves into a directional swipe.
//!
//! [`SwipeCard`] tracks a drag gesture, renders rotation/scale feedback
//! proportional to the horizontal displacement, fades a pair of directional
//! overlays in and out, and on release classifies the drag as swiped
//! left/right/top/bottom or snaps back to rest. The host supplies the
//! card's content and overlay [`View`]s, wires platform input into a
//! [`CardGestureRecognizer`] (or calls the drag methods directly), and
//! observes resolutions through a [`CardDelegate`].
//!
//! Everything runs on the UI thread; animations are tweens driven by the
//! shared [`FrameClock`].

mod card;
mod gesture;
mod view;

pub use card::{CardDelegate, SwipeAxis, SwipeCard, SwipeDirection};
pub use gesture::{CardGestureRecognizer, PointerEvent, PointerEventKind, DRAG_THRESHOLD};
pub use view::View;

pub use swipecard_animation::{AnimationSpec, Easing, FrameClock};
pub use swipecard_geometry::{AffineTransform, Point, Rect, Size};
