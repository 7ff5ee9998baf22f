//! Retained view handles.
//!
//! A [`View`] is a cheap-clone handle (`Rc<RefCell<_>>`) onto a node in the
//! display tree: center position, bounds, an affine transform applied about
//! its own center, an alpha, and child views. Parents hold children
//! strongly; children point back through a `Weak`, so detaching a subtree
//! drops it once the host lets go of its handles.

use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use swipecard_geometry::{AffineTransform, Point, Rect, Size};

struct ViewInner {
    center: Point,
    bounds: Size,
    transform: AffineTransform,
    alpha: f32,
    parent: Weak<RefCell<ViewInner>>,
    children: SmallVec<[View; 2]>,
}

#[derive(Clone)]
pub struct View {
    inner: Rc<RefCell<ViewInner>>,
}

impl View {
    pub fn new(center: Point, bounds: Size) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ViewInner {
                center,
                bounds,
                transform: AffineTransform::IDENTITY,
                alpha: 1.0,
                parent: Weak::new(),
                children: SmallVec::new(),
            })),
        }
    }

    pub fn from_frame(frame: Rect) -> Self {
        Self::new(frame.center(), frame.size())
    }

    pub fn center(&self) -> Point {
        self.inner.borrow().center
    }

    pub fn set_center(&self, center: Point) {
        self.inner.borrow_mut().center = center;
    }

    pub fn bounds(&self) -> Size {
        self.inner.borrow().bounds
    }

    pub fn frame(&self) -> Rect {
        let inner = self.inner.borrow();
        Rect::from_origin_size(
            Point::new(
                inner.center.x - inner.bounds.width / 2.0,
                inner.center.y - inner.bounds.height / 2.0,
            ),
            inner.bounds,
        )
    }

    pub fn transform(&self) -> AffineTransform {
        self.inner.borrow().transform
    }

    pub fn set_transform(&self, transform: AffineTransform) {
        self.inner.borrow_mut().transform = transform;
    }

    pub fn alpha(&self) -> f32 {
        self.inner.borrow().alpha
    }

    pub fn set_alpha(&self, alpha: f32) {
        self.inner.borrow_mut().alpha = alpha;
    }

    /// Attach `child` to this view. A child already attached somewhere is
    /// moved, never duplicated; attaching a view to itself is a no-op.
    pub fn add_child(&self, child: &View) {
        if Rc::ptr_eq(&self.inner, &child.inner) {
            return;
        }
        child.remove_from_parent();
        child.inner.borrow_mut().parent = Rc::downgrade(&self.inner);
        self.inner.borrow_mut().children.push(child.clone());
    }

    /// Detach this view from its parent. Idempotent: detaching a view with
    /// no parent is a no-op.
    pub fn remove_from_parent(&self) {
        let parent = {
            let mut inner = self.inner.borrow_mut();
            std::mem::replace(&mut inner.parent, Weak::new())
        };
        if let Some(parent) = parent.upgrade() {
            parent
                .borrow_mut()
                .children
                .retain(|child| !Rc::ptr_eq(&child.inner, &self.inner));
        }
    }

    pub fn parent(&self) -> Option<View> {
        self.inner
            .borrow()
            .parent
            .upgrade()
            .map(|inner| View { inner })
    }

    pub fn has_parent(&self) -> bool {
        self.inner.borrow().parent.strong_count() > 0
    }

    pub fn children(&self) -> Vec<View> {
        self.inner.borrow().children.to_vec()
    }

    pub fn ptr_eq(a: &View, b: &View) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }
}

/// Identity comparison: two handles are equal when they point at the same
/// view.
impl PartialEq for View {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("View")
            .field("center", &inner.center)
            .field("bounds", &inner.bounds)
            .field("alpha", &inner.alpha)
            .field("children", &inner.children.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
