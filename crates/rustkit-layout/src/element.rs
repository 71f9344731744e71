//! The hosted element abstraction.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{Rect, Size};

/// A visual element the grid measures and positions.
///
/// `place` is the only mutation the engine performs on an element.
pub trait LayoutElement {
    /// Desired size, including the element's visual paddings.
    fn preferred_size(&self) -> Size;

    /// Invisible elements keep their cell but are neither measured nor placed.
    fn is_visible(&self) -> bool {
        true
    }

    /// Set the element's bounds.
    fn place(&mut self, bounds: Rect);

    /// Baseline at the given size, measured from the element's top edge.
    fn baseline(&self, _size: Size) -> Option<i32> {
        None
    }
}

impl<T: LayoutElement + ?Sized> LayoutElement for Box<T> {
    fn preferred_size(&self) -> Size {
        (**self).preferred_size()
    }

    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }

    fn place(&mut self, bounds: Rect) {
        (**self).place(bounds)
    }

    fn baseline(&self, size: Size) -> Option<i32> {
        (**self).baseline(size)
    }
}

/// Shared handle, for hosts that keep their own reference to the element.
impl<T: LayoutElement + ?Sized> LayoutElement for Rc<RefCell<T>> {
    fn preferred_size(&self) -> Size {
        self.borrow().preferred_size()
    }

    fn is_visible(&self) -> bool {
        self.borrow().is_visible()
    }

    fn place(&mut self, bounds: Rect) {
        self.borrow_mut().place(bounds)
    }

    fn baseline(&self, size: Size) -> Option<i32> {
        self.borrow().baseline(size)
    }
}
