use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use crate::Axis;

/// The rendering surface a marquee scrolls.
///
/// This is the only seam between the engine and the UI: the engine never lays out, styles or
/// paints anything. Implementations are expected to behave like a scroll container:
///
/// - `set_scroll_position` clamps into `0..=content_extent - container_extent`, and
///   `scroll_position` reports the clamped value. The `Scroll` behavior relies on this to
///   detect the end of a cycle (the position stops changing).
/// - `content_extent` includes the padding applied via `set_content_padding` on both ends.
pub trait Viewport {
    fn scroll_position(&self, axis: Axis) -> i64;

    fn set_scroll_position(&mut self, axis: Axis, position: i64);

    /// Size of the scrollable content along `axis` (aka `scrollWidth` / `scrollHeight`).
    fn content_extent(&self, axis: Axis) -> i64;

    /// Size of the visible container along `axis`.
    fn container_extent(&self, axis: Axis) -> i64;

    fn set_container_extent(&mut self, axis: Axis, extent: i64);

    /// Sets the leading and trailing padding of the content along `axis`.
    fn set_content_padding(&mut self, axis: Axis, padding: i64);

    /// `false` once the host has torn the surface down.
    fn is_attached(&self) -> bool;
}

impl<V: Viewport + ?Sized> Viewport for Box<V> {
    fn scroll_position(&self, axis: Axis) -> i64 {
        (**self).scroll_position(axis)
    }

    fn set_scroll_position(&mut self, axis: Axis, position: i64) {
        (**self).set_scroll_position(axis, position);
    }

    fn content_extent(&self, axis: Axis) -> i64 {
        (**self).content_extent(axis)
    }

    fn container_extent(&self, axis: Axis) -> i64 {
        (**self).container_extent(axis)
    }

    fn set_container_extent(&mut self, axis: Axis, extent: i64) {
        (**self).set_container_extent(axis, extent);
    }

    fn set_content_padding(&mut self, axis: Axis, padding: i64) {
        (**self).set_content_padding(axis, padding);
    }

    fn is_attached(&self) -> bool {
        (**self).is_attached()
    }
}

/// Lets a host keep a handle to a viewport that the scheduler owns.
///
/// Borrows are only held for the duration of each call; the host must not hold a `borrow_mut`
/// across `Scheduler::tick`.
impl<V: Viewport + ?Sized> Viewport for Rc<RefCell<V>> {
    fn scroll_position(&self, axis: Axis) -> i64 {
        self.borrow().scroll_position(axis)
    }

    fn set_scroll_position(&mut self, axis: Axis, position: i64) {
        self.borrow_mut().set_scroll_position(axis, position);
    }

    fn content_extent(&self, axis: Axis) -> i64 {
        self.borrow().content_extent(axis)
    }

    fn container_extent(&self, axis: Axis) -> i64 {
        self.borrow().container_extent(axis)
    }

    fn set_container_extent(&mut self, axis: Axis, extent: i64) {
        self.borrow_mut().set_container_extent(axis, extent);
    }

    fn set_content_padding(&mut self, axis: Axis, padding: i64) {
        self.borrow_mut().set_content_padding(axis, padding);
    }

    fn is_attached(&self) -> bool {
        self.borrow().is_attached()
    }
}
