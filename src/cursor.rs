//! Cursors into the queue, movable from front to back.
//!
//! This mimics the cursor design of [`std`]'s [`LinkedList`], reduced to the
//! directions a singly-linked chain can actually walk.
//!
//! A cursor is a pointer to one element in the queue. This pointer can move
//! one element forward with [`move_next`]. The node the pointer currently
//! points to (the "pointee") can be extracted in _O_(1) using [`current`].
//!
//! If you move the pointer past the queue (by using [`move_next`] while on
//! the last element), the pointer is placed on a _ghost_ element. While on
//! that ghost element,
//!
//! - [`current`] and [`index`] return [`None`].
//! - Moving forward again places the cursor back on the **front** of the
//!   queue, so repeated [`move_next`] calls cycle through all elements plus
//!   the ghost.
//!
//! There is no backward motion: the links only point one way, and walking
//! against them would cost a full traversal per step.
//!
//! [`LinkedList`]: std::collections::LinkedList
//! [`move_next`]: Cursor::move_next
//! [`current`]: Cursor::current
//! [`index`]: Cursor::index
//! [`None`]: Option::None

use crate::{Link, SortableQueue};

pub struct Cursor<'queue> {
    node: Link,
    index: usize,
    queue: &'queue SortableQueue,
}

impl<'queue> Cursor<'queue> {
    /// # Safety
    ///
    /// `queue.start` must either be `None` or a valid pointer to the first
    /// node of the queue's chain.
    pub(crate) unsafe fn new_front(queue: &'queue SortableQueue) -> Self {
        Self {
            node: queue.start,
            index: 0,
            queue,
        }
    }

    pub fn current(&self) -> Option<&str> {
        // SAFETY: delegated to the unsafe contract of `new_front`
        self.node.map(|node| unsafe { (*node.as_ptr()).value.as_str() })
    }

    /// The position of the pointee counted from the front, or [`None`] while
    /// on the ghost element.
    pub fn index(&self) -> Option<usize> {
        self.node.map(|_| self.index)
    }

    /// Makes this cursor look at the **next** node in the queue. If there is
    /// none, the cursor will point at the _ghost_ node. If the current node
    /// is the _ghost_, the cursor will point at the **front** of the queue.
    pub fn move_next(&mut self) {
        match self.node {
            None => {
                // currently at the ghost node => wrap to the front
                self.node = self.queue.start;
                self.index = 0;
            }
            Some(current) => {
                // SAFETY: delegated to the unsafe contract of `new_front`
                self.node = unsafe { (*current.as_ptr()).next };
                self.index += 1;
            }
        }
    }
}
