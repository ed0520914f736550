use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::ptr::NonNull;

use crate::util::error::OutOfMemory;

pub(crate) type Link = Option<Box<Node>>;

// NOTE: Nodes are allocated manually rather than with Box::new, because Box::new aborts the process
// when the allocator refuses a request. Once allocated, a node is handed to a Box so that the rest
// of the list can rely on ordinary ownership.

/// A single link in a [`SinglyLinkedList`](super::SinglyLinkedList): one value and exclusive
/// ownership of the rest of the chain.
pub struct Node {
    pub(crate) value: i32,
    pub(crate) next: Link,
}

impl Node {
    /// Allocates a new node holding `value`, with no successor.
    ///
    /// Returns [`OutOfMemory`] rather than aborting if the allocator can't provide space for the
    /// node.
    pub fn create(value: i32) -> Result<Box<Node>, OutOfMemory> {
        #[cfg(test)]
        if alloc_failure::take() {
            return Err(OutOfMemory);
        }

        let layout = Layout::new::<Node>();
        // SAFETY: Node contains an i32, so its layout has a non-zero size.
        let ptr = NonNull::new(unsafe { alloc::alloc(layout) }.cast::<Node>()).ok_or(OutOfMemory)?;

        // SAFETY: ptr was just allocated by the global allocator with the layout of Node, so it is
        // valid for a write and Box is allowed to take ownership of it once initialized.
        unsafe {
            ptr.write(Node { value, next: None });
            Ok(Box::from_raw(ptr.as_ptr()))
        }
    }

    pub const fn value(&self) -> i32 {
        self.value
    }

    pub fn next(&self) -> Option<&Node> {
        self.next.as_deref()
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("next", &self.next().map(Node::value))
            .finish()
    }
}
