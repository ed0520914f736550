use std::convert::Infallible;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;

use derive_more::IsVariant;
use tracing::{debug, trace, warn};

use super::{Iter, Length, Link, Node, ONE};
#[doc(inline)]
pub use crate::util::error::{
    CreateStopped, DeleteError, EmptyList, OutOfMemory, PositionOutOfRange, StopCause,
    ValueNotFound,
};

/// A list of integers with links in one direction. Positions are 1-based: position 1 is the head.
///
/// Every operation mutates the list in place. Anything that prevents an operation from doing what
/// it was asked is reported through a [`Result`] and leaves the list exactly as it was.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
/// - `p`: The position in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `insert_at_start` | `O(1)` |
/// | `insert_at_end` | `O(n)` |
/// | `insert_at_position` | `O(min(p, n))` |
/// | `delete_from_start` | `O(1)` |
/// | `delete_from_end` | `O(n)` |
/// | `delete_at_position` | `O(min(p, n))` |
/// | `delete_by_value` | `O(n)` |
/// | `reverse` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// # Insertion clamps, deletion rejects
/// A position past the end of the list is treated differently by the two positional operations.
/// [`insert_at_position`](SinglyLinkedList::insert_at_position) clamps it and appends, while
/// [`delete_at_position`](SinglyLinkedList::delete_at_position) refuses with
/// [`PositionOutOfRange`].
pub struct SinglyLinkedList {
    pub(crate) state: ListState,
}

#[derive(Default, IsVariant)]
pub(crate) enum ListState {
    #[default]
    Empty,
    Full(ListContents),
}

use ListState::*;

pub(crate) struct ListContents {
    pub len: Length,
    pub head: Box<Node>,
}

impl SinglyLinkedList {
    /// Creates a new SinglyLinkedList with no elements.
    pub const fn new() -> SinglyLinkedList {
        SinglyLinkedList { state: Empty }
    }

    /// Returns the length of the SinglyLinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the SinglyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns the first element in the list, if it exists.
    pub fn front(&self) -> Option<i32> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value),
        }
    }

    /// Returns the head node, if the list isn't empty.
    pub fn head(&self) -> Option<&Node> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head),
        }
    }

    /// Adds `value` to the front of the list, making it the new head.
    pub fn insert_at_start(&mut self, value: i32) -> Result<(), OutOfMemory> {
        let node = Node::create(value)?;
        match &mut self.state {
            Empty => self.state = ListState::single(node),
            Full(contents) => contents.push_front(node),
        }
        trace!(value, len = self.len(), "inserted at start");
        Ok(())
    }

    /// Adds `value` after the last element of the list. On an empty list, the new node becomes the
    /// head.
    pub fn insert_at_end(&mut self, value: i32) -> Result<(), OutOfMemory> {
        let node = Node::create(value)?;
        match &mut self.state {
            Empty => self.state = ListState::single(node),
            Full(contents) => contents.push_back(node),
        }
        trace!(value, len = self.len(), "inserted at end");
        Ok(())
    }

    /// Inserts `value` so that it ends up at the 1-based `position`.
    ///
    /// A `position` of 1 or less inserts at the start. A `position` beyond the end of the list is
    /// clamped: the value is appended instead. Insertion is always performed unless the node can't
    /// be allocated.
    pub fn insert_at_position(&mut self, value: i32, position: i32) -> Result<(), OutOfMemory> {
        let Some(contents) = self.contents_mut().filter(|_| position > 1) else {
            return self.insert_at_start(value);
        };

        let node = Node::create(value)?;
        // Hops from the link after the head, stopping early at the last node.
        contents.insert_after(steps_before(position), node);
        trace!(value, position, len = contents.len.get(), "inserted at position");
        Ok(())
    }

    /// Removes the head of the list and returns its value.
    pub fn delete_from_start(&mut self) -> Result<i32, EmptyList> {
        match mem::take(&mut self.state) {
            Empty => {
                debug!("delete from start on an empty list");
                Err(EmptyList)
            },
            Full(ListContents { len, head }) => {
                let Node { value, next } = *head;
                if let (Some(head), Some(len)) = (next, len.checked_sub(1)) {
                    self.state = Full(ListContents { len, head });
                }
                trace!(value, len = self.len(), "deleted from start");
                Ok(value)
            },
        }
    }

    /// Removes the last element of the list and returns its value. A list with a single element
    /// becomes empty.
    pub fn delete_from_end(&mut self) -> Result<i32, EmptyList> {
        let len = self.len();
        if len <= 1 {
            return self.delete_from_start();
        }

        let value = self
            .contents_mut()
            .and_then(|contents| contents.unlink_after(len - 2))
            .ok_or(EmptyList)?;
        trace!(value, len = self.len(), "deleted from end");
        Ok(value)
    }

    /// Removes the element at the 1-based `position` and returns its value.
    ///
    /// A `position` of 1 or less deletes the head. Unlike
    /// [`insert_at_position`](SinglyLinkedList::insert_at_position), a `position` beyond the end
    /// of the list is not clamped: nothing is deleted and [`PositionOutOfRange`] is returned.
    pub fn delete_at_position(&mut self, position: i32) -> Result<i32, DeleteError> {
        if position <= 1 {
            return Ok(self.delete_from_start()?);
        }

        let len = self.len();
        let contents = self.contents_mut().ok_or_else(|| {
            debug!(position, "delete at position on an empty list");
            EmptyList
        })?;

        match contents.unlink_after(steps_before(position)) {
            Some(value) => {
                trace!(value, position, len = contents.len.get(), "deleted at position");
                Ok(value)
            },
            None => {
                debug!(position, len, "delete position out of range");
                Err(PositionOutOfRange { position, len }.into())
            },
        }
    }

    /// Removes the first element equal to `value`, returning the 1-based position it was found
    /// at. Later occurrences are left alone.
    pub fn delete_by_value(&mut self, value: i32) -> Result<usize, DeleteError> {
        if self.is_empty() {
            debug!(value, "delete by value on an empty list");
            return Err(EmptyList.into());
        }

        let position = match self.front() {
            Some(front) if front == value => {
                self.delete_from_start()?;
                Some(1)
            },
            _ => self.contents_mut().and_then(|contents| contents.unlink_first(value)),
        };

        let Some(position) = position else {
            debug!(value, "value to delete not found");
            return Err(ValueNotFound { value }.into());
        };
        trace!(value, position, len = self.len(), "deleted by value");
        Ok(position)
    }

    /// Returns the elements of the list from head to tail, or [`EmptyList`] if there are none.
    ///
    /// This is the list's display operation: the returned iterator is lazy, yields each element
    /// once and never modifies the list.
    pub fn values(&self) -> Result<Iter<'_>, EmptyList> {
        match self.state {
            Empty => Err(EmptyList),
            Full(_) => Ok(self.iter()),
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }

    pub fn contains(&self, value: i32) -> bool {
        self.iter().any(|element| element == value)
    }

    /// Releases every node in the list, returning how many were released. Safe to call on an
    /// empty list.
    ///
    /// Nodes are released one at a time from the head, so long lists don't exhaust the stack.
    pub fn clear(&mut self) -> usize {
        let Full(ListContents { head, .. }) = mem::take(&mut self.state) else {
            return 0;
        };

        let mut released = 0;
        let mut link = Some(head);
        while let Some(mut node) = link {
            link = node.next.take();
            released += 1;
        }
        trace!(released, "released list");
        released
    }

    /// Builds a new list by appending up to `count` values pulled from `source`.
    ///
    /// A value whose node can't be allocated is skipped and creation carries on with the next one.
    /// If `source` produces an error or runs out of values, creation stops there. The nodes created
    /// up to that point are kept and returned inside [`CreateStopped`], rather than being rolled
    /// back.
    pub fn create_list<I, E>(count: usize, source: I) -> Result<SinglyLinkedList, CreateStopped<E>>
    where
        I: IntoIterator<Item = Result<i32, E>>,
    {
        SinglyLinkedList::create_list_with(count, source, |_, _| {})
    }

    /// The same as [`SinglyLinkedList::create_list`], calling `on_skip` with the 1-based node
    /// number each time a value is skipped because its node couldn't be allocated.
    pub fn create_list_with<I, E, F>(
        count: usize,
        source: I,
        mut on_skip: F,
    ) -> Result<SinglyLinkedList, CreateStopped<E>>
    where
        I: IntoIterator<Item = Result<i32, E>>,
        F: FnMut(usize, OutOfMemory),
    {
        // Values are pushed to the front and the chain is reversed once at the end, which gives the
        // same order as appending without walking to the tail for every value.
        let mut list = SinglyLinkedList::new();
        let mut source = source.into_iter();

        for node in 1..=count {
            let cause = match source.next() {
                Some(Ok(value)) => {
                    if let Err(error) = list.insert_at_start(value) {
                        warn!(node, value, "skipping value: {error}");
                        on_skip(node, error);
                    }
                    continue;
                },
                Some(Err(error)) => StopCause::InvalidInput(error),
                None => StopCause::Exhausted,
            };

            list.reverse();
            debug!(node, created = list.len(), "list creation stopped early");
            return Err(CreateStopped { list, node, cause });
        }

        list.reverse();
        Ok(list)
    }

    /// Reverses the order of the list in place, without allocating.
    pub fn reverse(&mut self) {
        let Full(ListContents { len, head }) = mem::take(&mut self.state) else {
            return;
        };

        let mut reversed: Link = None;
        let mut link = Some(head);
        while let Some(mut node) = link {
            link = mem::replace(&mut node.next, reversed.take());
            reversed = Some(node);
        }

        if let Some(head) = reversed {
            self.state = Full(ListContents { len, head });
        }
    }

    pub(crate) const fn contents_mut(&mut self) -> Option<&mut ListContents> {
        match &mut self.state {
            Empty => None,
            Full(contents) => Some(contents),
        }
    }

    /// Walks the whole chain and checks that its length matches the cached one.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        let mut count = 0;
        let mut node = self.head();
        while let Some(curr) = node {
            count += 1;
            node = curr.next();
        }
        assert_eq!(count, self.len());
    }
}

/// The number of hops needed from the link after the head to reach the link in front of
/// `position`, for any position after the head.
const fn steps_before(position: i32) -> usize {
    position.saturating_sub(2).unsigned_abs() as usize
}

impl ListContents {
    /// Returns the link that follows the node `steps` hops after the head. If the chain ends
    /// first, returns the empty link after the last node instead.
    pub fn link_after(&mut self, steps: usize) -> &mut Link {
        let mut link = &mut self.head.next;
        for _ in 0..steps {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }
        link
    }

    pub fn push_front(&mut self, mut node: Box<Node>) {
        mem::swap(&mut self.head, &mut node);
        self.head.next = Some(node);
        self.len = self.len.succ();
    }

    pub fn push_back(&mut self, node: Box<Node>) {
        let mut link = &mut self.head.next;
        while let Some(next) = link {
            link = &mut next.next;
        }
        *link = Some(node);
        self.len = self.len.succ();
    }

    pub fn insert_after(&mut self, steps: usize, mut node: Box<Node>) {
        let link = self.link_after(steps);
        node.next = link.take();
        *link = Some(node);
        self.len = self.len.succ();
    }

    /// Unlinks the node after `steps` hops from the head and returns its value, or returns `None`
    /// and leaves the chain untouched if there is no such node.
    pub fn unlink_after(&mut self, steps: usize) -> Option<i32> {
        let link = self.link_after(steps);
        let Node { value, next } = *link.take()?;
        *link = next;

        // The head is never unlinked here, so at least one node remains.
        if let Some(len) = self.len.checked_sub(1) {
            self.len = len;
        }
        Some(value)
    }

    /// Unlinks the first node after the head that holds `value`, returning its 1-based position.
    pub fn unlink_first(&mut self, value: i32) -> Option<usize> {
        let mut position = 2;
        let mut link = &mut self.head.next;
        while link.as_ref().is_some_and(|node| node.value != value) {
            match link {
                Some(node) => link = &mut node.next,
                None => return None,
            }
            position += 1;
        }

        let Node { next, .. } = *link.take()?;
        *link = next;
        if let Some(len) = self.len.checked_sub(1) {
            self.len = len;
        }
        Some(position)
    }
}

impl ListState {
    pub fn single(node: Box<Node>) -> ListState {
        Full(ListContents { len: ONE, head: node })
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }
}

impl FromIterator<i32> for SinglyLinkedList {
    /// Collects values into a list in iteration order.
    ///
    /// # Panics
    /// Panics if a node can't be allocated, the same as other infallible collections. Use
    /// [`SinglyLinkedList::create_list_with`] to handle allocation failure.
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let source = iter.into_iter().map(Ok::<_, Infallible>);
        let list = SinglyLinkedList::create_list_with(usize::MAX, source, |_, error| {
            panic!("{error}")
        });
        match list {
            // The source can't fail, so only running dry stops it.
            Ok(list) | Err(CreateStopped { list, .. }) => list,
        }
    }
}

impl PartialEq for SinglyLinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for SinglyLinkedList {}

impl Hash for SinglyLinkedList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl Clone for SinglyLinkedList {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl Default for SinglyLinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SinglyLinkedList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Debug for SinglyLinkedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("contents", &DebugValues(self))
            .field("len", &self.len())
            .finish()
    }
}

struct DebugValues<'a>(&'a SinglyLinkedList);

impl Debug for DebugValues<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl Display for SinglyLinkedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({value})")?;
        }
        Ok(())
    }
}
