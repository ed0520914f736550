use std::iter::FusedIterator;

use super::{ListContents, ListState, Node, SinglyLinkedList};

impl IntoIterator for SinglyLinkedList {
    type Item = i32;

    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

pub struct IntoIter {
    // The iterator just holds the list and deletes from the start, which releases each node as it
    // is yielded.
    pub(crate) list: SinglyLinkedList,
}

impl Iterator for IntoIter {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.delete_from_start().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl FusedIterator for IntoIter {}

impl ExactSizeIterator for IntoIter {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a> IntoIterator for &'a SinglyLinkedList {
    type Item = i32;

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        let (next, remaining) = match &self.state {
            ListState::Empty => (None, 0),
            ListState::Full(ListContents { len, head }) => (Some(&**head), len.get()),
        };
        Iter { next, remaining }
    }
}

/// A borrowing iterator over the values of a [`SinglyLinkedList`], from head to tail.
#[derive(Clone)]
pub struct Iter<'a> {
    pub(crate) next: Option<&'a Node>,
    // Tracks the number of items left to yield, so the iterator can report an exact size.
    pub(crate) remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next();
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a> FusedIterator for Iter<'a> {}

impl<'a> ExactSizeIterator for Iter<'a> {
    fn len(&self) -> usize {
        self.remaining
    }
}
