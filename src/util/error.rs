use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

use crate::collections::linked::SinglyLinkedList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfMemory;

impl Display for OutOfMemory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Memory error: could not create node.")
    }
}

impl Error for OutOfMemory {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyList;

impl Display for EmptyList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "List is empty, nothing to delete.")
    }
}

impl Error for EmptyList {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOutOfRange {
    pub position: i32,
    pub len: usize,
}

impl Display for PositionOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Position {} out of range. No deletion performed.", self.position)
    }
}

impl Error for PositionOutOfRange {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueNotFound {
    pub value: i32,
}

impl Display for ValueNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Value {} not found in list.", self.value)
    }
}

impl Error for ValueNotFound {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum DeleteError {
    EmptyList(EmptyList),
    PositionOutOfRange(PositionOutOfRange),
    ValueNotFound(ValueNotFound),
}

/// The reason [`SinglyLinkedList::create_list`] stopped before reaching the requested count.
#[derive(Debug, IsVariant)]
pub enum StopCause<E> {
    /// The source produced an error in place of a value.
    InvalidInput(E),
    /// The source ran out of values.
    Exhausted,
}

impl<E: Display> Display for StopCause<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StopCause::InvalidInput(error) => write!(f, "Invalid input: {error}"),
            StopCause::Exhausted => write!(f, "Ran out of input."),
        }
    }
}

/// Returned when bulk construction stops early. The nodes appended before the failure are kept,
/// not rolled back, and can be recovered with [`CreateStopped::into_list`].
#[derive(Debug)]
pub struct CreateStopped<E> {
    /// The partially built list.
    pub list: SinglyLinkedList,
    /// The 1-based number of the node where creation stopped.
    pub node: usize,
    pub cause: StopCause<E>,
}

impl<E> CreateStopped<E> {
    pub fn into_list(self) -> SinglyLinkedList {
        self.list
    }
}

impl<E: Display> Display for CreateStopped<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stopped creation at node {} with {} node(s) created. {}",
            self.node,
            self.list.len(),
            self.cause
        )
    }
}

impl<E: Error + 'static> Error for CreateStopped<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            StopCause::InvalidInput(error) => Some(error),
            StopCause::Exhausted => None,
        }
    }
}
