//! Linked collection types. Primarily revolves around [`SinglyLinkedList`] and its node factory,
//! [`Node::create`].

pub mod list;

#[doc(inline)]
pub use list::{
    CreateStopped, DeleteError, EmptyList, IntoIter, Iter, Node, OutOfMemory, PositionOutOfRange,
    SinglyLinkedList, StopCause, ValueNotFound,
};
