//! Collection types. At the moment this is only the singly linked list, see [`linked`].

pub mod linked;
