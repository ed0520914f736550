//! This crate is a singly linked list of integers, written as a small, self-contained engine plus
//! the console menu that drives it.
//!
//! # Purpose
//! The list is deliberately simple: one owner, no generic elements, no pooling. The point is to
//! get the edge cases of a singly linked list exactly right (empty lists, one-node lists, positions
//! past the end) and to have every one of them covered by a test.
//!
//! # Method
//! The engine lives in [`collections::linked`]. Every operation mutates the list in place and
//! reports anything that stopped it from doing so through a [`Result`]. The engine never prints,
//! never parses text and never panics. Turning a reported condition into a message is the job of
//! the caller, which for the bundled binary is the [`menu`] module.
//!
//! # Error Handling
//! Errors are strongly typed, using enums for static dispatch rather than dynamic, with structs
//! (often ZSTs) that implement [`Error`](std::error::Error). There are two kinds:
//! - Structural: allocation failure ([`OutOfMemory`](collections::linked::OutOfMemory)). Nodes are
//!   allocated fallibly, so running out of memory leaves the list unchanged instead of aborting.
//! - Reported: deleting from an empty list, deleting past the end, or deleting a value that isn't
//!   there. These are ordinary outcomes and also leave the list unchanged.
//!
//! # Dependencies
//! The library relies on `derive_more` for the repetitive parts of its error enums and on
//! `tracing` for diagnostics. The `cli` feature adds `clap` and `tracing-subscriber` for the
//! `list-menu` binary.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
#[cfg(feature = "menu")]
pub mod menu;

pub(crate) mod util;
