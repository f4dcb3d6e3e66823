//! A small, generic singly-linked list and the self-test that exercises it.
//!
//! # Purpose
//! This crate is a learning exercise in writing a linked collection the way Rust wants it written:
//! every node owns its successor outright, so there is no reference counting, no shared ownership
//! and no way to build a cycle. The list doesn't keep a tail pointer, which keeps all of it in safe
//! code at the cost of `O(n)` appends.
//!
//! # Error Handling
//! The core operations never panic. Lookups return an [`Option`] and removal reports whether it
//! happened with a [`bool`]. For callers that want to know *why* something failed, the `try_*`
//! variants return a [`Result`] with a strongly typed error
//! ([`IndexOutOfBounds`](collections::linked::list::IndexOutOfBounds)). The only panicking
//! surface is the [`Index`](std::ops::Index) operator, which mirrors slices.
//!
//! # Features
//! - `linked` (default): the [`LinkedList`](collections::linked::LinkedList) itself.
//! - `self-test` (default): the `singly-linked` binary which runs the [`self_test`] scenarios and
//!   reports to the console, logging through `env_logger`.
#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
