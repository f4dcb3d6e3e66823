//! General-purpose collection types.
//!
//! # Purpose
//! I wrote these types to learn about the data structures themselves, but also about ownership,
//! iterators and how far safe code can be pushed before `unsafe` becomes tempting.

#[cfg(feature = "linked")]
pub mod linked;
