//! Small helpers shared by the collections: error types, formatting and test utilities.

#[cfg(test)]
pub(crate) mod alloc;
pub mod error;
pub(crate) mod fmt;
pub(crate) mod panic;
pub(crate) mod result;
