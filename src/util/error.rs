//! Strongly typed errors returned by the fallible (`try_*`) collection methods.

use derive_more::{Display, Error};

/// The requested index doesn't refer to an element, because the collection only holds `len` of
/// them.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The number of elements in the collection at the time of the request.
    pub len: usize,
}
