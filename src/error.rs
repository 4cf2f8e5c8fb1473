//! Errors raised by storages and capacity strategies.
//!
//! Every error is a precondition violation detected before any slot is
//! touched, so a failed call leaves the storage and its content range exactly
//! as they were.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Why an index was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IndexViolation {
    #[error("is negative")]
    Negative,

    /// The index lies past the last addressable slot.
    #[error("exceeds {last} = capacity - 1")]
    AboveCapacity { last: isize },

    /// The index lies before the first content item.
    #[error("is below {minimum} = first content index")]
    BelowContent { minimum: isize },

    /// The index lies after the last content item.
    #[error("is above {maximum} = last content index")]
    AboveContent { maximum: isize },

    /// The end of a range lies before its beginning.
    #[error("is below {begin_name} = {begin}")]
    ReversedRange {
        begin_name: &'static str,
        begin: isize,
    },
}

/// Errors returned by [`LinearIndexStorage`](crate::storage::LinearIndexStorage)
/// and the capacity strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StorageError {
    /// A requested capacity is negative, or growing by it would overflow.
    #[error("invalid capacity: {name} = {capacity}")]
    InvalidCapacity { name: &'static str, capacity: isize },

    /// An index lies outside the storage or outside the content range.
    #[error("invalid index: {name} = {index} {violation}")]
    InvalidIndex {
        name: &'static str,
        index: isize,
        violation: IndexViolation,
    },
}

impl StorageError {
    pub(crate) fn invalid_index(name: &'static str, index: isize, violation: IndexViolation) -> Self {
        return StorageError::InvalidIndex { name, index, violation };
    }

    /// Returns true for [`StorageError::InvalidCapacity`].
    pub fn is_invalid_capacity(&self) -> bool {
        return matches!(self, StorageError::InvalidCapacity { .. });
    }

    /// Returns true for [`StorageError::InvalidIndex`].
    pub fn is_invalid_index(&self) -> bool {
        return matches!(self, StorageError::InvalidIndex { .. });
    }
}
