//! Randomly addressable slot storage.
//!
//! A [`LinearIndexStorage`] has a fixed capacity at any instant and two
//! growth primitives driven by [`IndexRangeOperationDescriptor`]s:
//!
//! - [`shift_items`](LinearIndexStorage::shift_items) moves items inside the
//!   current buffer.
//! - [`ensure_capacity_and_shift_items`](LinearIndexStorage::ensure_capacity_and_shift_items)
//!   allocates a larger buffer, moves the described items into it and adopts
//!   it. Items not covered by a descriptor are dropped with the old buffer.
//!
//! Capacity never shrinks.

pub mod array;

use crate::descriptor::IndexRangeOperationDescriptor;
use crate::error::{IndexViolation, Result, StorageError};

pub use array::ArrayStorage;

/// Slot storage consumed by capacity strategies and sequences.
pub trait LinearIndexStorage {
    type Item;

    /// Number of addressable slots.
    fn capacity(&self) -> isize;

    /// The item at `index`, or `None` if the slot is vacant.
    fn get(&self, index: isize) -> Result<Option<&Self::Item>>;

    fn get_mut(&mut self, index: isize) -> Result<Option<&mut Self::Item>>;

    /// Store `item` at `index`, dropping whatever the slot held.
    fn set(&mut self, index: isize, item: Self::Item) -> Result<()>;

    /// Vacate the slot at `index`, returning its item.
    fn take(&mut self, index: isize) -> Result<Option<Self::Item>>;

    /// Apply `descriptors` in order within the current buffer.
    fn shift_items(&mut self, descriptors: &[IndexRangeOperationDescriptor]) -> Result<()>;

    /// Grow by `additional_capacity` slots, moving the items named by
    /// `descriptors` from the old buffer (source indices) into the new one
    /// (target indices).
    fn ensure_capacity_and_shift_items(
        &mut self,
        additional_capacity: isize,
        descriptors: &[IndexRangeOperationDescriptor],
    ) -> Result<()>;

    fn is_vacant(&self, index: isize) -> Result<bool> {
        return Ok(self.get(index)?.is_none());
    }
}

/// Fail with `InvalidCapacity` if `capacity` is negative.
pub fn ensure_capacity_valid(name: &'static str, capacity: isize) -> Result<()> {
    if capacity < 0 {
        return Err(StorageError::InvalidCapacity { name, capacity });
    }
    Ok(())
}

/// Fail with `InvalidIndex` unless `0 <= index <= capacity - 1`.
pub fn ensure_index_valid(name: &'static str, index: isize, capacity: isize) -> Result<()> {
    if index < 0 {
        return Err(StorageError::invalid_index(name, index, IndexViolation::Negative));
    }
    if index > capacity - 1 {
        return Err(StorageError::invalid_index(
            name,
            index,
            IndexViolation::AboveCapacity { last: capacity - 1 },
        ));
    }
    Ok(())
}

/// Both bounds addressable and `end >= begin`.
pub fn ensure_index_range_valid(
    begin_name: &'static str,
    begin: isize,
    end_name: &'static str,
    end: isize,
    capacity: isize,
) -> Result<()> {
    ensure_index_valid(begin_name, begin, capacity)?;
    ensure_index_valid(end_name, end, capacity)?;
    if end < begin {
        return Err(StorageError::invalid_index(
            end_name,
            end,
            IndexViolation::ReversedRange { begin_name, begin },
        ));
    }
    Ok(())
}

/// Check a descriptor against the buffer it reads from and the buffer it
/// writes to. The whole target run must fit, not just its first index.
pub fn validate_descriptor(
    descriptor: &IndexRangeOperationDescriptor,
    source_capacity: isize,
    target_capacity: isize,
) -> Result<()> {
    let source = descriptor.source_range();
    ensure_index_range_valid(
        "source_minimum",
        source.minimum(),
        "source_maximum",
        source.maximum(),
        source_capacity,
    )?;
    // A valid source holds at least one item. An end past `isize::MAX`
    // saturates, which no capacity can address.
    let target_index = descriptor.target_index();
    let target_end_index = target_index.saturating_add(descriptor.items_count() - 1);
    ensure_index_valid("target_index", target_index, target_capacity)?;
    ensure_index_valid("target_end_index", target_end_index, target_capacity)?;
    Ok(())
}

/// Validate a whole batch before any of it is applied.
pub fn validate_descriptors(
    descriptors: &[IndexRangeOperationDescriptor],
    source_capacity: isize,
    target_capacity: isize,
) -> Result<()> {
    for descriptor in descriptors {
        validate_descriptor(descriptor, source_capacity, target_capacity)?;
    }
    Ok(())
}
