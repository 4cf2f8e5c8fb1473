//! The four capacity algorithms, shared by every policy.
//!
//! A policy only chooses how many slots to add once an operation has decided
//! it must reallocate; which items move where is fixed here. Every check runs
//! before the storage or the range is touched.

use tracing::{debug, trace};

use super::{copy_all_items_to, ensure_content_range_valid, ensure_split_index_valid, tail_capacity};
use crate::descriptor::{Descriptors, IndexRangeOperationDescriptor};
use crate::error::{Result, StorageError};
use crate::range::IndexRange;
use crate::storage::{ensure_capacity_valid, LinearIndexStorage};

/// Maps `(needed, current_capacity)` to the number of slots to add.
/// The result is never below `needed`.
pub(crate) type Sizing = fn(isize, isize) -> isize;

/// Add exactly what is needed.
pub(crate) fn exact(needed: isize, _capacity: isize) -> isize {
    needed
}

/// Add what is needed, but at least the current capacity.
pub(crate) fn at_least_double(needed: isize, capacity: isize) -> isize {
    needed.max(capacity)
}

pub(crate) fn initialize<S>(storage: &mut S, range: &IndexRange) -> Result<()>
where
    S: LinearIndexStorage + ?Sized,
{
    ensure_content_range_valid(range)?;
    let Some(additional) = range.checked_items_count() else {
        return Err(StorageError::InvalidCapacity { name: "items_count", capacity: range.items_count() });
    };
    let capacity = storage.capacity();

    // Only the part of the range the current buffer can address has items.
    let mut plan = Descriptors::new();
    if !range.is_empty() && range.minimum() < capacity {
        let kept_maximum = range.maximum().min(capacity - 1);
        plan.push(IndexRangeOperationDescriptor::new(range.minimum(), kept_maximum, range.minimum()));
    }

    debug!(%range, capacity, additional, "initializing capacity");
    storage.ensure_capacity_and_shift_items(additional, &plan)
}

pub(crate) fn ensure_head_capacity<S>(
    storage: &mut S,
    range: &mut IndexRange,
    head_capacity: isize,
    sizing: Sizing,
) -> Result<()>
where
    S: LinearIndexStorage + ?Sized,
{
    ensure_capacity_valid("head_capacity", head_capacity)?;
    ensure_content_range_valid(range)?;

    let available = super::head_capacity(range);
    if head_capacity <= available {
        trace!(head_capacity, available, "head capacity already available");
        return Ok(());
    }

    let missing = head_capacity - available;
    let additional = sizing(head_capacity, storage.capacity());
    let plan: Descriptors = copy_all_items_to(range, head_capacity).into_iter().collect();

    debug!(%range, head_capacity, missing, additional, "relocating content for head capacity");
    storage.ensure_capacity_and_shift_items(additional, &plan)?;
    range.shift(missing);
    Ok(())
}

pub(crate) fn ensure_tail_capacity<S>(
    storage: &mut S,
    range: &mut IndexRange,
    tail_capacity: isize,
    sizing: Sizing,
) -> Result<()>
where
    S: LinearIndexStorage + ?Sized,
{
    ensure_capacity_valid("tail_capacity", tail_capacity)?;
    ensure_content_range_valid(range)?;

    let available = super::tail_capacity(storage, range);
    if tail_capacity <= available {
        trace!(tail_capacity, available, "tail capacity already available");
        return Ok(());
    }

    let missing = tail_capacity - available;
    let additional = sizing(missing, storage.capacity());
    let plan: Descriptors = copy_all_items_to(range, range.minimum()).into_iter().collect();

    debug!(%range, tail_capacity, missing, additional, "extending storage for tail capacity");
    storage.ensure_capacity_and_shift_items(additional, &plan)
}

pub(crate) fn ensure_split_capacity<S>(
    storage: &mut S,
    range: &mut IndexRange,
    split_index: isize,
    split_capacity: isize,
    sizing: Sizing,
) -> Result<()>
where
    S: LinearIndexStorage + ?Sized,
{
    ensure_split_index_valid(range, split_index)?;
    ensure_capacity_valid("split_capacity", split_capacity)?;
    ensure_content_range_valid(range)?;

    if split_capacity == 0 {
        return Ok(());
    }

    // The shifted right part ends at `maximum + split_capacity`; that bound
    // must be representable before any index is derived from it.
    if range.maximum().checked_add(split_capacity).is_none() {
        return Err(StorageError::InvalidCapacity { name: "split_capacity", capacity: split_capacity });
    }

    let shift_right_part = IndexRangeOperationDescriptor::new(
        split_index,
        range.maximum(),
        split_index + split_capacity,
    );

    let available = tail_capacity(storage, range);
    if split_capacity <= available {
        trace!(%range, split_index, split_capacity, available, "opening split in place");
        storage.shift_items(&[shift_right_part])?;
    } else {
        // The left part keeps its indices; only the right part moves, so one
        // contiguous copy cannot describe the new layout.
        let missing = split_capacity - available;
        let additional = sizing(missing, storage.capacity());

        let mut plan = Descriptors::new();
        if split_index > range.minimum() {
            plan.push(IndexRangeOperationDescriptor::new(range.minimum(), split_index - 1, range.minimum()));
        }
        plan.push(shift_right_part);

        debug!(%range, split_index, split_capacity, missing, additional, "reallocating for split capacity");
        storage.ensure_capacity_and_shift_items(additional, &plan)?;
    }

    range.increment_maximum(split_capacity);
    Ok(())
}
