//! Capacity strategies.
//!
//! A strategy decides how a storage grows before a sequence opens room at the
//! head, the tail, or an interior split point. It owns neither the storage nor
//! the content range: both are lent for the duration of one call, and the
//! strategy may replace the storage buffer and move the range bounds.
//!
//! Each operation has its own trait so policies can be mixed per operation
//! through [`ForwardingCapacityStrategy`]. [`CapacityStrategy`] is the
//! combined capability a sequence asks for.
//!
//! # Policies
//!
//! | Policy | Growth when room is missing |
//! |--------|-----------------------------|
//! | [`minimal`] | exactly what the operation needs |
//! | [`doubling`] | at least the current capacity again |
//!
//! Both place items identically; only the resulting capacity differs.

// Declares the four unit strategies of one policy. Each delegates to the
// shared algorithm in `growth` with the policy's sizing function.
macro_rules! growth_strategies {
    ($sizing:path => $initial:ident, $head:ident, $tail:ident, $split:ident $(,)?) => {
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $initial;

        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $head;

        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $tail;

        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $split;

        impl $crate::capacity::InitialCapacityStrategy for $initial {
            fn initialize<S>(&self, storage: &mut S, range: &$crate::range::IndexRange) -> $crate::error::Result<()>
            where
                S: $crate::storage::LinearIndexStorage + ?Sized,
            {
                $crate::capacity::growth::initialize(storage, range)
            }
        }

        impl $crate::capacity::HeadCapacityStrategy for $head {
            fn ensure_head_capacity<S>(
                &self,
                storage: &mut S,
                range: &mut $crate::range::IndexRange,
                head_capacity: isize,
            ) -> $crate::error::Result<()>
            where
                S: $crate::storage::LinearIndexStorage + ?Sized,
            {
                $crate::capacity::growth::ensure_head_capacity(storage, range, head_capacity, $sizing)
            }
        }

        impl $crate::capacity::TailCapacityStrategy for $tail {
            fn ensure_tail_capacity<S>(
                &self,
                storage: &mut S,
                range: &mut $crate::range::IndexRange,
                tail_capacity: isize,
            ) -> $crate::error::Result<()>
            where
                S: $crate::storage::LinearIndexStorage + ?Sized,
            {
                $crate::capacity::growth::ensure_tail_capacity(storage, range, tail_capacity, $sizing)
            }
        }

        impl $crate::capacity::SplitCapacityStrategy for $split {
            fn ensure_split_capacity<S>(
                &self,
                storage: &mut S,
                range: &mut $crate::range::IndexRange,
                split_index: isize,
                split_capacity: isize,
            ) -> $crate::error::Result<()>
            where
                S: $crate::storage::LinearIndexStorage + ?Sized,
            {
                $crate::capacity::growth::ensure_split_capacity(storage, range, split_index, split_capacity, $sizing)
            }
        }
    };
}

pub mod doubling;
pub mod forwarding;
mod growth;
pub mod minimal;
pub mod policy;

use crate::descriptor::IndexRangeOperationDescriptor;
use crate::error::{IndexViolation, Result, StorageError};
use crate::range::IndexRange;
use crate::storage::LinearIndexStorage;

pub use doubling::{
    DoublingHeadCapacityStrategy, DoublingInitialCapacityStrategy, DoublingSplitCapacityStrategy,
    DoublingTailCapacityStrategy,
};
pub use forwarding::{DoublingCapacityStrategy, ForwardingCapacityStrategy, MinimalCapacityStrategy};
pub use minimal::{
    MinimalHeadCapacityStrategy, MinimalInitialCapacityStrategy, MinimalSplitCapacityStrategy,
    MinimalTailCapacityStrategy,
};
pub use policy::{CapacityPolicy, PolicyCapacityStrategy, UnknownPolicyError};

/// Sizes a storage for content whose final extent is already known.
pub trait InitialCapacityStrategy {
    /// Grow `storage` by `range.items_count()` slots. Items of `range` that
    /// are already addressable keep their indices.
    fn initialize<S>(&self, storage: &mut S, range: &IndexRange) -> Result<()>
    where
        S: LinearIndexStorage + ?Sized;
}

/// Opens free slots before the first content item.
pub trait HeadCapacityStrategy {
    /// Ensure at least `head_capacity` free slots precede `range.minimum()`.
    fn ensure_head_capacity<S>(
        &self,
        storage: &mut S,
        range: &mut IndexRange,
        head_capacity: isize,
    ) -> Result<()>
    where
        S: LinearIndexStorage + ?Sized;
}

/// Opens free slots after the last content item.
pub trait TailCapacityStrategy {
    /// Ensure at least `tail_capacity` free slots follow `range.maximum()`.
    /// Content never moves.
    fn ensure_tail_capacity<S>(
        &self,
        storage: &mut S,
        range: &mut IndexRange,
        tail_capacity: isize,
    ) -> Result<()>
    where
        S: LinearIndexStorage + ?Sized;
}

/// Opens a hole inside the content.
pub trait SplitCapacityStrategy {
    /// Move the items at `[split_index, range.maximum()]` right by
    /// `split_capacity`, leaving `[split_index, split_index + split_capacity - 1]`
    /// free. Items before `split_index` keep their indices.
    fn ensure_split_capacity<S>(
        &self,
        storage: &mut S,
        range: &mut IndexRange,
        split_index: isize,
        split_capacity: isize,
    ) -> Result<()>
    where
        S: LinearIndexStorage + ?Sized;
}

/// All four capacity operations behind one bound.
pub trait CapacityStrategy:
    InitialCapacityStrategy + HeadCapacityStrategy + TailCapacityStrategy + SplitCapacityStrategy
{
}

impl<C> CapacityStrategy for C where
    C: InitialCapacityStrategy + HeadCapacityStrategy + TailCapacityStrategy + SplitCapacityStrategy
{
}

/// Free slots before the first content item.
pub fn head_capacity(range: &IndexRange) -> isize {
    return range.minimum();
}

/// Free slots after the last content item.
pub fn tail_capacity<S>(storage: &S, range: &IndexRange) -> isize
where
    S: LinearIndexStorage + ?Sized,
{
    return storage.capacity() - 1 - range.maximum();
}

/// A content range never starts before slot zero.
pub(crate) fn ensure_content_range_valid(range: &IndexRange) -> Result<()> {
    if range.minimum() < 0 {
        return Err(StorageError::invalid_index(
            "content_minimum",
            range.minimum(),
            IndexViolation::Negative,
        ));
    }
    Ok(())
}

/// A split index must name a content item.
pub(crate) fn ensure_split_index_valid(range: &IndexRange, split_index: isize) -> Result<()> {
    if split_index < range.minimum() {
        return Err(StorageError::invalid_index(
            "split_index",
            split_index,
            IndexViolation::BelowContent { minimum: range.minimum() },
        ));
    }
    if split_index > range.maximum() {
        return Err(StorageError::invalid_index(
            "split_index",
            split_index,
            IndexViolation::AboveContent { maximum: range.maximum() },
        ));
    }
    Ok(())
}

/// Move all content to `target_index`, or nothing if there is no content.
pub(crate) fn copy_all_items_to(range: &IndexRange, target_index: isize) -> Option<IndexRangeOperationDescriptor> {
    if range.is_empty() {
        return None;
    }
    Some(IndexRangeOperationDescriptor::from_range(*range, target_index))
}
