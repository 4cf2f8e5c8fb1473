//! Declarative item-movement instructions.
//!
//! A descriptor says "move the items at source indices `[min, max]` to a
//! contiguous run starting at the target index". The same value describes an
//! in-place shift and a copy into a freshly allocated buffer; the storage
//! decides which buffer the target index refers to.

use smallvec::SmallVec;

use crate::range::IndexRange;

/// A batch of descriptors. Capacity strategies never emit more than two, so
/// plans stay inline.
pub type Descriptors = SmallVec<[IndexRangeOperationDescriptor; 2]>;

/// Move the items of `source_range` to the run starting at `target_index`.
///
/// The source and target runs may overlap; storages apply the move in the
/// direction that keeps every item intact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndexRangeOperationDescriptor {
    source_range: IndexRange,
    target_index: isize,
}

impl IndexRangeOperationDescriptor {
    pub const fn new(source_minimum: isize, source_maximum: isize, target_index: isize) -> Self {
        return IndexRangeOperationDescriptor {
            source_range: IndexRange::new(source_minimum, source_maximum),
            target_index,
        };
    }

    pub const fn from_range(source_range: IndexRange, target_index: isize) -> Self {
        return IndexRangeOperationDescriptor { source_range, target_index };
    }

    /// Keep every item of `range` where it is. Used when growing a buffer
    /// without relocating content.
    pub const fn identity(range: IndexRange) -> Self {
        return IndexRangeOperationDescriptor::from_range(range, range.minimum());
    }

    pub const fn source_range(&self) -> IndexRange {
        return self.source_range;
    }

    pub const fn target_index(&self) -> isize {
        return self.target_index;
    }

    pub const fn items_count(&self) -> isize {
        return self.source_range.items_count();
    }

    /// The indices written by this descriptor.
    pub const fn target_range(&self) -> IndexRange {
        return IndexRange::with_count(self.target_index, self.items_count());
    }

    /// Distance each item travels; positive moves towards the tail.
    pub const fn offset(&self) -> isize {
        return self.target_index - self.source_range.minimum();
    }
}
