//! Inclusive index ranges.
//!
//! An [`IndexRange`] records which storage indices hold live content. The
//! range is owned by whoever owns the content (usually a sequence built on a
//! storage) and lent mutably to a capacity strategy for the duration of a
//! single call.

use std::fmt;
use std::ops::Range;

/// A mutable pair of inclusive bounds `[minimum, maximum]`.
///
/// The empty range is represented by `maximum == minimum - 1`. Keeping the
/// sentinel in this shape means `items_count()` is always
/// `maximum - minimum + 1` and increments never need a special case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndexRange {
    minimum: isize,
    maximum: isize,
}

impl IndexRange {
    /// Create a range. The bounds are not checked; a reversed range is
    /// reported by the storage when it is used as a descriptor source.
    pub const fn new(minimum: isize, maximum: isize) -> IndexRange {
        return IndexRange { minimum, maximum };
    }

    /// An empty range positioned so that the first item added lands at `index`.
    pub const fn empty_at(index: isize) -> IndexRange {
        return IndexRange { minimum: index, maximum: index - 1 };
    }

    /// A range covering `count` items starting at `minimum`.
    pub const fn with_count(minimum: isize, count: isize) -> IndexRange {
        return IndexRange { minimum, maximum: minimum + count - 1 };
    }

    pub const fn minimum(&self) -> isize {
        return self.minimum;
    }

    pub const fn maximum(&self) -> isize {
        return self.maximum;
    }

    pub fn set_minimum(&mut self, minimum: isize) {
        self.minimum = minimum;
    }

    pub fn set_maximum(&mut self, maximum: isize) {
        self.maximum = maximum;
    }

    pub fn increment_minimum(&mut self, increment: isize) {
        self.minimum += increment;
    }

    pub fn increment_maximum(&mut self, increment: isize) {
        self.maximum += increment;
    }

    /// Shift both bounds by `offset`.
    pub fn shift(&mut self, offset: isize) {
        self.minimum += offset;
        self.maximum += offset;
    }

    /// Number of indices covered, zero for empty (or reversed) ranges.
    /// Saturates at `isize::MAX`.
    pub const fn items_count(&self) -> isize {
        match self.checked_items_count() {
            Some(count) => count,
            None => isize::MAX,
        }
    }

    /// Like [`items_count`](Self::items_count), but `None` when the count
    /// does not fit in an `isize`.
    pub const fn checked_items_count(&self) -> Option<isize> {
        if self.maximum < self.minimum {
            return Some(0);
        }
        match self.maximum.checked_sub(self.minimum) {
            Some(span) => span.checked_add(1),
            None => None,
        }
    }

    pub const fn is_empty(&self) -> bool {
        return self.maximum < self.minimum;
    }

    pub const fn contains(&self, index: isize) -> bool {
        return self.minimum <= index && index <= self.maximum;
    }

    /// The covered indices as a half-open `Range`.
    pub fn indices(&self) -> Range<isize> {
        if self.is_empty() {
            return self.minimum..self.minimum;
        }
        self.minimum..self.maximum + 1
    }
}

impl fmt::Display for IndexRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "[{}, {}]", self.minimum, self.maximum);
    }
}
