//! Composes four per-operation strategies into one [`CapacityStrategy`](super::CapacityStrategy).

use super::doubling::{
    DoublingHeadCapacityStrategy, DoublingInitialCapacityStrategy, DoublingSplitCapacityStrategy,
    DoublingTailCapacityStrategy,
};
use super::minimal::{
    MinimalHeadCapacityStrategy, MinimalInitialCapacityStrategy, MinimalSplitCapacityStrategy,
    MinimalTailCapacityStrategy,
};
use super::{HeadCapacityStrategy, InitialCapacityStrategy, SplitCapacityStrategy, TailCapacityStrategy};
use crate::error::Result;
use crate::range::IndexRange;
use crate::storage::LinearIndexStorage;

/// Minimal growth for every operation.
pub type MinimalCapacityStrategy = ForwardingCapacityStrategy<
    MinimalInitialCapacityStrategy,
    MinimalHeadCapacityStrategy,
    MinimalTailCapacityStrategy,
    MinimalSplitCapacityStrategy,
>;

/// Doubling growth for every operation.
pub type DoublingCapacityStrategy = ForwardingCapacityStrategy<
    DoublingInitialCapacityStrategy,
    DoublingHeadCapacityStrategy,
    DoublingTailCapacityStrategy,
    DoublingSplitCapacityStrategy,
>;

/// Dispatches each operation to its own strategy.
///
/// ```
/// use linstore::capacity::{CapacityStrategy, MinimalCapacityStrategy, DoublingTailCapacityStrategy};
///
/// // Minimal everywhere except appends.
/// let strategy = MinimalCapacityStrategy::default().with_tail(DoublingTailCapacityStrategy);
/// fn installed(_: &impl CapacityStrategy) {}
/// installed(&strategy);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ForwardingCapacityStrategy<I, H, T, S> {
    initial: I,
    head: H,
    tail: T,
    split: S,
}

impl<I, H, T, S> ForwardingCapacityStrategy<I, H, T, S> {
    pub fn new(initial: I, head: H, tail: T, split: S) -> Self {
        return ForwardingCapacityStrategy { initial, head, tail, split };
    }

    pub fn with_initial<I2>(self, initial: I2) -> ForwardingCapacityStrategy<I2, H, T, S> {
        return ForwardingCapacityStrategy { initial, head: self.head, tail: self.tail, split: self.split };
    }

    pub fn with_head<H2>(self, head: H2) -> ForwardingCapacityStrategy<I, H2, T, S> {
        return ForwardingCapacityStrategy { initial: self.initial, head, tail: self.tail, split: self.split };
    }

    pub fn with_tail<T2>(self, tail: T2) -> ForwardingCapacityStrategy<I, H, T2, S> {
        return ForwardingCapacityStrategy { initial: self.initial, head: self.head, tail, split: self.split };
    }

    pub fn with_split<S2>(self, split: S2) -> ForwardingCapacityStrategy<I, H, T, S2> {
        return ForwardingCapacityStrategy { initial: self.initial, head: self.head, tail: self.tail, split };
    }

    pub fn initial(&self) -> &I {
        &self.initial
    }

    pub fn head(&self) -> &H {
        &self.head
    }

    pub fn tail(&self) -> &T {
        &self.tail
    }

    pub fn split(&self) -> &S {
        &self.split
    }
}

impl<I: InitialCapacityStrategy, H, T, S> InitialCapacityStrategy for ForwardingCapacityStrategy<I, H, T, S> {
    fn initialize<St>(&self, storage: &mut St, range: &IndexRange) -> Result<()>
    where
        St: LinearIndexStorage + ?Sized,
    {
        self.initial.initialize(storage, range)
    }
}

impl<I, H: HeadCapacityStrategy, T, S> HeadCapacityStrategy for ForwardingCapacityStrategy<I, H, T, S> {
    fn ensure_head_capacity<St>(&self, storage: &mut St, range: &mut IndexRange, head_capacity: isize) -> Result<()>
    where
        St: LinearIndexStorage + ?Sized,
    {
        self.head.ensure_head_capacity(storage, range, head_capacity)
    }
}

impl<I, H, T: TailCapacityStrategy, S> TailCapacityStrategy for ForwardingCapacityStrategy<I, H, T, S> {
    fn ensure_tail_capacity<St>(&self, storage: &mut St, range: &mut IndexRange, tail_capacity: isize) -> Result<()>
    where
        St: LinearIndexStorage + ?Sized,
    {
        self.tail.ensure_tail_capacity(storage, range, tail_capacity)
    }
}

impl<I, H, T, S: SplitCapacityStrategy> SplitCapacityStrategy for ForwardingCapacityStrategy<I, H, T, S> {
    fn ensure_split_capacity<St>(
        &self,
        storage: &mut St,
        range: &mut IndexRange,
        split_index: isize,
        split_capacity: isize,
    ) -> Result<()>
    where
        St: LinearIndexStorage + ?Sized,
    {
        self.split.ensure_split_capacity(storage, range, split_index, split_capacity)
    }
}
