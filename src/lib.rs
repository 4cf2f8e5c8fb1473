//! linstore - indexed linear slot storage with pluggable capacity growth.
//!
//! A sequence built on this crate owns three things: a
//! [`LinearIndexStorage`](storage::LinearIndexStorage) holding its items, an
//! [`IndexRange`](range::IndexRange) recording which slots are live, and a
//! [`CapacityStrategy`](capacity::CapacityStrategy). Before inserting at the
//! head, the tail, or an interior index it asks the strategy to ensure room;
//! the strategy moves items with [`IndexRangeOperationDescriptor`]s, grows the
//! storage only when it must, and updates the range. The sequence then writes
//! its new items into the freed slots.
//!
//! # Quick Start
//!
//! ```
//! use linstore::capacity::{CapacityPolicy, HeadCapacityStrategy, SplitCapacityStrategy};
//! use linstore::range::IndexRange;
//! use linstore::storage::{ArrayStorage, LinearIndexStorage};
//!
//! let strategy = CapacityPolicy::Minimal.strategy();
//! let mut storage: ArrayStorage<char> = "ACD".chars().collect();
//! let mut range = IndexRange::new(0, 2);
//!
//! // Open one slot in front of 'C' and fill it.
//! strategy.ensure_split_capacity(&mut storage, &mut range, 1, 1)?;
//! storage.set(1, 'B')?;
//!
//! // Open one slot before the content and fill it.
//! strategy.ensure_head_capacity(&mut storage, &mut range, 1)?;
//! range.increment_minimum(-1);
//! storage.set(range.minimum(), '>')?;
//!
//! assert_eq!(storage.items().collect::<String>(), ">ABCD");
//! assert_eq!(range, IndexRange::new(0, 4));
//! # Ok::<(), linstore::error::StorageError>(())
//! ```
//!
//! [`IndexRangeOperationDescriptor`]: descriptor::IndexRangeOperationDescriptor

pub mod capacity;
pub mod descriptor;
pub mod error;
pub mod range;
pub mod storage;

pub use capacity::{CapacityPolicy, CapacityStrategy};
pub use descriptor::IndexRangeOperationDescriptor;
pub use error::{Result, StorageError};
pub use range::IndexRange;
pub use storage::{ArrayStorage, LinearIndexStorage};
