//! Scenario tests driving a storage, a content range and a strategy the way a
//! sequence does.

use linstore::capacity::{
    CapacityPolicy, CapacityStrategy, HeadCapacityStrategy, InitialCapacityStrategy,
    MinimalCapacityStrategy, PolicyCapacityStrategy, SplitCapacityStrategy, TailCapacityStrategy,
};
use linstore::error::{IndexViolation, StorageError};
use linstore::range::IndexRange;
use linstore::storage::{ArrayStorage, LinearIndexStorage};

// =============================================================================
// Helpers
// =============================================================================

/// Route engine events to the test writer; `RUST_LOG=linstore=debug` shows
/// every reallocation.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Storage of `capacity` slots with `items` placed from `minimum` on.
fn storage_with(capacity: isize, minimum: isize, items: &[&'static str]) -> (ArrayStorage<&'static str>, IndexRange) {
    let mut storage = ArrayStorage::new(capacity).unwrap();
    for (offset, item) in items.iter().enumerate() {
        storage.set(minimum + offset as isize, *item).unwrap();
    }
    (storage, IndexRange::with_count(minimum, items.len() as isize))
}

/// The smallest consumer of the engine: a list that keeps its items in one
/// storage and opens room through a strategy.
struct List<C> {
    storage: ArrayStorage<String>,
    range: IndexRange,
    strategy: C,
}

impl<C: CapacityStrategy> List<C> {
    fn from_items(strategy: C, items: &[&str]) -> Self {
        let mut storage = ArrayStorage::new(0).unwrap();
        let range = IndexRange::with_count(0, items.len() as isize);
        strategy.initialize(&mut storage, &range).unwrap();
        for (offset, item) in items.iter().enumerate() {
            storage.set(offset as isize, item.to_string()).unwrap();
        }
        Self { storage, range, strategy }
    }

    fn push_front(&mut self, item: &str) {
        self.strategy.ensure_head_capacity(&mut self.storage, &mut self.range, 1).unwrap();
        self.range.increment_minimum(-1);
        self.storage.set(self.range.minimum(), item.to_string()).unwrap();
    }

    fn push_back(&mut self, item: &str) {
        self.strategy.ensure_tail_capacity(&mut self.storage, &mut self.range, 1).unwrap();
        self.range.increment_maximum(1);
        self.storage.set(self.range.maximum(), item.to_string()).unwrap();
    }

    /// Insert before the item at list position `position`.
    fn insert(&mut self, position: isize, items: &[&str]) {
        let split_index = self.range.minimum() + position;
        let count = items.len() as isize;
        self.strategy.ensure_split_capacity(&mut self.storage, &mut self.range, split_index, count).unwrap();
        for (offset, item) in items.iter().enumerate() {
            self.storage.set(split_index + offset as isize, item.to_string()).unwrap();
        }
    }

    fn pop_front(&mut self) -> Option<String> {
        if self.range.is_empty() {
            return None;
        }
        let item = self.storage.take(self.range.minimum()).unwrap();
        self.range.increment_minimum(1);
        item
    }

    fn items(&self) -> Vec<&str> {
        self.range
            .indices()
            .map(|index| self.storage.get(index).unwrap().expect("live slot").as_str())
            .collect()
    }
}

// =============================================================================
// Concrete scenarios
// =============================================================================

#[test]
fn split_inside_offset_content() {
    init_tracing();
    let (mut storage, mut range) = storage_with(5, 1, &["A", "B", "C"]);

    MinimalCapacityStrategy::default()
        .ensure_split_capacity(&mut storage, &mut range, 2, 2)
        .unwrap();

    assert!(storage.capacity() >= 5);
    assert_eq!(storage.get(1).unwrap(), Some(&"A"));
    assert_eq!(storage.get(4).unwrap(), Some(&"B"));
    assert_eq!(storage.get(5).unwrap(), Some(&"C"));
    assert!(storage.is_vacant(2).unwrap());
    assert!(storage.is_vacant(3).unwrap());
    assert_eq!(range, IndexRange::new(1, 5));
}

#[test]
fn tail_growth_of_full_storage() {
    init_tracing();
    let (mut storage, mut range) = storage_with(3, 0, &["A", "B", "C"]);

    MinimalCapacityStrategy::default()
        .ensure_tail_capacity(&mut storage, &mut range, 2)
        .unwrap();

    assert_eq!(storage.capacity(), 5);
    assert_eq!(storage.get(0).unwrap(), Some(&"A"));
    assert_eq!(storage.get(1).unwrap(), Some(&"B"));
    assert_eq!(storage.get(2).unwrap(), Some(&"C"));
    assert_eq!(range, IndexRange::new(0, 2));
}

#[test]
fn head_growth_shifts_by_missing() {
    let (mut storage, mut range) = storage_with(4, 1, &["A", "B"]);

    MinimalCapacityStrategy::default()
        .ensure_head_capacity(&mut storage, &mut range, 3)
        .unwrap();

    // missing = 3 - 1 = 2
    assert_eq!(range, IndexRange::new(3, 4));
    assert_eq!(storage.get(3).unwrap(), Some(&"A"));
    assert_eq!(storage.get(4).unwrap(), Some(&"B"));
    for index in 0..3 {
        assert!(storage.is_vacant(index).unwrap());
    }
}

#[test]
fn split_in_place_does_not_reallocate() {
    let (mut storage, mut range) = storage_with(8, 0, &["A", "B", "C"]);
    let before = storage.clone();

    MinimalCapacityStrategy::default()
        .ensure_split_capacity(&mut storage, &mut range, 1, 4)
        .unwrap();

    assert_eq!(storage.capacity(), before.capacity());
    assert_eq!(storage.get(0).unwrap(), Some(&"A"));
    assert_eq!(storage.get(5).unwrap(), Some(&"B"));
    assert_eq!(storage.get(6).unwrap(), Some(&"C"));
    assert_eq!(range, IndexRange::new(0, 6));
}

// =============================================================================
// Failures leave everything untouched
// =============================================================================

#[test]
fn negative_requests_fail_with_invalid_capacity() {
    let strategy = MinimalCapacityStrategy::default();
    let (mut storage, mut range) = storage_with(3, 0, &["A", "B", "C"]);
    let snapshot = (storage.clone(), range);

    assert!(strategy.ensure_head_capacity(&mut storage, &mut range, -1).unwrap_err().is_invalid_capacity());
    assert!(strategy.ensure_tail_capacity(&mut storage, &mut range, -1).unwrap_err().is_invalid_capacity());
    assert!(strategy.ensure_split_capacity(&mut storage, &mut range, 1, -1).unwrap_err().is_invalid_capacity());
    assert!(storage.ensure_capacity_and_shift_items(-1, &[]).unwrap_err().is_invalid_capacity());
    assert!(ArrayStorage::<u8>::new(-4).unwrap_err().is_invalid_capacity());

    assert_eq!((storage, range), snapshot);
}

#[test]
fn split_outside_content_fails_with_invalid_index() {
    let strategy = MinimalCapacityStrategy::default();
    let (mut storage, mut range) = storage_with(6, 2, &["A", "B"]);

    let error = strategy.ensure_split_capacity(&mut storage, &mut range, 1, 1).unwrap_err();
    assert_eq!(
        error,
        StorageError::InvalidIndex {
            name: "split_index",
            index: 1,
            violation: IndexViolation::BelowContent { minimum: 2 },
        }
    );

    let error = strategy.ensure_split_capacity(&mut storage, &mut range, 4, 1).unwrap_err();
    assert!(matches!(
        error,
        StorageError::InvalidIndex { violation: IndexViolation::AboveContent { maximum: 3 }, .. }
    ));
    assert_eq!(range, IndexRange::new(2, 3));
}

#[test]
fn access_outside_capacity_fails_with_invalid_index() {
    let (mut storage, _) = storage_with(3, 0, &["A"]);
    for index in [-1, 3, 100] {
        assert!(storage.get(index).unwrap_err().is_invalid_index());
        assert!(storage.set(index, "X").unwrap_err().is_invalid_index());
        assert!(storage.take(index).unwrap_err().is_invalid_index());
    }
}

// =============================================================================
// A list built on the engine
// =============================================================================

#[test]
fn list_operations_with_every_policy() {
    init_tracing();
    for policy in [CapacityPolicy::Minimal, CapacityPolicy::Doubling] {
        let mut list = List::from_items(policy.strategy(), &["c", "d"]);
        assert_eq!(list.storage.capacity(), 2);

        list.push_back("f");
        list.push_front("b");
        list.insert(3, &["e"]);
        list.push_front("a");
        list.insert(0, &["<"]);
        list.push_back(">");

        assert_eq!(list.items(), vec!["<", "a", "b", "c", "d", "e", "f", ">"], "{policy}");
        assert_eq!(list.range.items_count(), 8);
        assert!(list.storage.capacity() >= 8);
    }
}

#[test]
fn removal_at_head_is_reused_by_later_head_growth() {
    let mut list = List::from_items(PolicyCapacityStrategy::default(), &["a", "b", "c"]);

    assert_eq!(list.pop_front().as_deref(), Some("a"));
    assert_eq!(list.range, IndexRange::new(1, 2));

    // The freed slot satisfies the head request without reallocating.
    list.push_front("z");
    assert_eq!(list.storage.capacity(), 3);
    assert_eq!(list.items(), vec!["z", "b", "c"]);
}

#[test]
fn draining_and_refilling() {
    let mut list = List::from_items(CapacityPolicy::Minimal.strategy(), &["a", "b"]);
    while list.pop_front().is_some() {}
    assert!(list.range.is_empty());
    assert_eq!(list.range, IndexRange::empty_at(2));

    list.push_back("x");
    list.push_back("y");
    list.push_front("w");
    assert_eq!(list.items(), vec!["w", "x", "y"]);
}

#[test]
fn doubling_reallocates_less_than_minimal() {
    fn reallocations<C: CapacityStrategy>(strategy: C) -> usize {
        let mut list = List::from_items(strategy, &[]);
        let mut count = 0;
        for item in 0..256 {
            let before = list.storage.capacity();
            list.push_back(&item.to_string());
            if list.storage.capacity() != before {
                count += 1;
            }
        }
        count
    }

    let minimal = reallocations(CapacityPolicy::Minimal.strategy());
    let doubling = reallocations(CapacityPolicy::Doubling.strategy());
    assert_eq!(minimal, 256);
    assert_eq!(doubling, 9);
}

#[test]
fn initialize_then_fill_exactly() {
    let mut storage: ArrayStorage<u32> = ArrayStorage::new(0).unwrap();
    let range = IndexRange::new(0, 9);

    CapacityPolicy::Doubling.strategy().initialize(&mut storage, &range).unwrap();
    assert_eq!(storage.capacity(), 10);
    for index in range.indices() {
        storage.set(index, index as u32 * 2).unwrap();
    }
    assert_eq!(storage.items().sum::<u32>(), 90);
}
