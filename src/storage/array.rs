//! `Vec`-backed slot storage.

use tracing::{debug, trace};

use super::{ensure_capacity_valid, ensure_index_valid, validate_descriptors, LinearIndexStorage};
use crate::descriptor::IndexRangeOperationDescriptor;
use crate::error::{Result, StorageError};

/// A storage holding one `Option<T>` per slot.
///
/// Vacant slots read as `None`. Descriptors move items rather than copy them,
/// so a slot that is read by a descriptor and not written by the same
/// operation ends up vacant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayStorage<T> {
    slots: Vec<Option<T>>,
}

/// Convert an index that has already passed validation.
#[inline]
fn slot(index: isize) -> usize {
    debug_assert!(index >= 0);
    return index as usize;
}

/// A buffer of `capacity` vacant slots, or `None` if it cannot be allocated.
fn vacant_slots<T>(capacity: usize) -> Option<Vec<Option<T>>> {
    let mut slots = Vec::new();
    slots.try_reserve_exact(capacity).ok()?;
    slots.resize_with(capacity, || None);
    return Some(slots);
}

impl<T> ArrayStorage<T> {
    /// Create a storage with `initial_capacity` vacant slots.
    pub fn new(initial_capacity: isize) -> Result<ArrayStorage<T>> {
        ensure_capacity_valid("initial_capacity", initial_capacity)?;
        let slots = vacant_slots(slot(initial_capacity))
            .ok_or(StorageError::InvalidCapacity { name: "initial_capacity", capacity: initial_capacity })?;
        return Ok(ArrayStorage { slots });
    }

    /// Create a storage sized exactly to `items`, every slot occupied.
    pub fn from_items<I: IntoIterator<Item = T>>(items: I) -> ArrayStorage<T> {
        return ArrayStorage { slots: items.into_iter().map(Some).collect() };
    }

    /// All slots in index order.
    pub fn slots(&self) -> &[Option<T>] {
        return &self.slots;
    }

    /// Items of the occupied slots in index order.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().flatten()
    }

    fn capacity_isize(&self) -> isize {
        // A Vec never holds more than isize::MAX elements.
        self.slots.len() as isize
    }

    /// Move the items of one validated descriptor inside `slots`, walking in
    /// the direction that never overwrites an item before it is moved.
    fn move_within(slots: &mut [Option<T>], descriptor: &IndexRangeOperationDescriptor) {
        let source = slot(descriptor.source_range().minimum());
        let target = slot(descriptor.target_index());
        let count = slot(descriptor.items_count());

        if target > source {
            for offset in (0..count).rev() {
                let item = slots[source + offset].take();
                slots[target + offset] = item;
            }
        } else if target < source {
            for offset in 0..count {
                let item = slots[source + offset].take();
                slots[target + offset] = item;
            }
        }
    }

    /// Move the items of one validated descriptor from `source` into `target`.
    fn move_across(
        source: &mut [Option<T>],
        target: &mut [Option<T>],
        descriptor: &IndexRangeOperationDescriptor,
    ) {
        let from = slot(descriptor.source_range().minimum());
        let to = slot(descriptor.target_index());
        let count = slot(descriptor.items_count());

        for offset in 0..count {
            target[to + offset] = source[from + offset].take();
        }
    }
}

impl<T> LinearIndexStorage for ArrayStorage<T> {
    type Item = T;

    fn capacity(&self) -> isize {
        self.capacity_isize()
    }

    fn get(&self, index: isize) -> Result<Option<&T>> {
        ensure_index_valid("index", index, self.capacity())?;
        return Ok(self.slots[slot(index)].as_ref());
    }

    fn get_mut(&mut self, index: isize) -> Result<Option<&mut T>> {
        ensure_index_valid("index", index, self.capacity())?;
        return Ok(self.slots[slot(index)].as_mut());
    }

    fn set(&mut self, index: isize, item: T) -> Result<()> {
        ensure_index_valid("index", index, self.capacity())?;
        self.slots[slot(index)] = Some(item);
        Ok(())
    }

    fn take(&mut self, index: isize) -> Result<Option<T>> {
        ensure_index_valid("index", index, self.capacity())?;
        return Ok(self.slots[slot(index)].take());
    }

    fn shift_items(&mut self, descriptors: &[IndexRangeOperationDescriptor]) -> Result<()> {
        let capacity = self.capacity();
        validate_descriptors(descriptors, capacity, capacity)?;

        trace!(capacity, descriptors = descriptors.len(), "shifting items in place");
        for descriptor in descriptors {
            Self::move_within(&mut self.slots, descriptor);
        }
        Ok(())
    }

    fn ensure_capacity_and_shift_items(
        &mut self,
        additional_capacity: isize,
        descriptors: &[IndexRangeOperationDescriptor],
    ) -> Result<()> {
        ensure_capacity_valid("additional_capacity", additional_capacity)?;
        let old_capacity = self.capacity();
        let too_large = StorageError::InvalidCapacity { name: "additional_capacity", capacity: additional_capacity };
        let new_capacity = old_capacity.checked_add(additional_capacity).ok_or(too_large)?;
        validate_descriptors(descriptors, old_capacity, new_capacity)?;

        debug!(old_capacity, new_capacity, descriptors = descriptors.len(), "growing storage");
        let mut new_slots = vacant_slots(slot(new_capacity)).ok_or(too_large)?;
        for descriptor in descriptors {
            Self::move_across(&mut self.slots, &mut new_slots, descriptor);
        }
        self.slots = new_slots;
        Ok(())
    }
}

impl<T> Default for ArrayStorage<T> {
    fn default() -> Self {
        ArrayStorage { slots: Vec::new() }
    }
}

impl<T> FromIterator<T> for ArrayStorage<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        ArrayStorage::from_items(items)
    }
}
