//! Reusable, growable storage for one entity kind.
//!
//! An [`EntityPool`] hands out dense, zero-based slots in allocation
//! order. `clear()` retires the current generation: every used record is
//! recycled in place, the population drops to zero, and the backing
//! storage is kept for the next event. Memory is only released when the
//! pool is dropped.

use niffte_core::{EntityError, Generation};

use crate::handle::{Entity, Handle};
use crate::stats::PoolStats;

/// Generational slot pool for records of type `T`.
///
/// Slots at or beyond `len` are always in their recycled (freshly
/// constructed) state, so `allocate()` never has to reinitialise them.
pub struct EntityPool<T: Entity> {
    /// Constructed records. `slots.len()` is the high-water mark.
    slots: Vec<T>,
    /// Live population of the current generation.
    len: usize,
    generation: Generation,
    growth_events: u64,
}

impl<T: Entity> EntityPool<T> {
    /// Create a pool with room for `capacity` records before it must grow.
    pub fn with_capacity(capacity: usize, generation: Generation) -> Result<Self, EntityError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| EntityError::AllocationFailed {
                kind: T::KIND,
                requested: capacity,
            })?;
        tracing::debug!(kind = %T::KIND, capacity, generation = %generation, "pool created");
        Ok(Self {
            slots,
            len: 0,
            generation,
            growth_events: 0,
        })
    }

    /// Allocate the next slot and return its handle and record.
    ///
    /// The record is in its freshly constructed state. When capacity is
    /// exhausted the storage doubles; existing records keep their values
    /// and indices, but may move in memory.
    pub fn allocate(&mut self) -> Result<(Handle<T>, &mut T), EntityError> {
        let index = self.len;
        let slot_index = u32::try_from(index).map_err(|_| EntityError::AllocationFailed {
            kind: T::KIND,
            requested: index.saturating_add(1),
        })?;

        if index == self.slots.len() {
            if self.slots.len() == self.slots.capacity() {
                self.grow()?;
            }
            self.slots.push(T::default());
        }

        self.len += 1;
        let handle = Handle::new(slot_index, self.generation);
        Ok((handle, &mut self.slots[index]))
    }

    fn grow(&mut self) -> Result<(), EntityError> {
        let old_capacity = self.slots.capacity();
        let additional = old_capacity.max(1);
        self.slots
            .try_reserve_exact(additional)
            .map_err(|_| EntityError::AllocationFailed {
                kind: T::KIND,
                requested: old_capacity.saturating_add(additional),
            })?;
        self.growth_events += 1;
        tracing::debug!(
            kind = %T::KIND,
            old_capacity,
            new_capacity = self.slots.capacity(),
            "pool grew"
        );
        Ok(())
    }

    /// Retire the current generation.
    ///
    /// Recycles every used record, resets the population to zero, and
    /// advances the generation so that outstanding handles become stale.
    /// Capacity is unchanged.
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            slot.recycle();
        }
        let released = self.len;
        let retired = self.generation;
        self.len = 0;
        self.generation = retired.next();
        tracing::trace!(
            kind = %T::KIND,
            released,
            retired_generation = %retired,
            capacity = self.slots.capacity(),
            "pool cleared"
        );
    }

    fn slot_of(&self, handle: Handle<T>) -> Result<usize, EntityError> {
        if handle.generation() != self.generation {
            return Err(EntityError::StaleReference {
                kind: T::KIND,
                handle_generation: handle.generation(),
                current_generation: self.generation,
            });
        }
        self.check_index(handle.index())
    }

    fn check_index(&self, index: usize) -> Result<usize, EntityError> {
        if index >= self.len {
            return Err(EntityError::OutOfRange {
                kind: T::KIND,
                index,
                len: self.len,
            });
        }
        Ok(index)
    }

    /// Resolve a handle.
    pub fn get(&self, handle: Handle<T>) -> Result<&T, EntityError> {
        let index = self.slot_of(handle)?;
        Ok(&self.slots[index])
    }

    /// Resolve a handle mutably.
    pub fn get_mut(&mut self, handle: Handle<T>) -> Result<&mut T, EntityError> {
        let index = self.slot_of(handle)?;
        Ok(&mut self.slots[index])
    }

    /// Whether `handle` resolves in the current generation.
    pub fn contains(&self, handle: Handle<T>) -> bool {
        self.slot_of(handle).is_ok()
    }

    /// Record at `index` in the current generation.
    pub fn at(&self, index: usize) -> Result<&T, EntityError> {
        let index = self.check_index(index)?;
        Ok(&self.slots[index])
    }

    /// Mutable record at `index` in the current generation.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, EntityError> {
        let index = self.check_index(index)?;
        Ok(&mut self.slots[index])
    }

    /// Handle for the record at `index` in the current generation.
    pub fn handle_at(&self, index: usize) -> Result<Handle<T>, EntityError> {
        let index = self.check_index(index)?;
        // `len` never exceeds u32::MAX + 1 (see `allocate`), so this fits.
        Ok(Handle::new(index as u32, self.generation))
    }

    /// Live records in index order.
    pub fn as_slice(&self) -> &[T] {
        &self.slots[..self.len]
    }

    /// Iterate live records with their handles, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle<T>, &T)> + '_ {
        let generation = self.generation;
        self.as_slice()
            .iter()
            .enumerate()
            .map(move |(i, record)| (Handle::new(i as u32, generation), record))
    }

    /// Live population of the current generation.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no record is live.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slots reserved in the backing storage.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Current generation.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Occupancy snapshot.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            len: self.len,
            capacity: self.slots.capacity(),
            high_water: self.slots.len(),
            growth_events: self.growth_events,
            generation: self.generation,
            memory_bytes: self.slots.capacity() * std::mem::size_of::<T>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use niffte_core::EntityKind;

    #[derive(Default, Debug, PartialEq)]
    struct Hit {
        adc: f64,
        contributors: Vec<i32>,
    }

    impl Entity for Hit {
        const KIND: EntityKind = EntityKind::Digit;

        fn recycle(&mut self) {
            self.adc = 0.0;
            self.contributors.clear();
        }
    }

    fn pool(capacity: usize) -> EntityPool<Hit> {
        EntityPool::with_capacity(capacity, Generation::FIRST).unwrap()
    }

    #[test]
    fn allocate_returns_dense_indices() {
        let mut p = pool(8);
        for expected in 0..5 {
            let (h, _) = p.allocate().unwrap();
            assert_eq!(h.index(), expected);
            assert_eq!(h.generation(), Generation::FIRST);
        }
        assert_eq!(p.len(), 5);
    }

    #[test]
    fn allocated_record_is_fresh() {
        let mut p = pool(2);
        let (_, hit) = p.allocate().unwrap();
        assert_eq!(*hit, Hit::default());
    }

    #[test]
    fn get_reads_written_payload() {
        let mut p = pool(4);
        let (h, hit) = p.allocate().unwrap();
        hit.adc = 12.5;
        hit.contributors.push(3);
        assert_eq!(p.get(h).unwrap().adc, 12.5);
        p.get_mut(h).unwrap().adc = 1.0;
        assert_eq!(p.at(0).unwrap().adc, 1.0);
    }

    #[test]
    fn growth_preserves_contents_and_indices() {
        let mut p = pool(4);
        let mut handles = Vec::new();
        for i in 0..9 {
            let (h, hit) = p.allocate().unwrap();
            hit.adc = i as f64;
            handles.push(h);
        }
        assert!(p.capacity() >= 9);
        assert_eq!(p.stats().growth_events, 2);
        for (i, h) in handles.iter().enumerate() {
            assert_eq!(h.index(), i);
            assert_eq!(p.get(*h).unwrap().adc, i as f64);
        }
    }

    #[test]
    fn zero_capacity_pool_grows() {
        let mut p = pool(0);
        assert_eq!(p.capacity(), 0);
        p.allocate().unwrap();
        p.allocate().unwrap();
        p.allocate().unwrap();
        assert_eq!(p.len(), 3);
        assert!(p.capacity() >= 3);
    }

    #[test]
    fn clear_keeps_capacity_and_resets_len() {
        let mut p = pool(4);
        for _ in 0..10 {
            p.allocate().unwrap();
        }
        let capacity = p.capacity();
        p.clear();
        assert_eq!(p.len(), 0);
        assert!(p.is_empty());
        assert_eq!(p.capacity(), capacity);
        assert_eq!(p.generation(), Generation(1));
    }

    #[test]
    fn clear_recycles_used_records_in_place() {
        let mut p = pool(4);
        let (_, hit) = p.allocate().unwrap();
        hit.adc = 9.0;
        hit.contributors.extend([1, 2, 3, 4, 5, 6, 7, 8]);
        let kept = hit.contributors.capacity();
        p.clear();

        let (h, hit) = p.allocate().unwrap();
        assert_eq!(h.index(), 0);
        assert_eq!(hit.adc, 0.0);
        assert!(hit.contributors.is_empty());
        assert_eq!(hit.contributors.capacity(), kept);
    }

    #[test]
    fn handle_from_previous_generation_is_stale() {
        let mut p = pool(4);
        let (old, _) = p.allocate().unwrap();
        p.clear();
        p.allocate().unwrap();
        assert_eq!(
            p.get(old),
            Err(EntityError::StaleReference {
                kind: EntityKind::Digit,
                handle_generation: Generation(0),
                current_generation: Generation(1),
            })
        );
        assert!(!p.contains(old));
    }

    #[test]
    fn index_beyond_len_is_out_of_range() {
        let mut p = pool(4);
        p.allocate().unwrap();
        assert_eq!(
            p.at(1).unwrap_err(),
            EntityError::OutOfRange {
                kind: EntityKind::Digit,
                index: 1,
                len: 1,
            }
        );
        assert!(p.handle_at(1).is_err());
        assert!(p.at_mut(5).is_err());
    }

    #[test]
    fn iter_yields_handles_in_order() {
        let mut p = pool(4);
        for i in 0..3 {
            let (_, hit) = p.allocate().unwrap();
            hit.adc = i as f64 * 10.0;
        }
        let seen: Vec<_> = p.iter().map(|(h, r)| (h.index(), r.adc)).collect();
        assert_eq!(seen, vec![(0, 0.0), (1, 10.0), (2, 20.0)]);
        assert_eq!(p.handle_at(2).unwrap(), p.iter().last().unwrap().0);
    }

    #[test]
    fn stats_track_high_water() {
        let mut p = pool(16);
        for _ in 0..6 {
            p.allocate().unwrap();
        }
        p.clear();
        p.allocate().unwrap();
        let s = p.stats();
        assert_eq!(s.len, 1);
        assert_eq!(s.high_water, 6);
        assert_eq!(s.generation, Generation(1));
        assert_eq!(s.memory_bytes, 16 * std::mem::size_of::<Hit>());
    }

    #[test]
    fn unreservable_capacity_fails_allocation() {
        let result = EntityPool::<Hit>::with_capacity(usize::MAX / 2, Generation::FIRST);
        assert!(matches!(
            result,
            Err(EntityError::AllocationFailed {
                kind: EntityKind::Digit,
                requested,
            }) if requested == usize::MAX / 2
        ));
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn indices_dense_across_clears(
                batches in proptest::collection::vec(0usize..40, 1..8),
                initial in 0usize..16,
            ) {
                let mut p = pool(initial);
                for (gen, &n) in batches.iter().enumerate() {
                    for expected in 0..n {
                        let (h, _) = p.allocate().unwrap();
                        prop_assert_eq!(h.index(), expected);
                        prop_assert_eq!(h.generation(), Generation(gen as u32));
                    }
                    prop_assert_eq!(p.len(), n);
                    p.clear();
                }
            }

            #[test]
            fn capacity_never_shrinks(
                batches in proptest::collection::vec(0usize..64, 1..8),
            ) {
                let mut p = pool(1);
                let mut last = p.capacity();
                for &n in &batches {
                    for _ in 0..n {
                        p.allocate().unwrap();
                    }
                    prop_assert!(p.capacity() >= last);
                    last = p.capacity();
                    p.clear();
                    prop_assert_eq!(p.capacity(), last);
                }
            }

            #[test]
            fn payload_survives_growth(n in 1usize..200) {
                let mut p = pool(1);
                let handles: Vec<_> = (0..n)
                    .map(|i| {
                        let (h, hit) = p.allocate().unwrap();
                        hit.adc = i as f64;
                        h
                    })
                    .collect();
                for (i, h) in handles.into_iter().enumerate() {
                    prop_assert_eq!(p.get(h).unwrap().adc, i as f64);
                }
            }
        }
    }
}
