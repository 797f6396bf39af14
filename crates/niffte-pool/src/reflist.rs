//! Non-owning reference lists between pooled records.
//!
//! A [`RefList`] records "this track used these digits" or "this vertex
//! joins these tracks". It stores handles, never records, so the target
//! pool stays the single owner. Lists live inside pooled records and are
//! emptied when their record is recycled, which keeps them in lock-step
//! with the generation of their targets.

use std::fmt;

use niffte_core::EntityError;

use crate::handle::{Entity, Handle};

/// Ordered list of handles into the pool of `T`.
pub struct RefList<T> {
    handles: Vec<Handle<T>>,
}

impl<T: Entity> RefList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    /// Append a reference.
    pub fn add(&mut self, handle: Handle<T>) {
        self.handles.push(handle);
    }

    /// Number of references.
    pub fn count(&self) -> usize {
        self.handles.len()
    }

    /// Whether the list holds no reference.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// The `i`-th reference.
    ///
    /// Fails with [`EntityError::OutOfRange`] when `i >= count()`.
    pub fn get(&self, i: usize) -> Result<Handle<T>, EntityError> {
        self.handles
            .get(i)
            .copied()
            .ok_or(EntityError::OutOfRange {
                kind: T::KIND,
                index: i,
                len: self.handles.len(),
            })
    }

    /// Whether `handle` is in the list.
    pub fn contains(&self, handle: Handle<T>) -> bool {
        self.handles.contains(&handle)
    }

    /// References in insertion order.
    pub fn as_slice(&self) -> &[Handle<T>] {
        &self.handles
    }

    /// Iterate references in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Handle<T>> + '_ {
        self.handles.iter().copied()
    }

    /// Remove all references, keeping capacity.
    pub fn clear(&mut self) {
        self.handles.clear();
    }
}

impl<T: Entity> Default for RefList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RefList<T> {
    fn clone(&self) -> Self {
        Self {
            handles: self.handles.clone(),
        }
    }
}

impl<T> PartialEq for RefList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.handles == other.handles
    }
}

impl<T: Entity> fmt::Debug for RefList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.handles.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::EntityPool;
    use niffte_core::{EntityKind, Generation};

    #[derive(Default)]
    struct Hit;

    impl Entity for Hit {
        const KIND: EntityKind = EntityKind::Digit;
    }

    fn three_handles() -> (EntityPool<Hit>, [Handle<Hit>; 3]) {
        let mut pool = EntityPool::with_capacity(4, Generation::FIRST).unwrap();
        let d1 = pool.allocate().unwrap().0;
        let d2 = pool.allocate().unwrap().0;
        let d3 = pool.allocate().unwrap().0;
        (pool, [d1, d2, d3])
    }

    #[test]
    fn get_returns_handles_in_insertion_order() {
        let (_pool, [d1, d2, d3]) = three_handles();
        let mut list = RefList::new();
        list.add(d1);
        list.add(d2);
        list.add(d3);
        assert_eq!(list.count(), 3);
        assert_eq!(list.get(0), Ok(d1));
        assert_eq!(list.get(1), Ok(d2));
        assert_eq!(list.get(2), Ok(d3));
    }

    #[test]
    fn get_past_end_is_out_of_range() {
        let (_pool, [d1, d2, d3]) = three_handles();
        let mut list = RefList::new();
        for h in [d1, d2, d3] {
            list.add(h);
        }
        assert_eq!(
            list.get(3),
            Err(EntityError::OutOfRange {
                kind: EntityKind::Digit,
                index: 3,
                len: 3,
            })
        );
    }

    #[test]
    fn empty_list_is_not_an_error() {
        let list = RefList::<Hit>::default();
        assert!(list.is_empty());
        assert_eq!(list.count(), 0);
        assert_eq!(list.iter().count(), 0);
        assert!(list.get(0).is_err());
    }

    #[test]
    fn clear_and_contains() {
        let (_pool, [d1, d2, _]) = three_handles();
        let mut list = RefList::new();
        list.add(d1);
        assert!(list.contains(d1));
        assert!(!list.contains(d2));
        list.clear();
        assert!(list.is_empty());
        assert!(list.as_slice().is_empty());
    }

    #[test]
    fn handles_resolve_through_pool() {
        let (pool, [d1, _, d3]) = three_handles();
        let mut list = RefList::new();
        list.add(d3);
        list.add(d1);
        let indices: Vec<_> = list
            .iter()
            .map(|h| pool.handle_at(h.index()).unwrap())
            .collect();
        assert_eq!(indices, vec![d3, d1]);
    }
}
