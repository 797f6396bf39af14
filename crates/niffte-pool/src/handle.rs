//! Pooled-entity trait and generation-tagged handles.
//!
//! A [`Handle`] encodes the slot of a record within its pool. It is
//! generation-scoped: the `generation` field allows O(1) staleness checks
//! without a lookup table.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use niffte_core::{EntityKind, Generation};

/// A record type that can live in an [`EntityPool`](crate::EntityPool).
pub trait Entity: Default {
    /// Which pool kind this record belongs to.
    const KIND: EntityKind;

    /// Return the record to its freshly constructed state.
    ///
    /// Implementations with variable-length lists should empty them in
    /// place rather than dropping them, so the heap capacity survives
    /// into the next event.
    fn recycle(&mut self) {
        *self = Self::default();
    }
}

/// Typed, generation-tagged reference to a pooled record.
///
/// Handles are `Copy` and non-owning. They stay meaningful only for the
/// generation they were issued in.
///
/// A handle does not record which pool issued it. Resolving it against a
/// different pool of the same kind that happens to be at the same
/// generation succeeds and yields that pool's record; callers must keep
/// handles with the pool (or event) they came from.
#[must_use]
pub struct Handle<T> {
    index: u32,
    generation: Generation,
    _kind: PhantomData<fn() -> T>,
}

impl<T: Entity> Handle<T> {
    pub(crate) fn new(index: u32, generation: Generation) -> Self {
        Self {
            index,
            generation,
            _kind: PhantomData,
        }
    }

    /// Slot index within the pool (dense, zero-based per generation).
    pub fn index(&self) -> usize {
        self.index as usize
    }

    /// The generation this handle was issued in.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The entity kind this handle points at.
    pub fn kind(&self) -> EntityKind {
        T::KIND
    }

    /// Untyped form, for logging and diagnostics.
    pub fn raw(&self) -> RawHandle {
        RawHandle {
            kind: T::KIND,
            index: self.index,
            generation: self.generation,
        }
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.generation == other.generation
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.generation.hash(state);
    }
}

impl<T: Entity> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("kind", &T::KIND)
            .field("index", &self.index)
            .field("generation", &self.generation)
            .finish()
    }
}

impl<T: Entity> fmt::Display for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.raw().fmt(f)
    }
}

/// Kind-erased handle: `(kind, slot index, generation)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawHandle {
    /// Entity kind.
    pub kind: EntityKind,
    /// Slot index within the pool.
    pub index: u32,
    /// Generation the handle was issued in.
    pub generation: Generation,
}

impl fmt::Display for RawHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}@g{}", self.kind, self.index, self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Probe;

    impl Entity for Probe {
        const KIND: EntityKind = EntityKind::Digit;
    }

    #[test]
    fn handle_accessors() {
        let h = Handle::<Probe>::new(42, Generation(7));
        assert_eq!(h.index(), 42);
        assert_eq!(h.generation(), Generation(7));
        assert_eq!(h.kind(), EntityKind::Digit);
    }

    #[test]
    fn equality_includes_generation() {
        let a = Handle::<Probe>::new(1, Generation(0));
        let b = Handle::<Probe>::new(1, Generation(1));
        assert_ne!(a, b);
        assert_eq!(a, Handle::<Probe>::new(1, Generation(0)));
    }

    #[test]
    fn raw_display() {
        let h = Handle::<Probe>::new(3, Generation(2));
        assert_eq!(h.to_string(), "digit#3@g2");
        assert_eq!(h.raw().kind, EntityKind::Digit);
    }
}
