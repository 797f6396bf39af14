//! The set of four entity pools backing an event.
//!
//! A [`PoolSet`] is constructed explicitly and owned by whoever drives
//! event processing. It keeps one generation counter for all four pools,
//! so a clear retires digits, tracks, vertices, and MC truth together and
//! no reference list can outlive its targets' generation.

use niffte_core::{EntityError, EntityKind, Generation};
use niffte_pool::{ConfigError, Entity, EntityPool, Handle, PoolConfig, PoolStats};

use crate::digit::Digit;
use crate::mc_truth::McTruth;
use crate::track::Track;
use crate::vertex::Vertex;

/// A record type stored in one of the [`PoolSet`]'s pools.
pub trait Pooled: Entity + Sized + 'static {
    /// The pool for this kind, if it has been created.
    fn pool(set: &PoolSet) -> Option<&EntityPool<Self>>;

    /// The pool slot for this kind.
    fn pool_slot(set: &mut PoolSet) -> &mut Option<EntityPool<Self>>;
}

macro_rules! impl_pooled {
    ($ty:ty, $field:ident) => {
        impl Pooled for $ty {
            fn pool(set: &PoolSet) -> Option<&EntityPool<Self>> {
                set.$field.as_ref()
            }

            fn pool_slot(set: &mut PoolSet) -> &mut Option<EntityPool<Self>> {
                &mut set.$field
            }
        }
    };
}

impl_pooled!(Vertex, vertices);
impl_pooled!(Track, tracks);
impl_pooled!(McTruth, mc_truth);
impl_pooled!(Digit, digits);

/// Vertex, track, MC-truth, and digit pools sharing one generation.
///
/// Pools are created lazily by the first allocation after construction
/// or after [`reset`](PoolSet::reset). Every present pool is always in
/// the set's current generation.
pub struct PoolSet {
    config: PoolConfig,
    generation: Generation,
    vertices: Option<EntityPool<Vertex>>,
    tracks: Option<EntityPool<Track>>,
    mc_truth: Option<EntityPool<McTruth>>,
    digits: Option<EntityPool<Digit>>,
}

impl PoolSet {
    /// Create an empty pool set. No storage is reserved yet.
    pub fn new(config: PoolConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::unchecked(config))
    }

    fn unchecked(config: PoolConfig) -> Self {
        Self {
            config,
            generation: Generation::FIRST,
            vertices: None,
            tracks: None,
            mc_truth: None,
            digits: None,
        }
    }

    /// The pool for `T`, if it exists.
    pub fn pool<T: Pooled>(&self) -> Option<&EntityPool<T>> {
        T::pool(self)
    }

    /// The pool for `T`, created with its configured capacity if absent.
    pub fn pool_mut<T: Pooled>(&mut self) -> Result<&mut EntityPool<T>, EntityError> {
        let capacity = self.config.capacity_for(T::KIND);
        let generation = self.generation;
        let slot = T::pool_slot(self);
        let pool = match slot.take() {
            Some(pool) => pool,
            None => EntityPool::with_capacity(capacity, generation)?,
        };
        Ok(slot.insert(pool))
    }

    /// Create every pool that does not exist yet.
    pub fn preallocate(&mut self) -> Result<(), EntityError> {
        self.pool_mut::<Vertex>()?;
        self.pool_mut::<Track>()?;
        self.pool_mut::<McTruth>()?;
        self.pool_mut::<Digit>()?;
        Ok(())
    }

    /// Whether the pool for `kind` currently exists.
    pub fn is_allocated(&self, kind: EntityKind) -> bool {
        match kind {
            EntityKind::Vertex => self.vertices.is_some(),
            EntityKind::Track => self.tracks.is_some(),
            EntityKind::McTruth => self.mc_truth.is_some(),
            EntityKind::Digit => self.digits.is_some(),
        }
    }

    /// Live population of the pool for `T` (zero when absent).
    pub fn len<T: Pooled>(&self) -> usize {
        self.pool::<T>().map_or(0, EntityPool::len)
    }

    /// Occupancy of the pool for `kind`; zeroed stats when absent.
    pub fn stats(&self, kind: EntityKind) -> PoolStats {
        let stats = match kind {
            EntityKind::Vertex => self.vertices.as_ref().map(EntityPool::stats),
            EntityKind::Track => self.tracks.as_ref().map(EntityPool::stats),
            EntityKind::McTruth => self.mc_truth.as_ref().map(EntityPool::stats),
            EntityKind::Digit => self.digits.as_ref().map(EntityPool::stats),
        };
        stats.unwrap_or(PoolStats {
            generation: self.generation,
            ..PoolStats::default()
        })
    }

    /// Resolve a handle.
    pub fn get<T: Pooled>(&self, handle: Handle<T>) -> Result<&T, EntityError> {
        match self.pool::<T>() {
            Some(pool) => pool.get(handle),
            None => Err(absent(self.generation, handle)),
        }
    }

    /// Resolve a handle mutably.
    pub fn get_mut<T: Pooled>(&mut self, handle: Handle<T>) -> Result<&mut T, EntityError> {
        let generation = self.generation;
        match T::pool_slot(self) {
            Some(pool) => pool.get_mut(handle),
            None => Err(absent(generation, handle)),
        }
    }

    /// Record of kind `T` at `index` in the current generation.
    pub fn at<T: Pooled>(&self, index: usize) -> Result<&T, EntityError> {
        match self.pool::<T>() {
            Some(pool) => pool.at(index),
            None => Err(EntityError::OutOfRange {
                kind: T::KIND,
                index,
                len: 0,
            }),
        }
    }

    /// Handle of the record of kind `T` at `index`.
    pub fn handle_at<T: Pooled>(&self, index: usize) -> Result<Handle<T>, EntityError> {
        match self.pool::<T>() {
            Some(pool) => pool.handle_at(index),
            None => Err(EntityError::OutOfRange {
                kind: T::KIND,
                index,
                len: 0,
            }),
        }
    }

    /// Live records of kind `T` in index order.
    pub fn as_slice<T: Pooled>(&self) -> &[T] {
        self.pool::<T>().map(EntityPool::as_slice).unwrap_or_default()
    }

    /// Iterate live records of kind `T` with their handles.
    pub fn iter<T: Pooled>(&self) -> impl Iterator<Item = (Handle<T>, &T)> + '_ {
        self.pool::<T>().into_iter().flat_map(|pool| pool.iter())
    }

    /// Retire the current generation in every pool, keeping storage.
    pub fn clear(&mut self) {
        if let Some(pool) = &mut self.vertices {
            pool.clear();
        }
        if let Some(pool) = &mut self.tracks {
            pool.clear();
        }
        if let Some(pool) = &mut self.mc_truth {
            pool.clear();
        }
        if let Some(pool) = &mut self.digits {
            pool.clear();
        }
        self.generation = self.generation.next();
    }

    /// Destroy all pools, releasing their storage.
    ///
    /// The generation still advances, so handles issued before the reset
    /// stay stale after the pools are re-created.
    pub fn reset(&mut self) {
        let released: usize = EntityKind::ALL
            .iter()
            .map(|&kind| self.stats(kind).memory_bytes)
            .sum();
        self.vertices = None;
        self.tracks = None;
        self.mc_truth = None;
        self.digits = None;
        self.generation = self.generation.next();
        tracing::debug!(
            released_bytes = released,
            generation = %self.generation,
            "pool set reset"
        );
    }

    /// Current generation shared by all pools.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The configuration pools are created with.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }
}

/// The error a handle into an absent pool resolves to.
fn absent<T: Pooled>(generation: Generation, handle: Handle<T>) -> EntityError {
    if handle.generation() != generation {
        EntityError::StaleReference {
            kind: T::KIND,
            handle_generation: handle.generation(),
            current_generation: generation,
        }
    } else {
        EntityError::OutOfRange {
            kind: T::KIND,
            index: handle.index(),
            len: 0,
        }
    }
}

impl Default for PoolSet {
    fn default() -> Self {
        // The default config is always valid.
        Self::unchecked(PoolConfig::default())
    }
}
