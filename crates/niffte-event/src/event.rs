//! The event container.
//!
//! An [`Event`] owns a [`PoolSet`] plus the scalar [`EventSummary`]. Records
//! are created through [`Event::add`] (or the named `add_*` shorthands),
//! addressed by [`Handle`]s, and cross-linked with `attach_*`. Between
//! events a producer calls [`Event::clear`], which keeps every pool's
//! storage for reuse; [`Event::reset`] releases it.

use niffte_core::{EntityError, EntityKind, Generation};
use niffte_pool::{ConfigError, Handle, PoolConfig};

use crate::digit::Digit;
use crate::mc_truth::McTruth;
use crate::metrics::EventMetrics;
use crate::pools::{PoolSet, Pooled};
use crate::summary::EventSummary;
use crate::track::Track;
use crate::vertex::Vertex;

/// One TPC event: pooled records plus per-event summary values.
#[derive(Default)]
pub struct Event {
    pools: PoolSet,
    /// Scalar event-level values. Reset by [`clear`](Event::clear).
    pub summary: EventSummary,
}

impl Event {
    /// Create an empty event whose pools use `config` capacities.
    pub fn new(config: PoolConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_pools(PoolSet::new(config)?))
    }

    /// Build an event on top of an existing pool set.
    ///
    /// Whatever the pool set holds becomes this event's content. Handles
    /// are checked by kind, index, and generation only, so a handle from
    /// another event is not rejected when both happen to share a
    /// generation. Keep handles with the event that issued them.
    pub fn with_pools(pools: PoolSet) -> Self {
        Self {
            pools,
            summary: EventSummary::default(),
        }
    }

    /// Give up the pool set so another event can reuse its storage.
    pub fn into_pools(self) -> PoolSet {
        self.pools
    }

    /// The pool set backing this event.
    pub fn pools(&self) -> &PoolSet {
        &self.pools
    }

    /// Create all four pools now rather than on first use.
    pub fn preallocate(&mut self) -> Result<(), EntityError> {
        self.pools.preallocate()
    }

    // ── creation ────────────────────────────────────────────────

    /// Append a default record of kind `T`.
    ///
    /// The returned handle's index equals the count before the call.
    pub fn add<T: Pooled>(&mut self) -> Result<(Handle<T>, &mut T), EntityError> {
        self.pools.pool_mut::<T>()?.allocate()
    }

    /// Append a vertex.
    pub fn add_vertex(&mut self) -> Result<(Handle<Vertex>, &mut Vertex), EntityError> {
        self.add()
    }

    /// Append a track.
    pub fn add_track(&mut self) -> Result<(Handle<Track>, &mut Track), EntityError> {
        self.add()
    }

    /// Append an MC-truth record.
    pub fn add_mc_truth(&mut self) -> Result<(Handle<McTruth>, &mut McTruth), EntityError> {
        self.add()
    }

    /// Append a digit.
    pub fn add_digit(&mut self) -> Result<(Handle<Digit>, &mut Digit), EntityError> {
        self.add()
    }

    // ── counts ──────────────────────────────────────────────────

    /// Live records of kind `T`.
    pub fn count<T: Pooled>(&self) -> usize {
        self.pools.len::<T>()
    }

    /// Number of vertices.
    pub fn n_vertices(&self) -> usize {
        self.count::<Vertex>()
    }

    /// Number of tracks.
    pub fn n_tracks(&self) -> usize {
        self.count::<Track>()
    }

    /// Number of MC-truth records.
    pub fn n_mc_truth(&self) -> usize {
        self.count::<McTruth>()
    }

    /// Number of digits.
    pub fn n_digits(&self) -> usize {
        self.count::<Digit>()
    }

    /// Digits whose `track_id` is still unassigned.
    pub fn count_unused_digits(&self) -> usize {
        self.digits().filter(|(_, d)| !d.is_used()).count()
    }

    // ── access ──────────────────────────────────────────────────

    /// Resolve a handle into this event.
    pub fn get<T: Pooled>(&self, handle: Handle<T>) -> Result<&T, EntityError> {
        self.pools.get(handle)
    }

    /// Resolve a handle into this event mutably.
    pub fn get_mut<T: Pooled>(&mut self, handle: Handle<T>) -> Result<&mut T, EntityError> {
        self.pools.get_mut(handle)
    }

    /// Record of kind `T` at position `index`.
    pub fn at<T: Pooled>(&self, index: usize) -> Result<&T, EntityError> {
        self.pools.at(index)
    }

    /// Current-generation handle for position `index`.
    pub fn handle_at<T: Pooled>(&self, index: usize) -> Result<Handle<T>, EntityError> {
        self.pools.handle_at(index)
    }

    /// Live records of kind `T` in creation order.
    pub fn as_slice<T: Pooled>(&self) -> &[T] {
        self.pools.as_slice()
    }

    /// Live records of kind `T` with their handles, in creation order.
    pub fn iter<T: Pooled>(&self) -> impl Iterator<Item = (Handle<T>, &T)> + '_ {
        self.pools.iter()
    }

    /// Vertices with their handles.
    pub fn vertices(&self) -> impl Iterator<Item = (Handle<Vertex>, &Vertex)> + '_ {
        self.iter()
    }

    /// Tracks with their handles.
    pub fn tracks(&self) -> impl Iterator<Item = (Handle<Track>, &Track)> + '_ {
        self.iter()
    }

    /// MC-truth records with their handles.
    pub fn mc_truth(&self) -> impl Iterator<Item = (Handle<McTruth>, &McTruth)> + '_ {
        self.iter()
    }

    /// Digits with their handles.
    pub fn digits(&self) -> impl Iterator<Item = (Handle<Digit>, &Digit)> + '_ {
        self.iter()
    }

    // ── associations ────────────────────────────────────────────

    /// Append `digit` to `track`'s digit list.
    ///
    /// Both handles must be live; nothing is recorded otherwise. The
    /// digit's own `track_id` is left to the caller.
    pub fn attach_digit(
        &mut self,
        track: Handle<Track>,
        digit: Handle<Digit>,
    ) -> Result<(), EntityError> {
        self.pools.get(digit)?;
        self.pools.get_mut(track)?.digits_mut().add(digit);
        Ok(())
    }

    /// Append `track` to `vertex`'s track list. Both handles must be live.
    pub fn attach_track(
        &mut self,
        vertex: Handle<Vertex>,
        track: Handle<Track>,
    ) -> Result<(), EntityError> {
        self.pools.get(track)?;
        self.pools.get_mut(vertex)?.tracks_mut().add(track);
        Ok(())
    }

    /// Resolve every digit referenced by `track`, in insertion order.
    pub fn track_digits(&self, track: Handle<Track>) -> Result<Vec<&Digit>, EntityError> {
        self.get(track)?
            .digits()
            .iter()
            .map(|h| self.get(h))
            .collect()
    }

    /// Resolve every track referenced by `vertex`, in insertion order.
    pub fn vertex_tracks(&self, vertex: Handle<Vertex>) -> Result<Vec<&Track>, EntityError> {
        self.get(vertex)?
            .tracks()
            .iter()
            .map(|h| self.get(h))
            .collect()
    }

    // ── lifecycle ───────────────────────────────────────────────

    /// Empty the event, keeping pool storage for the next one.
    ///
    /// Every handle issued so far becomes stale. `option` is recorded in
    /// the log and otherwise ignored.
    pub fn clear(&mut self, option: &str) {
        tracing::debug!(
            option,
            generation = %self.pools.generation(),
            vertices = self.n_vertices(),
            tracks = self.n_tracks(),
            mc_truth = self.n_mc_truth(),
            digits = self.n_digits(),
            "event cleared"
        );
        self.pools.clear();
        self.summary = EventSummary::default();
    }

    /// Empty the event and release all pool storage.
    ///
    /// Pools are re-created on the next `add`. `option` is recorded in
    /// the log and otherwise ignored.
    pub fn reset(&mut self, option: &str) {
        tracing::debug!(option, "event reset");
        self.pools.reset();
        self.summary = EventSummary::default();
    }

    /// Current generation; handles from older generations are stale.
    pub fn generation(&self) -> Generation {
        self.pools.generation()
    }

    /// Per-kind pool occupancy.
    pub fn metrics(&self) -> EventMetrics {
        EventMetrics {
            generation: self.generation(),
            pools: EntityKind::ALL
                .iter()
                .map(|&kind| (kind, self.pools.stats(kind)))
                .collect(),
        }
    }
}
