//! Per-pool occupancy and growth statistics.

use niffte_core::Generation;

/// Occupancy snapshot of one [`EntityPool`](crate::EntityPool).
///
/// Cheap to produce; consumers (telemetry, tuning of
/// [`PoolConfig`](crate::PoolConfig)) read it between events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Live records in the current generation.
    pub len: usize,
    /// Slots reserved in the backing storage.
    pub capacity: usize,
    /// Most records ever live at once since the pool was created.
    pub high_water: usize,
    /// Number of times the backing storage grew.
    pub growth_events: u64,
    /// Current generation.
    pub generation: Generation,
    /// Inline size of the reserved slots in bytes. Heap memory owned by
    /// variable-length lists inside records is not counted.
    pub memory_bytes: usize,
}
