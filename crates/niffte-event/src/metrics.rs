//! Pool occupancy metrics for one event.
//!
//! [`EventMetrics`] captures, per entity kind, how much of each pool the
//! event used and how often storage had to grow. Producers call
//! [`Event::metrics`](crate::Event::metrics) between events (typically
//! right before `clear`) to tune initial capacities.

use indexmap::IndexMap;
use niffte_core::{EntityKind, Generation};
use niffte_pool::PoolStats;

/// Per-kind pool statistics, in canonical kind order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventMetrics {
    /// Generation the event is in.
    pub generation: Generation,
    /// Stats keyed by kind, ordered as [`EntityKind::ALL`].
    pub pools: IndexMap<EntityKind, PoolStats>,
}

impl EventMetrics {
    /// Sum of live records across all kinds.
    pub fn total_records(&self) -> usize {
        self.pools.values().map(|s| s.len).sum()
    }

    /// Sum of reserved slot memory across all kinds.
    pub fn total_memory_bytes(&self) -> usize {
        self.pools.values().map(|s| s.memory_bytes).sum()
    }

    /// Sum of growth events across all kinds.
    pub fn total_growth_events(&self) -> u64 {
        self.pools.values().map(|s| s.growth_events).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_sum_over_kinds() {
        let mut m = EventMetrics::default();
        m.pools.insert(
            EntityKind::Track,
            PoolStats {
                len: 3,
                memory_bytes: 100,
                growth_events: 1,
                ..PoolStats::default()
            },
        );
        m.pools.insert(
            EntityKind::Digit,
            PoolStats {
                len: 40,
                memory_bytes: 900,
                growth_events: 2,
                ..PoolStats::default()
            },
        );
        assert_eq!(m.total_records(), 43);
        assert_eq!(m.total_memory_bytes(), 1000);
        assert_eq!(m.total_growth_events(), 3);
    }
}
