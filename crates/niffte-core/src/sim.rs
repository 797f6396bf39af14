//! Monte-Carlo contribution lists attached to digits and tracks.
//!
//! In simulated data each digit and track records which MC particles
//! deposited charge in it and with what weight. In real data the list is
//! simply empty.

use smallvec::SmallVec;

/// One simulated particle's share of a digit or track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimContribution {
    /// Simulation track id of the contributing MC particle.
    pub particle_id: i32,
    /// Fractional weight of the contribution.
    pub weight: f64,
}

/// Variable-length list of [`SimContribution`]s.
///
/// Uses `SmallVec<[SimContribution; 2]>` because a hit almost always has
/// one or two contributors. [`clear`](SimInfo::clear) keeps any spilled
/// heap capacity so pooled records do not reallocate event after event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimInfo {
    entries: SmallVec<[SimContribution; 2]>,
}

impl SimInfo {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a contribution.
    pub fn push(&mut self, particle_id: i32, weight: f64) {
        self.entries.push(SimContribution {
            particle_id,
            weight,
        });
    }

    /// Remove all contributions, keeping capacity.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of contributions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty (always the case for real data).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `i`-th contribution, or `None` past the end.
    pub fn get(&self, i: usize) -> Option<SimContribution> {
        self.entries.get(i).copied()
    }

    /// Contributions as a slice, in insertion order.
    pub fn as_slice(&self) -> &[SimContribution] {
        &self.entries
    }

    /// Iterate over contributions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SimContribution> {
        self.entries.iter()
    }
}
