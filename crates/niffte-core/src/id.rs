//! Entity kinds and pool generations.

use std::fmt;

/// The four kinds of record an event pools.
///
/// The declaration order is the canonical order used wherever kinds are
/// enumerated (metrics, persistence field order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    /// A reconstructed interaction point.
    Vertex,
    /// A reconstructed particle trajectory.
    Track,
    /// A simulated primary particle.
    McTruth,
    /// A single TPC voxel hit.
    Digit,
}

impl EntityKind {
    /// All kinds in canonical order.
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Vertex,
        EntityKind::Track,
        EntityKind::McTruth,
        EntityKind::Digit,
    ];

    /// Short lowercase name, used as a structured-log field value.
    pub fn name(self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Track => "track",
            Self::McTruth => "mc_truth",
            Self::Digit => "digit",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifies one event generation of a pool.
///
/// A generation spans the time between two consecutive clears. Handles
/// carry the generation they were issued in; a handle whose generation
/// differs from the pool's current one is stale.
///
/// The counter wraps at `u32::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Generation(pub u32);

impl Generation {
    /// The generation a freshly created pool set starts in.
    pub const FIRST: Generation = Generation(0);

    /// The generation following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Generation {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
