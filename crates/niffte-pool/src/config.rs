//! Pool sizing configuration.

use std::error::Error;
use std::fmt;

use niffte_core::EntityKind;

/// Initial slot capacity for each entity pool.
///
/// Pools grow on demand, so these values only set the size reserved up
/// front. Validated when a pool set is built; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Initial vertex slots. Default: 10.
    pub vertices: usize,
    /// Initial track slots. Default: 100.
    pub tracks: usize,
    /// Initial MC-truth slots. Default: 100.
    pub mc_truth: usize,
    /// Initial digit slots. Default: 1000.
    pub digits: usize,
}

impl PoolConfig {
    /// Default vertex capacity.
    pub const DEFAULT_VERTICES: usize = 10;

    /// Default track capacity.
    pub const DEFAULT_TRACKS: usize = 100;

    /// Default MC-truth capacity.
    pub const DEFAULT_MC_TRUTH: usize = 100;

    /// Default digit capacity.
    pub const DEFAULT_DIGITS: usize = 1000;

    /// Largest capacity a handle index can address.
    pub const MAX_CAPACITY: usize = u32::MAX as usize;

    /// Config with the default capacity for every kind.
    pub fn new() -> Self {
        Self {
            vertices: Self::DEFAULT_VERTICES,
            tracks: Self::DEFAULT_TRACKS,
            mc_truth: Self::DEFAULT_MC_TRUTH,
            digits: Self::DEFAULT_DIGITS,
        }
    }

    /// Override the initial capacity of one kind.
    pub fn with_capacity(mut self, kind: EntityKind, capacity: usize) -> Self {
        match kind {
            EntityKind::Vertex => self.vertices = capacity,
            EntityKind::Track => self.tracks = capacity,
            EntityKind::McTruth => self.mc_truth = capacity,
            EntityKind::Digit => self.digits = capacity,
        }
        self
    }

    /// Initial capacity configured for `kind`.
    pub fn capacity_for(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Vertex => self.vertices,
            EntityKind::Track => self.tracks,
            EntityKind::McTruth => self.mc_truth,
            EntityKind::Digit => self.digits,
        }
    }

    /// Check that every capacity is addressable by a handle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in EntityKind::ALL {
            let capacity = self.capacity_for(kind);
            if capacity > Self::MAX_CAPACITY {
                return Err(ConfigError::CapacityTooLarge { kind, capacity });
            }
        }
        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors detected by [`PoolConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Initial capacity exceeds what a `u32` slot index can address.
    CapacityTooLarge {
        /// The offending pool.
        kind: EntityKind,
        /// The configured capacity.
        capacity: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityTooLarge { kind, capacity } => {
                write!(
                    f,
                    "{kind} pool capacity {capacity} exceeds maximum {}",
                    PoolConfig::MAX_CAPACITY
                )
            }
        }
    }
}

impl Error for ConfigError {}
