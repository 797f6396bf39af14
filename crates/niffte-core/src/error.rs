//! Errors for pooled-entity access and allocation.

use std::error::Error;
use std::fmt;

use crate::id::{EntityKind, Generation};

/// Errors that can occur when allocating or resolving pooled records.
///
/// `OutOfRange` and `StaleReference` are programming errors: they are
/// surfaced immediately and never clamped or retried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntityError {
    /// An index at or beyond the current population of a pool or list.
    OutOfRange {
        /// Kind of entity being indexed.
        kind: EntityKind,
        /// The requested index.
        index: usize,
        /// Current population.
        len: usize,
    },
    /// A handle issued before the most recent clear or reset.
    StaleReference {
        /// Kind of entity the handle points at.
        kind: EntityKind,
        /// The generation encoded in the handle.
        handle_generation: Generation,
        /// The pool's current generation.
        current_generation: Generation,
    },
    /// Pool growth could not reserve memory.
    AllocationFailed {
        /// Kind of entity whose pool failed to grow.
        kind: EntityKind,
        /// Number of slots requested.
        requested: usize,
    },
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { kind, index, len } => {
                write!(f, "{kind} index {index} out of range (len {len})")
            }
            Self::StaleReference {
                kind,
                handle_generation,
                current_generation,
            } => {
                write!(
                    f,
                    "stale {kind} reference: generation {handle_generation}, current {current_generation}"
                )
            }
            Self::AllocationFailed { kind, requested } => {
                write!(f, "{kind} pool allocation failed: requested {requested} slots")
            }
        }
    }
}

impl Error for EntityError {}
