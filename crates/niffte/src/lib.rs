//! NIFFTE: the in-memory event model for TPC fission reconstruction.
//!
//! Reconstruction code fills one [`event::Event`] per detector trigger:
//! digits, tracks, vertices, and simulated truth, linked by
//! generation-checked handles. This crate gathers the core types, the
//! pools, and the event container behind one dependency and a prelude.
//!
//! # Quick start
//!
//! ```rust
//! use niffte::prelude::*;
//!
//! let mut event = Event::new(PoolConfig::default()).unwrap();
//!
//! // One vertex, one track, three digits.
//! let (vertex, _) = event.add_vertex().unwrap();
//! let (track, t) = event.add_track().unwrap();
//! t.volume = 1;
//! event.attach_track(vertex, track).unwrap();
//! for bucket in 0..3 {
//!     let (digit, d) = event.add_digit().unwrap();
//!     d.bucket = bucket;
//!     d.track_id = track.index() as i16;
//!     event.attach_digit(track, digit).unwrap();
//! }
//! assert_eq!(event.get(track).unwrap().n_ref_digits(), 3);
//!
//! // Next event: storage is kept, every old handle goes stale.
//! event.clear("");
//! assert_eq!(event.n_digits(), 0);
//! assert!(matches!(
//!     event.get(track),
//!     Err(EntityError::StaleReference { .. })
//! ));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `niffte-core` | Entity kinds, generations, `Vec3`, sim info, `EntityError` |
//! | [`pool`] | `niffte-pool` | `EntityPool`, `Handle`, `RefList`, `PoolConfig`, `PoolStats` |
//! | [`event`] | `niffte-event` | `Event`, record types, `PoolSet`, `EventMetrics` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary types (`niffte-core`).
///
/// Entity kinds, pool generations, the 3-vector payload type,
/// Monte-Carlo contribution lists, and the shared error type.
pub use niffte_core as types;

/// Generational pools, handles, and reference lists (`niffte-pool`).
///
/// [`pool::EntityPool`] is usable on its own for any record type that
/// implements [`pool::Entity`].
pub use niffte_pool as pool;

/// The event container and its record types (`niffte-event`).
pub use niffte_event as event;

/// Common imports for typical NIFFTE usage.
///
/// ```rust
/// use niffte::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use niffte_core::{EntityError, EntityKind, Generation, SimContribution, Vec3};

    // Pools
    pub use niffte_pool::{Handle, PoolConfig, PoolStats, RefList};

    // Event
    pub use niffte_event::{
        Digit, Event, EventMetrics, EventSummary, McTruth, PidFlags, Track, Vertex,
    };
}
