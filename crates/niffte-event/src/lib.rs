//! Pooled TPC event container for NIFFTE reconstruction.
//!
//! An [`Event`] holds four kinds of records, each in its own reusable
//! pool, plus a scalar [`EventSummary`]:
//!
//! ```text
//! Event
//! ├── PoolSet (one shared generation)
//! │   ├── EntityPool<Vertex>   ── tracks: RefList<Track>
//! │   ├── EntityPool<Track>    ── digits: RefList<Digit>
//! │   ├── EntityPool<McTruth>
//! │   └── EntityPool<Digit>
//! └── EventSummary
//! ```
//!
//! Vertices reference tracks and tracks reference digits through
//! non-owning [`Handle`] lists. Clearing the event retires every handle
//! at once: the pool generation advances and all four pools restart at
//! index 0 while keeping their storage.
//!
//! ```
//! use niffte_event::Event;
//!
//! let mut event = Event::default();
//! let (track, _) = event.add_track()?;
//! let (digit, d) = event.add_digit()?;
//! d.adc = 120.0;
//! event.attach_digit(track, digit)?;
//! assert_eq!(event.get(track)?.n_ref_digits(), 1);
//!
//! event.clear("");
//! assert!(event.get(digit).is_err());
//! # Ok::<(), niffte_core::EntityError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod digit;
pub mod event;
pub mod mc_truth;
pub mod metrics;
pub mod pools;
pub mod summary;
pub mod track;
pub mod vertex;

pub use digit::Digit;
pub use event::Event;
pub use mc_truth::McTruth;
pub use metrics::EventMetrics;
pub use niffte_core::EntityError;
pub use niffte_pool::Handle;
pub use pools::{PoolSet, Pooled};
pub use summary::EventSummary;
pub use track::{PidFlags, Track};
pub use vertex::Vertex;
