//! Generational entity pools for the NIFFTE event model.
//!
//! Event reconstruction allocates thousands of digits per event at high
//! rate. Instead of allocating and freeing records per event, each entity
//! kind lives in an [`EntityPool`] whose storage is reused from one event
//! to the next: `clear()` retires a generation without releasing memory,
//! and only dropping the pool frees it.
//!
//! # Architecture
//!
//! ```text
//! EntityPool<T>
//! ├── slots: Vec<T>          (grows by doubling, never shrinks)
//! ├── len                    (live population of this generation)
//! └── generation             (advanced by every clear)
//!
//! Handle<T> = (T::KIND, slot index, generation)
//! RefList<T> = Vec<Handle<T>> stored inside a referencing record
//! ```
//!
//! # Handle validity
//!
//! Pool growth may move the backing storage, so nothing outside the pool
//! holds addresses. Cross references are [`Handle`]s, and every lookup
//! compares the handle's generation with the pool's. A handle from an
//! earlier generation fails with
//! [`EntityError::StaleReference`](niffte_core::EntityError::StaleReference)
//! instead of silently reading a recycled record.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod handle;
pub mod pool;
pub mod reflist;
pub mod stats;

pub use config::{ConfigError, PoolConfig};
pub use handle::{Entity, Handle, RawHandle};
pub use pool::EntityPool;
pub use reflist::RefList;
pub use stats::PoolStats;
