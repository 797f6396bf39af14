//! Core types for the NIFFTE event model.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the pool and event crates: entity kinds,
//! pool generations, the 3-vector payload type, Monte-Carlo contribution
//! lists, and the access/allocation error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod sim;
pub mod vector;

pub use error::EntityError;
pub use id::{EntityKind, Generation};
pub use sim::{SimContribution, SimInfo};
pub use vector::Vec3;
