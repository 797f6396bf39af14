//! Test utilities for NIFFTE event model development.
//!
//! Provides an [`EventScenario`] builder that fills an [`Event`] with a
//! deterministic, seeded vertex/track/digit topology.
//!
//! [`Event`]: niffte_event::Event

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{EventScenario, ScenarioHandles};
