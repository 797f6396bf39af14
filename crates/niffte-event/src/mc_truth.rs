//! Simulated primary particles.

use niffte_core::{EntityKind, Vec3};
use niffte_pool::Entity;

/// Ground truth for one simulated particle. Present only in simulation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct McTruth {
    /// Track id assigned by the simulation.
    pub mc_track_id: i32,
    /// Atomic number.
    pub z: i16,
    /// Mass number.
    pub a: i16,
    /// Kinetic energy.
    pub kinetic_energy: f64,
    /// Energy deposited in the active volume.
    pub deposited_energy: f64,
    /// Mass.
    pub mass: f64,
    /// Start location.
    pub start: Vec3,
    /// Start time.
    pub start_time: f64,
    /// End location.
    pub end: Vec3,
    /// Track length.
    pub length: f64,
    /// Momentum at creation.
    pub momentum: Vec3,
    /// Direction vector.
    pub direction: Vec3,
    /// Energy of the neutron initiating fission.
    pub neutron_energy: f64,
}

impl Entity for McTruth {
    const KIND: EntityKind = EntityKind::McTruth;
}
