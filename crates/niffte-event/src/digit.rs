//! TPC voxel hits.

use niffte_core::{EntityKind, SimContribution, SimInfo, Vec3};
use niffte_pool::Entity;

/// One detector voxel (digit).
///
/// `track_id` is a back-reference by value to the track that used this
/// digit; it does not own or borrow the track.
#[derive(Clone, Debug, PartialEq)]
pub struct Digit {
    /// Detector volume.
    pub volume: i32,
    /// Pad-plane row.
    pub row: i32,
    /// Pad-plane column.
    pub column: i32,
    /// Time bucket.
    pub bucket: i32,
    /// 3D location in TPC coordinates.
    pub location: Vec3,
    /// Total ADC of the digit.
    pub adc: f64,
    /// Index of the track that uses this digit, or [`Digit::NO_TRACK`].
    pub track_id: i16,
    sim_info: SimInfo,
}

impl Digit {
    /// `track_id` value of a digit no track claimed.
    pub const NO_TRACK: i16 = -1;

    /// Whether a track claimed this digit.
    pub fn is_used(&self) -> bool {
        self.track_id != Self::NO_TRACK
    }

    /// Record a simulated particle's contribution.
    pub fn add_sim_info(&mut self, particle_id: i32, weight: f64) {
        self.sim_info.push(particle_id, weight);
    }

    /// Drop all simulated contributions.
    pub fn clear_sim_info(&mut self) {
        self.sim_info.clear();
    }

    /// Simulated contributions (empty for real data).
    pub fn sim_info(&self) -> &SimInfo {
        &self.sim_info
    }

    /// The `i`-th simulated contribution.
    pub fn sim_info_at(&self, i: usize) -> Option<SimContribution> {
        self.sim_info.get(i)
    }
}

impl Default for Digit {
    fn default() -> Self {
        Self {
            volume: 0,
            row: 0,
            column: 0,
            bucket: 0,
            location: Vec3::ZERO,
            adc: 0.0,
            track_id: Self::NO_TRACK,
            sim_info: SimInfo::new(),
        }
    }
}

impl Entity for Digit {
    const KIND: EntityKind = EntityKind::Digit;

    fn recycle(&mut self) {
        let mut sim_info = std::mem::take(&mut self.sim_info);
        sim_info.clear();
        *self = Self {
            sim_info,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_digit_is_unused() {
        let d = Digit::default();
        assert_eq!(d.track_id, Digit::NO_TRACK);
        assert!(!d.is_used());
        assert!(d.sim_info().is_empty());
    }

    #[test]
    fn sim_info_accessors() {
        let mut d = Digit::default();
        d.add_sim_info(11, 0.6);
        d.add_sim_info(12, 0.4);
        assert_eq!(d.sim_info().len(), 2);
        assert_eq!(d.sim_info_at(1).map(|c| c.particle_id), Some(12));
        assert_eq!(d.sim_info_at(2), None);
        d.clear_sim_info();
        assert!(d.sim_info().is_empty());
    }

    #[test]
    fn recycle_restores_defaults() {
        let mut d = Digit {
            volume: 1,
            row: 4,
            column: 9,
            bucket: 200,
            location: Vec3::new(1.0, 2.0, 3.0),
            adc: 55.0,
            track_id: 3,
            ..Digit::default()
        };
        d.add_sim_info(1, 1.0);
        d.recycle();
        assert_eq!(d, Digit::default());
    }
}
