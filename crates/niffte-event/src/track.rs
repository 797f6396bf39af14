//! Reconstructed particle trajectories.

use niffte_core::{EntityKind, SimContribution, SimInfo, Vec3};
use niffte_pool::{Entity, RefList};

use crate::digit::Digit;

/// Particle-identification flags set by the PID stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PidFlags {
    /// Fission fragment.
    pub fission_fragment: bool,
    /// Proton stopping inside the active volume.
    pub contained_proton: bool,
    /// Proton leaving the active volume.
    pub uncontained_proton: bool,
    /// Alpha particle.
    pub alpha: bool,
}

impl PidFlags {
    /// Whether any species flag is set.
    pub fn any(&self) -> bool {
        self.fission_fragment || self.contained_proton || self.uncontained_proton || self.alpha
    }
}

/// One reconstructed track.
///
/// The digit list is only populated when the persistence policy asks for
/// track-associated digits; otherwise it stays empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    /// Index assigned during track finding.
    pub track_num: i16,
    /// Total charge in ADC.
    pub adc: f64,
    /// Energy in MeV calibrated from ADC.
    pub energy: f64,
    /// Number of digits associated with the track.
    pub n_digits: i16,
    /// Number of waveforms associated with the track.
    pub n_signals: i16,
    /// How the tracker found the track.
    pub track_type: i16,
    /// Volume the track was found in.
    pub volume: i16,
    /// Earliest digit time.
    pub start_time: f64,
    /// Cathode time associated with the track.
    pub cathode_time: f64,
    /// Anode time associated with the track.
    pub anode_time: f64,
    /// Neutron time of flight from this track's anode timing.
    pub ntof_anode: f64,
    /// Start point.
    pub start: Vec3,
    /// End point.
    pub end: Vec3,
    /// Direction vector.
    pub direction: Vec3,
    /// Track length.
    pub length: f64,
    /// Average radius squared of the charge cloud.
    pub avg_r2: f64,
    /// How the fitter fit the track.
    pub fit_type: i16,
    /// Fit number assigned by the fitter.
    pub fit_no: i16,
    /// Best-fit indicator.
    pub best_fit: i16,
    /// Fit quality weight.
    pub fit_quality: f32,
    /// Whether the track direction was reversed.
    pub reversed: bool,
    /// Whether the Hough-transform finder was needed for this event.
    pub hough_track_in_event: bool,
    /// Why the track was reversed.
    pub reverse_reason: i16,
    /// Bragg peak location, in relative coordinates.
    pub bragg_position: f64,
    /// Bragg peak amplitude in ADC.
    pub bragg_value: f64,
    /// Particle-identification flags.
    pub pid: PidFlags,
    digits: RefList<Digit>,
    sim_info: SimInfo,
}

impl Track {
    /// Number of referenced digits.
    pub fn n_ref_digits(&self) -> usize {
        self.digits.count()
    }

    /// Digits that contributed to this track.
    pub fn digits(&self) -> &RefList<Digit> {
        &self.digits
    }

    /// Mutable digit list.
    ///
    /// Prefer [`Event::attach_digit`](crate::Event::attach_digit), which
    /// checks that the digit is live before recording it.
    pub fn digits_mut(&mut self) -> &mut RefList<Digit> {
        &mut self.digits
    }

    /// Record a simulated particle's contribution.
    pub fn add_sim_info(&mut self, particle_id: i32, weight: f64) {
        self.sim_info.push(particle_id, weight);
    }

    /// Drop all simulated contributions.
    pub fn clear_sim_info(&mut self) {
        self.sim_info.clear();
    }

    /// Whether the track carries MC truth.
    pub fn is_simulated(&self) -> bool {
        !self.sim_info.is_empty()
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

impl Default for Track {
    fn default() -> Self {
        Self {
            track_num: 0,
            adc: 0.0,
            energy: 0.0,
            n_digits: 0,
            n_signals: 0,
            track_type: 0,
            volume: 0,
            start_time: 0.0,
            cathode_time: 0.0,
            anode_time: 0.0,
            ntof_anode: 0.0,
            start: Vec3::ZERO,
            end: Vec3::ZERO,
            direction: Vec3::ZERO,
            length: 0.0,
            avg_r2: 0.0,
            fit_type: 0,
            fit_no: 0,
            best_fit: 0,
            fit_quality: 0.0,
            reversed: false,
            hough_track_in_event: false,
            reverse_reason: 0,
            bragg_position: 0.0,
            bragg_value: 0.0,
            pid: PidFlags::default(),
            digits: RefList::new(),
            sim_info: SimInfo::new(),
        }
    }
}

impl Entity for Track {
    const KIND: EntityKind = EntityKind::Track;

    fn recycle(&mut self) {
        let mut digits = std::mem::take(&mut self.digits);
        let mut sim_info = std::mem::take(&mut self.sim_info);
        digits.clear();
        sim_info.clear();
        *self = Self {
            digits,
            sim_info,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_track_has_no_references() {
        let t = Track::default();
        assert_eq!(t.n_ref_digits(), 0);
        assert!(!t.is_simulated());
        assert!(!t.pid.any());
    }

    #[test]
    fn pid_any() {
        let flags = PidFlags {
            alpha: true,
            ..PidFlags::default()
        };
        assert!(flags.any());
    }

    #[test]
    fn sim_info_marks_simulated() {
        let mut t = Track::default();
        t.add_sim_info(4, 1.0);
        assert!(t.is_simulated());
        assert_eq!(t.sim_info_at(0).map(|c| c.weight), Some(1.0));
        t.clear_sim_info();
        assert!(!t.is_simulated());
    }

    #[test]
    fn recycle_restores_defaults() {
        let mut t = Track {
            track_num: 3,
            energy: 90.0,
            reversed: true,
            pid: PidFlags {
                fission_fragment: true,
                ..PidFlags::default()
            },
            ..Track::default()
        };
        t.add_sim_info(1, 0.5);
        t.recycle();
        assert_eq!(t, Track::default());
    }
}
