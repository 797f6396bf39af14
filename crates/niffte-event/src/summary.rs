//! Per-event scalar summary values.

/// Event-level quantities filled by reconstruction.
///
/// Plain payload: nothing here is validated or derived by the container.
/// Reset to defaults by [`Event::clear`](crate::Event::clear).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventSummary {
    /// Event number from the run file.
    pub event_id: i32,
    /// Digits in the raw event before any filtering.
    pub reco_digit_count: i32,
    /// Tracks found by reconstruction; usually larger than the stored track count.
    pub reco_track_count: i32,
    /// Digits not claimed by any track.
    pub n_unused_digits: i32,
    /// Number of waveforms in the event.
    pub n_signals: i16,
    /// Total ADC of all digits.
    pub digit_charge: f64,
    /// Total ADC of volume-0 digits.
    pub vol0_digit_charge: f64,
    /// Total ADC of volume-1 digits.
    pub vol1_digit_charge: f64,
    /// Neutron time of flight from the cathode signal.
    pub time_of_flight: f64,
    /// Neutron time of flight from the anode track start.
    pub ntof_anode: f64,
    /// Delta T.
    pub delta_t: f64,
    /// Beam micropulse number.
    pub micropulse_number: i32,
    /// Total energy of the cathode signal.
    pub cathode_energy: f64,
    /// ADC cut applied to the event.
    pub adc_cut_off: f64,
    /// ADC cut applied to volume 0.
    pub vol0_adc_min: f64,
    /// ADC cut applied to volume 1.
    pub vol1_adc_min: f64,
    /// Volume-0 bucket offset from target-plane alignment.
    pub vol0_bucket_offset: i32,
    /// Volume-1 bucket offset from target-plane alignment.
    pub vol1_bucket_offset: i32,
    /// Volume-0 z offset.
    pub vol0_z_offset: f64,
    /// Volume-1 z offset.
    pub vol1_z_offset: f64,
}
