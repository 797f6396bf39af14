//! Benchmark profiles for the NIFFTE event model.
//!
//! Provides pre-built event shapes for benchmarking:
//!
//! - [`reference_profile`]: a typical fission event (2 vertices, 2 fragments each, 200 digits per track)
//! - [`stress_profile`]: a dense event that forces the digit pool past its default capacity
//! - [`fill_and_clear`]: one producer cycle, as run once per detector event

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use niffte_event::{EntityError, Event};
use niffte_pool::PoolConfig;
use niffte_test_utils::EventScenario;

/// Typical reconstructed fission event, 800 tracked digits plus 100 strays.
pub fn reference_profile(seed: u64) -> EventScenario {
    EventScenario::new(seed)
        .vertices(2)
        .tracks_per_vertex(2)
        .digits_per_track(200)
        .unused_digits(100)
}

/// Dense event: 10x the reference digit count, with simulation truth.
pub fn stress_profile(seed: u64) -> EventScenario {
    EventScenario::new(seed)
        .vertices(4)
        .tracks_per_vertex(5)
        .digits_per_track(400)
        .unused_digits(1000)
        .simulated(true)
}

/// Pool capacities sized so [`stress_profile`] never grows.
pub fn stress_config() -> PoolConfig {
    let scenario = stress_profile(0);
    PoolConfig {
        vertices: 4,
        tracks: scenario.total_tracks(),
        mc_truth: scenario.total_tracks(),
        digits: scenario.total_digits(),
    }
}

/// Fill `event` with `scenario`, then clear it. Returns the digit count
/// observed before the clear.
pub fn fill_and_clear(event: &mut Event, scenario: &EventScenario) -> Result<usize, EntityError> {
    scenario.build(event)?;
    let n = event.n_digits();
    event.clear("");
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stress_config_avoids_growth() {
        let mut event = Event::new(stress_config()).unwrap();
        let n = fill_and_clear(&mut event, &stress_profile(9)).unwrap();
        assert_eq!(n, stress_profile(9).total_digits());
        assert_eq!(event.metrics().total_growth_events(), 0);
    }

    #[test]
    fn reference_profile_fits_default_pools() {
        let mut event = Event::default();
        fill_and_clear(&mut event, &reference_profile(1)).unwrap();
        assert_eq!(event.metrics().total_growth_events(), 0);
    }
}
