//! Seeded event topologies.
//!
//! [`EventScenario`] describes an event shape (vertices, tracks per
//! vertex, digits per track, stray digits) and fills an [`Event`] with it.
//! Payload values come from a `ChaCha8Rng` seeded by the scenario, so the
//! same scenario always produces the same event.

use niffte_core::{EntityError, Vec3};
use niffte_event::{Digit, Event, McTruth, Track, Vertex};
use niffte_pool::Handle;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Pad rows per volume.
const ROWS: i32 = 48;
/// Pad columns per row.
const COLUMNS: i32 = 64;
/// Time buckets per waveform.
const BUCKETS: i32 = 512;

/// Handles to everything a scenario created, in creation order.
#[derive(Debug, Default)]
pub struct ScenarioHandles {
    pub vertices: Vec<Handle<Vertex>>,
    pub tracks: Vec<Handle<Track>>,
    pub digits: Vec<Handle<Digit>>,
    pub unused_digits: Vec<Handle<Digit>>,
    pub mc_truth: Vec<Handle<McTruth>>,
}

/// Builder for a deterministic event topology.
///
/// ```
/// use niffte_event::Event;
/// use niffte_test_utils::EventScenario;
///
/// let mut event = Event::default();
/// let handles = EventScenario::new(7)
///     .vertices(2)
///     .tracks_per_vertex(2)
///     .digits_per_track(10)
///     .build(&mut event)
///     .unwrap();
/// assert_eq!(handles.tracks.len(), 4);
/// assert_eq!(event.n_digits(), 40);
/// ```
#[derive(Clone, Debug)]
pub struct EventScenario {
    seed: u64,
    vertices: usize,
    tracks_per_vertex: usize,
    digits_per_track: usize,
    unused_digits: usize,
    simulated: bool,
}

impl EventScenario {
    /// One vertex, two tracks, twenty digits per track, no strays.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            vertices: 1,
            tracks_per_vertex: 2,
            digits_per_track: 20,
            unused_digits: 0,
            simulated: false,
        }
    }

    pub fn vertices(mut self, n: usize) -> Self {
        self.vertices = n;
        self
    }

    pub fn tracks_per_vertex(mut self, n: usize) -> Self {
        self.tracks_per_vertex = n;
        self
    }

    pub fn digits_per_track(mut self, n: usize) -> Self {
        self.digits_per_track = n;
        self
    }

    /// Digits added after all tracks and claimed by none.
    pub fn unused_digits(mut self, n: usize) -> Self {
        self.unused_digits = n;
        self
    }

    /// Add one MC-truth record per track and simulated contributions on
    /// every track and digit.
    pub fn simulated(mut self, on: bool) -> Self {
        self.simulated = on;
        self
    }

    pub fn total_tracks(&self) -> usize {
        self.vertices * self.tracks_per_vertex
    }

    pub fn total_digits(&self) -> usize {
        self.total_tracks() * self.digits_per_track + self.unused_digits
    }

    /// Append the scenario to `event`, also filling its summary.
    pub fn build(&self, event: &mut Event) -> Result<ScenarioHandles, EntityError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut handles = ScenarioHandles::default();

        for _ in 0..self.vertices {
            let (v, vertex) = event.add_vertex()?;
            vertex.average = random_point(&mut rng);
            vertex.minimized = vertex.average;
            vertex.valid_minimized = rng.random();
            handles.vertices.push(v);

            for _ in 0..self.tracks_per_vertex {
                let track_index = handles.tracks.len();
                let mc_track_id = track_index as i32;
                let volume: i16 = rng.random_range(0..2);

                let (t, track) = event.add_track()?;
                track.track_num = track_index as i16;
                track.volume = volume;
                track.start = vertex_start(&mut rng);
                track.end = random_point(&mut rng);
                track.direction = track.end - track.start;
                track.length = track.direction.mag();
                if self.simulated {
                    track.add_sim_info(mc_track_id, 1.0);
                }
                event.attach_track(v, t)?;
                handles.tracks.push(t);

                let mut charge = 0.0;
                for _ in 0..self.digits_per_track {
                    let (d, digit) = event.add_digit()?;
                    fill_digit(digit, i32::from(volume), &mut rng);
                    digit.track_id = track_index as i16;
                    if self.simulated {
                        digit.add_sim_info(mc_track_id, 1.0);
                    }
                    charge += digit.adc;
                    event.attach_digit(t, d)?;
                    handles.digits.push(d);
                }

                let track = event.get_mut(t)?;
                track.adc = charge;
                track.n_digits = self.digits_per_track as i16;

                if self.simulated {
                    let (m, truth) = event.add_mc_truth()?;
                    truth.mc_track_id = mc_track_id;
                    truth.kinetic_energy = rng.random_range(1.0..100.0);
                    truth.deposited_energy = truth.kinetic_energy;
                    handles.mc_truth.push(m);
                }
            }
        }

        for _ in 0..self.unused_digits {
            let (d, digit) = event.add_digit()?;
            let volume = rng.random_range(0..2);
            fill_digit(digit, volume, &mut rng);
            handles.unused_digits.push(d);
        }

        let summary = summarize(event);
        event.summary.event_id = self.seed as i32;
        event.summary.reco_digit_count = event.n_digits() as i32;
        event.summary.reco_track_count = event.n_tracks() as i32;
        event.summary.n_unused_digits = event.count_unused_digits() as i32;
        event.summary.digit_charge = summary.0;
        event.summary.vol0_digit_charge = summary.1;
        event.summary.vol1_digit_charge = summary.2;
        Ok(handles)
    }
}

fn fill_digit(digit: &mut Digit, volume: i32, rng: &mut ChaCha8Rng) {
    digit.volume = volume;
    digit.row = rng.random_range(0..ROWS);
    digit.column = rng.random_range(0..COLUMNS);
    digit.bucket = rng.random_range(0..BUCKETS);
    digit.adc = rng.random_range(10.0..500.0);
    digit.location = Vec3::new(
        f64::from(digit.column) * 0.2,
        f64::from(digit.row) * 0.2,
        f64::from(digit.bucket) * 0.05,
    );
}

fn random_point(rng: &mut ChaCha8Rng) -> Vec3 {
    Vec3::new(
        rng.random_range(-5.0..5.0),
        rng.random_range(-5.0..5.0),
        rng.random_range(-5.0..5.0),
    )
}

fn vertex_start(rng: &mut ChaCha8Rng) -> Vec3 {
    Vec3::new(
        rng.random_range(-0.5..0.5),
        rng.random_range(-0.5..0.5),
        0.0,
    )
}

/// Total, volume-0, and volume-1 digit charge.
fn summarize(event: &Event) -> (f64, f64, f64) {
    event
        .digits()
        .fold((0.0, 0.0, 0.0), |(all, v0, v1), (_, d)| match d.volume {
            0 => (all + d.adc, v0 + d.adc, v1),
            _ => (all + d.adc, v0, v1 + d.adc),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_event() {
        let scenario = EventScenario::new(11).vertices(2).unused_digits(3);
        let mut a = Event::default();
        let mut b = Event::default();
        scenario.build(&mut a).unwrap();
        scenario.build(&mut b).unwrap();
        assert_eq!(a.as_slice::<Digit>(), b.as_slice::<Digit>());
        assert_eq!(a.as_slice::<Track>(), b.as_slice::<Track>());
        assert_eq!(a.summary, b.summary);
    }

    #[test]
    fn counts_match_shape() {
        let scenario = EventScenario::new(3)
            .vertices(2)
            .tracks_per_vertex(3)
            .digits_per_track(4)
            .unused_digits(5)
            .simulated(true);
        let mut event = Event::default();
        let handles = scenario.build(&mut event).unwrap();
        assert_eq!(event.n_vertices(), 2);
        assert_eq!(event.n_tracks(), scenario.total_tracks());
        assert_eq!(event.n_digits(), scenario.total_digits());
        assert_eq!(event.n_mc_truth(), 6);
        assert_eq!(handles.unused_digits.len(), 5);
        assert_eq!(event.count_unused_digits(), 5);
        assert_eq!(event.summary.n_unused_digits, 5);
    }

    #[test]
    fn digits_are_attached_to_their_track() {
        let mut event = Event::default();
        let handles = EventScenario::new(5).build(&mut event).unwrap();
        for (i, &t) in handles.tracks.iter().enumerate() {
            let digits = event.track_digits(t).unwrap();
            assert_eq!(digits.len(), 20);
            assert!(digits.iter().all(|d| d.track_id == i as i16));
        }
    }
}
