//! Reconstructed interaction points.

use niffte_core::{EntityKind, Vec3};
use niffte_pool::{Entity, RefList};

use crate::track::Track;

/// One reconstructed vertex and the tracks incident on it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vertex {
    /// Average vertex location.
    pub average: Vec3,
    /// Minimized vertex location.
    pub minimized: Vec3,
    /// Minimized vertex location in volume 0.
    pub minimized_vol0: Vec3,
    /// Minimized vertex location in volume 1.
    pub minimized_vol1: Vec3,
    /// Offset from the target in volume 0.
    pub offset_vol0: f64,
    /// Offset from the target in volume 1.
    pub offset_vol1: f64,
    /// Whether the minimized vertex passed its quality check.
    pub valid_minimized: bool,
    tracks: RefList<Track>,
}

impl Vertex {
    /// Number of referenced tracks.
    pub fn n_ref_tracks(&self) -> usize {
        self.tracks.count()
    }

    /// Tracks connected to this vertex.
    pub fn tracks(&self) -> &RefList<Track> {
        &self.tracks
    }

    /// Mutable track list.
    ///
    /// Prefer [`Event::attach_track`](crate::Event::attach_track).
    pub fn tracks_mut(&mut self) -> &mut RefList<Track> {
        &mut self.tracks
    }
}

impl Entity for Vertex {
    const KIND: EntityKind = EntityKind::Vertex;

    fn recycle(&mut self) {
        let mut tracks = std::mem::take(&mut self.tracks);
        tracks.clear();
        *self = Self {
            tracks,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recycle_restores_defaults() {
        let mut v = Vertex {
            average: Vec3::new(0.1, 0.2, 0.3),
            offset_vol1: -2.5,
            valid_minimized: true,
            ..Vertex::default()
        };
        v.recycle();
        assert_eq!(v, Vertex::default());
        assert_eq!(v.n_ref_tracks(), 0);
    }
}
