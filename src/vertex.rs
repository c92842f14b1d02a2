//! Sample points from a partition
//!
//! Each region is represented by one unit direction at its collar's
//! mid-colatitude, spaced evenly in azimuth within the collar. Colatitude is
//! measured from the north pole at +Y. The two halves of a circle split in
//! two sit at the poles they are centred on.
//!
//! ```text
//! position = (sin θ · sin φ, cos θ, sin θ · cos φ)
//! ```

use std::f64::consts::{PI, TAU};

use glam::DVec3;
use log::debug;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{Dimension, LatLonBounds, PartitionConfig};
use crate::partition::Partition;

/// A unit direction representing one region of a partition
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Index of the region in partition order
    pub region: usize,
    /// Unit direction from the sphere centre
    pub position: DVec3,
}

impl Vertex {
    /// Latitude in degrees (90 at the north pole)
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.position.y.clamp(-1.0, 1.0).asin().to_degrees()
    }

    /// Longitude in degrees, in (-180, 180]
    #[inline]
    pub fn longitude(&self) -> f64 {
        let longitude = self.position.x.atan2(self.position.z).to_degrees();
        // atan2 gives -180 for x = -0.0 behind the meridian
        if longitude <= -180.0 {
            longitude + 360.0
        } else {
            longitude
        }
    }

    /// Angle from the north pole in radians
    #[inline]
    pub fn colatitude(&self) -> f64 {
        self.position.y.clamp(-1.0, 1.0).acos()
    }
}

/// Emit one vertex for every region of the partition
///
/// No filtering is applied; the result has `partition.total_regions()`
/// entries.
///
/// # Example
///
/// ```rust
/// use eq_sphere_partition::*;
///
/// let partition = Partition::generate(Dimension::Sphere, 100, 0.0).unwrap();
/// let vertices = emit_vertices(&partition);
///
/// assert_eq!(vertices.len(), 100);
/// assert!(vertices.iter().all(|v| (v.position.length() - 1.0).abs() < 1e-9));
/// ```
pub fn emit_vertices(partition: &Partition) -> Vec<Vertex> {
    VertexEmitter::default().emit_all(partition)
}

/// Configurable vertex emitter
///
/// Applies the partition's northern colatitude cut-off and a
/// latitude/longitude window, and can twist each collar's start azimuth by a
/// seeded random amount to break up the meridian at φ = 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct VertexEmitter {
    bounds: LatLonBounds,
    collar_twist_seed: Option<u64>,
}

impl VertexEmitter {
    /// Create an emitter from the emission settings of a configuration
    pub fn new(config: &PartitionConfig) -> Self {
        Self {
            bounds: config.bounds,
            collar_twist_seed: config.collar_twist_seed,
        }
    }

    /// Restrict emission to a latitude/longitude window
    pub fn with_bounds(mut self, bounds: LatLonBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Twist each collar by a deterministic random fraction of its spacing
    pub fn with_collar_twist(mut self, seed: u64) -> Self {
        self.collar_twist_seed = Some(seed);
        self
    }

    /// Emit the vertices that pass the cut-off and bounds
    ///
    /// Rejected regions are skipped, not zeroed, so the result may be
    /// shorter than the region count. Each vertex keeps its region index.
    pub fn emit(&self, partition: &Partition) -> Vec<Vertex> {
        let cutoff = partition.min_polar_colatitude();
        let vertices: Vec<Vertex> = self
            .candidates(partition)
            .filter(|v| v.colatitude() >= cutoff)
            .filter(|v| self.bounds.is_full() || self.bounds.contains(v.latitude(), v.longitude()))
            .collect();

        debug!(
            "emitted {} of {} vertices (cut-off colatitude {:.4})",
            vertices.len(),
            partition.total_regions(),
            cutoff
        );
        vertices
    }

    /// Emit every region without filtering
    pub fn emit_all(&self, partition: &Partition) -> Vec<Vertex> {
        self.candidates(partition).collect()
    }

    fn candidates<'a>(&self, partition: &'a Partition) -> impl Iterator<Item = Vertex> + 'a {
        let twists = self.collar_twists(partition);
        let arc_layout = partition.is_arc_layout();
        let circle = partition.dimension() == Dimension::Circle;

        partition
            .collars()
            .zip(twists)
            .flat_map(move |(collar, twist)| {
                // Circle caps (N <= 2) are centred on the poles they hang from
                let theta = match (circle, arc_layout, collar.index) {
                    (true, false, 0) => 0.0,
                    (true, false, _) => PI,
                    _ => collar.mid_colatitude(),
                };
                let (sin_theta, cos_theta) = theta.sin_cos();
                let n = collar.region_count;
                collar.regions().enumerate().map(move |(k, region)| {
                    let phi = if circle {
                        0.0
                    } else {
                        (k as f64 + twist) * TAU / n as f64
                    };
                    let (sin_phi, cos_phi) = phi.sin_cos();
                    Vertex {
                        region,
                        position: DVec3::new(sin_theta * sin_phi, cos_theta, sin_theta * cos_phi),
                    }
                })
            })
    }

    /// Fraction of a region's spacing to offset each collar by
    fn collar_twists(&self, partition: &Partition) -> Vec<f64> {
        match self.collar_twist_seed {
            Some(seed) => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                (0..partition.collar_count())
                    .map(|_| rng.gen_range(0.0..1.0))
                    .collect()
            }
            None => vec![0.0; partition.collar_count()],
        }
    }
}
