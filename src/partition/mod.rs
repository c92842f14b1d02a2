//! Recursive zonal equal-area partitioning
//!
//! Splits the sphere into `N` regions of equal area arranged in collars
//! ordered from the north pole (colatitude 0) to the south pole (π):
//!
//! 1. Size the polar caps as one ideal region each ([`polar_colatitude`])
//! 2. Choose how many equal-angle collars fit between them
//! 3. Work out the fractional number of regions each collar deserves
//! 4. Round those counts with carried error so they add up to `N`
//! 5. Move every boundary so each collar's area matches its integer count
//!
//! One and two regions are handled up front: the general formulas degenerate there.
//! The circle is cut directly into `N` equal arcs.

pub mod area;
mod collars;
mod colatitudes;
mod rounding;

pub use collars::{ideal_collar_angle, ideal_region_list, number_of_collars, polar_colatitude};
pub use colatitudes::cap_colatitudes;
pub use rounding::{round_ideal_region_list, round_with_carry};

use std::f64::consts::{PI, TAU};

use glam::DVec3;
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{validate_min_polar_colatitude, Dimension, PartitionConfig};
use crate::error::{PartitionError, Result};

/// One latitudinal band of a [`Partition`]
///
/// Collars are derived views; the partition itself only stores boundaries
/// and counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collar {
    /// Position of this collar, counted from the north pole
    pub index: usize,
    /// Colatitude of the upper boundary (0 for the first collar)
    pub top_colatitude: f64,
    /// Colatitude of the lower boundary
    pub bottom_colatitude: f64,
    /// Number of regions in this collar (always >= 1)
    pub region_count: usize,
    /// Index of this collar's first region in the whole partition
    pub first_region: usize,
}

impl Collar {
    /// Colatitude halfway between the two boundaries
    #[inline]
    pub fn mid_colatitude(&self) -> f64 {
        (self.top_colatitude + self.bottom_colatitude) / 2.0
    }

    /// Range of region indices belonging to this collar
    #[inline]
    pub fn regions(&self) -> std::ops::Range<usize> {
        self.first_region..self.first_region + self.region_count
    }
}

/// An equal-area partition of the circle or sphere
///
/// Immutable once generated. `colatitudes[i]` is the bottom boundary of
/// collar `i` and `regions[i]` its region count.
///
/// # Example
///
/// ```rust
/// use eq_sphere_partition::*;
///
/// let partition = Partition::generate(Dimension::Sphere, 12, 0.0).unwrap();
///
/// assert_eq!(partition.total_regions(), 12);
/// assert_eq!(partition.regions()[0], 1);
/// assert_eq!(*partition.colatitudes().last().unwrap(), std::f64::consts::PI);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PartitionParts"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    dimension: Dimension,
    region_count: usize,
    min_polar_colatitude: f64,
    colatitudes: Vec<f64>,
    regions: Vec<usize>,
}

/// Unchecked field layout of a serialized [`Partition`]
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct PartitionParts {
    dimension: Dimension,
    region_count: usize,
    min_polar_colatitude: f64,
    colatitudes: Vec<f64>,
    regions: Vec<usize>,
}

#[cfg(feature = "serde")]
impl TryFrom<PartitionParts> for Partition {
    type Error = PartitionError;

    fn try_from(parts: PartitionParts) -> Result<Self> {
        Partition::from_parts(
            parts.dimension,
            parts.region_count,
            parts.min_polar_colatitude,
            parts.colatitudes,
            parts.regions,
        )
    }
}

/// Partition the manifold into `n` equal-area regions
///
/// `min_polar_colatitude` (radians) is recorded as the northern cut-off for
/// the vertex emitter. The region boundaries do not depend on it.
///
/// # Errors
///
/// - `InvalidRegionCount` if `n` is zero
/// - `InvalidConfig` if `min_polar_colatitude` is not within [0, π]
pub fn generate_caps(dimension: Dimension, n: usize, min_polar_colatitude: f64) -> Result<Partition> {
    if n == 0 {
        return Err(PartitionError::InvalidRegionCount(n));
    }
    validate_min_polar_colatitude(min_polar_colatitude)?;

    let (colatitudes, regions) = match (dimension, n) {
        // A cap of colatitude π is the whole manifold in either dimension
        (_, 1) => (vec![PI], vec![1]),
        (_, 2) => (vec![PI / 2.0, PI], vec![1, 1]),
        (Dimension::Circle, _) => {
            let colatitudes = (1..=n).map(|i| i as f64 * TAU / n as f64).collect();
            (colatitudes, vec![1; n])
        }
        (Dimension::Sphere, _) => {
            let polar = polar_colatitude(dimension, n);
            let angle = ideal_collar_angle(dimension, n);
            let collars = number_of_collars(n, polar, angle);
            debug!(
                "partitioning {} regions: polar colatitude {:.6}, ideal collar angle {:.6}, {} collars",
                n, polar, angle, collars
            );

            let ideal = ideal_region_list(dimension, n, polar, collars);
            let regions = round_ideal_region_list(n, &ideal);
            let colatitudes = cap_colatitudes(dimension, n, polar, &regions);
            (colatitudes, regions)
        }
    };

    Ok(Partition {
        dimension,
        region_count: n,
        min_polar_colatitude,
        colatitudes,
        regions,
    })
}

impl Partition {
    /// Generate a partition; same as [`generate_caps`]
    pub fn generate(dimension: Dimension, n: usize, min_polar_colatitude: f64) -> Result<Self> {
        generate_caps(dimension, n, min_polar_colatitude)
    }

    /// Generate the partition described by a configuration
    pub fn from_config(config: &PartitionConfig) -> Result<Self> {
        generate_caps(config.dimension, config.region_count, config.min_polar_colatitude)
    }

    /// Rebuild a partition from stored boundaries and counts
    ///
    /// # Errors
    ///
    /// Returns `InvalidRegionCount` if `region_count` is zero, and
    /// `InvalidConfig` unless both lists are non-empty and equally long,
    /// every collar holds at least one region, the counts add up to
    /// `region_count`, and the boundaries are finite, positive and strictly
    /// increasing up to at most 2π.
    pub fn from_parts(
        dimension: Dimension,
        region_count: usize,
        min_polar_colatitude: f64,
        colatitudes: Vec<f64>,
        regions: Vec<usize>,
    ) -> Result<Self> {
        if region_count == 0 {
            return Err(PartitionError::InvalidRegionCount(region_count));
        }
        validate_min_polar_colatitude(min_polar_colatitude)?;

        if regions.is_empty() || colatitudes.len() != regions.len() {
            return Err(PartitionError::InvalidConfig(format!(
                "partition needs matching non-empty boundary and count lists (got {} and {})",
                colatitudes.len(),
                regions.len()
            )));
        }
        if regions.contains(&0) {
            return Err(PartitionError::InvalidConfig(
                "every collar must hold at least one region".to_string(),
            ));
        }
        let total: usize = regions.iter().sum();
        if total != region_count {
            return Err(PartitionError::InvalidConfig(format!(
                "collar counts add up to {} instead of {}",
                total, region_count
            )));
        }
        let increasing = colatitudes.iter().all(|c| c.is_finite())
            && colatitudes[0] > 0.0
            && colatitudes.windows(2).all(|w| w[0] < w[1])
            && colatitudes[colatitudes.len() - 1] <= TAU + 1e-9;
        if !increasing {
            return Err(PartitionError::InvalidConfig(
                "collar boundaries must be finite and strictly increasing within (0, 2π]"
                    .to_string(),
            ));
        }

        Ok(Self {
            dimension,
            region_count,
            min_polar_colatitude,
            colatitudes,
            regions,
        })
    }

    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Requested number of regions
    #[inline]
    pub fn region_count(&self) -> usize {
        self.region_count
    }

    #[inline]
    pub fn min_polar_colatitude(&self) -> f64 {
        self.min_polar_colatitude
    }

    /// Bottom boundary of every collar
    ///
    /// For the sphere the last entry is π. For circle arcs (N >= 3) the
    /// boundaries are angles around the circle ending at 2π.
    #[inline]
    pub fn colatitudes(&self) -> &[f64] {
        &self.colatitudes
    }

    /// Region count of every collar
    #[inline]
    pub fn regions(&self) -> &[usize] {
        &self.regions
    }

    /// Number of collars, polar caps included
    #[inline]
    pub fn collar_count(&self) -> usize {
        self.regions.len()
    }

    /// Sum of all collar region counts
    #[inline]
    pub fn total_regions(&self) -> usize {
        self.regions.iter().sum()
    }

    /// Area of a single region
    #[inline]
    pub fn ideal_region_area(&self) -> f64 {
        area::area_of_ideal_region(self.dimension, self.region_count)
    }

    /// Consume the partition, returning `(colatitudes, regions)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<usize>) {
        (self.colatitudes, self.regions)
    }

    /// Iterate over the collars from north to south
    pub fn collars(&self) -> impl Iterator<Item = Collar> + '_ {
        let mut first_region = 0;
        self.colatitudes
            .iter()
            .zip(&self.regions)
            .enumerate()
            .map(move |(index, (&bottom, &region_count))| {
                let top = if index == 0 { 0.0 } else { self.colatitudes[index - 1] };
                let collar = Collar {
                    index,
                    top_colatitude: top,
                    bottom_colatitude: bottom,
                    region_count,
                    first_region,
                };
                first_region += region_count;
                collar
            })
    }

    /// Boundaries are angles around a full circle rather than cap colatitudes
    #[inline]
    pub(crate) fn is_arc_layout(&self) -> bool {
        self.dimension == Dimension::Circle && self.region_count > 2
    }

    /// Find the region whose sector contains `direction`
    ///
    /// Sectors are centred on the azimuths the emitter uses (without twist),
    /// so `locate(vertex.position) == Some(vertex.region)` for every vertex
    /// from [`crate::emit_vertices`]. Directions are measured with the north
    /// pole at +Y. Returns `None` for a zero or non-finite direction.
    pub fn locate(&self, direction: DVec3) -> Option<usize> {
        let direction = direction.try_normalize()?;

        if self.is_arc_layout() {
            // Arc vertices lie in the y-z plane at angle atan2(z, y) from +Y
            let angle = direction.z.atan2(direction.y).rem_euclid(TAU);
            let index = self.colatitudes.partition_point(|&c| c < angle);
            return Some(index.min(self.regions.len().checked_sub(1)?));
        }

        let colatitude = direction.y.clamp(-1.0, 1.0).acos();
        let collar_index = self
            .colatitudes
            .partition_point(|&c| c < colatitude)
            .min(self.regions.len().checked_sub(1)?);
        let collar = self.collars().nth(collar_index)?;

        let azimuth = direction.x.atan2(direction.z).rem_euclid(TAU);
        let n = collar.region_count;
        if n == 0 {
            return None;
        }
        let sector = (azimuth * n as f64 / TAU).round() as usize % n;
        Some(collar.first_region + sector)
    }
}
