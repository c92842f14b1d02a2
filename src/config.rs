//! Partition Configuration and Builder
//!
//! This module provides the input types for equal-area partitioning: the
//! closed [`Dimension`] enum, latitude/longitude bounds for the vertex
//! emitter, and a validating builder for [`PartitionConfig`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::f64::consts::PI;

use crate::error::{PartitionError, Result};

/// Manifold being partitioned
///
/// Selects which closed-form area and inverse-area formulas apply.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dimension {
    /// The unit circle (dim 1); "area" is arc length
    Circle,
    /// The surface of the unit 2-sphere (dim 2)
    #[default]
    Sphere,
}

impl Dimension {
    /// Numeric dimension (1 or 2)
    #[inline]
    pub fn as_u32(self) -> u32 {
        match self {
            Dimension::Circle => 1,
            Dimension::Sphere => 2,
        }
    }

    /// Total measure of the manifold: 2π for the circle, 4π for the sphere
    #[inline]
    pub fn total_area(self) -> f64 {
        match self {
            Dimension::Circle => 2.0 * PI,
            Dimension::Sphere => 4.0 * PI,
        }
    }
}

impl TryFrom<u32> for Dimension {
    type Error = PartitionError;

    fn try_from(dim: u32) -> Result<Self> {
        match dim {
            1 => Ok(Dimension::Circle),
            2 => Ok(Dimension::Sphere),
            other => Err(PartitionError::InvalidDimension(other)),
        }
    }
}

/// Latitude/longitude window (degrees) applied by the vertex emitter
///
/// Latitude runs from -90 (south pole) to 90 (north pole), longitude from
/// -180 to 180. Bounds are inclusive.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLonBounds {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl LatLonBounds {
    /// The whole sphere
    pub const FULL: LatLonBounds = LatLonBounds {
        min_latitude: -90.0,
        max_latitude: 90.0,
        min_longitude: -180.0,
        max_longitude: 180.0,
    };

    /// Create validated bounds
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if a value is out of range, not finite, or a
    /// minimum exceeds its maximum.
    pub fn new(
        min_latitude: f64,
        max_latitude: f64,
        min_longitude: f64,
        max_longitude: f64,
    ) -> Result<Self> {
        check_range("latitude", min_latitude, max_latitude, 90.0)?;
        check_range("longitude", min_longitude, max_longitude, 180.0)?;
        Ok(Self {
            min_latitude,
            max_latitude,
            min_longitude,
            max_longitude,
        })
    }

    /// Whether the bounds cover the whole sphere
    #[inline]
    pub fn is_full(&self) -> bool {
        *self == Self::FULL
    }

    /// Check whether a latitude/longitude pair (degrees) lies inside the bounds
    #[inline]
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.min_latitude
            && latitude <= self.max_latitude
            && longitude >= self.min_longitude
            && longitude <= self.max_longitude
    }
}

impl Default for LatLonBounds {
    fn default() -> Self {
        Self::FULL
    }
}

fn check_range(name: &str, min: f64, max: f64, limit: f64) -> Result<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(PartitionError::InvalidConfig(format!(
            "{} bounds must be finite (got {}..{})",
            name, min, max
        )));
    }
    if min < -limit || max > limit {
        return Err(PartitionError::InvalidConfig(format!(
            "{} bounds must lie within [-{}, {}] (got {}..{})",
            name, limit, limit, min, max
        )));
    }
    if min > max {
        return Err(PartitionError::InvalidConfig(format!(
            "minimum {} {} exceeds maximum {}",
            name, min, max
        )));
    }
    Ok(())
}

/// Configuration for an equal-area partition and its vertex emission
///
/// The same configuration always produces the identical partition and
/// vertices; nothing is cached between runs.
///
/// # Example
///
/// ```rust
/// use eq_sphere_partition::*;
///
/// let config = PartitionConfigBuilder::new()
///     .region_count(100)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let partition = Partition::from_config(&config).unwrap();
/// assert_eq!(partition.total_regions(), 100);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartitionConfig {
    /// Circle or sphere
    pub dimension: Dimension,

    /// Requested number of regions (N >= 1)
    pub region_count: usize,

    /// Northern colatitude cut-off (radians, 0..=π)
    ///
    /// Does not move the equal-area boundaries. The emitter skips regions
    /// whose centre lies north of it.
    pub min_polar_colatitude: f64,

    /// Latitude/longitude window for the emitter
    pub bounds: LatLonBounds,

    /// Seed for the per-collar azimuth twist
    ///
    /// `None` starts every collar at azimuth 0.
    pub collar_twist_seed: Option<u64>,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            dimension: Dimension::Sphere,
            region_count: 200,
            min_polar_colatitude: 0.0,
            bounds: LatLonBounds::FULL,
            collar_twist_seed: None,
        }
    }
}

/// Builder for creating PartitionConfig with validation
///
/// # Example
///
/// ```rust
/// use eq_sphere_partition::*;
///
/// let config = PartitionConfigBuilder::new()
///     .dimension(Dimension::Sphere)
///     .region_count(500)
///     .unwrap()
///     .max_latitude_cutoff(60.0)
///     .unwrap()
///     .collar_twist_seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.region_count, 500);
/// ```
#[derive(Debug, Clone)]
pub struct PartitionConfigBuilder {
    config: PartitionConfig,
}

impl PartitionConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - dimension: Sphere
    /// - region_count: 200
    /// - min_polar_colatitude: 0 (no cut-off)
    /// - bounds: whole sphere
    /// - collar_twist_seed: None
    pub fn new() -> Self {
        Self {
            config: PartitionConfig::default(),
        }
    }

    /// Set the dimension
    pub fn dimension(mut self, dimension: Dimension) -> Self {
        self.config.dimension = dimension;
        self
    }

    /// Set the dimension from a raw integer
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` unless `dim` is 1 or 2
    pub fn dimension_raw(mut self, dim: u32) -> Result<Self> {
        self.config.dimension = Dimension::try_from(dim)?;
        Ok(self)
    }

    /// Set the requested number of regions
    ///
    /// # Errors
    ///
    /// Returns `InvalidRegionCount` if `count` is zero
    pub fn region_count(mut self, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(PartitionError::InvalidRegionCount(count));
        }
        self.config.region_count = count;
        Ok(self)
    }

    /// Set the northern colatitude cut-off in radians
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` unless `colatitude` is within [0, π]
    pub fn min_polar_colatitude(mut self, colatitude: f64) -> Result<Self> {
        validate_min_polar_colatitude(colatitude)?;
        self.config.min_polar_colatitude = colatitude;
        Ok(self)
    }

    /// Set the northern cut-off from a maximum latitude in degrees
    ///
    /// Equivalent to `min_polar_colatitude(π/2 - latitude.to_radians())`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` unless `latitude` is within [-90, 90]
    pub fn max_latitude_cutoff(self, latitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(PartitionError::InvalidConfig(format!(
                "latitude cut-off must be within [-90, 90] (got {})",
                latitude
            )));
        }
        let colatitude = (PI / 2.0 - latitude.to_radians()).clamp(0.0, PI);
        self.min_polar_colatitude(colatitude)
    }

    /// Set the emitter's latitude/longitude window
    pub fn bounds(mut self, bounds: LatLonBounds) -> Self {
        self.config.bounds = bounds;
        self
    }

    /// Enable a deterministic per-collar azimuth twist
    pub fn collar_twist_seed(mut self, seed: u64) -> Self {
        self.config.collar_twist_seed = Some(seed);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<PartitionConfig> {
        Ok(self.config)
    }
}

impl Default for PartitionConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn validate_min_polar_colatitude(colatitude: f64) -> Result<()> {
    if !colatitude.is_finite() || !(0.0..=PI).contains(&colatitude) {
        return Err(PartitionError::InvalidConfig(format!(
            "minimum polar colatitude must be within [0, π] (got {})",
            colatitude
        )));
    }
    Ok(())
}
