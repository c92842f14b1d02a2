//! Cap and collar areas, and the closed-form inverse
//!
//! Areas are measured on the unit manifold: the whole sphere has area 4π and
//! the whole circle has "area" (arc length) 2π. A cap of colatitude θ is the
//! set of points within angular distance θ of the north pole.

use std::f64::consts::PI;

use crate::config::Dimension;

/// Area of the cap from the pole (colatitude 0) down to `colatitude`
///
/// # Example
///
/// ```rust
/// use eq_sphere_partition::Dimension;
/// use eq_sphere_partition::partition::area::area_of_cap;
///
/// let full = area_of_cap(Dimension::Sphere, std::f64::consts::PI);
/// assert!((full - 4.0 * std::f64::consts::PI).abs() < 1e-12);
/// ```
#[inline]
pub fn area_of_cap(dimension: Dimension, colatitude: f64) -> f64 {
    match dimension {
        Dimension::Circle => 2.0 * colatitude,
        Dimension::Sphere => {
            let s = (colatitude / 2.0).sin();
            4.0 * PI * s * s
        }
    }
}

/// Area of the band between two colatitudes (`top <= bottom`)
#[inline]
pub fn area_of_collar(dimension: Dimension, top_colatitude: f64, bottom_colatitude: f64) -> f64 {
    area_of_cap(dimension, bottom_colatitude) - area_of_cap(dimension, top_colatitude)
}

/// Area each of `n` regions would have if the whole manifold were split evenly
#[inline]
pub fn area_of_ideal_region(dimension: Dimension, n: usize) -> f64 {
    area_of_ideal_region_between(dimension, n, 0.0, PI)
}

/// Area each of `n` regions would have if the band `[top, bottom]` were split evenly
#[inline]
pub fn area_of_ideal_region_between(
    dimension: Dimension,
    n: usize,
    top_colatitude: f64,
    bottom_colatitude: f64,
) -> f64 {
    area_of_collar(dimension, top_colatitude, bottom_colatitude) / n as f64
}

/// Colatitude of the cap with the given area (inverse of [`area_of_cap`])
///
/// For the sphere the `asin` argument is clamped to [0, 1], so an area that
/// rounding pushed just past 4π still maps to π.
#[inline]
pub fn colatitude_of_cap(dimension: Dimension, area: f64) -> f64 {
    match dimension {
        Dimension::Circle => area / 2.0,
        Dimension::Sphere => {
            let x = ((area / PI).max(0.0).sqrt() / 2.0).min(1.0);
            2.0 * x.asin()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cap_endpoints() {
        assert_eq!(area_of_cap(Dimension::Circle, 0.0), 0.0);
        assert_eq!(area_of_cap(Dimension::Sphere, 0.0), 0.0);
        assert_abs_diff_eq!(area_of_cap(Dimension::Circle, PI), 2.0 * PI);
        assert_abs_diff_eq!(area_of_cap(Dimension::Sphere, PI), 4.0 * PI, epsilon = 1e-12);
    }

    #[test]
    fn test_hemisphere_is_half() {
        assert_abs_diff_eq!(area_of_cap(Dimension::Sphere, PI / 2.0), 2.0 * PI, epsilon = 1e-12);
    }

    #[test]
    fn test_collar_monotonic_in_bottom() {
        for dimension in [Dimension::Circle, Dimension::Sphere] {
            let top = 0.3;
            let mut previous = 0.0;
            for step in 0..=100 {
                let bottom = top + (PI - top) * step as f64 / 100.0;
                let area = area_of_collar(dimension, top, bottom);
                assert!(area >= previous, "{:?}: {} < {}", dimension, area, previous);
                previous = area;
            }
        }
    }

    #[test]
    fn test_ideal_region_area() {
        assert_abs_diff_eq!(area_of_ideal_region(Dimension::Sphere, 4), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(area_of_ideal_region(Dimension::Circle, 2), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(
            area_of_ideal_region_between(Dimension::Sphere, 2, 0.0, PI / 2.0),
            PI,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_colatitude_inverts_area() {
        for dimension in [Dimension::Circle, Dimension::Sphere] {
            for step in 0..=50 {
                let colatitude = PI * step as f64 / 50.0;
                let area = area_of_cap(dimension, colatitude);
                assert_abs_diff_eq!(colatitude_of_cap(dimension, area), colatitude, epsilon = 1e-7);
            }
        }
    }

    #[test]
    fn test_colatitude_clamps_overshoot() {
        let angle = colatitude_of_cap(Dimension::Sphere, 4.0 * PI + 1e-9);
        assert_eq!(angle, PI);
        assert_eq!(colatitude_of_cap(Dimension::Sphere, 0.0), 0.0);
    }
}
