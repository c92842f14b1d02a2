//! Actual collar boundaries from rounded region counts

use std::f64::consts::PI;

use super::area::{area_of_ideal_region, colatitude_of_cap};
use crate::config::Dimension;

/// Bottom colatitude of every collar
///
/// Boundary `i` is the colatitude of the cap holding every region of collars
/// `0..=i`, so each collar's area is its integer region count times the ideal
/// region area. The last boundary is exactly π.
pub fn cap_colatitudes(
    dimension: Dimension,
    n: usize,
    polar_colatitude: f64,
    regions: &[usize],
) -> Vec<f64> {
    let mut colatitudes = vec![PI; regions.len()];
    let Some(number_of_collars) = regions.len().checked_sub(2) else {
        return colatitudes;
    };

    let ideal_area = area_of_ideal_region(dimension, n);
    let mut subtotal = 1usize;

    colatitudes[0] = polar_colatitude;
    for i in 0..number_of_collars {
        subtotal += regions[i + 1];
        colatitudes[i + 1] = colatitude_of_cap(dimension, subtotal as f64 * ideal_area);
    }
    colatitudes[number_of_collars + 1] = PI;

    colatitudes
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_two_caps() {
        let colatitudes = cap_colatitudes(Dimension::Sphere, 2, PI / 2.0, &[1, 1]);
        assert_eq!(colatitudes, vec![PI / 2.0, PI]);
    }

    #[test]
    fn test_boundaries_follow_rounded_counts() {
        // 1 + 2 + 1 regions: the single collar ends at the cap holding 3/4 of the sphere
        let colatitudes = cap_colatitudes(Dimension::Sphere, 4, PI / 3.0, &[1, 2, 1]);
        assert_eq!(colatitudes.len(), 3);
        assert_abs_diff_eq!(colatitudes[0], PI / 3.0);
        assert_abs_diff_eq!(colatitudes[1], 2.0 * PI / 3.0, epsilon = 1e-12);
        assert_eq!(colatitudes[2], PI);
    }

    #[test]
    fn test_last_boundary_forced_to_pi() {
        let colatitudes = cap_colatitudes(Dimension::Sphere, 12, 0.5, &[1, 5, 5, 1]);
        assert_eq!(*colatitudes.last().unwrap(), PI);
        assert!(colatitudes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_single_entry() {
        assert_eq!(cap_colatitudes(Dimension::Sphere, 1, PI, &[1]), vec![PI]);
    }
}
