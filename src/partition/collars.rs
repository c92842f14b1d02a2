//! Collar planning: polar cap size, collar count and ideal region counts

use std::f64::consts::PI;

use super::area::{area_of_collar, area_of_ideal_region, colatitude_of_cap};
use crate::config::Dimension;

/// Colatitude of the north polar cap
///
/// One region covers everything (π) and two regions split at the equator
/// (π/2). Otherwise the cap is sized as exactly one ideal region.
pub fn polar_colatitude(dimension: Dimension, n: usize) -> f64 {
    match n {
        1 => PI,
        2 => PI / 2.0,
        _ => colatitude_of_cap(dimension, area_of_ideal_region(dimension, n)),
    }
}

/// Angular width a collar would need for its area to match one ideal region
///
/// Only used to choose how many collars to plan.
pub fn ideal_collar_angle(dimension: Dimension, n: usize) -> f64 {
    area_of_ideal_region(dimension, n).powf(1.0 / dimension.as_u32() as f64)
}

/// Number of collars between the two polar caps
pub fn number_of_collars(n: usize, polar_colatitude: f64, ideal_collar_angle: f64) -> usize {
    if n <= 2 || ideal_collar_angle <= 0.0 {
        return 0;
    }
    let fitting = ((PI - 2.0 * polar_colatitude) / ideal_collar_angle).round();
    // `as` saturates negatives to 0
    (fitting as usize).max(1)
}

/// Fractional region count for every collar, polar caps included
///
/// The band `[polar, π - polar]` is cut into `number_of_collars` equal-angle
/// collars. Each interior entry is that collar's area in units of the ideal
/// region area. Both ends hold exactly 1.
pub fn ideal_region_list(
    dimension: Dimension,
    n: usize,
    polar_colatitude: f64,
    number_of_collars: usize,
) -> Vec<f64> {
    let mut list = vec![0.0; number_of_collars + 2];
    list[0] = 1.0;
    if number_of_collars >= 1 {
        let fitting = (PI - 2.0 * polar_colatitude) / number_of_collars as f64;
        let ideal_area = area_of_ideal_region(dimension, n);
        for i in 0..number_of_collars {
            let top = polar_colatitude + i as f64 * fitting;
            let bottom = polar_colatitude + (i + 1) as f64 * fitting;
            list[i + 1] = area_of_collar(dimension, top, bottom) / ideal_area;
        }
    }
    list[number_of_collars + 1] = 1.0;
    list
}
