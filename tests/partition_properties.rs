//! Property-based tests for equal-area partitions.
//!
//! Covers, for a wide range of region counts:
//! - Region counts add up to the request
//! - Collar boundaries are strictly increasing and end at π
//! - Polar caps hold exactly one region
//! - Collar areas equal their region count times the ideal area
//! - Emitted vertices are unit length and locate back to their region

use approx::assert_relative_eq;
use eq_sphere_partition::partition::area::{area_of_collar, area_of_cap};
use eq_sphere_partition::*;
use proptest::prelude::*;
use std::f64::consts::PI;

// =============================================================================
// FIXED REGION COUNTS
// =============================================================================

#[test]
fn sum_property_for_reference_counts() {
    for n in [1usize, 2, 3, 12, 100, 997] {
        let partition = generate_caps(Dimension::Sphere, n, 0.0).unwrap();
        assert_eq!(partition.total_regions(), n, "sum(regions) != {}", n);
        assert_eq!(partition.colatitudes().len(), partition.regions().len());
    }
}

#[test]
fn large_partition_is_consistent() {
    let partition = generate_caps(Dimension::Sphere, 20_000, 0.0).unwrap();
    assert_eq!(partition.total_regions(), 20_000);
    assert_eq!(emit_vertices(&partition).len(), 20_000);
}

#[test]
fn circle_five_regions() {
    let partition = generate_caps(Dimension::Circle, 5, 0.0).unwrap();
    let degrees: Vec<f64> = partition.colatitudes().iter().map(|c| c.to_degrees()).collect();
    for (actual, expected) in degrees.iter().zip([72.0, 144.0, 216.0, 288.0, 360.0]) {
        assert_relative_eq!(*actual, expected, epsilon = 1e-9);
    }
    assert_eq!(partition.regions(), &[1, 1, 1, 1, 1]);
}

#[test]
fn raw_dimension_is_validated() {
    assert_eq!(
        Dimension::try_from(3u32).unwrap_err(),
        PartitionError::InvalidDimension(3)
    );
    assert!(PartitionConfigBuilder::new().dimension_raw(0).is_err());
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    /// Property: every sphere partition satisfies the structural invariants
    #[test]
    fn prop_partition_invariants(n in 1usize..3000) {
        let partition = generate_caps(Dimension::Sphere, n, 0.0).unwrap();
        let colatitudes = partition.colatitudes();
        let regions = partition.regions();

        prop_assert_eq!(colatitudes.len(), regions.len());
        prop_assert_eq!(partition.total_regions(), n);
        prop_assert_eq!(*colatitudes.last().unwrap(), PI);
        prop_assert!(colatitudes.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(regions.iter().all(|&r| r >= 1));
        if n > 2 {
            prop_assert_eq!(regions[0], 1);
            prop_assert_eq!(*regions.last().unwrap(), 1);
        }
    }

    /// Property: each collar has the area of its regions
    #[test]
    fn prop_collars_are_equal_area(n in 3usize..2000) {
        let partition = generate_caps(Dimension::Sphere, n, 0.0).unwrap();
        let ideal = partition.ideal_region_area();
        for collar in partition.collars() {
            let area = area_of_collar(Dimension::Sphere, collar.top_colatitude, collar.bottom_colatitude);
            prop_assert!(
                (area - collar.region_count as f64 * ideal).abs() < 1e-8,
                "collar {} area {} vs {} regions of {}",
                collar.index, area, collar.region_count, ideal
            );
        }
    }

    /// Property: emitted vertices are unit vectors that locate back to their region
    #[test]
    fn prop_vertices_unit_and_locatable(n in 1usize..1500) {
        let partition = generate_caps(Dimension::Sphere, n, 0.0).unwrap();
        let vertices = emit_vertices(&partition);
        prop_assert_eq!(vertices.len(), partition.total_regions());
        for vertex in &vertices {
            prop_assert!((vertex.position.length() - 1.0).abs() < 1e-5);
            prop_assert_eq!(partition.locate(vertex.position), Some(vertex.region));
        }
    }

    /// Property: collar area never shrinks as the lower boundary moves south
    #[test]
    fn prop_collar_area_monotonic(top in 0.0..PI, a in 0.0..1.0f64, b in 0.0..1.0f64) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        for dimension in [Dimension::Circle, Dimension::Sphere] {
            let near = area_of_collar(dimension, top, top + (PI - top) * low);
            let far = area_of_collar(dimension, top, top + (PI - top) * high);
            prop_assert!(far >= near);
            prop_assert!(area_of_cap(dimension, top) >= 0.0);
        }
    }

    /// Property: generation is a pure function
    #[test]
    fn prop_generation_idempotent(n in 1usize..2000, circle in any::<bool>()) {
        let dimension = if circle { Dimension::Circle } else { Dimension::Sphere };
        let a = generate_caps(dimension, n, 0.0).unwrap();
        let b = generate_caps(dimension, n, 0.0).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Property: carry rounding never drifts more than half a unit
    #[test]
    fn prop_round_with_carry_bounded(values in prop::collection::vec(0.0..50.0f64, 0..100)) {
        let (rounded, carry) = round_with_carry(&values);
        prop_assert_eq!(rounded.len(), values.len());
        prop_assert!(carry.abs() <= 0.5 + 1e-9);
        let mut ideal = 0.0;
        let mut total = 0i64;
        for (value, r) in values.iter().zip(&rounded) {
            ideal += value;
            total += r;
            prop_assert!((ideal - total as f64).abs() <= 0.5 + 1e-9);
        }
    }
}
