//! Error-diffusion rounding of fractional region counts
//!
//! Each value is rounded after adding the error carried from the values
//! before it, so the running total never drifts more than half a unit from
//! the running ideal total. Same family as Bresenham's line rasterization.

use log::debug;

/// Round `values` to integers, carrying each rounding error into the next value
///
/// Returns the rounded values and the final carry (ideal total minus rounded
/// total). Halves round away from zero.
///
/// # Example
///
/// ```rust
/// use eq_sphere_partition::round_with_carry;
///
/// let (rounded, carry) = round_with_carry(&[0.5, 0.5, 0.5, 0.5]);
/// assert_eq!(rounded, vec![1, 0, 1, 0]);
/// assert_eq!(carry, 0.0);
/// ```
pub fn round_with_carry(values: &[f64]) -> (Vec<i64>, f64) {
    let mut carry = 0.0;
    let rounded = values
        .iter()
        .map(|&value| {
            let r = (value + carry).round();
            carry += value - r;
            r as i64
        })
        .collect();
    (rounded, carry)
}

/// Round an ideal region list so every collar holds at least one region and
/// the counts add up to exactly `n`
///
/// Carry rounding keeps the total within half a unit of the ideal sum, which
/// is `n` up to floating-point error. Any remaining difference is settled on
/// the largest interior collars, one region at a time.
pub fn round_ideal_region_list(n: usize, ideal_region_list: &[f64]) -> Vec<usize> {
    let (rounded, carry) = round_with_carry(ideal_region_list);
    let mut regions: Vec<i64> = rounded.into_iter().map(|r| r.max(1)).collect();

    let mut difference = n as i64 - regions.iter().sum::<i64>();
    if difference != 0 {
        debug!(
            "region rounding drifted by {} (carry {:.3e}), settling on interior collars",
            difference, carry
        );
    }

    let last = regions.len().saturating_sub(1);
    while difference != 0 {
        // Polar caps stay at one region when there are interior collars
        let candidates = if last >= 2 { 1..last } else { 0..regions.len() };
        let target = candidates
            .filter(|&i| difference > 0 || regions[i] > 1)
            .max_by_key(|&i| regions[i]);
        let Some(i) = target else { break };
        let step = difference.signum();
        regions[i] += step;
        difference -= step;
    }

    regions.into_iter().map(|r| r as usize).collect()
}
