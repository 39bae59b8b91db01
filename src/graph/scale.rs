//! Shared scale base.
//!
//! Chart bars have a bounded height, so large sums are divided down by a common
//! base. The thresholds are fixed so charts stay comparable with earlier renders.

use crate::domain::Bucket;

/// Largest per-bucket sum still drawn unscaled.
pub const UNSCALED_MAX: f64 = 75.0;
/// Largest per-bucket sum drawn with base 5.
pub const MEDIUM_MAX: f64 = 375.0;

/// Base for a given maximum per-bucket sum.
///
/// The maximum is truncated to a whole number first: `0..=75` -> 1, `76..=375` -> 5,
/// anything larger -> 10. Negative and NaN maxima map to 1.
pub fn scale_base(max_total: f64) -> u32 {
    let max = max_total.trunc();
    if max.is_nan() || max <= UNSCALED_MAX {
        1
    } else if max <= MEDIUM_MAX {
        5
    } else {
        10
    }
}

/// Replace every value with `floor(value / base)`. A base of 1 leaves values untouched.
pub fn rescale(buckets: &mut [Bucket], base: u32) {
    if base <= 1 {
        return;
    }
    let divisor = f64::from(base);
    for value in buckets.iter_mut().flat_map(|b| b.values.iter_mut()) {
        *value = (*value / divisor).floor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn thresholds_are_inclusive_upper_bounds() {
        assert_eq!(scale_base(0.0), 1);
        assert_eq!(scale_base(75.0), 1);
        assert_eq!(scale_base(75.9), 1);
        assert_eq!(scale_base(76.0), 5);
        assert_eq!(scale_base(375.0), 5);
        assert_eq!(scale_base(376.0), 10);
        assert_eq!(scale_base(10_000.0), 10);
    }

    #[test]
    fn base_is_monotonic() {
        let mut last = 0;
        for max in (0..1000).map(f64::from) {
            let base = scale_base(max);
            assert!(base >= last, "base dropped at {max}");
            last = base;
        }
    }

    #[test]
    fn degenerate_maxima_stay_unscaled() {
        assert_eq!(scale_base(-12.0), 1);
        assert_eq!(scale_base(f64::NAN), 1);
    }

    #[test]
    fn rescale_floors_instead_of_rounding() {
        let date = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let mut buckets = vec![Bucket::new(date, vec![9.0, 4.0, 400.0])];
        rescale(&mut buckets, 5);
        assert_eq!(buckets[0].values, vec![1.0, 0.0, 80.0]);
    }

    #[test]
    fn base_one_keeps_fractional_values() {
        let date = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let mut buckets = vec![Bucket::new(date, vec![2.5])];
        rescale(&mut buckets, 1);
        assert_eq!(buckets[0].values, vec![2.5]);
    }
}
