//! Pure statistical helpers over cohort metric values
//!
//! All helpers treat NaN as "never qualifies": NaN values in the cohort are
//! ignored and a NaN player value fails every membership test.

/// Player value equals the cohort maximum AND is strictly positive.
/// The positivity gate stops an all-zero cohort from awarding a
/// maximum-based title to everyone tied at zero.
pub fn is_extreme_max(value: f64, values: &[f64]) -> bool {
    if value.is_nan() || value <= 0.0 {
        return false;
    }
    let max = values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(f64::NEG_INFINITY, f64::max);
    max.is_finite() && value == max
}

/// Player value equals the cohort minimum
pub fn is_extreme_min(value: f64, values: &[f64]) -> bool {
    if value.is_nan() {
        return false;
    }
    let min = values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(f64::INFINITY, f64::min);
    min.is_finite() && value == min
}

/// Membership in the best `n` of the cohort. Ties are admitted by value:
/// fewer than `n` cohort values strictly exceed the player's.
pub fn is_top_n(value: f64, values: &[f64], n: usize) -> bool {
    if n == 0 || value.is_nan() || values.is_empty() {
        return false;
    }
    values.iter().filter(|v| !v.is_nan() && **v > value).count() < n
}

/// Membership in the worst `n` of the cohort, mirror of [`is_top_n`]
pub fn is_bottom_n(value: f64, values: &[f64], n: usize) -> bool {
    if n == 0 || value.is_nan() || values.is_empty() {
        return false;
    }
    values.iter().filter(|v| !v.is_nan() && **v < value).count() < n
}

/// Normalized rank of `value` within the cohort: 0 = worst, 100 = best,
/// computed as `(position - 1) / (N - 1) * 100` with position 1 = lowest
/// value. Tied values share the lower position. Cohorts of size <= 1
/// return 50 so a lone player never lands in an extreme band.
pub fn percentile_rank(value: f64, values: &[f64]) -> f64 {
    let clean: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if clean.len() <= 1 || value.is_nan() {
        return 50.0;
    }
    let below = clean.iter().filter(|v| **v < value).count();
    (below as f64 / (clean.len() - 1) as f64 * 100.0).min(100.0)
}

/// Percentile rank within `band` points of the top (band 10 = top decile)
pub fn is_top_percentile(value: f64, values: &[f64], band: f64) -> bool {
    percentile_rank(value, values) >= 100.0 - band
}

/// Percentile rank within `band` points of the bottom
pub fn is_bottom_percentile(value: f64, values: &[f64], band: f64) -> bool {
    percentile_rank(value, values) <= band
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extreme_max_requires_positive_value() {
        // An all-zero cohort yields no extreme-max for anyone
        let zeros = [0.0, 0.0, 0.0];
        assert!(!is_extreme_max(0.0, &zeros));

        let values = [50.0, 80.0, 20.0];
        assert!(is_extreme_max(80.0, &values));
        assert!(!is_extreme_max(50.0, &values));
    }

    #[test]
    fn test_extreme_max_admits_ties() {
        // Equality to max, not uniqueness of rank, gates qualification
        let values = [50.0, 80.0, 80.0, 20.0, 10.0];
        assert!(is_extreme_max(80.0, &values));
    }

    #[test]
    fn test_extreme_min() {
        let values = [50.0, 80.0, 20.0];
        assert!(is_extreme_min(20.0, &values));
        assert!(!is_extreme_min(50.0, &values));
        // Minimum tied at zero still qualifies
        assert!(is_extreme_min(0.0, &[0.0, 0.0, 3.0]));
    }

    #[test]
    fn test_top_n_admits_ties_by_value() {
        let values = [50.0, 80.0, 80.0, 20.0, 10.0];
        assert!(is_top_n(80.0, &values, 3));
        assert!(is_top_n(50.0, &values, 3));
        assert!(!is_top_n(20.0, &values, 3));
        assert!(!is_top_n(80.0, &values, 0));
    }

    #[test]
    fn test_bottom_n() {
        let values = [50.0, 80.0, 20.0, 10.0];
        assert!(is_bottom_n(10.0, &values, 2));
        assert!(is_bottom_n(20.0, &values, 2));
        assert!(!is_bottom_n(50.0, &values, 2));
    }

    #[test]
    fn test_percentile_rank_endpoints() {
        let values = [10.0, 20.0, 30.0, 40.0, 50.0];
        assert_eq!(percentile_rank(50.0, &values), 100.0);
        assert_eq!(percentile_rank(10.0, &values), 0.0);
        assert_eq!(percentile_rank(30.0, &values), 50.0);
    }

    #[test]
    fn test_percentile_rank_degenerate_cohort() {
        assert_eq!(percentile_rank(7.0, &[7.0]), 50.0);
        assert_eq!(percentile_rank(7.0, &[]), 50.0);
    }

    #[test]
    fn test_percentile_bands() {
        let values: Vec<f64> = (1..=11).map(|v| v as f64).collect();
        assert!(is_top_percentile(11.0, &values, 10.0));
        assert!(is_top_percentile(10.0, &values, 10.0));
        assert!(!is_top_percentile(9.0, &values, 10.0));
        assert!(is_bottom_percentile(1.0, &values, 10.0));
        assert!(is_bottom_percentile(2.0, &values, 10.0));
        assert!(!is_bottom_percentile(3.0, &values, 10.0));
    }

    #[test]
    fn test_nan_never_qualifies() {
        let values = [10.0, f64::NAN, 30.0];
        assert!(!is_extreme_max(f64::NAN, &values));
        assert!(is_extreme_max(30.0, &values));
        assert!(!is_top_n(f64::NAN, &values, 3));
        assert_eq!(percentile_rank(f64::NAN, &values), 50.0);
    }
}
