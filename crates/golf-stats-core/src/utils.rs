//! Utility functions shared across modules.

/// Round a value to one decimal place, with halves rounding toward positive
/// infinity.
///
/// `f64::round` rounds halves away from zero, which would move negative
/// differentials such as `-2.45` down to `-2.5`. Stored differentials and
/// indexes use half-up rounding so `-2.45` becomes `-2.4`.
///
/// # Examples
///
/// ```
/// use golf_stats_core::utils::round_to_tenth;
///
/// assert_eq!(round_to_tenth(13.04), 13.0);
/// assert_eq!(round_to_tenth(66.666), 66.7);
/// assert_eq!(round_to_tenth(-0.25), -0.2);
/// ```
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Percentage of `part` in `whole`, rounded to one decimal. Zero when `whole`
/// is zero.
pub fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round_to_tenth(f64::from(part) * 100.0 / f64::from(whole))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(0.0), 0.0);
        assert_eq!(round_to_tenth(12.34), 12.3);
        assert_eq!(round_to_tenth(12.36), 12.4);
        assert_eq!(round_to_tenth(-3.0), -3.0);

        // Negative halves round up, not away from zero
        assert_eq!(round_to_tenth(-0.25), -0.2);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(1, 3), 33.3);
        assert_eq!(percentage(2, 3), 66.7);
        assert_eq!(percentage(9, 9), 100.0);
    }
}
