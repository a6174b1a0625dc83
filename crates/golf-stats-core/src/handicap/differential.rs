//! Scoring differentials

use crate::utils::round_to_tenth;

/// Slope rating of a course of standard difficulty
pub const STANDARD_SLOPE: f64 = 113.0;

/// Score normalized against course difficulty, one decimal.
///
/// `None` unless both ratings are known. Negative when the score beat the
/// course rating.
pub fn differential(score: u32, course_rating: Option<f64>, slope_rating: Option<f64>) -> Option<f64> {
    let course_rating = course_rating?;
    let slope_rating = slope_rating?;

    let raw = (STANDARD_SLOPE / slope_rating) * (f64::from(score) - course_rating);
    Some(round_to_tenth(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_slope() {
        assert_eq!(differential(85, Some(72.0), Some(113.0)), Some(13.0));
    }

    #[test]
    fn test_missing_ratings() {
        assert_eq!(differential(85, None, Some(113.0)), None);
        assert_eq!(differential(85, Some(72.0), None), None);
        assert_eq!(differential(85, None, None), None);
    }

    #[test]
    fn test_hard_course_shrinks_differential() {
        // 113 / 130 * 18.5 = 16.08
        assert_eq!(differential(90, Some(71.5), Some(130.0)), Some(16.1));
    }

    #[test]
    fn test_negative_differential() {
        // 113 / 120 * -3.2 = -3.013
        assert_eq!(differential(70, Some(73.2), Some(120.0)), Some(-3.0));
    }
}
