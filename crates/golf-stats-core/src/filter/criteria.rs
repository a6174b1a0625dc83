//! Round filter criteria

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::round::RoundRecord;

/// Criteria for picking rounds out of a player's history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundFilter {
    /// Only rounds played on or after this date
    pub after: Option<NaiveDate>,
    /// Only rounds played on or before this date
    pub before: Option<NaiveDate>,
    /// Course name (case-insensitive substring match)
    pub course: Option<String>,
    /// Only rounds of exactly this many holes
    pub holes: Option<u32>,
}

impl RoundFilter {
    /// Create a new empty filter (matches all rounds)
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no filters are set
    pub fn is_empty(&self) -> bool {
        self.after.is_none() && self.before.is_none() && self.course.is_none() && self.holes.is_none()
    }

    /// Set the earliest date (inclusive)
    pub fn with_after(mut self, date: NaiveDate) -> Self {
        self.after = Some(date);
        self
    }

    /// Set the latest date (inclusive)
    pub fn with_before(mut self, date: NaiveDate) -> Self {
        self.before = Some(date);
        self
    }

    /// Set both ends of the date range
    pub fn with_date_range(mut self, after: NaiveDate, before: NaiveDate) -> Self {
        self.after = Some(after);
        self.before = Some(before);
        self
    }

    /// Set course name filter
    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course = Some(course.into());
        self
    }

    /// Set hole count filter
    pub fn with_holes(mut self, holes: u32) -> Self {
        self.holes = Some(holes);
        self
    }

    /// Check if a round matches this filter
    pub fn matches(&self, round: &RoundRecord) -> bool {
        if let Some(after) = self.after {
            if round.played_on < after {
                return false;
            }
        }

        if let Some(before) = self.before {
            if round.played_on > before {
                return false;
            }
        }

        if let Some(ref course) = self.course {
            if !course.is_empty()
                && !round.course.to_lowercase().contains(&course.to_lowercase())
            {
                return false;
            }
        }

        if let Some(holes) = self.holes {
            if round.hole_count() != holes {
                return false;
            }
        }

        true
    }

    /// Apply the filter, returning references to matching rounds
    pub fn apply<'a>(&self, rounds: &'a [RoundRecord]) -> Vec<&'a RoundRecord> {
        rounds.iter().filter(|r| self.matches(r)).collect()
    }

    /// Human-readable description of the active filters
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();

        match (self.after, self.before) {
            (Some(after), Some(before)) => parts.push(format!("{} to {}", after, before)),
            (Some(after), None) => parts.push(format!("from {}", after)),
            (None, Some(before)) => parts.push(format!("until {}", before)),
            (None, None) => {}
        }

        if let Some(ref course) = self.course {
            if !course.is_empty() {
                parts.push(format!("course:\"{}\"", course));
            }
        }

        if let Some(holes) = self.holes {
            parts.push(format!("{} holes", holes));
        }

        if parts.is_empty() {
            "No filters".to_string()
        } else {
            parts.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hole::HoleRecord;

    fn day(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    fn make_round(date: NaiveDate, course: &str) -> RoundRecord {
        RoundRecord::from_totals(date, course, 85, 72)
    }

    #[test]
    fn test_empty_filter() {
        let filter = RoundFilter::new();
        assert!(filter.is_empty());
        assert!(filter.matches(&make_round(day(1, 1), "Anywhere")));
    }

    #[test]
    fn test_date_filter_is_inclusive() {
        let filter = RoundFilter::new().with_date_range(day(3, 1), day(3, 31));

        assert!(filter.matches(&make_round(day(3, 1), "Course")));
        assert!(filter.matches(&make_round(day(3, 31), "Course")));
        assert!(!filter.matches(&make_round(day(2, 29), "Course")));
        assert!(!filter.matches(&make_round(day(4, 1), "Course")));
    }

    #[test]
    fn test_course_filter() {
        let filter = RoundFilter::new().with_course("pine");

        assert!(filter.matches(&make_round(day(5, 1), "Pine Valley")));
        assert!(filter.matches(&make_round(day(5, 1), "Whispering PINES")));
        assert!(!filter.matches(&make_round(day(5, 1), "Oak Hollow")));
    }

    #[test]
    fn test_holes_filter() {
        let filter = RoundFilter::new().with_holes(9);
        let nine = RoundRecord::new(
            day(5, 1),
            "Pine Valley",
            (1..=9).map(|n| HoleRecord::new(n, 4, 4, 2)).collect(),
        );
        let eighteen = make_round(day(5, 1), "Pine Valley");

        assert!(filter.matches(&nine));
        assert!(!filter.matches(&eighteen));
    }

    #[test]
    fn test_apply_filter() {
        let rounds = vec![
            make_round(day(1, 10), "Pine Valley"),
            make_round(day(2, 10), "Oak Hollow"),
            make_round(day(3, 10), "Pine Valley"),
        ];
        let filter = RoundFilter::new().with_course("Pine").with_after(day(2, 1));

        let filtered = filter.apply(&rounds);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].played_on, day(3, 10));
    }

    #[test]
    fn test_describe() {
        assert_eq!(RoundFilter::new().describe(), "No filters");

        let filter = RoundFilter::new()
            .with_date_range(day(1, 1), day(6, 30))
            .with_course("Pine")
            .with_holes(18);
        assert_eq!(filter.describe(), "2024-01-01 to 2024-06-30, course:\"Pine\", 18 holes");

        assert_eq!(RoundFilter::new().with_after(day(1, 1)).describe(), "from 2024-01-01");
    }
}
