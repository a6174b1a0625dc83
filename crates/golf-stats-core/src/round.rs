//! Stored rounds as handed over by the application layer

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::handicap;
use crate::hole::{validate_holes, HoleRecord};
use crate::stats::{aggregate, estimate_from_totals, RoundStats};

/// Hole count assumed for a totals-only round that does not say otherwise
pub const DEFAULT_HOLE_COUNT: u32 = 18;

/// One round in a player's history.
///
/// A round either carries hole-by-hole detail in `holes`, or was entered as
/// totals only. Explicit totals win over totals derived from holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub played_on: NaiveDate,
    /// Course name
    pub course: String,
    #[serde(default)]
    pub course_rating: Option<f64>,
    #[serde(default)]
    pub slope_rating: Option<f64>,
    #[serde(default)]
    pub holes: Vec<HoleRecord>,
    #[serde(default)]
    pub total_score: Option<u32>,
    #[serde(default)]
    pub total_putts: Option<u32>,
    #[serde(default)]
    pub course_par: Option<u32>,
    #[serde(default)]
    pub hole_count: Option<u32>,
}

impl RoundRecord {
    /// Create a round with hole-by-hole detail
    pub fn new(played_on: NaiveDate, course: impl Into<String>, holes: Vec<HoleRecord>) -> Self {
        Self {
            played_on,
            course: course.into(),
            course_rating: None,
            slope_rating: None,
            holes,
            total_score: None,
            total_putts: None,
            course_par: None,
            hole_count: None,
        }
    }

    /// Create a round entered as totals only
    pub fn from_totals(
        played_on: NaiveDate,
        course: impl Into<String>,
        total_score: u32,
        course_par: u32,
    ) -> Self {
        Self {
            total_score: Some(total_score),
            course_par: Some(course_par),
            ..Self::new(played_on, course, Vec::new())
        }
    }

    /// Set course and slope rating
    pub fn with_ratings(mut self, course_rating: f64, slope_rating: f64) -> Self {
        self.course_rating = Some(course_rating);
        self.slope_rating = Some(slope_rating);
        self
    }

    /// Set total putts for a totals-only round
    pub fn with_putts(mut self, total_putts: u32) -> Self {
        self.total_putts = Some(total_putts);
        self
    }

    /// Set the number of holes for a totals-only round
    pub fn with_hole_count(mut self, holes: u32) -> Self {
        self.hole_count = Some(holes);
        self
    }

    /// Short label for messages
    pub fn label(&self) -> String {
        format!("{} {}", self.played_on, self.course)
    }

    pub fn has_hole_detail(&self) -> bool {
        !self.holes.is_empty()
    }

    /// Total strokes, if known
    pub fn score(&self) -> Option<u32> {
        self.total_score.or_else(|| {
            self.has_hole_detail()
                .then(|| self.holes.iter().map(|h| u32::from(h.score)).sum())
        })
    }

    /// Total putts, if known
    pub fn putts(&self) -> Option<u32> {
        self.total_putts.or_else(|| {
            self.has_hole_detail()
                .then(|| self.holes.iter().map(|h| u32::from(h.putts)).sum())
        })
    }

    /// Course par, if known
    pub fn par(&self) -> Option<u32> {
        self.course_par.or_else(|| {
            self.has_hole_detail()
                .then(|| self.holes.iter().map(|h| u32::from(h.par)).sum())
        })
    }

    /// Number of holes in the round
    pub fn hole_count(&self) -> u32 {
        match self.hole_count {
            Some(count) => count,
            None if self.has_hole_detail() => self.holes.len() as u32,
            None => DEFAULT_HOLE_COUNT,
        }
    }

    /// Scoring differential, when the score and both ratings are known
    pub fn differential(&self) -> Option<f64> {
        handicap::differential(self.score()?, self.course_rating, self.slope_rating)
    }

    /// Round statistics: aggregated from holes when there is detail,
    /// otherwise estimated from score, putts and par. `None` when neither
    /// is possible.
    pub fn stats(&self) -> Option<RoundStats> {
        if self.has_hole_detail() {
            return Some(aggregate(&self.holes));
        }

        let estimate = estimate_from_totals(
            self.total_score?,
            self.total_putts?,
            self.hole_count(),
            self.course_par?,
        );
        Some(estimate.into_round_stats())
    }

    /// Check the round before it goes into the engine
    pub fn validate(&self) -> Result<()> {
        let mut problems = validate_holes(&self.holes);

        if self.score().is_none() {
            problems.push("no score recorded".to_string());
        }
        if let Some(slope) = self.slope_rating {
            if slope <= 0.0 {
                problems.push(format!("slope rating must be positive (got {})", slope));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidRound {
                round: self.label(),
                problems,
            })
        }
    }
}
