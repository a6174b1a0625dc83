//! Per-hole score records

mod validate;

pub use validate::validate_holes;

use serde::{Deserialize, Serialize};

/// Lowest par a hole can carry
pub const MIN_PAR: u8 = 3;
/// Highest par a hole can carry
pub const MAX_PAR: u8 = 6;

/// A single hole as entered on a score card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleRecord {
    /// 1-based position in the round
    pub hole_number: u8,
    pub par: u8,
    /// Strokes taken, including putts
    pub score: u8,
    pub putts: u8,
    /// Whether the tee shot found the fairway. `None` when unknown, and
    /// ignored entirely on par 3s.
    #[serde(default)]
    pub fairway_hit: Option<bool>,
}

impl HoleRecord {
    /// Create a record for a played hole
    pub fn new(hole_number: u8, par: u8, score: u8, putts: u8) -> Self {
        Self {
            hole_number,
            par,
            score,
            putts,
            fairway_hit: None,
        }
    }

    /// Zero-filled template for a hole that has not been entered yet
    pub fn blank(hole_number: u8, par: u8) -> Self {
        Self::new(hole_number, par, 0, 0)
    }

    /// Set the fairway result
    pub fn with_fairway(mut self, hit: bool) -> Self {
        self.fairway_hit = Some(hit);
        self
    }

    /// Whether a score has been entered for this hole
    pub fn is_played(&self) -> bool {
        self.score > 0
    }

    /// Strokes relative to par (negative is under par)
    pub fn score_to_par(&self) -> i32 {
        i32::from(self.score) - i32::from(self.par)
    }

    /// Fairway result, only for holes where a fairway counts (par 4 and up)
    pub fn fairway_result(&self) -> Option<bool> {
        if self.par > MIN_PAR {
            self.fairway_hit
        } else {
            None
        }
    }
}

/// Build a blank score card from a list of hole pars, numbered from 1
pub fn blank_card(pars: &[u8]) -> Vec<HoleRecord> {
    pars.iter()
        .zip(1u8..)
        .map(|(&par, number)| HoleRecord::blank(number, par))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_card() {
        let card = blank_card(&[4, 3, 5]);
        assert_eq!(card.len(), 3);
        assert_eq!(card[0].hole_number, 1);
        assert_eq!(card[2].hole_number, 3);
        assert_eq!(card[2].par, 5);
        assert!(card.iter().all(|h| h.score == 0 && h.putts == 0));
        assert!(card.iter().all(|h| !h.is_played()));
    }

    #[test]
    fn test_score_to_par() {
        assert_eq!(HoleRecord::new(1, 4, 3, 1).score_to_par(), -1);
        assert_eq!(HoleRecord::new(1, 4, 6, 2).score_to_par(), 2);
    }

    #[test]
    fn test_fairway_result_ignored_on_par_three() {
        let par3 = HoleRecord::new(1, 3, 3, 2).with_fairway(true);
        let par4 = HoleRecord::new(2, 4, 4, 2).with_fairway(false);
        assert_eq!(par3.fairway_result(), None);
        assert_eq!(par4.fairway_result(), Some(false));
    }

    #[test]
    fn test_deserialize_without_fairway() {
        let hole: HoleRecord =
            serde_json::from_str(r#"{"hole_number":1,"par":4,"score":5,"putts":2}"#).unwrap();
        assert_eq!(hole.fairway_hit, None);
        assert_eq!(hole.score, 5);
    }
}
