//! Hole streak tracking across rounds

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hole::HoleRecord;

/// Per-hole predicates that streaks are tracked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StreakKind {
    /// Consecutive fairways hit; holes without a fairway result are skipped
    FairwaysHit,
    /// Consecutive holes without a three-putt
    UnderThreePutts,
    /// Consecutive holes at bogey or better
    BogeyOrBetter,
}

impl StreakKind {
    pub const ALL: [StreakKind; 3] = [
        StreakKind::FairwaysHit,
        StreakKind::UnderThreePutts,
        StreakKind::BogeyOrBetter,
    ];

    /// Evaluate the predicate for one hole. `None` means the hole does not
    /// take part in this streak.
    pub fn outcome(&self, hole: &HoleRecord) -> Option<bool> {
        match self {
            StreakKind::FairwaysHit => hole.fairway_result(),
            StreakKind::UnderThreePutts => Some(hole.putts < 3),
            StreakKind::BogeyOrBetter => Some(hole.score_to_par() < 2),
        }
    }
}

impl fmt::Display for StreakKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreakKind::FairwaysHit => write!(f, "Fairways hit"),
            StreakKind::UnderThreePutts => write!(f, "Holes without a 3-putt"),
            StreakKind::BogeyOrBetter => write!(f, "Bogey or better"),
        }
    }
}

/// Longest run of `Some(true)`. A `Some(false)` breaks the run, `None` is
/// passed over without breaking it.
pub fn longest_streak<I>(outcomes: I) -> u32
where
    I: IntoIterator<Item = Option<bool>>,
{
    let mut longest = 0;
    let mut current = 0;

    for outcome in outcomes {
        match outcome {
            Some(true) => {
                current += 1;
                longest = longest.max(current);
            }
            Some(false) => current = 0,
            None => {}
        }
    }

    longest
}

/// Longest streak of each kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streaks {
    pub fairways_hit: u32,
    pub under_three_putts: u32,
    pub bogey_or_better: u32,
}

impl Streaks {
    /// Compute every streak over holes in playing order. Rounds must already
    /// be sorted chronologically; holes run on from one round into the next.
    pub fn from_rounds<'a, R>(rounds: R) -> Self
    where
        R: IntoIterator<Item = &'a [HoleRecord]>,
    {
        let holes: Vec<&HoleRecord> = rounds.into_iter().flatten().collect();
        let run = |kind: StreakKind| longest_streak(holes.iter().map(|h| kind.outcome(h)));

        Self {
            fairways_hit: run(StreakKind::FairwaysHit),
            under_three_putts: run(StreakKind::UnderThreePutts),
            bogey_or_better: run(StreakKind::BogeyOrBetter),
        }
    }

    /// Look up the streak for a kind
    pub fn get(&self, kind: StreakKind) -> u32 {
        match kind {
            StreakKind::FairwaysHit => self.fairways_hit,
            StreakKind::UnderThreePutts => self.under_three_putts,
            StreakKind::BogeyOrBetter => self.bogey_or_better,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_streak_basic() {
        let outcomes = [true, true, false, true, true, true, false]
            .into_iter()
            .map(Some);
        assert_eq!(longest_streak(outcomes), 3);
    }

    #[test]
    fn test_longest_streak_empty() {
        assert_eq!(longest_streak(std::iter::empty()), 0);
    }

    #[test]
    fn test_longest_streak_skips_inapplicable() {
        let outcomes = vec![Some(true), None, Some(true), None, None, Some(true), Some(false)];
        assert_eq!(longest_streak(outcomes), 3);
    }

    #[test]
    fn test_fairway_streak_skips_par_threes() {
        let round = vec![
            HoleRecord::new(1, 4, 4, 2).with_fairway(true),
            HoleRecord::new(2, 3, 3, 2).with_fairway(false),
            HoleRecord::new(3, 5, 5, 2).with_fairway(true),
            HoleRecord::new(4, 4, 5, 2),
            HoleRecord::new(5, 4, 4, 2).with_fairway(true),
            HoleRecord::new(6, 4, 4, 2).with_fairway(false),
        ];
        let streaks = Streaks::from_rounds([round.as_slice()]);
        assert_eq!(streaks.fairways_hit, 3);
    }

    #[test]
    fn test_streaks_carry_across_rounds() {
        let first = vec![
            HoleRecord::new(1, 4, 7, 3),
            HoleRecord::new(2, 4, 5, 2),
            HoleRecord::new(3, 4, 5, 2),
        ];
        let second = vec![
            HoleRecord::new(1, 4, 4, 2),
            HoleRecord::new(2, 4, 6, 3),
        ];
        let streaks = Streaks::from_rounds([first.as_slice(), second.as_slice()]);

        // Holes 2-3 of the first round plus hole 1 of the second
        assert_eq!(streaks.bogey_or_better, 3);
        assert_eq!(streaks.under_three_putts, 3);
        assert_eq!(streaks.get(StreakKind::BogeyOrBetter), 3);
    }

    #[test]
    fn test_bogey_or_better_boundary() {
        assert_eq!(StreakKind::BogeyOrBetter.outcome(&HoleRecord::new(1, 4, 5, 2)), Some(true));
        assert_eq!(StreakKind::BogeyOrBetter.outcome(&HoleRecord::new(1, 4, 6, 2)), Some(false));
    }

    #[test]
    fn test_display() {
        assert_eq!(StreakKind::FairwaysHit.to_string(), "Fairways hit");
    }
}
