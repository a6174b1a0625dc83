//! Handicap Index from a history of differentials

use crate::round::RoundRecord;
use crate::utils::round_to_tenth;

/// One row of the averaging table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    /// Smallest round count this row applies to
    pub min_rounds: usize,
    /// How many of the lowest differentials are averaged
    pub used: usize,
    /// Added to the average (negative for short histories)
    pub adjustment: f64,
}

const fn bracket(min_rounds: usize, used: usize, adjustment: f64) -> Bracket {
    Bracket {
        min_rounds,
        used,
        adjustment,
    }
}

/// Averaging table, ordered by `min_rounds`. A history uses the last row
/// whose lower bound it reaches.
pub const BRACKETS: [Bracket; 10] = [
    bracket(1, 1, -2.0),
    bracket(4, 1, -1.0),
    bracket(6, 2, -1.0),
    bracket(7, 2, 0.0),
    bracket(9, 3, 0.0),
    bracket(12, 4, 0.0),
    bracket(15, 5, 0.0),
    bracket(17, 6, 0.0),
    bracket(19, 7, 0.0),
    bracket(20, 8, 0.0),
];

/// Bracket for a history of `rounds` differentials.
///
/// Zero rounds matches no row and falls through to the last one.
pub fn bracket_for(rounds: usize) -> Bracket {
    BRACKETS
        .iter()
        .rev()
        .find(|b| rounds >= b.min_rounds)
        .copied()
        .unwrap_or(BRACKETS[BRACKETS.len() - 1])
}

/// How many differentials count toward the index for a history of `rounds`.
/// Returns 8 for an empty history.
pub fn number_of_differentials_used(rounds: usize) -> usize {
    bracket_for(rounds).used
}

/// Handicap Index from scoring differentials, one decimal and never below
/// zero. `None` for an empty history.
pub fn handicap_index(differentials: &[f64]) -> Option<f64> {
    if differentials.is_empty() {
        return None;
    }

    let mut sorted = differentials.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let bracket = bracket_for(sorted.len());
    let lowest = &sorted[..bracket.used.min(sorted.len())];
    let average = lowest.iter().sum::<f64>() / lowest.len() as f64;

    tracing::debug!(
        rounds = sorted.len(),
        used = lowest.len(),
        adjustment = bracket.adjustment,
        "computed handicap average"
    );

    Some(round_to_tenth((average + bracket.adjustment).max(0.0)))
}

/// Handicap Index from rounds, skipping any without a differential
pub fn index_from_rounds<'a, I>(rounds: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a RoundRecord>,
{
    let differentials: Vec<f64> = rounds
        .into_iter()
        .filter_map(RoundRecord::differential)
        .collect();
    handicap_index(&differentials)
}
