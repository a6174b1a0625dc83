//! Data models for round and player statistics

use serde::{Deserialize, Serialize};

use super::streak::Streaks;
use crate::utils::{percentage, round_to_tenth};

/// Statistics derived from one round's holes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundStats {
    /// Number of holes folded into these stats
    pub holes_played: u32,
    pub total_score: u32,
    pub total_putts: u32,
    pub greens_in_regulation: u32,
    /// Greens reached with a putt for eagle
    pub under_gir: u32,
    pub fairways_in_regulation: u32,
    /// Holes where a fairway result was recorded
    pub fairway_attempts: u32,
    pub up_and_downs: u32,
    pub up_and_down_attempts: u32,
    /// Putts taken on greens hit in regulation
    pub gir_putts: u32,
    /// Putts taken on greens missed in regulation
    pub non_gir_putts: u32,
    /// Up-and-down success percentage, one decimal
    pub scrambling: f64,
    pub par_or_better: u32,
}

impl RoundStats {
    /// Fold another set of stats into this one.
    ///
    /// Counts are summed and scrambling is recomputed from the combined
    /// counts, never averaged.
    pub fn merge(&mut self, other: &RoundStats) {
        self.holes_played += other.holes_played;
        self.total_score += other.total_score;
        self.total_putts += other.total_putts;
        self.greens_in_regulation += other.greens_in_regulation;
        self.under_gir += other.under_gir;
        self.fairways_in_regulation += other.fairways_in_regulation;
        self.fairway_attempts += other.fairway_attempts;
        self.up_and_downs += other.up_and_downs;
        self.up_and_down_attempts += other.up_and_down_attempts;
        self.gir_putts += other.gir_putts;
        self.non_gir_putts += other.non_gir_putts;
        self.par_or_better += other.par_or_better;
        self.scrambling = scrambling(self.up_and_downs, self.up_and_down_attempts);
    }

    /// Greens in regulation as a percentage of holes played
    pub fn gir_percentage(&self) -> f64 {
        percentage(self.greens_in_regulation, self.holes_played)
    }

    /// Fairways hit as a percentage of fairways with a recorded result
    pub fn fir_percentage(&self) -> f64 {
        percentage(self.fairways_in_regulation, self.fairway_attempts)
    }

    /// Average putts on greens hit in regulation, one decimal
    pub fn putts_per_gir(&self) -> f64 {
        if self.greens_in_regulation == 0 {
            return 0.0;
        }
        round_to_tenth(f64::from(self.gir_putts) / f64::from(self.greens_in_regulation))
    }
}

/// Scrambling percentage from up-and-down counts
pub(crate) fn scrambling(up_and_downs: u32, attempts: u32) -> f64 {
    percentage(up_and_downs, attempts)
}

/// Statistics guessed from round totals when no hole detail was entered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TotalsEstimate {
    pub holes_played: u32,
    pub total_score: u32,
    pub total_putts: u32,
    pub greens_in_regulation: u32,
    pub up_and_downs: u32,
    pub up_and_down_attempts: u32,
    pub scrambling: f64,
}

impl TotalsEstimate {
    /// Lift the estimate into full round stats. Counts the estimate cannot
    /// speak to stay at zero.
    pub fn into_round_stats(self) -> RoundStats {
        RoundStats {
            holes_played: self.holes_played,
            total_score: self.total_score,
            total_putts: self.total_putts,
            greens_in_regulation: self.greens_in_regulation,
            up_and_downs: self.up_and_downs,
            up_and_down_attempts: self.up_and_down_attempts,
            scrambling: self.scrambling,
            ..Default::default()
        }
    }
}

/// Everything known about a player over a filtered set of rounds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    /// Rounds that passed the filter and could be evaluated
    pub rounds: usize,
    /// Rounds among them with hole-by-hole detail
    pub rounds_with_detail: usize,
    /// Combined stats over every counted round
    pub totals: RoundStats,
    /// Mean round score, one decimal
    pub scoring_average: f64,
    /// Mean putts per round, one decimal
    pub putts_average: f64,
    pub gir_percentage: f64,
    pub fir_percentage: f64,
    pub scrambling: f64,
    pub streaks: Streaks,
    pub handicap_index: Option<f64>,
    /// How many differentials went into the index
    pub differentials_used: usize,
}
