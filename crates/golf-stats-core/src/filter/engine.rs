//! Aggregation of a player's filtered round history

use rayon::prelude::*;

use super::RoundFilter;
use crate::handicap::{index_from_rounds, number_of_differentials_used};
use crate::round::RoundRecord;
use crate::stats::{PlayerSummary, RoundStats, Streaks};
use crate::utils::round_to_tenth;

/// Aggregator that folds many rounds into a player summary
pub struct StatsAggregator;

impl StatsAggregator {
    /// Summarize every round that matches `filter`.
    ///
    /// Rounds are ordered by date before streaks are counted; rounds with no
    /// known score are skipped.
    pub fn summarize(rounds: &[RoundRecord], filter: &RoundFilter) -> PlayerSummary {
        let mut selected: Vec<&RoundRecord> = filter
            .apply(rounds)
            .into_iter()
            .filter(|round| {
                let scored = round.score().is_some();
                if !scored {
                    tracing::warn!(round = %round.label(), "skipping round without a score");
                }
                scored
            })
            .collect();
        selected.sort_by_key(|round| round.played_on);

        tracing::debug!(
            total = rounds.len(),
            selected = selected.len(),
            filter = %filter.describe(),
            "summarizing rounds"
        );

        let per_round: Vec<Option<RoundStats>> = selected.par_iter().map(|round| round.stats()).collect();

        let mut summary = PlayerSummary {
            rounds: selected.len(),
            rounds_with_detail: selected.iter().filter(|r| r.has_hole_detail()).count(),
            ..Default::default()
        };

        let mut rounds_with_stats = 0u32;
        for stats in per_round.iter().flatten() {
            summary.totals.merge(stats);
            rounds_with_stats += 1;
        }

        let total_score: u32 = selected.iter().filter_map(|r| r.score()).sum();
        summary.scoring_average = average(total_score, selected.len() as u32);
        summary.putts_average = average(summary.totals.total_putts, rounds_with_stats);
        summary.gir_percentage = summary.totals.gir_percentage();
        summary.fir_percentage = summary.totals.fir_percentage();
        summary.scrambling = summary.totals.scrambling;

        summary.streaks = Streaks::from_rounds(
            selected
                .iter()
                .filter(|r| r.has_hole_detail())
                .map(|r| r.holes.as_slice()),
        );

        let rated = selected.iter().filter(|r| r.differential().is_some()).count();
        summary.handicap_index = index_from_rounds(selected.iter().copied());
        summary.differentials_used = if rated == 0 {
            0
        } else {
            number_of_differentials_used(rated)
        };

        summary
    }
}

fn average(total: u32, count: u32) -> f64 {
    if count == 0 {
        return 0.0;
    }
    round_to_tenth(f64::from(total) / f64::from(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hole::HoleRecord;
    use chrono::NaiveDate;

    fn day(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    fn regulation_nine(date: NaiveDate) -> RoundRecord {
        RoundRecord::new(
            date,
            "Cedar Ridge",
            (1..=9)
                .map(|n| HoleRecord::new(n, 4, 4, 2).with_fairway(true))
                .collect(),
        )
        .with_ratings(36.0, 113.0)
    }

    #[test]
    fn test_summarize_empty_history() {
        let summary = StatsAggregator::summarize(&[], &RoundFilter::new());
        assert_eq!(summary.rounds, 0);
        assert_eq!(summary.scoring_average, 0.0);
        assert_eq!(summary.handicap_index, None);
        assert_eq!(summary.differentials_used, 0);
        assert_eq!(summary.streaks, Streaks::default());
    }

    #[test]
    fn test_summarize_mixed_history() {
        let rounds = vec![
            regulation_nine(day(5, 2)),
            RoundRecord::from_totals(day(5, 1), "Cedar Ridge", 90, 72)
                .with_putts(36)
                .with_ratings(72.0, 113.0),
        ];

        let summary = StatsAggregator::summarize(&rounds, &RoundFilter::new());
        assert_eq!(summary.rounds, 2);
        assert_eq!(summary.rounds_with_detail, 1);
        assert_eq!(summary.totals.holes_played, 27);
        assert_eq!(summary.scoring_average, 63.0);
        assert_eq!(summary.putts_average, 27.0);
        // 9 regulation greens plus 8 estimated
        assert_eq!(summary.totals.greens_in_regulation, 17);
        assert_eq!(summary.streaks.fairways_hit, 9);
        assert_eq!(summary.streaks.bogey_or_better, 9);
        // Differentials 0.0 and 18.0, two rounds: 0.0 - 2.0 clamps to 0
        assert_eq!(summary.handicap_index, Some(0.0));
        assert_eq!(summary.differentials_used, 1);
    }

    #[test]
    fn test_summarize_applies_filter() {
        let rounds = vec![
            regulation_nine(day(3, 1)),
            RoundRecord::from_totals(day(6, 1), "Lakeside", 95, 72).with_ratings(71.0, 125.0),
        ];

        let filter = RoundFilter::new().with_course("lakeside");
        let summary = StatsAggregator::summarize(&rounds, &filter);
        assert_eq!(summary.rounds, 1);
        assert_eq!(summary.rounds_with_detail, 0);
        assert_eq!(summary.scoring_average, 95.0);
        // No putts recorded, so no stats for the round
        assert_eq!(summary.totals, RoundStats::default());
        // 113 / 125 * 24 = 21.7, one round: 21.7 - 2.0
        assert_eq!(summary.handicap_index, Some(19.7));
    }

    #[test]
    fn test_streaks_follow_date_order() {
        let early = RoundRecord::new(
            day(1, 1),
            "Cedar Ridge",
            vec![HoleRecord::new(1, 4, 4, 2), HoleRecord::new(2, 4, 8, 3)],
        );
        let late = RoundRecord::new(
            day(2, 1),
            "Cedar Ridge",
            vec![HoleRecord::new(1, 4, 5, 2), HoleRecord::new(2, 4, 4, 2)],
        );

        // Supplied out of order; the bogey-or-better run is only the last two holes
        let summary = StatsAggregator::summarize(&[late, early], &RoundFilter::new());
        assert_eq!(summary.streaks.bogey_or_better, 2);
        assert_eq!(summary.streaks.under_three_putts, 2);
    }

    #[test]
    fn test_unscored_rounds_are_skipped() {
        let rounds = vec![
            RoundRecord::new(day(1, 1), "Cedar Ridge", Vec::new()),
            RoundRecord::from_totals(day(1, 2), "Cedar Ridge", 80, 72),
        ];
        let summary = StatsAggregator::summarize(&rounds, &RoundFilter::new());
        assert_eq!(summary.rounds, 1);
        assert_eq!(summary.scoring_average, 80.0);
    }
}
