//! Round statistics from hole records or round totals

use crate::hole::HoleRecord;

use super::classify::{is_gir, is_under_gir, up_and_down};
use super::model::{scrambling, RoundStats, TotalsEstimate};

/// Average putts-per-hole bands (exclusive upper bound) and the GIR rate each
/// suggests. Very low putting usually means chipping close after missing
/// greens, so the lowest band maps to a low GIR rate.
const PUTTING_BANDS: [(f64, f64); 3] = [(1.7, 0.30), (2.0, 0.65), (2.2, 0.45)];
/// GIR rate for rounds averaging 2.2 putts per hole or more
const HEAVY_PUTTING_GIR_RATE: f64 = 0.25;

const GOOD_SCRAMBLING_RATE: f64 = 0.60;
const POOR_SCRAMBLING_RATE: f64 = 0.30;

/// Fold a round's holes into round statistics in a single pass.
///
/// An empty slice gives all-zero stats.
pub fn aggregate(holes: &[HoleRecord]) -> RoundStats {
    let mut stats = RoundStats::default();

    for hole in holes {
        stats.holes_played += 1;
        stats.total_score += u32::from(hole.score);
        stats.total_putts += u32::from(hole.putts);

        let gir = is_gir(hole.par, hole.score, hole.putts);
        if gir {
            stats.greens_in_regulation += 1;
            stats.gir_putts += u32::from(hole.putts);
        } else {
            stats.non_gir_putts += u32::from(hole.putts);
        }

        if is_under_gir(hole.par, hole.score, hole.putts) {
            stats.under_gir += 1;
        }

        if let Some(hit) = hole.fairway_result() {
            stats.fairway_attempts += 1;
            if hit {
                stats.fairways_in_regulation += 1;
            }
        }

        let recovery = up_and_down(hole.par, hole.score, hole.putts, gir);
        if recovery.is_attempt {
            stats.up_and_down_attempts += 1;
            if recovery.is_success {
                stats.up_and_downs += 1;
            }
        }

        if hole.score <= hole.par {
            stats.par_or_better += 1;
        }
    }

    stats.scrambling = scrambling(stats.up_and_downs, stats.up_and_down_attempts);
    stats
}

/// Rough GIR and scrambling figures for a round entered only as totals.
///
/// This is a coarse model meant to fill in charts, not a measurement.
pub fn estimate_from_totals(
    total_score: u32,
    total_putts: u32,
    holes: u32,
    course_par: u32,
) -> TotalsEstimate {
    if holes == 0 {
        return TotalsEstimate {
            total_score,
            total_putts,
            ..Default::default()
        };
    }

    let putts_per_hole = f64::from(total_putts) / f64::from(holes);
    let gir_rate = PUTTING_BANDS
        .iter()
        .find(|(upper, _)| putts_per_hole < *upper)
        .map(|(_, rate)| *rate)
        .unwrap_or(HEAVY_PUTTING_GIR_RATE);

    let greens_in_regulation = clamp_count(f64::from(holes) * gir_rate).min(holes);
    let missed_greens = holes - greens_in_regulation;

    let strokes_over_par = i64::from(total_score) - i64::from(course_par);
    let scramble_rate = if (strokes_over_par as f64) < f64::from(missed_greens) * 0.5 {
        GOOD_SCRAMBLING_RATE
    } else {
        POOR_SCRAMBLING_RATE
    };
    let up_and_downs = clamp_count(f64::from(missed_greens) * scramble_rate).min(missed_greens);

    tracing::debug!(
        putts_per_hole,
        gir_rate,
        scramble_rate,
        "estimated round stats from totals"
    );

    TotalsEstimate {
        holes_played: holes,
        total_score,
        total_putts,
        greens_in_regulation,
        up_and_downs,
        up_and_down_attempts: missed_greens,
        scrambling: scrambling(up_and_downs, missed_greens),
    }
}

/// Round to the nearest whole count, never below zero
fn clamp_count(value: f64) -> u32 {
    value.round().max(0.0) as u32
}
