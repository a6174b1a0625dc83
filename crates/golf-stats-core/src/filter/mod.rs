//! Round filtering and history aggregation
//!
//! Picks rounds out of a player's history by date, course and length, and
//! folds the survivors into a single player summary.

mod criteria;
mod engine;

pub use criteria::RoundFilter;
pub use engine::StatsAggregator;
