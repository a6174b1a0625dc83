//! # golf-stats-core
//!
//! Golf performance statistics and handicap engine.
//!
//! This crate provides:
//! - Per-hole classification (greens and fairways in regulation, eagle putts,
//!   up-and-downs) and round aggregation
//! - Coarse statistics estimated from round totals when no hole detail exists
//! - Hole streaks across a player's history
//! - Scoring differentials and a tiered-average Handicap Index
//! - Round filtering, multi-round summaries and JSON/CSV export
//!
//! Every calculation is a pure function of its inputs; nothing here holds
//! state between calls.
//!
//! ## Modules
//!
//! - [`config`] - Persisted user configuration
//! - [`error`] - Error types and Result alias
//! - [`filter`] - Round filtering and history aggregation
//! - [`handicap`] - Scoring differentials and Handicap Index
//! - [`hole`] - Hole records, blank cards and validation
//! - [`round`] - Stored rounds
//! - [`stats`] - Hole classification, round statistics, streaks, export
//!
//! ## Example
//!
//! ```
//! use golf_stats_core::{aggregate, handicap_index, HoleRecord};
//!
//! let holes: Vec<HoleRecord> = (1..=9).map(|n| HoleRecord::new(n, 4, 4, 2)).collect();
//! let stats = aggregate(&holes);
//! assert_eq!(stats.greens_in_regulation, 9);
//!
//! assert_eq!(handicap_index(&[15.0, 12.0, 18.0]), Some(10.0));
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod filter;
pub mod handicap;
pub mod hole;
pub mod round;
pub mod stats;
pub mod utils;

// Re-export key types for convenience

// Error types
pub use error::{Error, Result};

// Configuration
pub use config::Config;

// Holes
pub use hole::{blank_card, validate_holes, HoleRecord};

// Rounds
pub use round::RoundRecord;

// Statistics
pub use stats::{
    aggregate, estimate_from_totals, export_csv, export_json, is_gir, is_under_gir,
    longest_streak, up_and_down, ExportFormat, PlayerSummary, RoundStats, StreakKind, Streaks,
    TotalsEstimate, UpAndDown,
};

// Handicap
pub use handicap::{differential, handicap_index, index_from_rounds, number_of_differentials_used};

// Filtering
pub use filter::{RoundFilter, StatsAggregator};
