//! Hole and round statistics
//!
//! Classifies single holes (greens and fairways in regulation, up-and-downs),
//! folds a round's holes into round statistics, estimates statistics from
//! round totals when no hole detail exists, and tracks hole streaks.

mod analyzer;
mod classify;
mod export;
mod model;
mod streak;

pub use analyzer::{aggregate, estimate_from_totals};
pub use classify::{is_gir, is_under_gir, up_and_down, UpAndDown};
pub use export::{export_csv, export_json, ExportFormat};
pub use model::*;
pub use streak::{longest_streak, StreakKind, Streaks};
