//! Export functionality for player summaries

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::model::PlayerSummary;
use super::streak::StreakKind;
use crate::error::Result;

/// Export a summary to pretty-printed JSON
pub fn export_json(summary: &PlayerSummary, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;

    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;

    Ok(())
}

/// Export a summary to CSV as `Category,Metric,Value` rows
pub fn export_csv(summary: &PlayerSummary, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Category", "Metric", "Value"])?;

    let totals = &summary.totals;
    let rows: Vec<(&str, String, String)> = vec![
        ("Overview", "Rounds".into(), summary.rounds.to_string()),
        ("Overview", "Rounds With Hole Detail".into(), summary.rounds_with_detail.to_string()),
        ("Overview", "Holes Played".into(), totals.holes_played.to_string()),
        ("Scoring", "Scoring Average".into(), format!("{:.1}", summary.scoring_average)),
        ("Scoring", "Par Or Better".into(), totals.par_or_better.to_string()),
        ("Putting", "Putts Per Round".into(), format!("{:.1}", summary.putts_average)),
        ("Putting", "Putts Per GIR".into(), format!("{:.1}", totals.putts_per_gir())),
        ("Putting", "Non-GIR Putts".into(), totals.non_gir_putts.to_string()),
        ("Ball Striking", "GIR %".into(), format!("{:.1}", summary.gir_percentage)),
        ("Ball Striking", "Under GIR".into(), totals.under_gir.to_string()),
        ("Ball Striking", "FIR %".into(), format!("{:.1}", summary.fir_percentage)),
        ("Short Game", "Up And Downs".into(), totals.up_and_downs.to_string()),
        ("Short Game", "Up And Down Attempts".into(), totals.up_and_down_attempts.to_string()),
        ("Short Game", "Scrambling %".into(), format!("{:.1}", summary.scrambling)),
        (
            "Handicap",
            "Handicap Index".into(),
            summary
                .handicap_index
                .map(|index| format!("{:.1}", index))
                .unwrap_or_default(),
        ),
        ("Handicap", "Differentials Used".into(), summary.differentials_used.to_string()),
    ];

    for (category, metric, value) in &rows {
        writer.write_record([*category, metric.as_str(), value.as_str()])?;
    }

    for kind in StreakKind::ALL {
        writer.write_record([
            "Streaks",
            kind.to_string().as_str(),
            summary.streaks.get(kind).to_string().as_str(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "JSON"),
            ExportFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl ExportFormat {
    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    /// Pick a format from a file path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "csv" => Some(ExportFormat::Csv),
            _ => None,
        }
    }

    /// Export a summary using this format
    pub fn export(&self, summary: &PlayerSummary, path: &Path) -> Result<()> {
        match self {
            ExportFormat::Json => export_json(summary, path),
            ExportFormat::Csv => export_csv(summary, path),
        }
    }
}
