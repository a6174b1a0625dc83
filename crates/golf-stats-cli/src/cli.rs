//! Headless commands for scripting
//!
//! Usage:
//!   golf-stats round <holes.json>             Statistics for one score card
//!   golf-stats summary [rounds.json] [opts]   Summary over a round history
//!   golf-stats handicap [rounds.json]         Handicap Index
//!   golf-stats estimate --score N --putts N   Estimate stats from totals
//!
//! Options:
//!   --json             Output in JSON format

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use chrono::NaiveDate;

use golf_stats_core::{
    aggregate, estimate_from_totals, handicap_index, number_of_differentials_used,
    validate_holes, Config, ExportFormat, HoleRecord, PlayerSummary, RoundFilter, RoundRecord,
    RoundStats, StatsAggregator, StreakKind, TotalsEstimate,
};

/// CLI command to execute
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Round {
        path: PathBuf,
    },
    Summary {
        path: Option<PathBuf>,
        filter: RoundFilter,
        export: Option<PathBuf>,
    },
    Handicap {
        path: Option<PathBuf>,
    },
    Estimate {
        score: u32,
        putts: u32,
        holes: u32,
        par: u32,
    },
}

/// CLI options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub json: bool,
}

/// Parse CLI arguments and return command + options
pub fn parse_args(args: &[String]) -> Result<(CliCommand, CliOptions), String> {
    let mut options = CliOptions::default();
    let mut command_name: Option<String> = None;
    let mut path: Option<PathBuf> = None;
    let mut filter = RoundFilter::new();
    let mut export: Option<PathBuf> = None;
    let mut score: Option<u32> = None;
    let mut putts: Option<u32> = None;
    let mut holes: Option<u32> = None;
    let mut par: Option<u32> = None;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "--json" => options.json = true,
            "--after" | "--before" | "--course" | "--holes" | "--export" | "--score"
            | "--putts" | "--par" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| format!("{} requires a value", arg))?;
                match arg {
                    "--after" => filter.after = Some(parse_date(value)?),
                    "--before" => filter.before = Some(parse_date(value)?),
                    "--course" => filter.course = Some(value.clone()),
                    "--holes" => holes = Some(parse_number(arg, value)?),
                    "--export" => export = Some(PathBuf::from(value)),
                    "--score" => score = Some(parse_number(arg, value)?),
                    "--putts" => putts = Some(parse_number(arg, value)?),
                    _ => par = Some(parse_number(arg, value)?),
                }
            }
            "round" | "summary" | "handicap" | "estimate" if command_name.is_none() => {
                command_name = Some(arg.to_string());
            }
            _ if arg.starts_with('-') => return Err(format!("Unknown option: {}", arg)),
            _ if command_name.is_none() => return Err(format!("Unknown command: {}", arg)),
            _ if path.is_none() => path = Some(PathBuf::from(arg)),
            _ => return Err(format!("Unexpected argument: {}", arg)),
        }
        i += 1;
    }

    let command = match command_name.as_deref() {
        Some("round") => CliCommand::Round {
            path: path.ok_or("round requires a score card file")?,
        },
        Some("summary") => {
            filter.holes = holes;
            CliCommand::Summary {
                path,
                filter,
                export,
            }
        }
        Some("handicap") => CliCommand::Handicap { path },
        Some("estimate") => CliCommand::Estimate {
            score: score.ok_or("estimate requires --score")?,
            putts: putts.ok_or("estimate requires --putts")?,
            holes: holes.unwrap_or(18),
            par: par.unwrap_or(72),
        },
        _ => {
            return Err(
                "No command specified. Use: round, summary, handicap, or estimate".to_string(),
            )
        }
    };

    Ok((command, options))
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}'. Use YYYY-MM-DD", s))
}

fn parse_number<T: FromStr>(flag: &str, s: &str) -> Result<T, String> {
    s.trim()
        .parse::<T>()
        .map_err(|_| format!("Invalid value for {}: {}", flag, s))
}

/// Run CLI command
pub fn run(command: CliCommand, options: CliOptions) -> anyhow::Result<()> {
    match command {
        CliCommand::Round { path } => run_round(&path, options),
        CliCommand::Summary {
            path,
            filter,
            export,
        } => run_summary(path, &filter, export, options),
        CliCommand::Handicap { path } => run_handicap(path, options),
        CliCommand::Estimate {
            score,
            putts,
            holes,
            par,
        } => {
            let estimate = estimate_from_totals(score, putts, holes, par);
            print_estimate(&estimate, options)
        }
    }
}

fn run_round(path: &Path, options: CliOptions) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let holes: Vec<HoleRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse score card {}", path.display()))?;

    let problems = validate_holes(&holes);
    if !problems.is_empty() {
        for problem in &problems {
            eprintln!("  {}", problem);
        }
        bail!("Score card has {} problem(s)", problems.len());
    }

    print_round_stats(&aggregate(&holes), options)
}

fn run_summary(
    path: Option<PathBuf>,
    filter: &RoundFilter,
    export: Option<PathBuf>,
    options: CliOptions,
) -> anyhow::Result<()> {
    let config = Config::load();
    let rounds = load_history(path, &config)?;
    let summary = StatsAggregator::summarize(&rounds, filter);

    if let Some(export_path) = export {
        let format = ExportFormat::from_path(&export_path).unwrap_or(config.default_export);
        format.export(&summary, &export_path)?;
        tracing::info!(path = %export_path.display(), %format, "exported summary");
        if !options.json {
            println!("Exported {} summary to {}", format, export_path.display());
            println!();
        }
    }

    print_summary(&summary, filter, options)
}

fn run_handicap(path: Option<PathBuf>, options: CliOptions) -> anyhow::Result<()> {
    let config = Config::load();
    let rounds = load_history(path, &config)?;

    let differentials: Vec<f64> = rounds.iter().filter_map(RoundRecord::differential).collect();
    let index = handicap_index(&differentials);
    let used = if differentials.is_empty() {
        0
    } else {
        number_of_differentials_used(differentials.len())
    };

    if options.json {
        println!(
            "{}",
            serde_json::json!({
                "handicap_index": index,
                "rated_rounds": differentials.len(),
                "differentials_used": used,
            })
        );
    } else {
        match index {
            Some(index) => {
                println!("Handicap Index: {:.1}", index);
                println!(
                    "  Based on the best {} of {} rated round(s)",
                    used,
                    differentials.len()
                );
            }
            None => println!("Handicap Index: not established (no rated rounds)"),
        }
    }

    Ok(())
}

/// Load and validate a round history file
fn load_history(path: Option<PathBuf>, config: &Config) -> anyhow::Result<Vec<RoundRecord>> {
    let path = path
        .or_else(|| config.history_path.clone())
        .ok_or_else(|| anyhow!("No round history given and no history_path configured"))?;

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let rounds: Vec<RoundRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse round history {}", path.display()))?;

    for round in &rounds {
        round.validate()?;
    }

    tracing::debug!(path = %path.display(), rounds = rounds.len(), "loaded round history");
    Ok(rounds)
}

fn print_round_stats(stats: &RoundStats, options: CliOptions) -> anyhow::Result<()> {
    if options.json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!("Round Statistics:");
    println!("  Holes:          {}", stats.holes_played);
    println!("  Score:          {}", stats.total_score);
    println!("  Putts:          {}", stats.total_putts);
    println!(
        "  GIR:            {} ({:.1}%)",
        stats.greens_in_regulation,
        stats.gir_percentage()
    );
    println!("  Under GIR:      {}", stats.under_gir);
    println!(
        "  Fairways:       {}/{} ({:.1}%)",
        stats.fairways_in_regulation,
        stats.fairway_attempts,
        stats.fir_percentage()
    );
    println!(
        "  Up and downs:   {}/{} ({:.1}%)",
        stats.up_and_downs, stats.up_and_down_attempts, stats.scrambling
    );
    println!(
        "  Putts GIR/miss: {}/{}",
        stats.gir_putts, stats.non_gir_putts
    );
    println!("  Par or better:  {}", stats.par_or_better);

    Ok(())
}

fn print_summary(
    summary: &PlayerSummary,
    filter: &RoundFilter,
    options: CliOptions,
) -> anyhow::Result<()> {
    if options.json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    println!("Player Summary ({}):", filter.describe());
    println!(
        "  Rounds:          {} ({} with hole detail)",
        summary.rounds, summary.rounds_with_detail
    );
    println!("  Scoring average: {:.1}", summary.scoring_average);
    println!("  Putts per round: {:.1}", summary.putts_average);
    println!("  GIR:             {:.1}%", summary.gir_percentage);
    println!("  Fairways:        {:.1}%", summary.fir_percentage);
    println!("  Scrambling:      {:.1}%", summary.scrambling);
    match summary.handicap_index {
        Some(index) => println!(
            "  Handicap Index:  {:.1} (best {} differentials)",
            index, summary.differentials_used
        ),
        None => println!("  Handicap Index:  not established"),
    }
    println!();
    println!("Longest streaks:");
    for kind in StreakKind::ALL {
        println!("  {}: {}", kind, summary.streaks.get(kind));
    }

    Ok(())
}

fn print_estimate(estimate: &TotalsEstimate, options: CliOptions) -> anyhow::Result<()> {
    if options.json {
        println!("{}", serde_json::to_string_pretty(estimate)?);
        return Ok(());
    }

    println!("Estimated Statistics:");
    println!("  Holes:        {}", estimate.holes_played);
    println!("  Score:        {}", estimate.total_score);
    println!("  Putts:        {}", estimate.total_putts);
    println!("  GIR:          ~{}", estimate.greens_in_regulation);
    println!(
        "  Up and downs: ~{}/{} ({:.1}%)",
        estimate.up_and_downs, estimate.up_and_down_attempts, estimate.scrambling
    );

    Ok(())
}

/// Print CLI help
pub fn print_help() {
    println!("golf-stats v{}", env!("CARGO_PKG_VERSION"));
    println!("Golf statistics and handicap calculator");
    println!();
    println!("USAGE:");
    println!("    golf-stats <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    round <file>          Statistics for a score card (JSON array of holes)");
    println!("    summary [file]        Summary over a round history (JSON array of rounds)");
    println!("    handicap [file]       Handicap Index from a round history");
    println!("    estimate              Estimate statistics from round totals");
    println!();
    println!("SUMMARY OPTIONS:");
    println!("    --after <date>        Only rounds on or after YYYY-MM-DD");
    println!("    --before <date>       Only rounds on or before YYYY-MM-DD");
    println!("    --course <name>       Only rounds at courses matching <name>");
    println!("    --holes <n>           Only rounds of <n> holes");
    println!("    --export <path>       Also write the summary to a .json or .csv file");
    println!();
    println!("ESTIMATE OPTIONS:");
    println!("    --score <n>           Total strokes (required)");
    println!("    --putts <n>           Total putts (required)");
    println!("    --holes <n>           Holes played (default 18)");
    println!("    --par <n>             Course par (default 72)");
    println!();
    println!("OPTIONS:");
    println!("    --json                Output in JSON format");
    println!("    --help                Show this help message");
    println!();
    println!("When no history file is given, history_path from the config file is used.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_round() {
        let (command, options) = parse_args(&args(&["round", "card.json", "--json"])).unwrap();
        assert_eq!(
            command,
            CliCommand::Round {
                path: PathBuf::from("card.json")
            }
        );
        assert!(options.json);
    }

    #[test]
    fn test_round_requires_file() {
        assert!(parse_args(&args(&["round"])).is_err());
    }

    #[test]
    fn test_parse_summary_filters() {
        let (command, options) = parse_args(&args(&[
            "summary",
            "--after",
            "2024-01-01",
            "--course",
            "Pine",
            "--holes",
            "18",
            "--export",
            "out.csv",
        ]))
        .unwrap();

        let expected_filter = RoundFilter::new()
            .with_after(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .with_course("Pine")
            .with_holes(18);
        assert_eq!(
            command,
            CliCommand::Summary {
                path: None,
                filter: expected_filter,
                export: Some(PathBuf::from("out.csv")),
            }
        );
        assert!(!options.json);
    }

    #[test]
    fn test_parse_estimate_defaults() {
        let (command, _) =
            parse_args(&args(&["estimate", "--score", "90", "--putts", "34"])).unwrap();
        assert_eq!(
            command,
            CliCommand::Estimate {
                score: 90,
                putts: 34,
                holes: 18,
                par: 72
            }
        );
    }

    #[test]
    fn test_estimate_requires_totals() {
        let err = parse_args(&args(&["estimate", "--score", "90"])).unwrap_err();
        assert!(err.contains("--putts"));
    }

    #[test]
    fn test_invalid_values() {
        assert!(parse_args(&args(&["summary", "--after", "01/02/2024"]))
            .unwrap_err()
            .contains("YYYY-MM-DD"));
        assert!(parse_args(&args(&["estimate", "--score", "ninety", "--putts", "30"]))
            .unwrap_err()
            .contains("--score"));
        assert!(parse_args(&args(&["summary", "--course"]))
            .unwrap_err()
            .contains("requires a value"));
    }

    #[test]
    fn test_unknown_input() {
        assert!(parse_args(&args(&["scan"])).unwrap_err().contains("Unknown command"));
        assert!(parse_args(&args(&["handicap", "--verbose"]))
            .unwrap_err()
            .contains("Unknown option"));
        assert!(parse_args(&args(&[])).unwrap_err().contains("No command"));
    }
}
