//! Error types for golf-stats-core
//!
//! The statistics and handicap calculations themselves cannot fail; these
//! errors come from the edges that touch files and user-supplied records.

use thiserror::Error;

/// Main error type for golf-stats operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Round {round} is invalid: {}", .problems.join("; "))]
    InvalidRound { round: String, problems: Vec<String> },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for golf-stats operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_round_message() {
        let err = Error::InvalidRound {
            round: "2024-05-01 Pebble Creek".to_string(),
            problems: vec![
                "Hole 1: score must be at least 1".to_string(),
                "Hole 2: putts (4) cannot exceed score (3)".to_string(),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Round 2024-05-01 Pebble Creek is invalid: Hole 1: score must be at least 1; \
             Hole 2: putts (4) cannot exceed score (3)"
        );
    }
}
