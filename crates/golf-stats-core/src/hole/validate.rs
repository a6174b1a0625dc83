//! Score card validation
//!
//! Problems are reported as human-readable messages rather than errors so a
//! caller can show every issue on a card at once.

use super::{HoleRecord, MAX_PAR, MIN_PAR};

/// Check a card for malformed holes, returning one message per problem.
///
/// An empty card is valid.
pub fn validate_holes(holes: &[HoleRecord]) -> Vec<String> {
    let mut problems = Vec::new();

    for (index, hole) in holes.iter().enumerate() {
        let expected = index + 1;
        if usize::from(hole.hole_number) != expected {
            problems.push(format!(
                "Hole {}: expected hole number {}",
                hole.hole_number, expected
            ));
        }

        if !(MIN_PAR..=MAX_PAR).contains(&hole.par) {
            problems.push(format!(
                "Hole {}: par must be between {} and {} (got {})",
                hole.hole_number, MIN_PAR, MAX_PAR, hole.par
            ));
        }

        if hole.score < 1 {
            problems.push(format!("Hole {}: score must be at least 1", hole.hole_number));
        }

        if hole.putts > hole.score {
            problems.push(format!(
                "Hole {}: putts ({}) cannot exceed score ({})",
                hole.hole_number, hole.putts, hole.score
            ));
        }
    }

    problems
}
