//! Per-hole classification
//!
//! Score and putts alone cannot say exactly where the ball was, so these
//! rules are heuristics. In particular a par made with fewer than two putts
//! (a chip-in or holed bunker shot) is treated as a missed green that was
//! recovered, not as a green in regulation.

use serde::{Deserialize, Serialize};

/// Outcome of a hole as a short-game recovery opportunity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpAndDown {
    /// The green was missed, so getting up and down was on the table
    pub is_attempt: bool,
    /// The attempt finished at par or better
    pub is_success: bool,
}

/// Whether the green was hit in regulation (`par - 2` strokes or fewer)
pub fn is_gir(par: u8, score: u8, putts: u8) -> bool {
    let par = i32::from(par);
    let score = i32::from(score);
    let putts = i32::from(putts);
    let strokes_to_green = score - putts;

    if strokes_to_green <= par - 2 {
        return true;
    }

    // Two or more putts for a par means the green was reached on time
    if score == par && putts >= 2 {
        return true;
    }

    // Birdie or better without hitting the green is rare enough to ignore
    score < par
}

/// Whether the green was reached in `par - 3` strokes or fewer, leaving a
/// putt for eagle. Only par 4s and longer qualify.
pub fn is_under_gir(par: u8, score: u8, putts: u8) -> bool {
    if par < 4 {
        return false;
    }
    let strokes_to_green = i32::from(score) - i32::from(putts);
    strokes_to_green > 0 && strokes_to_green <= i32::from(par) - 3
}

/// Classify a hole as an up-and-down attempt and whether it succeeded
pub fn up_and_down(par: u8, score: u8, _putts: u8, hit_gir: bool) -> UpAndDown {
    if hit_gir {
        return UpAndDown::default();
    }
    UpAndDown {
        is_attempt: true,
        is_success: score <= par,
    }
}
