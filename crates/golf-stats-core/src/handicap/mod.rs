//! Handicap engine
//!
//! Turns a round's score and course ratings into a scoring differential, and
//! a player's differential history into a Handicap Index using a tiered
//! averaging table.

mod differential;
mod index;

pub use differential::{differential, STANDARD_SLOPE};
pub use index::{
    bracket_for, handicap_index, index_from_rounds, number_of_differentials_used, Bracket,
    BRACKETS,
};
