//! Move classification and rationale generation

pub mod classifier;
pub mod rationale;

pub use classifier::{MoveType, classify_move, creates_fork};
pub use rationale::{Explanation, explain_move, rationale, score_summary};
