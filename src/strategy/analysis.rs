//! Result of a move decision

use serde::{Deserialize, Serialize};

use super::Difficulty;
use crate::{
    explain::{MoveType, score_summary},
    search::Alternative,
    tictactoe::{Player, position_name},
};

/// A chosen move with its score, classification and rationale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveAnalysis {
    pub position: usize,
    pub player: Player,
    /// Minimax value for searched moves, a fixed bonus for Easy-tier
    /// wins/blocks, 0 for random choices
    pub score: i32,
    pub move_type: MoveType,
    pub rationale: String,
    /// Root moves the search considered, in ascending cell order; empty
    /// when no search ran
    pub alternatives: Vec<Alternative>,
    pub difficulty: Difficulty,
}

impl MoveAnalysis {
    pub fn position_name(&self) -> &'static str {
        position_name(self.position)
    }

    pub fn score_summary(&self) -> String {
        score_summary(self.score)
    }

    /// Whether the move came from a search rather than a random or
    /// shortcut choice
    pub fn was_searched(&self) -> bool {
        !self.alternatives.is_empty()
    }
}
