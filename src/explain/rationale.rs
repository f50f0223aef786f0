//! Human-readable move rationales
//!
//! Text depends only on the move type, the cell, the acting player and the
//! optional difficulty tier.

use serde::{Deserialize, Serialize};

use super::classifier::{MoveType, classify_move};
use crate::{
    strategy::Difficulty,
    tictactoe::{Board, CENTER, Player, is_corner, position_name},
};

/// Classification plus explanatory text for one move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub move_type: MoveType,
    pub rationale: String,
}

/// Classify a move and generate its rationale.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidMove`] if `position` is not an empty cell
/// of `board`.
pub fn explain_move(
    board: &Board,
    position: usize,
    score: i32,
    player: Player,
    difficulty: Option<Difficulty>,
) -> crate::Result<Explanation> {
    let move_type = classify_move(board, position, score, player)?;
    Ok(Explanation {
        move_type,
        rationale: rationale(move_type, position, player, difficulty),
    })
}

/// Fixed per-type phrasing for a move
pub fn rationale(
    move_type: MoveType,
    position: usize,
    player: Player,
    difficulty: Option<Difficulty>,
) -> String {
    let name = position_name(position);
    let body = match move_type {
        MoveType::Winning => format!("chose {name} to win the game!"),
        MoveType::Blocking => format!("chose {name} to block the opponent's winning move."),
        MoveType::Fork => format!("chose {name} to create a fork - multiple ways to win!"),
        MoveType::ForkBlock => {
            format!("chose {name} to prevent the opponent from creating a fork.")
        }
        MoveType::Advantageous => format!("chose {name} for strategic advantage."),
        MoveType::Neutral if position == CENTER => {
            "chose the center - the strongest strategic position.".to_string()
        }
        MoveType::Neutral if is_corner(position) => {
            format!("chose the {name} corner for strategic positioning.")
        }
        MoveType::Neutral => format!("chose {name} to maintain optimal defensive positioning."),
        MoveType::Random => format!("chose {name} with some unpredictability."),
        MoveType::Defensive => format!("chose {name} as the best defensive move available."),
    };

    match difficulty {
        Some(difficulty) => format!("AI {player} {body} ({})", difficulty.note()),
        None => format!("AI {player} {body}"),
    }
}

/// One-line reading of a search score for display next to the rationale
pub fn score_summary(score: i32) -> String {
    if score > 0 {
        format!("Score: +{score} (Winning position)")
    } else if score < 0 {
        format!("Score: {score} (Defensive move)")
    } else {
        "Score: 0 (Neutral - leads to draw)".to_string()
    }
}
