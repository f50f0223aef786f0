//! Move classification
//!
//! A chosen move is labelled by checking, in priority order: an immediate
//! win, a block of the opponent's immediate win, a fork, a fork block, and
//! finally the sign of the search score.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Board, LineAnalyzer, Player};

/// Label attached to a chosen move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveType {
    Winning,
    Blocking,
    Fork,
    ForkBlock,
    Advantageous,
    Neutral,
    Defensive,
    Random,
}

impl MoveType {
    pub const ALL: [MoveType; 8] = [
        MoveType::Winning,
        MoveType::Blocking,
        MoveType::Fork,
        MoveType::ForkBlock,
        MoveType::Advantageous,
        MoveType::Neutral,
        MoveType::Defensive,
        MoveType::Random,
    ];

    /// Stable tag used by the UI, e.g. `fork-block`
    pub fn as_str(self) -> &'static str {
        match self {
            MoveType::Winning => "winning",
            MoveType::Blocking => "blocking",
            MoveType::Fork => "fork",
            MoveType::ForkBlock => "fork-block",
            MoveType::Advantageous => "advantageous",
            MoveType::Neutral => "neutral",
            MoveType::Defensive => "defensive",
            MoveType::Random => "random",
        }
    }
}

impl fmt::Display for MoveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoveType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoveType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown move type '{s}'"))
    }
}

/// Classify `position` as played by `player` on `board` (the board before
/// the move), given the score the search assigned to it.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidMove`] if `position` is occupied or off the
/// board.
pub fn classify_move(
    board: &Board,
    position: usize,
    score: i32,
    player: Player,
) -> crate::Result<MoveType> {
    if !board.is_empty(position) {
        return Err(crate::Error::InvalidMove { position });
    }
    let opponent = player.opponent();

    let move_type = if board.placed(position, player).has_won(player) {
        MoveType::Winning
    } else if board.placed(position, opponent).has_won(opponent) {
        MoveType::Blocking
    } else if creates_fork(board, position, player) {
        MoveType::Fork
    } else if creates_fork(board, position, opponent) {
        MoveType::ForkBlock
    } else if score > 0 {
        MoveType::Advantageous
    } else if score == 0 {
        MoveType::Neutral
    } else {
        MoveType::Defensive
    };

    log::trace!("classified {position} for {player} (score {score}) as {move_type}");
    Ok(move_type)
}

/// Whether `player` marking `position` leaves two or more distinct empty
/// cells that would each complete a line for them.
pub fn creates_fork(board: &Board, position: usize, player: Player) -> bool {
    let after = board.placed(position, player);
    LineAnalyzer::count_winning_moves(after.cells(), player) >= 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::parse(s).unwrap()
    }

    #[test]
    fn test_winning_takes_priority_over_blocking() {
        // O can complete the middle row; X also threatens the top row
        let position = board("XX.OO.X..");
        assert_eq!(
            classify_move(&position, 5, 10, Player::O).unwrap(),
            MoveType::Winning
        );
        assert_eq!(
            classify_move(&position, 2, -5, Player::O).unwrap(),
            MoveType::Blocking
        );
    }

    #[test]
    fn test_fork() {
        // X...
        // .O.
        // ..X   X playing 6 threatens 3 and 7
        let position = board("X...O...X");
        assert!(creates_fork(&position, 6, Player::X));
        assert_eq!(
            classify_move(&position, 6, -7, Player::X).unwrap(),
            MoveType::Fork
        );
    }

    #[test]
    fn test_fork_block() {
        // O to move; X would fork by playing 6
        let position = board("X...O...X");
        assert_eq!(
            classify_move(&position, 6, 0, Player::O).unwrap(),
            MoveType::ForkBlock
        );
    }

    #[test]
    fn test_score_sign_fallback() {
        let empty = Board::new();
        assert_eq!(classify_move(&empty, 4, 3, Player::O).unwrap(), MoveType::Advantageous);
        assert_eq!(classify_move(&empty, 4, 0, Player::O).unwrap(), MoveType::Neutral);
        assert_eq!(classify_move(&empty, 4, -2, Player::O).unwrap(), MoveType::Defensive);
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let position = board("X........");
        assert_eq!(
            classify_move(&position, 0, 0, Player::O),
            Err(crate::Error::InvalidMove { position: 0 })
        );
    }

    #[test]
    fn test_tags_round_trip() {
        for move_type in MoveType::ALL {
            assert_eq!(move_type.as_str().parse::<MoveType>().unwrap(), move_type);
        }
        assert_eq!(MoveType::ForkBlock.to_string(), "fork-block");
    }
}
