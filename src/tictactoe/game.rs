//! High-level game record keeping

use serde::{Deserialize, Serialize};

use super::board::{Board, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// The winning player, `None` for a draw
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(player),
            GameOutcome::Draw => None,
        }
    }
}

/// A game in progress or finished, with its move history.
///
/// X always moves first; the record enforces alternation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameRecord {
    board: Board,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl GameRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Player to move next
    pub fn to_move(&self) -> Player {
        match self.moves.last() {
            Some(last) => last.player.opponent(),
            None => Player::X,
        }
    }

    /// Play a move for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has finished and
    /// [`crate::Error::InvalidMove`] for an occupied or off-board cell. The
    /// record is unchanged on error.
    pub fn play(&mut self, position: usize) -> crate::Result<Option<GameOutcome>> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let player = self.to_move();
        self.board.apply_move(position, player)?;
        self.moves.push(Move { position, player });
        self.outcome = self.board.outcome();
        Ok(self.outcome)
    }

    /// Replay the boards seen before each move, followed by the final board.
    pub fn board_sequence(&self) -> Vec<Board> {
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        let mut board = Board::new();
        boards.push(board);
        for mv in &self.moves {
            board = board.placed(mv.position, mv.player);
            boards.push(board);
        }
        boards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_alternates_players() {
        let mut game = GameRecord::new();
        assert_eq!(game.to_move(), Player::X);
        game.play(4).unwrap();
        assert_eq!(game.to_move(), Player::O);
        game.play(0).unwrap();
        assert_eq!(game.moves()[1], Move { position: 0, player: Player::O });
    }

    #[test]
    fn test_invalid_move_leaves_record_unchanged() {
        let mut game = GameRecord::new();
        game.play(4).unwrap();
        assert_eq!(game.play(4), Err(crate::Error::InvalidMove { position: 4 }));
        assert_eq!(game.moves().len(), 1);
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_outcome_and_game_over() {
        let mut game = GameRecord::new();
        for pos in [0, 3, 1, 4] {
            assert_eq!(game.play(pos).unwrap(), None);
        }
        assert_eq!(game.play(2).unwrap(), Some(GameOutcome::Win(Player::X)));
        assert!(game.is_over());
        assert_eq!(game.play(8), Err(crate::Error::GameOver));
    }

    #[test]
    fn test_board_sequence() {
        let mut game = GameRecord::new();
        game.play(4).unwrap();
        game.play(0).unwrap();
        let boards = game.board_sequence();
        assert_eq!(boards.len(), 3);
        assert_eq!(boards[0], Board::new());
        assert_eq!(boards[2], *game.board());
    }
}
