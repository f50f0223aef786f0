//! Exhaustive and depth-limited minimax search
//!
//! Scores follow a fixed convention: positive favors O, negative favors X.
//! O maximizes and X minimizes at every ply, whoever started the search.
//! A terminal position reached at depth `d` (plies below the root move)
//! scores `10 - d` for an O win and `d - 10` for an X win, so faster wins
//! and slower losses are preferred. Draws and depth cutoffs score 0.

use serde::{Deserialize, Serialize};

use crate::tictactoe::{BOARD_SIZE, Board, Player, position_name};

/// Magnitude of a win found immediately after the root move
pub const WIN_SCORE: i32 = 10;

/// Ply limit used by the medium tier
pub const MEDIUM_SEARCH_DEPTH: u32 = 4;

/// How far below the root move the search may look
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchDepth {
    Unbounded,
    Limited(u32),
}

impl SearchDepth {
    fn cuts_off(self, depth: u32) -> bool {
        match self {
            SearchDepth::Unbounded => false,
            SearchDepth::Limited(limit) => depth >= limit,
        }
    }
}

/// A legal root move together with the score the search assigned to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub position: usize,
    pub score: i32,
}

impl Alternative {
    pub fn name(&self) -> &'static str {
        position_name(self.position)
    }
}

/// Result of searching every legal move at the root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootSearch {
    pub best_move: usize,
    pub best_score: i32,
    /// Every legal root move in ascending cell order
    pub alternatives: Vec<Alternative>,
}

/// Minimax value of `board` with `depth` plies already played below the root
/// move. `maximizing` is true when O is to move.
pub fn minimax(board: Board, depth: u32, maximizing: bool, limit: SearchDepth) -> i32 {
    match board.winner() {
        Some(Player::O) => return WIN_SCORE - depth as i32,
        Some(Player::X) => return depth as i32 - WIN_SCORE,
        None => {}
    }
    if board.is_full() || limit.cuts_off(depth) {
        return 0;
    }

    let mover = if maximizing { Player::O } else { Player::X };
    let scores = (0..BOARD_SIZE)
        .filter(|&pos| board.is_empty(pos))
        .map(|pos| minimax(board.placed(pos, mover), depth + 1, !maximizing, limit));

    let best = if maximizing { scores.max() } else { scores.min() };
    best.unwrap_or(0)
}

/// Score every legal move for `player` and pick the extremal one.
///
/// O keeps the first strictly greater score, X the first strictly smaller,
/// so ties resolve to the lowest cell index. Returns `None` when the board
/// has no empty cell.
pub fn search_root(board: &Board, player: Player, limit: SearchDepth) -> Option<RootSearch> {
    let mut best: Option<(usize, i32)> = None;
    let mut alternatives = Vec::new();

    for position in board.empty_positions() {
        let score = minimax(
            board.placed(position, player),
            0,
            player == Player::X,
            limit,
        );
        alternatives.push(Alternative { position, score });

        let improves = match best {
            None => true,
            Some((_, best_score)) if player.is_maximizer() => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((position, score));
        }
    }

    best.map(|(best_move, best_score)| RootSearch {
        best_move,
        best_score,
        alternatives,
    })
}
