//! Shallow lookahead tree for visualizing the search space
//!
//! The tree is scored with a cheap positional heuristic, not with minimax.
//! It shows a plausible lookahead next to the decision engine's choice; the
//! two may disagree.

use serde::{Deserialize, Serialize};

use super::minimax::WIN_SCORE;
use crate::tictactoe::{Board, CENTER, CORNERS, Cell, Player};

/// Default number of plies shown in the tree
pub const DEFAULT_TREE_DEPTH: u32 = 2;

const CENTER_WEIGHT: i32 = 3;
const CORNER_WEIGHT: i32 = 2;

/// One move in the lookahead tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveTreeNode {
    pub position: usize,
    pub score: i32,
    pub player: Player,
    /// Replies in ascending cell order; empty at the depth limit or when
    /// this move ends the game
    pub children: Vec<MoveTreeNode>,
}

/// How a root-level node should be emphasized when displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeHighlight {
    /// The move the decision engine actually played
    Chosen,
    /// The heuristic favorite, when it differs from the chosen move
    HeuristicBest,
    Plain,
}

/// Lookahead tree rooted at the current position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveTree {
    pub player: Player,
    pub max_depth: u32,
    /// Root moves in ascending cell order
    pub moves: Vec<MoveTreeNode>,
    pub chosen_move: Option<usize>,
}

/// Build a lookahead tree of `max_depth` plies for `player` to move.
pub fn build_move_tree(board: &Board, player: Player, max_depth: u32) -> MoveTree {
    MoveTree {
        player,
        max_depth,
        moves: expand(board, player, 0, max_depth),
        chosen_move: None,
    }
}

/// Children of `board` for `player`, down to `max_depth` plies.
///
/// A move that ends the game becomes a leaf even above the depth limit;
/// replies are never listed below a finished position.
fn expand(board: &Board, player: Player, depth: u32, max_depth: u32) -> Vec<MoveTreeNode> {
    if depth >= max_depth {
        return Vec::new();
    }

    board
        .empty_positions()
        .into_iter()
        .map(|position| {
            let next = board.placed(position, player);
            let children = if next.is_terminal() {
                Vec::new()
            } else {
                expand(&next, player.opponent(), depth + 1, max_depth)
            };
            MoveTreeNode {
                position,
                score: evaluate_position(&next, depth),
                player,
                children,
            }
        })
        .collect()
}

/// Heuristic value of a position reached `depth` plies below the root.
///
/// Wins and losses use the minimax scale; otherwise O earns +3 for the center
/// and +2 per corner, X the mirror penalties.
pub fn evaluate_position(board: &Board, depth: u32) -> i32 {
    match board.winner() {
        Some(Player::O) => WIN_SCORE - depth as i32,
        Some(Player::X) => depth as i32 - WIN_SCORE,
        None if board.is_full() => 0,
        None => positional_score(board),
    }
}

/// Center and corner occupancy score, positive for O
pub fn positional_score(board: &Board) -> i32 {
    let weight = |cell: Cell, value: i32| match cell {
        Cell::O => value,
        Cell::X => -value,
        Cell::Empty => 0,
    };

    weight(board.get(CENTER), CENTER_WEIGHT)
        + CORNERS
            .iter()
            .map(|&pos| weight(board.get(pos), CORNER_WEIGHT))
            .sum::<i32>()
}

impl MoveTree {
    /// Tag the move the decision engine played
    pub fn with_chosen_move(mut self, position: usize) -> Self {
        self.chosen_move = Some(position);
        self
    }

    /// Root moves sorted by descending score; equal scores keep cell order
    pub fn sorted_moves(&self) -> Vec<&MoveTreeNode> {
        let mut sorted: Vec<&MoveTreeNode> = self.moves.iter().collect();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));
        sorted
    }

    /// Highest-scoring root move under the heuristic
    pub fn heuristic_best(&self) -> Option<&MoveTreeNode> {
        self.sorted_moves().into_iter().next()
    }

    pub fn best_score(&self) -> i32 {
        self.heuristic_best().map_or(0, |node| node.score)
    }

    /// Number of root moves explored
    pub fn explored_moves(&self) -> usize {
        self.moves.len()
    }

    /// Total number of nodes at every level
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[MoveTreeNode]) -> usize {
            nodes.iter().map(|n| 1 + count(&n.children)).sum()
        }
        count(&self.moves)
    }

    /// Display emphasis for a root-level node
    pub fn highlight(&self, node: &MoveTreeNode) -> NodeHighlight {
        if self.chosen_move == Some(node.position) {
            NodeHighlight::Chosen
        } else if self
            .heuristic_best()
            .is_some_and(|best| best.position == node.position)
        {
            NodeHighlight::HeuristicBest
        } else {
            NodeHighlight::Plain
        }
    }
}
