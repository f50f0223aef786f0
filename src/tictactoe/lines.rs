//! Winning line analysis for Tic-Tac-Toe

use std::collections::HashSet;

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Threat and completion checks over [`WINNING_LINES`]
pub struct LineAnalyzer;

impl LineAnalyzer {
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let mark = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|&[a, b, c]| cells[a] == mark && cells[b] == mark && cells[c] == mark)
    }

    /// Empty cells that would complete a line for `player` right now
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> HashSet<usize> {
        WINNING_LINES
            .iter()
            .filter_map(|line| Self::completion_cell(cells, player, line))
            .collect()
    }

    /// Number of distinct empty cells that would each complete a line
    pub fn count_winning_moves(cells: &[Cell; 9], player: Player) -> usize {
        Self::winning_moves(cells, player).len()
    }

    /// The single empty cell of a line holding two of `player`'s marks
    fn completion_cell(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
        let mark = player.to_cell();
        let owned = line.iter().filter(|&&idx| cells[idx] == mark).count();
        let mut empty = line.iter().copied().filter(|&idx| cells[idx] == Cell::Empty);
        match (owned, empty.next(), empty.next()) {
            (2, Some(idx), None) => Some(idx),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Board;

    fn cells(s: &str) -> [Cell; 9] {
        *Board::parse(s).unwrap().cells()
    }

    #[test]
    fn test_has_won_by_line_kind() {
        assert!(LineAnalyzer::has_won(&cells("XXXOO...."), Player::X));
        assert!(LineAnalyzer::has_won(&cells("O..XO.XXO"), Player::O));
        assert!(LineAnalyzer::has_won(&cells("X.OXO.O.X"), Player::O));
        assert!(!LineAnalyzer::has_won(&cells("XXOOOXXOX"), Player::X));
    }

    #[test]
    fn test_completion_cells() {
        let moves = LineAnalyzer::winning_moves(&cells("X.X......"), Player::X);
        assert_eq!(moves, HashSet::from([1]));

        let fork = LineAnalyzer::winning_moves(&cells("XX.X....."), Player::X);
        assert_eq!(fork, HashSet::from([2, 6]));
    }

    #[test]
    fn test_shared_completion_cell_counts_once() {
        // Cell 4 completes both diagonals
        assert_eq!(LineAnalyzer::count_winning_moves(&cells("X.X...X.X"), Player::X), 5);
    }

    #[test]
    fn test_blocked_line_is_not_a_threat() {
        let blocked = cells("XXO......");
        assert!(LineAnalyzer::winning_moves(&blocked, Player::X).is_empty());
        assert!(LineAnalyzer::winning_moves(&blocked, Player::O).is_empty());
    }
}
