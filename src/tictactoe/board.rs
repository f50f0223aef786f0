//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{game::GameOutcome, lines::LineAnalyzer};

/// Number of cells on the board
pub const BOARD_SIZE: usize = 9;

/// Index of the center cell
pub const CENTER: usize = 4;

/// Indices of the four corner cells
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

const POSITION_NAMES: [&str; BOARD_SIZE] = [
    "top-left",
    "top-center",
    "top-right",
    "middle-left",
    "center",
    "middle-right",
    "bottom-left",
    "bottom-center",
    "bottom-right",
];

const SHORT_POSITION_NAMES: [&str; BOARD_SIZE] = ["TL", "TM", "TR", "ML", "C", "MR", "BL", "BM", "BR"];

/// Human-readable name of a cell, e.g. `top-left` for 0.
pub fn position_name(pos: usize) -> &'static str {
    POSITION_NAMES.get(pos).copied().unwrap_or("off-board")
}

/// Two-letter name of a cell as used in compact tree displays.
pub fn short_position_name(pos: usize) -> &'static str {
    SHORT_POSITION_NAMES.get(pos).copied().unwrap_or("??")
}

/// Whether `pos` is one of the four corners
pub fn is_corner(pos: usize) -> bool {
    CORNERS.contains(&pos)
}

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player occupying this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }

    fn digit(self) -> u16 {
        match self {
            Cell::Empty => 0,
            Cell::X => 1,
            Cell::O => 2,
        }
    }
}

/// A player in the game
///
/// Scores are always expressed from O's point of view: O maximizes and X
/// minimizes, regardless of who started a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// O is the maximizing side in the minimax score convention
    pub fn is_maximizer(self) -> bool {
        self == Player::O
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Packed base-3 encoding of a board (cell 0 is the least significant digit).
///
/// 3^9 = 19683 distinct values, so every board fits in a `u16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StateKey(u16);

impl StateKey {
    pub fn value(self) -> u16 {
        self.0
    }

    /// Decode the key back into a board
    pub fn to_board(self) -> Board {
        let mut cells = [Cell::Empty; BOARD_SIZE];
        let mut rest = self.0;
        for cell in &mut cells {
            *cell = match rest % 3 {
                1 => Cell::X,
                2 => Cell::O,
                _ => Cell::Empty,
            };
            rest /= 3;
        }
        Board { cells }
    }
}

/// The 3x3 grid, indices 0-8 in row-major order.
///
/// `Board` is `Copy` (9 bytes), so search code passes it by value instead of
/// mutating and reverting a shared buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Board { cells }
    }

    /// Parse a board from a 9-symbol string such as `"XX..O...."`.
    ///
    /// Whitespace (including newlines from a `Display` rendering) is ignored.
    ///
    /// # Errors
    ///
    /// Returns error if the string does not contain exactly 9 symbols or any
    /// symbol is not a valid cell representation.
    pub fn parse(s: &str) -> crate::Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != BOARD_SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_SIZE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_SIZE];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }
        Ok(Board { cells })
    }

    /// Build a board from per-cell symbols in the UI form `["X", "O", "", ...]`.
    ///
    /// # Errors
    ///
    /// Returns error if there are not exactly 9 symbols or one of them is not
    /// `"X"`, `"O"`, `""` or `" "`.
    pub fn from_symbols(symbols: &[&str]) -> crate::Result<Self> {
        if symbols.len() != BOARD_SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_SIZE,
                got: symbols.len(),
                context: symbols.join(","),
            });
        }

        let mut cells = [Cell::Empty; BOARD_SIZE];
        for (i, symbol) in symbols.iter().enumerate() {
            cells[i] = match *symbol {
                "" | " " => Cell::Empty,
                "X" | "x" => Cell::X,
                "O" | "o" => Cell::O,
                other => {
                    return Err(crate::Error::InvalidCellCharacter {
                        character: other.chars().next().unwrap_or(' '),
                        position: i,
                        context: symbols.join(","),
                    });
                }
            };
        }
        Ok(Board { cells })
    }

    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is on the board and empty
    pub fn is_empty(&self, pos: usize) -> bool {
        pos < BOARD_SIZE && self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Get legal moves in this position (empty cells when game not terminal)
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_positions()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Player whose turn it is under X-first rules
    pub fn next_player(&self) -> Player {
        let x = self.cells.iter().filter(|&&c| c == Cell::X).count();
        let o = self.cells.iter().filter(|&&c| c == Cell::O).count();
        if x == o { Player::X } else { Player::O }
    }

    /// Place `player`'s mark on `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if the cell is occupied or out of
    /// range; the board is left unchanged.
    pub fn apply_move(&mut self, pos: usize, player: Player) -> crate::Result<()> {
        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }
        self.cells[pos] = player.to_cell();
        Ok(())
    }

    /// Make a move and return a new board
    #[must_use = "with_move returns a new board; the original is unchanged"]
    pub fn with_move(&self, pos: usize, player: Player) -> crate::Result<Board> {
        let mut next = *self;
        next.apply_move(pos, player)?;
        Ok(next)
    }

    /// Successor board for a cell already known to be empty.
    pub(crate) fn placed(mut self, pos: usize, player: Player) -> Board {
        debug_assert!(self.is_empty(pos), "search placed a mark on occupied cell {pos}");
        self.cells[pos] = player.to_cell();
        self
    }

    /// Revert a cell to empty (undo of a speculative move)
    pub fn clear(&mut self, pos: usize) {
        if pos < BOARD_SIZE {
            self.cells[pos] = Cell::Empty;
        }
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// True iff no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Final result of the game, `None` while still in progress
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.winner() {
            Some(player) => Some(GameOutcome::Win(player)),
            None if self.is_full() => Some(GameOutcome::Draw),
            None => None,
        }
    }

    /// Packed integer key for table lookups
    pub fn state_key(&self) -> StateKey {
        let key = self
            .cells
            .iter()
            .rev()
            .fold(0u16, |acc, &cell| acc * 3 + cell.digit());
        StateKey(key)
    }

    /// 9-symbol string form of the board, e.g. `XX..O....`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
