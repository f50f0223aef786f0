//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;

pub use board::{
    BOARD_SIZE, Board, CENTER, CORNERS, Cell, Player, StateKey, is_corner, position_name,
    short_position_name,
};
pub use game::{GameOutcome, GameRecord, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
