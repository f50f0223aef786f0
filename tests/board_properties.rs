//! Board model invariants checked over every reachable position

mod common;

use std::collections::HashSet;

use tictactoe_ai::{
    Board, Cell, Error, GameOutcome, Player,
    tictactoe::{GameRecord, WINNING_LINES},
};

use common::{board, reachable_boards};

fn uniform_line_owner(board: &Board) -> Option<Player> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            cell.to_player()
        } else {
            None
        }
    })
}

#[test]
fn reachable_position_count() {
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn winner_matches_uniform_lines() {
    for board in reachable_boards() {
        assert_eq!(board.winner(), uniform_line_owner(&board), "{board}");
    }
}

#[test]
fn draw_means_full_without_winner() {
    for board in reachable_boards() {
        assert_eq!(
            board.is_draw(),
            board.is_full() && board.winner().is_none(),
            "{board}"
        );
        let expected = match board.winner() {
            Some(player) => Some(GameOutcome::Win(player)),
            None if board.is_full() => Some(GameOutcome::Draw),
            None => None,
        };
        assert_eq!(board.outcome(), expected);
        assert_eq!(board.is_terminal(), expected.is_some());
        if board.is_terminal() {
            assert!(board.legal_moves().is_empty());
        }
    }
}

#[test]
fn state_keys_are_unique_and_invertible() {
    let boards = reachable_boards();
    let keys: HashSet<_> = boards.iter().map(Board::state_key).collect();
    assert_eq!(keys.len(), boards.len());
    for board in boards {
        assert_eq!(board.state_key().to_board(), board);
        assert_eq!(Board::parse(&board.encode()).unwrap(), board);
    }
}

#[test]
fn ui_symbols_and_string_form_agree() {
    let from_symbols =
        Board::from_symbols(&["X", "X", "", "", "O", "", "", "", ""]).unwrap();
    assert_eq!(from_symbols, board("XX..O...."));
    assert_eq!(from_symbols.next_player(), Player::O);
}

#[test]
fn malformed_input_is_rejected() {
    assert!(matches!(
        Board::parse("XXO"),
        Err(Error::InvalidBoardLength { got: 3, .. })
    ));
    assert!(matches!(
        Board::parse("XX?.O...."),
        Err(Error::InvalidCellCharacter {
            character: '?',
            position: 2,
            ..
        })
    ));
    assert!(matches!(
        Board::from_symbols(&["X"; 8]),
        Err(Error::InvalidBoardLength { got: 8, .. })
    ));
}

mod game_record {
    use super::*;

    #[test]
    fn rejects_moves_after_the_end() {
        let mut game = GameRecord::new();
        for pos in [0, 3, 1, 4] {
            assert_eq!(game.play(pos).unwrap(), None);
        }
        assert_eq!(game.play(2).unwrap(), Some(GameOutcome::Win(Player::X)));
        assert_eq!(game.play(5), Err(Error::GameOver));
        assert_eq!(game.board_sequence().len(), 6);
    }

    #[test]
    fn occupied_cell_leaves_record_unchanged() {
        let mut game = GameRecord::new();
        game.play(4).unwrap();
        assert_eq!(game.play(4), Err(Error::InvalidMove { position: 4 }));
        assert_eq!(game.moves().len(), 1);
        assert_eq!(game.to_move(), Player::O);
    }
}
