//! Move classification, rationale text and lookahead trees

mod common;

use tictactoe_ai::{
    Difficulty, Error, MoveType, Player, build_move_tree, classify_move, explain_move,
    search::NodeHighlight,
};

use common::board;

mod classification {
    use super::*;

    #[test]
    fn win_outranks_block() {
        // Cell 2 completes O's right column and also stops X's top row.
        let board = board("XX...O..O");
        assert_eq!(classify_move(&board, 2, 10, Player::O).unwrap(), MoveType::Winning);
    }

    #[test]
    fn block_outranks_fork() {
        assert_eq!(
            classify_move(&board("XX..O...."), 2, 0, Player::O).unwrap(),
            MoveType::Blocking
        );
    }

    #[test]
    fn fork_and_fork_block() {
        // O at 8 threatens both 4 and 7.
        assert_eq!(
            classify_move(&board("OX.X..O.."), 8, 9, Player::O).unwrap(),
            MoveType::Fork
        );
        // Same geometry for X; O taking 8 denies the fork.
        assert_eq!(
            classify_move(&board("XO.O..X.."), 8, 0, Player::O).unwrap(),
            MoveType::ForkBlock
        );
    }

    #[test]
    fn falls_back_to_score_sign() {
        let empty = board(".........");
        assert_eq!(classify_move(&empty, 1, 3, Player::O).unwrap(), MoveType::Advantageous);
        assert_eq!(classify_move(&empty, 1, 0, Player::O).unwrap(), MoveType::Neutral);
        assert_eq!(classify_move(&empty, 1, -2, Player::O).unwrap(), MoveType::Defensive);
    }

    #[test]
    fn occupied_cell_is_an_error() {
        assert_eq!(
            classify_move(&board("X........"), 0, 0, Player::O),
            Err(Error::InvalidMove { position: 0 })
        );
    }
}

mod rationale_text {
    use super::*;

    #[test]
    fn names_the_cell_and_tier() {
        let explanation = explain_move(
            &board("XX..O...."),
            2,
            0,
            Player::O,
            Some(Difficulty::Medium),
        )
        .unwrap();
        assert_eq!(explanation.move_type, MoveType::Blocking);
        assert!(explanation.rationale.starts_with("AI O chose top-right"));
        assert!(explanation.rationale.ends_with("(Medium: Strategic thinking)"));
    }

    #[test]
    fn neutral_center_has_its_own_phrase() {
        let explanation = explain_move(&board("........."), 4, 0, Player::X, None).unwrap();
        assert_eq!(explanation.move_type, MoveType::Neutral);
        assert!(explanation.rationale.contains("the center"));
    }
}

mod move_tree {
    use super::*;

    #[test]
    fn two_ply_tree_from_empty_board() {
        let tree = build_move_tree(&board("........."), Player::O, 2);
        assert_eq!(tree.explored_moves(), 9);
        assert_eq!(tree.node_count(), 9 + 9 * 8);
        assert!(tree.moves.iter().all(|node| node.player == Player::O));
        assert!(
            tree.moves
                .iter()
                .flat_map(|node| &node.children)
                .all(|child| child.player == Player::X && child.children.is_empty())
        );
    }

    #[test]
    fn heuristic_prefers_center_then_corners() {
        let tree = build_move_tree(&board("........."), Player::O, 1);
        let order: Vec<usize> = tree.sorted_moves().iter().map(|n| n.position).collect();
        assert_eq!(order, vec![4, 0, 2, 6, 8, 1, 3, 5, 7]);
        assert_eq!(tree.best_score(), 3);
    }

    #[test]
    fn chosen_move_is_tagged_apart_from_heuristic_best() {
        let tree = build_move_tree(&board("........."), Player::O, 2).with_chosen_move(0);
        let node = |pos: usize| tree.moves.iter().find(|n| n.position == pos).unwrap();

        assert_eq!(tree.highlight(node(0)), NodeHighlight::Chosen);
        assert_eq!(tree.highlight(node(4)), NodeHighlight::HeuristicBest);
        assert_eq!(tree.highlight(node(1)), NodeHighlight::Plain);
    }

    #[test]
    fn winning_moves_are_leaves() {
        let tree = build_move_tree(&board("XX.OO...."), Player::X, 2);
        let win = tree.moves.iter().find(|n| n.position == 2).unwrap();
        assert_eq!(win.score, -10);
        assert!(win.children.is_empty());
        assert_eq!(tree.heuristic_best().map(|n| n.position), Some(5));
    }
}
