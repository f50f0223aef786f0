//! Adversarial search and lookahead visualization

pub mod minimax;
pub mod tree;

pub use minimax::{
    Alternative, MEDIUM_SEARCH_DEPTH, RootSearch, SearchDepth, WIN_SCORE, minimax, search_root,
};
pub use tree::{
    DEFAULT_TREE_DEPTH, MoveTree, MoveTreeNode, NodeHighlight, build_move_tree,
    evaluate_position, positional_score,
};
