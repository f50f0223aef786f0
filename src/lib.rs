//! Tic-Tac-Toe decision engine
//!
//! This crate provides:
//! - Board model with win/draw detection and packed state keys
//! - Exhaustive and depth-limited minimax search
//! - Easy/Medium/Hard move selection with move classification and rationale
//! - A shallow heuristic move tree for visualizing lookahead
//! - A Q-learning opponent that pre-trains by self-play and switches to
//!   perfect play after a few real games
//! - A self-play training pipeline and a match session with a scoreboard
//!
//! Board cells are numbered 0-8 in row-major order. Scores are from O's
//! point of view: positive favors O, negative favors X.
//!
//! ```
//! use tictactoe_ai::{Board, Difficulty, MoveType, Player, StrategySelector};
//!
//! let board = Board::parse("XX..O....")?;
//! let mut selector = StrategySelector::new(Difficulty::Hard);
//! let analysis = selector.select_move(&board, Player::O)?;
//! assert_eq!(analysis.position, 2);
//! assert_eq!(analysis.move_type, MoveType::Blocking);
//! # Ok::<(), tictactoe_ai::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod explain;
pub mod pipeline;
pub mod ports;
pub mod q_learning;
pub mod search;
pub mod session;
pub mod strategy;
pub mod tictactoe;

pub use config::{EngineConfig, QAgentConfig};
pub use error::{Error, Result};
pub use explain::{Explanation, MoveType, classify_move, explain_move};
pub use q_learning::{AgentPhase, GameReport, QLearningAgent, TrainingStatistics};
pub use search::{MoveTree, SearchDepth, build_move_tree, search_root};
pub use session::{GameMode, MatchSession, Scoreboard};
pub use strategy::{Difficulty, MoveAnalysis, StrategySelector};
pub use tictactoe::{Board, Cell, GameOutcome, Player};
