//! Difficulty tiers and the move-selection policies behind them

pub mod analysis;
pub mod difficulty;
pub mod selector;

pub use analysis::MoveAnalysis;
pub use difficulty::Difficulty;
pub use selector::{
    EASY_BLOCK_SCORE, EASY_RANDOM_PROBABILITY, EASY_WIN_SCORE, MEDIUM_RANDOM_PROBABILITY,
    StrategySelector,
};
