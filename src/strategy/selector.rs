//! Difficulty-tiered move selection
//!
//! The selector keeps no state between calls besides its tier and random
//! number generator.

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{Difficulty, MoveAnalysis};
use crate::{
    config::EngineConfig,
    error::{Error, Result},
    explain::{MoveType, explain_move, rationale},
    search::{MEDIUM_SEARCH_DEPTH, SearchDepth, search_root},
    tictactoe::{BOARD_SIZE, Board, Player},
};

/// Probability that Easy ignores strategy entirely
pub const EASY_RANDOM_PROBABILITY: f64 = 0.7;

/// Probability that Medium plays a random move instead of searching
pub const MEDIUM_RANDOM_PROBABILITY: f64 = 0.15;

/// Score reported for an Easy-tier immediate win
pub const EASY_WIN_SCORE: i32 = 10;

/// Score reported for an Easy-tier block
pub const EASY_BLOCK_SCORE: i32 = 5;

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Maps a difficulty tier to a move-selection policy
#[derive(Debug, Clone)]
pub struct StrategySelector {
    difficulty: Difficulty,
    rng: StdRng,
    rng_seed: Option<u64>,
}

impl StrategySelector {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            rng: build_rng(None),
            rng_seed: None,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        let selector = Self::new(config.difficulty);
        match config.seed {
            Some(seed) => selector.with_seed(seed),
            None => selector,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        self
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Change the tier; applies from the next call
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Restart the random sequence (from the seed, if one was given)
    pub fn reset_rng(&mut self) {
        self.rng = build_rng(self.rng_seed);
    }

    /// Choose a move for `player` on `board` according to the current tier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] if the board already has a winner and
    /// [`Error::NoValidMoves`] if it is full.
    pub fn select_move(&mut self, board: &Board, player: Player) -> Result<MoveAnalysis> {
        if board.winner().is_some() {
            return Err(Error::GameOver);
        }
        let legal = board.empty_positions();
        if legal.is_empty() {
            return Err(Error::NoValidMoves);
        }

        let analysis = match self.difficulty {
            Difficulty::Easy => self.easy_move(board, player, &legal),
            Difficulty::Medium => {
                if self.rng.random::<f64>() < MEDIUM_RANDOM_PROBABILITY {
                    self.random_move(player, &legal)
                } else {
                    self.searched_move(
                        board,
                        player,
                        SearchDepth::Limited(MEDIUM_SEARCH_DEPTH),
                    )?
                }
            }
            Difficulty::Hard => self.searched_move(board, player, SearchDepth::Unbounded)?,
        };

        log::debug!(
            "{} tier chose {} for {player} ({}, score {})",
            self.difficulty,
            analysis.position,
            analysis.move_type,
            analysis.score
        );
        Ok(analysis)
    }

    fn easy_move(&mut self, board: &Board, player: Player, legal: &[usize]) -> MoveAnalysis {
        if self.rng.random::<f64>() < EASY_RANDOM_PROBABILITY {
            return self.random_move(player, legal);
        }

        match strategic_move(board, player) {
            Some((position, score, move_type)) => MoveAnalysis {
                position,
                player,
                score,
                move_type,
                rationale: rationale(move_type, position, player, Some(Difficulty::Easy)),
                alternatives: Vec::new(),
                difficulty: Difficulty::Easy,
            },
            None => self.random_move(player, legal),
        }
    }

    fn random_move(&mut self, player: Player, legal: &[usize]) -> MoveAnalysis {
        let position = legal[self.rng.random_range(0..legal.len())];
        MoveAnalysis {
            position,
            player,
            score: 0,
            move_type: MoveType::Random,
            rationale: rationale(MoveType::Random, position, player, Some(self.difficulty)),
            alternatives: Vec::new(),
            difficulty: self.difficulty,
        }
    }

    fn searched_move(
        &self,
        board: &Board,
        player: Player,
        depth: SearchDepth,
    ) -> Result<MoveAnalysis> {
        let search = search_root(board, player, depth).ok_or(Error::NoValidMoves)?;
        let explanation = explain_move(
            board,
            search.best_move,
            search.best_score,
            player,
            Some(self.difficulty),
        )?;

        Ok(MoveAnalysis {
            position: search.best_move,
            player,
            score: search.best_score,
            move_type: explanation.move_type,
            rationale: explanation.rationale,
            alternatives: search.alternatives,
            difficulty: self.difficulty,
        })
    }
}

impl Default for StrategySelector {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

/// Immediate win for `player`, else a block of the opponent's immediate win
fn strategic_move(board: &Board, player: Player) -> Option<(usize, i32, MoveType)> {
    let completes = |who: Player| {
        (0..BOARD_SIZE).find(|&pos| board.is_empty(pos) && board.placed(pos, who).has_won(who))
    };

    completes(player)
        .map(|pos| (pos, EASY_WIN_SCORE, MoveType::Winning))
        .or_else(|| completes(player.opponent()).map(|pos| (pos, EASY_BLOCK_SCORE, MoveType::Blocking)))
}
