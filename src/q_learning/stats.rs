//! Win/loss/tie bookkeeping for real games

use serde::{Deserialize, Serialize};

use crate::tictactoe::{GameOutcome, Player};

/// Cumulative rates after a given number of games, for charting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSample {
    pub games: usize,
    pub win: f64,
    pub loss: f64,
    pub tie: f64,
}

/// Outcome counts of real games, seen from the human's side
///
/// `wins` are games the human won against the agent; `win` rates in the
/// samples chart the human's success as the agent learns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingStatistics {
    pub wins: usize,
    pub losses: usize,
    pub ties: usize,
    pub games: usize,
    /// One sample per finished game
    pub history: Vec<RateSample>,
}

impl TrainingStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished game from `side`'s point of view and append a rate
    /// sample
    pub fn record(&mut self, outcome: GameOutcome, side: Player) {
        match outcome {
            GameOutcome::Win(winner) if winner == side => self.wins += 1,
            GameOutcome::Win(_) => self.losses += 1,
            GameOutcome::Draw => self.ties += 1,
        }
        self.games += 1;
        self.history.push(self.rates());
    }

    /// Current cumulative rates; all zero before the first game
    pub fn rates(&self) -> RateSample {
        let rate = |count: usize| {
            if self.games == 0 {
                0.0
            } else {
                count as f64 / self.games as f64
            }
        };
        RateSample {
            games: self.games,
            win: rate(self.wins),
            loss: rate(self.losses),
            tie: rate(self.ties),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
