//! Configuration types for the decision engine and the learning agent.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    search::DEFAULT_TREE_DEPTH,
    strategy::Difficulty,
};

/// Configuration for the tiered decision engine.
///
/// # Examples
///
/// ```
/// use tictactoe_ai::{Difficulty, EngineConfig};
///
/// let config = EngineConfig::new(Difficulty::Medium)
///     .with_tree_depth(3)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Difficulty tier used for move selection
    pub difficulty: Difficulty,
    /// Lookahead depth of the visualization tree
    pub tree_depth: u32,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            tree_depth: DEFAULT_TREE_DEPTH,
            seed: None,
        }
    }

    pub fn with_tree_depth(mut self, depth: u32) -> Self {
        self.tree_depth = depth;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.tree_depth == 0 {
            return Err(invalid("tree_depth must be at least 1"));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

/// Configuration for the Q-learning agent.
///
/// The defaults give a full learning rate, epsilon
/// starting at 1.0 and decaying by 0.7 per real game down to 0.05, a switch
/// to perfect play after three real games, and 2000 self-play episodes of
/// pre-training.
///
/// # Examples
///
/// ```
/// use tictactoe_ai::QAgentConfig;
///
/// let config = QAgentConfig::default()
///     .with_pretrain_episodes(200)
///     .with_seed(42);
/// assert_eq!(config.games_until_minimax, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QAgentConfig {
    /// Learning rate α
    pub learning_rate: f64,
    /// Discount factor γ (stored, not applied by the backward pass)
    pub discount_factor: f64,
    /// Exploration rate at the start of a learning run
    pub initial_epsilon: f64,
    /// Multiplicative decay applied after each real game
    pub epsilon_decay: f64,
    /// Exploration floor
    pub min_epsilon: f64,
    /// Real games after which the agent plays perfect minimax
    pub games_until_minimax: usize,
    /// Self-play episodes run before the first real game
    pub pretrain_episodes: usize,
    /// Fixed exploration rate used during pre-training
    pub pretrain_epsilon: f64,
    /// Magnitude of the terminal reward (+ for an agent win, - for a loss)
    pub terminal_reward: f64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl QAgentConfig {
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_discount_factor(mut self, discount_factor: f64) -> Self {
        self.discount_factor = discount_factor;
        self
    }

    pub fn with_epsilon_schedule(mut self, initial: f64, decay: f64, min: f64) -> Self {
        self.initial_epsilon = initial;
        self.epsilon_decay = decay;
        self.min_epsilon = min;
        self
    }

    pub fn with_games_until_minimax(mut self, games: usize) -> Self {
        self.games_until_minimax = games;
        self
    }

    pub fn with_pretrain_episodes(mut self, episodes: usize) -> Self {
        self.pretrain_episodes = episodes;
        self
    }

    pub fn with_pretrain_epsilon(mut self, epsilon: f64) -> Self {
        self.pretrain_epsilon = epsilon;
        self
    }

    pub fn with_terminal_reward(mut self, reward: f64) -> Self {
        self.terminal_reward = reward;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(invalid(format!(
                "learning_rate must be in (0, 1], got {}",
                self.learning_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.discount_factor) {
            return Err(invalid(format!(
                "discount_factor must be in [0, 1], got {}",
                self.discount_factor
            )));
        }
        for (name, value) in [
            ("initial_epsilon", self.initial_epsilon),
            ("min_epsilon", self.min_epsilon),
            ("pretrain_epsilon", self.pretrain_epsilon),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(format!("{name} must be in [0, 1], got {value}")));
            }
        }
        if self.min_epsilon > self.initial_epsilon {
            return Err(invalid(format!(
                "min_epsilon ({}) exceeds initial_epsilon ({})",
                self.min_epsilon, self.initial_epsilon
            )));
        }
        if !(self.epsilon_decay > 0.0 && self.epsilon_decay <= 1.0) {
            return Err(invalid(format!(
                "epsilon_decay must be in (0, 1], got {}",
                self.epsilon_decay
            )));
        }
        if !(self.terminal_reward.is_finite() && self.terminal_reward > 0.0) {
            return Err(invalid(format!(
                "terminal_reward must be positive and finite, got {}",
                self.terminal_reward
            )));
        }
        Ok(())
    }
}

impl Default for QAgentConfig {
    fn default() -> Self {
        Self {
            learning_rate: 1.0,
            discount_factor: 0.9,
            initial_epsilon: 1.0,
            epsilon_decay: 0.7,
            min_epsilon: 0.05,
            games_until_minimax: 3,
            pretrain_episodes: 2000,
            pretrain_epsilon: 1.0,
            terminal_reward: 10.0,
            seed: None,
        }
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidConfiguration {
        message: message.into(),
    }
}
