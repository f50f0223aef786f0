//! Q-learning agent that plays O against a human X
//!
//! The agent explores with an epsilon-greedy policy over its Q-table, learns
//! from each finished game with a backward credit-assignment pass, and after
//! a fixed number of real games switches permanently to exhaustive minimax.

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use super::{EpisodeHistory, QTable, SelfPlayEpisode, TrainingStatistics};
use crate::{
    config::QAgentConfig,
    error::{Error, Result},
    ports::Observer,
    search::{SearchDepth, search_root},
    tictactoe::{Board, GameOutcome, Player, StateKey},
};

/// Side the agent plays in real games
pub const AGENT_PLAYER: Player = Player::O;

/// Side the human plays in real games; always moves first
pub const HUMAN_PLAYER: Player = Player::X;

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Where the agent is in the real-game lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentPhase {
    Idle,
    AwaitingHumanMove,
    AgentThinking,
    Terminal(GameOutcome),
}

/// Summary handed back when a real game finishes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameReport {
    pub outcome: GameOutcome,
    /// Exploration rate after the end-of-game schedule step
    pub epsilon: f64,
    /// Whether the agent now plays perfect minimax
    pub unbeatable: bool,
    /// Real games completed since the last learning reset
    pub games: usize,
}

/// The agent's reply to a human move
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentMove {
    pub position: usize,
    /// Present when this move ended the game
    pub report: Option<GameReport>,
}

/// Tabula-rasa Q-learning opponent
#[derive(Debug, Clone)]
pub struct QLearningAgent {
    config: QAgentConfig,
    q_table: QTable,
    epsilon: f64,
    use_minimax: bool,
    pretrained: bool,
    board: Board,
    history: EpisodeHistory,
    phase: AgentPhase,
    stats: TrainingStatistics,
    rng: StdRng,
    rng_seed: Option<u64>,
}

impl QLearningAgent {
    /// Create an agent from a validated configuration.
    ///
    /// The agent starts [`AgentPhase::Idle`] with an empty table;
    /// pre-training runs lazily on the first [`reset_game`](Self::reset_game).
    pub fn new(config: QAgentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            q_table: QTable::new(config.learning_rate, config.discount_factor),
            epsilon: config.initial_epsilon,
            use_minimax: false,
            pretrained: false,
            board: Board::new(),
            history: EpisodeHistory::new(),
            phase: AgentPhase::Idle,
            stats: TrainingStatistics::new(),
            rng: build_rng(config.seed),
            rng_seed: config.seed,
            config,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        self
    }

    pub fn config(&self) -> &QAgentConfig {
        &self.config
    }

    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    pub fn stats(&self) -> &TrainingStatistics {
        &self.stats
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn phase(&self) -> AgentPhase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_pretrained(&self) -> bool {
        self.pretrained
    }

    /// Whether move selection has switched to exhaustive minimax
    pub fn is_unbeatable(&self) -> bool {
        self.use_minimax
    }

    /// How far epsilon has travelled from its start toward the floor, in percent
    pub fn learning_progress(&self) -> f64 {
        let span = self.config.initial_epsilon - self.config.min_epsilon;
        if span <= 0.0 {
            return 100.0;
        }
        let remaining = (self.epsilon - self.config.min_epsilon) / span;
        (100.0 * (1.0 - remaining)).clamp(0.0, 100.0)
    }

    /// Start a new real game with the human to move.
    ///
    /// Runs pre-training first if the table has not been populated since the
    /// last learning reset.
    pub fn reset_game(&mut self) {
        if !self.pretrained {
            self.pretrain();
        }
        self.board = Board::new();
        self.history.clear();
        self.set_phase(AgentPhase::AwaitingHumanMove);
    }

    /// Forget everything learned: table, epsilon, statistics and the minimax
    /// switch. Pre-training then runs again and a fresh game begins.
    pub fn reset_learning(&mut self) {
        self.q_table.clear();
        self.epsilon = self.config.initial_epsilon;
        self.stats.reset();
        self.use_minimax = false;
        self.pretrained = false;
        self.rng = build_rng(self.rng_seed);
        log::debug!("learning reset, epsilon back to {:.2}", self.epsilon);
        self.reset_game();
    }

    /// Apply the human's move.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] if the game has finished
    /// - [`Error::NotHumanTurn`] if the agent is to move or no game is running
    /// - [`Error::InvalidMove`] if the cell is occupied or out of range; the
    ///   agent's state is left untouched
    pub fn observe_human_move(&mut self, position: usize) -> Result<Option<GameReport>> {
        match self.phase {
            AgentPhase::AwaitingHumanMove => {}
            AgentPhase::Terminal(_) => return Err(Error::GameOver),
            AgentPhase::Idle | AgentPhase::AgentThinking => return Err(Error::NotHumanTurn),
        }
        if !self.board.is_empty(position) {
            return Err(Error::InvalidMove { position });
        }

        Ok(self.play(position, HUMAN_PLAYER))
    }

    /// Choose and apply the agent's move.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] if the game has finished
    /// - [`Error::NotAgentTurn`] if the human is to move or no game is running
    pub fn request_agent_move(&mut self) -> Result<AgentMove> {
        match self.phase {
            AgentPhase::AgentThinking => {}
            AgentPhase::Terminal(_) => return Err(Error::GameOver),
            AgentPhase::Idle | AgentPhase::AwaitingHumanMove => return Err(Error::NotAgentTurn),
        }

        let position = self.choose_action()?;
        let report = self.play(position, AGENT_PLAYER);
        Ok(AgentMove { position, report })
    }

    /// Populate the table with self-play before the first real game
    pub fn pretrain(&mut self) {
        let episodes = self.config.pretrain_episodes;
        log::info!("pre-training on {episodes} self-play episodes");
        for _ in 0..episodes {
            self.run_self_play_episode(self.config.pretrain_epsilon);
        }
        self.finish_pretraining();
    }

    /// Same as [`pretrain`](Self::pretrain), reporting each episode to observers
    pub fn pretrain_observed(&mut self, observers: &mut [Box<dyn Observer>]) -> Result<()> {
        let episodes = self.config.pretrain_episodes;
        log::info!("pre-training on {episodes} self-play episodes");
        for observer in observers.iter_mut() {
            observer.on_training_start(episodes)?;
        }
        for game_num in 0..episodes {
            let episode = self.run_self_play_episode(self.config.pretrain_epsilon);
            for observer in observers.iter_mut() {
                episode.replay_to(game_num, observer.as_mut())?;
            }
        }
        for observer in observers.iter_mut() {
            observer.on_training_end()?;
        }
        self.finish_pretraining();
        Ok(())
    }

    /// Play one game against itself and learn from it.
    ///
    /// Both sides act epsilon-greedily on the shared table at the given
    /// exploration rate; only O's moves are credited. Real-game statistics
    /// and the epsilon schedule are untouched.
    pub fn run_self_play_episode(&mut self, epsilon: f64) -> SelfPlayEpisode {
        let mut board = Board::new();
        let mut history = EpisodeHistory::new();
        let mut player = Player::X;

        while board.outcome().is_none() {
            let state = board.state_key();
            let legal = board.empty_positions();
            let Some(action) = self.epsilon_greedy(state, &legal, epsilon) else {
                break;
            };
            history.record(state, action, player);
            board = board.placed(action, player);
            player = player.opponent();
        }

        let outcome = board.outcome().unwrap_or(GameOutcome::Draw);
        self.learn_from_episode(&history, outcome);
        SelfPlayEpisode { history, outcome }
    }

    /// Backward credit assignment over a finished game.
    ///
    /// The running reward starts at the terminal reward for the agent's
    /// result. Each agent step, walked from last to first, is moved toward the
    /// running reward, and its new value becomes the reward for the step
    /// before it. Human steps are skipped.
    pub fn learn_from_episode(&mut self, history: &EpisodeHistory, outcome: GameOutcome) {
        let mut reward = match outcome {
            GameOutcome::Win(winner) if winner == AGENT_PLAYER => self.config.terminal_reward,
            GameOutcome::Win(_) => -self.config.terminal_reward,
            GameOutcome::Draw => 0.0,
        };

        for step in history.steps_by(AGENT_PLAYER).rev() {
            // NOTE: discount_factor is not applied; the updated value is
            // carried back undiscounted as the next reward.
            // Steps are keyed by the board before the move, not after it, so
            // each value sits on the state a greedy lookup reads.
            reward = self.q_table.update(step.state, step.action, reward);
            log::trace!(
                "credit state {} action {} -> {reward:.3}",
                step.state.value(),
                step.action
            );
        }
    }

    fn choose_action(&mut self) -> Result<usize> {
        if self.use_minimax {
            let search = search_root(&self.board, AGENT_PLAYER, SearchDepth::Unbounded)
                .ok_or(Error::NoValidMoves)?;
            return Ok(search.best_move);
        }
        let legal = self.board.empty_positions();
        self.epsilon_greedy(self.board.state_key(), &legal, self.epsilon)
            .ok_or(Error::NoValidMoves)
    }

    fn epsilon_greedy(&mut self, state: StateKey, legal: &[usize], epsilon: f64) -> Option<usize> {
        if legal.is_empty() {
            return None;
        }
        if self.rng.random::<f64>() < epsilon {
            Some(legal[self.rng.random_range(0..legal.len())])
        } else {
            self.q_table.greedy_action(state, legal)
        }
    }

    /// Record and apply a pre-validated move, then advance the phase
    fn play(&mut self, position: usize, player: Player) -> Option<GameReport> {
        self.history
            .record(self.board.state_key(), position, player);
        self.board = self.board.placed(position, player);

        match self.board.outcome() {
            Some(outcome) => Some(self.finish_game(outcome)),
            None => {
                let next = if player == HUMAN_PLAYER {
                    AgentPhase::AgentThinking
                } else {
                    AgentPhase::AwaitingHumanMove
                };
                self.set_phase(next);
                None
            }
        }
    }

    fn finish_game(&mut self, outcome: GameOutcome) -> GameReport {
        self.set_phase(AgentPhase::Terminal(outcome));
        let history = std::mem::take(&mut self.history);
        self.learn_from_episode(&history, outcome);
        self.history = history;

        self.stats.record(outcome, HUMAN_PLAYER);
        if self.stats.games >= self.config.games_until_minimax {
            self.epsilon = self.config.min_epsilon;
            if !self.use_minimax {
                log::info!(
                    "switching to minimax play after {} games",
                    self.stats.games
                );
            }
            self.use_minimax = true;
        } else {
            self.epsilon = (self.epsilon * self.config.epsilon_decay).max(self.config.min_epsilon);
            log::debug!("epsilon decayed to {:.3}", self.epsilon);
        }

        GameReport {
            outcome,
            epsilon: self.epsilon,
            unbeatable: self.use_minimax,
            games: self.stats.games,
        }
    }

    fn finish_pretraining(&mut self) {
        self.pretrained = true;
        log::info!(
            "pre-training finished, {} states in table",
            self.q_table.len()
        );
    }

    fn set_phase(&mut self, phase: AgentPhase) {
        log::debug!("agent phase {:?} -> {phase:?}", self.phase);
        self.phase = phase;
    }
}
