//! Batch self-play training for the Q-learning agent

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::Observer,
    q_learning::QLearningAgent,
    tictactoe::{GameOutcome, Player},
};

/// Training configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of self-play episodes
    pub episodes: usize,

    /// Episodes played between stop-flag checks
    pub batch_size: usize,

    /// Exploration rate used by both sides
    pub epsilon: f64,
}

impl TrainingConfig {
    pub fn new(episodes: usize) -> Self {
        Self {
            episodes,
            ..Self::default()
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::InvalidConfiguration {
                message: "batch_size must be at least 1".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(Error::InvalidConfiguration {
                message: format!("epsilon must be in [0, 1], got {}", self.epsilon),
            });
        }
        Ok(())
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: 5000,
            batch_size: 100,
            epsilon: 1.0,
        }
    }
}

/// Result of a training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Episodes actually played
    pub total_games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    /// Whether the stop flag ended the run before all episodes were played
    pub stopped: bool,
}

impl TrainingResult {
    /// Fraction of games won by O, the side the agent learns for
    pub fn o_win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.o_wins as f64 / self.total_games as f64
        }
    }

    pub fn draw_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.draws as f64 / self.total_games as f64
        }
    }
}

/// Shared flag that asks a running pipeline to stop before its next batch
///
/// An episode that has started always runs to completion.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    flag: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Self-play training pipeline
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
    stop: StopHandle,
}

impl TrainingPipeline {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
            stop: StopHandle::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Use an externally held stop flag
    pub fn with_stop(mut self, stop: StopHandle) -> Self {
        self.stop = stop;
        self
    }

    /// Handle that stops this pipeline
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Run self-play episodes on `agent` in batches.
    ///
    /// The stop flag is checked before every batch. Observers see every
    /// episode; the agent's real-game statistics are not touched.
    pub fn run(&mut self, agent: &mut QLearningAgent) -> Result<TrainingResult> {
        self.config.validate()?;

        let mut result = TrainingResult {
            total_games: 0,
            x_wins: 0,
            o_wins: 0,
            draws: 0,
            stopped: false,
        };

        for observer in &mut self.observers {
            observer.on_training_start(self.config.episodes)?;
        }

        while result.total_games < self.config.episodes {
            if self.stop.is_stopped() {
                result.stopped = true;
                log::info!("training stopped after {} episodes", result.total_games);
                break;
            }

            let batch_end = (result.total_games + self.config.batch_size).min(self.config.episodes);
            for game_num in result.total_games..batch_end {
                let episode = agent.run_self_play_episode(self.config.epsilon);
                for observer in &mut self.observers {
                    episode.replay_to(game_num, observer.as_mut())?;
                }

                match episode.outcome {
                    GameOutcome::Win(Player::X) => result.x_wins += 1,
                    GameOutcome::Win(Player::O) => result.o_wins += 1,
                    GameOutcome::Draw => result.draws += 1,
                }
            }
            result.total_games = batch_end;
            log::debug!(
                "batch done: {} games, O win rate {:.3}",
                result.total_games,
                result.o_win_rate()
            );
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QAgentConfig;

    fn agent() -> QLearningAgent {
        QLearningAgent::new(QAgentConfig::default().with_pretrain_episodes(0).with_seed(5)).unwrap()
    }

    #[test]
    fn test_runs_all_episodes() {
        let mut agent = agent();
        let mut pipeline = TrainingPipeline::new(TrainingConfig::new(250).with_batch_size(100));
        let result = pipeline.run(&mut agent).unwrap();

        assert_eq!(result.total_games, 250);
        assert_eq!(result.x_wins + result.o_wins + result.draws, 250);
        assert!(!result.stopped);
        assert_eq!(agent.stats().games, 0);
        assert!(!agent.q_table().is_empty());
    }

    #[test]
    fn test_stop_before_first_batch() {
        let mut agent = agent();
        let stop = StopHandle::new();
        stop.stop();
        let mut pipeline = TrainingPipeline::new(TrainingConfig::new(100)).with_stop(stop);
        let result = pipeline.run(&mut agent).unwrap();

        assert!(result.stopped);
        assert_eq!(result.total_games, 0);
        assert!(agent.q_table().is_empty());
    }

    #[test]
    fn test_rejects_zero_batch() {
        let mut agent = agent();
        let mut pipeline = TrainingPipeline::new(TrainingConfig::new(10).with_batch_size(0));
        assert!(matches!(
            pipeline.run(&mut agent),
            Err(Error::InvalidConfiguration { .. })
        ));
    }
}
