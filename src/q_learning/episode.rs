//! Move histories recorded during a game

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::Observer,
    tictactoe::{GameOutcome, Player, StateKey},
};

/// One recorded move: the board state it was played from and the cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeStep {
    /// Packed board state before the move
    pub state: StateKey,
    pub action: usize,
    pub actor: Player,
}

/// Ordered move history of a single game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeHistory {
    steps: Vec<EpisodeStep>,
}

impl EpisodeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, state: StateKey, action: usize, actor: Player) {
        self.steps.push(EpisodeStep {
            state,
            action,
            actor,
        });
    }

    pub fn steps(&self) -> &[EpisodeStep] {
        &self.steps
    }

    /// Steps taken by `player`, in play order
    pub fn steps_by(&self, player: Player) -> impl DoubleEndedIterator<Item = &EpisodeStep> {
        self.steps.iter().filter(move |step| step.actor == player)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }
}

/// A finished self-play game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlayEpisode {
    pub history: EpisodeHistory,
    pub outcome: GameOutcome,
}

impl SelfPlayEpisode {
    /// Replay the episode's lifecycle events to an observer
    pub fn replay_to(&self, game_num: usize, observer: &mut dyn Observer) -> Result<()> {
        observer.on_game_start(game_num)?;
        for (step_num, step) in self.history.steps().iter().enumerate() {
            observer.on_move(game_num, step_num, &step.state.to_board(), step.action)?;
        }
        observer.on_game_end(game_num, self.outcome)
    }
}
