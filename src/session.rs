//! Match session driving the tiered engine
//!
//! A session owns the game in progress, the move selector and a running
//! scoreboard. In human-vs-AI mode the human is X and always opens; in
//! AI-vs-AI mode both sides are played by the selector, one call per move.

use serde::{Deserialize, Serialize};

use crate::{
    config::EngineConfig,
    error::{Error, Result},
    search::{MoveTree, build_move_tree},
    strategy::{Difficulty, MoveAnalysis, StrategySelector},
    tictactoe::{Board, GameOutcome, GameRecord, Player},
};

/// Human player's side in human-vs-AI mode
const HUMAN_SIDE: Player = Player::X;

/// Who plays which side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    #[default]
    HumanVsAi,
    AiVsAi,
}

/// Cumulative results across games of a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// AI-vs-AI wins by X
    pub x_wins: usize,
    /// AI-vs-AI wins by O
    pub o_wins: usize,
    pub ties: usize,
    pub total_games: usize,
    /// Human-vs-AI wins by the human
    pub player_wins: usize,
    /// Human-vs-AI wins by the AI
    pub ai_wins: usize,
}

impl Scoreboard {
    fn record(&mut self, mode: GameMode, outcome: GameOutcome) {
        self.total_games += 1;
        match (mode, outcome) {
            (_, GameOutcome::Draw) => self.ties += 1,
            (GameMode::AiVsAi, GameOutcome::Win(Player::X)) => self.x_wins += 1,
            (GameMode::AiVsAi, GameOutcome::Win(Player::O)) => self.o_wins += 1,
            (GameMode::HumanVsAi, GameOutcome::Win(winner)) if winner == HUMAN_SIDE => {
                self.player_wins += 1
            }
            (GameMode::HumanVsAi, GameOutcome::Win(_)) => self.ai_wins += 1,
        }
    }
}

/// Snapshot of the session for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatus {
    pub active: bool,
    pub current_player: Player,
    pub outcome: Option<GameOutcome>,
    pub mode: GameMode,
    pub difficulty: Difficulty,
}

impl SessionStatus {
    /// One-line status text
    pub fn message(&self) -> String {
        match (self.outcome, self.mode) {
            (None, GameMode::HumanVsAi) if self.current_player == HUMAN_SIDE => {
                "Your turn!".to_string()
            }
            (None, GameMode::HumanVsAi) => "AI is thinking...".to_string(),
            (None, GameMode::AiVsAi) => format!("AI {}'s turn", self.current_player),
            (Some(GameOutcome::Draw), _) => {
                "It's a tie! Perfect play from both sides!".to_string()
            }
            (Some(GameOutcome::Win(winner)), GameMode::AiVsAi) => format!("AI {winner} wins!"),
            (Some(GameOutcome::Win(winner)), GameMode::HumanVsAi) if winner == HUMAN_SIDE => {
                "You won! Great job!".to_string()
            }
            (Some(GameOutcome::Win(_)), GameMode::HumanVsAi) => {
                format!("AI wins! {}", self.difficulty.rematch_hint())
            }
        }
    }
}

/// Everything produced by one AI move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiTurn {
    pub player: Player,
    pub analysis: MoveAnalysis,
    /// Lookahead from the board before the move, tagged with the chosen cell
    pub tree: MoveTree,
    /// Set when this move ended the game
    pub outcome: Option<GameOutcome>,
}

/// A sequence of games against (or between) the tiered engine
#[derive(Debug, Clone)]
pub struct MatchSession {
    config: EngineConfig,
    mode: GameMode,
    game: GameRecord,
    selector: StrategySelector,
    scoreboard: Scoreboard,
}

impl MatchSession {
    pub fn new(config: EngineConfig, mode: GameMode) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            selector: StrategySelector::from_config(&config),
            config,
            mode,
            game: GameRecord::new(),
            scoreboard: Scoreboard::default(),
        })
    }

    pub fn board(&self) -> &Board {
        self.game.board()
    }

    pub fn game(&self) -> &GameRecord {
        &self.game
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.selector.difficulty()
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            active: !self.game.is_over(),
            current_player: self.game.to_move(),
            outcome: self.game.outcome(),
            mode: self.mode,
            difficulty: self.selector.difficulty(),
        }
    }

    /// Clear the board; X moves first. The scoreboard is kept.
    pub fn reset(&mut self) {
        self.game = GameRecord::new();
    }

    /// Switch modes and start a fresh game
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    /// Change the tier; a game in progress continues under the new tier
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
        self.selector.set_difficulty(difficulty);
    }

    /// Play the human's move in human-vs-AI mode.
    ///
    /// # Errors
    ///
    /// [`Error::NotHumanTurn`] outside human-vs-AI mode or when O is to
    /// move, [`Error::GameOver`] after the game ended, and
    /// [`Error::InvalidMove`] for an occupied or off-board cell.
    pub fn human_move(&mut self, position: usize) -> Result<Option<GameOutcome>> {
        if self.mode != GameMode::HumanVsAi {
            return Err(Error::NotHumanTurn);
        }
        if self.game.is_over() {
            return Err(Error::GameOver);
        }
        if self.game.to_move() != HUMAN_SIDE {
            return Err(Error::NotHumanTurn);
        }

        let outcome = self.game.play(position)?;
        self.record(outcome);
        Ok(outcome)
    }

    /// Let the engine move for the side to move.
    ///
    /// # Errors
    ///
    /// [`Error::GameOver`] after the game ended and [`Error::NotAgentTurn`]
    /// when the human is to move in human-vs-AI mode.
    pub fn ai_move(&mut self) -> Result<AiTurn> {
        if self.game.is_over() {
            return Err(Error::GameOver);
        }
        let player = self.game.to_move();
        if self.mode == GameMode::HumanVsAi && player == HUMAN_SIDE {
            return Err(Error::NotAgentTurn);
        }

        let board = *self.game.board();
        let analysis = self.selector.select_move(&board, player)?;
        let tree = build_move_tree(&board, player, self.config.tree_depth)
            .with_chosen_move(analysis.position);
        let outcome = self.game.play(analysis.position)?;
        self.record(outcome);

        Ok(AiTurn {
            player,
            analysis,
            tree,
            outcome,
        })
    }

    fn record(&mut self, outcome: Option<GameOutcome>) {
        if let Some(outcome) = outcome {
            self.scoreboard.record(self.mode, outcome);
            log::debug!("game over: {outcome:?}, {:?}", self.scoreboard);
        }
    }
}
