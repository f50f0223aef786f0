//! Tabula-rasa Q-learning opponent
//!
//! The agent keeps a table of action values keyed by packed board state and
//! chooses moves epsilon-greedily while it learns. Credit assignment walks a
//! finished game backward and chains the terminal reward through the agent's
//! moves. Exploration decays after each real game, and after a fixed number
//! of games the agent stops consulting the table and plays exhaustive
//! minimax.
//!
//! ## Usage Example
//!
//! ```no_run
//! use tictactoe_ai::{QAgentConfig, QLearningAgent};
//!
//! let mut agent = QLearningAgent::new(QAgentConfig::default().with_seed(7))?;
//! agent.reset_game(); // pre-trains on first use
//!
//! agent.observe_human_move(4)?;
//! let reply = agent.request_agent_move()?;
//! println!("agent played {}", reply.position);
//! # Ok::<(), tictactoe_ai::Error>(())
//! ```

pub mod agent;
pub mod episode;
pub mod q_table;
pub mod stats;

pub use agent::{AGENT_PLAYER, AgentMove, AgentPhase, GameReport, HUMAN_PLAYER, QLearningAgent};
pub use episode::{EpisodeHistory, EpisodeStep, SelfPlayEpisode};
pub use q_table::{ActionValues, QTable};
pub use stats::{RateSample, TrainingStatistics};
