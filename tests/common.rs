//! Common test utilities for the tictactoe-ai test suite.

#![allow(dead_code)]

use std::collections::HashSet;

use tictactoe_ai::{
    Board, GameOutcome, QAgentConfig, QLearningAgent,
    q_learning::{AgentPhase, GameReport},
};

/// Parse a board literal, panicking on malformed test input.
pub fn board(s: &str) -> Board {
    Board::parse(s).unwrap()
}

/// Every position reachable from the empty board with X moving first.
///
/// Terminal positions are included but not expanded.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];
    let mut boards = Vec::new();

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);
        if board.is_terminal() {
            continue;
        }
        let player = board.next_player();
        for pos in board.empty_positions() {
            stack.push(board.with_move(pos, player).unwrap());
        }
    }
    boards
}

/// Q-learning agent with a fixed seed and a short pre-training run.
pub fn seeded_agent(seed: u64, pretrain_episodes: usize) -> QLearningAgent {
    QLearningAgent::new(
        QAgentConfig::default()
            .with_pretrain_episodes(pretrain_episodes)
            .with_seed(seed),
    )
    .unwrap()
}

/// Play one real game in which the human always takes the lowest empty cell.
pub fn play_scripted_game(agent: &mut QLearningAgent) -> GameReport {
    agent.reset_game();
    loop {
        let human = agent.board().empty_positions()[0];
        if let Some(report) = agent.observe_human_move(human).unwrap() {
            return report;
        }
        if let Some(report) = agent.request_agent_move().unwrap().report {
            return report;
        }
    }
}

/// Whether the agent sits in a terminal phase with the given outcome.
pub fn is_terminal_with(agent: &QLearningAgent, outcome: GameOutcome) -> bool {
    agent.phase() == AgentPhase::Terminal(outcome)
}
