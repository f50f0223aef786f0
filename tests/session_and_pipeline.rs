//! Match sessions, batch self-play training and the JSON boundary

mod common;

use anyhow::Result;
use tictactoe_ai::{
    Difficulty, EngineConfig, GameMode, GameOutcome, MatchSession, MoveType, Player,
    QAgentConfig, StrategySelector,
    pipeline::{MetricsObserver, StopHandle, TrainingConfig, TrainingPipeline},
    search::NodeHighlight,
};

use common::{board, play_scripted_game, seeded_agent};

mod sessions {
    use super::*;

    #[test]
    fn hard_ai_vs_ai_game_is_a_tie() -> Result<()> {
        let mut session = MatchSession::new(EngineConfig::default(), GameMode::AiVsAi)?;
        let mut turns = 0;
        loop {
            let turn = session.ai_move()?;
            turns += 1;
            assert_eq!(turn.tree.chosen_move, Some(turn.analysis.position));
            assert_eq!(turn.tree.max_depth, 2);
            if let Some(outcome) = turn.outcome {
                assert_eq!(outcome, GameOutcome::Draw);
                break;
            }
        }
        assert_eq!(turns, 9);

        let score = session.scoreboard();
        assert_eq!((score.ties, score.total_games), (1, 1));
        assert_eq!((score.x_wins, score.o_wins), (0, 0));
        assert!(!session.status().active);
        assert_eq!(
            session.status().message(),
            "It's a tie! Perfect play from both sides!"
        );
        Ok(())
    }

    #[test]
    fn human_cannot_beat_hard_ai() -> Result<()> {
        let mut session = MatchSession::new(EngineConfig::default(), GameMode::HumanVsAi)?;
        for _ in 0..3 {
            session.reset();
            while session.status().active {
                let human = session.board().empty_positions()[0];
                if session.human_move(human)?.is_some() {
                    break;
                }
                session.ai_move()?;
            }
        }
        let score = session.scoreboard();
        assert_eq!(score.total_games, 3);
        assert_eq!(score.player_wins, 0);
        assert_eq!(score.ai_wins + score.ties, 3);
        Ok(())
    }

    #[test]
    fn ai_turn_tree_marks_chosen_move() -> Result<()> {
        let mut session = MatchSession::new(EngineConfig::default(), GameMode::HumanVsAi)?;
        session.human_move(4)?;
        let turn = session.ai_move()?;

        assert_eq!(turn.player, Player::O);
        assert_eq!(turn.tree.explored_moves(), 8);
        let chosen = turn
            .tree
            .moves
            .iter()
            .find(|node| node.position == turn.analysis.position)
            .unwrap();
        assert_eq!(turn.tree.highlight(chosen), NodeHighlight::Chosen);
        assert_eq!(session.status().message(), "Your turn!");
        Ok(())
    }
}

mod training {
    use super::*;

    #[test]
    fn batches_cover_all_episodes() -> Result<()> {
        let mut agent = seeded_agent(31, 0);
        let mut pipeline = TrainingPipeline::new(TrainingConfig::new(320).with_batch_size(100))
            .with_observer(Box::new(MetricsObserver::new()));
        let result = pipeline.run(&mut agent)?;

        assert_eq!(result.total_games, 320);
        assert_eq!(result.x_wins + result.o_wins + result.draws, 320);
        assert!(!result.stopped);
        assert!(agent.q_table().nonzero_entries() > 0);
        assert_eq!(agent.stats().games, 0);
        Ok(())
    }

    #[test]
    fn external_stop_handle_halts_the_run() -> Result<()> {
        let mut agent = seeded_agent(31, 0);
        let stop = StopHandle::new();
        let mut pipeline = TrainingPipeline::new(TrainingConfig::new(1000)).with_stop(stop.clone());
        stop.stop();
        let result = pipeline.run(&mut agent)?;
        assert!(result.stopped);
        assert_eq!(result.total_games, 0);
        Ok(())
    }
}

mod json_boundary {
    use super::*;

    #[test]
    fn move_analysis_serializes_with_stable_tags() -> Result<()> {
        let analysis = StrategySelector::new(Difficulty::Hard)
            .select_move(&board("XX..O...."), Player::O)?;
        let json = serde_json::to_value(&analysis)?;

        assert_eq!(json["position"], 2);
        assert_eq!(json["move_type"], "blocking");
        assert_eq!(json["difficulty"], "hard");
        assert_eq!(json["player"], "O");
        assert_eq!(json["alternatives"].as_array().map(Vec::len), Some(6));

        let back: tictactoe_ai::MoveAnalysis = serde_json::from_value(json)?;
        assert_eq!(back, analysis);
        Ok(())
    }

    #[test]
    fn enums_use_ui_spellings() -> Result<()> {
        assert_eq!(serde_json::to_string(&MoveType::ForkBlock)?, "\"fork-block\"");
        assert_eq!(serde_json::to_string(&GameMode::HumanVsAi)?, "\"human-vs-ai\"");
        let difficulty: Difficulty = serde_json::from_str("\"medium\"")?;
        assert_eq!(difficulty, Difficulty::Medium);
        Ok(())
    }

    #[test]
    fn configs_and_statistics_round_trip() -> Result<()> {
        let config = QAgentConfig::default().with_seed(5);
        let json = serde_json::to_string(&config)?;
        assert_eq!(serde_json::from_str::<QAgentConfig>(&json)?, config);

        let mut agent = seeded_agent(8, 5);
        play_scripted_game(&mut agent);
        let stats = serde_json::to_value(agent.stats())?;
        assert_eq!(stats["games"], 1);
        assert_eq!(stats["history"].as_array().map(Vec::len), Some(1));

        let table = serde_json::to_string(agent.q_table())?;
        assert!(table.contains("learning_rate"));
        Ok(())
    }
}
