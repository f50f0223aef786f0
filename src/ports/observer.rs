//! Observer port - abstraction for watching self-play training
//!
//! This port lets progress reporting and metrics collection hook into
//! pre-training and the batch pipeline without coupling either to a
//! particular output.

use crate::{
    Result,
    tictactoe::{Board, GameOutcome},
};

/// Observer trait for monitoring training
///
/// # Event Sequence
///
/// 1. `on_training_start(total_games)` - Once at the beginning
/// 2. For each game:
///    - `on_game_start(game_num)`
///    - `on_move(...)` - For each move in the game
///    - `on_game_end(game_num, outcome)`
/// 3. `on_training_end()` - Once at the end
///
/// # Examples
///
/// ```
/// use tictactoe_ai::{ports::Observer, tictactoe::GameOutcome};
///
/// struct DrawCounter {
///     draws: usize,
/// }
///
/// impl Observer for DrawCounter {
///     fn on_game_end(&mut self, _game_num: usize, outcome: GameOutcome) -> tictactoe_ai::Result<()> {
///         if outcome == GameOutcome::Draw {
///             self.draws += 1;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called when training starts with the number of games planned.
    fn on_training_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called when a game starts (`game_num` is 0-based).
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        Ok(())
    }

    /// Called for each move, with the board as it was before the move.
    fn on_move(
        &mut self,
        _game_num: usize,
        _step_num: usize,
        _board: &Board,
        _position: usize,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when a game reaches a terminal position.
    fn on_game_end(&mut self, _game_num: usize, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }

    /// Called once after the last game, or after an early stop.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
