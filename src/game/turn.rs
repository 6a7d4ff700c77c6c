use super::{Game, GameError};
use tracing::{debug, info};

/// What happened after the turn cursor moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TurnOutcome {
    /// `seat` is now the active player.
    Advanced { seat: usize },
    /// The cursor reached a player who had knocked; players are now ranked.
    GameOver,
}

impl Game {
    /// Move the cursor to the next seat, wrapping after the last one.
    ///
    /// Reaching a player who has knocked ends the game via [`Game::end_game`].
    /// Fails with [`GameError::GameOver`] once the game has ended.
    pub fn advance_turn(&mut self) -> Result<TurnOutcome, GameError> {
        if self.finished {
            return Err(GameError::GameOver);
        }
        self.opened = true;
        self.current += 1;
        if self.current == self.players.len() {
            self.current = 0;
        }

        if self.players[self.current].knocked {
            debug!(seat = self.current, "turn returned to the knocking player");
            self.end_game()?;
            return Ok(TurnOutcome::GameOver);
        }
        debug!(seat = self.current, player = %self.players[self.current].name, "turn advanced");
        Ok(TurnOutcome::Advanced { seat: self.current })
    }

    /// Rank players by descending score; ties keep their seat order.
    ///
    /// Fails with [`GameError::GameOver`] if the players were already ranked.
    pub fn end_game(&mut self) -> Result<(), GameError> {
        if self.finished {
            return Err(GameError::GameOver);
        }
        self.players.sort_by(|a, b| b.score.cmp(&a.score));
        self.finished = true;
        info!(
            winner = %self.players[0].name,
            score = self.players[0].score,
            "game over"
        );
        Ok(())
    }
}
