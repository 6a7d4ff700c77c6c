//! Moves a player can make on their turn.

use crate::game::{Game, GameError};
use crate::player::Scorer;
use tracing::debug;

/// Seat-level action intents for the player at the turn cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayerAction {
    /// Exchange one hand card with one open card.
    SwapOne { hand_slot: usize, open_slot: usize },
    /// Exchange the whole hand with the open pile.
    SwapAll,
    Pass,
    /// Signal the last round; the match ends when the turn comes back.
    Knock,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("no hand slot {slot}")]
    HandSlot { slot: usize },
    #[error("no open slot {slot}")]
    OpenSlot { slot: usize },
    #[error("{by} has already knocked")]
    AlreadyKnocked { by: String },
}

impl Game {
    /// Apply `action` for the player at the turn cursor and rescore them.
    ///
    /// The turn does not move; callers follow up with [`Game::advance_turn`].
    /// Fails until the first [`Game::advance_turn`] has handed seat 0 its turn.
    /// Once every player has passed in a row the open pile is renewed if the
    /// draw pile allows it.
    pub fn apply_action(
        &mut self,
        action: PlayerAction,
        scorer: &dyn Scorer,
    ) -> Result<(), ActionError> {
        if self.finished {
            return Err(GameError::GameOver.into());
        }
        if !self.opened {
            return Err(GameError::TurnNotOpened.into());
        }
        let seat = self.current;

        match action {
            PlayerAction::SwapOne { hand_slot, open_slot } => {
                if hand_slot >= self.players[seat].hand.len() {
                    return Err(ActionError::HandSlot { slot: hand_slot });
                }
                if open_slot >= self.open.len() {
                    return Err(ActionError::OpenSlot { slot: open_slot });
                }
                std::mem::swap(&mut self.players[seat].hand[hand_slot], &mut self.open[open_slot]);
                self.passes = 0;
            }
            PlayerAction::SwapAll => {
                self.players[seat].hand.swap_with_slice(&mut self.open);
                self.passes = 0;
            }
            PlayerAction::Knock => {
                if let Some(p) = self.players.iter().find(|p| p.knocked) {
                    return Err(ActionError::AlreadyKnocked { by: p.name.clone() });
                }
                self.players[seat].knocked = true;
                self.passes = 0;
                debug!(seat, "player knocked");
            }
            PlayerAction::Pass => {
                self.passes += 1;
                if self.passes == self.players.len() {
                    self.passes = 0;
                    if self.enough_cards_left() {
                        self.renew_open_cards()?;
                    } else {
                        debug!(left = self.unused.len(), "everyone passed, draw pile exhausted");
                    }
                }
            }
        }

        self.players[seat].rescore(scorer);
        Ok(())
    }
}
