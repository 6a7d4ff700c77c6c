use super::{Game, GameError};
use crate::deck::{DeckDefinition, Shuffler};
use crate::player::Scorer;
use tracing::{debug, warn};

impl Game {
    /// Fill the draw pile with a shuffled deck, deal every hand and seed the open pile.
    ///
    /// Hands are dealt player-major from the front of the draw pile: seat 0 gets
    /// the first `hand_size` cards, seat 1 the next, and so on. Each player is
    /// rescored once their hand is full. The capacity check runs after the
    /// shuffle and before any card moves, so a failure never leaves a partial deal.
    pub fn distribute_cards(
        &mut self,
        deck: &dyn DeckDefinition,
        shuffler: &mut dyn Shuffler,
        scorer: &dyn Scorer,
    ) -> Result<(), GameError> {
        self.unused.extend(deck.cards());
        shuffler.shuffle(self.unused.make_contiguous());

        let required = self.hand_size() + self.players.len() * self.hand_size();
        let available = self.unused.len();
        if available < required {
            warn!(required, available, "deck too small to deal");
            return Err(GameError::InsufficientCards { required, available });
        }

        for player in &mut self.players {
            for slot in &mut player.hand {
                *slot = self.unused.pop_front();
            }
            player.rescore(scorer);
        }
        debug!(players = self.players.len(), left = self.unused.len(), "hands dealt");

        self.renew_open_cards()
    }

    /// Whether the draw pile can refill every open slot.
    pub fn enough_cards_left(&self) -> bool {
        self.unused.len() >= self.open.len()
    }

    /// Replace every open slot, front to back, with cards from the front of the draw pile.
    ///
    /// Leaves the open pile untouched when the draw pile is too small or the
    /// game is over.
    pub fn renew_open_cards(&mut self) -> Result<(), GameError> {
        if self.finished {
            return Err(GameError::GameOver);
        }
        if !self.enough_cards_left() {
            return Err(GameError::InsufficientCards {
                required: self.open.len(),
                available: self.unused.len(),
            });
        }
        for slot in &mut self.open {
            *slot = self.unused.pop_front();
        }
        debug!(left = self.unused.len(), "open cards renewed");
        Ok(())
    }
}
