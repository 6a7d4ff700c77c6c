//! The match aggregate: roster, draw pile, open pile and turn cursor.
//!
//! Flow within one match:
//! 1. [`Game::initialize_players`] validates the roster,
//! 2. [`Game::distribute_cards`] builds, shuffles and deals the deck and seeds the open pile,
//! 3. [`Game::advance_turn`] moves the cursor until a knocked player is reached,
//! 4. [`Game::end_game`] ranks the players by score.

use crate::cards::Card;
use crate::player::Player;
use std::collections::VecDeque;

mod distribution;
mod setup;
mod turn;

pub use turn::TurnOutcome;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayerNameError {
    #[error("player name at position {position} is blank")]
    Blank { position: usize },
    #[error("player name '{name}' is used more than once")]
    Duplicate { name: String },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("a match needs 2 to 4 players, got {count}")]
    PlayerCount { count: usize },
    #[error(transparent)]
    PlayerName(#[from] PlayerNameError),
    #[error("hand size must be at least 1, got {size}")]
    HandSize { size: usize },
    #[error("not enough cards: need {required}, draw pile has {available}")]
    InsufficientCards { required: usize, available: usize },
    #[error("no game has been started")]
    NoActiveGame,
    #[error("the game is already over")]
    GameOver,
    #[error("no turn has been opened yet")]
    TurnNotOpened,
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Game {
    pub(crate) players: Vec<Player>,
    /// Draw pile; the front is dealt next.
    pub(crate) unused: VecDeque<Card>,
    pub(crate) open: Vec<Option<Card>>,
    pub(crate) current: usize,
    /// Consecutive passes since the last swap or knock.
    pub(crate) passes: usize,
    /// Set by the first `advance_turn`; the cursor is on its pre-state until then.
    pub(crate) opened: bool,
    pub(crate) finished: bool,
}

impl Game {
    /// Returns the players in seat order (ranking order once the game is over)
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Mutable access for play logic (hand swaps, knocking).
    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// Returns the draw pile, front first
    pub fn unused_cards(&self) -> &VecDeque<Card> {
        &self.unused
    }

    /// Returns the open pile slots
    pub fn open_cards(&self) -> &[Option<Card>] {
        &self.open
    }

    /// Slots per hand, equal to the open pile size
    pub fn hand_size(&self) -> usize {
        self.open.len()
    }

    /// Returns the turn cursor
    pub fn current(&self) -> usize {
        self.current
    }

    /// Player at the turn cursor
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether the first turn has been handed out.
    pub fn is_opened(&self) -> bool {
        self.opened
    }

    /// Cards held anywhere in the match: draw pile, open pile and hands.
    ///
    /// Equals the deck size from setup until the first mid-game renewal, which
    /// takes the replaced open cards out of play.
    pub fn card_count(&self) -> usize {
        let open = self.open.iter().flatten().count();
        let hands: usize = self.players.iter().map(|p| p.hand.iter().flatten().count()).sum();
        self.unused.len() + open + hands
    }
}
