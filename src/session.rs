// Controller boundary. A `Session` owns at most one match at a time and is the
// only place observers are notified, so UIs and bots drive the game through it
// without touching the piles directly.

use crate::actions::{ActionError, PlayerAction};
use crate::config::GameConfig;
use crate::deck::{DeckDefinition, PiquetDeck, RandomShuffler, Shuffler};
use crate::events::{GameEvent, GameListener, ListenerId, Listeners};
use crate::game::{Game, GameError, TurnOutcome};
use crate::player::Scorer;
use core::fmt;
use tracing::info;

pub struct Session {
    config: GameConfig,
    deck: Box<dyn DeckDefinition>,
    shuffler: Box<dyn Shuffler>,
    scorer: Box<dyn Scorer>,
    listeners: Listeners,
    game: Option<Game>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("listeners", &self.listeners)
            .field("game", &self.game)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Create a session using the 32-card deck and a shuffler seeded from `config`.
    ///
    /// ```
    /// use schwimmen::cards::Card;
    /// use schwimmen::config::GameConfig;
    /// use schwimmen::session::Session;
    ///
    /// let mut session = Session::new(GameConfig::default().with_seed(1), |h: &[Card]| h.len() as u32);
    /// let game = session.start_game(&["Alice", "Bob"]).unwrap();
    /// assert_eq!(game.card_count(), 32);
    /// ```
    pub fn new(config: GameConfig, scorer: impl Scorer + 'static) -> Self {
        let shuffler = RandomShuffler::from_seed(config.seed);
        Self {
            config,
            deck: Box::new(PiquetDeck),
            shuffler: Box::new(shuffler),
            scorer: Box::new(scorer),
            listeners: Listeners::default(),
            game: None,
        }
    }

    pub fn with_deck(mut self, deck: impl DeckDefinition + 'static) -> Self {
        self.deck = Box::new(deck);
        self
    }

    pub fn with_shuffler(mut self, shuffler: impl Shuffler + 'static) -> Self {
        self.shuffler = Box::new(shuffler);
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the current match, if one was started
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Mutable access for external play logic.
    pub fn game_mut(&mut self) -> Option<&mut Game> {
        self.game.as_mut()
    }

    pub fn subscribe(&mut self, listener: impl GameListener + 'static) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    pub fn subscribe_fn<F>(&mut self, f: F) -> ListenerId
    where
        F: FnMut(&GameEvent<'_>) + 'static,
    {
        self.listeners.subscribe_fn(f)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Seat the named players, deal, and make the result the current match.
    ///
    /// On failure the previously held match (if any) stays in place and no
    /// event fires.
    pub fn start_game<S: AsRef<str>>(&mut self, names: &[S]) -> Result<&Game, GameError> {
        let mut game = Game::initialize_players(names, &self.config)?;
        game.distribute_cards(self.deck.as_ref(), self.shuffler.as_mut(), self.scorer.as_ref())?;
        info!(players = game.num_players(), draw_pile = game.unused_cards().len(), "new game started");

        let game = self.game.insert(game);
        self.listeners.notify(&GameEvent::Started(game));
        Ok(&*game)
    }

    pub fn enough_cards_left(&self) -> Result<bool, GameError> {
        Ok(self.active()?.enough_cards_left())
    }

    pub fn renew_open_cards(&mut self) -> Result<(), GameError> {
        self.game.as_mut().ok_or(GameError::NoActiveGame)?.renew_open_cards()
    }

    /// Pass the turn on, ending the match when it reaches a knocked player.
    pub fn advance_turn(&mut self) -> Result<TurnOutcome, GameError> {
        let game = self.game.as_mut().ok_or(GameError::NoActiveGame)?;
        let outcome = game.advance_turn()?;
        match outcome {
            TurnOutcome::Advanced { .. } => self.listeners.notify(&GameEvent::TurnAdvanced(game)),
            TurnOutcome::GameOver => self.listeners.notify(&GameEvent::GameOver(game.players())),
        }
        Ok(outcome)
    }

    /// Rank players by score and close the match.
    pub fn end_game(&mut self) -> Result<(), GameError> {
        let game = self.game.as_mut().ok_or(GameError::NoActiveGame)?;
        game.end_game()?;
        self.listeners.notify(&GameEvent::GameOver(game.players()));
        Ok(())
    }

    /// Apply `action` for the player at the turn cursor, then advance the turn.
    pub fn play(&mut self, action: PlayerAction) -> Result<TurnOutcome, ActionError> {
        let game = self.game.as_mut().ok_or(GameError::NoActiveGame)?;
        game.apply_action(action, self.scorer.as_ref())?;
        Ok(self.advance_turn()?)
    }

    fn active(&self) -> Result<&Game, GameError> {
        let game = self.game.as_ref().ok_or(GameError::NoActiveGame)?;
        if game.is_finished() {
            return Err(GameError::GameOver);
        }
        Ok(game)
    }

}
