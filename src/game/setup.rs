use super::{Game, GameError, PlayerNameError};
use crate::config::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
use crate::player::Player;
use std::collections::{HashSet, VecDeque};
use tracing::debug;

impl Game {
    /// Validate `names` and build a fresh game with empty piles.
    ///
    /// Checks run in a fixed order and the first failure wins: too few players,
    /// too many players, any blank name, any duplicate name.
    ///
    /// The turn cursor starts on the last seat so the first
    /// [`advance_turn`](Game::advance_turn) lands on seat 0.
    ///
    /// ```
    /// use schwimmen::config::GameConfig;
    /// use schwimmen::game::{Game, GameError};
    ///
    /// let game = Game::initialize_players(&["Alice", "Bob"], &GameConfig::default()).unwrap();
    /// assert_eq!(game.players()[1].name(), "Bob");
    /// assert_eq!(game.current(), 1);
    ///
    /// let err = Game::initialize_players(&["Solo"], &GameConfig::default()).unwrap_err();
    /// assert_eq!(err, GameError::PlayerCount { count: 1 });
    /// ```
    pub fn initialize_players<S: AsRef<str>>(
        names: &[S],
        config: &GameConfig,
    ) -> Result<Self, GameError> {
        validate_names(names)?;
        if config.hand_size == 0 {
            return Err(GameError::HandSize { size: 0 });
        }

        let players: Vec<Player> =
            names.iter().map(|n| Player::new(n.as_ref(), config.hand_size)).collect();
        debug!(players = players.len(), hand_size = config.hand_size, "roster accepted");

        let current = players.len() - 1;
        Ok(Self {
            players,
            unused: VecDeque::new(),
            open: vec![None; config.hand_size],
            current,
            passes: 0,
            opened: false,
            finished: false,
        })
    }
}

fn validate_names<S: AsRef<str>>(names: &[S]) -> Result<(), GameError> {
    let count = names.len();
    if count < MIN_PLAYERS {
        return Err(GameError::PlayerCount { count });
    }
    if count > MAX_PLAYERS {
        return Err(GameError::PlayerCount { count });
    }

    if let Some(position) = names.iter().position(|n| n.as_ref().trim().is_empty()) {
        return Err(PlayerNameError::Blank { position }.into());
    }

    let mut seen = HashSet::with_capacity(count);
    for name in names {
        if !seen.insert(name.as_ref()) {
            return Err(PlayerNameError::Duplicate { name: name.as_ref().to_string() }.into());
        }
    }
    Ok(())
}
