//! Agents: pluggable players for seats, used to drive whole matches without a UI.
//!
//! `PlayerAgent` picks a [`PlayerAction`] for the seat at the turn cursor and
//! `AgentTable` maps seats to agents and runs a match through a [`Session`].

use crate::actions::{ActionError, PlayerAction};
use crate::game::{Game, TurnOutcome};
use crate::player::Player;
use crate::session::Session;
use core::fmt;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::debug;

/// A seat controller asked for a move whenever its seat is active.
pub trait PlayerAgent {
    fn choose(&mut self, game: &Game, seat: usize) -> PlayerAction;
}

/// Plays random legal moves and knocks with a fixed probability.
#[derive(Debug)]
pub struct RandomAgent {
    rng: StdRng,
    knock_chance: f64,
}

impl RandomAgent {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(v) => StdRng::seed_from_u64(v),
            None => {
                let mut seed = [0u8; 32];
                rand::rng().fill_bytes(&mut seed);
                StdRng::from_seed(seed)
            }
        };
        Self { rng, knock_chance: 0.15 }
    }

    pub fn with_knock_chance(mut self, chance: f64) -> Self {
        self.knock_chance = chance.clamp(0.0, 1.0);
        self
    }
}

impl PlayerAgent for RandomAgent {
    fn choose(&mut self, game: &Game, _seat: usize) -> PlayerAction {
        let someone_knocked = game.players().iter().any(Player::has_knocked);
        if !someone_knocked && self.rng.random_bool(self.knock_chance) {
            return PlayerAction::Knock;
        }
        match self.rng.random_range(0..4) {
            0 => PlayerAction::Pass,
            1 => PlayerAction::SwapAll,
            _ => PlayerAction::SwapOne {
                hand_slot: self.rng.random_range(0..game.hand_size()),
                open_slot: self.rng.random_range(0..game.hand_size()),
            },
        }
    }
}

/// Manages one optional agent per seat.
pub struct AgentTable {
    seats: Vec<Option<Box<dyn PlayerAgent>>>,
}

impl fmt::Debug for AgentTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags: String = self.seats.iter().map(|a| if a.is_some() { 'B' } else { '-' }).collect();
        write!(f, "AgentTable({flags})")
    }
}

impl AgentTable {
    /// Create a table with `n` seats, all empty.
    pub fn for_seats(n: usize) -> Self {
        Self { seats: (0..n).map(|_| None).collect() }
    }

    /// Assign an agent to a seat (or remove when `None`).
    pub fn set_agent(&mut self, seat: usize, agent: Option<Box<dyn PlayerAgent>>) {
        if seat >= self.seats.len() {
            self.seats.resize_with(seat + 1, || None);
        }
        self.seats[seat] = agent;
    }

    pub fn has_agent(&self, seat: usize) -> bool {
        self.seats.get(seat).is_some_and(|a| a.is_some())
    }

    /// Let the agent at the current seat act. Returns `Ok(None)` for an empty seat.
    pub fn on_turn(&mut self, session: &mut Session) -> Result<Option<TurnOutcome>, ActionError> {
        let Some(game) = session.game() else {
            return Err(crate::game::GameError::NoActiveGame.into());
        };
        let seat = game.current();
        let Some(Some(agent)) = self.seats.get_mut(seat) else {
            return Ok(None);
        };
        let action = agent.choose(game, seat);
        debug!(seat, ?action, "agent chose");
        session.play(action).map(Some)
    }

    /// Open the match at seat 0 and let agents play until someone's knock
    /// comes round. After `max_turns` without an ending the match is closed
    /// as it stands. Returns the final ranking.
    pub fn play_match(
        &mut self,
        session: &mut Session,
        max_turns: usize,
    ) -> Result<Vec<Player>, ActionError> {
        session.advance_turn()?;
        for _ in 0..max_turns {
            match self.on_turn(session)? {
                Some(TurnOutcome::GameOver) => return Ok(ranking(session)),
                Some(_) => {}
                None => break,
            }
        }
        session.end_game()?;
        Ok(ranking(session))
    }
}

fn ranking(session: &Session) -> Vec<Player> {
    session.game().map(|g| g.players().to_vec()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::config::GameConfig;

    fn session() -> Session {
        Session::new(GameConfig::default().with_seed(11), |h: &[Card]| h.len() as u32)
    }

    #[test]
    fn empty_seat_does_nothing() {
        let mut s = session();
        s.start_game(&["Alice", "Bob"]).unwrap();
        s.advance_turn().unwrap();
        let mut table = AgentTable::for_seats(2);
        assert_eq!(table.on_turn(&mut s).unwrap(), None);
        assert_eq!(s.game().unwrap().current(), 0);
    }

    #[test]
    fn certain_knock_ends_after_one_round() {
        let mut s = session();
        s.start_game(&["Alice", "Bob", "Carol"]).unwrap();
        let mut table = AgentTable::for_seats(3);
        for seat in 0..3 {
            let agent = RandomAgent::new(Some(seat as u64)).with_knock_chance(1.0);
            table.set_agent(seat, Some(Box::new(agent)));
        }
        let ranking = table.play_match(&mut s, 100).unwrap();
        assert_eq!(ranking.len(), 3);
        assert!(s.game().unwrap().is_finished());
        assert!(ranking[0].has_knocked());
    }
}
