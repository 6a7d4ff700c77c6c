//! schwimmen: game-flow core for the Schwimmen (31) card game
//!
//! Goals:
//! - Seat 2 to 4 players, deal from a shuffled short deck, keep a shared open pile
//! - Advance turns until a knock comes round, then rank players by score
//! - Scoring rules, shuffling and the deck are injected; the core only moves cards
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start
//! ```
//! use schwimmen::cards::Card;
//! use schwimmen::config::GameConfig;
//! use schwimmen::game::TurnOutcome;
//! use schwimmen::session::Session;
//!
//! let mut session = Session::new(GameConfig::default().with_seed(3), |hand: &[Card]| {
//!     hand.len() as u32
//! });
//! session.start_game(&["Alice", "Bob"]).unwrap();
//! assert_eq!(session.advance_turn().unwrap(), TurnOutcome::Advanced { seat: 0 });
//!
//! session.game_mut().unwrap().players_mut()[0].set_knocked(true);
//! session.advance_turn().unwrap();
//! assert_eq!(session.advance_turn().unwrap(), TurnOutcome::GameOver);
//! ```
//!
//! ## Demo
//! Watch bots play a match with:
//! ```sh
//! RUST_LOG=debug cargo run --bin schwimmen -- Alice Bob Carol
//! ```

pub mod actions;
pub mod agents;
pub mod cards;
pub mod config;
pub mod deck;
pub mod events;
pub mod game;
pub mod player;
pub mod session;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
