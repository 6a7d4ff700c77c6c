use schwimmen::agents::{AgentTable, RandomAgent};
use schwimmen::cards::{Card, Rank, Suit};
use clap::Parser;
use schwimmen::config::{GameConfig, DEFAULT_HAND_SIZE};
use schwimmen::events::GameEvent;
use schwimmen::session::Session;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

const MAX_TURNS: usize = 200;

/// Demo scoring: best single-suit total, Aces 11, faces 10.
fn suit_total(hand: &[Card]) -> u32 {
    let points = |c: &Card| match c.rank() {
        Rank::Ace => 11,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        r => r as u32,
    };
    Suit::ALL
        .iter()
        .map(|&s| hand.iter().filter(|c| c.suit() == s).map(points).sum::<u32>())
        .max()
        .unwrap_or(0)
}

#[derive(Parser, Debug)]
#[command(name = "schwimmen")]
#[command(about = "Let random bots play one Schwimmen match")]
struct Args {
    /// Player names in seat order (2 to 4); defaults to Alice, Bob and Carol
    names: Vec<String>,

    /// Seed for the shuffle and the bots, for reproducible matches
    #[arg(long)]
    seed: Option<u64>,

    /// Cards per hand and in the open pile
    #[arg(long, default_value_t = DEFAULT_HAND_SIZE)]
    hand_size: usize,
}

impl Args {
    fn into_parts(self) -> (Vec<String>, GameConfig) {
        let mut config = GameConfig::default().with_hand_size(self.hand_size);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        let names = if self.names.is_empty() {
            vec!["Alice".into(), "Bob".into(), "Carol".into()]
        } else {
            self.names
        };
        (names, config)
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();

    let (names, config) = Args::parse().into_parts();
    info!(version = schwimmen::VERSION, players = ?names, seed = ?config.seed, "starting demo");

    let seed = config.seed;
    let mut session = Session::new(config, suit_total);
    session.subscribe_fn(|event| match event {
        GameEvent::TurnAdvanced(game) => {
            let p = game.current_player();
            let hand: Vec<String> = p.cards().iter().map(Card::to_string).collect();
            info!(player = p.name(), hand = %hand.join(" "), score = p.score(), "turn");
        }
        GameEvent::GameOver(ranking) => {
            for (place, p) in ranking.iter().enumerate() {
                info!(place = place + 1, player = p.name(), score = p.score(), "result");
            }
        }
        _ => {}
    });

    if let Err(e) = session.start_game(names.as_slice()) {
        error!(error = %e, "could not start the game");
        return ExitCode::FAILURE;
    }

    let mut table = AgentTable::for_seats(names.len());
    for seat in 0..names.len() {
        let agent = RandomAgent::new(seed.map(|s| s.wrapping_add(seat as u64)));
        table.set_agent(seat, Some(Box::new(agent)));
    }
    match table.play_match(&mut session, MAX_TURNS) {
        Ok(ranking) => {
            if let Some(winner) = ranking.first() {
                info!(winner = winner.name(), "match finished");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "match aborted");
            ExitCode::FAILURE
        }
    }
}
