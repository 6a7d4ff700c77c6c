use schwimmen::cards::Card;
use schwimmen::config::GameConfig;
use schwimmen::deck::NoShuffle;
use schwimmen::session::Session;
use std::cell::RefCell;
use std::rc::Rc;
use tracing_subscriber::{fmt, EnvFilter};

/// Install a test-captured subscriber; `TEST_LOG` or `RUST_LOG` pick the level.
#[allow(dead_code)]
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_test_writer().without_time().try_init().ok();
}

pub fn hand_len(hand: &[Card]) -> u32 {
    hand.len() as u32
}

/// Session over the unshuffled 32-card deck.
#[allow(dead_code)]
pub fn ordered_session() -> Session {
    init_logging();
    Session::new(GameConfig::default(), hand_len).with_shuffler(NoShuffle)
}

/// Labels of every event fired, in order.
#[allow(dead_code)]
pub fn record_events(session: &mut Session) -> Rc<RefCell<Vec<&'static str>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    session.subscribe_fn(move |e| sink.borrow_mut().push(e.label()));
    log
}
