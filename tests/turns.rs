mod common;

use common::{ordered_session, record_events};
use schwimmen::actions::{ActionError, PlayerAction};
use schwimmen::game::{GameError, TurnOutcome};

#[test]
fn first_turn_is_seat_zero_and_cursor_wraps() {
    let mut s = ordered_session();
    let game = s.start_game(&["Alice", "Bob", "Carol"]).unwrap();
    assert_eq!(game.current(), 2);

    assert_eq!(s.advance_turn().unwrap(), TurnOutcome::Advanced { seat: 0 });
    assert_eq!(s.advance_turn().unwrap(), TurnOutcome::Advanced { seat: 1 });
    assert_eq!(s.advance_turn().unwrap(), TurnOutcome::Advanced { seat: 2 });
    assert_eq!(s.advance_turn().unwrap(), TurnOutcome::Advanced { seat: 0 });
}

#[test]
fn termination_fires_only_on_the_knocked_player() {
    let mut s = ordered_session();
    let events = record_events(&mut s);
    s.start_game(&["Alice", "Bob", "Carol"]).unwrap();
    s.game_mut().unwrap().players_mut()[1].set_knocked(true);

    assert_eq!(s.advance_turn().unwrap(), TurnOutcome::Advanced { seat: 0 });
    assert_eq!(s.advance_turn().unwrap(), TurnOutcome::GameOver);
    assert!(s.game().unwrap().is_finished());
    assert_eq!(s.advance_turn().unwrap_err(), GameError::GameOver);

    assert_eq!(*events.borrow(), ["game started", "turn advanced", "game over"]);
}

#[test]
fn knock_action_ends_when_the_turn_comes_back() {
    let mut s = ordered_session();
    let events = record_events(&mut s);
    s.start_game(&["Alice", "Bob"]).unwrap();
    s.advance_turn().unwrap();

    assert_eq!(s.play(PlayerAction::Knock).unwrap(), TurnOutcome::Advanced { seat: 1 });
    assert_eq!(
        s.play(PlayerAction::Knock).unwrap_err(),
        ActionError::AlreadyKnocked { by: "Alice".into() }
    );
    assert_eq!(s.play(PlayerAction::Pass).unwrap(), TurnOutcome::GameOver);
    assert_eq!(s.play(PlayerAction::Pass).unwrap_err(), ActionError::Game(GameError::GameOver));

    assert_eq!(
        *events.borrow(),
        ["game started", "turn advanced", "turn advanced", "game over"]
    );
}

#[test]
fn unsubscribed_listener_hears_nothing() {
    let mut s = ordered_session();
    let events = std::rc::Rc::new(std::cell::RefCell::new(0));
    let sink = std::rc::Rc::clone(&events);
    let id = s.subscribe_fn(move |_| *sink.borrow_mut() += 1);
    s.start_game(&["Alice", "Bob"]).unwrap();
    assert!(s.unsubscribe(id));
    s.advance_turn().unwrap();
    assert_eq!(*events.borrow(), 1);
}

#[test]
fn play_waits_for_the_first_turn() {
    let mut s = ordered_session();
    let events = record_events(&mut s);
    s.start_game(&["Alice", "Bob", "Carol"]).unwrap();

    assert_eq!(
        s.play(PlayerAction::Knock).unwrap_err(),
        ActionError::Game(GameError::TurnNotOpened)
    );
    let game = s.game().unwrap();
    assert!(game.players().iter().all(|p| !p.has_knocked()));
    assert_eq!(game.current(), 2);
    assert_eq!(*events.borrow(), ["game started"]);

    assert_eq!(s.advance_turn().unwrap(), TurnOutcome::Advanced { seat: 0 });
    assert_eq!(s.play(PlayerAction::Knock).unwrap(), TurnOutcome::Advanced { seat: 1 });
    assert!(s.game().unwrap().players()[0].has_knocked());
}
