mod common;

use common::hand_len;
use schwimmen::agents::{AgentTable, RandomAgent};
use schwimmen::config::GameConfig;
use schwimmen::session::Session;

#[test]
fn bots_finish_a_seeded_match() {
    for seed in 0..20u64 {
        let mut s = Session::new(GameConfig::default().with_seed(seed), hand_len);
        s.start_game(&["Alice", "Bob", "Carol", "Dave"]).unwrap();
        let mut table = AgentTable::for_seats(4);
        for seat in 0..4 {
            table.set_agent(seat, Some(Box::new(RandomAgent::new(Some(seed * 10 + seat as u64)))));
        }
        let ranking = table.play_match(&mut s, 500).unwrap();
        assert_eq!(ranking.len(), 4);
        assert!(ranking.windows(2).all(|w| w[0].score() >= w[1].score()));
        assert!(s.game().unwrap().is_finished());
    }
}

#[test]
fn match_without_knocks_is_closed_after_the_turn_cap() {
    let mut s = Session::new(GameConfig::default().with_seed(5), hand_len);
    s.start_game(&["Alice", "Bob"]).unwrap();
    let mut table = AgentTable::for_seats(2);
    for seat in 0..2 {
        let agent = RandomAgent::new(Some(seat)).with_knock_chance(0.0);
        table.set_agent(seat as usize, Some(Box::new(agent)));
    }
    let ranking = table.play_match(&mut s, 30).unwrap();
    assert_eq!(ranking.len(), 2);
    assert!(s.game().unwrap().is_finished());
    assert!(ranking.iter().all(|p| !p.has_knocked()));
}
