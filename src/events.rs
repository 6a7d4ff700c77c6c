//! Observer hooks fired by [`Session`](crate::session::Session) after each
//! successful state transition.

use crate::game::Game;
use crate::player::Player;
use core::fmt;

/// A completed state transition.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub enum GameEvent<'a> {
    /// Players are seated, hands dealt and the open pile seeded.
    Started(&'a Game),
    /// The cursor moved to a player who has not knocked.
    TurnAdvanced(&'a Game),
    /// The match ended; players in ranking order.
    GameOver(&'a [Player]),
}

impl GameEvent<'_> {
    pub fn label(&self) -> &'static str {
        match self {
            GameEvent::Started(_) => "game started",
            GameEvent::TurnAdvanced(_) => "turn advanced",
            GameEvent::GameOver(_) => "game over",
        }
    }
}

pub trait GameListener {
    fn on_event(&mut self, event: &GameEvent<'_>);
}

impl<F: FnMut(&GameEvent<'_>)> GameListener for F {
    fn on_event(&mut self, event: &GameEvent<'_>) {
        (*self)(event)
    }
}

/// Handle returned by [`Listeners::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Registered listeners, notified in subscription order.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Box<dyn GameListener>)>,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listeners({})", self.entries.len())
    }
}

impl Listeners {
    pub fn subscribe(&mut self, listener: impl GameListener + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Subscribe a closure.
    pub fn subscribe_fn<F>(&mut self, f: F) -> ListenerId
    where
        F: FnMut(&GameEvent<'_>) + 'static,
    {
        self.subscribe(f)
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(i, _)| *i != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn notify(&mut self, event: &GameEvent<'_>) {
        for (_, listener) in &mut self.entries {
            listener.on_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notifies_in_order_until_unsubscribed() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::default();

        let a = {
            let log = Rc::clone(&log);
            listeners.subscribe_fn(move |e| log.borrow_mut().push(("a", e.label())))
        };
        {
            let log = Rc::clone(&log);
            listeners.subscribe_fn(move |e| log.borrow_mut().push(("b", e.label())));
        }
        assert_eq!(listeners.len(), 2);

        listeners.notify(&GameEvent::GameOver(&[]));
        assert!(listeners.unsubscribe(a));
        assert!(!listeners.unsubscribe(a));
        listeners.notify(&GameEvent::GameOver(&[]));

        assert_eq!(
            *log.borrow(),
            vec![("a", "game over"), ("b", "game over"), ("b", "game over")]
        );
    }
}
