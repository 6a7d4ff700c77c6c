use crate::cards::Card;

/// Recomputes a player's score from the cards currently in hand.
///
/// Scoring rules live outside the flow core; anything `Fn(&[Card]) -> u32` works.
pub trait Scorer {
    fn score(&self, hand: &[Card]) -> u32;
}

impl<F: Fn(&[Card]) -> u32> Scorer for F {
    fn score(&self, hand: &[Card]) -> u32 {
        self(hand)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) hand: Vec<Option<Card>>,
    pub(crate) score: u32,
    pub(crate) knocked: bool,
}

impl Player {
    pub(crate) fn new(name: impl Into<String>, hand_size: usize) -> Self {
        Self { name: name.into(), hand: vec![None; hand_size], score: 0, knocked: false }
    }

    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the hand slots; `None` marks a slot not yet dealt
    pub fn hand(&self) -> &[Option<Card>] {
        &self.hand
    }

    /// Cards currently held, in slot order
    pub fn cards(&self) -> Vec<Card> {
        self.hand.iter().flatten().copied().collect()
    }

    /// Returns the last computed score
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether this player has knocked
    pub fn has_knocked(&self) -> bool {
        self.knocked
    }

    /// Knock state is owned by play logic; the flow core only reads it.
    pub fn set_knocked(&mut self, knocked: bool) {
        self.knocked = knocked;
    }

    /// Overrides the score, for callers that compute it themselves.
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    pub(crate) fn rescore(&mut self, scorer: &dyn Scorer) {
        self.score = scorer.score(&self.cards());
    }
}
