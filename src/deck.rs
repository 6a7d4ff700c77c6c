use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Provides the full set of cards a match is played with.
pub trait DeckDefinition {
    /// Every card of the deck, in construction order.
    fn cards(&self) -> Vec<Card>;

    fn len(&self) -> usize {
        self.cards().len()
    }
}

/// The 32-card short deck: every suit crossed with Seven..Ace.
///
/// ```
/// use schwimmen::deck::{DeckDefinition, PiquetDeck};
///
/// assert_eq!(PiquetDeck.len(), 32);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PiquetDeck;

impl DeckDefinition for PiquetDeck {
    fn cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(Suit::ALL.len() * Rank::ALL.len());
        for &s in &Suit::ALL {
            for &r in &Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        cards
    }

    fn len(&self) -> usize {
        Suit::ALL.len() * Rank::ALL.len()
    }
}

/// A fixed card list, mostly useful for tests with small or hand-ordered decks.
impl DeckDefinition for Vec<Card> {
    fn cards(&self) -> Vec<Card> {
        self.clone()
    }
}

/// Reorders the draw pile before dealing.
pub trait Shuffler {
    fn shuffle(&mut self, cards: &mut [Card]);
}

/// Uniform shuffle driven by a ChaCha8 RNG.
#[derive(Debug, Clone)]
pub struct RandomShuffler {
    rng: ChaCha8Rng,
}

impl RandomShuffler {
    /// Shuffle using a seeded RNG for reproducibility.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Shuffle seeded from the thread RNG.
    pub fn from_entropy() -> Self {
        Self::from_rng(&mut rand::rng())
    }

    /// Derive the shuffler's RNG from an existing one.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(rng.random()) }
    }

    /// `Some(seed)` gives a reproducible shuffler, `None` an entropy-seeded one.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl Shuffler for RandomShuffler {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }
}

/// Leaves the cards in deck order.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoShuffle;

impl Shuffler for NoShuffle {
    fn shuffle(&mut self, _cards: &mut [Card]) {}
}

impl<F: FnMut(&mut [Card])> Shuffler for F {
    fn shuffle(&mut self, cards: &mut [Card]) {
        (*self)(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn piquet_deck_has_32_distinct_cards() {
        let cards = PiquetDeck.cards();
        assert_eq!(cards.len(), 32);
        let set: HashSet<Card> = cards.iter().copied().collect();
        assert_eq!(set.len(), 32);
        assert_eq!(cards[0], Card::new(Rank::Seven, Suit::Clubs));
        assert_eq!(cards[31], Card::new(Rank::Ace, Suit::Spades));
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = PiquetDeck.cards();
        let mut d2 = PiquetDeck.cards();
        RandomShuffler::seeded(42).shuffle(&mut d1);
        RandomShuffler::seeded(42).shuffle(&mut d2);
        assert_eq!(d1, d2);
        assert_ne!(d1, PiquetDeck.cards());
    }

    #[test]
    fn shuffle_keeps_every_card() {
        let mut cards = PiquetDeck.cards();
        RandomShuffler::seeded(7).shuffle(&mut cards);
        cards.sort();
        let mut expected = PiquetDeck.cards();
        expected.sort();
        assert_eq!(cards, expected);
    }

    #[test]
    fn shuffle_positions_are_roughly_uniform() {
        // Track where the first card lands over many shuffles.
        let mut shuffler = RandomShuffler::seeded(2024);
        let first = Card::new(Rank::Seven, Suit::Clubs);
        let mut hits = [0u32; 32];
        let rounds = 32_000;
        for _ in 0..rounds {
            let mut cards = PiquetDeck.cards();
            shuffler.shuffle(&mut cards);
            let pos = cards.iter().position(|&c| c == first).unwrap();
            hits[pos] += 1;
        }
        // expected 1000 per slot
        for (slot, &n) in hits.iter().enumerate() {
            assert!((800..=1200).contains(&n), "slot {slot} hit {n} times");
        }
    }

    #[test]
    fn closure_shuffler_reverses() {
        let mut cards = PiquetDeck.cards();
        let mut rev = |c: &mut [Card]| c.reverse();
        rev.shuffle(&mut cards);
        assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
        NoShuffle.shuffle(&mut cards);
        assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
    }
}
