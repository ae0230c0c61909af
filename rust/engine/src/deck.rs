use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card};

/// Draw stack for a session. The top of the stack is the last element.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards in an unbiased random order, seeded from the OS.
    pub fn shuffled() -> Self {
        Self::shuffled_with_seed(rand::random())
    }

    /// All 52 cards shuffled with ChaCha20 seeded by `seed`; same seed, same order.
    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut cards = full_deck();
        // Fisher-Yates
        cards.shuffle(&mut rng);
        Self { cards }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Builds a freshly shuffled 52-card deck.
pub fn build_shuffled_deck() -> Deck {
    Deck::shuffled()
}

/// Deals round-robin, one card per player per round, for `per_player` rounds.
///
/// Dealing stops early if the deck runs out, leaving shorter hands. With the
/// fixed 3x12 deal this cannot happen from a full deck.
pub fn deal(mut deck: Deck, player_count: usize, per_player: usize) -> (Vec<Vec<Card>>, Deck) {
    let mut hands: Vec<Vec<Card>> = (0..player_count)
        .map(|_| Vec::with_capacity(per_player + 1))
        .collect();
    'rounds: for _ in 0..per_player {
        for hand in hands.iter_mut() {
            match deck.draw() {
                Some(c) => hand.push(c),
                None => break 'rounds,
            }
        }
    }
    (hands, deck)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_stops_early_on_underflow() {
        let deck = Deck::from_cards(full_deck().into_iter().take(5).collect());
        let (hands, rest) = deal(deck, 3, 12);
        assert_eq!(hands.iter().map(Vec::len).collect::<Vec<_>>(), vec![2, 2, 1]);
        assert!(rest.is_empty());
    }

    #[test]
    fn draw_takes_from_the_end() {
        let cards = full_deck();
        let last = *cards.last().unwrap();
        let mut deck = Deck::from_cards(cards);
        assert_eq!(deck.draw(), Some(last));
        assert_eq!(deck.len(), 51);
    }
}
