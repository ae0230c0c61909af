use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Seats at the table; seat 0 is the human.
pub const PLAYER_COUNT: usize = 3;
/// Cards dealt to each seat at session start.
pub const CARDS_PER_PLAYER: usize = 12;
/// Completed turns a seat needs before it may call a draw.
pub const CALL_DRAW_MIN_TURNS: u32 = 2;
/// Smallest legal meld.
pub const MIN_MELD_LEN: usize = 3;

/// True iff `cards` is a same-rank set of 3 or 4, or a same-suit run of at
/// least 3 consecutive ranks (Ace low, no wraparound). Input order does not matter.
///
/// # Examples
///
/// ```
/// use tongits_engine::cards::{Card, Rank, Suit};
/// use tongits_engine::rules::is_valid_meld;
///
/// let run = [
///     Card::new(Rank::Nine, Suit::Spades),
///     Card::new(Rank::Seven, Suit::Spades),
///     Card::new(Rank::Eight, Suit::Spades),
/// ];
/// assert!(is_valid_meld(&run));
/// assert!(!is_valid_meld(&run[..2]));
/// ```
pub fn is_valid_meld(cards: &[Card]) -> bool {
    is_same_rank_set(cards) || is_run(cards)
}

fn is_same_rank_set(cards: &[Card]) -> bool {
    matches!(cards.len(), 3 | 4) && cards.iter().all(|c| c.rank == cards[0].rank)
}

fn is_run(cards: &[Card]) -> bool {
    if cards.len() < MIN_MELD_LEN {
        return false;
    }
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(|c| c.rank.order());
    let suit = sorted[0].suit;
    sorted.iter().all(|c| c.suit == suit)
        && sorted
            .windows(2)
            .all(|w| w[1].rank.order() == w[0].rank.order() + 1)
}

/// A validated group of cards laid face up. Only grows through [`Meld::extended`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meld {
    cards: Vec<Card>,
}

impl Meld {
    /// Validates `cards` as a meld, keeping the given order.
    pub fn new(cards: Vec<Card>) -> Option<Self> {
        is_valid_meld(&cards).then_some(Self { cards })
    }

    /// The meld with `extra` appended after the existing cards, if still valid.
    pub fn extended(&self, extra: &[Card]) -> Option<Self> {
        let mut cards = self.cards.clone();
        cards.extend_from_slice(extra);
        Self::new(cards)
    }

    /// Whether appending `extra` keeps the meld valid.
    pub fn accepts(&self, extra: &[Card]) -> bool {
        self.extended(extra).is_some()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Whether a seat holding `hand` and `melds` may take `top` from the discard pile:
/// the card must complete a 3-card meld with two hand cards, or extend one of
/// the seat's own exposed melds.
pub fn can_take_discard(top: Card, hand: &[Card], melds: &[Meld]) -> bool {
    for i in 0..hand.len() {
        for j in (i + 1)..hand.len() {
            if is_valid_meld(&[top, hand[i], hand[j]]) {
                return true;
            }
        }
    }
    melds.iter().any(|m| m.accepts(&[top]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn rejects_short_inputs() {
        assert!(!is_valid_meld(&[]));
        assert!(!is_valid_meld(&[c(Rank::Ace, Suit::Spades)]));
        assert!(!is_valid_meld(&[
            c(Rank::Ace, Suit::Spades),
            c(Rank::Ace, Suit::Hearts)
        ]));
    }

    #[test]
    fn no_wraparound_through_king() {
        assert!(!is_valid_meld(&[
            c(Rank::Queen, Suit::Hearts),
            c(Rank::King, Suit::Hearts),
            c(Rank::Ace, Suit::Hearts),
        ]));
        assert!(is_valid_meld(&[
            c(Rank::Ace, Suit::Hearts),
            c(Rank::Two, Suit::Hearts),
            c(Rank::Three, Suit::Hearts),
        ]));
    }

    #[test]
    fn long_runs_are_valid_but_five_of_a_rank_is_not_a_set() {
        let run: Vec<Card> = [Rank::Four, Rank::Five, Rank::Six, Rank::Seven, Rank::Eight]
            .into_iter()
            .map(|r| c(r, Suit::Clubs))
            .collect();
        assert!(is_valid_meld(&run));
        let mixed_suit_run = [
            c(Rank::Four, Suit::Clubs),
            c(Rank::Five, Suit::Hearts),
            c(Rank::Six, Suit::Clubs),
        ];
        assert!(!is_valid_meld(&mixed_suit_run));
    }

    #[test]
    fn meld_extension_appends_in_order() {
        let meld = Meld::new(vec![
            c(Rank::Seven, Suit::Spades),
            c(Rank::Eight, Suit::Spades),
            c(Rank::Nine, Suit::Spades),
        ])
        .unwrap();
        let grown = meld.extended(&[c(Rank::Six, Suit::Spades)]).unwrap();
        assert_eq!(grown.len(), 4);
        assert_eq!(grown.cards()[3], c(Rank::Six, Suit::Spades));
        assert!(!meld.accepts(&[c(Rank::Jack, Suit::Spades)]));
    }

    #[test]
    fn discard_eligibility_checks_hand_pairs_and_own_melds() {
        let top = c(Rank::Five, Suit::Diamonds);
        let hand = [c(Rank::Five, Suit::Clubs), c(Rank::King, Suit::Hearts), c(Rank::Five, Suit::Spades)];
        assert!(can_take_discard(top, &hand, &[]));

        let hand = [c(Rank::Five, Suit::Clubs), c(Rank::King, Suit::Hearts)];
        assert!(!can_take_discard(top, &hand, &[]));

        let meld = Meld::new(vec![
            c(Rank::Two, Suit::Diamonds),
            c(Rank::Three, Suit::Diamonds),
            c(Rank::Four, Suit::Diamonds),
        ])
        .unwrap();
        assert!(can_take_discard(top, &hand, &[meld]));
    }
}
