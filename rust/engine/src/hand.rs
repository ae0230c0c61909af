//! Residual hand scoring.
//!
//! A hand is scored by repeatedly pulling one meld out of it until none is
//! left and summing what remains. The decomposition is greedy, not optimal:
//! each pass takes the first same-rank triple in index order, and only if
//! there is none, the first run of three found among rank-sorted neighbours.

use crate::cards::{point_value, Card};
use crate::rules::Meld;

/// Points left in `hand` after greedily removing every meld it contains.
///
/// Cards belonging to `secret_melds` are excluded before scoring; secret
/// melds carry no other scoring effect.
///
/// # Examples
///
/// ```
/// use tongits_engine::cards::{Card, Rank, Suit};
/// use tongits_engine::hand::score_residual_hand;
///
/// let hand = [
///     Card::new(Rank::Three, Suit::Hearts),
///     Card::new(Rank::Three, Suit::Diamonds),
///     Card::new(Rank::Three, Suit::Clubs),
///     Card::new(Rank::Five, Suit::Spades),
/// ];
/// assert_eq!(score_residual_hand(&hand, &[]), 5);
/// ```
pub fn score_residual_hand(hand: &[Card], secret_melds: &[Meld]) -> u32 {
    let mut working: Vec<Card> = hand
        .iter()
        .copied()
        .filter(|c| !secret_melds.iter().any(|m| m.cards().contains(c)))
        .collect();
    while extract_meld(&mut working).is_some() {}
    raw_points(&working)
}

/// Plain point total of a hand with no meld removal.
pub fn raw_points(hand: &[Card]) -> u32 {
    hand.iter().map(point_value).sum()
}

/// Removes one meld of three from `cards`: sets first, then runs.
fn extract_meld(cards: &mut Vec<Card>) -> Option<[Card; 3]> {
    extract_set(cards).or_else(|| extract_run(cards))
}

fn extract_set(cards: &mut Vec<Card>) -> Option<[Card; 3]> {
    let n = cards.len();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                if cards[i].rank == cards[j].rank && cards[j].rank == cards[k].rank {
                    let meld = [cards[i], cards[j], cards[k]];
                    cards.remove(k);
                    cards.remove(j);
                    cards.remove(i);
                    return Some(meld);
                }
            }
        }
    }
    None
}

fn extract_run(cards: &mut Vec<Card>) -> Option<[Card; 3]> {
    let mut sorted = cards.clone();
    // stable: equal ranks keep hand order
    sorted.sort_by_key(|c| c.rank.order());
    let meld = sorted.windows(3).find_map(|w| {
        let same_suit = w[0].suit == w[1].suit && w[1].suit == w[2].suit;
        let consecutive = w[1].rank.order() == w[0].rank.order() + 1
            && w[2].rank.order() == w[1].rank.order() + 1;
        (same_suit && consecutive).then(|| [w[0], w[1], w[2]])
    })?;
    cards.retain(|c| !meld.contains(c));
    Some(meld)
}
