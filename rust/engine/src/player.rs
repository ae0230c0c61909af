use crate::cards::Card;
use crate::rules::Meld;
use serde::{Deserialize, Serialize};

/// Where a draw takes its card from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawSource {
    /// Top of the face-down deck
    Deck,
    /// Top of the discard pile
    DiscardTop,
}

/// A command a seat issues to the engine.
/// Indices refer to positions in the acting seat's hand at the time of the call.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerAction {
    /// Take one card from the deck or the discard pile
    Draw(DrawSource),
    /// Lay down a new meld of at least three hand cards
    Meld(Vec<usize>),
    /// Sapaw: append hand cards to an existing exposed meld
    Extend {
        target_player: usize,
        target_meld: usize,
        indices: Vec<usize>,
    },
    /// Discard one card, ending the turn
    Discard(usize),
    /// End the round by comparing residual scores
    CallDraw,
}

/// A seat at the table with its hand, exposed melds and round counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat identifier (0 = human)
    pub id: usize,
    pub name: String,
    /// Hand order is display order only
    pub hand: Vec<Card>,
    pub exposed_melds: Vec<Meld>,
    /// Reserved for call-time decomposition; no transition fills it
    pub secret_melds: Vec<Meld>,
    /// Residual score assigned when the session ends
    pub score: u32,
    pub consecutive_wins: u32,
    /// Set when someone extends one of this seat's melds, cleared on its next discard
    pub is_sapawed: bool,
    /// Incremented on every discard by this seat
    pub turns_played: u32,
}

impl Player {
    pub fn new(id: usize, name: impl Into<String>, hand: Vec<Card>) -> Self {
        Self {
            id,
            name: name.into(),
            hand,
            exposed_melds: Vec::new(),
            secret_melds: Vec::new(),
            score: 0,
            consecutive_wins: 0,
            is_sapawed: false,
            turns_played: 0,
        }
    }

    /// Cards at `indices`, in the given order; `None` if any index is out of
    /// range or repeated.
    pub fn cards_at(&self, indices: &[usize]) -> Option<Vec<Card>> {
        let mut seen = Vec::with_capacity(indices.len());
        for &i in indices {
            if i >= self.hand.len() || seen.contains(&i) {
                return None;
            }
            seen.push(i);
        }
        Some(indices.iter().map(|&i| self.hand[i]).collect())
    }

    /// Removes the cards at `indices` from the hand.
    pub(crate) fn remove_indices(&mut self, indices: &[usize]) {
        let mut idx = 0;
        self.hand.retain(|_| {
            let keep = !indices.contains(&idx);
            idx += 1;
            keep
        });
    }

    pub fn has_exposed_meld(&self) -> bool {
        !self.exposed_melds.is_empty()
    }
}
