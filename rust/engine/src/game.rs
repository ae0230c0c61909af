use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::{deal, Deck};
use crate::errors::GameError;
use crate::hand::score_residual_hand;
use crate::logger::{ActionKind, EndReason, GameAction};
use crate::player::{DrawSource, Player};
use crate::rules::{
    can_take_discard, Meld, CALL_DRAW_MIN_TURNS, CARDS_PER_PLAYER, MIN_MELD_LEN, PLAYER_COUNT,
};

/// Seat 0 is always the human.
pub const HUMAN_SEAT: usize = 0;

/// Fixed turn order around the table: 0 -> 1 -> ... -> seats-1 -> 0.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SeatCycle {
    seats: usize,
}

impl SeatCycle {
    pub const fn new(seats: usize) -> Self {
        Self { seats }
    }

    pub fn next(self, seat: usize) -> usize {
        (seat + 1) % self.seats
    }
}

pub fn default_names() -> Vec<String> {
    (0..PLAYER_COUNT)
        .map(|i| if i == HUMAN_SEAT { "You".to_string() } else { format!("Bot {}", i) })
        .collect()
}

/// Authoritative state of one session.
///
/// Mutated only through the engine's transitions; a snapshot can be cloned,
/// compared and serialized freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub players: Vec<Player>,
    pub current_player: usize,
    pub deck: Deck,
    /// Top of the pile is the last element
    pub discard_pile: Vec<Card>,
    /// Winning seat once the session has ended
    pub winner: Option<usize>,
    pub has_drawn_this_turn: bool,
    pub game_ended: bool,
    pub end_reason: Option<EndReason>,
    /// Shuffle seed, when the deck was built from one
    pub seed: Option<u64>,
}

impl GameState {
    /// Deals a fresh session from a deck shuffled with `seed` (random if `None`).
    pub fn new(seed: Option<u64>, names: &[String]) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        let mut state = Self::from_deck(Deck::shuffled_with_seed(seed), names);
        state.seed = Some(seed);
        state
    }

    /// Deals `CARDS_PER_PLAYER` cards round-robin to each named seat from `deck`.
    pub fn from_deck(deck: Deck, names: &[String]) -> Self {
        let (hands, deck) = deal(deck, names.len(), CARDS_PER_PLAYER);
        let players = hands
            .into_iter()
            .zip(names)
            .enumerate()
            .map(|(id, (hand, name))| Player::new(id, name.clone(), hand))
            .collect();
        Self {
            players,
            current_player: HUMAN_SEAT,
            deck,
            discard_pile: Vec::new(),
            winner: None,
            has_drawn_this_turn: false,
            game_ended: false,
            end_reason: None,
            seed: None,
        }
    }

    pub fn seat_cycle(&self) -> SeatCycle {
        SeatCycle::new(self.players.len())
    }

    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    pub fn top_discard(&self) -> Option<Card> {
        self.discard_pile.last().copied()
    }

    pub fn winner_player(&self) -> Option<&Player> {
        self.winner.map(|w| &self.players[w])
    }

    /// Whether the active seat may take the top discard right now.
    pub fn can_draw_from_discard(&self) -> bool {
        if self.game_ended || self.has_drawn_this_turn {
            return false;
        }
        let p = self.current();
        self.top_discard()
            .is_some_and(|top| can_take_discard(top, &p.hand, &p.exposed_melds))
    }

    /// Checks the call-draw preconditions for the active seat.
    pub fn check_call_draw(&self) -> Result<(), GameError> {
        if self.game_ended {
            return Err(GameError::GameEnded);
        }
        let seat = self.current_player;
        let p = self.current();
        let reason = if self.has_drawn_this_turn {
            "already drew this turn"
        } else if p.turns_played < CALL_DRAW_MIN_TURNS {
            "too few turns played"
        } else if p.is_sapawed {
            "a meld was sapawed"
        } else {
            return Ok(());
        };
        Err(GameError::CallDrawNotAllowed { seat, reason })
    }

    pub fn residual_score(&self, seat: usize) -> u32 {
        let p = &self.players[seat];
        score_residual_hand(&p.hand, &p.secret_melds)
    }

    /// Every card currently in play: deck, hands, exposed melds and discard pile.
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.deck.cards().to_vec();
        for p in &self.players {
            cards.extend_from_slice(&p.hand);
            for m in &p.exposed_melds {
                cards.extend_from_slice(m.cards());
            }
        }
        cards.extend_from_slice(&self.discard_pile);
        cards
    }

    pub(crate) fn draw(&mut self, source: DrawSource) -> Result<GameAction, GameError> {
        if self.has_drawn_this_turn {
            return Err(GameError::AlreadyDrawn { seat: self.current_player });
        }
        let from_discard = source == DrawSource::DiscardTop && self.can_draw_from_discard();
        let drawn = if from_discard {
            self.discard_pile.pop()
        } else {
            self.deck.draw()
        };
        let card = drawn.ok_or(GameError::DeckEmpty)?;

        let seat = self.current_player;
        let player = &mut self.players[seat];
        player.hand.push(card);
        self.has_drawn_this_turn = true;

        let origin = if from_discard { "discard pile" } else { "deck" };
        let mut entry = GameAction::new(
            ActionKind::Draw,
            player.name.clone(),
            format!("Drew {} from {}", card.describe(), origin),
        )
        .with_card(card);
        entry.from_discard = Some(from_discard);
        Ok(entry)
    }

    pub(crate) fn meld(&mut self, indices: &[usize]) -> Result<GameAction, GameError> {
        let seat = self.current_player;
        let cards = self.players[seat]
            .cards_at(indices)
            .filter(|c| c.len() >= MIN_MELD_LEN)
            .ok_or_else(|| GameError::InvalidSelection { indices: indices.to_vec() })?;
        let meld = Meld::new(cards.clone()).ok_or(GameError::InvalidMeld)?;

        let player = &mut self.players[seat];
        player.remove_indices(indices);
        player.exposed_melds.push(meld);
        Ok(GameAction::new(
            ActionKind::Meld,
            player.name.clone(),
            format!("Melded {} cards", cards.len()),
        )
        .with_cards(cards))
    }

    pub(crate) fn extend_meld(
        &mut self,
        target_player: usize,
        target_meld: usize,
        indices: &[usize],
    ) -> Result<GameAction, GameError> {
        let seat = self.current_player;
        let cards = self.players[seat]
            .cards_at(indices)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| GameError::InvalidSelection { indices: indices.to_vec() })?;
        let existing = self
            .players
            .get(target_player)
            .and_then(|p| p.exposed_melds.get(target_meld))
            .ok_or(GameError::NoSuchMeld { player: target_player, meld: target_meld })?;
        let grown = existing.extended(&cards).ok_or(GameError::InvalidMeld)?;

        self.players[seat].remove_indices(indices);
        let target = &mut self.players[target_player];
        target.exposed_melds[target_meld] = grown;
        // applies to self-extension too
        target.is_sapawed = true;
        let target_name = target.name.clone();

        Ok(GameAction::new(
            ActionKind::Sapaw,
            self.players[seat].name.clone(),
            format!("Sapawed {} card(s) to {}'s meld", cards.len(), target_name),
        )
        .with_cards(cards)
        .with_target(target_player, target_meld))
    }

    pub(crate) fn discard(&mut self, index: usize) -> Result<GameAction, GameError> {
        let seat = self.current_player;
        if index >= self.players[seat].hand.len() {
            return Err(GameError::InvalidSelection { indices: vec![index] });
        }
        let player = &mut self.players[seat];
        let card = player.hand.remove(index);
        player.is_sapawed = false;
        player.turns_played += 1;
        let entry = GameAction::new(
            ActionKind::Discard,
            player.name.clone(),
            format!("Discarded {}", card.describe()),
        )
        .with_card(card);

        self.discard_pile.push(card);
        self.current_player = self.seat_cycle().next(seat);
        self.has_drawn_this_turn = false;
        Ok(entry)
    }

    pub(crate) fn call_draw(&mut self) -> Result<GameAction, GameError> {
        self.check_call_draw()?;
        let caller = self.current_player;
        let (winner, score) = self.resolve_by_score(EndReason::CallDraw);
        Ok(GameAction::new(
            ActionKind::CallDraw,
            self.players[caller].name.clone(),
            format!("Called draw. {} wins with {} points.", self.players[winner].name, score),
        ))
    }

    /// Forced scoring once the deck has run out, whoever is to act.
    pub(crate) fn resolve_deck_exhausted(&mut self) -> GameAction {
        let actor = self.current_player;
        let (winner, score) = self.resolve_by_score(EndReason::DeckExhausted);
        GameAction::new(
            ActionKind::CallDraw,
            self.players[actor].name.clone(),
            format!("Deck is empty. {} wins with {} points.", self.players[winner].name, score),
        )
    }

    /// Ends the session with `seat` as winner on score 0; others keep their residuals.
    pub(crate) fn resolve_tongits(&mut self, seat: usize) -> GameAction {
        for i in 0..self.players.len() {
            let score = if i == seat { 0 } else { self.residual_score(i) };
            let p = &mut self.players[i];
            p.score = score;
            p.consecutive_wins = if i == seat { p.consecutive_wins + 1 } else { 0 };
        }
        self.finish(seat, EndReason::Tongits);
        let name = self.players[seat].name.clone();
        GameAction::new(
            ActionKind::Tongits,
            name.clone(),
            format!("Called Tongits! {} wins with a score of 0.", name),
        )
    }

    /// Scores every seat; the first seat holding the strictly lowest score wins.
    fn resolve_by_score(&mut self, reason: EndReason) -> (usize, u32) {
        for i in 0..self.players.len() {
            self.players[i].score = self.residual_score(i);
        }
        let mut winner = 0;
        for (i, p) in self.players.iter().enumerate() {
            if p.score < self.players[winner].score {
                winner = i;
            }
        }
        for (i, p) in self.players.iter_mut().enumerate() {
            p.consecutive_wins = if i == winner { p.consecutive_wins + 1 } else { 0 };
        }
        self.finish(winner, reason);
        (winner, self.players[winner].score)
    }

    fn finish(&mut self, winner: usize, reason: EndReason) {
        self.winner = Some(winner);
        self.game_ended = true;
        self.end_reason = Some(reason);
    }
}
