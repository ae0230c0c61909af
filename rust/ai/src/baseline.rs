//! Baseline planner for the computer seats.
//!
//! Implements a simple rule-based turn: pick a draw source, lay down every
//! three-card meld found, try one sapaw, then either call a draw or throw
//! away the highest-value card.

use crate::{BotAction, TurnPlanner};
use tongits_engine::cards::{point_value, Card};
use tongits_engine::game::GameState;
use tongits_engine::hand::score_residual_hand;
use tongits_engine::player::{DrawSource, Player};
use tongits_engine::rules::is_valid_meld;

/// Below this estimated chance of drawing a useful card, take from the pile.
pub const DISCARD_DRAW_THRESHOLD: f64 = 0.2;

/// Seat whose melds the sapaw scan never targets.
///
/// This mirrors long-standing bot behaviour and looks accidental: seat 1
/// is skipped even when it is an opponent holding an extendable meld.
pub const SAPAW_EXCLUDED_SEAT: usize = 1;

/// Rule-based planner with deterministic, lowest-index-first choices.
///
/// # Strategy
///
/// 1. **Draw:** take the top discard when it adds a formable three-card meld,
///    or when the estimated draw probability is below
///    [`DISCARD_DRAW_THRESHOLD`]; otherwise draw from the deck. With an empty
///    deck, call a draw if a meld is exposed, else discard without drawing.
/// 2. **Meld:** scan three-card subsets in index order, claiming each valid
///    one whose cards are still free.
/// 3. **Sapaw:** extend the first opponent meld (skipping
///    [`SAPAW_EXCLUDED_SEAT`]) that accepts a single remaining card.
/// 4. **Finish:** call a draw when already drawn, a meld is exposed, and the
///    deck is empty or the residual score is no worse than any opponent's;
///    otherwise discard the highest-point card.
///
/// The engine only accepts a call before the seat has drawn, so the call
/// from step 4 is refused in live play and the driver's fallback discard
/// ends the turn instead. Only the empty-deck call from step 1 can land.
///
/// # Example
///
/// ```rust
/// use tongits_ai::baseline::BaselineAI;
/// use tongits_ai::{BotAction, TurnPlanner};
/// use tongits_engine::engine::Engine;
///
/// let ai = BaselineAI::new();
/// let engine = Engine::new(Some(42));
/// let plan = ai.plan_turn(engine.state());
/// assert!(matches!(plan.first(), Some(BotAction::Draw(_))));
/// assert!(matches!(plan.last(), Some(BotAction::Discard(_))));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }

    /// All three-card subsets of `hand` forming a valid meld, lowest indices first.
    pub fn find_possible_melds(hand: &[Card]) -> Vec<[usize; 3]> {
        let mut melds = Vec::new();
        for i in 0..hand.len() {
            for j in (i + 1)..hand.len() {
                for k in (j + 1)..hand.len() {
                    if is_valid_meld(&[hand[i], hand[j], hand[k]]) {
                        melds.push([i, j, k]);
                    }
                }
            }
        }
        melds
    }

    /// Non-overlapping melds from [`Self::find_possible_melds`], first match wins.
    fn disjoint_melds(hand: &[Card]) -> Vec<[usize; 3]> {
        let mut used = vec![false; hand.len()];
        let mut picked = Vec::new();
        for meld in Self::find_possible_melds(hand) {
            if meld.iter().all(|&i| !used[i]) {
                meld.iter().for_each(|&i| used[i] = true);
                picked.push(meld);
            }
        }
        picked
    }

    /// Ratio of unseen cards sharing a rank with the hand to all unseen cards,
    /// counting the top discard as seen.
    fn draw_probability(hand: &[Card]) -> f64 {
        let mut ranks: Vec<_> = hand.iter().map(|c| c.rank).collect();
        ranks.sort();
        ranks.dedup();
        let needed = (ranks.len() * 4).saturating_sub(hand.len()) as f64;
        let available = 52usize.saturating_sub(hand.len() + 1) as f64;
        if available == 0.0 {
            return 1.0;
        }
        needed / available
    }

    fn should_draw_from_discard(top: Card, player: &Player) -> bool {
        let mut with_top = player.hand.clone();
        with_top.push(top);
        if Self::find_possible_melds(&with_top).len() > Self::find_possible_melds(&player.hand).len()
        {
            return true;
        }
        Self::draw_probability(&player.hand) < DISCARD_DRAW_THRESHOLD
    }

    /// Index of the highest-point card; the first one on ties.
    pub fn choose_discard(hand: &[Card]) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (i, card) in hand.iter().enumerate() {
            let points = point_value(card);
            if best.is_none_or(|(_, p)| points > p) {
                best = Some((i, points));
            }
        }
        best.map(|(i, _)| i)
    }

    fn find_sapaw(state: &GameState, hand: &[Card]) -> Option<BotAction> {
        let me = state.current_player;
        for (seat, player) in state.players.iter().enumerate() {
            if seat == me || seat == SAPAW_EXCLUDED_SEAT {
                continue;
            }
            for (meld_index, meld) in player.exposed_melds.iter().enumerate() {
                if let Some(card) = hand.iter().find(|c| meld.accepts(&[**c])) {
                    return Some(BotAction::Sapaw {
                        target_player: seat,
                        target_meld: meld_index,
                        cards: vec![*card],
                    });
                }
            }
        }
        None
    }

    fn should_call_draw(state: &GameState, hand: &[Card]) -> bool {
        let me = state.current_player;
        if !state.players[me].has_exposed_meld() || !state.has_drawn_this_turn {
            return false;
        }
        if state.deck.is_empty() {
            return true;
        }
        let best_other = (0..state.players.len())
            .filter(|&seat| seat != me)
            .map(|seat| state.residual_score(seat))
            .min()
            .unwrap_or(u32::MAX);
        score_residual_hand(hand, &state.players[me].secret_melds) <= best_other
    }
}

impl TurnPlanner for BaselineAI {
    fn plan_turn(&self, state: &GameState) -> Vec<BotAction> {
        let mut plan = Vec::new();
        if state.game_ended {
            return plan;
        }
        let me = state.current();
        // cards the bot expects to hold as the plan unfolds
        let mut hand = me.hand.clone();

        if !state.has_drawn_this_turn {
            if state.deck.is_empty() {
                if me.has_exposed_meld() {
                    plan.push(BotAction::CallDraw);
                } else if let Some(i) = Self::choose_discard(&hand) {
                    plan.push(BotAction::Discard(hand[i]));
                }
                return plan;
            }
            let source = match state.top_discard() {
                Some(top) if Self::should_draw_from_discard(top, me) => DrawSource::DiscardTop,
                _ => DrawSource::Deck,
            };
            if source == DrawSource::DiscardTop && state.can_draw_from_discard() {
                // the pile card is known; a deck card is not
                hand.extend(state.top_discard());
            }
            plan.push(BotAction::Draw(source));
        }

        for meld in Self::disjoint_melds(&hand) {
            plan.push(BotAction::Meld(meld.iter().map(|&i| hand[i]).collect()));
        }
        let melded: Vec<Card> = plan
            .iter()
            .filter_map(|a| match a {
                BotAction::Meld(cards) => Some(cards.clone()),
                _ => None,
            })
            .flatten()
            .collect();
        hand.retain(|c| !melded.contains(c));

        if let Some(sapaw) = Self::find_sapaw(state, &hand) {
            if let BotAction::Sapaw { cards, .. } = &sapaw {
                hand.retain(|c| !cards.contains(c));
            }
            plan.push(sapaw);
        }

        if Self::should_call_draw(state, &hand) {
            plan.push(BotAction::CallDraw);
        } else if let Some(i) = Self::choose_discard(&hand) {
            plan.push(BotAction::Discard(hand[i]));
        }
        plan
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}
