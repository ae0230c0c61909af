//! # tongits-ai: Computer Opponents for Tongits
//!
//! Turn planners for the computer-controlled seats and the driver that plays
//! their turns through the engine.
//!
//! ## Core Components
//!
//! - [`TurnPlanner`] - Trait for producing a turn plan from a read-only snapshot
//! - [`BotAction`] - One planned step, naming cards rather than hand positions
//! - [`baseline`] - Heuristic planner used for the bot seats
//! - [`driver`] - Replays a plan through the engine's validated commands
//! - [`create_ai`] - Factory for planners by name
//!
//! ## Quick Start
//!
//! ```rust
//! use tongits_ai::{create_ai, driver::play_bot_turn};
//! use tongits_engine::engine::Engine;
//! use tongits_engine::player::DrawSource;
//!
//! let ai = create_ai("baseline").expect("known planner");
//! let mut engine = Engine::new(Some(42));
//!
//! // the human seat plays first
//! engine.draw(DrawSource::Deck);
//! engine.discard(0);
//!
//! play_bot_turn(&mut engine, ai.as_ref());
//! assert_ne!(engine.state().current_player, 1);
//! ```
//!
//! ## AI Types
//!
//! Currently supported AI types:
//! - `"baseline"` - Rule-based planner: greedy melds, one sapaw, highest-card discard

use tongits_engine::cards::Card;
use tongits_engine::game::GameState;
use tongits_engine::player::{DrawSource, PlayerAction};

pub mod baseline;
pub mod driver;

/// Names accepted by [`create_ai`].
pub const AI_TYPES: &[&str] = &["baseline"];

/// One step of a planned turn.
///
/// Cards are named by value so a step stays meaningful after earlier steps
/// have reordered the hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotAction {
    Draw(DrawSource),
    Meld(Vec<Card>),
    Sapaw {
        target_player: usize,
        target_meld: usize,
        cards: Vec<Card>,
    },
    Discard(Card),
    CallDraw,
}

impl BotAction {
    /// Translates the step into an engine command against `hand`.
    /// Returns `None` if a named card is no longer held.
    pub fn resolve(&self, hand: &[Card]) -> Option<PlayerAction> {
        let index_of = |card: &Card| hand.iter().position(|c| c == card);
        let indices_of =
            |cards: &[Card]| cards.iter().map(index_of).collect::<Option<Vec<usize>>>();
        let action = match self {
            BotAction::Draw(source) => PlayerAction::Draw(*source),
            BotAction::Meld(cards) => PlayerAction::Meld(indices_of(cards)?),
            BotAction::Sapaw {
                target_player,
                target_meld,
                cards,
            } => PlayerAction::Extend {
                target_player: *target_player,
                target_meld: *target_meld,
                indices: indices_of(cards)?,
            },
            BotAction::Discard(card) => PlayerAction::Discard(index_of(card)?),
            BotAction::CallDraw => PlayerAction::CallDraw,
        };
        Some(action)
    }
}

/// Interface for computer opponents.
///
/// Implementors inspect a snapshot and return the steps they intend to take,
/// in order. Planning never mutates state; [`driver`] applies the steps.
///
/// # Example Implementation
///
/// ```rust
/// use tongits_ai::{BotAction, TurnPlanner};
/// use tongits_engine::game::GameState;
/// use tongits_engine::player::DrawSource;
///
/// struct DeckOnly;
///
/// impl TurnPlanner for DeckOnly {
///     fn plan_turn(&self, state: &GameState) -> Vec<BotAction> {
///         let mut plan = vec![BotAction::Draw(DrawSource::Deck)];
///         if let Some(&card) = state.current().hand.first() {
///             plan.push(BotAction::Discard(card));
///         }
///         plan
///     }
///
///     fn name(&self) -> &str {
///         "DeckOnly"
///     }
/// }
/// ```
pub trait TurnPlanner: Send + Sync {
    /// Plan the active seat's turn from `state`.
    fn plan_turn(&self, state: &GameState) -> Vec<BotAction>;

    /// Return the name/identifier of this planner.
    fn name(&self) -> &str;
}

/// Factory function to create planners by type string.
///
/// Returns `None` for unknown names; see [`AI_TYPES`].
///
/// # Example
///
/// ```rust
/// use tongits_ai::create_ai;
///
/// let ai = create_ai("baseline").unwrap();
/// assert_eq!(ai.name(), "BaselineAI");
/// assert!(create_ai("oracle").is_none());
/// ```
pub fn create_ai(ai_type: &str) -> Option<Box<dyn TurnPlanner>> {
    match ai_type {
        "baseline" => Some(Box::new(baseline::BaselineAI::new())),
        _ => None,
    }
}
