//! # tongits-engine: Tongits Rules Engine Core
//!
//! Rules and turn state machine for three-seat Tongits, the Filipino rummy
//! game: one human seat and two computer seats, a 12-card deal from a single
//! 52-card deck, melds, sapaw (meld extension), discards and the two ways a
//! session ends (emptying a hand, or comparing residual scores on a call).
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and point values
//! - [`deck`] - Seeded shuffling with ChaCha20 RNG and round-robin dealing
//! - [`rules`] - Meld validity, the [`rules::Meld`] type and discard eligibility
//! - [`hand`] - Greedy residual hand scoring
//! - [`player`] - Seat state and the commands a seat can issue
//! - [`game`] - Session state and its transitions
//! - [`engine`] - Command entry points and the action log
//! - [`logger`] - Action log entries and JSONL session records
//! - [`errors`] - Rejection reasons for refused commands
//!
//! ## Quick Start
//!
//! ```rust
//! use tongits_engine::engine::Engine;
//! use tongits_engine::player::DrawSource;
//!
//! let mut engine = Engine::new(Some(42));
//! let source = if engine.can_draw_from_discard() {
//!     DrawSource::DiscardTop
//! } else {
//!     DrawSource::Deck
//! };
//! engine.draw(source);
//! engine.discard(0);
//! assert_eq!(engine.state().discard_pile.len(), 1);
//! ```
//!
//! ## Rejected Commands
//!
//! Illegal commands leave the state untouched and produce no error; use
//! [`engine::Engine::try_apply`] when the reason matters.
//!
//! ```rust
//! use tongits_engine::engine::Engine;
//! use tongits_engine::errors::GameError;
//! use tongits_engine::player::PlayerAction;
//!
//! let mut engine = Engine::new(Some(7));
//! let before = engine.state().clone();
//! engine.call_draw();
//! assert_eq!(engine.state(), &before);
//! assert!(matches!(
//!     engine.try_apply(&PlayerAction::CallDraw),
//!     Err(GameError::CallDrawNotAllowed { .. })
//! ));
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
