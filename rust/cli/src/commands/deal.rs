//! Deal command handler: shows one seeded deal without playing it.

use crate::error::CliError;
use crate::formatters::{format_card, format_cards};
use std::io::Write;
use tongits_engine::game::{GameState, default_names};
use tongits_engine::hand::score_residual_hand;

/// Deals a fresh session and prints each seat's hand with its residual
/// score, then the stock size and its top card.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let state = GameState::new(Some(seed), &default_names());

    writeln!(out, "Seed: {}", seed)?;
    for p in &state.players {
        writeln!(
            out,
            "{}: {} (score {})",
            p.name,
            format_cards(&p.hand),
            score_residual_hand(&p.hand, &p.secret_melds)
        )?;
    }
    let top = state
        .deck
        .cards()
        .last()
        .map(format_card)
        .ok_or_else(|| CliError::Engine("deck empty after deal".into()))?;
    writeln!(out, "Deck: {} cards, top {}", state.deck.len(), top)?;
    Ok(())
}
