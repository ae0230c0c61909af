//! Card, hand, table and log formatters for terminal display.
//!
//! Pure functions over engine types. Suits use Unicode symbols with an ASCII
//! fallback for terminals that cannot render them.
//!
//! ## Example
//!
//! ```rust
//! use tongits_engine::cards::{Card, Rank, Suit};
//! use tongits_cli::formatters::{format_card, format_cards};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_cards(&[ace_spades]).starts_with("[A"));
//! ```

use std::fmt::Write as _;

use tongits_engine::cards::{Card, Suit};
use tongits_engine::game::GameState;
use tongits_engine::logger::{EndReason, GameAction};
use tongits_engine::rules::Meld;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.label(), format_suit(&card.suit))
}

/// Cards in bracket notation, e.g. `[A♠ K♥]`, or `[]` if empty.
pub fn format_cards(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Hand with 1-based positions, the numbers the player types.
///
/// ```rust
/// use tongits_engine::cards::Card;
/// # use tongits_cli::formatters::format_hand;
///
/// let hand: Vec<Card> = vec!["7h".parse().unwrap(), "Kc".parse().unwrap()];
/// let text = format_hand(&hand);
/// assert!(text.starts_with("1:7"));
/// assert!(text.contains(" 2:K"));
/// ```
pub fn format_hand(hand: &[Card]) -> String {
    hand.iter()
        .enumerate()
        .map(|(i, c)| format!("{}:{}", i + 1, format_card(c)))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_melds(melds: &[Meld]) -> String {
    if melds.is_empty() {
        return "-".to_string();
    }
    melds
        .iter()
        .enumerate()
        .map(|(i, m)| format!("{}:{}", i + 1, format_cards(m.cards())))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One log entry as a transcript line.
pub fn format_entry(entry: &GameAction) -> String {
    format!("[{}] {}", entry.player, entry.details)
}

pub fn format_end_reason(reason: EndReason) -> &'static str {
    match reason {
        EndReason::Tongits => "tongits",
        EndReason::CallDraw => "call draw",
        EndReason::DeckExhausted => "deck exhausted",
    }
}

/// Table view for the active seat: opponents' melds and hand sizes, the
/// pile, and the viewer's own hand with positions.
pub fn format_table(state: &GameState, viewer: usize) -> String {
    let mut s = String::new();
    let top = state
        .top_discard()
        .map(|c| format_card(&c))
        .unwrap_or_else(|| "-".to_string());
    let _ = writeln!(
        s,
        "Deck: {}  Discard: {} ({} in pile)",
        state.deck.len(),
        top,
        state.discard_pile.len()
    );
    for (seat, p) in state.players.iter().enumerate() {
        let _ = writeln!(
            s,
            "Seat {} {:<8} cards={:<2} melds {}",
            seat,
            p.name,
            p.hand.len(),
            format_melds(&p.exposed_melds)
        );
    }
    let me = &state.players[viewer];
    let _ = write!(s, "Your hand: {}", format_hand(&me.hand));
    s
}
