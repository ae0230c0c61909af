//! Parsing of the commands typed at the human seat.
//!
//! Card positions and meld numbers are entered 1-based, as printed by
//! [`crate::formatters`]; seats are entered as shown (0 is the human).
//! Parsing only checks shape; the engine decides legality.

use tongits_engine::player::{DrawSource, PlayerAction};

/// Outcome of parsing one input line.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A command for the engine
    Action(PlayerAction),
    /// Show the command list
    Help,
    /// Leave the session
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

pub const HELP: &str = "\
Commands:
  d | draw               draw from the deck
  p | pile               take the top discard
  m | meld N N N...      meld the cards at positions N
  s | sapaw SEAT M N...  add cards at positions N to meld M of SEAT
  x | discard N          discard the card at position N (ends your turn)
  c | call               call a draw (before drawing)
  h | help               show this list
  q | quit               leave the game";

/// Parse user input into a [`PlayerAction`] or a session command.
///
/// # Example
///
/// ```rust
/// # use tongits_cli::validation::{parse_player_command, ParseResult};
/// use tongits_engine::player::{DrawSource, PlayerAction};
///
/// assert_eq!(
///     parse_player_command("draw"),
///     ParseResult::Action(PlayerAction::Draw(DrawSource::Deck))
/// );
/// assert_eq!(
///     parse_player_command("m 1 2 3"),
///     ParseResult::Action(PlayerAction::Meld(vec![0, 1, 2]))
/// );
/// assert_eq!(parse_player_command("q"), ParseResult::Quit);
///
/// match parse_player_command("fold") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_command(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some((&head, args)) = parts.split_first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match head {
        "q" | "quit" => ParseResult::Quit,
        "h" | "help" | "?" => ParseResult::Help,
        "d" | "draw" => ParseResult::Action(PlayerAction::Draw(DrawSource::Deck)),
        "p" | "pile" | "take" => ParseResult::Action(PlayerAction::Draw(DrawSource::DiscardTop)),
        "c" | "call" => ParseResult::Action(PlayerAction::CallDraw),
        "m" | "meld" => match parse_positions(args) {
            Ok(indices) if indices.len() >= 3 => ParseResult::Action(PlayerAction::Meld(indices)),
            Ok(_) => ParseResult::Invalid("A meld needs at least 3 cards (e.g., 'meld 1 2 3')".into()),
            Err(msg) => ParseResult::Invalid(msg),
        },
        "x" | "discard" => match parse_positions(args) {
            Ok(indices) if indices.len() == 1 => ParseResult::Action(PlayerAction::Discard(indices[0])),
            Ok(_) => ParseResult::Invalid("Discard takes one card (e.g., 'discard 4')".into()),
            Err(msg) => ParseResult::Invalid(msg),
        },
        "s" | "sapaw" => parse_sapaw(args),
        other => ParseResult::Invalid(format!(
            "Unrecognized command '{}'. Type 'help' for the command list",
            other
        )),
    }
}

fn parse_sapaw(args: &[&str]) -> ParseResult {
    const USAGE: &str = "Sapaw needs a seat, a meld and cards (e.g., 'sapaw 1 1 5')";
    let [seat, meld, cards @ ..] = args else {
        return ParseResult::Invalid(USAGE.into());
    };
    if cards.is_empty() {
        return ParseResult::Invalid(USAGE.into());
    }
    let Ok(target_player) = seat.parse::<usize>() else {
        return ParseResult::Invalid(format!("Invalid seat '{}'", seat));
    };
    let target_meld = match parse_positions(&[*meld]) {
        Ok(m) => m[0],
        Err(msg) => return ParseResult::Invalid(msg),
    };
    match parse_positions(cards) {
        Ok(indices) => ParseResult::Action(PlayerAction::Extend {
            target_player,
            target_meld,
            indices,
        }),
        Err(msg) => ParseResult::Invalid(msg),
    }
}

/// Converts 1-based positions to 0-based indices.
fn parse_positions(args: &[&str]) -> Result<Vec<usize>, String> {
    args.iter()
        .map(|a| match a.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(n - 1),
            _ => Err(format!("Invalid position '{}' (positions start at 1)", a)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_draw_sources() {
        assert_eq!(
            parse_player_command("P"),
            ParseResult::Action(PlayerAction::Draw(DrawSource::DiscardTop))
        );
        assert_eq!(
            parse_player_command(" d "),
            ParseResult::Action(PlayerAction::Draw(DrawSource::Deck))
        );
    }

    #[test]
    fn parses_discard_and_call() {
        assert_eq!(
            parse_player_command("discard 12"),
            ParseResult::Action(PlayerAction::Discard(11))
        );
        assert_eq!(parse_player_command("call"), ParseResult::Action(PlayerAction::CallDraw));
        assert!(matches!(parse_player_command("x"), ParseResult::Invalid(_)));
        assert!(matches!(parse_player_command("x 0"), ParseResult::Invalid(_)));
        assert!(matches!(parse_player_command("x 1 2"), ParseResult::Invalid(_)));
    }

    #[test]
    fn parses_sapaw_targets() {
        assert_eq!(
            parse_player_command("sapaw 2 1 4 5"),
            ParseResult::Action(PlayerAction::Extend {
                target_player: 2,
                target_meld: 0,
                indices: vec![3, 4],
            })
        );
        assert!(matches!(parse_player_command("s 2 1"), ParseResult::Invalid(_)));
        assert!(matches!(parse_player_command("s two 1 4"), ParseResult::Invalid(_)));
    }

    #[test]
    fn meld_needs_three_positions() {
        assert!(matches!(parse_player_command("meld 1 2"), ParseResult::Invalid(_)));
        assert!(matches!(parse_player_command("meld 1 b 3"), ParseResult::Invalid(_)));
    }

    #[test]
    fn session_commands() {
        assert_eq!(parse_player_command("HELP"), ParseResult::Help);
        assert_eq!(parse_player_command("quit"), ParseResult::Quit);
        assert_eq!(
            parse_player_command("   "),
            ParseResult::Invalid("Empty input".to_string())
        );
    }
}
