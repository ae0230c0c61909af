use thiserror::Error;

/// Why the engine refused a command. Commands never surface this to callers;
/// it is recorded in diagnostic logs and returned by the lower-level `try_*` API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Game has already ended")]
    GameEnded,
    #[error("Player {seat} has already drawn this turn")]
    AlreadyDrawn { seat: usize },
    #[error("Deck is empty")]
    DeckEmpty,
    #[error("Invalid card selection: {indices:?}")]
    InvalidSelection { indices: Vec<usize> },
    #[error("Selected cards do not form a valid meld")]
    InvalidMeld,
    #[error("No exposed meld {meld} for player {player}")]
    NoSuchMeld { player: usize, meld: usize },
    #[error("Player {seat} cannot call draw: {reason}")]
    CallDrawNotAllowed { seat: usize, reason: &'static str },
    #[error("Expected {expected} seat names, got {got}")]
    SeatNames { expected: usize, got: usize },
    #[error("Seat {seat} is not a bot seat")]
    NotBotSeat { seat: usize },
}
