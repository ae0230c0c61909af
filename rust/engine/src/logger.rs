use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Kind of a completed transition recorded in the action log.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    Draw,
    Meld,
    /// Extension of an exposed meld
    Sapaw,
    Discard,
    /// Voluntary call or forced resolution on deck exhaustion
    CallDraw,
    /// Hand emptied; instant win
    Tongits,
}

/// One entry of the append-only action log.
/// Entries are created once per committed transition and never modified.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameAction {
    pub kind: ActionKind,
    /// Name of the acting player
    pub player: String,
    /// Human-readable description
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<Card>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_discard: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_player: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_meld: Option<usize>,
}

impl GameAction {
    pub fn new(kind: ActionKind, player: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            kind,
            player: player.into(),
            details: details.into(),
            card: None,
            cards: None,
            from_discard: None,
            target_player: None,
            target_meld: None,
        }
    }

    pub fn with_card(mut self, card: Card) -> Self {
        self.card = Some(card);
        self
    }

    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = Some(cards);
        self
    }

    pub fn with_target(mut self, player: usize, meld: usize) -> Self {
        self.target_player = Some(player);
        self.target_meld = Some(meld);
        self
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// A seat emptied its hand
    Tongits,
    /// A seat called a draw
    CallDraw,
    /// The deck ran out and scores were compared
    DeckExhausted,
}

/// Complete record of one finished session.
/// Serialized to JSONL format for session history and statistics.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier for this session (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// RNG seed used for the shuffle, if known
    pub seed: Option<u64>,
    /// Winning seat
    pub winner: Option<usize>,
    pub end_reason: Option<EndReason>,
    /// Final score per seat
    pub scores: Vec<u32>,
    /// Chronological action log
    pub actions: Vec<GameAction>,
    /// Timestamp when the session finished (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct GameLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
