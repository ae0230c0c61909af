//! Statistics aggregation over JSONL session records.
//!
//! Accepts a single file or a directory searched recursively for `*.jsonl`.
//! Reports sessions, wins per seat, how sessions ended and the average
//! winning score.

use crate::error::CliError;
use crate::io_utils::read_text;
use crate::parse_json_or_continue;
use crate::ui;
use std::io::Write;
use std::path::Path;
use tongits_engine::logger::{EndReason, GameRecord};
use tongits_engine::rules::PLAYER_COUNT;

#[derive(Debug, Default)]
struct StatsState {
    games: u64,
    wins: [u64; PLAYER_COUNT],
    tongits: u64,
    call_draw: u64,
    deck_exhausted: u64,
    unfinished: u64,
    winning_score_total: u64,
    corrupted: u64,
}

impl StatsState {
    fn add(&mut self, rec: &GameRecord) {
        self.games += 1;
        match rec.end_reason {
            Some(EndReason::Tongits) => self.tongits += 1,
            Some(EndReason::CallDraw) => self.call_draw += 1,
            Some(EndReason::DeckExhausted) => self.deck_exhausted += 1,
            None => self.unfinished += 1,
        }
        if let Some(w) = rec.winner
            && w < PLAYER_COUNT
        {
            self.wins[w] += 1;
            self.winning_score_total += u64::from(rec.scores.get(w).copied().unwrap_or(0));
        }
    }

    fn average_winning_score(&self) -> f64 {
        let decided: u64 = self.wins.iter().sum();
        if decided == 0 {
            0.0
        } else {
            self.winning_score_total as f64 / decided as f64
        }
    }
}

/// Aggregates statistics from JSONL session files.
///
/// # Returns
///
/// `Ok(())` when the input could be read, otherwise an `Err` that maps to
/// exit code `2`. A single file with only unreadable records is an error.
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let path = Path::new(&input);
    let mut state = StatsState::default();

    if path.is_dir() {
        let mut stack = vec![path.to_path_buf()];
        while let Some(d) = stack.pop() {
            let Ok(rd) = std::fs::read_dir(&d) else {
                continue;
            };
            for e in rd.filter_map(Result::ok) {
                let p = e.path();
                if p.is_dir() {
                    stack.push(p);
                } else if p.extension().is_some_and(|ext| ext == "jsonl") {
                    match read_text(&p.to_string_lossy()) {
                        Ok(content) => consume(&content, &mut state, err),
                        Err(_) => state.corrupted += 1,
                    }
                }
            }
        }
    } else {
        match read_text(&input) {
            Ok(content) => consume(&content, &mut state, err),
            Err(e) => {
                ui::write_error(err, &format!("Failed to read {}: {}", input, e))?;
                return Err(CliError::InvalidInput(format!("Failed to read {}: {}", input, e)));
            }
        }
    }

    if state.corrupted > 0 {
        ui::write_error(err, &format!("Skipped {} corrupted record(s)", state.corrupted))?;
    }
    if !path.is_dir() && state.games == 0 && state.corrupted > 0 {
        return Err(CliError::InvalidInput("Invalid record".to_string()));
    }

    let summary = serde_json::json!({
        "games": state.games,
        "wins": state.wins,
        "endings": {
            "tongits": state.tongits,
            "call_draw": state.call_draw,
            "deck_exhausted": state.deck_exhausted,
            "unfinished": state.unfinished,
        },
        "average_winning_score": state.average_winning_score(),
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
    Ok(())
}

fn consume(content: &str, state: &mut StatsState, err: &mut dyn Write) {
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        // counted first; undone once the line parses
        state.corrupted += 1;
        let rec: GameRecord = parse_json_or_continue!(line, err, i + 1);
        state.corrupted -= 1;
        state.add(&rec);
    }
}
