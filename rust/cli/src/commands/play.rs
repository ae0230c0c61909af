//! # Play Command
//!
//! One interactive session: the human takes seat 0 and types commands,
//! seats 1 and 2 are played by a bot planner. Every committed action is
//! echoed as a transcript line as soon as it happens.
//!
//! Settings come from the configuration (see `cfg`), overridden by flags.
//! Entering `quit` or closing stdin abandons the session.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_end_reason, format_entry, format_table};
use crate::io_utils::{ensure_parent_dir, read_stdin_line};
use crate::ui;
use crate::validation::{HELP, ParseResult, parse_player_command};
use std::io::{BufRead, Write};
use std::time::Duration;
use tongits_ai::create_ai;
use tongits_ai::driver::play_bot_turn;
use tongits_engine::engine::Engine;
use tongits_engine::game::HUMAN_SEAT;
use tongits_engine::logger::GameLogger;
use tracing::info;

/// Flag values for `play`; `None` falls back to configuration.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub seed: Option<u64>,
    pub name: Option<String>,
    pub ai: Option<String>,
    pub delay_ms: Option<u64>,
    pub log: Option<String>,
}

/// Handle the play command: one interactive session.
///
/// # Returns
///
/// * `Ok(())` when the session ends or the player quits
/// * `Err(CliError)` for bad settings or I/O failures
pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let mut cfg = match config::load() {
        Ok(c) => c,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(e.into());
        }
    };
    if let Some(name) = opts.name {
        cfg.player_name = name;
    }
    if let Some(ai) = opts.ai {
        cfg.ai = ai;
    }
    if let Some(delay) = opts.delay_ms {
        cfg.bot_delay_ms = delay;
    }
    if let Err(e) = config::validate(&cfg) {
        ui::write_error(err, &e.to_string())?;
        return Err(CliError::InvalidInput(e.to_string()));
    }
    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);

    let planner = create_ai(&cfg.ai)
        .ok_or_else(|| CliError::InvalidInput(format!("unknown ai '{}'", cfg.ai)))?;
    let names = vec![cfg.player_name.clone(), "Bot 1".to_string(), "Bot 2".to_string()];
    let mut engine =
        Engine::with_names(Some(seed), &names).map_err(|e| CliError::Engine(e.to_string()))?;
    let delay = Duration::from_millis(cfg.bot_delay_ms);

    writeln!(out, "play: seed={} ai={}", seed, planner.name())?;
    writeln!(out, "Type 'help' for commands.")?;

    let mut shown = 0usize;
    let mut quit = false;
    loop {
        shown = echo_new_entries(&engine, shown, out)?;
        if engine.is_over() {
            break;
        }
        if engine.is_bot_turn() {
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
            play_bot_turn(&mut engine, planner.as_ref());
            continue;
        }

        writeln!(out)?;
        writeln!(out, "{}", format_table(engine.state(), HUMAN_SEAT))?;
        ui::prompt(out, "> ")?;
        let Some(line) = read_stdin_line(stdin) else {
            quit = true;
            break;
        };
        match parse_player_command(&line) {
            ParseResult::Action(action) => {
                if let Err(e) = engine.try_apply(&action) {
                    ui::write_error(err, &format!("Not allowed: {}", e))?;
                }
            }
            ParseResult::Help => writeln!(out, "{}", HELP)?,
            ParseResult::Quit => {
                quit = true;
                break;
            }
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }

    if quit {
        writeln!(out, "Session abandoned.")?;
    } else {
        write_summary(&engine, out)?;
    }
    info!(seed, ended = engine.is_over(), "play session finished");

    if let Some(path) = opts.log {
        let p = std::path::Path::new(&path);
        if let Err(e) = ensure_parent_dir(p) {
            ui::write_error(err, &e)?;
            return Err(CliError::Io(std::io::Error::other(e)));
        }
        let mut logger = GameLogger::create(p)?;
        let id = logger.next_id();
        logger.write(&engine.record(id))?;
        writeln!(out, "Saved session to {}", path)?;
    }
    Ok(())
}

fn echo_new_entries(engine: &Engine, shown: usize, out: &mut dyn Write) -> Result<usize, CliError> {
    let entries = engine.actions();
    for entry in &entries[shown..] {
        writeln!(out, "{}", format_entry(entry))?;
    }
    Ok(entries.len())
}

fn write_summary(engine: &Engine, out: &mut dyn Write) -> Result<(), CliError> {
    let state = engine.state();
    let (Some(winner), Some(reason)) = (state.winner_player(), state.end_reason) else {
        return Ok(());
    };
    writeln!(out)?;
    writeln!(out, "Game over ({}). Winner: {}", format_end_reason(reason), winner.name)?;
    for p in &state.players {
        writeln!(out, "  {:<8} score {:>3}  streak {}", p.name, p.score, p.consecutive_wins)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_play(script: &str, opts: PlayOptions) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let result = handle_play_command(opts, &mut out, &mut err, &mut input);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn seeded(seed: u64) -> PlayOptions {
        PlayOptions {
            seed: Some(seed),
            delay_ms: Some(0),
            ..PlayOptions::default()
        }
    }

    #[test]
    fn test_quit_abandons_session() {
        let (result, out, _) = run_play("q\n", seeded(42));
        assert!(result.is_ok());
        assert!(out.contains("play: seed=42 ai=BaselineAI"));
        assert!(out.contains("Your hand: 1:"));
        assert!(out.contains("Session abandoned."));
    }

    #[test]
    fn test_eof_counts_as_quit() {
        let (result, out, _) = run_play("", seeded(1));
        assert!(result.is_ok());
        assert!(out.contains("Session abandoned."));
    }

    #[test]
    fn test_turn_is_echoed_and_bots_respond() {
        let (result, out, _) = run_play("d\nx 1\nq\n", seeded(7));
        assert!(result.is_ok());
        assert!(out.contains("[You] Drew "));
        assert!(out.contains("[You] Discarded "));
        assert!(out.contains("[Bot 1] "));
    }

    #[test]
    fn test_rejected_and_invalid_commands_reported() {
        let (result, _, err) = run_play("meld 1 2\nd\nd\nq\n", seeded(3));
        assert!(result.is_ok());
        assert!(err.contains("at least 3 cards"));
        assert!(err.contains("Not allowed: "));
    }

    #[test]
    fn test_unknown_ai_is_rejected() {
        let opts = PlayOptions {
            ai: Some("oracle".into()),
            ..seeded(1)
        };
        let (result, _, err) = run_play("q\n", opts);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(err.contains("oracle"));
    }

    #[test]
    fn test_session_can_be_logged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games").join("play.jsonl");
        let opts = PlayOptions {
            log: Some(path.to_string_lossy().into_owned()),
            ..seeded(5)
        };
        let (result, _, _) = run_play("q\n", opts);
        assert!(result.is_ok());
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("\"seed\":5"));
    }
}
