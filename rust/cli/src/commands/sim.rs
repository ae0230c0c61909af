//! Simulation command handler: bot-only sessions in bulk.
//!
//! Every seat is autoplayed by the chosen planner. Session `i` is dealt from
//! seed `base + i`, so a run is reproducible from its base seed. Finished
//! sessions can be appended to a JSONL file as `GameRecord`s.
//!
//! # Environment Variables
//!
//! - `TONGITS_SIM_BREAK_AFTER`: stop after N sessions and report an interruption (for testing)

use crate::config;
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::ui;
use std::io::Write;
use tongits_ai::driver::autoplay_turn;
use tongits_ai::{TurnPlanner, create_ai};
use tongits_engine::engine::Engine;
use tongits_engine::logger::{EndReason, GameLogger};
use tongits_engine::rules::PLAYER_COUNT;
use tracing::{debug, warn};

/// Turns after which a session is considered stuck.
const MAX_TURNS_PER_SESSION: usize = 500;

/// Handle the sim command.
///
/// # Arguments
///
/// * `games` - Number of sessions to play (must be >= 1)
/// * `seed` - Base seed; falls back to configuration, then random
/// * `output` - JSONL path receiving one record per session
/// * `ai` - Planner name; falls back to configuration
pub fn handle_sim_command(
    games: u64,
    seed: Option<u64>,
    output: Option<String>,
    ai: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let cfg = config::load()?;
    let ai_name = ai.unwrap_or(cfg.ai);
    let Some(planner) = create_ai(&ai_name) else {
        ui::write_error(err, &format!("unknown ai '{}'", ai_name))?;
        return Err(CliError::InvalidInput(format!("unknown ai '{}'", ai_name)));
    };
    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut logger = match &output {
        Some(path) => {
            let p = std::path::Path::new(path);
            if let Err(e) = ensure_parent_dir(p) {
                ui::write_error(err, &e)?;
                return Err(CliError::Io(std::io::Error::other(e)));
            }
            Some(GameLogger::create(p)?)
        }
        None => None,
    };

    let break_after = std::env::var("TONGITS_SIM_BREAK_AFTER")
        .ok()
        .and_then(|v| v.parse::<u64>().ok());

    writeln!(out, "sim: games={} seed={} ai={}", games, base_seed, planner.name())?;
    let mut wins = [0u64; PLAYER_COUNT];
    let mut tongits = 0u64;
    let mut completed = 0u64;

    for i in 0..games {
        let seed = base_seed.wrapping_add(i);
        let engine = play_session(seed, planner.as_ref())?;
        let state = engine.state();
        if let Some(w) = state.winner {
            wins[w] += 1;
        }
        if state.end_reason == Some(EndReason::Tongits) {
            tongits += 1;
        }
        if let Some(l) = logger.as_mut() {
            let id = l.next_id();
            l.write(&engine.record(id))?;
        }
        completed += 1;
        debug!(seed, winner = ?state.winner, "session simulated");

        if let Some(b) = break_after
            && completed == b
            && completed < games
        {
            writeln!(out, "Interrupted: saved {}/{}", completed, games)?;
            return Err(CliError::Interrupted(format!(
                "Interrupted: saved {}/{}",
                completed, games
            )));
        }
    }

    writeln!(out, "Simulated: {} games", completed)?;
    for (seat, w) in wins.iter().enumerate() {
        writeln!(out, "  seat {} wins: {}", seat, w)?;
    }
    writeln!(out, "  tongits endings: {}", tongits)?;
    Ok(())
}

/// Plays one bot-only session to the end.
fn play_session(seed: u64, planner: &dyn TurnPlanner) -> Result<Engine, CliError> {
    let mut engine = Engine::new(Some(seed));
    let mut turns = 0usize;
    while !engine.is_over() {
        autoplay_turn(&mut engine, planner);
        turns += 1;
        if turns > MAX_TURNS_PER_SESSION {
            warn!(seed, turns, "session did not finish");
            return Err(CliError::Engine(format!(
                "session with seed {} did not finish",
                seed
            )));
        }
    }
    Ok(engine)
}
