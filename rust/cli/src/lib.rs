//! # Tongits CLI Library
//!
//! Command-line front end for the Tongits engine: play a session in the
//! terminal against two bots, simulate bot-only sessions, and summarize
//! recorded sessions.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `play`: Play one session as seat 0 against two bots
//! - `sim`: Run bot-only sessions and write JSONL records
//! - `stats`: Aggregate statistics from JSONL session records
//! - `deal`: Deal a single session for inspection
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Cursor, Write};

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, TongitsCli};
use commands::{
    PlayOptions, handle_cfg_command, handle_deal_command, handle_play_command, handle_sim_command,
    handle_stats_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "stats", "deal", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["tongits", "deal", "--seed", "42"];
/// let code = tongits_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
///
/// # Available Commands
///
/// - `play [--seed N] [--name NAME] [--ai AI] [--delay-ms MS] [--log FILE]`
/// - `sim --games N [--seed N] [--output FILE] [--ai AI]`
/// - `stats --input PATH`
/// - `deal [--seed N]`
/// - `cfg`
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match TongitsCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Tongits CLI");
            write_or_exit!(err, "Usage: tongits <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: tongits --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Play {
            seed,
            name,
            ai,
            delay_ms,
            log,
        } => {
            let opts = PlayOptions {
                seed,
                name,
                ai,
                delay_ms,
                log,
            };
            match io_utils::scripted_input() {
                Some(script) => {
                    let mut input = Cursor::new(script.into_bytes());
                    handle_play_command(opts, out, err, &mut input)
                }
                None => {
                    let stdin = std::io::stdin();
                    let mut lock = stdin.lock();
                    handle_play_command(opts, out, err, &mut lock as &mut dyn BufRead)
                }
            }
        }
        Commands::Sim {
            games,
            seed,
            output,
            ai,
        } => handle_sim_command(games, seed, output, ai, out, err),
        Commands::Stats { input } => handle_stats_command(input, out, err),
        Commands::Deal { seed } => handle_deal_command(seed, out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
