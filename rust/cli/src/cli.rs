//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "tongits",
    version,
    about = "Tongits: three-seat Filipino rummy against two computer opponents"
)]
pub struct TongitsCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one session in the terminal against two bots
    Play {
        /// Shuffle seed (overrides configuration)
        #[arg(long)]
        seed: Option<u64>,
        /// Name shown for the human seat
        #[arg(long)]
        name: Option<String>,
        /// Planner used for the bot seats
        #[arg(long)]
        ai: Option<String>,
        /// Pause before each bot turn, in milliseconds
        #[arg(long = "delay-ms")]
        delay_ms: Option<u64>,
        /// Append the finished session to this JSONL file
        #[arg(long)]
        log: Option<String>,
    },
    /// Run bot-only sessions and optionally record them
    Sim {
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        games: u64,
        /// Base seed; session i uses seed + i
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        output: Option<String>,
        #[arg(long)]
        ai: Option<String>,
    },
    /// Summarize JSONL session records
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Show a single deal
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}
