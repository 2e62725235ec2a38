//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "holdem",
    version,
    about = "Texas Hold'em rules engine: play, simulate, and evaluate hands"
)]
pub struct HoldemCli {
    /// Log engine events to stderr (same as RUST_LOG=info)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play hands at the terminal, seat 0 against AI opponents
    Play {
        #[arg(long, value_enum, default_value_t = Vs::Human)]
        vs: Vs,
        #[arg(long)]
        hands: Option<u32>,
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=22))]
        players: Option<u8>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run an AI-only session and report the results
    Sim {
        #[arg(long)]
        hands: u32,
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=22))]
        players: Option<u8>,
        #[arg(long)]
        seed: Option<u64>,
        /// Policy for every seat: baseline or simple
        #[arg(long)]
        ai: Option<String>,
    },
    /// Evaluate 5 to 7 cards, e.g. `holdem eval Ah Kh Qh Jh Th 2s 3s`
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Deal and run out one hand for inspection
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Opponent type for the `play` command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Vs {
    /// Seat 0 is played from the terminal
    Human,
    /// Every seat is an AI (watch mode)
    Ai,
}

impl Vs {
    pub fn as_str(&self) -> &'static str {
        match self {
            Vs::Human => "human",
            Vs::Ai => "ai",
        }
    }
}
