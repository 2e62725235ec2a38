//! # Hold'em CLI Library
//!
//! Terminal driver for the `holdem-engine` rules engine. The binary is a thin
//! wrapper around [`run`], which parses the command line, resolves the
//! configuration and dispatches to a subcommand handler.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["holdem", "eval", "Ah", "Kh", "Qh", "Jh", "Th"];
//! let code = holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: play hands at the terminal against AI seats, or watch AI seats play
//! - `sim`: AI-only session reporting winners and final stacks
//! - `eval`: rank 5 to 7 cards
//! - `deal`: deal and run out one seeded hand
//! - `cfg`: show the resolved configuration and its sources

use std::io::{BufRead, Write};

use clap::Parser;

#[macro_use]
mod macros;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, HoldemCli};
use commands::play::PlayOptions;
use commands::sim::SimOptions;
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command,
    handle_sim_command,
};

pub use cli::Vs;
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "eval", "deal", "cfg"];

/// Runs the CLI with stdin as the input for interactive play.
///
/// Returns the process exit code: [`exit_code::SUCCESS`] or
/// [`exit_code::ERROR`].
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    run_with_input(args, &mut input, out, err)
}

/// Same as [`run`], reading player actions from `input`.
///
/// ```
/// use std::io::Cursor;
///
/// let mut input = Cursor::new("fold\n");
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// let args = ["holdem", "play", "--seed", "1"];
/// let code = holdem_cli::run_with_input(args, &mut input, &mut out, &mut err);
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("You folds"));
/// ```
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };
    logging::init_logging(cli.verbose);

    match dispatch(cli.cmd, input, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        if write!(out, "{}", e).is_err() {
            return exit_code::ERROR;
        }
        return exit_code::SUCCESS;
    }

    write_or_exit!(err, "{}", e);
    write_or_exit!(err, "Texas Hold'em CLI");
    write_or_exit!(err, "Usage: holdem <command> [options]\n");
    write_or_exit!(err, "Commands:");
    for c in COMMANDS {
        write_or_exit!(err, "  {}", c);
    }
    write_or_exit!(err, "\nFor full help, run: holdem --help");
    exit_code::ERROR
}

fn dispatch(
    cmd: Commands,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    match cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Deal { seed } => handle_deal_command(&config::load()?, seed, out),
        Commands::Sim {
            hands,
            players,
            seed,
            ai,
        } => {
            let opts = SimOptions {
                hands,
                players,
                seed,
                ai,
            };
            handle_sim_command(&config::load()?, opts, out)
        }
        Commands::Play {
            vs,
            hands,
            players,
            seed,
        } => {
            let opts = PlayOptions {
                vs,
                hands,
                players,
                seed,
            };
            handle_play_command(&config::load()?, opts, out, err, input)
        }
    }
}
