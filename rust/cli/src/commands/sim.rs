//! `sim`: an AI-only session at one table.
//!
//! Every seat plays the same policy. Each hand's awards are printed as they
//! happen; the session ends after the requested number of hands or when only
//! one seat has chips left.

use std::io::Write;

use holdem_ai::{AiSeat, create_ai};
use holdem_engine::engine::{ActionProvider, Engine};

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::format_stacks;

pub struct SimOptions {
    pub hands: u32,
    pub players: Option<u8>,
    pub seed: Option<u64>,
    pub ai: Option<String>,
}

pub fn handle_sim_command(
    cfg: &Config,
    opts: SimOptions,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let players = opts.players.map_or(cfg.players, usize::from);
    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let ai = opts.ai.as_deref().unwrap_or(&cfg.ai);

    let mut eng = Engine::new(cfg.table(players, seed, true))?;
    let mut seats: Vec<Box<dyn ActionProvider>> = Vec::with_capacity(players);
    for i in 0..players {
        let policy = create_ai(ai, seed.wrapping_add(i as u64))?;
        seats.push(Box::new(AiSeat::new(policy)));
    }

    writeln!(
        out,
        "sim: hands={} players={} ai={} seed={}",
        opts.hands, players, ai, seed
    )?;

    let mut played = 0u32;
    while played < opts.hands && !eng.is_game_over() {
        let summary = eng.play_hand(&mut seats)?;
        played += 1;
        tracing::debug!(hand = summary.hand_number, "sim hand complete");

        let winners: Vec<String> = summary
            .winners()
            .into_iter()
            .map(|id| format!("{} +{}", eng.players()[id].name(), summary.won_by(id)))
            .collect();
        writeln!(out, "Hand {}: {}", summary.hand_number, winners.join(", "))?;
    }

    if eng.is_game_over() && played < opts.hands {
        writeln!(out, "Game over after {} hands", played)?;
    }
    writeln!(out, "Hands played: {}", played)?;
    writeln!(out, "Final stacks: {}", format_stacks(eng.players()))?;
    Ok(())
}
