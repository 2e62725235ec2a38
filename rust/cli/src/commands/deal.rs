//! `deal`: deals one hand for inspection and checks it down to showdown.
//!
//! The seed makes the deal reproducible: the same seed (and player count)
//! always shows the same hole cards, board and winners.

use std::io::Write;

use holdem_engine::engine::{Engine, HandProgress};
use holdem_engine::player::PlayerAction;

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_board, format_summary};

pub fn handle_deal_command(
    cfg: &Config,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut eng = Engine::new(cfg.table(cfg.players, seed, true))?;
    writeln!(out, "deal: seed={} players={}", seed, cfg.players)?;

    let mut progress = eng.start_hand()?;
    let table = eng.snapshot();
    for p in &table.players {
        let hole = p.hole_cards.as_deref().unwrap_or(&[]);
        writeln!(out, "Hole {}: {}", p.name, format_board(hole))?;
    }

    // Everyone checks or calls so the whole board comes out
    let summary = loop {
        match progress {
            HandProgress::Complete(summary) => break summary,
            HandProgress::AwaitingAction(req) => {
                let action = if req.to_call > 0 {
                    PlayerAction::Call
                } else {
                    PlayerAction::Check
                };
                progress = eng.apply_action(req.player_id, action)?;
            }
        }
    };

    writeln!(out, "Board: {}", format_board(&summary.board))?;
    for line in format_summary(&summary, eng.players()).iter().skip(1) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(seed: u64) -> String {
        let mut out = Vec::new();
        handle_deal_command(&Config::default(), Some(seed), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn shows_every_seat_and_a_full_board() {
        let out = deal(42);
        assert!(out.starts_with("deal: seed=42 players=2\n"));
        assert!(out.contains("Hole AI-0: ["));
        assert!(out.contains("Hole AI-1: ["));
        let board = out.lines().find(|l| l.starts_with("Board: ")).unwrap();
        assert_eq!(board.split_whitespace().count(), 6);
        assert!(out.contains(" wins "));
    }

    #[test]
    fn same_seed_same_deal() {
        assert_eq!(deal(7), deal(7));
    }
}
