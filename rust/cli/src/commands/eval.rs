//! `eval`: ranks the best five-card hand from 5 to 7 cards.

use std::io::Write;

use holdem_engine::hand::evaluate_hand;

use crate::error::CliError;
use crate::formatters::format_board;
use crate::validation::parse_hand_cards;

pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_hand_cards(cards).map_err(CliError::InvalidInput)?;
    let strength = evaluate_hand(&cards)?;

    writeln!(out, "Cards: {}", format_board(&cards))?;
    writeln!(out, "Hand: {}", strength.category)?;
    writeln!(out, "Best five: {}", format_board(&strength.best_five))?;
    let kickers: Vec<String> = strength.kickers.iter().map(u8::to_string).collect();
    writeln!(out, "Tie-break: {}", kickers.join(" "))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(args: &[&str]) -> Result<String, CliError> {
        let cards: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        handle_eval_command(&cards, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn royal_flush_from_seven_cards() {
        let out = eval(&["Ah", "Kh", "Qh", "Jh", "Th", "2s", "3s"]).unwrap();
        assert!(out.contains("Hand: Royal Flush"), "{}", out);
        assert!(out.contains("Tie-break: 14"));
    }

    #[test]
    fn wheel_plays_five_high() {
        let out = eval(&["Ah 2d 3s 4c 5h"]).unwrap();
        assert!(out.contains("Hand: Straight"));
        assert!(out.contains("Tie-break: 5\n"));
    }

    #[test]
    fn bad_input_is_reported() {
        assert!(matches!(eval(&["Ah", "Kh"]), Err(CliError::InvalidInput(_))));
        assert!(matches!(
            eval(&["Ah Kh Qh Jh Th Ah"]),
            Err(CliError::InvalidInput(_))
        ));
    }
}
