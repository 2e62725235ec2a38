//! Parsing of user input: actions typed at the prompt and card lists given
//! on the command line.

use std::collections::HashSet;

use holdem_engine::cards::Card;
use holdem_engine::player::PlayerAction;

/// Outcome of parsing one prompt line.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(PlayerAction),
    /// `q` or `quit`
    Quit,
    /// Unusable input, with a message for the user
    Invalid(String),
}

/// Parses a prompt line (case-insensitive):
/// - `f` / `fold`
/// - `x` / `check`, `c` / `call`
/// - `bet N`, `raise N` (for a raise, N is the amount on top of the call)
/// - `allin` / `all-in` / `a`
/// - `q` / `quit`
///
/// ```rust
/// use holdem_cli::validation::{parse_player_action, ParseResult};
/// use holdem_engine::player::PlayerAction;
///
/// assert_eq!(parse_player_action("bet 100"), ParseResult::Action(PlayerAction::Bet(100)));
/// assert_eq!(parse_player_action("Q"), ParseResult::Quit);
/// assert!(matches!(parse_player_action("limp"), ParseResult::Invalid(_)));
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&verb) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match verb {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "x" => ParseResult::Action(PlayerAction::Check),
        "call" | "c" => ParseResult::Action(PlayerAction::Call),
        "allin" | "all-in" | "a" => ParseResult::Action(PlayerAction::AllIn),
        "bet" | "b" => parse_amount(parts.get(1), "Bet").map_or_else(ParseResult::Invalid, |n| {
            ParseResult::Action(PlayerAction::Bet(n))
        }),
        "raise" | "r" => parse_amount(parts.get(1), "Raise")
            .map_or_else(ParseResult::Invalid, |n| ParseResult::Action(PlayerAction::Raise(n))),
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, bet <amount>, raise <amount>, allin, q",
            verb
        )),
    }
}

fn parse_amount(word: Option<&&str>, verb: &str) -> Result<u32, String> {
    let Some(word) = word else {
        return Err(format!(
            "{} requires an amount (e.g., '{} 100')",
            verb,
            verb.to_lowercase()
        ));
    };
    match word.parse::<u32>() {
        Ok(0) => Err(format!("{} amount must be positive", verb)),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("Invalid {} amount '{}'", verb.to_lowercase(), word)),
    }
}

/// Parses card arguments such as `["Ah", "Kh", "Qh,Jh", "10h"]` into 5 to 7
/// distinct cards.
pub fn parse_hand_cards<S: AsRef<str>>(args: &[S]) -> Result<Vec<Card>, String> {
    let mut cards = Vec::new();
    for arg in args {
        let parsed = holdem_engine::cards::parse_cards(arg.as_ref()).map_err(|e| e.to_string())?;
        cards.extend(parsed);
    }
    if !(5..=7).contains(&cards.len()) {
        return Err(format!("expected 5 to 7 cards, got {}", cards.len()));
    }
    let mut seen = HashSet::new();
    if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
        return Err(format!("duplicate card {}", dup));
    }
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_forms() {
        assert_eq!(parse_player_action("f"), ParseResult::Action(PlayerAction::Fold));
        assert_eq!(parse_player_action("x"), ParseResult::Action(PlayerAction::Check));
        assert_eq!(parse_player_action(" C "), ParseResult::Action(PlayerAction::Call));
        assert_eq!(parse_player_action("all-in"), ParseResult::Action(PlayerAction::AllIn));
        assert_eq!(parse_player_action("r 40"), ParseResult::Action(PlayerAction::Raise(40)));
        assert_eq!(parse_player_action("quit"), ParseResult::Quit);
    }

    #[test]
    fn amounts_are_required_and_positive() {
        let ParseResult::Invalid(msg) = parse_player_action("bet") else {
            panic!("bet without amount");
        };
        assert!(msg.contains("requires an amount"));
        assert_eq!(
            parse_player_action("raise 0"),
            ParseResult::Invalid("Raise amount must be positive".into())
        );
        assert!(matches!(parse_player_action("bet lots"), ParseResult::Invalid(_)));
        assert!(matches!(parse_player_action(""), ParseResult::Invalid(_)));
    }

    #[test]
    fn hand_cards() {
        let cards = parse_hand_cards(&["Ah", "Kh,Qh", "Jh", "10h"]).unwrap();
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[4].to_string(), "Th");

        assert!(parse_hand_cards(&["Ah Kh Qh Jh"]).unwrap_err().contains("got 4"));
        assert!(parse_hand_cards(&["Ah Ah Qh Jh Th"]).unwrap_err().contains("duplicate"));
        assert!(parse_hand_cards(&["Ah Kh Qh Jh Zz"]).is_err());
    }
}
