//! Card, board, and action formatters for terminal display.
//!
//! Suits print as Unicode symbols (♥ ♦ ♣ ♠) where the terminal is known to
//! render them, and as the letters `h d c s` otherwise.
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_cli::formatters::{format_board, format_card};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! ```

use holdem_engine::cards::{Card, Suit};
use holdem_engine::engine::{ActionRequest, PlayerView};
use holdem_engine::logger::HandSummary;
use holdem_engine::player::{Player, PlayerAction};

/// Unix terminals are assumed to render Unicode; on Windows only the modern
/// hosts (Windows Terminal, VS Code, anything setting TERM_PROGRAM) do.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.letter().to_string()
    }
}

/// "A♠" (Unicode) or "As" (ASCII).
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(card.suit))
}

/// Bracketed card list, `[]` when empty.
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// ```rust
/// use holdem_engine::player::PlayerAction;
/// use holdem_cli::formatters::format_action;
///
/// assert_eq!(format_action(&PlayerAction::Fold), "fold");
/// assert_eq!(format_action(&PlayerAction::Bet(100)), "bet 100");
/// assert_eq!(format_action(&PlayerAction::AllIn), "all-in");
/// ```
pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Fold => "fold".to_string(),
        PlayerAction::Check => "check".to_string(),
        PlayerAction::Call => "call".to_string(),
        PlayerAction::Bet(amount) => format!("bet {}", amount),
        PlayerAction::Raise(amount) => format!("raise {}", amount),
        PlayerAction::AllIn => "all-in".to_string(),
    }
}

/// Line shown before asking a seat for a decision, e.g.
/// `You [A♠ K♥] stack 980 | to call 10 | pot 30`.
pub fn format_request(seat: &PlayerView, req: &ActionRequest, pot: u32) -> String {
    let hole = seat.hole_cards.as_deref().unwrap_or(&[]);
    let mut line = format!(
        "{} {} stack {} | to call {} | pot {}",
        seat.name,
        format_board(hole),
        req.stack,
        req.to_call,
        pot
    );
    if req.raise_allowed && req.stack > req.to_call {
        line.push_str(&format!(" | min raise {}", req.min_raise));
    }
    line
}

/// Actions that make sense for the request, in prompt order.
pub fn action_choices(req: &ActionRequest) -> String {
    let mut choices = vec!["fold"];
    if req.to_call == 0 {
        choices.push("check");
        if req.raise_allowed {
            choices.push("bet <n>");
        }
    } else {
        choices.push("call");
        if req.raise_allowed && req.stack > req.to_call {
            choices.push("raise <n>");
        }
    }
    choices.push("allin");
    choices.push("q");
    choices.join("/")
}

pub fn format_summary(summary: &HandSummary, players: &[Player]) -> Vec<String> {
    let name = |id: usize| players.get(id).map(|p| p.name()).unwrap_or("?");
    let mut lines = vec![format!(
        "Hand #{} board {}",
        summary.hand_number,
        format_board(&summary.board)
    )];
    for (id, strength) in &summary.showdown {
        lines.push(format!("  {} shows {}", name(*id), strength));
    }
    for award in &summary.awards {
        let pot = if award.pot == 0 {
            "main pot".to_string()
        } else {
            format!("side pot {}", award.pot)
        };
        lines.push(format!("  {} wins {} ({})", name(award.player_id), award.amount, pot));
    }
    lines
}

pub fn format_stacks(players: &[Player]) -> String {
    players
        .iter()
        .map(|p| format!("{}={}", p.name(), p.stack()))
        .collect::<Vec<_>>()
        .join(" ")
}
