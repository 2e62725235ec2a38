//! # Play Command
//!
//! Plays hands at the terminal. Two modes:
//!
//! - **Human vs AI**: seat 0 ("You") is played from stdin, every other seat
//!   by the configured AI policy
//! - **AI vs AI**: every seat is an AI and the hands play out unattended
//!
//! The engine's log lines and the pot are printed after each action. Illegal
//! actions are reported on stderr and the prompt is shown again; `q` or end
//! of input ends the session.

use std::io::{BufRead, Write};

use holdem_ai::{AiSeat, create_ai};
use holdem_engine::engine::{ActionProvider, ActionRequest, Engine, HandProgress};
use holdem_engine::player::PlayerAction;

use crate::cli::Vs;
use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{
    action_choices, format_action, format_board, format_request, format_stacks, format_summary,
};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};

pub struct PlayOptions {
    pub vs: Vs,
    pub hands: Option<u32>,
    pub players: Option<u8>,
    pub seed: Option<u64>,
}

/// What the seat at the keyboard decided.
enum Turn {
    Applied(HandProgress),
    Quit,
}

pub fn handle_play_command(
    cfg: &Config,
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let hands = opts.hands.unwrap_or(1);
    if hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let players = opts.players.map_or(cfg.players, usize::from);
    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let all_ai = opts.vs == Vs::Ai;

    let mut eng = Engine::new(cfg.table(players, seed, all_ai))?;
    let mut ais = Vec::with_capacity(players);
    for (i, p) in eng.players().iter().enumerate() {
        let seat = if p.is_human() {
            None
        } else {
            Some(AiSeat::new(create_ai(&cfg.ai, seed.wrapping_add(i as u64))?))
        };
        ais.push(seat);
    }

    writeln!(
        out,
        "play: vs={} hands={} players={} seed={}",
        opts.vs.as_str(),
        hands,
        players,
        seed
    )?;
    let (sb, bb) = eng.blinds();
    writeln!(out, "Blinds: SB={} BB={}", sb, bb)?;

    let mut played = 0u32;
    let mut quit = false;
    'session: while played < hands {
        if eng.is_game_over() {
            writeln!(out, "Game over")?;
            break;
        }
        let mut progress = eng.start_hand()?;
        print_events(&mut eng, out)?;

        loop {
            let req = match progress {
                HandProgress::Complete(summary) => {
                    for line in format_summary(&summary, eng.players()) {
                        writeln!(out, "{}", line)?;
                    }
                    break;
                }
                HandProgress::AwaitingAction(req) => req,
            };

            progress = match ais.get_mut(req.player_id).and_then(Option::as_mut) {
                Some(ai) => ai_turn(&mut eng, ai, &req)?,
                None => match human_turn(&mut eng, &req, out, err, stdin)? {
                    Turn::Applied(p) => p,
                    Turn::Quit => {
                        quit = true;
                        break 'session;
                    }
                },
            };
            print_events(&mut eng, out)?;
            if matches!(progress, HandProgress::AwaitingAction(_)) {
                writeln!(out, "Pot: {}", eng.pot_total())?;
            }
        }
        played += 1;
    }

    if quit {
        writeln!(out, "Session ended by user")?;
    }
    writeln!(out, "Hands played: {} (completed)", played)?;
    writeln!(out, "Final stacks: {}", format_stacks(eng.players()))?;
    Ok(())
}

fn print_events(eng: &mut Engine, out: &mut dyn Write) -> Result<(), CliError> {
    for event in eng.take_events() {
        writeln!(out, "{}", event)?;
    }
    Ok(())
}

/// An AI that proposes an illegal action is folded.
fn ai_turn(eng: &mut Engine, ai: &mut AiSeat, req: &ActionRequest) -> Result<HandProgress, CliError> {
    let view = eng.view_for(req.player_id);
    let action = ai.decide(&view, req);
    match eng.apply_action(req.player_id, action) {
        Ok(progress) => Ok(progress),
        Err(e) => {
            tracing::warn!(player = req.player_id, ai = ai.name(), error = %e, "AI action rejected, folding");
            Ok(eng.apply_action(req.player_id, PlayerAction::Fold)?)
        }
    }
}

fn human_turn(
    eng: &mut Engine,
    req: &ActionRequest,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Turn, CliError> {
    let view = eng.view_for(req.player_id);
    loop {
        writeln!(out, "Board: {}", format_board(&view.community))?;
        if let Some(seat) = view.players.get(req.player_id) {
            writeln!(out, "{}", format_request(seat, req, view.pot_total))?;
        }
        write!(out, "Enter action ({}): ", action_choices(req))?;
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            return Ok(Turn::Quit);
        };
        match parse_player_action(&line) {
            ParseResult::Action(action) => match eng.apply_action(req.player_id, action) {
                Ok(progress) => return Ok(Turn::Applied(progress)),
                Err(e) => {
                    // The rejection is already reported here; drop its log entry
                    eng.take_events();
                    ui::write_error(err, &format!("Cannot {}: {}", format_action(&action), e))?;
                }
            },
            ParseResult::Quit => return Ok(Turn::Quit),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(vs: Vs, hands: u32, input: &str) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let opts = PlayOptions {
            vs,
            hands: Some(hands),
            players: None,
            seed: Some(42),
        };
        let result = handle_play_command(&Config::default(), opts, &mut out, &mut err, &mut stdin);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn quit_before_acting() {
        // Heads-up, seat 0 deals first and acts first pre-flop
        let (result, out, _) = play(Vs::Human, 1, "q\n");
        assert!(result.is_ok());
        assert!(out.contains("Enter action (fold/call/raise <n>/allin/q): "));
        assert!(out.contains("Session ended by user"));
        assert!(out.contains("Hands played: 0 (completed)"));
    }

    #[test]
    fn folding_the_small_blind() {
        let (result, out, _) = play(Vs::Human, 1, "fold\n");
        assert!(result.is_ok());
        assert!(out.contains("You folds"));
        assert!(out.contains("AI-1 wins 30 (main pot)"));
        assert!(out.contains("Hands played: 1 (completed)"));
        assert!(out.contains("Final stacks: You=990 AI-1=1010"));
    }

    #[test]
    fn illegal_input_reprompts() {
        let (result, out, err) = play(Vs::Human, 1, "dance\nbet 40\nfold\n");
        assert!(result.is_ok());
        assert!(err.contains("Unrecognized action 'dance'"));
        assert!(err.contains("Cannot bet 40"));
        assert_eq!(out.matches("Enter action").count(), 3);
        assert!(out.contains("Hands played: 1 (completed)"));
    }

    #[test]
    fn end_of_input_quits() {
        let (result, out, _) = play(Vs::Human, 3, "");
        assert!(result.is_ok());
        assert!(out.contains("Session ended by user"));
    }

    #[test]
    fn ai_only_session() {
        let (result, out, err) = play(Vs::Ai, 3, "");
        assert!(result.is_ok());
        assert!(out.starts_with("play: vs=ai hands=3 players=2 seed=42\n"));
        assert!(!out.contains("Enter action"));
        assert!(out.contains("--- Hand #1"));
        assert!(err.is_empty());
    }

    #[test]
    fn zero_hands_is_rejected() {
        let (result, _, _) = play(Vs::Ai, 0, "");
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
