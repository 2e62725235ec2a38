//! # holdem-ai: Computer Opponents for Texas Hold'em
//!
//! Decision policies that plug into the engine's [`ActionProvider`] seam.
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait every policy implements
//! - [`baseline`] - Deterministic rule-based policy (hand charts and pot odds)
//! - [`simple`] - Loose randomised policy driven by a seeded RNG
//! - [`create_ai`] - Factory selecting a policy by name
//! - [`AiSeat`] - Adapter seating a boxed policy at an engine table
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::{create_ai, AiSeat};
//! use holdem_engine::engine::{ActionProvider, Engine, TableConfig};
//!
//! let mut engine = Engine::new(TableConfig::with_players(3, 1000).with_seed(42)).unwrap();
//! let mut seats: Vec<Box<dyn ActionProvider>> = (0..3)
//!     .map(|i| Box::new(AiSeat::new(create_ai("baseline", i).unwrap())) as Box<dyn ActionProvider>)
//!     .collect();
//! let summary = engine.play_hand(&mut seats).unwrap();
//! assert!(!summary.awards.is_empty());
//! ```

use std::str::FromStr;

use holdem_engine::engine::{ActionProvider, ActionRequest, TableSnapshot};
use holdem_engine::player::PlayerAction;
use thiserror::Error;

pub mod baseline;
pub mod simple;

/// A computer player.
///
/// # Example Implementation
///
/// ```rust
/// use holdem_ai::AIOpponent;
/// use holdem_engine::engine::{ActionRequest, TableSnapshot};
/// use holdem_engine::player::PlayerAction;
///
/// struct CallingStation;
///
/// impl AIOpponent for CallingStation {
///     fn get_action(&mut self, _view: &TableSnapshot, req: &ActionRequest) -> PlayerAction {
///         if req.to_call > 0 { PlayerAction::Call } else { PlayerAction::Check }
///     }
///
///     fn name(&self) -> &str {
///         "CallingStation"
///     }
/// }
/// ```
pub trait AIOpponent: Send {
    /// Picks the next action. `view` is the table as the acting seat sees it;
    /// `request` is what that seat is facing.
    fn get_action(&mut self, view: &TableSnapshot, request: &ActionRequest) -> PlayerAction;

    fn name(&self) -> &str;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AiError {
    #[error("Unknown AI type: {0} (expected one of: baseline, simple)")]
    UnknownKind(String),
}

/// Available policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiKind {
    Baseline,
    Simple,
}

impl AiKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AiKind::Baseline => "baseline",
            AiKind::Simple => "simple",
        }
    }
}

impl FromStr for AiKind {
    type Err = AiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "baseline" => Ok(AiKind::Baseline),
            "simple" => Ok(AiKind::Simple),
            other => Err(AiError::UnknownKind(other.to_string())),
        }
    }
}

/// Creates a policy by name. `seed` drives policies that randomise; the
/// baseline ignores it.
///
/// ```rust
/// use holdem_ai::create_ai;
///
/// let ai = create_ai("baseline", 0).unwrap();
/// assert_eq!(ai.name(), "BaselineAI");
/// assert!(create_ai("gto", 0).is_err());
/// ```
pub fn create_ai(ai_type: &str, seed: u64) -> Result<Box<dyn AIOpponent>, AiError> {
    let ai: Box<dyn AIOpponent> = match ai_type.parse::<AiKind>()? {
        AiKind::Baseline => Box::new(baseline::BaselineAI::new()),
        AiKind::Simple => Box::new(simple::SimpleAI::with_seed(seed)),
    };
    Ok(ai)
}

/// Seats an AI policy at an engine table.
pub struct AiSeat {
    ai: Box<dyn AIOpponent>,
}

impl AiSeat {
    pub fn new(ai: Box<dyn AIOpponent>) -> Self {
        Self { ai }
    }

    pub fn name(&self) -> &str {
        self.ai.name()
    }
}

impl ActionProvider for AiSeat {
    fn decide(&mut self, view: &TableSnapshot, request: &ActionRequest) -> PlayerAction {
        self.ai.get_action(view, request)
    }
}

/// Turns "put `amount` more in" into the legal verb for the request: a bet
/// when nobody has bet, a raise otherwise, a call when raising is closed.
pub(crate) fn aggressive(request: &ActionRequest, amount: u32) -> PlayerAction {
    let amount = amount.max(request.min_raise);
    if !request.raise_allowed {
        passive(request)
    } else if request.current_bet_level == 0 {
        PlayerAction::Bet(amount)
    } else {
        PlayerAction::Raise(amount)
    }
}

pub(crate) fn passive(request: &ActionRequest) -> PlayerAction {
    if request.to_call > 0 {
        PlayerAction::Call
    } else {
        PlayerAction::Check
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(to_call: u32, level: u32, raise_allowed: bool) -> ActionRequest {
        ActionRequest {
            player_id: 1,
            to_call,
            raise_allowed,
            current_bet_level: level,
            min_raise: 20,
            stack: 1000,
        }
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Simple".parse::<AiKind>(), Ok(AiKind::Simple));
        assert_eq!(
            "random".parse::<AiKind>(),
            Err(AiError::UnknownKind("random".into()))
        );
    }

    #[test]
    fn aggressive_picks_the_legal_verb() {
        assert_eq!(aggressive(&request(0, 0, true), 50), PlayerAction::Bet(50));
        assert_eq!(aggressive(&request(20, 20, true), 5), PlayerAction::Raise(20));
        assert_eq!(aggressive(&request(20, 20, false), 50), PlayerAction::Call);
        assert_eq!(aggressive(&request(0, 20, false), 50), PlayerAction::Check);
    }
}
