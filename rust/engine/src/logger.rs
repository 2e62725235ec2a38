//! Observation log for the presentation layer.
//!
//! Every notable state change is recorded as a [`GameEvent`] and mirrored to
//! `tracing`. Callers drain the log with [`crate::engine::Engine::take_events`];
//! the `Display` form of an event is the human-readable log line.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::Phase;
use crate::hand::HandStrength;
use crate::player::PlayerAction;
use crate::rules::ValidatedAction;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Blind {
    Small,
    Big,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    HandStarted {
        hand: u64,
        dealer: String,
    },
    BlindPosted {
        player: String,
        blind: Blind,
        amount: u32,
        all_in: bool,
    },
    ActionTaken {
        player: String,
        action: ValidatedAction,
        all_in: bool,
    },
    ActionRejected {
        player: String,
        action: PlayerAction,
        reason: String,
    },
    ForcedFold {
        player: String,
    },
    PhaseChanged {
        phase: Phase,
        board: Vec<Card>,
    },
    ShowdownHand {
        player: String,
        strength: HandStrength,
    },
    PotAwarded {
        player: String,
        amount: u32,
        /// 0 is the main pot
        pot: usize,
        /// Won because everyone else folded; no cards shown
        uncontested: bool,
    },
    Warning(String),
}

impl GameEvent {
    fn is_warning(&self) -> bool {
        matches!(
            self,
            GameEvent::ActionRejected { .. } | GameEvent::ForcedFold { .. } | GameEvent::Warning(_)
        )
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::HandStarted { hand, dealer } => {
                write!(f, "--- Hand #{} (dealer: {}) ---", hand, dealer)
            }
            GameEvent::BlindPosted {
                player,
                blind,
                amount,
                all_in,
            } => {
                let kind = match blind {
                    Blind::Small => "small",
                    Blind::Big => "big",
                };
                write!(f, "{} posts {} blind of {}", player, kind, amount)?;
                if *all_in {
                    f.write_str(" and is all-in")?;
                }
                Ok(())
            }
            GameEvent::ActionTaken {
                player,
                action,
                all_in,
            } => {
                match action {
                    ValidatedAction::Fold => write!(f, "{} folds", player)?,
                    ValidatedAction::Check => write!(f, "{} checks", player)?,
                    ValidatedAction::Call(n) => write!(f, "{} calls {}", player, n)?,
                    ValidatedAction::Bet(n) => write!(f, "{} bets {}", player, n)?,
                    ValidatedAction::Raise(n) => write!(f, "{} raises, putting in {}", player, n)?,
                    ValidatedAction::AllIn(n) => write!(f, "{} goes all-in for {}", player, n)?,
                }
                if *all_in && !matches!(action, ValidatedAction::AllIn(_)) {
                    f.write_str(" (all-in)")?;
                }
                Ok(())
            }
            GameEvent::ActionRejected {
                player,
                action,
                reason,
            } => write!(f, "{} tried {:?}: {}", player, action, reason),
            GameEvent::ForcedFold { player } => {
                write!(f, "{} is folded after repeated illegal actions", player)
            }
            GameEvent::PhaseChanged { phase, board } => {
                write!(f, "{}:", phase)?;
                for c in board {
                    write!(f, " {}", c)?;
                }
                Ok(())
            }
            GameEvent::ShowdownHand { player, strength } => {
                write!(f, "{} shows {}", player, strength)
            }
            GameEvent::PotAwarded {
                player,
                amount,
                pot,
                uncontested,
            } => {
                let which = if *pot == 0 {
                    "the pot".to_string()
                } else {
                    format!("side pot {}", pot)
                };
                write!(f, "{} wins {} from {}", player, amount, which)?;
                if *uncontested {
                    f.write_str(" uncontested")?;
                }
                Ok(())
            }
            GameEvent::Warning(msg) => write!(f, "Warning: {}", msg),
        }
    }
}

/// Buffer of events not yet collected by the caller.
#[derive(Debug, Default)]
pub struct EventLog {
    pending: Vec<GameEvent>,
}

impl EventLog {
    pub fn push(&mut self, event: GameEvent) {
        if event.is_warning() {
            tracing::warn!(target: "holdem_engine", "{}", event);
        } else {
            tracing::info!(target: "holdem_engine", "{}", event);
        }
        self.pending.push(event);
    }

    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// One pot (or share of a split pot) paid out at the end of a hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PotAward {
    pub player_id: usize,
    pub amount: u32,
    pub pot: usize,
}

/// Outcome of a finished hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandSummary {
    pub hand_number: u64,
    pub board: Vec<Card>,
    pub awards: Vec<PotAward>,
    /// Hands revealed at showdown; empty when the hand was won uncontested
    pub showdown: Vec<(usize, HandStrength)>,
}

impl HandSummary {
    /// Distinct winners in seat order.
    pub fn winners(&self) -> Vec<usize> {
        let mut ids: Vec<usize> = self.awards.iter().map(|a| a.player_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    pub fn won_by(&self, player_id: usize) -> u32 {
        self.awards
            .iter()
            .filter(|a| a.player_id == player_id)
            .map(|a| a.amount)
            .sum()
    }
}
