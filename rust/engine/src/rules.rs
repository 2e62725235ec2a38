use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::PlayerAction as A;

/// Action after validation. Amounts are the chips the player moves from
/// stack into the pot with this action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(u32),
    Bet(u32),
    Raise(u32),
    AllIn(u32),
}

impl ValidatedAction {
    pub fn chips(self) -> u32 {
        match self {
            ValidatedAction::Fold | ValidatedAction::Check => 0,
            ValidatedAction::Call(n)
            | ValidatedAction::Bet(n)
            | ValidatedAction::Raise(n)
            | ValidatedAction::AllIn(n) => n,
        }
    }
}

/// What the acting player is facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetContext {
    /// Player's remaining chip stack
    pub stack: u32,
    /// Chips the player already has in this round
    pub current_bet: u32,
    /// Bet level everyone has to match this round
    pub last_bet: u32,
    /// Minimum bet or raise increment
    pub min_raise: u32,
    /// False when no other live player could respond to a raise
    pub raise_allowed: bool,
}

impl BetContext {
    pub fn to_call(&self) -> u32 {
        self.last_bet.saturating_sub(self.current_bet)
    }
}

/// Validates a player action according to betting rules and stack size.
///
/// Rejected (error, nothing changes):
/// - `Check` while chips are owed
/// - `Bet` when the round already has a bet, `Raise` when it has none
/// - `Bet`/`Raise` of zero, or below the minimum while the stack covers it
/// - `Bet`/`Raise` when `raise_allowed` is false
/// - `AllIn` with an empty stack
///
/// Clamped (converted, documented conversions):
/// - `Call` with nothing owed becomes `Check`
/// - `Call` for more than the stack becomes `AllIn(stack)`
/// - `Bet`/`Raise` reaching the whole stack becomes `AllIn(stack)`, even
///   below the minimum
/// - `AllIn` when raising is not allowed becomes a call
///
/// # Examples
///
/// ```
/// use holdem_engine::rules::{validate_action, BetContext, ValidatedAction};
/// use holdem_engine::player::PlayerAction;
///
/// let ctx = BetContext { stack: 1000, current_bet: 0, last_bet: 50, min_raise: 50, raise_allowed: true };
/// assert_eq!(validate_action(&ctx, PlayerAction::Call), Ok(ValidatedAction::Call(50)));
/// assert_eq!(validate_action(&ctx, PlayerAction::Raise(100)), Ok(ValidatedAction::Raise(150)));
/// assert!(validate_action(&ctx, PlayerAction::Raise(20)).is_err());
/// ```
pub fn validate_action(ctx: &BetContext, action: A) -> Result<ValidatedAction, GameError> {
    let stack = ctx.stack;
    let to_call = ctx.to_call();
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::CannotCheck { to_call })
            }
        }
        A::Call => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else if stack <= to_call {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Call(to_call))
            }
        }
        A::Bet(amount) => {
            if ctx.last_bet > 0 {
                return Err(GameError::BetFacingBet {
                    current: ctx.last_bet,
                });
            }
            if !ctx.raise_allowed {
                return Err(GameError::RaiseNotAllowed);
            }
            if amount == 0 {
                return Err(GameError::InvalidBetAmount {
                    amount,
                    minimum: ctx.min_raise,
                });
            }
            if amount >= stack {
                Ok(ValidatedAction::AllIn(stack))
            } else if amount < ctx.min_raise {
                Err(GameError::InvalidBetAmount {
                    amount,
                    minimum: ctx.min_raise,
                })
            } else {
                Ok(ValidatedAction::Bet(amount))
            }
        }
        A::Raise(amount) => {
            if ctx.last_bet == 0 {
                return Err(GameError::NothingToRaise);
            }
            if !ctx.raise_allowed {
                return Err(GameError::RaiseNotAllowed);
            }
            if amount == 0 {
                return Err(GameError::InvalidBetAmount {
                    amount,
                    minimum: ctx.min_raise,
                });
            }
            if amount.saturating_add(to_call) >= stack {
                Ok(ValidatedAction::AllIn(stack))
            } else if amount < ctx.min_raise {
                Err(GameError::InvalidBetAmount {
                    amount,
                    minimum: ctx.min_raise,
                })
            } else {
                Ok(ValidatedAction::Raise(to_call + amount))
            }
        }
        A::AllIn => {
            if stack == 0 {
                Err(GameError::InsufficientChips)
            } else if !ctx.raise_allowed && stack > to_call {
                if to_call == 0 {
                    Ok(ValidatedAction::Check)
                } else {
                    Ok(ValidatedAction::Call(to_call))
                }
            } else {
                Ok(ValidatedAction::AllIn(stack))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(stack: u32, current_bet: u32, last_bet: u32) -> BetContext {
        BetContext {
            stack,
            current_bet,
            last_bet,
            min_raise: 20,
            raise_allowed: true,
        }
    }

    #[test]
    fn call_with_nothing_owed_is_a_check() {
        assert_eq!(validate_action(&ctx(100, 20, 20), A::Call), Ok(ValidatedAction::Check));
    }

    #[test]
    fn all_in_when_raising_is_closed_only_calls() {
        let mut c = ctx(500, 0, 100);
        c.raise_allowed = false;
        assert_eq!(validate_action(&c, A::AllIn), Ok(ValidatedAction::Call(100)));
        assert_eq!(validate_action(&c, A::Raise(100)), Err(GameError::RaiseNotAllowed));
    }

    #[test]
    fn bet_and_raise_are_not_interchangeable() {
        assert_eq!(
            validate_action(&ctx(100, 0, 20), A::Bet(40)),
            Err(GameError::BetFacingBet { current: 20 })
        );
        assert_eq!(validate_action(&ctx(100, 0, 0), A::Raise(40)), Err(GameError::NothingToRaise));
    }

    #[test]
    fn chips_reports_committed_amount() {
        assert_eq!(ValidatedAction::Raise(60).chips(), 60);
        assert_eq!(ValidatedAction::Check.chips(), 0);
    }
}
