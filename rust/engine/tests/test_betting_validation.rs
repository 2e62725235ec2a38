use holdem_engine::errors::GameError;
use holdem_engine::player::PlayerAction as A;
use holdem_engine::rules::{validate_action, BetContext, ValidatedAction};

fn facing(stack: u32, current_bet: u32, last_bet: u32, min_raise: u32) -> BetContext {
    BetContext {
        stack,
        current_bet,
        last_bet,
        min_raise,
        raise_allowed: true,
    }
}

#[test]
fn bet_zero_is_invalid() {
    let err = validate_action(&facing(10_000, 0, 0, 100), A::Bet(0)).unwrap_err();
    match err {
        GameError::InvalidBetAmount { .. } => {}
        _ => panic!("expected InvalidBetAmount"),
    }
}

#[test]
fn bet_over_stack_becomes_allin() {
    let va = validate_action(&facing(50, 0, 0, 100), A::Bet(100)).unwrap();
    assert_eq!(va, ValidatedAction::AllIn(50));
}

#[test]
fn call_with_insufficient_stack_is_allin_call() {
    let va = validate_action(&facing(15, 0, 20, 20), A::Call).unwrap();
    assert_eq!(va, ValidatedAction::AllIn(15));
}

#[test]
fn call_pays_only_the_difference() {
    // Small blind already has 10 in against a big blind of 20
    let va = validate_action(&facing(990, 10, 20, 20), A::Call).unwrap();
    assert_eq!(va, ValidatedAction::Call(10));
}

#[test]
fn short_raise_covering_stack_becomes_allin() {
    // to_call=100, min_raise=100, stack=130, Raise(50) -> AllIn(130)
    let va = validate_action(&facing(130, 0, 100, 100), A::Raise(50)).unwrap();
    assert_eq!(va, ValidatedAction::AllIn(130));
}

#[test]
fn raise_below_minimum_is_rejected() {
    let err = validate_action(&facing(1000, 0, 100, 100), A::Raise(50)).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidBetAmount {
            amount: 50,
            minimum: 100
        }
    );
}

#[test]
fn raise_commits_call_plus_increment() {
    let va = validate_action(&facing(1000, 20, 60, 40), A::Raise(40)).unwrap();
    assert_eq!(va, ValidatedAction::Raise(80));
}

#[test]
fn check_facing_a_bet_is_rejected() {
    assert_eq!(
        validate_action(&facing(1000, 0, 20, 20), A::Check),
        Err(GameError::CannotCheck { to_call: 20 })
    );
}

#[test]
fn fold_is_always_legal() {
    assert_eq!(validate_action(&facing(0, 0, 0, 20), A::Fold), Ok(ValidatedAction::Fold));
}

#[test]
fn empty_stack_cannot_go_all_in() {
    assert_eq!(
        validate_action(&facing(0, 0, 20, 20), A::AllIn),
        Err(GameError::InsufficientChips)
    );
}

#[test]
fn closed_raising_rejects_bets() {
    let mut ctx = facing(1000, 0, 0, 20);
    ctx.raise_allowed = false;
    assert_eq!(validate_action(&ctx, A::Bet(40)), Err(GameError::RaiseNotAllowed));
    assert_eq!(validate_action(&ctx, A::AllIn), Ok(ValidatedAction::Check));
}
