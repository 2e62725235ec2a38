use crate::cards::Card;
use crate::errors::GameError;
use serde::{Deserialize, Serialize};

/// Represents a player action during a betting round.
/// Amounts are chips: `Bet(n)` opens the round with a bet of `n`, `Raise(n)`
/// raises the current bet level by `n` on top of the call.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (no bet, only valid if no bet to call)
    Check,
    /// Call the current bet
    Call,
    /// Make a bet of specified amount
    Bet(u32),
    /// Raise the current bet by specified amount
    Raise(u32),
    /// Bet all remaining chips
    AllIn,
}

/// Default starting stack size for each player in chips
pub const STARTING_STACK: u32 = 1_000;

/// One seat at the table. Stack and per-hand fields are only changed by the
/// engine; everything outside the crate sees the read-only accessors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    id: usize,
    name: String,
    is_human: bool,
    stack: u32,
    hole: Vec<Card>,
    in_hand: bool,
    /// Chips committed in the current betting round
    current_bet: u32,
    /// Chips committed over the whole hand, used to build side pots
    total_bet: u32,
    all_in: bool,
}

impl Player {
    pub fn new(id: usize, name: impl Into<String>, is_human: bool, stack: u32) -> Self {
        Self {
            id,
            name: name.into(),
            is_human,
            stack,
            hole: Vec::with_capacity(2),
            in_hand: false,
            current_bet: 0,
            total_bet: 0,
            all_in: false,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn is_human(&self) -> bool {
        self.is_human
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }
    pub fn in_hand(&self) -> bool {
        self.in_hand
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn total_bet(&self) -> u32 {
        self.total_bet
    }
    pub fn is_all_in(&self) -> bool {
        self.all_in
    }

    /// In the hand and still able to put chips in.
    pub fn can_act(&self) -> bool {
        self.in_hand && !self.all_in
    }

    pub(crate) fn give_card(&mut self, c: Card) -> Result<(), GameError> {
        if self.hole.len() >= 2 {
            return Err(GameError::HoleCardsFull);
        }
        self.hole.push(c);
        Ok(())
    }

    /// Clears per-hand state. Players without chips sit the hand out.
    pub(crate) fn reset_for_hand(&mut self) {
        self.hole.clear();
        self.current_bet = 0;
        self.total_bet = 0;
        self.all_in = false;
        self.in_hand = self.stack > 0;
    }

    pub(crate) fn reset_round(&mut self) {
        self.current_bet = 0;
    }

    pub(crate) fn fold(&mut self) {
        self.in_hand = false;
    }

    /// Moves up to `amount` chips from the stack into the current bet and
    /// returns what was actually committed. An emptied stack means all-in.
    pub(crate) fn commit(&mut self, amount: u32) -> u32 {
        let paid = amount.min(self.stack);
        self.stack -= paid;
        self.current_bet += paid;
        self.total_bet += paid;
        if self.stack == 0 && self.in_hand {
            self.all_in = true;
        }
        paid
    }

    pub(crate) fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }
}
