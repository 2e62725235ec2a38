use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid bet amount: {amount}, minimum: {minimum}")]
    InvalidBetAmount { amount: u32, minimum: u32 },
    #[error("Cannot check: {to_call} chips owed")]
    CannotCheck { to_call: u32 },
    #[error("Cannot bet: there is already a bet of {current}, raise instead")]
    BetFacingBet { current: u32 },
    #[error("Cannot raise: there is no bet to raise")]
    NothingToRaise,
    #[error("Raising is not allowed: no opponent can respond")]
    RaiseNotAllowed,
    #[error("Insufficient chips for action")]
    InsufficientChips,
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("A hand is already in progress")]
    HandInProgress,
    #[error("Unknown player {0}")]
    UnknownPlayer(usize),
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("Fewer than two players have chips")]
    NotEnoughPlayers,
    #[error("At least 5 cards are needed to evaluate a hand, got {got}")]
    NotEnoughCards { got: usize },
    #[error("Hole cards already full")]
    HoleCardsFull,
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
    #[error("Invalid table configuration: {0}")]
    InvalidConfig(String),
}
