use thiserror::Error;

use crate::cards::Card;
use crate::store::StoreError;

/// A rejected human action. Always recoverable: the state is left untouched and
/// the message is meant to be shown to the player as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("Invalid check: facing a bet of {to_call}")]
    CheckFacingBet { to_call: u32 },
    #[error("Invalid call: there is no bet to call")]
    NothingToCall,
    #[error("Invalid fold: bets are already matched")]
    FoldWhenMatched,
    #[error("Must enter raise size")]
    MissingRaiseSize,
    #[error("Invalid raise size {amount} (must min raise to {minimum})")]
    RaiseBelowMinimum { amount: u32, minimum: u32 },
    #[error("Not enough chips: raise to {amount} exceeds available {available}")]
    RaiseExceedsStack { amount: u32, available: u32 },
    #[error("Opponent is all-in; call or fold instead")]
    OpponentAllIn,
    #[error("Hand is over; start the next hand")]
    HandFinished,
    #[error("Hand is still in progress")]
    HandInProgress,
    #[error("Unrecognized action '{0}'. Valid actions: check, call, fold, raise <size>")]
    Unrecognized(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardParseError {
    #[error("Malformed card '{0}' (expected rank then suit, e.g. 'As' or 'Td')")]
    Malformed(String),
    #[error("Duplicate card {0}")]
    Duplicate(Card),
    #[error("Expected {expected} cards, got {actual}")]
    WrongCount { expected: usize, actual: usize },
}

/// Errors surfaced by the state machine.
///
/// [`GameError::InvalidAction`] is the only recoverable class; every other
/// variant means the stored data or an opponent implementation is broken.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    InvalidAction(#[from] ActionError),
    #[error("No active hand for session '{0}'")]
    NoActiveHand(String),
    #[error("Chip total is {actual}, expected {expected}")]
    ChipsNotConserved { expected: u32, actual: u32 },
    #[error("Opponent chose an illegal action: {0}")]
    IllegalOpponentAction(String),
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl GameError {
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::InvalidAction(_))
    }
}
