use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ActionError;

/// Default starting stack size for each side in chips
pub const STARTING_STACK: u32 = 100;
/// Forced small blind
pub const SMALL_BLIND: u32 = 1;
/// Forced big blind; also the table minimum raise
pub const BIG_BLIND: u32 = 2;

/// Which blind the human posted this hand. The bot always holds the other seat.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// Small blind: acts first preflop, second on later streets
    SmallBlind,
    /// Big blind: closes preflop action, acts first on later streets
    BigBlind,
}

impl Position {
    pub fn flip(self) -> Position {
        match self {
            Position::SmallBlind => Position::BigBlind,
            Position::BigBlind => Position::SmallBlind,
        }
    }
}

/// The two sides of the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The human
    Player,
    /// The bot
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// A betting action by either side.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Pass with matched bets
    Check,
    /// Match the opponent's larger bet
    Call,
    /// Forfeit the hand
    Fold,
    /// Raise so that this street's total bet becomes the amount
    RaiseTo(u32),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Check => f.write_str("checks"),
            Action::Call => f.write_str("calls"),
            Action::Fold => f.write_str("folds"),
            Action::RaiseTo(n) => write!(f, "raises to {}", n),
        }
    }
}

impl FromStr for Action {
    type Err = ActionError;

    /// Accepts `check`, `call`, `fold` and `raise <size>` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let parts: Vec<&str> = lower.split_whitespace().collect();
        match parts.as_slice() {
            ["check"] => Ok(Action::Check),
            ["call"] => Ok(Action::Call),
            ["fold"] => Ok(Action::Fold),
            ["raise"] => Err(ActionError::MissingRaiseSize),
            ["raise", size] => size
                .parse::<u32>()
                .map(Action::RaiseTo)
                .map_err(|_| ActionError::Unrecognized(lower.clone())),
            _ => Err(ActionError::Unrecognized(lower.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_actions() {
        assert_eq!("Check".parse::<Action>(), Ok(Action::Check));
        assert_eq!(" raise 12 ".parse::<Action>(), Ok(Action::RaiseTo(12)));
        assert_eq!("raise".parse::<Action>(), Err(ActionError::MissingRaiseSize));
        assert!(matches!(
            "raise lots".parse::<Action>(),
            Err(ActionError::Unrecognized(_))
        ));
    }

    #[test]
    fn action_display_matches_log_wording() {
        assert_eq!(Action::RaiseTo(8).to_string(), "raises to 8");
        assert_eq!(Action::Call.to_string(), "calls");
    }

    #[test]
    fn position_and_side_flip() {
        assert_eq!(Position::SmallBlind.flip(), Position::BigBlind);
        assert_eq!(Side::Opponent.other(), Side::Player);
    }
}
