//! Parsing of interactive input and card arguments.

use headsup_engine::cards::{parse_cards, Card};
use headsup_engine::errors::CardParseError;
use headsup_engine::player::Action;

use crate::error::CliError;

/// Result of parsing one line typed at the action prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult {
    Action(Action),
    Quit,
    /// Message to show before prompting again
    Invalid(String),
}

/// Parses `check`, `call`, `fold`, `raise <size>`, or `q`/`quit`.
///
/// ```rust
/// use headsup_cli::validation::{parse_player_action, ParseResult};
/// use headsup_engine::player::Action;
///
/// assert_eq!(parse_player_action("raise 8"), ParseResult::Action(Action::RaiseTo(8)));
/// assert_eq!(parse_player_action("Q"), ParseResult::Quit);
/// assert!(matches!(parse_player_action("bet"), ParseResult::Invalid(_)));
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ParseResult::Invalid(
            "Empty input. Valid actions: check, call, fold, raise <size>, q".into(),
        );
    }
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return ParseResult::Quit;
    }
    match trimmed.parse::<Action>() {
        Ok(action) => ParseResult::Action(action),
        Err(e) => ParseResult::Invalid(e.to_string()),
    }
}

/// Parses exactly `N` distinct cards.
pub fn parse_exact<const N: usize>(input: &str) -> Result<[Card; N], CliError> {
    let cards = parse_cards(input)?;
    let actual = cards.len();
    cards.try_into().map_err(|_| {
        CardParseError::WrongCount {
            expected: N,
            actual,
        }
        .into()
    })
}

pub fn parse_hand(input: &str) -> Result<[Card; 2], CliError> {
    parse_exact::<2>(input)
}

pub fn parse_board(input: &str) -> Result<[Card; 5], CliError> {
    parse_exact::<5>(input)
}

/// Rejects a card that appears in more than one of the given groups.
pub fn ensure_distinct(groups: &[&[Card]]) -> Result<(), CliError> {
    let mut seen: Vec<Card> = Vec::new();
    for card in groups.iter().flat_map(|g| g.iter()) {
        if seen.contains(card) {
            return Err(CardParseError::Duplicate(*card).into());
        }
        seen.push(*card);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_is_case_insensitive() {
        assert_eq!(parse_player_action("QUIT"), ParseResult::Quit);
        assert_eq!(parse_player_action(" q "), ParseResult::Quit);
    }

    #[test]
    fn raise_without_size_is_reported() {
        assert_eq!(
            parse_player_action("raise"),
            ParseResult::Invalid("Must enter raise size".into())
        );
    }

    #[test]
    fn board_needs_five_cards() {
        let err = parse_board("As Ks Qs").unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: Expected 5 cards, got 3");
        assert_eq!(parse_board("AsKsQsJsTs").unwrap().len(), 5);
    }

    #[test]
    fn shared_card_between_hand_and_board_is_rejected() {
        let hand = parse_hand("As Kd").unwrap();
        let board = parse_board("As 2c 3c 4c 9h").unwrap();
        assert!(ensure_distinct(&[&hand, &board]).is_err());
        let board = parse_board("Ah 2c 3c 4c 9h").unwrap();
        assert!(ensure_distinct(&[&hand, &board]).is_ok());
    }
}
