use crate::errors::{ActionError, GameError};
use crate::game::{GameState, Stakes};
use crate::player::{Action, Side};

/// An action that passed the legality checks, with any raise already clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Check,
    /// Chips moved from the stack to match the bet
    Call(u32),
    Fold,
    /// New street total for the raiser
    RaiseTo(u32),
}

/// Validates a human action against the current state.
///
/// Nothing is mutated: the caller applies the returned [`ValidatedAction`] only
/// when this succeeds.
///
/// # Rules
///
/// - check: bets already matched
/// - call / fold: facing a strictly larger bet
/// - raise: at least `big_blind` and above the raiser's own bet; when facing a
///   bet, at least the opponent's bet plus `big_blind` unless the raise puts
///   every remaining chip in; never above `chips + bet`. A raise beyond what the
///   opponent can match is clamped to put them exactly all-in.
///
/// # Examples
///
/// ```
/// use headsup_engine::cards::{Card, Rank, Suit};
/// use headsup_engine::deck::Deal;
/// use headsup_engine::errors::ActionError;
/// use headsup_engine::game::GameState;
/// use headsup_engine::player::{Action, Position};
/// use headsup_engine::rules::{validate_action, ValidatedAction};
///
/// let c = |r, s| Card::new(r, s);
/// let deal = Deal {
///     hand: [c(Rank::Ace, Suit::Spades), c(Rank::King, Suit::Spades)],
///     opp_hand: [c(Rank::Two, Suit::Hearts), c(Rank::Seven, Suit::Clubs)],
///     board: [
///         c(Rank::Three, Suit::Diamonds),
///         c(Rank::Nine, Suit::Clubs),
///         c(Rank::Jack, Suit::Hearts),
///         c(Rank::Four, Suit::Spades),
///         c(Rank::Queen, Suit::Diamonds),
///     ],
/// };
/// // Human in the small blind faces the big blind
/// let state = GameState::new_hand(deal, 100, 100, Position::SmallBlind, 1, 2);
///
/// assert_eq!(validate_action(&state, Action::Call, 2), Ok(ValidatedAction::Call(1)));
/// assert_eq!(
///     validate_action(&state, Action::Check, 2),
///     Err(ActionError::CheckFacingBet { to_call: 1 })
/// );
/// assert_eq!(
///     validate_action(&state, Action::RaiseTo(3), 2),
///     Err(ActionError::RaiseBelowMinimum { amount: 3, minimum: 4 })
/// );
/// ```
pub fn validate_action(
    state: &GameState,
    action: Action,
    big_blind: u32,
) -> Result<ValidatedAction, ActionError> {
    let stakes = state.stakes(Side::Player);
    validate_with(&stakes, action, |s, amount| validate_raise(s, amount, big_blind))
}

/// Validates the bot's concrete action. The bot sizes its own raises, so only
/// the hard limits apply: the raise must top both current bets and fit in the
/// bot's stack. Anything else is a broken opponent, not a user mistake.
pub fn validate_opponent_action(
    state: &GameState,
    action: Action,
) -> Result<ValidatedAction, GameError> {
    let stakes = state.stakes(Side::Opponent);
    validate_with(&stakes, action, validate_opponent_raise)
        .map_err(|e| GameError::IllegalOpponentAction(format!("{:?}: {}", action, e)))
}

fn validate_with(
    stakes: &Stakes,
    action: Action,
    raise: impl FnOnce(&Stakes, u32) -> Result<u32, ActionError>,
) -> Result<ValidatedAction, ActionError> {
    let to_call = stakes.to_call();
    match action {
        Action::Check if to_call == 0 => Ok(ValidatedAction::Check),
        Action::Check => Err(ActionError::CheckFacingBet { to_call }),
        Action::Call if to_call > 0 => Ok(ValidatedAction::Call(to_call.min(stakes.chips))),
        Action::Call => Err(ActionError::NothingToCall),
        Action::Fold if to_call > 0 => Ok(ValidatedAction::Fold),
        Action::Fold => Err(ActionError::FoldWhenMatched),
        Action::RaiseTo(amount) => raise(stakes, amount).map(ValidatedAction::RaiseTo),
    }
}

fn validate_raise(stakes: &Stakes, amount: u32, big_blind: u32) -> Result<u32, ActionError> {
    let available = stakes.available();
    if amount > available {
        return Err(ActionError::RaiseExceedsStack { amount, available });
    }
    if stakes.opp_chips == 0 {
        return Err(ActionError::OpponentAllIn);
    }
    let minimum = if stakes.to_call() > 0 {
        stakes.opp_bet + big_blind
    } else {
        big_blind.max(stakes.bet + 1)
    };
    let all_in = amount == available && amount > stakes.opp_bet;
    if amount < minimum && !all_in {
        return Err(ActionError::RaiseBelowMinimum { amount, minimum });
    }
    Ok(amount.min(stakes.opp_available()))
}

fn validate_opponent_raise(stakes: &Stakes, amount: u32) -> Result<u32, ActionError> {
    if stakes.opp_chips == 0 {
        return Err(ActionError::OpponentAllIn);
    }
    let available = stakes.available();
    if amount > available {
        return Err(ActionError::RaiseExceedsStack { amount, available });
    }
    let minimum = stakes.bet.max(stakes.opp_bet) + 1;
    if amount < minimum {
        return Err(ActionError::RaiseBelowMinimum { amount, minimum });
    }
    Ok(amount.min(stakes.opp_available()))
}

impl From<ValidatedAction> for Action {
    /// The action as it is logged, with the clamped raise size.
    fn from(action: ValidatedAction) -> Self {
        match action {
            ValidatedAction::Check => Action::Check,
            ValidatedAction::Call(_) => Action::Call,
            ValidatedAction::Fold => Action::Fold,
            ValidatedAction::RaiseTo(total) => Action::RaiseTo(total),
        }
    }
}
