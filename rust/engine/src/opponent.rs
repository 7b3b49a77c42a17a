use crate::game::GameState;
use crate::player::Action;

/// The seam through which the state machine asks the bot for a move.
///
/// The state is passed from the human's point of view: the bot's stack, bet
/// and hole cards are the `opp_*` fields. The returned action is validated
/// before it is applied; an illegal action aborts the request with
/// [`crate::errors::GameError::IllegalOpponentAction`].
///
/// # Example Implementation
///
/// ```rust
/// use headsup_engine::game::GameState;
/// use headsup_engine::opponent::Opponent;
/// use headsup_engine::player::Action;
///
/// struct CallingStation;
///
/// impl Opponent for CallingStation {
///     fn decide(&mut self, state: &GameState) -> Action {
///         if state.bet > state.opp_bet {
///             Action::Call
///         } else {
///             Action::Check
///         }
///     }
///
///     fn name(&self) -> &str {
///         "CallingStation"
///     }
/// }
/// ```
pub trait Opponent: Send {
    /// Choose the bot's next action.
    fn decide(&mut self, state: &GameState) -> Action;

    /// Return the name/identifier of this implementation.
    fn name(&self) -> &str;
}

impl<O: Opponent + ?Sized> Opponent for Box<O> {
    fn decide(&mut self, state: &GameState) -> Action {
        (**self).decide(state)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
