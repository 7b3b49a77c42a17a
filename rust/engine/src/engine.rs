use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::deck::Deck;
use crate::errors::{ActionError, GameError};
use crate::game::{GameState, MatchOutcome, Street};
use crate::hand::{evaluate, HandRank};
use crate::logger::{ActionLog, OPPONENT_NAME};
use crate::opponent::Opponent;
use crate::player::{Action, Position, Side, BIG_BLIND, SMALL_BLIND, STARTING_STACK};
use crate::rules::{validate_action, validate_opponent_action, ValidatedAction};

/// Seed used when none is supplied.
pub const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// Table parameters shared by every hand of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub starting_stack: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    /// Name the human is logged under
    pub player_name: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_stack: STARTING_STACK,
            small_blind: SMALL_BLIND,
            big_blind: BIG_BLIND,
            player_name: "Player".to_string(),
        }
    }
}

impl TableConfig {
    /// Chips in play for the whole match.
    pub fn total_chips(&self) -> u32 {
        self.starting_stack * 2
    }
}

/// What the showdown revealed. `winner` is `None` for a split pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownSummary {
    pub winner: Option<Side>,
    pub pot: u32,
    pub player_rank: HandRank,
    pub opponent_rank: HandRank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// The human is to act
    AwaitingAction,
    /// The hand ended at showdown; call [`Engine::next_hand`] to continue
    Showdown(ShowdownSummary),
    MatchOver(MatchOutcome),
}

/// The result of one request: the new state, the log lines it produced and
/// where the match stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub state: GameState,
    pub log: Vec<String>,
    pub outcome: StepOutcome,
}

/// Drives a heads-up match between the human and an [`Opponent`].
///
/// The engine owns no game state: every call takes the last stored
/// [`GameState`] and returns a new one, leaving the input untouched when the
/// request fails.
///
/// # Examples
///
/// ```
/// use headsup_engine::engine::{Engine, StepOutcome, TableConfig};
/// use headsup_engine::game::GameState;
/// use headsup_engine::opponent::Opponent;
/// use headsup_engine::player::Action;
///
/// struct Folder;
///
/// impl Opponent for Folder {
///     fn decide(&mut self, state: &GameState) -> Action {
///         if state.bet > state.opp_bet { Action::Fold } else { Action::Check }
///     }
///     fn name(&self) -> &str { "Folder" }
/// }
///
/// let mut engine = Engine::new(TableConfig::default(), Some(7), Folder);
/// let step = engine.start_match().unwrap();
/// assert_eq!(step.outcome, StepOutcome::AwaitingAction);
///
/// // A raise takes the blinds and the next hand is dealt
/// let step = engine.act(&step.state, Action::RaiseTo(6)).unwrap();
/// assert_eq!(step.log[..3], ["Player raises to 6", "Opponent folds", "Player wins pot of 8"]);
/// assert_eq!(step.state.total_chips(), 200);
/// ```
#[derive(Debug)]
pub struct Engine<O: Opponent> {
    config: TableConfig,
    deck: Deck,
    opponent: O,
}

impl<O: Opponent> Engine<O> {
    pub fn new(config: TableConfig, seed: Option<u64>, opponent: O) -> Self {
        let seed = seed.unwrap_or(DEFAULT_SEED);
        Self {
            config,
            deck: Deck::new_with_seed(seed),
            opponent,
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn opponent(&self) -> &O {
        &self.opponent
    }

    /// Deals the first hand of a match with the human in the small blind.
    pub fn start_match(&mut self) -> Result<Step, GameError> {
        let stack = self.config.starting_stack;
        info!(stack, opponent = self.opponent.name(), "starting match");
        let mut flow = self.flow(None);
        flow.open_hand(stack, stack, Position::SmallBlind)?;
        flow.finish()
    }

    /// Applies the human's action and runs the bot until the human must act
    /// again or the hand ends.
    pub fn act(&mut self, state: &GameState, action: Action) -> Result<Step, GameError> {
        self.check_conserved(state)?;
        if state.displayed || state.match_outcome().is_some() {
            return Err(ActionError::HandFinished.into());
        }
        let validated = validate_action(state, action, self.config.big_blind)?;
        debug!(?action, ?validated, street = ?state.street, "player action");
        let mut flow = self.flow(Some(state.clone()));
        flow.player_action(validated)?;
        flow.finish()
    }

    /// Starts the hand after a displayed showdown, or reports the end of the
    /// match if a side has busted.
    pub fn next_hand(&mut self, state: &GameState) -> Result<Step, GameError> {
        self.check_conserved(state)?;
        if !state.displayed {
            return Err(ActionError::HandInProgress.into());
        }
        let mut flow = self.flow(Some(state.clone()));
        flow.end_hand()?;
        flow.finish()
    }

    fn check_conserved(&self, state: &GameState) -> Result<(), GameError> {
        conserved(&self.config, state)
    }

    fn flow(&mut self, state: Option<GameState>) -> HandFlow<'_, O> {
        HandFlow {
            config: &self.config,
            deck: &mut self.deck,
            opponent: &mut self.opponent,
            state,
            log: ActionLog::new(),
            outcome: StepOutcome::AwaitingAction,
        }
    }
}

fn conserved(config: &TableConfig, state: &GameState) -> Result<(), GameError> {
    let expected = config.total_chips();
    let actual = state.total_chips();
    if actual != expected {
        warn!(expected, actual, "chip total mismatch");
        return Err(GameError::ChipsNotConserved { expected, actual });
    }
    Ok(())
}

fn no_hand() -> GameError {
    GameError::NoActiveHand("no hand dealt".to_string())
}

fn active(state: &mut Option<GameState>) -> Result<&mut GameState, GameError> {
    state.as_mut().ok_or_else(no_hand)
}

/// One request's worth of state transitions. Works on its own copy of the
/// state; nothing is visible to the caller until [`HandFlow::finish`].
struct HandFlow<'a, O: Opponent> {
    config: &'a TableConfig,
    deck: &'a mut Deck,
    opponent: &'a mut O,
    state: Option<GameState>,
    log: ActionLog,
    outcome: StepOutcome,
}

impl<'a, O: Opponent> HandFlow<'a, O> {
    fn name(&self, side: Side) -> &'a str {
        let config: &'a TableConfig = self.config;
        match side {
            Side::Player => &config.player_name,
            Side::Opponent => OPPONENT_NAME,
        }
    }

    fn player_action(&mut self, action: ValidatedAction) -> Result<(), GameError> {
        let name = self.name(Side::Player);
        self.log.action(name, action.into());
        let state = active(&mut self.state)?;
        match action {
            ValidatedAction::Check => {
                let closes = state.position == Position::SmallBlind
                    || state.street == Street::Preflop;
                if closes {
                    self.close_street()
                } else {
                    self.opponent_turn(true)
                }
            }
            ValidatedAction::Call(_) => {
                state.call(Side::Player);
                self.after_call(Side::Player)
            }
            ValidatedAction::RaiseTo(total) => {
                state.raise_to(Side::Player, total);
                self.opponent_turn(false)
            }
            ValidatedAction::Fold => self.settle_fold(Side::Opponent),
        }
    }

    /// Asks the bot for an action. `check_closes` is set when a bot check
    /// ends the betting round.
    fn opponent_turn(&mut self, check_closes: bool) -> Result<(), GameError> {
        let state = active(&mut self.state)?;
        let action = self.opponent.decide(state);
        let validated = validate_opponent_action(state, action)?;
        debug!(?action, ?validated, street = ?state.street, "opponent action");
        match validated {
            ValidatedAction::Call(_) => {
                state.call(Side::Opponent);
            }
            ValidatedAction::RaiseTo(total) => {
                state.raise_to(Side::Opponent, total);
            }
            ValidatedAction::Check | ValidatedAction::Fold => {}
        }
        self.log.action(OPPONENT_NAME, validated.into());
        match validated {
            ValidatedAction::Check if check_closes => self.close_street(),
            ValidatedAction::Check | ValidatedAction::RaiseTo(_) => Ok(()),
            ValidatedAction::Call(_) => self.after_call(Side::Opponent),
            ValidatedAction::Fold => self.settle_fold(Side::Player),
        }
    }

    fn after_call(&mut self, caller: Side) -> Result<(), GameError> {
        let big_blind = self.config.big_blind;
        let state = active(&mut self.state)?;
        if state.is_all_in() {
            return self.run_out();
        }
        let limp = state.street == Street::Preflop
            && caller == state.small_blind_side()
            && state.bet_of(caller) == big_blind;
        match (limp, caller) {
            // the big blind keeps its option
            (true, Side::Player) => self.opponent_turn(true),
            (true, Side::Opponent) => Ok(()),
            (false, _) => self.close_street(),
        }
    }

    fn close_street(&mut self) -> Result<(), GameError> {
        let state = active(&mut self.state)?;
        match state.advance_street() {
            Some(street) => {
                let human_small_blind = state.position == Position::SmallBlind;
                debug!(?street, pot = state.pot, "street opened");
                self.log.street(street);
                // the big blind acts first after the flop
                if human_small_blind {
                    self.opponent_turn(false)
                } else {
                    Ok(())
                }
            }
            None => self.showdown(),
        }
    }

    /// Deals the remaining streets without betting once a side is all-in.
    fn run_out(&mut self) -> Result<(), GameError> {
        let state = active(&mut self.state)?;
        let refunded = state.return_uncalled();
        if refunded > 0 {
            debug!(refunded, "returned uncalled chips");
        }
        while let Some(street) = state.advance_street() {
            self.log.street(street);
        }
        self.showdown()
    }

    fn showdown(&mut self) -> Result<(), GameError> {
        let state = active(&mut self.state)?;
        let player_rank = evaluate(&state.hand, &state.board);
        let opponent_rank = evaluate(&state.opp_hand, &state.board);
        let pot = state.committed();
        let winner = match player_rank.cmp(&opponent_rank) {
            Ordering::Greater => Some(Side::Player),
            Ordering::Less => Some(Side::Opponent),
            Ordering::Equal => None,
        };
        match winner {
            Some(side) => {
                state.award(side);
            }
            None => {
                state.split_pot();
            }
        }
        state.displayed = true;
        info!(
            ?winner,
            pot,
            player = %player_rank.category(),
            opponent = %opponent_rank.category(),
            "showdown"
        );
        match winner {
            Some(side) => {
                let name = self.name(side);
                self.log.wins_pot(name, pot);
            }
            None => self.log.chop_pot(pot),
        }
        self.outcome = StepOutcome::Showdown(ShowdownSummary {
            winner,
            pot,
            player_rank,
            opponent_rank,
        });
        Ok(())
    }

    fn settle_fold(&mut self, winner: Side) -> Result<(), GameError> {
        let pot = active(&mut self.state)?.award(winner);
        info!(?winner, pot, "hand won uncontested");
        let name = self.name(winner);
        self.log.wins_pot(name, pot);
        self.end_hand()
    }

    fn end_hand(&mut self) -> Result<(), GameError> {
        let state = active(&mut self.state)?;
        if let Some(result) = state.match_outcome() {
            info!(?result, "match over");
            self.outcome = StepOutcome::MatchOver(result);
            return Ok(());
        }
        let (chips, opp_chips, position) = (state.chips, state.opp_chips, state.position.flip());
        self.open_hand(chips, opp_chips, position)
    }

    fn open_hand(&mut self, chips: u32, opp_chips: u32, position: Position) -> Result<(), GameError> {
        let deal = self.deck.deal()?;
        let state = GameState::new_hand(
            deal,
            chips,
            opp_chips,
            position,
            self.config.small_blind,
            self.config.big_blind,
        );
        debug!(chips, opp_chips, ?position, "new hand");
        self.outcome = StepOutcome::AwaitingAction;
        self.log.street(state.street);
        let blind_all_in = state.is_all_in();
        let short_covered = {
            let short = if state.chips == 0 { Side::Player } else { Side::Opponent };
            state.bet_of(short) <= state.bet_of(short.other())
        };
        self.state = Some(state);

        if blind_all_in && short_covered {
            return self.run_out();
        }
        if position == Position::BigBlind {
            // bot posted the small blind and acts first
            self.opponent_turn(false)
        } else {
            Ok(())
        }
    }

    fn finish(self) -> Result<Step, GameError> {
        let Some(state) = self.state else {
            return Err(no_hand());
        };
        conserved(self.config, &state)?;
        Ok(Step {
            state,
            log: self.log.into_lines(),
            outcome: self.outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Passive;

    impl Opponent for Passive {
        fn decide(&mut self, state: &GameState) -> Action {
            if state.bet > state.opp_bet {
                Action::Call
            } else {
                Action::Check
            }
        }

        fn name(&self) -> &str {
            "Passive"
        }
    }

    #[test]
    fn start_match_posts_blinds_with_human_small_blind() {
        let mut engine = Engine::new(TableConfig::default(), Some(1), Passive);
        let step = engine.start_match().unwrap();
        assert_eq!(step.log, vec!["Preflop:"]);
        assert_eq!(step.state.position, Position::SmallBlind);
        assert_eq!((step.state.bet, step.state.opp_bet), (1, 2));
    }

    #[test]
    fn limp_gives_big_blind_the_option() {
        let mut engine = Engine::new(TableConfig::default(), Some(1), Passive);
        let step = engine.start_match().unwrap();
        let step = engine.act(&step.state, Action::Call).unwrap();
        assert_eq!(
            step.log,
            vec!["Player calls", "Opponent checks", "Flop:", "Opponent checks"]
        );
        assert_eq!(step.state.pot, 4);
    }

    #[test]
    fn tampered_chip_total_is_rejected() {
        let mut engine = Engine::new(TableConfig::default(), Some(1), Passive);
        let mut state = engine.start_match().unwrap().state;
        state.chips += 5;
        assert_eq!(
            engine.act(&state, Action::Call),
            Err(GameError::ChipsNotConserved {
                expected: 200,
                actual: 205
            })
        );
    }
}
