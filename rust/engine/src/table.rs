use tracing::{debug, info};

use crate::engine::{Engine, Step, StepOutcome, TableConfig};
use crate::errors::GameError;
use crate::game::GameState;
use crate::opponent::Opponent;
use crate::player::Action;
use crate::store::GameStore;

/// Binds an [`Engine`] to a [`GameStore`]: every request loads the session's
/// state, runs the engine and commits the result. A failed request writes
/// nothing.
#[derive(Debug)]
pub struct Table<S: GameStore, O: Opponent> {
    engine: Engine<O>,
    store: S,
}

impl<S: GameStore, O: Opponent> Table<S, O> {
    pub fn new(config: TableConfig, seed: Option<u64>, opponent: O, store: S) -> Self {
        Self {
            engine: Engine::new(config, seed, opponent),
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn engine(&self) -> &Engine<O> {
        &self.engine
    }

    /// Resumes the session's match, or starts one when none is active. A
    /// stored hand whose showdown was already shown continues with the next
    /// hand, or reports the end of the match.
    pub fn open(&mut self, session: &str) -> Result<Step, GameError> {
        if let Some(state) = self.store.load(session)? {
            debug!(session, displayed = state.displayed, "resuming match");
            if state.displayed {
                return self.next_hand(session);
            }
            return Ok(Step {
                state,
                log: Vec::new(),
                outcome: StepOutcome::AwaitingAction,
            });
        }
        let step = self.engine.start_match()?;
        self.commit(session, &step)?;
        Ok(step)
    }

    pub fn act(&mut self, session: &str, action: Action) -> Result<Step, GameError> {
        let state = self.active(session)?;
        let step = self.engine.act(&state, action)?;
        self.commit(session, &step)?;
        Ok(step)
    }

    pub fn next_hand(&mut self, session: &str) -> Result<Step, GameError> {
        let state = self.active(session)?;
        let step = self.engine.next_hand(&state)?;
        self.commit(session, &step)?;
        Ok(step)
    }

    fn active(&self, session: &str) -> Result<GameState, GameError> {
        self.store
            .load(session)?
            .ok_or_else(|| GameError::NoActiveHand(session.to_string()))
    }

    fn commit(&mut self, session: &str, step: &Step) -> Result<(), GameError> {
        // log first: a failed append leaves the previous state in place
        self.store.append_log(session, &step.log)?;
        self.store.save(session, &step.state)?;
        if let StepOutcome::MatchOver(outcome) = step.outcome {
            info!(session, ?outcome, "recording match result");
            self.store.record_result(session, outcome)?;
            self.store.close(session)?;
        }
        Ok(())
    }
}
