//! Per-session persistence.
//!
//! The engine never touches storage itself; [`crate::table::Table`] loads the
//! state before a request and commits the result after it.

use std::collections::HashMap;

use thiserror::Error;

use crate::game::{GameState, MatchOutcome};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),
    #[error("Unknown session '{0}'")]
    UnknownSession(String),
}

/// Win/loss tally for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
}

impl Record {
    fn add(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Win => self.wins += 1,
            MatchOutcome::Loss => self.losses += 1,
        }
    }
}

/// Storage for game state, the action log and match results, keyed by session.
///
/// [`crate::table::Table`] writes in a fixed order: `append_log`, `save`, then
/// `record_result` and `close` when a match ends. Each call is applied on its
/// own; a store that needs all-or-nothing commits must provide it itself.
pub trait GameStore {
    /// The active match, if any.
    fn load(&self, session: &str) -> Result<Option<GameState>, StoreError>;

    fn save(&mut self, session: &str, state: &GameState) -> Result<(), StoreError>;

    /// Appends to the session's log. Lines are never rewritten.
    fn append_log(&mut self, session: &str, lines: &[String]) -> Result<(), StoreError>;

    fn record_result(&mut self, session: &str, outcome: MatchOutcome) -> Result<(), StoreError>;

    /// Ends the active match; the next load starts fresh.
    fn close(&mut self, session: &str) -> Result<(), StoreError>;
}

/// In-process store used by the CLI and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    games: HashMap<String, GameState>,
    logs: HashMap<String, Vec<String>>,
    records: HashMap<String, Record>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self, session: &str) -> &[String] {
        self.logs.get(session).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn record(&self, session: &str) -> Record {
        self.records.get(session).copied().unwrap_or_default()
    }
}

impl GameStore for MemoryStore {
    fn load(&self, session: &str) -> Result<Option<GameState>, StoreError> {
        Ok(self.games.get(session).cloned())
    }

    fn save(&mut self, session: &str, state: &GameState) -> Result<(), StoreError> {
        self.games.insert(session.to_string(), state.clone());
        Ok(())
    }

    fn append_log(&mut self, session: &str, lines: &[String]) -> Result<(), StoreError> {
        self.logs
            .entry(session.to_string())
            .or_default()
            .extend_from_slice(lines);
        Ok(())
    }

    fn record_result(&mut self, session: &str, outcome: MatchOutcome) -> Result<(), StoreError> {
        self.records
            .entry(session.to_string())
            .or_default()
            .add(outcome);
        Ok(())
    }

    fn close(&mut self, session: &str) -> Result<(), StoreError> {
        self.games
            .remove(session)
            .map(|_| ())
            .ok_or_else(|| StoreError::UnknownSession(session.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_accumulates_and_records_tally() {
        let mut store = MemoryStore::new();
        store.append_log("s", &["Preflop:".to_string()]).unwrap();
        store.append_log("s", &["Player folds".to_string()]).unwrap();
        assert_eq!(store.log("s"), ["Preflop:", "Player folds"]);
        assert!(store.log("other").is_empty());

        store.record_result("s", MatchOutcome::Win).unwrap();
        store.record_result("s", MatchOutcome::Loss).unwrap();
        store.record_result("s", MatchOutcome::Win).unwrap();
        assert_eq!(store.record("s"), Record { wins: 2, losses: 1 });
    }

    #[test]
    fn close_unknown_session_errors() {
        let mut store = MemoryStore::new();
        assert_eq!(
            store.close("nope"),
            Err(StoreError::UnknownSession("nope".to_string()))
        );
    }
}
