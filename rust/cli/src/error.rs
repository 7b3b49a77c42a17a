//! Error type for the CLI commands.

use std::fmt;

use headsup_engine::errors::{CardParseError, GameError};

use crate::config::ConfigError;

/// Everything a command can fail with. Each variant maps to an exit code in
/// [`crate::run`].
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdin reads, stdout/stderr writes, config file)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    Config(String),

    /// The engine reported an inconsistent state
    Engine(GameError),

    /// Operation was interrupted (e.g., by user with Ctrl+C)
    Interrupted(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
            CliError::Interrupted(msg) => write!(f, "Interrupted: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        match error {
            GameError::InvalidAction(e) => CliError::InvalidInput(e.to_string()),
            other => CliError::Engine(other),
        }
    }
}

impl From<CardParseError> for CliError {
    fn from(error: CardParseError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use headsup_engine::errors::ActionError;

    #[test]
    fn invalid_actions_become_input_errors() {
        let e: CliError = GameError::from(ActionError::NothingToCall).into();
        assert!(matches!(e, CliError::InvalidInput(_)));
        assert_eq!(
            e.to_string(),
            "Invalid input: Invalid call: there is no bet to call"
        );
    }

    #[test]
    fn inconsistent_state_stays_an_engine_error() {
        let e: CliError = GameError::ChipsNotConserved {
            expected: 200,
            actual: 199,
        }
        .into();
        assert!(matches!(e, CliError::Engine(_)));
        assert!(std::error::Error::source(&e).is_some());
    }
}
