//! Human-readable action log.
//!
//! Lines are only ever appended and are never read back by the engine; they
//! exist for whoever presents the hand to the player.

use crate::game::Street;
use crate::player::Action;

/// Name the bot is logged under.
pub const OPPONENT_NAME: &str = "Opponent";

/// Lines produced while processing one request, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionLog {
    lines: Vec<String>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn street(&mut self, street: Street) {
        self.lines.push(street.label().to_string());
    }

    pub fn action(&mut self, name: &str, action: Action) {
        self.lines.push(format!("{} {}", name, action));
    }

    pub fn wins_pot(&mut self, name: &str, amount: u32) {
        self.lines.push(format!("{} wins pot of {}", name, amount));
    }

    pub fn chop_pot(&mut self, amount: u32) {
        self.lines.push(format!("Chop pot of {}", amount));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
