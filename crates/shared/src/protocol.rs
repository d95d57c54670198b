use std::fmt;

use serde::{Deserialize, Serialize};

/// Named arguments passed to a host command.
pub type CommandArgs = serde_json::Map<String, serde_json::Value>;

pub const FAILURE_PREFIX: &str = "Error: ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum CommandOutcome {
    Success(String),
    Failure(String),
}

impl CommandOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            CommandOutcome::Success(value) | CommandOutcome::Failure(value) => value,
        }
    }

    /// Text shown to the user: the raw value on success, prefixed on failure.
    pub fn display_text(&self) -> String {
        match self {
            CommandOutcome::Success(value) => value.clone(),
            CommandOutcome::Failure(message) => format!("{FAILURE_PREFIX}{message}"),
        }
    }
}

/// Issue order of a command invocation. Later invocations get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ticket(pub u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
