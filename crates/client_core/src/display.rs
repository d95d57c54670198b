//! Display state for command outcomes.
//!
//! Stale outcomes are dropped: once the display shows the outcome of ticket
//! `n`, any outcome with a ticket below `n` that resolves later is ignored, so
//! the newest invocation that has resolved always wins.

use shared::protocol::{CommandOutcome, Ticket};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplayState {
    #[default]
    Idle,
    Displaying(String),
}

#[derive(Debug, Clone, Default)]
pub struct OutcomeDisplay {
    state: DisplayState,
    shown: Option<Ticket>,
    last_outcome: Option<CommandOutcome>,
}

impl OutcomeDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the outcome was discarded as stale.
    pub fn accept(&mut self, ticket: Ticket, outcome: CommandOutcome) -> bool {
        if self.shown.is_some_and(|shown| ticket < shown) {
            tracing::debug!(%ticket, "discarding stale command outcome");
            return false;
        }
        self.shown = Some(ticket);
        self.state = DisplayState::Displaying(outcome.display_text());
        self.last_outcome = Some(outcome);
        true
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Empty while idle.
    pub fn text(&self) -> &str {
        match &self.state {
            DisplayState::Idle => "",
            DisplayState::Displaying(text) => text,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state == DisplayState::Idle
    }

    pub fn shown_ticket(&self) -> Option<Ticket> {
        self.shown
    }

    pub fn last_outcome(&self) -> Option<&CommandOutcome> {
        self.last_outcome.as_ref()
    }
}

#[cfg(test)]
#[path = "tests/display_tests.rs"]
mod tests;
