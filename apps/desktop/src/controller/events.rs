//! User actions parsed from input lines, and events fed back from background tasks.

use shared::{
    domain::LanguagePreference,
    protocol::{CommandOutcome, Ticket},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    CommandResolved {
        ticket: Ticket,
        outcome: CommandOutcome,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Increment,
    Decrement,
    ResetCounter,
    ToggleTheme,
    ToggleLanguage,
    SetLanguage(LanguagePreference),
    SetName(String),
    Greet,
    Help,
    Quit,
    Unknown(String),
}

impl UiAction {
    /// `None` for blank lines.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let action = match (verb.to_ascii_lowercase().as_str(), rest) {
            ("+" | "inc", "") => UiAction::Increment,
            ("-" | "dec", "") => UiAction::Decrement,
            ("reset", "") => UiAction::ResetCounter,
            ("theme", "") => UiAction::ToggleTheme,
            ("lang", "") => UiAction::ToggleLanguage,
            ("lang", token) => UiAction::SetLanguage(LanguagePreference::from_token_lossy(token)),
            ("name", name) if !name.is_empty() => UiAction::SetName(name.to_string()),
            ("greet", "") => UiAction::Greet,
            ("help" | "?", "") => UiAction::Help,
            ("quit" | "exit" | "q", "") => UiAction::Quit,
            _ => UiAction::Unknown(line.to_string()),
        };
        Some(action)
    }
}

#[cfg(test)]
#[path = "../tests/events_tests.rs"]
mod tests;
