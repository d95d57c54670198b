//! Top-level view state composing theme, locale, counter and greeting.

use client_core::{
    CommandBridge, CounterState, Invocation, LocaleManager, OutcomeDisplay, PreferenceStore,
};
use serde_json::json;
use shared::domain::{DisplayMode, Locale};

use crate::backend_bridge::commands::GREET;
use crate::controller::events::{UiAction, UiEvent};

/// What the event loop has to do after an action.
pub enum Effect {
    Render,
    Invoke(Invocation),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Help,
    UnknownInput(String),
}

pub struct AppView {
    prefs: PreferenceStore,
    locale: LocaleManager,
    counter: CounterState,
    bridge: CommandBridge,
    greeting: OutcomeDisplay,
    theme: DisplayMode,
    name: String,
    in_flight: usize,
    notice: Option<Notice>,
}

impl AppView {
    /// Syncs the visual theme flag with the resolved preference before first render.
    pub fn mount(
        mut prefs: PreferenceStore,
        locale: LocaleManager,
        bridge: CommandBridge,
        initial_count: i64,
        name: impl Into<String>,
    ) -> Self {
        let theme = prefs.mount();
        tracing::info!(theme = %theme, locale = %locale.active(), "view mounted");
        Self {
            prefs,
            locale,
            counter: CounterState::new(initial_count),
            bridge,
            greeting: OutcomeDisplay::new(),
            theme,
            name: name.into(),
            in_flight: 0,
            notice: None,
        }
    }

    pub fn dispatch(&mut self, action: UiAction) -> Effect {
        self.notice = None;
        match action {
            UiAction::Increment => {
                self.counter.increment();
            }
            UiAction::Decrement => {
                self.counter.decrement();
            }
            UiAction::ResetCounter => {
                self.counter.reset();
            }
            UiAction::ToggleTheme => {
                self.theme = PreferenceStore::toggle(self.theme);
                self.prefs.apply(self.theme);
            }
            UiAction::ToggleLanguage => {
                self.locale.toggle();
            }
            UiAction::SetLanguage(preference) => {
                self.locale.apply_config(Some(preference));
            }
            UiAction::SetName(name) => self.name = name,
            UiAction::Greet => {
                let invocation = self.bridge.prepare(GREET, &json!({ "name": self.name }));
                self.in_flight += 1;
                return Effect::Invoke(invocation);
            }
            UiAction::Help => self.notice = Some(Notice::Help),
            UiAction::Quit => return Effect::Quit,
            UiAction::Unknown(input) => self.notice = Some(Notice::UnknownInput(input)),
        }
        Effect::Render
    }

    pub fn on_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::CommandResolved { ticket, outcome } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.greeting.accept(ticket, outcome);
            }
        }
    }

    pub fn theme(&self) -> DisplayMode {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.prefs.is_dark_applied()
    }

    pub fn locale(&self) -> Locale {
        self.locale.active()
    }

    pub fn t(&self, key: &str) -> String {
        self.locale.t(key)
    }

    pub fn t_with(&self, key: &str, vars: &[(&str, &str)]) -> String {
        self.locale.t_with(key, vars)
    }

    pub fn counter(&self) -> &CounterState {
        &self.counter
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn greeting(&self) -> &OutcomeDisplay {
        &self.greeting
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}

#[cfg(test)]
#[path = "../tests/view_tests.rs"]
mod tests;
