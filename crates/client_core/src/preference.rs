use std::sync::Arc;

use shared::domain::DisplayMode;
use storage::KeyValueStore;

use crate::environment::Environment;

pub const THEME_STORAGE_KEY: &str = "theme";

/// Resolves, applies and persists the light/dark display mode.
///
/// The visual flag mirrors the `dark` class on a document root: it is set on
/// `apply` and read by whatever renders the view.
pub struct PreferenceStore {
    store: Box<dyn KeyValueStore>,
    env: Arc<dyn Environment>,
    applied: Option<DisplayMode>,
}

impl PreferenceStore {
    pub fn new(store: Box<dyn KeyValueStore>, env: Arc<dyn Environment>) -> Self {
        Self {
            store,
            env,
            applied: None,
        }
    }

    /// Persisted mode if valid, otherwise the host color-scheme preference.
    pub fn resolve_initial(&self) -> DisplayMode {
        let persisted = match self.store.get(THEME_STORAGE_KEY) {
            Ok(value) => value.and_then(|raw| raw.parse::<DisplayMode>().ok()),
            Err(err) => {
                tracing::debug!("theme preference unreadable, using host preference: {err:#}");
                None
            }
        };

        persisted.unwrap_or_else(|| {
            DisplayMode::from_dark_preference(self.env.prefers_dark_color_scheme())
        })
    }

    /// Resolves the initial mode and syncs the visual flag and store with it.
    pub fn mount(&mut self) -> DisplayMode {
        let mode = self.resolve_initial();
        self.apply(mode);
        mode
    }

    pub fn apply(&mut self, mode: DisplayMode) {
        self.applied = Some(mode);
        if let Err(err) = self.store.set(THEME_STORAGE_KEY, mode.as_str()) {
            tracing::warn!(mode = %mode, "failed to persist theme preference: {err:#}");
        }
        tracing::debug!(mode = %mode, "applied display mode");
    }

    pub fn toggle(current: DisplayMode) -> DisplayMode {
        current.opposite()
    }

    pub fn active(&self) -> Option<DisplayMode> {
        self.applied
    }

    pub fn is_dark_applied(&self) -> bool {
        self.applied.is_some_and(DisplayMode::is_dark)
    }
}

#[cfg(test)]
#[path = "tests/preference_tests.rs"]
mod tests;
