use std::sync::Arc;

use shared::domain::{LanguagePreference, Locale};

use crate::{environment::Environment, translator::Translator};

/// Owns the active locale and the translator that serves it.
pub struct LocaleManager {
    translator: Translator,
    env: Arc<dyn Environment>,
}

impl LocaleManager {
    /// Starts on the locale resolved from `config` and the environment.
    pub fn new(
        mut translator: Translator,
        env: Arc<dyn Environment>,
        config: Option<LanguagePreference>,
    ) -> Self {
        let initial = resolve_locale(env.as_ref(), config);
        translator.set_active(initial);
        Self { translator, env }
    }

    /// Explicit config first (unless `auto`), then the host language tag, then English.
    pub fn resolve_initial(&self, config: Option<LanguagePreference>) -> Locale {
        resolve_locale(self.env.as_ref(), config)
    }

    pub fn apply_config(&mut self, config: Option<LanguagePreference>) -> Locale {
        let target = self.resolve_initial(config);
        self.set_locale(target);
        target
    }

    pub fn set_locale(&mut self, target: Locale) {
        if self.translator.active() != target {
            tracing::debug!(from = %self.translator.active(), to = %target, "switching locale");
        }
        self.translator.set_active(target);
    }

    pub fn toggle_locale(current: Locale) -> Locale {
        current.other()
    }

    pub fn toggle(&mut self) -> Locale {
        let next = Self::toggle_locale(self.active());
        self.set_locale(next);
        next
    }

    pub fn active(&self) -> Locale {
        self.translator.active()
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn t(&self, key: &str) -> String {
        self.translator.t(key)
    }

    pub fn t_with(&self, key: &str, vars: &[(&str, &str)]) -> String {
        self.translator.t_with(key, vars)
    }
}

fn resolve_locale(env: &dyn Environment, config: Option<LanguagePreference>) -> Locale {
    if let Some(locale) = config.and_then(LanguagePreference::explicit_locale) {
        return locale;
    }
    env.language_tag()
        .as_deref()
        .and_then(Locale::match_language_tag)
        .unwrap_or(Locale::PRIMARY)
}

#[cfg(test)]
#[path = "tests/locale_tests.rs"]
mod tests;
