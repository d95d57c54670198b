//! Dotted-key string lookup over two locale resource sets.

use serde_json::Value;
use shared::domain::Locale;
use thiserror::Error;

const BUNDLED_EN: &str = include_str!("../resources/locales/en.json");
const BUNDLED_ZH: &str = include_str!("../resources/locales/zh.json");

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("invalid {locale} resource: {source}")]
    InvalidResource {
        locale: Locale,
        source: serde_json::Error,
    },
    #[error("{locale} resource must be a JSON object")]
    NotAnObject { locale: Locale },
}

#[derive(Debug, Clone)]
pub struct Translator {
    en: Value,
    zh: Value,
    active: Locale,
}

impl Translator {
    /// Resources compiled into the binary.
    pub fn bundled() -> Result<Self, TranslationError> {
        Self::from_json(BUNDLED_EN, BUNDLED_ZH)
    }

    pub fn from_json(en: &str, zh: &str) -> Result<Self, TranslationError> {
        Self::from_resources(parse_resource(Locale::En, en)?, parse_resource(Locale::Zh, zh)?)
    }

    pub fn from_resources(en: Value, zh: Value) -> Result<Self, TranslationError> {
        if !en.is_object() {
            return Err(TranslationError::NotAnObject { locale: Locale::En });
        }
        if !zh.is_object() {
            return Err(TranslationError::NotAnObject { locale: Locale::Zh });
        }
        Ok(Self {
            en,
            zh,
            active: Locale::PRIMARY,
        })
    }

    pub fn active(&self) -> Locale {
        self.active
    }

    pub fn set_active(&mut self, locale: Locale) {
        self.active = locale;
    }

    pub fn t(&self, key: &str) -> String {
        self.translate(self.active, key)
    }

    /// Looks `key` up in `locale`, then in the primary locale, then returns the key.
    pub fn translate(&self, locale: Locale, key: &str) -> String {
        self.lookup(locale, key)
            .or_else(|| self.lookup(Locale::PRIMARY, key))
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }

    /// Like [`Translator::t`], replacing `{{name}}` placeholders. Values are inserted verbatim.
    pub fn t_with(&self, key: &str, vars: &[(&str, &str)]) -> String {
        interpolate(self.t(key), vars)
    }

    fn resources(&self, locale: Locale) -> &Value {
        match locale {
            Locale::En => &self.en,
            Locale::Zh => &self.zh,
        }
    }

    fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        key.split('.')
            .try_fold(self.resources(locale), |node, segment| node.get(segment))?
            .as_str()
    }
}

fn parse_resource(locale: Locale, raw: &str) -> Result<Value, TranslationError> {
    serde_json::from_str(raw).map_err(|source| TranslationError::InvalidResource { locale, source })
}

/// Single pass over the template; inserted values are never rescanned.
fn interpolate(text: String, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text.as_str();

    while let Some(open) = rest.find("{{") {
        let Some(close) = rest[open + 2..].find("}}") else {
            break;
        };
        let name = rest[open + 2..open + 2 + close].trim();
        out.push_str(&rest[..open]);
        match vars.iter().find(|(var, _)| *var == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[open..open + 4 + close]),
        }
        rest = &rest[open + 4 + close..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
#[path = "tests/translator_tests.rs"]
mod tests;
