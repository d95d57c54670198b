use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseTokenError;

macro_rules! token_enum {
    ($name:ident { $($variant:ident => $token:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseTokenError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                match raw.trim() {
                    $($token => Ok($name::$variant),)+
                    other => Err(ParseTokenError::new(stringify!($name), other)),
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    Light,
    Dark,
}

token_enum!(DisplayMode { Light => "light", Dark => "dark" });

impl DisplayMode {
    pub fn from_dark_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            DisplayMode::Dark
        } else {
            DisplayMode::Light
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == DisplayMode::Dark
    }
}

/// The two supported display languages. English is the primary locale and the
/// fallback for every lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

token_enum!(Locale { En => "en", Zh => "zh" });

impl Locale {
    pub const PRIMARY: Locale = Locale::En;
    pub const SECONDARY: Locale = Locale::Zh;

    pub fn other(self) -> Self {
        match self {
            Locale::En => Locale::Zh,
            Locale::Zh => Locale::En,
        }
    }

    /// Label for the language switch button: names the locale a click switches to.
    pub fn switch_label(self) -> &'static str {
        match self {
            Locale::En => "中文",
            Locale::Zh => "English",
        }
    }

    /// Prefix-matches a host language tag such as `zh-CN`, `en_US.UTF-8` or `ZH`.
    pub fn match_language_tag(tag: &str) -> Option<Self> {
        let normalized = tag.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|locale| normalized.starts_with(locale.as_str()))
    }
}

/// Language setting as written in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguagePreference {
    En,
    Zh,
    #[default]
    Auto,
}

token_enum!(LanguagePreference { En => "en", Zh => "zh", Auto => "auto" });

impl LanguagePreference {
    /// Unrecognized tokens are treated as `auto`.
    pub fn from_token_lossy(raw: &str) -> Self {
        raw.parse().unwrap_or(LanguagePreference::Auto)
    }

    pub fn explicit_locale(self) -> Option<Locale> {
        match self {
            LanguagePreference::En => Some(Locale::En),
            LanguagePreference::Zh => Some(Locale::Zh),
            LanguagePreference::Auto => None,
        }
    }
}

impl From<Locale> for LanguagePreference {
    fn from(value: Locale) -> Self {
        match value {
            Locale::En => LanguagePreference::En,
            Locale::Zh => LanguagePreference::Zh,
        }
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
