//! Read-only host signals used to pick initial theme and language.

pub const COLOR_SCHEME_ENV: &str = "APP__COLOR_SCHEME";
const GTK_THEME_ENV: &str = "GTK_THEME";
const LANGUAGE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

pub trait Environment: Send + Sync {
    fn prefers_dark_color_scheme(&self) -> bool;
    fn language_tag(&self) -> Option<String>;
}

/// Process environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn prefers_dark_color_scheme(&self) -> bool {
        if let Some(scheme) = read_non_empty_env_var(COLOR_SCHEME_ENV) {
            return scheme.trim().eq_ignore_ascii_case("dark");
        }
        read_non_empty_env_var(GTK_THEME_ENV)
            .map(|theme| theme.to_ascii_lowercase().ends_with(":dark"))
            .unwrap_or(false)
    }

    fn language_tag(&self) -> Option<String> {
        // POSIX precedence; "C"/"POSIX" carry no language.
        LANGUAGE_ENV_VARS
            .iter()
            .filter_map(|name| read_non_empty_env_var(name))
            .find(|value| !matches!(value.as_str(), "C" | "POSIX"))
    }
}

fn read_non_empty_env_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if value.trim().is_empty() => None,
        Ok(value) => Some(value),
        Err(_) => None,
    }
}
