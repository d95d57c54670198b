use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;
use shared::domain::LanguagePreference;
use storage::{JsonFileStore, KeyValueStore, MemoryStore};

pub const DEFAULT_CONFIG_FILE: &str = "desktop.toml";
const APP_DIR_NAME: &str = "desktop_shell";
const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub language: LanguagePreference,
    pub data_dir: Option<PathBuf>,
    pub initial_count: i64,
    pub user_name: String,
    pub color: bool,
    pub command_latency_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: LanguagePreference::Auto,
            data_dir: None,
            initial_count: 0,
            user_name: "Developer".into(),
            color: true,
            command_latency_ms: 0,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    language: Option<String>,
    data_dir: Option<PathBuf>,
    initial_count: Option<i64>,
    user_name: Option<String>,
    color: Option<bool>,
    command_latency_ms: Option<u64>,
}

/// Defaults, then the TOML file, then `APP__*` environment overrides.
///
/// An explicitly named config file must exist and parse; the implicit
/// `desktop.toml` in the working directory is optional.
pub fn load_settings(explicit_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match explicit_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?;
            settings
                .apply_file(&raw)
                .with_context(|| format!("invalid config file '{}'", path.display()))?;
        }
        None => {
            if let Ok(raw) = fs::read_to_string(DEFAULT_CONFIG_FILE) {
                if let Err(err) = settings.apply_file(&raw) {
                    tracing::warn!("ignoring {DEFAULT_CONFIG_FILE}: {err:#}");
                }
            }
        }
    }

    settings.apply_env(|name| std::env::var(name).ok());
    Ok(settings)
}

impl Settings {
    pub fn apply_file(&mut self, raw: &str) -> anyhow::Result<()> {
        let file_cfg: FileSettings = toml::from_str(raw).context("failed to parse TOML")?;

        if let Some(v) = file_cfg.language {
            self.language = LanguagePreference::from_token_lossy(&v);
        }
        if let Some(v) = file_cfg.data_dir {
            self.data_dir = Some(v);
        }
        if let Some(v) = file_cfg.initial_count {
            self.initial_count = v;
        }
        if let Some(v) = file_cfg.user_name {
            self.user_name = v;
        }
        if let Some(v) = file_cfg.color {
            self.color = v;
        }
        if let Some(v) = file_cfg.command_latency_ms {
            self.command_latency_ms = v;
        }
        Ok(())
    }

    /// Malformed numeric overrides are ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(v) = non_empty("APP__LANGUAGE") {
            self.language = LanguagePreference::from_token_lossy(&v);
        }
        if let Some(v) = non_empty("APP__DATA_DIR") {
            self.data_dir = Some(PathBuf::from(v));
        }
        if let Some(v) = non_empty("APP__INITIAL_COUNT") {
            if let Ok(parsed) = v.trim().parse::<i64>() {
                self.initial_count = parsed;
            }
        }
        if let Some(v) = non_empty("APP__USER_NAME") {
            self.user_name = v;
        }
        if non_empty("NO_COLOR").is_some() {
            self.color = false;
        }
        if let Some(v) = non_empty("APP__COMMAND_LATENCY_MS") {
            if let Ok(parsed) = v.trim().parse::<u64>() {
                self.command_latency_ms = parsed;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_root: PathBuf,
    pub settings_path: PathBuf,
}

impl AppPaths {
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let root = if let Some(p) = &settings.data_dir {
            p.clone()
        } else {
            let base = dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("unable to resolve local app data dir"))?;
            base.join(APP_DIR_NAME)
        };

        Ok(Self {
            settings_path: root.join(SETTINGS_FILE_NAME),
            data_root: root,
        })
    }

    /// Creating the data root is the only fatal step. A settings file that
    /// cannot be read degrades to an in-memory store for this session.
    pub fn open_store(&self) -> anyhow::Result<Box<dyn KeyValueStore>> {
        fs::create_dir_all(&self.data_root).with_context(|| {
            format!("failed to create data dir '{}'", self.data_root.display())
        })?;

        match JsonFileStore::open(&self.settings_path) {
            Ok(store) => Ok(Box::new(store)),
            Err(err) => {
                tracing::warn!(
                    path = %self.settings_path.display(),
                    "preferences will not persist this session: {err:#}"
                );
                Ok(Box::new(MemoryStore::new()))
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
