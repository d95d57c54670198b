use std::{path::PathBuf, sync::Arc, time::Duration};

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{
    CommandBridge, Environment, LocaleManager, PreferenceStore, SystemEnvironment, Translator,
};
use shared::domain::LanguagePreference;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::CommandRegistry;
use crate::config::{load_settings, AppPaths};
use crate::controller::{orchestration::run_event_loop, view::AppView};

#[derive(Parser, Debug)]
#[command(about = "Terminal front end with theme, language, counter and host command demo")]
struct Args {
    /// TOML config file; defaults to ./desktop.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// en, zh or auto. Unknown values behave like auto.
    #[arg(long)]
    language: Option<String>,
    #[arg(long)]
    data_dir: Option<PathBuf>,
    #[arg(long, allow_negative_numbers = true)]
    initial_count: Option<i64>,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    no_color: bool,
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(v) = &args.language {
        settings.language = LanguagePreference::from_token_lossy(v);
    }
    if let Some(v) = args.data_dir {
        settings.data_dir = Some(v);
    }
    if let Some(v) = args.initial_count {
        settings.initial_count = v;
    }
    if let Some(v) = args.name {
        settings.user_name = v;
    }
    if args.no_color {
        settings.color = false;
    }

    let paths = AppPaths::from_settings(&settings)?;
    tracing::info!(
        data_root = %paths.data_root.display(),
        settings = %paths.settings_path.display(),
        "starting desktop front end"
    );

    let env: Arc<dyn Environment> = Arc::new(SystemEnvironment);
    let store = paths.open_store()?;
    let prefs = PreferenceStore::new(store, env.clone());
    let translator = Translator::bundled().context("failed to load bundled translations")?;
    let locale = LocaleManager::new(translator, env, Some(settings.language));
    let registry = CommandRegistry::with_builtin_commands()
        .with_latency(Duration::from_millis(settings.command_latency_ms));
    tracing::debug!(
        commands = ?registry.command_names().collect::<Vec<_>>(),
        "host commands registered"
    );
    let bridge = CommandBridge::new(Arc::new(registry));

    let mut view = AppView::mount(
        prefs,
        locale,
        bridge,
        settings.initial_count,
        settings.user_name.clone(),
    );

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_event_loop(&mut view, stdin, &mut stdout, settings.color).await
}

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;
