use std::sync::Arc;

use client_core::{CommandBridge, CommandInvoker, Environment, LocaleManager, PreferenceStore, Translator};
use shared::domain::LanguagePreference;
use storage::{KeyValueStore, MemoryStore};

use crate::backend_bridge::commands::CommandRegistry;
use crate::controller::view::AppView;

#[derive(Debug, Clone, Default)]
pub struct FixedEnvironment {
    pub prefers_dark: bool,
    pub language_tag: Option<String>,
}

impl Environment for FixedEnvironment {
    fn prefers_dark_color_scheme(&self) -> bool {
        self.prefers_dark
    }

    fn language_tag(&self) -> Option<String> {
        self.language_tag.clone()
    }
}

pub struct ViewBuilder {
    pub env: FixedEnvironment,
    pub store: Box<dyn KeyValueStore>,
    pub language: Option<LanguagePreference>,
    pub invoker: Arc<dyn CommandInvoker>,
    pub initial_count: i64,
    pub name: String,
}

impl Default for ViewBuilder {
    fn default() -> Self {
        Self {
            env: FixedEnvironment {
                prefers_dark: false,
                language_tag: Some("en-US".to_string()),
            },
            store: Box::new(MemoryStore::new()),
            language: None,
            invoker: Arc::new(CommandRegistry::with_builtin_commands()),
            initial_count: 0,
            name: "Developer".to_string(),
        }
    }
}

impl ViewBuilder {
    pub fn build(self) -> AppView {
        let env = Arc::new(self.env);
        let prefs = PreferenceStore::new(self.store, env.clone());
        let locale = LocaleManager::new(
            Translator::bundled().expect("bundled resources"),
            env,
            self.language,
        );
        AppView::mount(
            prefs,
            locale,
            CommandBridge::new(self.invoker),
            self.initial_count,
            self.name,
        )
    }
}
