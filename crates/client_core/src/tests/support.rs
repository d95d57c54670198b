use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use storage::{KeyValueStore, MemoryStore};

use crate::environment::Environment;

#[derive(Debug, Clone, Default)]
pub struct FixedEnvironment {
    pub prefers_dark: bool,
    pub language_tag: Option<String>,
}

impl FixedEnvironment {
    pub fn dark() -> Self {
        Self {
            prefers_dark: true,
            language_tag: None,
        }
    }

    pub fn light() -> Self {
        Self::default()
    }

    pub fn with_language(tag: &str) -> Self {
        Self {
            prefers_dark: false,
            language_tag: Some(tag.to_string()),
        }
    }
}

impl Environment for FixedEnvironment {
    fn prefers_dark_color_scheme(&self) -> bool {
        self.prefers_dark
    }

    fn language_tag(&self) -> Option<String> {
        self.language_tag.clone()
    }
}

/// Store handle that stays observable after being boxed into a component.
#[derive(Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<MemoryStore>>,
    pub writes: Arc<Mutex<Vec<(String, String)>>>,
}

impl SharedStore {
    pub fn seeded(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .inner
            .lock()
            .expect("store lock")
            .set(key, value)
            .expect("seed");
        store
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.inner.lock().expect("store lock").get(key).expect("get")
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().expect("writes lock").len()
    }
}

impl KeyValueStore for SharedStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.lock().expect("store lock").get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.writes
            .lock()
            .expect("writes lock")
            .push((key.to_string(), value.to_string()));
        self.inner.lock().expect("store lock").set(key, value)
    }
}

/// Store whose every operation fails, like an unwritable profile directory.
pub struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(anyhow!("permission denied"))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(anyhow!("permission denied"))
    }
}
