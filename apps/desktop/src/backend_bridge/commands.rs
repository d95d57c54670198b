//! Named host commands callable through the command bridge.

use std::{collections::BTreeMap, time::Duration};

use async_trait::async_trait;
use client_core::CommandInvoker;
use serde_json::Value;
use shared::protocol::CommandArgs;
use thiserror::Error;

pub const GREET: &str = "greet";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("command {0} not found")]
    NotFound(String),
    #[error("invalid args `{key}` for command `{command}`: {reason}")]
    InvalidArgs {
        command: &'static str,
        key: &'static str,
        reason: String,
    },
}

type Handler = Box<dyn Fn(&CommandArgs) -> Result<String, CommandError> + Send + Sync>;

pub struct CommandRegistry {
    handlers: BTreeMap<&'static str, Handler>,
    latency: Duration,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            handlers: BTreeMap::new(),
            latency: Duration::ZERO,
        }
    }

    /// Registry with every built-in command.
    pub fn with_builtin_commands() -> Self {
        let mut registry = Self::new();
        registry.register(GREET, greet);
        registry
    }

    /// Delay applied before each handler runs, to mimic a slow host.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn register<F>(&mut self, name: &'static str, handler: F)
    where
        F: Fn(&CommandArgs) -> Result<String, CommandError> + Send + Sync + 'static,
    {
        self.handlers.insert(name, Box::new(handler));
    }

    pub fn command_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    pub fn execute(&self, command: &str, args: &CommandArgs) -> Result<String, CommandError> {
        let handler = self
            .handlers
            .get(command)
            .ok_or_else(|| CommandError::NotFound(command.to_string()))?;
        handler(args)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::with_builtin_commands()
    }
}

#[async_trait]
impl CommandInvoker for CommandRegistry {
    async fn invoke(&self, command: &str, args: CommandArgs) -> anyhow::Result<String> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(self.execute(command, &args)?)
    }
}

fn greet(args: &CommandArgs) -> Result<String, CommandError> {
    let name = required_str(GREET, args, "name")?;
    Ok(format!("Hello, {name}! Welcome!"))
}

fn required_str<'a>(
    command: &'static str,
    args: &'a CommandArgs,
    key: &'static str,
) -> Result<&'a str, CommandError> {
    match args.get(key) {
        Some(Value::String(value)) => Ok(value.as_str()),
        Some(other) => Err(CommandError::InvalidArgs {
            command,
            key,
            reason: format!("expected a string, got {other}"),
        }),
        None => Err(CommandError::InvalidArgs {
            command,
            key,
            reason: format!("command {command} missing required key {key}"),
        }),
    }
}

#[cfg(test)]
#[path = "../tests/commands_tests.rs"]
mod tests;
