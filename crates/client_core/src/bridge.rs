//! Bridge from the view to host-side named commands.
//!
//! Every invocation resolves to a [`CommandOutcome`]; collaborator errors,
//! argument encoding problems and panics inside the collaborator future are
//! all folded into `Failure` so callers never handle errors themselves.

use std::{
    any::Any,
    panic::AssertUnwindSafe,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use futures::FutureExt;
use serde::Serialize;
use serde_json::Value;
use shared::protocol::{CommandArgs, CommandOutcome, Ticket};

/// The host side that actually executes commands.
#[async_trait]
pub trait CommandInvoker: Send + Sync {
    async fn invoke(&self, command: &str, args: CommandArgs) -> anyhow::Result<String>;
}

pub struct CommandBridge {
    invoker: Arc<dyn CommandInvoker>,
    next_ticket: AtomicU64,
}

impl CommandBridge {
    pub fn new(invoker: Arc<dyn CommandInvoker>) -> Self {
        Self {
            invoker,
            next_ticket: AtomicU64::new(1),
        }
    }

    pub async fn invoke<A>(&self, command: &str, args: &A) -> CommandOutcome
    where
        A: Serialize + ?Sized,
    {
        self.prepare(command, args).resolve().await.1
    }

    pub async fn invoke_tracked<A>(&self, command: &str, args: &A) -> (Ticket, CommandOutcome)
    where
        A: Serialize + ?Sized,
    {
        self.prepare(command, args).resolve().await
    }

    /// Issues the ticket now; the request is only sent once the returned
    /// invocation is resolved, which may happen on another task.
    pub fn prepare<A>(&self, command: &str, args: &A) -> Invocation
    where
        A: Serialize + ?Sized,
    {
        let ticket = Ticket(self.next_ticket.fetch_add(1, Ordering::Relaxed));
        Invocation {
            ticket,
            command: command.to_string(),
            args: encode_args(args),
            invoker: Arc::clone(&self.invoker),
        }
    }
}

#[must_use = "an invocation does nothing until resolved"]
pub struct Invocation {
    ticket: Ticket,
    command: String,
    args: Result<CommandArgs, String>,
    invoker: Arc<dyn CommandInvoker>,
}

impl Invocation {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub async fn resolve(self) -> (Ticket, CommandOutcome) {
        let Self {
            ticket,
            command,
            args,
            invoker,
        } = self;

        let args = match args {
            Ok(args) => args,
            Err(message) => {
                tracing::debug!(%ticket, command = %command, "command arguments rejected: {message}");
                return (ticket, CommandOutcome::Failure(message));
            }
        };

        tracing::debug!(%ticket, command = %command, "dispatching host command");
        let result = AssertUnwindSafe(invoker.invoke(&command, args))
            .catch_unwind()
            .await;

        let outcome = match result {
            Ok(Ok(value)) => CommandOutcome::Success(value),
            Ok(Err(err)) => CommandOutcome::Failure(format!("{err:#}")),
            Err(panic) => CommandOutcome::Failure(format!(
                "command {command} panicked: {}",
                panic_message(panic.as_ref())
            )),
        };

        tracing::debug!(
            %ticket,
            command = %command,
            success = outcome.is_success(),
            "host command resolved"
        );
        (ticket, outcome)
    }
}

fn encode_args<A>(args: &A) -> Result<CommandArgs, String>
where
    A: Serialize + ?Sized,
{
    match serde_json::to_value(args) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(Value::Null) => Ok(CommandArgs::new()),
        Ok(other) => Err(format!(
            "command arguments must be a JSON object, got {}",
            json_kind(&other)
        )),
        Err(err) => Err(format!("failed to encode command arguments: {err}")),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
#[path = "tests/bridge_tests.rs"]
mod tests;
