//! Runs prepared invocations off the UI loop and reports back over the event channel.

use client_core::Invocation;
use tokio::{sync::mpsc::Sender, task::JoinHandle};

use crate::controller::events::UiEvent;

pub fn launch(invocation: Invocation, ui_tx: Sender<UiEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let (ticket, outcome) = invocation.resolve().await;
        if ui_tx
            .send(UiEvent::CommandResolved { ticket, outcome })
            .await
            .is_err()
        {
            tracing::debug!(%ticket, "ui loop closed before command resolved");
        }
    })
}
