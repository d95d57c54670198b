//! The single UI loop: input lines and resolved commands are handled one at a
//! time, so view state is only ever touched from this task.

use std::io::Write;

use anyhow::Context;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc,
};

use crate::backend_bridge::runtime;
use crate::controller::{
    events::UiAction,
    view::{AppView, Effect},
};
use crate::ui::{render_view, Palette};

const UI_EVENT_CAPACITY: usize = 256;

/// Runs until `quit` or until input closes and every started command has resolved.
pub async fn run_event_loop<R, W>(
    view: &mut AppView,
    input: R,
    output: &mut W,
    color: bool,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (ui_tx, mut ui_rx) = mpsc::channel(UI_EVENT_CAPACITY);
    let mut lines = input.lines();
    let mut input_open = true;

    draw(view, output, color)?;
    loop {
        if !input_open && view.in_flight() == 0 {
            break;
        }

        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line.context("failed to read input")? else {
                    input_open = false;
                    continue;
                };
                let Some(action) = UiAction::parse(&line) else {
                    continue;
                };
                match view.dispatch(action) {
                    Effect::Render => {}
                    Effect::Invoke(invocation) => {
                        tracing::debug!(ticket = %invocation.ticket(), "launching host command");
                        runtime::launch(invocation, ui_tx.clone());
                    }
                    Effect::Quit => break,
                }
            }
            Some(event) = ui_rx.recv() => view.on_event(event),
        }

        draw(view, output, color)?;
    }

    Ok(())
}

fn draw<W: Write>(view: &AppView, output: &mut W, color: bool) -> anyhow::Result<()> {
    let palette = Palette::for_view(view.is_dark(), color);
    writeln!(output, "{}", render_view(view, palette)).context("failed to write frame")?;
    output.flush().context("failed to flush frame")?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/orchestration_tests.rs"]
mod tests;
