use std::fmt::Write as _;

use shared::domain::DisplayMode;

use crate::controller::view::{AppView, Notice};
use crate::ui::theme::Palette;

/// Renders one frame. Every label goes through the active locale.
pub fn render_view(view: &AppView, palette: Palette) -> String {
    let mut out = String::new();
    let theme_label = |mode: DisplayMode| view.t(&format!("theme.{}", mode.as_str()));
    let switch_to = view.t_with(
        "theme.switchTo",
        &[("mode", theme_label(view.theme().opposite()).as_str())],
    );

    let _ = writeln!(out, "{}", palette.paint(palette.heading, &view.t("app.title")));
    let _ = writeln!(out, "{}", palette.paint(palette.muted, &view.t("app.subtitle")));
    let _ = writeln!(
        out,
        "[{}] [{}] {}",
        theme_label(view.theme()),
        view.locale().switch_label(),
        palette.paint(palette.muted, &switch_to)
    );
    out.push('\n');

    let _ = writeln!(out, "{}", palette.paint(palette.heading, &view.t("example.title")));
    let _ = writeln!(out, "{}: {}", view.t("example.enterName"), view.name());
    if view.in_flight() > 0 {
        let _ = writeln!(out, "{}", palette.paint(palette.muted, &view.t("common.loading")));
    }
    if let Some(outcome) = view
        .greeting()
        .last_outcome()
        .filter(|_| !view.greeting().text().is_empty())
    {
        let style = if outcome.is_success() {
            palette.accent
        } else {
            palette.error
        };
        let _ = writeln!(out, "> {}", palette.paint(style, view.greeting().text()));
    }
    out.push('\n');

    let _ = writeln!(out, "{}", palette.paint(palette.heading, &view.t("counter.title")));
    let _ = writeln!(
        out,
        "  {}   [-] [{}] [+]",
        palette.paint(palette.accent, &view.counter().value().to_string()),
        view.t("counter.reset")
    );

    match view.notice() {
        Some(Notice::Help) => {
            out.push('\n');
            let _ = writeln!(out, "{}", palette.paint(palette.heading, &view.t("help.title")));
            let _ = writeln!(out, "{}", view.t("help.body"));
        }
        Some(Notice::UnknownInput(input)) => {
            out.push('\n');
            let _ = writeln!(
                out,
                "{}",
                palette.paint(palette.error, &view.t_with("help.unknown", &[("input", input.as_str())]))
            );
        }
        None => {}
    }

    out
}

#[cfg(test)]
#[path = "../tests/render_tests.rs"]
mod tests;
