// UI module for rendering the TUI.
// Contains reusable widgets (loader, button, card) and the screens built from them.

pub mod button;
pub mod card;
pub mod loader;
pub mod modal;
mod models;
mod screens;
mod tabs;

use chrono::Utc;
use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Screen};
use crate::state::ToastLevel;

pub use button::{Button, ButtonVariant, button_at};
pub use tabs::tab_buttons;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let [content_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    match app.screen() {
        Screen::Home => screens::draw_home(frame, app, content_area),
        Screen::Models => models::draw_models(frame, app, content_area),
        Screen::Editor(target) => screens::draw_editor(frame, app, target, content_area),
    }

    draw_status_bar(frame, app, status_area);

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// A `width` x `height` rect centred in `area`, clamped to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn hint(key: &str, action: &str) -> [Span<'static>; 2] {
    [
        Span::raw(format!(" {} ", key)),
        Span::styled(format!("{} ", action), Style::default().fg(Color::DarkGray)),
    ]
}

/// Draw the status bar: the current toast if any, otherwise key hints.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(toast) = app.toasts.current(Utc::now()) {
        let (icon, color) = match toast.level {
            ToastLevel::Success => ("✔", Color::Green),
            ToastLevel::Error => ("❌", Color::Red),
        };
        let line = Line::from(Span::styled(
            format!(" {} {}", icon, toast.message),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let hints: Vec<Span> = match app.screen() {
        Screen::Models => [
            hint("↑↓", "Navigate"),
            hint("Space", "Select"),
            hint("a", "All"),
            hint("↵", "Open"),
            hint("d", "Delete"),
            hint("Tab", "Switch"),
            hint("?", "Help"),
            hint("q", "Quit"),
        ]
        .into_iter()
        .flatten()
        .collect(),
        Screen::Home => [hint("m", "Models"), hint("n", "New"), hint("q", "Quit")]
            .into_iter()
            .flatten()
            .collect(),
        Screen::Editor(_) => [hint("Esc", "Back"), hint("q", "Quit")]
            .into_iter()
            .flatten()
            .collect(),
    };

    frame.render_widget(Paragraph::new(Line::from(hints)), area);
}

/// Draw the help overlay with keyboard shortcuts.
fn draw_help_overlay(frame: &mut Frame) {
    let popup_area = centered(frame.area(), 50, 18);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let shortcut = |keys: &str, action: &str| {
        Line::from(vec![
            Span::styled(format!("  {:<14}", keys), Style::default().fg(Color::Cyan)),
            Span::raw(action.to_string()),
        ])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        shortcut("↑/↓ or j/k", "Move cursor"),
        shortcut("Tab / ←/→", "Switch New / Archived"),
        shortcut("1 / 2", "Jump to New / Archived"),
        shortcut("Space", "Toggle row selection"),
        shortcut("a", "Select all / clear"),
        shortcut("Enter", "Open model"),
        shortcut("d / Del", "Delete model"),
        shortcut("n", "New model"),
        shortcut("r", "Reload models"),
        shortcut("h / Esc", "Home / back"),
        shortcut("?", "Toggle help"),
        shortcut("q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Click a checkbox to select, a row to open",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help "),
    );

    frame.render_widget(help, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::InMemorySource;
    use crate::state::Notifier;
    use ratatui::backend::TestBackend;

    fn status_line(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let y = buffer.area.height - 1;
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_centered_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered(area, 50, 50), area);
    }

    #[test]
    fn test_status_bar_prefers_toast_over_hints() {
        let mut app = App::new(Box::new(InMemorySource::sample()), &Config::default());
        app.tick();
        assert!(status_line(&mut app).contains("Navigate"));

        app.toasts.success("Model deleted successfully");
        let line = status_line(&mut app);
        assert!(line.contains("Model deleted successfully"));
        assert!(!line.contains("Navigate"));
    }
}
