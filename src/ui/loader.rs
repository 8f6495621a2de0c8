// Busy indicator.

use ratatui::{layout::Flex, prelude::*, widgets::*};

pub const SPINNER_GLYPH: &str = "⟳";

/// Indeterminate loading indicator, centred in its area.
#[derive(Debug, Default, Clone, Copy)]
pub struct Loader;

impl Widget for Loader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [row] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);

        let line = Line::from(vec![
            Span::styled(
                format!("{} ", SPINNER_GLYPH),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("Loading…", Style::default().fg(Color::DarkGray)),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(row, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_renders_same_output_every_time() {
        let area = Rect::new(0, 0, 20, 3);
        let mut first = Buffer::empty(area);
        let mut second = Buffer::empty(area);

        Loader.render(area, &mut first);
        Loader.render(area, &mut second);

        assert_eq!(first, second);
        let middle: String = (0..20u16)
            .map(|x| first[(x, 1u16)].symbol().to_string())
            .collect();
        assert!(middle.contains(SPINNER_GLYPH));
        assert!(middle.contains("Loading"));
    }
}
