// Card layout widgets.
// A rounded, padded container with optional header, content, and footer.

use ratatui::{prelude::*, widgets::*};

#[derive(Debug, Clone)]
pub struct CardTitle<'a>(Line<'a>);

impl<'a> CardTitle<'a> {
    pub fn new(title: impl Into<Line<'a>>) -> Self {
        Self(title.into())
    }
}

impl Widget for CardTitle<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.0.patch_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .render(area, buf);
    }
}

#[derive(Debug, Clone)]
pub struct CardDescription<'a>(Text<'a>);

impl<'a> CardDescription<'a> {
    pub fn new(text: impl Into<Text<'a>>) -> Self {
        Self(text.into())
    }

    fn height(&self) -> u16 {
        self.0.height() as u16
    }
}

impl Widget for CardDescription<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.0)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[derive(Debug, Clone)]
pub struct CardHeader<'a> {
    title: CardTitle<'a>,
    description: Option<CardDescription<'a>>,
}

impl<'a> CardHeader<'a> {
    pub fn new(title: CardTitle<'a>) -> Self {
        Self {
            title,
            description: None,
        }
    }

    pub fn description(mut self, description: CardDescription<'a>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn height(&self) -> u16 {
        1 + self.description.as_ref().map_or(0, |d| d.height())
    }
}

impl Widget for CardHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [title_area, description_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        self.title.render(title_area, buf);
        if let Some(description) = self.description {
            description.render(description_area, buf);
        }
    }
}

#[derive(Debug, Clone)]
pub struct CardContent<'a>(Text<'a>);

impl<'a> CardContent<'a> {
    pub fn new(body: impl Into<Text<'a>>) -> Self {
        Self(body.into())
    }
}

impl Widget for CardContent<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.0)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[derive(Debug, Clone)]
pub struct CardFooter<'a>(Line<'a>);

impl<'a> CardFooter<'a> {
    pub fn new(line: impl Into<Line<'a>>) -> Self {
        Self(line.into())
    }
}

impl Widget for CardFooter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.0).render(area, buf);
    }
}

#[derive(Debug, Clone, Default)]
pub struct Card<'a> {
    header: Option<CardHeader<'a>>,
    content: Option<CardContent<'a>>,
    footer: Option<CardFooter<'a>>,
    border_style: Style,
}

impl<'a> Card<'a> {
    pub fn new() -> Self {
        Self {
            border_style: Style::default().fg(Color::DarkGray),
            ..Default::default()
        }
    }

    pub fn header(mut self, header: CardHeader<'a>) -> Self {
        self.header = Some(header);
        self
    }

    pub fn content(mut self, content: CardContent<'a>) -> Self {
        self.content = Some(content);
        self
    }

    pub fn footer(mut self, footer: CardFooter<'a>) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.border_style)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);

        let header_height = self.header.as_ref().map_or(0, |h| h.height() + 1);
        let footer_height = if self.footer.is_some() { 1 } else { 0 };

        let [header_area, content_area, footer_area] = Layout::vertical([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .areas(inner);

        if let Some(header) = self.header {
            header.render(header_area, buf);
        }
        if let Some(content) = self.content {
            content.render(content_area, buf);
        }
        if let Some(footer) = self.footer {
            footer.render(footer_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.x + buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_card_places_sections_in_order() {
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);

        Card::new()
            .header(
                CardHeader::new(CardTitle::new("Title"))
                    .description(CardDescription::new("Subtitle")),
            )
            .content(CardContent::new("Body"))
            .footer(CardFooter::new("Footer"))
            .render(area, &mut buf);

        assert!(row_text(&buf, 0).starts_with('╭'));
        assert!(row_text(&buf, 1).contains("Title"));
        assert!(row_text(&buf, 2).contains("Subtitle"));
        // Blank spacer row between header and content.
        assert!(row_text(&buf, 4).contains("Body"));
        assert!(row_text(&buf, 6).contains("Footer"));
        assert!(row_text(&buf, 7).starts_with('╰'));
    }

    #[test]
    fn test_empty_card_is_just_a_border() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        Card::new().render(area, &mut buf);
        assert_eq!(row_text(&buf, 1).trim_matches('│').trim(), "");
    }
}
