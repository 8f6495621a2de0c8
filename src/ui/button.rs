// Button widget.
// A styled one-line control with variants, sizes, and a busy state.

use ratatui::{prelude::*, widgets::*};

use super::loader::SPINNER_GLYPH;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Destructive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Default,
    Lg,
}

impl ButtonSize {
    fn padding(&self) -> usize {
        match self {
            ButtonSize::Sm => 0,
            ButtonSize::Default => 1,
            ButtonSize::Lg => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    label: String,
    variant: ButtonVariant,
    size: ButtonSize,
    is_loading: bool,
    disabled: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            is_loading: false,
            disabled: false,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// A button accepts presses only when neither disabled nor loading.
    pub fn is_enabled(&self) -> bool {
        !(self.disabled || self.is_loading)
    }

    fn content(&self) -> String {
        let pad = " ".repeat(self.size.padding());
        let glyph = if self.is_loading {
            format!("{} ", SPINNER_GLYPH)
        } else {
            String::new()
        };
        match self.variant {
            ButtonVariant::Outline => format!("[{pad}{glyph}{}{pad}]", self.label),
            _ => format!("{pad}{glyph}{}{pad}", self.label),
        }
    }

    fn style(&self) -> Style {
        let style = match self.variant {
            ButtonVariant::Primary => Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            ButtonVariant::Secondary => Style::default().bg(Color::DarkGray).fg(Color::White),
            ButtonVariant::Outline => Style::default().fg(Color::Cyan),
            ButtonVariant::Ghost => Style::default().fg(Color::Gray),
            ButtonVariant::Destructive => Style::default()
                .bg(Color::Red)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        };
        if self.is_enabled() {
            style
        } else {
            style.add_modifier(Modifier::DIM)
        }
    }

    pub fn span(&self) -> Span<'static> {
        Span::styled(self.content(), self.style())
    }

    /// Display width in cells.
    pub fn width(&self) -> u16 {
        self.span().width() as u16
    }
}

impl Widget for &Button {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(self.span())).render(area, buf);
    }
}

/// Lay buttons out left to right on one row, one cell apart.
pub fn toolbar_layout(area: Rect, buttons: &[Button]) -> Vec<Rect> {
    let mut x = area.x;
    let right = area.x + area.width;
    buttons
        .iter()
        .map(|button| {
            let width = button.width().min(right.saturating_sub(x));
            let rect = Rect::new(x, area.y, width, area.height.min(1));
            x = (x + width + 1).min(right);
            rect
        })
        .collect()
}

/// Index of the enabled button under a click, if any.
pub fn button_at(rects: &[Rect], buttons: &[Button], column: u16, row: u16) -> Option<usize> {
    rects
        .iter()
        .zip(buttons)
        .position(|(rect, button)| {
            button.is_enabled() && rect.contains(Position::new(column, row))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_or_loading_is_not_enabled() {
        assert!(Button::new("Save").is_enabled());
        assert!(!Button::new("Save").disabled(true).is_enabled());
        assert!(!Button::new("Save").loading(true).is_enabled());
    }

    #[test]
    fn test_loading_shows_spinner_with_label() {
        let content = Button::new("Reload").loading(true).content();
        assert!(content.contains(SPINNER_GLYPH));
        assert!(content.contains("Reload"));
        assert!(!Button::new("Reload").content().contains(SPINNER_GLYPH));
    }

    #[test]
    fn test_size_changes_padding_only() {
        let sm = Button::new("Go").size(ButtonSize::Sm);
        let lg = Button::new("Go").size(ButtonSize::Lg);
        assert_eq!(sm.width(), 2);
        assert_eq!(Button::new("Go").width(), 4);
        assert_eq!(lg.width(), 6);
        assert_eq!(Button::new("Go").variant(ButtonVariant::Outline).width(), 6);
    }

    #[test]
    fn test_toolbar_hit_skips_disabled_buttons() {
        let buttons = vec![
            Button::new("Home"),
            Button::new("New").disabled(true),
            Button::new("Reload"),
        ];
        let rects = toolbar_layout(Rect::new(0, 0, 40, 1), &buttons);

        assert_eq!(rects[0], Rect::new(0, 0, 6, 1));
        assert_eq!(rects[1], Rect::new(7, 0, 5, 1));
        assert_eq!(button_at(&rects, &buttons, 2, 0), Some(0));
        assert_eq!(button_at(&rects, &buttons, 8, 0), None);
        assert_eq!(button_at(&rects, &buttons, 14, 0), Some(2));
        assert_eq!(button_at(&rects, &buttons, 30, 0), None);
    }
}
