// Modal UI components.
// Confirmation dialog drawn on top of the current view.

use ratatui::{prelude::*, widgets::*};

use super::button::{Button, ButtonSize, ButtonVariant};
use super::card::{Card, CardContent, CardFooter, CardHeader, CardTitle};
use super::centered;

/// Draw a yes/no confirmation modal over the current frame.
pub fn draw_confirm_modal(frame: &mut Frame, message: &str) {
    let modal_area = centered(frame.area(), 50, 9);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let yes = Button::new("y Yes")
        .variant(ButtonVariant::Destructive)
        .size(ButtonSize::Sm);
    let no = Button::new("n No")
        .variant(ButtonVariant::Secondary)
        .size(ButtonSize::Sm);
    let footer = Line::from(vec![yes.span(), Span::raw("  "), no.span()]);

    let card = Card::new()
        .border_style(Style::default().fg(Color::Yellow))
        .header(CardHeader::new(CardTitle::new("Confirm")))
        .content(CardContent::new(message.to_string()))
        .footer(CardFooter::new(footer.alignment(Alignment::Right)));

    frame.render_widget(card, modal_area);
}
