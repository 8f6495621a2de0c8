// Tab bar for the models screen.
// Each tab is a button showing its record count; the active one is highlighted.

use ratatui::{prelude::*, widgets::*};

use crate::state::{ListViewState, ModelTab};

use super::button::{Button, ButtonSize, ButtonVariant, toolbar_layout};

/// Buttons for the New and Archived tabs, in `ModelTab::ALL` order.
pub fn tab_buttons(view: &ListViewState) -> Vec<Button> {
    ModelTab::ALL
        .iter()
        .map(|tab| {
            let variant = if *tab == view.active_tab {
                ButtonVariant::Primary
            } else {
                ButtonVariant::Ghost
            };
            Button::new(format!("{} ({})", tab.title(), view.count(*tab)))
                .variant(variant)
                .size(ButtonSize::Lg)
        })
        .collect()
}

/// Draw the tab bar and return the area of each tab button.
pub fn draw_tabs(frame: &mut Frame, view: &ListViewState, area: Rect) -> Vec<Rect> {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Auto Analytical Models ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let buttons = tab_buttons(view);
    let rects = toolbar_layout(inner, &buttons);
    for (button, rect) in buttons.iter().zip(&rects) {
        frame.render_widget(button, *rect);
    }
    rects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_buttons_show_counts() {
        let view = ListViewState::default();
        let buttons = tab_buttons(&view);
        assert_eq!(buttons.len(), 2);
        assert_eq!(
            buttons[0],
            Button::new("New (0)")
                .variant(ButtonVariant::Primary)
                .size(ButtonSize::Lg)
        );
        assert_eq!(
            buttons[1],
            Button::new("Archived (0)")
                .variant(ButtonVariant::Ghost)
                .size(ButtonSize::Lg)
        );
    }
}
