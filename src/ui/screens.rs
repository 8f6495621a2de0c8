// Home and editor screens.
// Both are navigation targets of the models list and are built from cards.

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, EditorTarget};
use crate::models::AnalyticModel;
use crate::state::ModelTab;

use super::button::{Button, ButtonSize, ButtonVariant};
use super::card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
use super::centered;

fn key_hints(hints: &[(&str, ButtonVariant)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (label, variant)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(
            Button::new(*label)
                .variant(*variant)
                .size(ButtonSize::Sm)
                .span(),
        );
    }
    Line::from(spans)
}

fn field(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<20}", label), Style::default().fg(Color::DarkGray)),
        Span::raw(value.to_string()),
    ])
}

pub fn draw_home(frame: &mut Frame, app: &App, area: Rect) {
    let card_area = centered(area, 76, 12);

    let content = vec![
        field("New models", &app.models.count(ModelTab::New).to_string()),
        field("Archived models", &app.models.count(ModelTab::Archived).to_string()),
        field("Data source", &app.source_description()),
    ];

    let card = Card::new()
        .border_style(Style::default().fg(Color::Cyan))
        .header(
            CardHeader::new(CardTitle::new("Auto Analytical Models")).description(
                CardDescription::new(
                    "Apply analytic distributions automatically by partner and product.",
                ),
            ),
        )
        .content(CardContent::new(content))
        .footer(CardFooter::new(key_hints(&[
            ("m Models", ButtonVariant::Primary),
            ("n New model", ButtonVariant::Outline),
            ("q Quit", ButtonVariant::Ghost),
        ])));

    frame.render_widget(card, card_area);
}

fn model_fields(model: Option<&AnalyticModel>) -> Vec<Line<'static>> {
    let value =
        |f: fn(&AnalyticModel) -> String| model.map(f).unwrap_or_else(|| "—".to_string());
    vec![
        field("Partner Tag", &value(|m| m.partner_tag.clone())),
        field("Partner", &value(|m| m.partner.clone())),
        field("Product Category", &value(|m| m.product_category.clone())),
        field("Product", &value(|m| m.product.clone())),
        field("Analytic To Apply", &value(|m| m.analytic_to_apply.clone())),
        field("Status", &value(|m| m.status.to_string())),
        field(
            "Archived",
            &value(|m| if m.archived { "yes" } else { "no" }.to_string()),
        ),
    ]
}

pub fn draw_editor(frame: &mut Frame, app: &App, target: EditorTarget, area: Rect) {
    let card_area = centered(area, 70, 16);

    let (title, description, content) = match target {
        EditorTarget::New => (
            "New model".to_string(),
            "Records are read-only here; nothing will be saved.".to_string(),
            model_fields(None),
        ),
        EditorTarget::Existing(id) => match app.model(id) {
            Some(model) => (
                format!("Model #{}", id),
                "Records are read-only here; nothing will be saved.".to_string(),
                model_fields(Some(model)),
            ),
            None => (
                format!("Model #{}", id),
                "This model is no longer in the data source.".to_string(),
                Vec::new(),
            ),
        },
    };

    let card = Card::new()
        .header(
            CardHeader::new(CardTitle::new(title))
                .description(CardDescription::new(description)),
        )
        .content(CardContent::new(content))
        .footer(CardFooter::new(key_hints(&[(
            "Esc Back",
            ButtonVariant::Secondary,
        )])));

    frame.render_widget(Clear, card_area);
    frame.render_widget(card, card_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::InMemorySource;
    use ratatui::backend::TestBackend;

    fn screen_text(draw: impl FnOnce(&mut Frame, Rect)) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 20)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw(frame, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn app() -> App {
        let mut app = App::new(Box::new(InMemorySource::sample()), &Config::default());
        app.tick();
        app
    }

    #[test]
    fn test_home_shows_counts_and_source() {
        let app = app();
        let text = screen_text(|frame, area| draw_home(frame, &app, area));
        assert!(text.contains("Auto Analytical Models"));
        assert!(text.contains("built-in sample data"));
        assert!(text.contains("m Models"));
    }

    #[test]
    fn test_editor_shows_existing_model() {
        let app = app();
        let text =
            screen_text(|frame, area| draw_editor(frame, &app, EditorTarget::Existing(1), area));
        assert!(text.contains("Model #1"));
        assert!(text.contains("Azure Interior"));
    }

    #[test]
    fn test_editor_handles_missing_and_new() {
        let app = app();
        let missing = screen_text(|frame, area| {
            draw_editor(frame, &app, EditorTarget::Existing(404), area)
        });
        assert!(missing.contains("no longer in the data source"));

        let new = screen_text(|frame, area| draw_editor(frame, &app, EditorTarget::New, area));
        assert!(new.contains("New model"));
        assert!(new.contains("Partner Tag"));
    }
}
