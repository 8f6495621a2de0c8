// Models screen rendering.
// Tab bar, toolbar, and the selectable models table with loading and empty states.

use ratatui::{layout::Flex, prelude::*, widgets::*};

use crate::app::App;
use crate::models::{AnalyticModel, ModelStatus};
use crate::state::LoadingState;
use crate::state::list_view::{COLUMN_SPACING, column_widths};

use super::button::toolbar_layout;
use super::loader::Loader;
use super::tabs;

pub const EMPTY_MESSAGE: &str = "No models found.";

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

/// Badge for the status column; confirmed records stand out.
fn status_badge(status: &ModelStatus) -> Span<'static> {
    let style = if status.is_confirmed() {
        Style::default()
            .bg(Color::Green)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    };
    Span::styled(format!(" {} ", status), style)
}

fn model_row(model: &AnalyticModel, selected: bool) -> Row<'static> {
    let checkbox_style = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Row::new(vec![
        Cell::from(Span::styled(checkbox(selected), checkbox_style)),
        Cell::from(model.partner_tag.clone()),
        Cell::from(model.partner.clone()),
        Cell::from(model.product_category.clone()),
        Cell::from(model.product.clone()),
        Cell::from(model.analytic_to_apply.clone()),
        Cell::from(status_badge(&model.status)),
        Cell::from(Span::styled(" ✕", Style::default().fg(Color::Red))),
    ])
}

fn header_row(all_selected: bool) -> Row<'static> {
    Row::new(vec![
        checkbox(all_selected),
        "Partner Tag",
        "Partner",
        "Product Category",
        "Product",
        "Analytic To Apply",
        "Status",
        "",
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

/// Draw the whole models screen.
pub fn draw_models(frame: &mut Frame, app: &mut App, area: Rect) {
    let [tabs_area, toolbar_area, table_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(3),
    ])
    .areas(area);

    app.tab_rects = tabs::draw_tabs(frame, &app.models, tabs_area);
    draw_toolbar(frame, app, toolbar_area);
    draw_table(frame, app, table_area);
}

fn draw_toolbar(frame: &mut Frame, app: &mut App, area: Rect) {
    let buttons = app.toolbar();
    let [buttons_area, info_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(20)]).areas(area);

    let rects = toolbar_layout(buttons_area, &buttons);
    for (button, rect) in buttons.iter().zip(&rects) {
        frame.render_widget(button, *rect);
    }
    app.toolbar_rects = rects;

    if !app.models.selected.is_empty() {
        let info = Paragraph::new(format!("{} selected ", app.models.selected.len()))
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::Cyan));
        frame.render_widget(info, info_area);
    }
}

fn draw_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", app.models.active_tab.title()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let view = &mut app.models;
    let records = match &view.records {
        LoadingState::Idle | LoadingState::Loading => {
            view.table_area = None;
            frame.render_widget(Loader, inner);
            return;
        }
        LoadingState::Error(e) => {
            view.table_area = None;
            let text = Paragraph::new(format!("❌ {}", e))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true });
            frame.render_widget(text, inner);
            return;
        }
        LoadingState::Loaded(records) => records,
    };

    let rows: Vec<Row> = records
        .iter()
        .filter(|m| view.active_tab.matches(m))
        .map(|m| model_row(m, view.is_selected(m.id)))
        .collect();
    let is_empty = rows.is_empty();

    let table = Table::new(rows, column_widths())
        .header(header_row(view.all_selected()))
        .column_spacing(COLUMN_SPACING)
        .flex(Flex::Start)
        .highlight_symbol("▶ ")
        .highlight_spacing(HighlightSpacing::Always)
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

    view.table_area = Some(inner);
    frame.render_stateful_widget(table, inner, &mut view.table_state);

    if is_empty {
        // Single full-width row under the header.
        let placeholder_area = Rect {
            y: inner.y + 1,
            height: inner.height.saturating_sub(1).min(1),
            ..inner
        };
        let placeholder = Paragraph::new(EMPTY_MESSAGE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(placeholder, placeholder_area);
    }
}
