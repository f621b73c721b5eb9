//! Title bar with the search box and load status.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus, LoadRequest};
use crate::ui::helpers::{spinner_frame, truncate_to_width};
use crate::ui::interaction::ClickAction;
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_DIM, COLOR_HEADER, COLOR_LOADING,
};

const SEARCH_LABEL: &str = "Search › ";
const SEARCH_PLACEHOLDER: &str = "name, then Enter";

/// One-line status: spinner while loading, else what is on screen.
pub fn status_text(app: &App) -> String {
    if app.state.is_loading() {
        return format!("{} Loading…", spinner_frame(app.tick_count));
    }
    match &app.shown {
        Some(LoadRequest::Search(name)) => format!("Result for \"{}\"", name),
        Some(LoadRequest::Page(_)) => format!("{} per page", app.state.page_size),
        None => String::new(),
    }
}

pub fn render_header(frame: &mut Frame, area: Rect, app: &mut App) {
    let focused = app.focus == Focus::Search;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            COLOR_BORDER_FOCUSED
        } else {
            COLOR_BORDER
        }))
        .title(Span::styled(
            " Pokédex ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let status = status_text(app);
    let status_width = (status.chars().count() as u16 + 1).min(inner.width / 2);
    let input_width = inner.width.saturating_sub(status_width);
    let input_area = Rect::new(inner.x, inner.y, input_width, inner.height.min(1));
    let status_area = Rect::new(inner.x + input_width, inner.y, status_width, inner.height.min(1));

    let text_budget = (input_width as usize).saturating_sub(SEARCH_LABEL.chars().count() + 1);
    let mut spans = vec![Span::styled(SEARCH_LABEL, Style::default().fg(COLOR_DIM))];
    if app.search_input.is_empty() && !focused {
        spans.push(Span::styled(
            SEARCH_PLACEHOLDER,
            Style::default()
                .fg(COLOR_DIM)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(
            truncate_to_width(&app.search_input, text_budget),
            Style::default().fg(COLOR_ACCENT),
        ));
    }
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(COLOR_ACCENT)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), input_area);

    let status_style = if app.state.is_loading() {
        Style::default().fg(COLOR_LOADING)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(status, status_style)).alignment(Alignment::Right),
        status_area,
    );

    app.hit_areas.register(input_area, ClickAction::FocusSearch);
}
