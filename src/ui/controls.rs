//! Button row: Prev, Next, Search, Reset.
//!
//! A disabled button is drawn dimmed and registers no hit area, so clicking
//! it does nothing.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{normalize_search, App};
use crate::ui::interaction::ClickAction;
use crate::ui::theme::{COLOR_BUTTON, COLOR_DIM, COLOR_HOVER_BG};

pub const LABEL_PREV: &str = "[◀ Prev]";
pub const LABEL_NEXT: &str = "[Next ▶]";
pub const LABEL_SEARCH: &str = "[Search]";
pub const LABEL_RESET: &str = "[Reset]";

const GAP: u16 = 2;

/// A button as laid out on the controls row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub action: ClickAction,
    pub enabled: bool,
}

/// The buttons and their enabled state for the current app state.
pub fn buttons(app: &App) -> Vec<Button> {
    vec![
        Button {
            label: LABEL_PREV,
            action: ClickAction::PrevPage,
            enabled: app.state.has_prev(),
        },
        Button {
            label: LABEL_NEXT,
            action: ClickAction::NextPage,
            enabled: app.state.has_next(),
        },
        Button {
            label: LABEL_SEARCH,
            action: ClickAction::Search,
            enabled: !normalize_search(&app.search_input).is_empty(),
        },
        Button {
            label: LABEL_RESET,
            action: ClickAction::Reset,
            enabled: true,
        },
    ]
}

pub fn render_controls(frame: &mut Frame, area: Rect, app: &mut App) {
    let mut spans = Vec::new();
    let mut x = area.x + 1;
    spans.push(Span::raw(" "));

    for button in buttons(app) {
        let width = button.label.chars().count() as u16;
        if x + width > area.x + area.width {
            break;
        }
        let rect = Rect::new(x, area.y, width, 1);

        let style = if !button.enabled {
            Style::default().fg(COLOR_DIM)
        } else if app.hit_areas.is_hovered(rect) {
            Style::default()
                .fg(COLOR_BUTTON)
                .bg(COLOR_HOVER_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(COLOR_BUTTON)
                .add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(button.label, style));
        spans.push(Span::raw(" ".repeat(GAP as usize)));

        if button.enabled {
            app.hit_areas.register(rect, button.action);
        }
        x += width + GAP;
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
