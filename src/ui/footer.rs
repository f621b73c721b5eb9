//! Key hints for the focused component.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// `(key, description)` pairs for the given focus.
pub fn key_hints(focus: Focus, alert_open: bool) -> &'static [(&'static str, &'static str)] {
    if alert_open {
        return &[("Enter", "dismiss"), ("Ctrl+C", "quit")];
    }
    match focus {
        Focus::List => &[
            ("n/p", "page"),
            ("j/k", "move"),
            ("f", "favorite"),
            ("o", "open image"),
            ("/", "search"),
            ("r", "reset"),
            ("Tab", "focus"),
            ("q", "quit"),
        ],
        Focus::Favorites => &[
            ("j/k", "move"),
            ("f", "remove"),
            ("o", "open image"),
            ("Tab", "focus"),
            ("q", "quit"),
        ],
        Focus::Search => &[("Enter", "search"), ("Esc", "back"), ("Tab", "focus")],
    }
}

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];
    for (key, desc) in key_hints(app.focus, app.alert.is_some()) {
        spans.push(Span::styled(*key, Style::default().fg(COLOR_ACCENT)));
        spans.push(Span::styled(format!(" {}  ", desc), Style::default().fg(COLOR_DIM)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
