//! Favorites panel. Clicking an entry removes it.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::ui::helpers::truncate_to_width;
use crate::ui::interaction::ClickAction;
use crate::ui::item_list::{scroll_offset, MARK_FAVORITE};
use crate::ui::theme::{
    COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_DIM, COLOR_FAVORITE, COLOR_HOVER_BG,
    COLOR_SELECTED_BG,
};

pub fn render_favorites(frame: &mut Frame, area: Rect, app: &mut App) {
    let focused = app.focus == Focus::Favorites;
    let favorites = app.state.favorites.as_slice();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            COLOR_BORDER_FOCUSED
        } else {
            COLOR_BORDER
        }))
        .title(Span::styled(
            format!(" {} Favorites ({}) ", MARK_FAVORITE, favorites.len()),
            Style::default().fg(COLOR_FAVORITE),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if favorites.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No favorites yet", Style::default().fg(COLOR_DIM))),
            inner,
        );
        return;
    }

    let visible = inner.height as usize;
    let offset = scroll_offset(app.favorites_selected, visible);
    let width = inner.width as usize;

    let mut lines = Vec::with_capacity(visible);
    let mut targets = Vec::with_capacity(visible);
    for (idx, item) in favorites.iter().enumerate().skip(offset).take(visible) {
        let row = Rect::new(inner.x, inner.y + (idx - offset) as u16, inner.width, 1);
        let mut style = Style::default().fg(COLOR_FAVORITE);
        if focused && idx == app.favorites_selected {
            style = style.bg(COLOR_SELECTED_BG);
        } else if app.hit_areas.is_hovered(row) {
            style = style.bg(COLOR_HOVER_BG);
        }
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", MARK_FAVORITE)),
            Span::raw(truncate_to_width(&item.name, width.saturating_sub(2))),
        ])
        .style(style));
        targets.push((row, item.name.clone()));
    }

    frame.render_widget(Paragraph::new(lines), inner);
    for (row, name) in targets {
        app.hit_areas.register(row, ClickAction::RemoveFavorite(name));
    }
}
