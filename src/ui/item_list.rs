//! The current page of Pokémon.
//!
//! [`item_views`] is the pure projection of items plus favorites into rows;
//! [`render_item_list`] draws those rows and registers one click target per
//! visible row.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::models::Item;
use crate::state::FavoriteSet;
use crate::ui::helpers::truncate_to_width;
use crate::ui::interaction::ClickAction;
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_DIM, COLOR_FAVORITE, COLOR_HOVER_BG,
    COLOR_SELECTED_BG,
};

/// Favorite marker
pub const MARK_FAVORITE: &str = "★";
/// Non-favorite marker
pub const MARK_PLAIN: &str = "☆";
/// Shown in place of a missing image URL
pub const NO_IMAGE: &str = "(no image)";

/// One display row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView<'a> {
    pub name: &'a str,
    pub image: Option<&'a str>,
    pub is_favorite: bool,
}

/// Project items into rows, in order, marking favorites by name.
pub fn item_views<'a>(items: &'a [Item], favorites: &FavoriteSet) -> Vec<ItemView<'a>> {
    items
        .iter()
        .map(|item| ItemView {
            name: &item.name,
            image: item.image.as_deref(),
            is_favorite: favorites.contains(&item.name),
        })
        .collect()
}

/// First visible row so that `selected` stays on screen.
pub fn scroll_offset(selected: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return 0;
    }
    selected.saturating_sub(visible_rows - 1)
}

pub fn render_item_list(frame: &mut Frame, area: Rect, app: &mut App) {
    let focused = app.focus == Focus::List;
    let title = format!(" Pokémon ({}) ", app.state.items.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            COLOR_BORDER_FOCUSED
        } else {
            COLOR_BORDER
        }))
        .title(Span::styled(title, Style::default().fg(COLOR_ACCENT)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let views = item_views(&app.state.items, &app.state.favorites);
    if views.is_empty() {
        let text = if app.state.is_loading() {
            "Loading…"
        } else {
            "Nothing to show"
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(COLOR_DIM))),
            inner,
        );
        return;
    }

    let visible = inner.height as usize;
    let offset = scroll_offset(app.selected, visible);
    let name_width = (inner.width as usize / 3).clamp(8, 24);

    let mut lines = Vec::with_capacity(visible);
    for (idx, view) in views.iter().enumerate().skip(offset).take(visible) {
        let row = Rect::new(inner.x, inner.y + (idx - offset) as u16, inner.width, 1);

        let mut style = Style::default();
        if focused && idx == app.selected {
            style = style.bg(COLOR_SELECTED_BG);
        } else if app.hit_areas.is_hovered(row) {
            style = style.bg(COLOR_HOVER_BG);
        }

        let (mark, mark_style) = if view.is_favorite {
            (MARK_FAVORITE, Style::default().fg(COLOR_FAVORITE))
        } else {
            (MARK_PLAIN, Style::default().fg(COLOR_DIM))
        };
        let name_style = if view.is_favorite {
            Style::default()
                .fg(COLOR_FAVORITE)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_ACCENT)
        };

        let name = truncate_to_width(view.name, name_width);
        let image_width = (inner.width as usize).saturating_sub(name_width + 4);
        let image = truncate_to_width(view.image.unwrap_or(NO_IMAGE), image_width);

        lines.push(
            Line::from(vec![
                Span::styled(format!("{} ", mark), mark_style),
                Span::styled(format!("{:<width$} ", name, width = name_width), name_style),
                Span::styled(image, Style::default().fg(COLOR_DIM)),
            ])
            .style(style),
        );

        app.hit_areas
            .register(row, ClickAction::ToggleFavorite(view.name.to_string()));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
