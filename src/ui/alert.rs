//! Blocking alert dialog.
//!
//! Drawn last. Every hit area registered before it is dropped, so the only
//! clickable thing on screen is the OK button.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::helpers::centered_rect;
use crate::ui::interaction::ClickAction;
use crate::ui::theme::{COLOR_ALERT, COLOR_BUTTON, COLOR_HOVER_BG};

pub const LABEL_OK: &str = "[ OK ]";

const DIALOG_WIDTH: u16 = 44;
const DIALOG_HEIGHT: u16 = 7;

pub fn render_alert(frame: &mut Frame, area: Rect, app: &mut App) {
    let Some(alert) = app.alert.as_ref() else {
        return;
    };
    let message = alert.message.clone();

    let dialog = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ALERT))
        .title(Span::styled(
            " Alert ",
            Style::default()
                .fg(COLOR_ALERT)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);
    if inner.height == 0 {
        return;
    }

    let message_area = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));
    frame.render_widget(
        Paragraph::new(Line::from(message))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        Rect::new(
            message_area.x,
            message_area.y + message_area.height / 3,
            message_area.width,
            message_area.height - message_area.height / 3,
        ),
    );

    let ok_width = (LABEL_OK.chars().count() as u16).min(inner.width);
    let ok = Rect::new(
        inner.x + (inner.width - ok_width) / 2,
        inner.y + inner.height - 1,
        ok_width,
        1,
    );
    let mut ok_style = Style::default()
        .fg(COLOR_BUTTON)
        .add_modifier(Modifier::BOLD);
    if app.hit_areas.is_hovered(ok) {
        ok_style = ok_style.bg(COLOR_HOVER_BG);
    }
    frame.render_widget(Paragraph::new(Span::styled(LABEL_OK, ok_style)), ok);

    app.hit_areas.clear();
    app.hit_areas.register(ok, ClickAction::DismissAlert);
}
