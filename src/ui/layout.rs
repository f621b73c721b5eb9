//! Screen layout.
//!
//! ```text
//! ┌ header: search box + status ─────────────────────┐
//! │ item list                  │ favorites panel      │
//! │                            │                      │
//! └──────────────────────────────────────────────────┘
//!  [◀ Prev]  [Next ▶]  [Search]  [Reset]     controls
//!  key hints                                 footer
//! ```
//!
//! Below [`STACK_WIDTH`] columns the favorites panel moves under the list.

use ratatui::layout::{Constraint, Layout, Rect};

/// Terminal width below which panels stack vertically
pub const STACK_WIDTH: u16 = 70;

/// Rects for every region of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub list: Rect,
    pub favorites: Rect,
    pub controls: Rect,
    pub footer: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

        let body = if area.width < STACK_WIDTH {
            Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)]).split(rows[1])
        } else {
            Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
                .split(rows[1])
        };

        Self {
            header: rows[0],
            list: body[0],
            favorites: body[1],
            controls: rows[2],
            footer: rows[3],
        }
    }

    pub fn is_stacked(&self) -> bool {
        self.list.x == self.favorites.x
    }
}
