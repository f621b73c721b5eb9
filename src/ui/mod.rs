//! Terminal UI for the Pokédex browser.
//!
//! [`render`] is the only entry point. Each draw rebuilds the hit-area
//! registry from scratch, so clicks always resolve against what is on
//! screen.

mod alert;
mod controls;
mod favorites_panel;
mod footer;
mod header;
pub mod helpers;
pub mod interaction;
pub mod item_list;
pub mod layout;
pub mod theme;

pub use controls::{buttons, Button, LABEL_NEXT, LABEL_PREV, LABEL_RESET, LABEL_SEARCH};
pub use footer::key_hints;
pub use header::status_text;
pub use item_list::{item_views, ItemView, MARK_FAVORITE, MARK_PLAIN, NO_IMAGE};
pub use layout::AppLayout;

use ratatui::Frame;

use crate::app::App;

/// Draw the whole screen and register its click targets.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_areas.clear();
    let area = frame.area();
    let layout = AppLayout::new(area);

    header::render_header(frame, layout.header, app);
    item_list::render_item_list(frame, layout.list, app);
    favorites_panel::render_favorites(frame, layout.favorites, app);
    controls::render_controls(frame, layout.controls, app);
    footer::render_footer(frame, layout.footer, app);

    if app.alert.is_some() {
        alert::render_alert(frame, area, app);
    }

    app.needs_redraw = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ratatui::{backend::TestBackend, Terminal};

    use crate::adapters::mock::{InMemoryStore, MockHttpClient};
    use crate::app::Alert;
    use crate::config::Config;
    use crate::models::{Item, PageLoad};
    use crate::ui::interaction::ClickAction;

    fn app_with_page(items: Vec<Item>, next: Option<&str>) -> App {
        let mut app = App::new(
            &Config::new(),
            Arc::new(MockHttpClient::new()),
            Arc::new(InMemoryStore::new()),
        );
        let seq = app.state.begin_load();
        app.state.apply_load(
            seq,
            PageLoad {
                next: next.map(str::to_string),
                previous: None,
                items,
            },
        );
        app
    }

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn sample_items() -> Vec<Item> {
        vec![
            Item::new("bulbasaur", Some("bulbasaur.png".to_string())),
            Item::new("ivysaur", None),
        ]
    }

    #[test]
    fn test_one_toggle_target_per_item() {
        let mut app = app_with_page(sample_items(), None);
        draw(&mut app, 100, 24);

        let toggles = app
            .hit_areas
            .areas()
            .iter()
            .filter(|a| matches!(a.action, ClickAction::ToggleFavorite(_)))
            .count();
        assert_eq!(toggles, 2);
        assert!(!app.needs_redraw);
    }

    #[test]
    fn test_rows_show_name_and_image_or_placeholder() {
        let mut app = app_with_page(sample_items(), None);
        let screen = draw(&mut app, 100, 24);
        assert!(screen.contains("bulbasaur.png"));
        assert!(screen.contains("ivysaur"));
        assert!(screen.contains(NO_IMAGE));
    }

    #[test]
    fn test_disabled_buttons_have_no_targets() {
        let mut app = app_with_page(sample_items(), Some("https://pokeapi.test/next"));
        draw(&mut app, 100, 24);

        let actions: Vec<_> = app.hit_areas.areas().iter().map(|a| a.action.clone()).collect();
        assert!(actions.contains(&ClickAction::NextPage));
        assert!(actions.contains(&ClickAction::Reset));
        assert!(!actions.contains(&ClickAction::PrevPage));
        assert!(!actions.contains(&ClickAction::Search));
    }

    #[test]
    fn test_alert_blocks_other_targets() {
        let mut app = app_with_page(sample_items(), None);
        app.alert = Some(Alert::new("Pokemon not found"));
        let screen = draw(&mut app, 100, 24);

        assert!(screen.contains("Pokemon not found"));
        assert_eq!(app.hit_areas.len(), 1);
        assert_eq!(app.hit_areas.areas()[0].action, ClickAction::DismissAlert);
    }

    #[test]
    fn test_narrow_terminal_renders() {
        let mut app = app_with_page(sample_items(), None);
        let screen = draw(&mut app, 40, 20);
        assert!(screen.contains("Favorites"));
    }
}
