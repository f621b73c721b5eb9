//! Application state and logic for the TUI.
//!
//! [`App`] owns the [`PageState`] and is its only mutator. User actions go
//! through the methods in `actions`; completions of spawned loads arrive as
//! [`AppMessage`]s and are applied in `handlers`, one at a time, on the main
//! loop.

mod actions;
mod handlers;
mod messages;
mod types;

pub use actions::normalize_search;
pub use messages::AppMessage;
pub use types::{Alert, Focus, LoadRequest};

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::Config;
use crate::favorites::FavoritesStore;
use crate::fetcher::Fetcher;
use crate::input::Command;
use crate::state::{FavoriteSet, PageState};
use crate::traits::{HttpClient, KeyValueStore};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};

/// Main application state
pub struct App {
    /// Cursors, items and favorites
    pub state: PageState,
    /// Which component receives key input
    pub focus: Focus,
    /// Text in the search box
    pub search_input: String,
    /// Selected row in the item list
    pub selected: usize,
    /// Selected row in the favorites panel
    pub favorites_selected: usize,
    /// Pending alert, shown until dismissed
    pub alert: Option<Alert>,
    /// The request behind the items currently shown
    pub shown: Option<LoadRequest>,
    /// Clickable regions registered by the last draw
    pub hit_areas: HitAreaRegistry,
    /// Flag indicating the UI needs to be redrawn
    pub needs_redraw: bool,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Counter for animations (loading spinner)
    pub tick_count: u64,
    /// Sender handed to spawned load tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver for load completions (taken by the main loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    fetcher: Fetcher,
    favorites_store: FavoritesStore,
}

impl App {
    /// Create the app from configuration and its two external collaborators.
    ///
    /// Favorites are loaded from `store` immediately; no network request is
    /// made until [`App::start`].
    pub fn new(
        config: &Config,
        client: Arc<dyn HttpClient>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self::with_parts(
            Fetcher::from_config(client, config),
            FavoritesStore::new(store),
        )
    }

    pub fn with_parts(fetcher: Fetcher, favorites_store: FavoritesStore) -> Self {
        let favorites = FavoriteSet::from_items(favorites_store.load());
        tracing::info!("Loaded {} favorites", favorites.len());

        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            state: PageState::new(fetcher.page_size(), favorites),
            focus: Focus::default(),
            search_input: String::new(),
            selected: 0,
            favorites_selected: 0,
            alert: None,
            shown: None,
            hit_areas: HitAreaRegistry::new(),
            needs_redraw: true,
            should_quit: false,
            tick_count: 0,
            message_tx,
            message_rx: Some(message_rx),
            fetcher,
            favorites_store,
        }
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance the animation counter. Only redraws while a load is pending.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.state.is_loading() {
            self.mark_dirty();
        }
    }

    /// Apply a resolved key command.
    pub fn dispatch(&mut self, command: Command) {
        self.mark_dirty();
        match command {
            Command::Quit => self.quit(),
            Command::NextPage => {
                self.next_page();
            }
            Command::PrevPage => {
                self.prev_page();
            }
            Command::Reset => self.reset(),
            Command::FocusSearch => self.focus = Focus::Search,
            Command::CycleFocus => self.focus = self.focus.next(),
            Command::LeaveInput => self.focus = Focus::List,
            Command::InputChar(c) => self.search_input.push(c),
            Command::Backspace => {
                self.search_input.pop();
            }
            Command::SubmitSearch => {
                self.submit_search();
            }
            Command::SelectNext => self.move_selection(1),
            Command::SelectPrev => self.move_selection(-1),
            Command::ToggleSelected => self.toggle_selected(),
            Command::OpenImage => self.open_selected_image(),
            Command::DismissAlert => self.alert = None,
            Command::None => {}
        }
    }

    /// Apply a mouse click on a registered hit area.
    pub fn handle_click(&mut self, action: ClickAction) {
        self.mark_dirty();
        tracing::debug!("Click: {:?}", action);
        match action {
            ClickAction::ToggleFavorite(name) => {
                self.focus = Focus::List;
                if let Some(idx) = self.state.items.iter().position(|i| i.name == name) {
                    self.selected = idx;
                }
                self.toggle_favorite(&name);
            }
            ClickAction::RemoveFavorite(name) => {
                self.remove_favorite(&name);
            }
            ClickAction::NextPage => {
                self.next_page();
            }
            ClickAction::PrevPage => {
                self.prev_page();
            }
            ClickAction::Reset => self.reset(),
            ClickAction::Search => {
                self.submit_search();
            }
            ClickAction::FocusSearch => self.focus = Focus::Search,
            ClickAction::DismissAlert => self.alert = None,
        }
    }

    /// Receive and apply the next load completion.
    ///
    /// Returns `false` once the receiver has been taken or closed. Used by
    /// tests and headless callers; the TUI loop drives the receiver itself.
    pub async fn process_next_message(&mut self) -> bool {
        let msg = match self.message_rx.as_mut() {
            Some(rx) => rx.recv().await,
            None => None,
        };
        match msg {
            Some(msg) => {
                self.handle_message(msg);
                true
            }
            None => false,
        }
    }
}
