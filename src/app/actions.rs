//! User-facing operations: navigation, search, reset and favorites.

use super::{App, AppMessage, Focus, LoadRequest};

/// Normalize a search box value into an API name: trimmed, lower-cased.
pub fn normalize_search(input: &str) -> String {
    input.trim().to_lowercase()
}

impl App {
    /// Issue the initial list-page request.
    pub fn start(&mut self) -> u64 {
        let url = self.fetcher.initial_url();
        self.spawn_load(LoadRequest::Page(url))
    }

    /// Load the next page. Does nothing without a next cursor.
    ///
    /// Returns the sequence number of the issued load, if any.
    pub fn next_page(&mut self) -> Option<u64> {
        let cursor = self.state.next_cursor.clone()?;
        Some(self.spawn_load(LoadRequest::Page(cursor)))
    }

    /// Load the previous page. Does nothing without a previous cursor.
    pub fn prev_page(&mut self) -> Option<u64> {
        let cursor = self.state.prev_cursor.clone()?;
        Some(self.spawn_load(LoadRequest::Page(cursor)))
    }

    /// Search for the name in the search box. An empty name is a no-op.
    pub fn submit_search(&mut self) -> Option<u64> {
        let name = normalize_search(&self.search_input);
        if name.is_empty() {
            return None;
        }
        self.focus = Focus::List;
        Some(self.spawn_load(LoadRequest::Search(name)))
    }

    /// Clear the search box and re-request the initial page.
    pub fn reset(&mut self) {
        self.search_input.clear();
        self.focus = Focus::List;
        self.start();
    }

    /// Toggle the favorite status of the current-page item called `name`.
    ///
    /// Returns the new status, or `None` if no such item is on the page.
    /// The favorites set is saved exactly once per toggle.
    pub fn toggle_favorite(&mut self, name: &str) -> Option<bool> {
        let item = self.state.find_item(name)?.clone();
        let is_favorite = self.state.favorites.toggle(&item);
        tracing::debug!("Toggled favorite {} -> {}", item.name, is_favorite);
        self.clamp_favorites_selection();
        self.mark_dirty();
        self.persist_favorites();
        Some(is_favorite)
    }

    /// Remove a favorite by name, whether or not it is on the current page.
    pub fn remove_favorite(&mut self, name: &str) -> bool {
        if !self.state.favorites.remove(name) {
            return false;
        }
        self.clamp_favorites_selection();
        self.mark_dirty();
        self.persist_favorites();
        true
    }

    /// Keep the favorites-panel selection inside the (possibly shrunk) set.
    fn clamp_favorites_selection(&mut self) {
        let len = self.state.favorites.len();
        if self.favorites_selected >= len {
            self.favorites_selected = len.saturating_sub(1);
        }
    }

    /// Toggle whatever is selected in the focused list.
    pub fn toggle_selected(&mut self) {
        match self.focus {
            Focus::Favorites => {
                let name = self
                    .state
                    .favorites
                    .as_slice()
                    .get(self.favorites_selected)
                    .map(|item| item.name.clone());
                if let Some(name) = name {
                    self.remove_favorite(&name);
                }
            }
            _ => {
                let name = self
                    .state
                    .items
                    .get(self.selected)
                    .map(|item| item.name.clone());
                if let Some(name) = name {
                    self.toggle_favorite(&name);
                }
            }
        }
    }

    /// Move the selection in the focused list by `delta`, clamped.
    pub fn move_selection(&mut self, delta: isize) {
        let (cursor, len) = match self.focus {
            Focus::Favorites => (&mut self.favorites_selected, self.state.favorites.len()),
            _ => (&mut self.selected, self.state.items.len()),
        };
        if len == 0 {
            *cursor = 0;
            return;
        }
        let target = (*cursor as isize + delta).clamp(0, len as isize - 1);
        *cursor = target as usize;
    }

    /// Open the selected item's artwork with the system handler.
    pub fn open_selected_image(&mut self) {
        let item = match self.focus {
            Focus::Favorites => self.state.favorites.as_slice().get(self.favorites_selected),
            _ => self.state.items.get(self.selected),
        };
        let Some(url) = item.and_then(|item| item.image.clone()) else {
            return;
        };
        if let Err(err) = open::that_detached(&url) {
            tracing::warn!("Failed to open {}: {}", url, err);
        }
    }

    fn persist_favorites(&self) {
        if let Err(err) = self.favorites_store.save(self.state.favorites.as_slice()) {
            tracing::warn!("Failed to save favorites: {}", err);
        }
    }

    /// Tag a load with a fresh sequence number and run it on a task.
    fn spawn_load(&mut self, request: LoadRequest) -> u64 {
        let seq = self.state.begin_load();
        let fetcher = self.fetcher.clone();
        let tx = self.message_tx.clone();
        tracing::debug!("Issuing load #{}: {:?}", seq, request);
        self.mark_dirty();

        tokio::spawn(async move {
            let result = match &request {
                LoadRequest::Page(url) => fetcher.load_page(url).await,
                LoadRequest::Search(name) => fetcher.load_by_name(name).await,
            };
            let msg = match result {
                Ok(load) => AppMessage::PageLoaded { seq, request, load },
                Err(error) => AppMessage::LoadFailed { seq, request, error },
            };
            // The receiver is gone only when the app is shutting down.
            let _ = tx.send(msg);
        });

        seq
    }
}
