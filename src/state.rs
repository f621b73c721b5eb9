//! The single page-state record.
//!
//! [`PageState`] is owned by `App`; nothing else mutates it. Loads are tagged
//! with a sequence number from [`PageState::begin_load`] and a completion is
//! applied only if it carries the latest one, so a slow superseded request
//! can never overwrite a newer page.

use crate::models::{Item, PageLoad};

/// Ordered favorites, unique by name, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    items: Vec<Item>,
}

impl FavoriteSet {
    /// Build from a persisted sequence, dropping later duplicates by name.
    pub fn from_items(items: Vec<Item>) -> Self {
        let mut set = Self::default();
        for item in items {
            if !set.contains(&item.name) {
                set.items.push(item);
            }
        }
        set
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|fav| fav.name == name)
    }

    /// Remove `item` if a favorite with its name exists, otherwise append it.
    ///
    /// Returns `true` if the item is a favorite afterwards.
    pub fn toggle(&mut self, item: &Item) -> bool {
        if self.remove(&item.name) {
            false
        } else {
            self.items.push(item.clone());
            true
        }
    }

    /// Remove by name. Returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|fav| fav.name != name);
        self.items.len() != before
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Pagination cursors, current items and favorites.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    pub page_size: u32,
    pub next_cursor: Option<String>,
    pub prev_cursor: Option<String>,
    pub items: Vec<Item>,
    pub favorites: FavoriteSet,
    /// Sequence number of the most recently issued load
    latest_seq: u64,
    /// Sequence number of the load still awaiting completion, if any
    pending_seq: Option<u64>,
}

impl PageState {
    pub fn new(page_size: u32, favorites: FavoriteSet) -> Self {
        Self {
            page_size,
            favorites,
            ..Self::default()
        }
    }

    /// Reserve a sequence number for a new load. Any earlier in-flight load
    /// becomes stale.
    pub fn begin_load(&mut self) -> u64 {
        self.latest_seq += 1;
        self.pending_seq = Some(self.latest_seq);
        self.latest_seq
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest_seq
    }

    /// Whether the latest load has not completed yet.
    pub fn is_loading(&self) -> bool {
        self.pending_seq.is_some()
    }

    /// Replace cursors and items with a completed load.
    ///
    /// Returns `false` (and changes nothing) if `seq` is stale.
    pub fn apply_load(&mut self, seq: u64, load: PageLoad) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.next_cursor = load.next;
        self.prev_cursor = load.previous;
        self.items = load.items;
        self.pending_seq = None;
        true
    }

    /// Mark the load `seq` as failed. Cursors and items are untouched.
    ///
    /// Returns `false` if `seq` is stale.
    pub fn fail_load(&mut self, seq: u64) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.pending_seq = None;
        true
    }

    pub fn has_next(&self) -> bool {
        self.next_cursor.is_some()
    }

    pub fn has_prev(&self) -> bool {
        self.prev_cursor.is_some()
    }

    /// Look up a current-page item by display name.
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> Item {
        Item::new(name, Some(format!("{}.png", name)))
    }

    fn page(names: &[&str], next: Option<&str>) -> PageLoad {
        PageLoad {
            next: next.map(str::to_string),
            previous: None,
            items: names.iter().map(|n| item(n)).collect(),
        }
    }

    #[test]
    fn test_favorite_set_toggle_appends_then_removes() {
        let mut favs = FavoriteSet::default();
        assert!(favs.toggle(&item("bulbasaur")));
        assert!(favs.toggle(&item("ivysaur")));
        assert_eq!(favs.len(), 2);
        assert_eq!(favs.as_slice()[1].name, "ivysaur");

        assert!(!favs.toggle(&item("bulbasaur")));
        assert_eq!(favs.as_slice(), &[item("ivysaur")]);
    }

    #[test]
    fn test_favorite_set_matches_on_name_only() {
        let mut favs = FavoriteSet::from_items(vec![Item::new("mew", None)]);
        assert!(!favs.toggle(&item("mew")));
        assert!(favs.is_empty());
    }

    #[test]
    fn test_favorite_set_from_items_dedups() {
        let favs = FavoriteSet::from_items(vec![item("a"), item("b"), item("a")]);
        let names: Vec<_> = favs.as_slice().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_apply_load_replaces_page() {
        let mut state = PageState::new(10, FavoriteSet::default());
        let seq = state.begin_load();
        assert!(state.is_loading());

        assert!(state.apply_load(seq, page(&["a", "b"], Some("next"))));
        assert!(!state.is_loading());
        assert_eq!(state.items.len(), 2);
        assert!(state.has_next());
        assert!(!state.has_prev());
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut state = PageState::new(10, FavoriteSet::default());
        let first = state.begin_load();
        let second = state.begin_load();

        assert!(state.apply_load(second, page(&["newer"], None)));
        assert!(!state.apply_load(first, page(&["older"], Some("x"))));

        assert_eq!(state.items[0].name, "newer");
        assert!(state.next_cursor.is_none());
    }

    #[test]
    fn test_stale_completion_does_not_end_loading() {
        let mut state = PageState::new(10, FavoriteSet::default());
        let first = state.begin_load();
        let _second = state.begin_load();

        assert!(!state.fail_load(first));
        assert!(state.is_loading());
    }

    #[test]
    fn test_fail_load_keeps_items_and_cursors() {
        let mut state = PageState::new(10, FavoriteSet::default());
        let seq = state.begin_load();
        state.apply_load(seq, page(&["a"], Some("next")));

        let seq = state.begin_load();
        assert!(state.fail_load(seq));
        assert_eq!(state.items[0].name, "a");
        assert_eq!(state.next_cursor.as_deref(), Some("next"));
    }
}
