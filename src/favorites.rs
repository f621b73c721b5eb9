//! Durable persistence of the favorites set.
//!
//! The set is stored as a JSON array of `{ "name", "image" }` under the
//! single key [`FAVORITES_KEY`], overwritten in full on every save.

use std::sync::Arc;

use crate::models::Item;
use crate::traits::{KeyValueStore, StoreError};

/// Storage key holding the serialized favorites.
pub const FAVORITES_KEY: &str = "pokemons";

/// Reads and writes the favorites sequence through a [`KeyValueStore`].
#[derive(Clone)]
pub struct FavoritesStore {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore").finish_non_exhaustive()
    }
}

impl FavoritesStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the persisted favorites.
    ///
    /// Never fails: a missing key, unreadable storage, invalid JSON or a
    /// JSON `null` all yield an empty sequence.
    pub fn load(&self) -> Vec<Item> {
        let raw = match self.store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!("Failed to read favorites: {}", err);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Option<Vec<Item>>>(&raw) {
            Ok(items) => items.unwrap_or_default(),
            Err(err) => {
                tracing::warn!("Ignoring malformed favorites: {}", err);
                Vec::new()
            }
        }
    }

    /// Overwrite the persisted favorites with `favorites`.
    pub fn save(&self, favorites: &[Item]) -> Result<(), StoreError> {
        let json = serde_json::to_string(favorites)?;
        self.store.set(FAVORITES_KEY, &json)?;
        tracing::debug!("Saved {} favorites", favorites.len());
        Ok(())
    }

    /// Remove the persisted favorites entirely.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(FAVORITES_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::InMemoryStore;

    fn store_with(raw: Option<&str>) -> (FavoritesStore, InMemoryStore) {
        let backing = match raw {
            Some(raw) => InMemoryStore::with_entry(FAVORITES_KEY, raw),
            None => InMemoryStore::new(),
        };
        (FavoritesStore::new(Arc::new(backing.clone())), backing)
    }

    #[test]
    fn test_load_absent_is_empty() {
        let (favorites, _) = store_with(None);
        assert!(favorites.load().is_empty());
    }

    #[test]
    fn test_load_null_or_garbage_is_empty() {
        for raw in ["null", "{not json", r#"{"name":"x"}"#, ""] {
            let (favorites, _) = store_with(Some(raw));
            assert!(favorites.load().is_empty(), "input {:?}", raw);
        }
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let (favorites, backing) = store_with(None);
        let items = vec![
            Item::new("charmander", Some("c.png".to_string())),
            Item::new("abra", None),
        ];

        favorites.save(&items).unwrap();
        assert_eq!(favorites.load(), items);
        assert_eq!(backing.write_count(), 1);
        assert_eq!(
            backing.raw(FAVORITES_KEY).unwrap(),
            r#"[{"name":"charmander","image":"c.png"},{"name":"abra","image":null}]"#
        );
    }

    #[test]
    fn test_clear() {
        let (favorites, backing) = store_with(Some("[]"));
        favorites.clear().unwrap();
        assert!(backing.raw(FAVORITES_KEY).is_none());
    }
}
