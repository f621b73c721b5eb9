use serde::{Deserialize, Serialize};

/// A single Pokémon's display data.
///
/// Identity is the `name` exactly as returned by the API. Favorites are
/// matched on the same key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    /// Artwork URL; `null` on the wire when the API has none
    #[serde(default)]
    pub image: Option<String>,
}

impl Item {
    pub fn new(name: impl Into<String>, image: Option<String>) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }
}

/// One fully resolved page: cursors and items arrive together so they can be
/// applied in a single step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLoad {
    /// Cursor for the following page, verbatim from the server
    pub next: Option<String>,
    /// Cursor for the preceding page, verbatim from the server
    pub previous: Option<String>,
    pub items: Vec<Item>,
}
