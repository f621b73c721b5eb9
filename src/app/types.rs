//! Type definitions for the application state.
//!
//! - [`Focus`] - Which UI component receives keys
//! - [`LoadRequest`] - What a load was asked to resolve
//! - [`Alert`] - A blocking message the user must dismiss

/// Represents which UI component has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Search,
    Favorites,
}

impl Focus {
    /// Tab order: list, favorites, search.
    pub fn next(self) -> Self {
        match self {
            Focus::List => Focus::Favorites,
            Focus::Favorites => Focus::Search,
            Focus::Search => Focus::List,
        }
    }
}

/// What a load resolves: a list page at a cursor URL, or one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadRequest {
    Page(String),
    Search(String),
}

/// A modal message shown over the UI until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
}

impl Alert {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
