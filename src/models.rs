//! Data models for the Pokémon browser.
//!
//! - [`Item`]: what the app displays and persists as a favorite
//! - [`PageLoad`]: the atomic result of one list or search resolution
//! - [`api`]: wire shapes of the remote list and detail endpoints

pub mod api;
mod item;

pub use api::{ListEntry, ListEnvelope, PokemonDetail};
pub use item::{Item, PageLoad};
