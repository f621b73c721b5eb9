//! Wire shapes of the PokeAPI endpoints this app consumes.
//!
//! Only the fields the app reads are modelled; serde ignores the rest.

use serde::Deserialize;

use super::Item;

/// Envelope returned by the paginated list endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ListEnvelope {
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<ListEntry>,
}

/// A reference to one Pokémon inside a list page.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ListEntry {
    #[serde(default)]
    pub name: Option<String>,
    /// Detail URL; the only field the fetcher uses
    pub url: String,
}

/// Detail endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonDetail {
    pub name: String,
    #[serde(default)]
    pub sprites: Option<Sprites>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OtherSprites {
    #[serde(default)]
    pub home: Option<HomeSprites>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HomeSprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

impl PokemonDetail {
    /// `sprites.other.home.front_default`, if every level is present.
    pub fn home_image(&self) -> Option<&str> {
        self.sprites
            .as_ref()?
            .other
            .as_ref()?
            .home
            .as_ref()?
            .front_default
            .as_deref()
    }

    pub fn into_item(self) -> Item {
        let image = self.home_image().map(str::to_string);
        Item {
            name: self.name,
            image,
        }
    }
}
