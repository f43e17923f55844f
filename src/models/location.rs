//! Location area models
//!
//! Shapes of `GET /location-area/` (paginated list) and
//! `GET /location-area/{name}` (detail).

use serde::Deserialize;

/// A name plus the URL of the full resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of the location area directory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas
    #[serde(default)]
    pub count: u32,
    /// URL of the next page, None on the last page
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, None on the first page
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Detail record of a single location area.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationAreaDetail {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

impl LocationAreaDetail {
    /// Names of the Pokemon that can be encountered here, in API order.
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.as_str())
    }
}
