//! Pokemon model
//!
//! Shape of `GET /pokemon/{name}`.

use serde::Deserialize;

use super::NamedResource;

/// A Pokemon as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    /// Null for some special forms
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

impl Pokemon {
    // == Catch Chance ==
    /// Percent chance of a throw succeeding.
    ///
    /// Falls by one point per two points of base experience and never drops
    /// below 1.
    pub fn catch_chance(&self) -> u32 {
        let base = self.base_experience.unwrap_or(0);
        100u32.saturating_sub(base / 2).max(1)
    }
}
