//! The caught Pokemon collection.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::models::Pokemon;

/// A Pokemon that has been caught, and when.
#[derive(Debug, Clone)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}

/// Pokemon caught during this session, keyed by the name they were caught
/// under.
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: BTreeMap<String, CaughtPokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    // == Throw ==
    /// Resolves one throw with a roll in `0..100`.
    ///
    /// The throw succeeds when the roll is below the Pokemon's catch chance,
    /// in which case it is stored under `name`, the name the player asked
    /// for. Catching it again replaces the earlier record.
    pub fn throw(&mut self, name: &str, pokemon: Pokemon, roll: u32) -> bool {
        if roll >= pokemon.catch_chance() {
            return false;
        }

        let caught = CaughtPokemon {
            pokemon,
            caught_at: Utc::now(),
        };
        self.caught.insert(name.to_string(), caught);
        true
    }

    pub fn get(&self, name: &str) -> Option<&CaughtPokemon> {
        self.caught.get(name)
    }

    /// Caught Pokemon with their names, in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CaughtPokemon)> {
        self.caught.iter().map(|(name, caught)| (name.as_str(), caught))
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}
