//! PokeAPI response models
//!
//! The subset of each PokeAPI response shape that the shell decodes.
//! Unknown fields are ignored.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationAreaDetail, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
