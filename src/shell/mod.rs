//! Shell Module
//!
//! The interactive side of the Pokedex: command parsing, per-session state
//! and the read-eval-print loop.
//!
//! # Commands
//! - `map` / `mapb` - Page forward and back through location areas
//! - `explore <area>` - List the Pokemon found in an area
//! - `catch <name>` / `inspect <name>` / `pokedex` - The catch game
//! - `cache` - Response cache statistics
//! - `help` / `exit`

mod commands;
mod cursor;
mod pokedex;
mod repl;

pub use commands::{Command, Flow, Session, COMMANDS};
pub use cursor::LocationCursor;
pub use pokedex::{CaughtPokemon, Pokedex};
pub use repl::run;
