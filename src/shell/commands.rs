//! Command table and execution.

use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::client::PokeApiClient;
use crate::error::{PokedexError, Result};
use crate::models::LocationAreaPage;
use crate::shell::{LocationCursor, Pokedex};

/// Name and description of every command, in `help` order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("cache", "Show response cache statistics"),
    ("catch", "Catch a Pokemon by name"),
    ("exit", "Exit the Pokedex"),
    ("explore", "Explore a location area and list the Pokemon found"),
    ("help", "Displays a help message"),
    ("inspect", "Inspect a caught Pokemon"),
    ("map", "View the next page of location areas"),
    ("mapb", "View the previous page of location areas"),
    ("pokedex", "Show a list of caught Pokemon"),
];

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
    Cache,
}

impl Command {
    // == Parse ==
    /// Parses one input line.
    ///
    /// Input is lower-cased and split on whitespace. Blank lines yield
    /// `Ok(None)`; extra arguments are ignored.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.to_lowercase();
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let arg = words.next().map(str::to_string);
        let require =
            |what: &'static str| arg.clone().ok_or(PokedexError::MissingArgument(what));

        let command = match name {
            "help" => Self::Help,
            "exit" => Self::Exit,
            "map" => Self::Map,
            "mapb" => Self::MapBack,
            "explore" => Self::Explore(require("location area name")?),
            "catch" => Self::Catch(require("Pokemon name")?),
            "inspect" => Self::Inspect(require("Pokemon name")?),
            "pokedex" => Self::Pokedex,
            "cache" => Self::Cache,
            other => return Err(PokedexError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// Whether the REPL keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

// == Session ==
/// State shared by all commands of one REPL session.
#[derive(Debug)]
pub struct Session {
    client: PokeApiClient,
    cursor: LocationCursor,
    pokedex: Pokedex,
    rng: StdRng,
}

impl Session {
    pub fn new(client: PokeApiClient, page_size: u32) -> Self {
        Self::with_rng(client, page_size, StdRng::from_entropy())
    }

    /// Creates a session with a fixed random source for catch rolls.
    pub fn with_rng(client: PokeApiClient, page_size: u32, rng: StdRng) -> Self {
        Self {
            client,
            cursor: LocationCursor::new(page_size),
            pokedex: Pokedex::new(),
            rng,
        }
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    pub fn cursor(&self) -> &LocationCursor {
        &self.cursor
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    // == Execute ==
    /// Runs `command`, writing its output to `out`.
    pub async fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        debug!(?command, "running command");

        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => self.map(out).await?,
            Command::MapBack => self.map_back(out).await?,
            Command::Explore(area) => self.explore(&area, out).await?,
            Command::Catch(name) => self.catch(&name, out).await?,
            Command::Inspect(name) => self.inspect(&name, out)?,
            Command::Pokedex => self.list_pokedex(out)?,
            Command::Cache => writeln!(out, "{}", self.client.cache().stats())?,
        }
        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Available commands:")?;
        for (name, description) in COMMANDS {
            writeln!(out, "{}: {}", name, description)?;
        }
        Ok(())
    }

    async fn map<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let page = self
            .client
            .location_areas(self.cursor.next_offset(), self.cursor.page_size())
            .await?;

        if page.results.is_empty() {
            writeln!(out, "No more location areas.")?;
            return Ok(());
        }
        print_page(&page, out)?;
        self.cursor.advance();
        Ok(())
    }

    async fn map_back<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let offset = self
            .cursor
            .previous_offset()
            .ok_or(PokedexError::NoPreviousPage)?;
        let page = self
            .client
            .location_areas(offset, self.cursor.page_size())
            .await?;

        print_page(&page, out)?;
        self.cursor.retreat();
        Ok(())
    }

    async fn explore<W: Write>(&self, area: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Exploring {}...", area)?;
        let detail = self.client.location_area(area).await?;

        writeln!(out, "Found Pokemon:")?;
        for name in detail.pokemon_names() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Throwing a Pokeball at {}...", name)?;
        let pokemon = self.client.pokemon(name).await?;
        let chance = pokemon.catch_chance();
        let roll = self.rng.gen_range(0..100);
        debug!(name, chance, roll, "catch roll");

        if self.pokedex.throw(name, pokemon, roll) {
            writeln!(out, "{} was caught!", name)?;
            writeln!(out, "You may now inspect it with the inspect command.")?;
        } else {
            writeln!(out, "{} escaped!", name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let Some(caught) = self.pokedex.get(name) else {
            writeln!(out, "You have not caught {}", name)?;
            return Ok(());
        };
        let pokemon = &caught.pokemon;

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  - {}", kind.kind.name)?;
        }
        writeln!(out, "Caught: {}", caught.caught_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
        Ok(())
    }

    fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Your Pokedex:")?;
        if self.pokedex.is_empty() {
            writeln!(out, "  You haven't caught any Pokemon yet.")?;
            return Ok(());
        }
        for (name, _) in self.pokedex.iter() {
            writeln!(out, "  - {}", name)?;
        }
        Ok(())
    }
}

fn print_page<W: Write>(page: &LocationAreaPage, out: &mut W) -> Result<()> {
    for area in &page.results {
        writeln!(out, "{}", area.name)?;
    }
    Ok(())
}
