//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use thiserror::Error;

// == Cache Error Enum ==
/// Configuration errors raised when a cache is constructed.
///
/// Lookups and inserts never fail; absence is reported through `Option`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The interval must be greater than zero
    #[error("Invalid cache interval: {0:?} (must be greater than zero)")]
    InvalidInterval(Duration),

    /// The reaper needs a tokio runtime to be spawned on
    #[error("Cache must be started from within a tokio runtime")]
    NoRuntime,
}

// == Pokedex Error Enum ==
/// Errors surfaced by shell commands.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// The HTTP request could not be sent or read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body did not have the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A command was run without its required argument
    #[error("Please provide a {0}")]
    MissingArgument(&'static str),

    /// The first word of the input line is not a known command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// `mapb` on the first page
    #[error("You're on the first page")]
    NoPreviousPage,

    /// The API base URL cannot have paths appended to it
    #[error("Invalid API base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

// == Result Type Alias ==
/// Convenience Result type for shell operations.
pub type Result<T> = std::result::Result<T, PokedexError>;
