//! Pokedex - An interactive PokeAPI explorer
//!
//! Pages through location areas, explores them and catches Pokemon, with
//! every API response held in an expiring in-memory cache.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod shell;
pub mod tasks;

pub use cache::ExpiringCache;
pub use client::PokeApiClient;
pub use config::Config;
pub use tasks::ReaperHandle;
