//! Configuration Module
//!
//! Handles loading the Pokedex configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Default PokeAPI endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Pokedex configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache sweep period and expiry threshold in milliseconds
    pub cache_interval_ms: u64,
    /// Base URL of the PokeAPI, without a trailing slash
    pub api_base_url: String,
    /// Location areas listed per `map` page
    pub page_size: u32,
    /// Timeout for a single HTTP request in seconds
    pub http_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_INTERVAL_MS` - Cache interval (default: 300000, five minutes)
    /// - `POKEDEX_API_BASE_URL` - PokeAPI base URL (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_PAGE_SIZE` - Location areas per page (default: 20)
    /// - `POKEDEX_HTTP_TIMEOUT_SECS` - HTTP timeout (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_interval_ms: parse_var("POKEDEX_CACHE_INTERVAL_MS")
                .unwrap_or(defaults.cache_interval_ms),
            api_base_url: env::var("POKEDEX_API_BASE_URL")
                .ok()
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            page_size: parse_var("POKEDEX_PAGE_SIZE")
                .filter(|size| *size > 0)
                .unwrap_or(defaults.page_size),
            http_timeout_secs: parse_var("POKEDEX_HTTP_TIMEOUT_SECS")
                .unwrap_or(defaults.http_timeout_secs),
        }
    }

    pub fn cache_interval(&self) -> Duration {
        Duration::from_millis(self.cache_interval_ms)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval_ms: 5 * 60 * 1000,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: 20,
            http_timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_interval_ms, 300_000);
        assert_eq!(config.cache_interval(), Duration::from_secs(300));
        assert_eq!(config.api_base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.http_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the environment to avoid races between tests
        env::remove_var("POKEDEX_CACHE_INTERVAL_MS");
        env::remove_var("POKEDEX_API_BASE_URL");
        env::remove_var("POKEDEX_PAGE_SIZE");
        env::remove_var("POKEDEX_HTTP_TIMEOUT_SECS");

        let config = Config::from_env();
        assert_eq!(config.cache_interval_ms, 300_000);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.page_size, 20);

        env::set_var("POKEDEX_CACHE_INTERVAL_MS", "1500");
        env::set_var("POKEDEX_API_BASE_URL", "http://localhost:8080/api/");
        env::set_var("POKEDEX_PAGE_SIZE", "not-a-number");

        let config = Config::from_env();
        assert_eq!(config.cache_interval(), Duration::from_millis(1500));
        assert_eq!(config.api_base_url, "http://localhost:8080/api");
        assert_eq!(config.page_size, 20);

        env::remove_var("POKEDEX_CACHE_INTERVAL_MS");
        env::remove_var("POKEDEX_API_BASE_URL");
        env::remove_var("POKEDEX_PAGE_SIZE");
    }
}
