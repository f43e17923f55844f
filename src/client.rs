//! PokeAPI client
//!
//! Fetches PokeAPI resources through the expiring cache. The request URL is
//! the cache key and the raw response body is the cached value, so a repeat
//! request within the cache interval never touches the network.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::cache::ExpiringCache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreaPage, Pokemon};

/// HTTP client for the PokeAPI backed by an [`ExpiringCache`].
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    /// API root, e.g. `https://pokeapi.co/api/v2`
    base_url: Url,
    cache: ExpiringCache,
}

impl PokeApiClient {
    /// Creates a client for `base_url` that stores responses in `cache`.
    ///
    /// # Errors
    /// - [`PokedexError::InvalidUrl`] if `base_url` is not an absolute
    ///   http(s)-style URL
    /// - [`PokedexError::Http`] if the HTTP client cannot be built
    pub fn new(
        base_url: impl AsRef<str>,
        cache: ExpiringCache,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        if base_url.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            cache,
        })
    }

    pub fn from_config(config: &Config, cache: ExpiringCache) -> Result<Self> {
        Self::new(config.api_base_url.clone(), cache, config.http_timeout())
    }

    pub fn cache(&self) -> &ExpiringCache {
        &self.cache
    }

    /// Appends `segments` to the base URL, percent-encoding each one.
    fn resource_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Cannot-be-a-base URLs are rejected in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub fn location_areas_url(&self, offset: u32, limit: u32) -> String {
        let mut url = self.resource_url(&["location-area", ""]);
        url.query_pairs_mut()
            .append_pair("offset", &offset.to_string())
            .append_pair("limit", &limit.to_string());
        url.into()
    }

    pub fn location_area_url(&self, name: &str) -> String {
        self.resource_url(&["location-area", name]).into()
    }

    pub fn pokemon_url(&self, name: &str) -> String {
        self.resource_url(&["pokemon", name]).into()
    }

    // == Fetch ==
    /// Returns the body for `url`, from the cache when present.
    ///
    /// On a miss the body is downloaded and stored before being returned.
    /// Responses with a non-success status are returned as errors and are
    /// not cached.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url) {
            debug!(url, "cache hit");
            return Ok(body);
        }

        debug!(url, "cache miss, fetching");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?.to_vec();
        self.cache.add(url, body.clone());
        Ok(body)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches one page of the location area directory.
    pub async fn location_areas(&self, offset: u32, limit: u32) -> Result<LocationAreaPage> {
        self.fetch_json(&self.location_areas_url(offset, limit)).await
    }

    /// Fetches the detail record of a location area.
    pub async fn location_area(&self, name: &str) -> Result<LocationAreaDetail> {
        self.fetch_json(&self.location_area_url(name)).await
    }

    /// Fetches a Pokemon by name.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        self.fetch_json(&self.pokemon_url(name)).await
    }
}
