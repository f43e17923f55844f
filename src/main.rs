//! Pokedex - An interactive PokeAPI explorer
//!
//! Pages through location areas, explores them and catches Pokemon, with
//! every API response held in an expiring in-memory cache.

use anyhow::Context;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::shell::{self, Session};
use pokedex::{Config, ExpiringCache, PokeApiClient};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the response cache and start its reaper
/// 4. Run the REPL on stdin/stdout until `exit` or end of input
/// 5. Stop the reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the prompt, override with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_interval={}ms, api={}, page_size={}",
        config.cache_interval_ms, config.api_base_url, config.page_size
    );

    let (cache, reaper) =
        ExpiringCache::start(config.cache_interval()).context("failed to start response cache")?;
    let client =
        PokeApiClient::from_config(&config, cache).context("failed to build HTTP client")?;

    let mut session = Session::new(client, config.page_size);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    let result = shell::run(&mut session, stdin, &mut stdout).await;

    reaper.shutdown().await;
    info!("Pokedex closed");

    result.context("REPL failed")
}
