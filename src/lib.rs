pub mod core;
pub mod providers;
pub mod server;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::core::config::AppConfig;
use crate::providers::{CachingRateProvider, ExchangeRateApiProvider};
use crate::server::AppState;

/// Wires the provider chain for the given configuration: the upstream
/// client wrapped in the TTL caching decorator.
pub fn build_state(config: &AppConfig) -> Result<AppState> {
    let upstream = ExchangeRateApiProvider::new(&config.base_url, &config.api_key)?;
    let provider = CachingRateProvider::new(upstream, config.cache_ttl);

    Ok(AppState {
        provider: Arc::new(provider),
    })
}

pub async fn run(config: AppConfig) -> Result<()> {
    info!("Exchange gateway starting...");
    debug!("Loaded config: {config:#?}");

    let state = build_state(&config)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    server::serve(listener, state).await
}
