use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://v6.exchangerate-api.com";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CACHE_TTL_SECS: u64 = 300;

#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub port: u16,
    pub base_url: String,
    pub cache_ttl: Duration,
}

// Manual Debug so the API key never lands in logs.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("port", &self.port)
            .field("base_url", &self.base_url)
            .field("cache_ttl", &self.cache_ttl)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an injected variable lookup. An
    /// empty value is treated the same as an unset one.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let api_key =
            lookup("API_KEY_EXCHANGE").context("API_KEY_EXCHANGE environment variable not set")?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("Invalid PORT value: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let base_url = lookup("EXCHANGE_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let cache_ttl = match lookup("CACHE_TTL_SECS") {
            Some(raw) => Duration::from_secs(
                raw.parse()
                    .with_context(|| format!("Invalid CACHE_TTL_SECS value: {raw}"))?,
            ),
            None => Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        };

        debug!("Successfully loaded config");
        Ok(AppConfig {
            api_key,
            port,
            base_url,
            cache_ttl,
        })
    }
}
