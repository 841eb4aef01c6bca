use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::core::cache::Cache;
use crate::core::error::ApiError;
use crate::core::rates::RateProvider;

/// Cached value for either lookup operation. Keys carry an operation
/// prefix, so the variants stay disjoint; a mismatch on read is treated
/// as a miss.
#[derive(Clone, Debug)]
pub enum CachedRate {
    Conversion(f64),
    Table(HashMap<String, f64>),
}

// Caching decorator for any RateProvider. Only successful results are
// stored; failures always propagate and leave the cache untouched.
#[derive(Clone)]
pub struct CachingRateProvider<T: RateProvider> {
    inner: T,
    cache: Cache<String, CachedRate>,
}

impl<T: RateProvider> CachingRateProvider<T> {
    pub fn new(inner: T, ttl: Duration) -> Self {
        Self {
            inner,
            cache: Cache::new(ttl),
        }
    }
}

fn conversion_key(from: &str, to: &str, amount: f64) -> String {
    format!("convert:{from}:{to}:{amount}")
}

fn rates_key(base: &str) -> String {
    format!("rates:{base}")
}

#[async_trait]
impl<T: RateProvider + Send + Sync> RateProvider for CachingRateProvider<T> {
    async fn convert(&self, from: &str, to: &str, amount: f64) -> Result<f64, ApiError> {
        let key = conversion_key(from, to, amount);
        if let Some(CachedRate::Conversion(result)) = self.cache.get(&key).await {
            debug!("Conversion served from cache: {}", key);
            return Ok(result);
        }

        let result = self.inner.convert(from, to, amount).await?;
        self.cache.put(key, CachedRate::Conversion(result)).await;
        Ok(result)
    }

    async fn latest(&self, base: &str) -> Result<HashMap<String, f64>, ApiError> {
        let key = rates_key(base);
        if let Some(CachedRate::Table(rates)) = self.cache.get(&key).await {
            debug!("Rate table served from cache: {}", key);
            return Ok(rates);
        }

        let rates = self.inner.latest(base).await?;
        self.cache.put(key, CachedRate::Table(rates.clone())).await;
        Ok(rates)
    }
}
