//! Exchange-rate lookup abstractions.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::core::error::ApiError;

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Converts `amount` units of `from` into `to`.
    async fn convert(&self, from: &str, to: &str, amount: f64) -> Result<f64, ApiError>;

    /// Returns the full rate table for `base`.
    async fn latest(&self, base: &str) -> Result<HashMap<String, f64>, ApiError>;
}
