use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::core::error::ApiError;
use crate::core::rates::RateProvider;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ExchangeRateApiProvider implementation for RateProvider, backed by
// the ExchangeRate-API v6 endpoints.
pub struct ExchangeRateApiProvider {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str, api_key: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("fxgate/0.1")
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(ExchangeRateApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }

    // The URL embeds the API key, so only the endpoint shape is logged.
    async fn fetch_body(&self, url: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Upstream(status.to_string()));
        }

        response
            .text()
            .await
            .map_err(|e| ApiError::Upstream(e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct PairResponse {
    conversion_result: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct LatestResponse {
    conversion_rates: Option<HashMap<String, f64>>,
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    #[instrument(
        name = "PairFetch",
        skip(self),
        fields(from = %from, to = %to)
    )]
    async fn convert(&self, from: &str, to: &str, amount: f64) -> Result<f64, ApiError> {
        let url = format!(
            "{}/v6/{}/pair/{}/{}/{}",
            self.base_url, self.api_key, from, to, amount
        );
        debug!("Requesting conversion from upstream");

        let text = self.fetch_body(&url).await?;
        let data: PairResponse =
            serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))?;

        let result = data.conversion_result.ok_or_else(|| {
            ApiError::ResponseFormat(format!("no conversion_result for pair {from}/{to}"))
        })?;

        debug!(result, "Received conversion result");
        Ok(result)
    }

    #[instrument(name = "LatestFetch", skip(self), fields(base = %base))]
    async fn latest(&self, base: &str) -> Result<HashMap<String, f64>, ApiError> {
        let url = format!("{}/v6/{}/latest/{}", self.base_url, self.api_key, base);
        debug!("Requesting rate table from upstream");

        let text = self.fetch_body(&url).await?;
        let data: LatestResponse =
            serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))?;

        let rates = data
            .conversion_rates
            .ok_or_else(|| ApiError::ResponseFormat(format!("no conversion_rates for {base}")))?;

        debug!(count = rates.len(), "Received rate table");
        Ok(rates)
    }
}
