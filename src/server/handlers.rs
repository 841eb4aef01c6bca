use std::collections::HashMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::ApiError;
use crate::core::rates::RateProvider;
use crate::core::validate;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn RateProvider>,
}

// ============================================================
// Convert Handler
// ============================================================

#[derive(Debug, Deserialize)]
pub struct ConvertParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub result: f64,
}

pub async fn convert_handler(
    State(state): State<AppState>,
    Query(params): Query<ConvertParams>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let request = validate::conversion_request(
        params.from.as_deref(),
        params.to.as_deref(),
        params.amount.as_deref(),
    )?;
    debug!(?request, "Handling conversion request");

    let result = state
        .provider
        .convert(&request.from, &request.to, request.amount)
        .await?;

    Ok(Json(ConvertResponse { result }))
}

// ============================================================
// Rates Handler
// ============================================================

#[derive(Debug, Deserialize)]
pub struct RatesParams {
    pub base: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RatesResponse {
    pub base: String,
    pub rates: HashMap<String, f64>,
}

// The rate table is served pretty-printed for terminal consumers.
pub async fn rates_handler(
    State(state): State<AppState>,
    Query(params): Query<RatesParams>,
) -> Result<Response, ApiError> {
    let request = validate::rates_request(params.base.as_deref())?;
    debug!(?request, "Handling rate table request");

    let rates = state.provider.latest(&request.base).await?;

    let body = serde_json::to_string_pretty(&RatesResponse {
        base: request.base,
        rates,
    })
    .map_err(|e| ApiError::ResponseFormat(e.to_string()))?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
