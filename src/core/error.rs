use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Classified failures for a gateway request. Validation variants map to
/// 400 and are raised before any upstream call; the rest map to 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required parameters")]
    MissingParameters,

    #[error("Missing required parameter: base")]
    MissingBase,

    #[error("Currency codes must contain only alphabetic letters (no number or symbols)")]
    InvalidFormat,

    #[error("Source and target currencies must be different")]
    IdenticalCurrencies,

    #[error("Invalid amount")]
    InvalidAmount,

    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    #[error("External API error: {0}")]
    Upstream(String),

    #[error("Error parsing API response")]
    Parse(String),

    #[error("Unexpected API response format")]
    ResponseFormat(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParameters
            | ApiError::MissingBase
            | ApiError::InvalidFormat
            | ApiError::IdenticalCurrencies
            | ApiError::InvalidAmount
            | ApiError::NonPositiveAmount => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) | ApiError::Parse(_) | ApiError::ResponseFormat(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Rejected request");
        }
        (status, self.to_string()).into_response()
    }
}
