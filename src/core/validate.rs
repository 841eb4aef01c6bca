use std::sync::LazyLock;

use regex::Regex;

use crate::core::error::ApiError;

static CURRENCY_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]+$").expect("currency code pattern"));

/// A conversion lookup with normalized (upper-cased) currency codes.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

/// A rate-table lookup with a normalized base currency.
#[derive(Debug, Clone, PartialEq)]
pub struct RatesRequest {
    pub base: String,
}

fn is_valid_code(code: &str) -> bool {
    CURRENCY_CODE.is_match(code)
}

/// Validates raw `/convert` query parameters. An absent or empty
/// parameter counts as missing. Checks run in a fixed order: missing,
/// identical currencies, code format, amount.
pub fn conversion_request(
    from: Option<&str>,
    to: Option<&str>,
    amount: Option<&str>,
) -> Result<ConversionRequest, ApiError> {
    let (Some(from), Some(to), Some(amount)) = (from, to, amount) else {
        return Err(ApiError::MissingParameters);
    };
    if from.is_empty() || to.is_empty() || amount.is_empty() {
        return Err(ApiError::MissingParameters);
    }

    let from = from.to_uppercase();
    let to = to.to_uppercase();

    if from == to {
        return Err(ApiError::IdenticalCurrencies);
    }
    if !is_valid_code(&from) || !is_valid_code(&to) {
        return Err(ApiError::InvalidFormat);
    }

    let amount: f64 = amount.parse().map_err(|_| ApiError::InvalidAmount)?;
    if !amount.is_finite() {
        return Err(ApiError::InvalidAmount);
    }
    if amount <= 0.0 {
        return Err(ApiError::NonPositiveAmount);
    }

    Ok(ConversionRequest { from, to, amount })
}

/// Validates the raw `/rates` base parameter.
pub fn rates_request(base: Option<&str>) -> Result<RatesRequest, ApiError> {
    let Some(base) = base else {
        return Err(ApiError::MissingBase);
    };
    if base.is_empty() {
        return Err(ApiError::MissingBase);
    }

    let base = base.to_uppercase();
    if !is_valid_code(&base) {
        return Err(ApiError::InvalidFormat);
    }

    Ok(RatesRequest { base })
}
