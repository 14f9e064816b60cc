//! Exchange-rate lookups for the expense converter

use reqwest::Client;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use utoipa::ToSchema;

use crate::{
    config::CurrencyConfig,
    error::{AppError, AppResult},
};

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    base: String,
    rates: HashMap<String, Decimal>,
}

/// Conversion rate between two currencies
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub base: String,
    pub target: String,
    /// Units of `target` per one unit of `base`
    pub rate: Decimal,
}

#[derive(Clone)]
pub struct CurrencyService {
    client: Client,
    config: CurrencyConfig,
}

impl CurrencyService {
    pub fn new(config: CurrencyConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Internal(format!("http client: {e}")))?;
        Ok(Self { client, config })
    }

    /// Fetch the latest rate from `base` to `target`.
    pub async fn rate(&self, base: &str, target: &str) -> AppResult<ExchangeRate> {
        let base = normalize_code(base)?;
        let target = normalize_code(target)?;

        let url = format!("{}/{}", self.config.api_base_url, base);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Currency(format!("rate request failed: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::Currency(format!("rate lookup failed: {e}")))?;

        let parsed: LatestRatesResponse = response
            .json()
            .await
            .map_err(|e| AppError::Currency(format!("unreadable rate response: {e}")))?;
        let rate = parsed
            .rates
            .get(&target)
            .copied()
            .ok_or_else(|| AppError::Currency(format!("no rate for {target:?}")))?;

        Ok(ExchangeRate {
            base: parsed.base,
            target,
            rate,
        })
    }
}

/// Currency codes are three ASCII letters, compared upper-case.
fn normalize_code(code: &str) -> AppResult<String> {
    let code = code.trim();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::Validation(format!(
            "currency code must be three letters, got {code:?}"
        )));
    }
    Ok(code.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_normalized_upper_case() {
        assert_eq!(normalize_code(" jpy ").unwrap(), "JPY");
        assert_eq!(normalize_code("EUR").unwrap(), "EUR");
    }

    #[test]
    fn bad_codes_are_rejected() {
        assert!(normalize_code("yen!").is_err());
        assert!(normalize_code("jp").is_err());
        assert!(normalize_code("").is_err());
    }

    #[test]
    fn rates_response_shape_is_parsed() {
        let raw = serde_json::json!({
            "base": "JPY",
            "date": "2026-01-23",
            "rates": { "EUR": 0.0061, "USD": 0.0067 }
        });
        let parsed: LatestRatesResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.base, "JPY");
        assert!(parsed.rates.contains_key("EUR"));
    }
}
