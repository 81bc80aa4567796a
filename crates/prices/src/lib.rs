//! Client for the external token price feed.
//!
//! One endpoint: `GET {base}/api/v1/prices` returning a list of
//! `{token, price}` quotes, all USDC-denominated.

use std::collections::HashMap;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;

use spotdash_common::error::AppError;

/// Single quote as returned by the price feed.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenQuote {
    pub token: String,
    pub price: Decimal,
}

/// Price feed HTTP client.
#[derive(Debug, Clone)]
pub struct PriceClient {
    http: reqwest::Client,
    base_url: String,
}

impl PriceClient {
    /// Build a client for the given feed base URL.
    pub fn new(base_url: &str, timeout_ms: u64) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch current spot prices keyed by token symbol.
    pub async fn get_current_prices(&self) -> Result<HashMap<String, Decimal>, AppError> {
        let url = format!("{}/api/v1/prices", self.base_url);

        let quotes: Vec<TokenQuote> = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::PriceFeed(format!("price feed request failed: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::PriceFeed(format!("price feed returned error: {e}")))?
            .json()
            .await
            .map_err(|e| AppError::PriceFeed(format!("invalid price feed response: {e}")))?;

        tracing::debug!(quotes = quotes.len(), "Fetched current prices");

        Ok(quotes.into_iter().map(|q| (q.token, q.price)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn quotes_deserialize_from_feed_json() {
        let body = r#"[{"token":"ETH","price":"3000.25"},{"token":"USDC","price":"1"}]"#;
        let quotes: Vec<TokenQuote> = serde_json::from_str(body).unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].token, "ETH");
        assert_eq!(quotes[0].price, dec!(3000.25));
    }

    #[test]
    fn trailing_slash_stripped_from_base_url() {
        let client = PriceClient::new("https://prices.example.com/", 5000).unwrap();
        assert_eq!(client.base_url, "https://prices.example.com");
    }
}
