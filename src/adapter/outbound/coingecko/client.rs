//! CoinGecko REST client.
//!
//! Talks to the public `simple/price` endpoint:
//!
//! ```text
//! GET /api/v3/simple/price?ids=bitcoin,toncoin&vs_currencies=usd,rub
//! {"bitcoin": {"usd": 65000, "rub": 5900000}, "toncoin": {...}}
//! ```
//!
//! Each lookup builds its own HTTP client and drops it before returning, so
//! nothing is shared between concurrent lookups.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client as HttpClient;
use tracing::{debug, info};

use super::settings::CoinGeckoConfig;
use crate::domain::price::{Currency, QuoteTable};
use crate::error::PriceError;
use crate::port::outbound::quote::QuoteProvider;

/// HTTP client for CoinGecko price lookups.
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    api_url: String,
    timeout: Duration,
    user_agent: String,
}

impl CoinGeckoClient {
    #[must_use]
    pub fn from_config(config: &CoinGeckoConfig) -> Self {
        Self {
            api_url: config.api_url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            user_agent: config.user_agent.clone(),
        }
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn http_client(&self) -> Result<HttpClient, PriceError> {
        HttpClient::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| PriceError::upstream(format!("failed to build HTTP client: {e}")))
    }
}

#[async_trait]
impl QuoteProvider for CoinGeckoClient {
    async fn fetch_quotes(
        &self,
        ids: &[&str],
        currencies: &[Currency],
    ) -> Result<QuoteTable, PriceError> {
        let ids = ids.join(",");
        let vs_currencies = Currency::query_list(currencies);

        info!(ids = %ids, vs_currencies = %vs_currencies, "Fetching simple prices (CoinGecko)");

        let http = self.http_client()?;
        let response = http
            .get(&self.api_url)
            .query(&[("ids", ids.as_str()), ("vs_currencies", vs_currencies.as_str())])
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, self.user_agent.as_str())
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let table: QuoteTable = serde_json::from_str(&body)
            .map_err(|e| PriceError::upstream(format!("malformed price response: {e}")))?;

        debug!(count = table.len(), "Fetched prices from CoinGecko");
        Ok(table)
    }

    fn provider_name(&self) -> &'static str {
        "CoinGecko"
    }
}
