//! CoinGecko provider configuration.

use serde::Deserialize;

/// Longest request timeout accepted, in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 10;

/// Settings for the CoinGecko `simple/price` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CoinGeckoConfig {
    /// Full URL of the `simple/price` endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Request timeout in seconds (1..=10).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_url() -> String {
    "https://api.coingecko.com/api/v3/simple/price".into()
}

const fn default_timeout_secs() -> u64 {
    MAX_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    "coinradar-bot/1.0".into()
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}
