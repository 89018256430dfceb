#![allow(dead_code)]

pub mod server;

use coinradar::adapter::outbound::coingecko::{CoinGeckoClient, CoinGeckoConfig};

pub const SIMPLE_PRICE_PATH: &str = "/api/v3/simple/price";

/// Client pointed at `base_url` with the given timeout.
pub fn coingecko_client(base_url: &str, timeout_secs: u64) -> CoinGeckoClient {
    CoinGeckoClient::from_config(&CoinGeckoConfig {
        api_url: format!("{base_url}{SIMPLE_PRICE_PATH}"),
        timeout_secs,
        ..CoinGeckoConfig::default()
    })
}
