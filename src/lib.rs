//! Coinradar - crypto price relay bot.
//!
//! Answers Telegram commands with current BTC, ETH and TON prices in USD and
//! RUB, sourced from the CoinGecko `simple/price` API.
//!
//! # Architecture
//!
//! - [`domain`] - Symbols, alias table, price observations, money formatting
//! - [`port`] - The [`QuoteProvider`](port::QuoteProvider) trait
//! - [`application`] - [`PriceService`](application::PriceService): one
//!   batched provider call per lookup, first-alias-wins resolution
//! - [`adapter`] - CoinGecko client, Telegram command surface, CLI
//! - [`infrastructure`] - Configuration and logging
//!
//! # Features
//!
//! - `telegram` - Telegram long-polling bot (default)
//! - `testkit` - In-memory quote provider for integration tests
//!
//! # Example
//!
//! ```no_run
//! use coinradar::adapter::outbound::coingecko::{CoinGeckoClient, CoinGeckoConfig};
//! use coinradar::application::PriceService;
//! use coinradar::domain::Symbol;
//!
//! # async fn demo() -> Result<(), coinradar::error::PriceError> {
//! let service = PriceService::new(CoinGeckoClient::from_config(&CoinGeckoConfig::default()));
//! let prices = service.fetch_prices(&[Symbol::Btc, Symbol::Ton]).await?;
//! println!("{:?}", prices.get(Symbol::Btc));
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
