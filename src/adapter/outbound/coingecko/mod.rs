//! CoinGecko quote provider.
//!
//! Implements the [`QuoteProvider`](crate::port::outbound::quote::QuoteProvider)
//! port against the public CoinGecko API.

pub mod client;
pub mod settings;

pub use client::CoinGeckoClient;
pub use settings::CoinGeckoConfig;
