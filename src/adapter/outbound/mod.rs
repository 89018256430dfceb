//! Outbound adapters (driven side).

pub mod coingecko;
