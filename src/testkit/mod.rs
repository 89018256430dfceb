//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`provider`] — [`ScriptedQuoteProvider`](provider::ScriptedQuoteProvider),
//!   an in-memory [`QuoteProvider`](crate::port::outbound::quote::QuoteProvider)
//!   that records every call.
//! - [`quotes`] — Builders for quote tables.

pub mod provider;
pub mod quotes;
