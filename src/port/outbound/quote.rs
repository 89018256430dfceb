//! Quote provider port.
//!
//! Defines the single outbound dependency of the price lookup: a service
//! that answers one batched request for many coins at once.

use async_trait::async_trait;

use crate::domain::price::{Currency, QuoteTable};
use crate::error::PriceError;

/// A source of live coin prices.
///
/// Implementations perform exactly one request per call and never retry.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch prices for `ids` (provider identifiers, already deduplicated)
    /// quoted in `currencies`.
    ///
    /// Identifiers the provider does not know are simply missing from the
    /// returned table. Any failure of the call itself is
    /// [`PriceError::Upstream`].
    async fn fetch_quotes(
        &self,
        ids: &[&str],
        currencies: &[Currency],
    ) -> Result<QuoteTable, PriceError>;

    /// Provider name for logging.
    fn provider_name(&self) -> &'static str;
}
