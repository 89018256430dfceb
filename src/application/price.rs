//! Price lookup service.
//!
//! Turns a symbol selection into one batched provider request and maps the
//! answer back onto the symbols that were asked for. The mapping half
//! ([`provider_ids`] and [`resolve`]) is pure and needs no network.

use tracing::{debug, warn};

use crate::domain::price::{Currency, PriceResultSet, QuoteTable};
use crate::domain::symbol::Symbol;
use crate::error::PriceError;
use crate::port::outbound::quote::QuoteProvider;

/// Flatten the aliases of every requested symbol into one list.
///
/// Repeats are removed, keeping first-seen order, so each alias is sent
/// exactly once however the selection was written.
#[must_use]
pub fn provider_ids(symbols: &[Symbol]) -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = Vec::new();
    for id in symbols.iter().flat_map(|s| s.provider_ids().iter().copied()) {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

/// Map a provider answer back onto the requested symbols.
///
/// For each symbol the first alias present in `table` wins. Symbols with no
/// alias in the table get no entry.
#[must_use]
pub fn resolve(symbols: &[Symbol], table: &QuoteTable) -> PriceResultSet {
    let mut result = PriceResultSet::new();
    for &symbol in symbols {
        let found = symbol
            .provider_ids()
            .iter()
            .find_map(|id| table.get(*id));
        if let Some(observation) = found {
            result.insert(symbol, *observation);
        }
    }
    result
}

/// Price lookup backed by a [`QuoteProvider`].
///
/// Holds no state between calls; concurrent lookups are independent.
pub struct PriceService<P> {
    provider: P,
    currencies: Vec<Currency>,
}

impl<P: QuoteProvider> PriceService<P> {
    /// Create a service quoting every supported currency.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            currencies: Currency::ALL.to_vec(),
        }
    }

    /// Fetch current prices for `symbols` with a single provider call.
    ///
    /// The result may be empty, or lack some symbols, without being an
    /// error. Provider failures surface as [`PriceError::Upstream`] and no
    /// partial result is kept. An empty selection is rejected with
    /// [`PriceError::InvalidSelection`] before any request is made.
    pub async fn fetch_prices(&self, symbols: &[Symbol]) -> Result<PriceResultSet, PriceError> {
        if symbols.is_empty() {
            return Err(PriceError::InvalidSelection);
        }

        let ids = provider_ids(symbols);
        debug!(
            provider = self.provider.provider_name(),
            symbols = symbols.len(),
            ids = ids.len(),
            "Fetching prices"
        );

        let table = self
            .provider
            .fetch_quotes(&ids, &self.currencies)
            .await
            .map_err(|e| {
                warn!(
                    provider = self.provider.provider_name(),
                    error = %e,
                    "Price fetch failed"
                );
                e
            })?;

        let result = resolve(symbols, &table);
        debug!(
            requested = symbols.len(),
            resolved = result.len(),
            "Prices resolved"
        );
        Ok(result)
    }

    /// Like [`fetch_prices`](Self::fetch_prices), but an answer with no data
    /// for any symbol is [`PriceError::EmptyResult`].
    pub async fn quote(&self, symbols: &[Symbol]) -> Result<PriceResultSet, PriceError> {
        let result = self.fetch_prices(symbols).await?;
        if result.is_empty() {
            return Err(PriceError::EmptyResult);
        }
        Ok(result)
    }
}
