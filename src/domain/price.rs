//! Price observations and result sets.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use super::symbol::Symbol;

/// Quote currencies requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Usd,
    Rub,
}

impl Currency {
    /// Every currency quoted, in display order.
    pub const ALL: [Currency; 2] = [Currency::Usd, Currency::Rub];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Usd => "usd",
            Self::Rub => "rub",
        }
    }

    /// Prefix used when rendering an amount.
    #[must_use]
    pub const fn sign(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Rub => "₽",
        }
    }

    /// Comma-joined codes, as sent in the `vs_currencies` parameter.
    #[must_use]
    pub fn query_list(currencies: &[Currency]) -> String {
        currencies
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-currency price snapshot for one coin.
///
/// Either currency may be missing from a provider answer. Unknown fields are
/// ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct PriceObservation {
    #[serde(default)]
    pub usd: Option<f64>,
    #[serde(default)]
    pub rub: Option<f64>,
}

impl PriceObservation {
    #[must_use]
    pub const fn new(usd: f64, rub: f64) -> Self {
        Self {
            usd: Some(usd),
            rub: Some(rub),
        }
    }

    #[must_use]
    pub const fn get(&self, currency: Currency) -> Option<f64> {
        match currency {
            Currency::Usd => self.usd,
            Currency::Rub => self.rub,
        }
    }

    /// Amount for display, `0.0` when the provider omitted it.
    #[must_use]
    pub fn amount_or_zero(&self, currency: Currency) -> f64 {
        self.get(currency).unwrap_or(0.0)
    }

    /// True when no currency was quoted at all.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.usd.is_none() && self.rub.is_none()
    }
}

/// Parsed provider answer: provider identifier to observation.
pub type QuoteTable = HashMap<String, PriceObservation>;

/// Prices keyed by the symbol that was asked for.
///
/// A requested symbol with no provider data has no entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceResultSet {
    entries: HashMap<Symbol, PriceObservation>,
}

impl PriceResultSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: Symbol, observation: PriceObservation) {
        self.entries.insert(symbol, observation);
    }

    #[must_use]
    pub fn get(&self, symbol: Symbol) -> Option<&PriceObservation> {
        self.entries.get(&symbol)
    }

    #[must_use]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.entries.contains_key(&symbol)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Symbol, PriceObservation)> for PriceResultSet {
    fn from_iter<T: IntoIterator<Item = (Symbol, PriceObservation)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
