//! Builders for quote tables.

use crate::domain::price::{PriceObservation, QuoteTable};

/// Build a quote table from `(provider_id, usd, rub)` rows.
pub fn quote_table(rows: &[(&str, f64, f64)]) -> QuoteTable {
    rows.iter()
        .map(|(id, usd, rub)| ((*id).to_string(), PriceObservation::new(*usd, *rub)))
        .collect()
}
