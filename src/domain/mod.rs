//! Exchange-agnostic domain types.
//!
//! - [`symbol`] - Supported coins and their provider aliases
//! - [`price`] - Currencies, observations and result sets
//! - [`money`] - Amount formatting

pub mod money;
pub mod price;
pub mod symbol;

pub use price::{Currency, PriceObservation, PriceResultSet, QuoteTable};
pub use symbol::Symbol;
