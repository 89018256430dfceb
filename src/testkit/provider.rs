//! Mock [`QuoteProvider`] for testing.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::price::{Currency, QuoteTable};
use crate::error::PriceError;
use crate::port::outbound::quote::QuoteProvider;

/// One recorded provider call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub ids: Vec<String>,
    pub currencies: Vec<Currency>,
}

/// A provider that answers every call with the same scripted result and
/// records what it was asked for.
#[derive(Clone)]
pub struct ScriptedQuoteProvider {
    response: Result<QuoteTable, PriceError>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl ScriptedQuoteProvider {
    /// Answer every call with `table`.
    pub fn answering(table: QuoteTable) -> Self {
        Self {
            response: Ok(table),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fail every call with `error`.
    pub fn failing(error: PriceError) -> Self {
        Self {
            response: Err(error),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("lock provider calls").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("lock provider calls").len()
    }
}

#[async_trait]
impl QuoteProvider for ScriptedQuoteProvider {
    async fn fetch_quotes(
        &self,
        ids: &[&str],
        currencies: &[Currency],
    ) -> Result<QuoteTable, PriceError> {
        self.calls
            .lock()
            .expect("lock provider calls")
            .push(RecordedCall {
                ids: ids.iter().map(|id| (*id).to_string()).collect(),
                currencies: currencies.to_vec(),
            });
        self.response.clone()
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}
