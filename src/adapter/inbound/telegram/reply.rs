//! Reply texts for Telegram.
//!
//! All replies are sent with HTML parse mode.

use crate::domain::money::format_observation;
use crate::domain::price::PriceResultSet;
use crate::domain::symbol::Symbol;
use crate::error::PriceError;

/// Greeting returned by `/start` and `/help`.
#[must_use]
pub const fn greeting() -> &'static str {
    "Привет! Я покажу цены <b>BTC/ETH/TON</b> в <b>USD</b> и <b>RUB</b>\n\
    Команды:\n\
    • /price — текущие цены\n\
    • /price btc eth — выбрать тикеры (btc, eth, ton)"
}

/// Hint shown when `/price` names no supported symbol.
#[must_use]
pub const fn usage_hint() -> &'static str {
    "Укажи любые из: btc, eth, ton. Пример: <code>/price eth ton</code>"
}

/// Text shown when the provider answered with no usable prices.
#[must_use]
pub const fn prices_unavailable() -> &'static str {
    "Похоже, цены недоступны. Попробуй позже."
}

/// Text shown when the provider call failed.
#[must_use]
pub fn fetch_failed(error: &PriceError) -> String {
    format!(
        "Не удалось получить цены: {}. Попробуй позже.",
        escape_html(&error.to_string())
    )
}

/// Reply for a lookup error.
#[must_use]
pub fn error_reply(error: &PriceError) -> String {
    match error {
        PriceError::Upstream { .. } => fetch_failed(error),
        PriceError::EmptyResult => prices_unavailable().to_string(),
        PriceError::InvalidSelection => usage_hint().to_string(),
    }
}

/// One line per requested symbol, in request order.
///
/// Symbols without data (or with an answer carrying no currency) are marked
/// as such instead of failing the whole reply.
#[must_use]
pub fn price_lines(symbols: &[Symbol], prices: &PriceResultSet) -> String {
    symbols
        .iter()
        .map(|&symbol| match prices.get(symbol) {
            Some(observation) if !observation.is_blank() => format!(
                "• <b>{}</b>: {}",
                symbol.ticker(),
                format_observation(observation)
            ),
            _ => format!("• {}: нет данных", symbol.ticker()),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape text for Telegram HTML parse mode.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}
