//! Handler for the `price` command.

use std::io::Write;

use crate::adapter::outbound::coingecko::CoinGeckoClient;
use crate::application::price::PriceService;
use crate::domain::money::format_observation;
use crate::domain::price::PriceResultSet;
use crate::domain::symbol::{default_selection, normalize_selection, Symbol};
use crate::error::{PriceError, Result};
use crate::infrastructure::config::Config;

/// Execute the price command: one lookup, plain-text lines on stdout.
pub async fn execute(config: &Config, args: &[String]) -> Result<()> {
    let symbols = if args.is_empty() {
        default_selection()
    } else {
        normalize_selection(args.iter().map(String::as_str))
    };
    if symbols.is_empty() {
        return Err(PriceError::InvalidSelection.into());
    }

    let service = PriceService::new(CoinGeckoClient::from_config(&config.coingecko));
    let prices = service.quote(&symbols).await?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", render_plain(&symbols, &prices))?;
    Ok(())
}

/// `BTC: $65,000.00 | ₽5,900,000.00` per symbol, in request order.
#[must_use]
pub fn render_plain(symbols: &[Symbol], prices: &PriceResultSet) -> String {
    symbols
        .iter()
        .map(|&symbol| match prices.get(symbol) {
            Some(observation) if !observation.is_blank() => {
                format!("{}: {}", symbol.ticker(), format_observation(observation))
            }
            _ => format!("{}: no data", symbol.ticker()),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
