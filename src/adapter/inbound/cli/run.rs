//! Handler for the `run` command.

use tracing::info;

use crate::error::Result;
use crate::infrastructure::config::{BotConfig, Config};

/// Execute the run command.
///
/// A missing `BOT_TOKEN` fails here, before any session is opened.
#[cfg(feature = "telegram")]
pub async fn execute(config: &Config) -> Result<()> {
    use crate::adapter::inbound::telegram::bot;
    use crate::adapter::outbound::coingecko::CoinGeckoClient;
    use crate::application::price::PriceService;

    let bot_config = BotConfig::from_env()?;
    let provider = CoinGeckoClient::from_config(&config.coingecko);
    info!(api_url = %provider.api_url(), "Using CoinGecko quote provider");

    bot::run(bot_config, PriceService::new(provider)).await?;
    Ok(())
}

/// Execute the run command.
#[cfg(not(feature = "telegram"))]
pub async fn execute(_config: &Config) -> Result<()> {
    BotConfig::from_env()?;
    info!("Built without the telegram feature; nothing to run");
    Err(crate::error::ConfigError::InvalidValue {
        field: "features",
        reason: "the bot runtime requires the `telegram` feature".to_string(),
    }
    .into())
}
