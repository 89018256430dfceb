//! Telegram bot credentials.

use crate::error::ConfigError;

/// Environment variable holding the bot token.
pub const BOT_TOKEN_VAR: &str = "BOT_TOKEN";

/// Credentials for the Telegram bot session.
///
/// The token only ever comes from the environment (or a `.env` file loaded
/// into it), never from the config file.
#[derive(Clone)]
pub struct BotConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
}

impl BotConfig {
    /// Read the bot token from `BOT_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when the variable is unset or
    /// blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bot_token = std::env::var(BOT_TOKEN_VAR)
            .ok()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingField {
                field: BOT_TOKEN_VAR,
            })?;

        Ok(Self { bot_token })
    }
}

impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("bot_token", &"<redacted>")
            .finish()
    }
}
