//! Message handling for the Telegram bot.
//!
//! Independent of teloxide so the full command flow can be exercised
//! without a live bot session.

use tracing::{debug, info};

use super::command::{parse_command, CommandParseError, TelegramCommand};
use super::reply;
use crate::application::price::PriceService;
use crate::domain::symbol::{default_selection, normalize_selection, Symbol};
use crate::port::outbound::quote::QuoteProvider;

/// A reply to send back, and whether it should quote the user's message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub quote_request: bool,
}

impl Reply {
    fn answer(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quote_request: false,
        }
    }

    fn quoted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quote_request: true,
        }
    }
}

/// Process a message and return the reply, if any.
///
/// Returns `None` for plain text, for commands the bot does not serve and
/// for commands addressed to a bot other than `bot_username`.
pub async fn response_for_message<P: QuoteProvider>(
    text: &str,
    bot_username: &str,
    service: &PriceService<P>,
) -> Option<Reply> {
    match parse_command(text, bot_username) {
        Ok(TelegramCommand::Start | TelegramCommand::Help) => {
            Some(Reply::answer(reply::greeting()))
        }
        Ok(TelegramCommand::Price { args }) => {
            let symbols = selection_from_args(&args);
            Some(Reply::quoted(price_reply(&symbols, service).await))
        }
        Err(CommandParseError::NotACommand) => None,
        Err(CommandParseError::UnknownCommand(command)) => {
            debug!(command = %command, "Ignoring unsupported command");
            None
        }
        Err(CommandParseError::OtherBot(mention)) => {
            debug!(mention = %mention, "Ignoring command addressed to another bot");
            None
        }
    }
}

/// Symbols requested by `/price` arguments.
///
/// No arguments means every supported symbol; arguments that name nothing
/// supported yield an empty selection.
#[must_use]
pub fn selection_from_args(args: &[String]) -> Vec<Symbol> {
    if args.is_empty() {
        default_selection()
    } else {
        normalize_selection(args.iter().map(String::as_str))
    }
}

async fn price_reply<P: QuoteProvider>(symbols: &[Symbol], service: &PriceService<P>) -> String {
    if symbols.is_empty() {
        return reply::usage_hint().to_string();
    }

    match service.quote(symbols).await {
        Ok(prices) => {
            info!(
                requested = symbols.len(),
                resolved = prices.len(),
                "Answered price request"
            );
            reply::price_lines(symbols, &prices)
        }
        Err(err) => reply::error_reply(&err),
    }
}
