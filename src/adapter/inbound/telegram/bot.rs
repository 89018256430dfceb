//! Telegram long-polling loop.
//!
//! Requires the `telegram` feature to be enabled.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{BotCommand, ParseMode, ReplyParameters};
use tracing::{error, info, warn};

use super::command::bot_commands;
use super::handler::response_for_message;
use crate::application::price::PriceService;
use crate::infrastructure::config::telegram::BotConfig;
use crate::port::outbound::quote::QuoteProvider;

/// Run the bot until the polling loop stops (Ctrl-C or a fatal error).
///
/// Each incoming message is handled independently; a slow price lookup for
/// one chat does not hold up others. Fails only when the bot identity cannot
/// be fetched at startup.
pub async fn run<P>(
    config: BotConfig,
    service: PriceService<P>,
) -> Result<(), teloxide::RequestError>
where
    P: QuoteProvider + 'static,
{
    let bot = Bot::new(&config.bot_token);
    let service = Arc::new(service);

    let me = bot.get_me().await?;
    let username: Arc<str> = Arc::from(me.username());

    // Register commands with Telegram so they appear in the "/" menu
    if let Err(e) = register_bot_commands(&bot).await {
        warn!(error = %e, "Failed to register bot commands with Telegram");
    }

    info!(username = %username, "Telegram bot started");

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let service = Arc::clone(&service);
        let username = Arc::clone(&username);
        async move {
            let Some(text) = msg.text() else {
                return respond(());
            };

            if let Some(reply) = response_for_message(text, &username, &service).await {
                let mut request = bot
                    .send_message(msg.chat.id, reply.text)
                    .parse_mode(ParseMode::Html);
                if reply.quote_request {
                    request = request.reply_parameters(ReplyParameters::new(msg.id));
                }
                if let Err(e) = request.await {
                    error!(
                        chat_id = msg.chat.id.0,
                        error = %e,
                        "Failed to send Telegram reply"
                    );
                }
            }

            respond(())
        }
    })
    .await;

    info!("Telegram bot stopped");
    Ok(())
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
