//! Telegram command parsing.

/// Supported Telegram commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelegramCommand {
    Start,
    Help,
    /// `/price` with its raw arguments, not yet normalized.
    Price { args: Vec<String> },
}

/// Parse error for Telegram command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
    /// Addressed to another bot (`/price@other_bot`).
    OtherBot(String),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
            Self::OtherBot(name) => write!(f, "command addressed to @{name}"),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a Telegram message into a bot command.
///
/// Commands are matched case-insensitively. A command carrying a mention
/// (`/price@coinradar_bot`) is only accepted when the mention names
/// `bot_username`; usernames compare case-insensitively, as Telegram does.
pub fn parse_command(
    text: &str,
    bot_username: &str,
) -> Result<TelegramCommand, CommandParseError> {
    let mut parts = text.split_whitespace();
    let Some(raw_command) = parts.next() else {
        return Err(CommandParseError::NotACommand);
    };
    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    let (command, mention) = match raw_command.split_once('@') {
        Some((head, mention)) => (head, Some(mention)),
        None => (raw_command, None),
    };
    if let Some(mention) = mention {
        if !mention.eq_ignore_ascii_case(bot_username.trim_start_matches('@')) {
            return Err(CommandParseError::OtherBot(mention.to_string()));
        }
    }
    let command = command.to_ascii_lowercase();

    match command.as_str() {
        "/start" => Ok(TelegramCommand::Start),
        "/help" => Ok(TelegramCommand::Help),
        "/price" => Ok(TelegramCommand::Price {
            args: parts.map(str::to_string).collect(),
        }),
        _ => Err(CommandParseError::UnknownCommand(command)),
    }
}

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("start", "Приветствие и список команд"),
        ("price", "Текущие цены BTC/ETH/TON"),
    ]
}
