//! Infrastructure configuration modules.

pub mod logging;
pub mod settings;
pub mod telegram;

pub use logging::{LogFormat, LoggingConfig};
pub use settings::Config;
pub use telegram::BotConfig;
