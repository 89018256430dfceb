//! Command-line interface definitions.
//!
//! Defines the CLI structure for the coinradar application using `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Telegram bot relaying BTC/ETH/TON prices in USD and RUB
#[derive(Parser, Debug)]
#[command(name = "coinradar")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (defaults apply if it does not exist)
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level subcommands for the coinradar CLI.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the Telegram bot (default)
    Run,

    /// Print current prices once and exit
    Price {
        /// Symbols to quote (btc, eth, ton); all when omitted
        symbols: Vec<String>,
    },
}

impl Cli {
    /// The subcommand to execute, `run` when none was given.
    #[must_use]
    pub fn subcommand(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run)
    }
}
