use clap::Parser;
use tracing::{error, info};

use coinradar::adapter::inbound::cli::command::{Cli, Commands};
use coinradar::adapter::inbound::cli::{price, run};
use coinradar::infrastructure::config::Config;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match Config::load_or_default(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();

    let result = match cli.subcommand() {
        Commands::Run => {
            info!("coinradar starting");
            let result = run::execute(&config).await;
            info!("coinradar stopped");
            result
        }
        Commands::Price { symbols } => price::execute(&config, &symbols).await,
    };

    if let Err(e) = result {
        error!(error = %e, "Fatal error");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
