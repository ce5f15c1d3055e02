use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::Cli;
use config::Config;
use error::CliError;

const DEFAULT_LOG_FILTER: &str = "mailplatform=warn,mpcli=warn";
const DEBUG_LOG_FILTER: &str = "mailplatform=debug,mpcli=debug";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing(cli.debug);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Log to stderr so stdout carries only the JSON response.
fn init_tracing(debug: bool) {
    let default_filter = if debug {
        DEBUG_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = Config::from_env()?;
    debug!(
        base_url = %config.base_url,
        timeout_secs = config.timeout_secs,
        max_attempts = config.max_attempts,
        "Loaded configuration"
    );

    let client = config.client(cli.debug)?;
    let out = commands::execute(&client, cli.command).await?;
    output::print_json(&out)
}
