use std::process::ExitCode;

use clap::Parser;
use rmm_report::cli::{run, Cli};
use rmm_report::config::{ConfigError, EXIT_MISCONFIGURED};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing for the CLI.
    tracing_subscriber::fmt::init();
    tracing::info!("CLI application startup: tracing initialised, environment loaded");

    let cli = Cli::parse();
    tracing::info!("CLI arguments parsed, invoking run");
    match run(cli).await {
        Ok(()) => {
            tracing::info!("CLI completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) if e.downcast_ref::<ConfigError>().is_some() => {
            tracing::error!(error = %e, "Invalid configuration, aborting before any remote call");
            ExitCode::from(EXIT_MISCONFIGURED)
        }
        Err(e) => {
            tracing::error!(error = %e, "CLI exited with error");
            ExitCode::FAILURE
        }
    }
}
