//! CLI glue for rmm-report: argument parsing, configuration loading and
//! orchestration of one run.
//!
//! All business logic (report building, pipeline, contracts) lives in the
//! `rmm-report-core` crate; this module is strictly command routing. The async
//! entrypoint [`run`] exists so integration tests can invoke the CLI
//! programmatically.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};

use rmm_report_core::directory::NinjaClient;
use rmm_report_core::pipeline;
use rmm_report_core::report::build_report;

use crate::config::Config;
use crate::publish::S3Publisher;

/// CLI for rmm-report: build a device-group CSV report and publish it.
#[derive(Parser)]
#[clap(
    name = "rmm-report",
    version,
    about = "Build a CSV report of an RMM device group and publish it to object storage"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the report and upload it to the configured bucket
    Run,
    /// Build the report and write it to a local file instead of uploading
    Preview {
        /// Path the CSV document is written to
        #[clap(long)]
        output: PathBuf,
    },
}

/// Extracted async CLI logic entrypoint for integration tests and main().
pub async fn run(cli: Cli) -> Result<()> {
    // Configuration is validated before any remote client exists; a
    // misconfigured run makes no network call.
    let config = Config::from_env()?;
    config.trace_loaded();

    let directory = NinjaClient::new(&config.base_url, &config.key_id, &config.secret);

    match cli.command {
        Commands::Run => {
            tracing::info!(command = "run", group = %config.device_group, "Starting report run");
            let publisher = S3Publisher::new_from_env(config.bucket.clone()).await;
            let response =
                pipeline::run(&directory, &publisher, &config.device_group, Utc::now()).await?;
            tracing::info!(
                command = "run",
                status = response.status_code,
                "Report run complete"
            );
            println!("{}", serde_json::to_string(&response)?);
            Ok(())
        }
        Commands::Preview { output } => {
            tracing::info!(command = "preview", group = %config.device_group, "Building report preview");
            let document = build_report(&directory, &config.device_group).await?;
            std::fs::write(&output, &document)?;
            tracing::info!(
                command = "preview",
                path = %output.display(),
                bytes = document.len(),
                "Report written locally"
            );
            Ok(())
        }
    }
}
