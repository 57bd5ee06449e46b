//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `stats_exporter` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Mapping a failed export to a non-zero exit status

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use stats_exporter::initialization::init_logger_with;
use stats_exporter::{run_export, Config, Opt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_export(&config).await {
        Ok(report) => {
            println!(
                "Exported {} row{} for {} to {} in {:.1}s",
                report.rows_written,
                if report.rows_written == 1 { "" } else { "s" },
                report.window,
                report.destination,
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("stats_exporter error: {:#}", e);
            process::exit(1);
        }
    }
}
