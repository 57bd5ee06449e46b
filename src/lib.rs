//! stats_exporter library: daily issued-names export
//!
//! Exports one day of rows from the `issuedNames` table as a TSV file,
//! compresses it with `gzip` and copies it to a remote host with `scp`.
//!
//! # Example
//!
//! ```no_run
//! use stats_exporter::{run_export, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     db_connect: PathBuf::from("/etc/stats/dburl"),
//!     destination: "stats.example.net:/srv/stats".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_export(&config).await?;
//! println!("Delivered {} rows to {}", report.rows_written, report.destination);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. The stages never run concurrently,
//! so a current-thread runtime is enough.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;
mod run;
pub mod storage;
pub mod utils;
pub mod window;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use error_handling::{ErrorCategory, ExportError};
pub use run::{ExportReport, Exporter, Stage};
pub use storage::{IssuedNameRecord, SqlxConnector};
pub use utils::SystemProcessRunner;
pub use window::ExportWindow;

use anyhow::Result;

/// Runs the export against the real database and system tools.
///
/// # Errors
///
/// Returns the first stage failure, wrapped with the name of the stage.
pub async fn run_export(config: &Config) -> Result<ExportReport> {
    Exporter::new(SqlxConnector, SystemProcessRunner)
        .run(config)
        .await
}
