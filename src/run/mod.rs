//! Export orchestration.
//!
//! Runs the stages strictly in order:
//! `ComputeWindow → OpenOutput → Query → Write → Compress → Deliver → Done`.
//! The first failure is wrapped with its stage and returned; nothing is
//! retried and partially written or compressed files are left in place.

mod stage;

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use log::{debug, info};

use crate::config::Config;
use crate::error_handling::ExportError;
use crate::export::{compress, deliver, write_tsv};
use crate::storage::{RecordQuerySource, StoreConnector};
use crate::utils::ProcessRunner;
use crate::window::ExportWindow;

pub use stage::Stage;

/// Results of a completed export.
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// Exported window
    pub window: ExportWindow,
    /// Number of TSV lines written
    pub rows_written: usize,
    /// Uncompressed results file
    pub output_path: PathBuf,
    /// Compressed artifact that was delivered
    pub artifact_path: PathBuf,
    /// Where the artifact was copied to
    pub destination: String,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Runs the export pipeline against an injected store and process runner.
///
/// # Example
///
/// ```no_run
/// use stats_exporter::{Config, Exporter, SqlxConnector, SystemProcessRunner};
/// use std::path::PathBuf;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     db_connect: PathBuf::from("/etc/stats/dburl"),
///     ..Default::default()
/// };
/// let report = Exporter::new(SqlxConnector, SystemProcessRunner)
///     .run(&config)
///     .await?;
/// println!("Exported {} rows", report.rows_written);
/// # Ok(())
/// # }
/// ```
pub struct Exporter<C, R> {
    connector: C,
    runner: R,
}

impl<C: StoreConnector, R: ProcessRunner> Exporter<C, R> {
    /// Builds an exporter from its two collaborators.
    pub fn new(connector: C, runner: R) -> Self {
        Self { connector, runner }
    }

    /// Exports the 24 hours before `--latestdate`, or before now.
    pub async fn run(&self, config: &Config) -> Result<ExportReport> {
        self.run_at(config, Local::now().naive_local()).await
    }

    /// Like [`Exporter::run`] with an explicit current time.
    pub async fn run_at(&self, config: &Config, now: NaiveDateTime) -> Result<ExportReport> {
        let start_time = Instant::now();

        enter(Stage::ComputeWindow);
        let window = ExportWindow::resolve(config.latest_date.as_deref(), now)
            .with_context(|| Stage::ComputeWindow.failure_context())?;
        info!("Exporting issued names for {window}");

        enter(Stage::OpenOutput);
        let output_path = config.output_dir.join(window.output_file_name());
        let output = create_output(&output_path)
            .with_context(|| Stage::OpenOutput.failure_context())?;

        enter(Stage::Query);
        let cursor = RecordQuerySource::new(&self.connector)
            .query(&config.db_connect, &window)
            .await
            .with_context(|| Stage::Query.failure_context())?;

        enter(Stage::Write);
        // The file is closed when write_tsv drops its writer
        let rows_written =
            write_tsv(cursor, output).with_context(|| Stage::Write.failure_context())?;
        info!("Wrote {rows_written} rows to {}", output_path.display());

        enter(Stage::Compress);
        let artifact_path = compress(&self.runner, &output_path)
            .await
            .with_context(|| Stage::Compress.failure_context())?;

        enter(Stage::Deliver);
        deliver(&self.runner, &output_path, &config.destination, &config.key)
            .await
            .with_context(|| Stage::Deliver.failure_context())?;

        enter(Stage::Done);
        Ok(ExportReport {
            window,
            rows_written,
            output_path,
            artifact_path,
            destination: config.destination.clone(),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}

fn enter(stage: Stage) {
    debug!("Entering stage {stage}");
}

/// Creates or truncates the results file, readable by the owner only.
fn create_output(path: &Path) -> Result<File, ExportError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path).map_err(|source| ExportError::OutputFile {
        path: path.to_path_buf(),
        source,
    })
}
