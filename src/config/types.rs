//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_DESTINATION, DEFAULT_IDENTITY_KEY, DEFAULT_OUTPUT_DIR};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// The export flags use camel-case names (`--dbConnect`, `--latestdate`).
///
/// # Examples
///
/// ```bash
/// # Export yesterday's issued names
/// stats_exporter --dbConnect /etc/stats/dburl
///
/// # Export the day before 2020-08-21 to a named host
/// stats_exporter --dbConnect /etc/stats/dburl --latestdate 2020-08-21 \
///     --destination stats.example.net:/srv/stats --key /etc/stats/id_ed25519
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "stats_exporter",
    about = "Exports a day of issued names as a gzipped TSV file and copies it to a remote host."
)]
pub struct Opt {
    /// Path to the file holding the database connection URL
    #[arg(long = "dbConnect", value_parser)]
    pub db_connect: PathBuf,

    /// Location to scp the gzipped TSV result file to
    #[arg(long, default_value = DEFAULT_DESTINATION)]
    pub destination: String,

    /// Identity key for scp
    #[arg(long, value_parser, default_value = DEFAULT_IDENTITY_KEY)]
    pub key: PathBuf,

    /// Latest date to export data for (YYYY-MM-DD).
    ///
    /// Exports the full day prior to this date. Defaults to today.
    #[arg(long = "latestdate")]
    pub latest_date: Option<String>,

    /// Directory the results file is written to
    #[arg(long, value_parser, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use stats_exporter::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     db_connect: PathBuf::from("/etc/stats/dburl"),
///     latest_date: Some("2020-08-21".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the credential file
    pub db_connect: PathBuf,

    /// `host:path` destination for scp
    pub destination: String,

    /// SSH identity file
    pub key: PathBuf,

    /// Exclusive upper bound date; `None` means now
    pub latest_date: Option<String>,

    /// Directory for the results file
    pub output_dir: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_connect: PathBuf::new(),
            destination: DEFAULT_DESTINATION.to_string(),
            key: PathBuf::from(DEFAULT_IDENTITY_KEY),
            latest_date: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            db_connect: opt.db_connect,
            destination: opt.destination,
            key: opt.key,
            // An empty flag value means "not given"
            latest_date: opt.latest_date.filter(|d| !d.is_empty()),
            output_dir: opt.output_dir,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
