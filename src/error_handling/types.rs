//! Error type definitions.
//!
//! This module defines all error types used throughout the export pipeline.

use std::io;
use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::{Display, EnumIter as EnumIterMacro};
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Broad classes of export failures.
///
/// Every [`ExportError`] belongs to exactly one category. The category is what
/// operators see first in the fatal diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIterMacro)]
pub enum ErrorCategory {
    /// Bad or missing credential file, bad date flag
    Config,
    /// Store unreachable
    Connection,
    /// Malformed query or execution failure
    Query,
    /// Query succeeded but matched nothing
    NoResults,
    /// Row decode failure
    Scan,
    /// Output file creation or sink I/O failure
    Write,
    /// External compression tool failed
    Compression,
    /// External secure-copy tool failed
    Delivery,
}

/// Errors raised by the individual export stages.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The `--latestdate` value is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid date {value:?} (expected YYYY-MM-DD): {reason}")]
    InvalidDate {
        /// The rejected input
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// The credential file could not be read.
    #[error("Could not open database connection file {path:?}: {source}")]
    CredentialFile {
        /// Path given via `--dbConnect`
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The store could not be reached.
    #[error("Could not establish database connection: {0}")]
    Connection(#[source] sqlx::Error),

    /// The query failed to execute.
    #[error("Could not complete database query: {0}")]
    Query(#[source] sqlx::Error),

    /// The query succeeded but returned no rows.
    #[error("No results match query for notBefore in [{start}, {end})")]
    NoResults {
        /// Inclusive lower bound
        start: String,
        /// Exclusive upper bound
        end: String,
    },

    /// A result row could not be decoded into four string fields.
    #[error("Could not decode row {row}: {source}")]
    Scan {
        /// 1-based row number
        row: usize,
        /// Underlying decode error
        #[source]
        source: sqlx::Error,
    },

    /// The output file could not be created.
    #[error("Could not create results file {path:?}: {source}")]
    OutputFile {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Writing to the output sink failed.
    #[error("Could not write TSV data: {0}")]
    Write(#[from] io::Error),

    /// The compression tool failed or could not be started.
    #[error("Could not gzip result file {path:?}: {reason}. output: {output}")]
    Compression {
        /// File being compressed
        path: PathBuf,
        /// Exit status or spawn error
        reason: String,
        /// Combined stdout and stderr of the tool
        output: String,
    },

    /// The secure-copy tool failed or could not be started.
    #[error("Could not scp result file {path:?} to {destination:?}: {reason}. output: {output}")]
    Delivery {
        /// Compressed artifact path
        path: PathBuf,
        /// `host:path` destination
        destination: String,
        /// Exit status or spawn error
        reason: String,
        /// Combined stdout and stderr of the tool
        output: String,
    },
}

impl ExportError {
    /// Returns the taxonomy class of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExportError::InvalidDate { .. } | ExportError::CredentialFile { .. } => {
                ErrorCategory::Config
            }
            ExportError::Connection(_) => ErrorCategory::Connection,
            ExportError::Query(_) => ErrorCategory::Query,
            ExportError::NoResults { .. } => ErrorCategory::NoResults,
            ExportError::Scan { .. } => ErrorCategory::Scan,
            ExportError::OutputFile { .. } | ExportError::Write(_) => ErrorCategory::Write,
            ExportError::Compression { .. } => ErrorCategory::Compression,
            ExportError::Delivery { .. } => ErrorCategory::Delivery,
        }
    }
}
